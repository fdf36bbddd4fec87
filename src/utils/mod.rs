pub mod bounded_stack;
pub mod path;
pub mod signal_handling;

pub use bounded_stack::BoundedStack;
pub use path::{Path, PathOnGraph};
