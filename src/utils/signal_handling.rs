//! Process-wide flag raised on SIGINT/SIGTERM. Long running searches poll
//! [`received_ctrl_c`] and stop descending once it is set, keeping the best solution found so far.

use std::sync::{
    Once,
    atomic::{AtomicBool, Ordering},
};

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);
static INSTALL_HANDLER: Once = Once::new();

/// Installs the handler. Calling it more than once is harmless.
pub fn initialize() {
    INSTALL_HANDLER.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {
            RECEIVED_CTRL_C.store(true, Ordering::Relaxed);
        }) {
            log::warn!("Cannot install signal handler: {e}");
        }
    });
}

pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::Relaxed)
}
