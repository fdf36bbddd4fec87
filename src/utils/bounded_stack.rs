/// LIFO buffer whose capacity is fixed at construction. The buffer is allocated once and
/// never reallocates; pushing onto a full stack is rejected rather than growing it.
///
/// # Example
/// ```
/// use tsp::utils::BoundedStack;
/// let mut stack = BoundedStack::new(2);
/// assert!(stack.push(4u32));
/// assert!(stack.push(2));
/// assert!(!stack.push(1));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.peek(), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedStack<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: Copy> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Places `value` on top of the stack. Returns *false* and leaves the stack untouched if
    /// it is already full.
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes and returns the top element or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom (oldest) to the top (newest) element
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    /// Overwrites this stack with the contents of `other`, preserving their order.
    /// ** Panics if `other` holds more elements than this stack can take **
    pub fn copy_from(&mut self, other: &Self) {
        assert!(
            other.len() <= self.capacity,
            "cannot copy {} elements into a stack of capacity {}",
            other.len(),
            self.capacity
        );

        self.items.clear();
        for value in other.iter() {
            let pushed = self.push(value);
            debug_assert!(pushed);
        }
    }
}
