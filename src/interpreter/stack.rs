/// Signal returned when popping or peeking an empty [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStack;

impl std::fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stack is empty")
    }
}

impl std::error::Error for EmptyStack {}

/// A growable last-in-first-out container.
///
/// Both the parser's operator scratch space and the executor's value stack
/// are instances of this type. Popping or peeking an empty stack always
/// reports [`EmptyStack`]; there is no default value fallback.
///
/// # Example
/// ```
/// use rpnexpr::interpreter::stack::{EmptyStack, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`EmptyStack`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.items.pop().ok_or(EmptyStack)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyStack`] when there is nothing to inspect.
    pub fn peek(&self) -> Result<&T, EmptyStack> {
        self.items.last().ok_or(EmptyStack)
    }

    /// Number of elements currently on the stack.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes every value in order; the last one ends up on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
