use core::fmt;
use core::slice;

/// A trait generalizing LIFO containers.
///
/// Implemented for [`Stack`] and for `Vec<T>`, so code written against
/// `AnyStack` can run on either without conversion.
pub trait AnyStack<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
    fn clear(&mut self);
}

impl<T> AnyStack<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.last()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A LIFO stack with dynamic capacity.
///
/// # Behavior
/// * **Order:** The last value pushed is the first value popped.
/// * **Emptiness:** `pop`/`peek` on an empty stack return `None`; emptiness
///   is a normal outcome, never an error.
/// * **Complexity:** `push`, `pop`, and `peek` are O(1) amortized.
///
/// # Example
///
/// ```rust
/// use classic_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the stack from bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    // --- Mutation ---

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> AnyStack<T> for Stack<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Renders bottom-to-top, so the rightmost value is the top.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
