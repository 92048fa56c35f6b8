use core::fmt;
use core::slice;

use crate::error::{CollectionError, Result};

/// A fixed-capacity array with shifting insert and delete.
///
/// # Behavior
/// * **Storage:** Backed by `heapless::Vec<T, N>`; the capacity `N` is fixed
///   at the type level and never grows.
/// * **Layout:** Live elements always occupy indices `[0, len)` with no gaps;
///   inserting in the middle shifts the suffix right, deleting shifts it left.
/// * **Errors:** `get`/`set`/`delete` fail with [`CollectionError::OutOfBounds`]
///   for an index outside `[0, len)`; `insert` additionally fails with
///   [`CollectionError::CapacityExceeded`] when all `N` slots are occupied.
///
/// # Example
///
/// ```rust
/// use classic_collections::FixedArray;
///
/// let mut arr: FixedArray<i32, 5> = FixedArray::new();
/// arr.insert(0, 5).unwrap();
/// arr.insert(1, 10).unwrap();
/// arr.insert(1, 7).unwrap();
/// assert_eq!(arr.as_slice(), &[5, 7, 10]);
///
/// arr.delete(0).unwrap();
/// assert_eq!(arr.as_slice(), &[7, 10]);
/// assert_eq!(arr.len(), 2);
/// ```
pub struct FixedArray<T, const N: usize> {
    items: heapless::Vec<T, N>,
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Creates an empty array with capacity `N`.
    pub fn new() -> Self {
        Self {
            items: heapless::Vec::new(),
        }
    }

    // --- Inspection ---

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` when every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == N
    }

    /// Returns the fixed capacity `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    // --- Access ---

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(CollectionError::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CollectionError::OutOfBounds { index, len })
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    // --- Mutation ---

    /// Inserts `value` at `index`, shifting the elements at `[index, len)`
    /// one slot right. `index == len` appends.
    ///
    /// The index range is validated before capacity, so an out-of-range
    /// insert on a full array reports `OutOfBounds`, not `CapacityExceeded`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.items.len() {
            return Err(CollectionError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.items
            .insert(index, value)
            .map_err(|_| CollectionError::CapacityExceeded { capacity: N })
    }

    /// Removes and returns the element at `index`, shifting the elements at
    /// `(index, len)` one slot left.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(CollectionError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
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

impl<T: PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_insert_shifts_right() {
        let mut arr: FixedArray<i32, 5> = FixedArray::new();
        arr.insert(0, 5).unwrap();
        arr.insert(1, 10).unwrap();
        arr.insert(1, 7).unwrap();
        assert_eq!(arr.as_slice(), &[5, 7, 10]);
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_array_delete_shifts_left() {
        let mut arr: FixedArray<i32, 5> = FixedArray::new();
        for (i, v) in [5, 7, 10].into_iter().enumerate() {
            arr.insert(i, v).unwrap();
        }
        assert_eq!(arr.delete(0), Ok(5));
        assert_eq!(arr.as_slice(), &[7, 10]);
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn test_array_get_set() {
        let mut arr: FixedArray<i32, 4> = FixedArray::new();
        arr.insert(0, 1).unwrap();
        arr.insert(1, 2).unwrap();

        assert_eq!(arr.get(1), Ok(&2));
        assert_eq!(arr.set(1, 15), Ok(2));
        assert_eq!(arr.get(1), Ok(&15));
        assert_eq!(
            arr.get(2),
            Err(CollectionError::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            arr.set(9, 0),
            Err(CollectionError::OutOfBounds { index: 9, len: 2 })
        );
    }

    #[test]
    fn test_array_insert_full_fails_without_mutation() {
        let mut arr: FixedArray<i32, 3> = FixedArray::new();
        for i in 0..3 {
            arr.insert(i, i as i32).unwrap();
        }
        assert!(arr.is_full());
        assert_eq!(
            arr.insert(1, 99),
            Err(CollectionError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(arr.as_slice(), &[0, 1, 2]);
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_array_bounds_checked_before_capacity() {
        let mut arr: FixedArray<i32, 2> = FixedArray::new();
        arr.insert(0, 1).unwrap();
        arr.insert(1, 2).unwrap();

        // Index 5 is invalid regardless of the array being full.
        assert_eq!(
            arr.insert(5, 3),
            Err(CollectionError::OutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_array_delete_out_of_bounds() {
        let mut arr: FixedArray<i32, 2> = FixedArray::new();
        assert_eq!(
            arr.delete(0),
            Err(CollectionError::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_array_display() {
        let mut arr: FixedArray<i32, 4> = FixedArray::new();
        assert_eq!(arr.to_string(), "[]");
        arr.insert(0, 1).unwrap();
        arr.insert(1, 2).unwrap();
        assert_eq!(arr.to_string(), "[1, 2]");
    }
}
