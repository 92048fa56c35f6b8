use thiserror::Error;

/// Errors produced by fixed-capacity containers.
///
/// Only bounds and capacity violations are errors in this crate. Popping an
/// empty stack, dequeuing an empty queue, or deleting a value that is not
/// present are all normal outcomes and are reported through `Option`/`bool`
/// return values instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Index out of bounds access.
    #[error("index out of bounds: index {index}, len {len}")]
    OutOfBounds {
        /// The invalid index.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },

    /// Insertion into a container whose fixed capacity is exhausted.
    #[error("capacity exceeded: capacity {capacity}")]
    CapacityExceeded {
        /// The fixed capacity of the container.
        capacity: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;
