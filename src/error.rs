use thiserror::Error;

/// Rejected insert: the key is already stored. The tree is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("duplicate key")]
pub struct DuplicateKeyError;

/// Rejected delete: the key is not stored (or the tree is empty). The tree is
/// left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyNotFoundError;
