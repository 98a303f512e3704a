use thiserror::Error;

/// Errors raised by the positional operations of a [`List`](crate::List).
///
/// Both variants carry the rejected index and the length of the list at the
/// time of the call. The list is never modified when one of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// Raised by [`get`], [`get_mut`] and [`remove`] when `index < 0` or
    /// `index >= len`.
    ///
    /// [`get`]: crate::List::get
    /// [`get_mut`]: crate::List::get_mut
    /// [`remove`]: crate::List::remove
    #[error("index out of range [{index}] with length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// Raised by [`insert`](crate::List::insert) when `index < 0` or
    /// `index > len`.
    #[error("list bounds out of range [{index}:{len}]")]
    ListBounds { index: isize, len: usize },
}

impl ListError {
    /// The index that was rejected.
    pub fn index(&self) -> isize {
        match *self {
            ListError::IndexOutOfRange { index, .. } | ListError::ListBounds { index, .. } => index,
        }
    }

    /// The length of the list when the index was rejected.
    pub fn list_len(&self) -> usize {
        match *self {
            ListError::IndexOutOfRange { len, .. } | ListError::ListBounds { len, .. } => len,
        }
    }
}
