//! Abstractions for limit/offset pagination.

/// Limit/offset slice of a list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slice {
    /// Maximum number of items to return.
    limit: usize,

    /// Number of items to skip.
    offset: usize,
}

impl Slice {
    /// Default [`limit`] applied when none is requested.
    ///
    /// [`limit`]: Slice::limit
    pub const DEFAULT_LIMIT: usize = 20;

    /// Maximum [`limit`] a caller may request.
    ///
    /// [`limit`]: Slice::limit
    pub const MAX_LIMIT: usize = 100;

    /// Creates a new [`Slice`], clamping the requested `limit` into the
    /// `1..=`[`MAX_LIMIT`] range and defaulting it to [`DEFAULT_LIMIT`] when
    /// absent.
    ///
    /// [`DEFAULT_LIMIT`]: Slice::DEFAULT_LIMIT
    /// [`MAX_LIMIT`]: Slice::MAX_LIMIT
    #[must_use]
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    /// Returns the limit of this [`Slice`].
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the offset of this [`Slice`].
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod spec {
    use super::Slice;

    #[test]
    fn defaults() {
        let slice = Slice::new(None, None);
        assert_eq!(slice.limit(), Slice::DEFAULT_LIMIT);
        assert_eq!(slice.offset(), 0);
    }

    #[test]
    fn clamps_limit() {
        assert_eq!(Slice::new(Some(0), None).limit(), 1);
        assert_eq!(Slice::new(Some(7), None).limit(), 7);
        assert_eq!(Slice::new(Some(100_000), None).limit(), Slice::MAX_LIMIT);
    }

    #[test]
    fn keeps_offset() {
        assert_eq!(Slice::new(None, Some(40)).offset(), 40);
    }
}
