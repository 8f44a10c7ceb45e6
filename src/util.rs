#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Nesting guard shared by the text parser and the binary reader.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Depth {
    current: usize,
    max: usize,
}

impl Depth {
    #[inline]
    pub(crate) fn new(max: usize) -> Self {
        Self { current: 0, max }
    }

    /// Returns the deeper level, or `None` once the limit would be exceeded.
    #[inline]
    pub(crate) fn enter(self) -> Option<Self> {
        if self.current >= self.max {
            cold_path();
            None
        } else {
            Some(Self {
                current: self.current + 1,
                max: self.max,
            })
        }
    }

    #[inline]
    pub(crate) fn max(self) -> usize {
        self.max
    }
}
