use crate::Error;
use ::core::{fmt, num::NonZeroUsize};

/// Length of the sliding character window, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NgramSize(NonZeroUsize);

impl NgramSize {
    pub const UNI: Self = Self(NonZeroUsize::MIN);
    pub const BI: Self = Self(NonZeroUsize::MIN.saturating_add(1));
    pub const TRI: Self = Self(NonZeroUsize::MIN.saturating_add(2));

    #[inline]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Size of ngrams holding a `context` chars long prefix and the char following it
    #[inline]
    pub const fn with_context(context: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(context))
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Length of the context preceding the predicted char
    #[inline(always)]
    pub const fn context(self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for NgramSize {
    type Error = Error;

    #[inline]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(Error::InvalidNgramSize(n))
    }
}

impl From<NgramSize> for usize {
    #[inline(always)]
    fn from(size: NgramSize) -> Self {
        size.get()
    }
}

impl fmt::Display for NgramSize {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
