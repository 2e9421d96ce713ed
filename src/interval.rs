//! BED interval emitted for a VCF record.

use std::fmt;

/// A named genomic interval.
/// Uses 0-based, half-open coordinates (BED format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BedInterval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub name: String,
}

impl BedInterval {
    /// Create a new interval.
    #[inline]
    pub fn new(chrom: impl Into<String>, start: u64, end: u64, name: impl Into<String>) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
        }
    }

    /// Create an interval from two endpoints given in either order.
    #[inline]
    pub fn spanning(chrom: impl Into<String>, a: u64, b: u64, name: impl Into<String>) -> Self {
        Self::new(chrom, a.min(b), a.max(b), name)
    }

    /// Returns the length of the interval.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the interval has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for BedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.chrom, self.start, self.end, self.name)
    }
}
