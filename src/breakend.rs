//! Breakend mate parsing and orientation inference.
//!
//! A BND ALT allele names its mate locus in bracket notation, e.g.
//! `N[chr2:3000[`, `]chr2:3000]N`, `[chr2:3000[N` or `N]chr2:3000]`.
//! The position and direction of the brackets, together with whether the
//! mate lies up- or downstream, give the rearrangement orientation.

use crate::error::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Mates further apart than this are `DISTANT`; at or below, `LOCAL`.
pub const DISTANCE_THRESHOLD: u64 = 1_000_000;

static MATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // First bracketed token: [chrom:pos[ or ]chrom:pos]
    Regex::new(r"[\[\]]([^\[\]]*)[\[\]]").unwrap()
});

/// Mate locus named by a BND ALT allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MateLocus<'a> {
    pub chrom: &'a str,
    /// 1-based position of the mate.
    pub pos: u64,
}

impl<'a> MateLocus<'a> {
    /// Extract the mate locus from an ALT allele.
    pub fn parse(alt: &'a str, line: usize) -> Result<Self> {
        let invalid = || ConvertError::InvalidBreakend {
            line,
            alt: alt.to_string(),
        };

        let token = MATE_PATTERN
            .captures(alt)
            .and_then(|caps| caps.get(1))
            .ok_or_else(invalid)?
            .as_str();
        let (chrom, pos) = token.rsplit_once(':').ok_or_else(invalid)?;
        let pos = pos.parse().map_err(|_| ConvertError::InvalidNumber {
            line,
            field: "ALT mate position",
            value: pos.to_string(),
        })?;

        Ok(Self { chrom, pos })
    }
}

/// Topological relationship between a breakend and its mate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakendOrientation {
    Inv,
    Del,
    Dup,
}

impl BreakendOrientation {
    /// Infer orientation from the ALT bracket layout.
    ///
    /// | ALT shape   | orientation                 |
    /// |-------------|-----------------------------|
    /// | `[p[t`      | INV                         |
    /// | `]p]t`      | DEL if pos > mate, else DUP |
    /// | `t[p[`      | DUP if pos > mate, else DEL |
    /// | `t]p]`      | INV                         |
    ///
    /// Returns `None` when no bracket sits at either end of the allele.
    pub fn infer(alt: &str, pos: u64, mate_pos: u64) -> Option<Self> {
        let upstream_mate = pos > mate_pos;
        if alt.starts_with('[') {
            Some(Self::Inv)
        } else if alt.starts_with(']') {
            Some(if upstream_mate { Self::Del } else { Self::Dup })
        } else if alt.ends_with('[') {
            Some(if upstream_mate { Self::Dup } else { Self::Del })
        } else if alt.ends_with(']') {
            Some(Self::Inv)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inv => "INV",
            Self::Del => "DEL",
            Self::Dup => "DUP",
        }
    }
}

impl fmt::Display for BreakendOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category written to the `BND_DETAIL` INFO key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakendDetail {
    Inter,
    Local(BreakendOrientation),
    Distant(BreakendOrientation),
}

impl BreakendDetail {
    /// Classify an intrachromosomal breakend by mate distance.
    #[inline]
    pub fn from_distance(distance: u64, orientation: BreakendOrientation) -> Self {
        if distance > DISTANCE_THRESHOLD {
            Self::Distant(orientation)
        } else {
            Self::Local(orientation)
        }
    }
}

impl fmt::Display for BreakendDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inter => f.write_str("INTER_BND"),
            Self::Local(o) => write!(f, "LOCAL_BND_{}", o),
            Self::Distant(o) => write!(f, "DISTANT_BND_{}", o),
        }
    }
}

/// Span and detail derived for a breakend in span mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakendSpan {
    pub detail: BreakendDetail,
    /// `(pos, mate_pos)` before normalization; `None` for interchromosomal mates.
    pub endpoints: Option<(u64, u64)>,
}

impl BreakendSpan {
    /// Resolve the mate of a breakend at `chrom:pos` with allele `alt`.
    pub fn resolve(chrom: &str, pos: u64, alt: &str, line: usize) -> Result<Self> {
        let mate = MateLocus::parse(alt, line)?;

        if chrom != mate.chrom {
            return Ok(Self {
                detail: BreakendDetail::Inter,
                endpoints: None,
            });
        }

        let orientation =
            BreakendOrientation::infer(alt, pos, mate.pos).ok_or_else(|| {
                ConvertError::InvalidBreakend {
                    line,
                    alt: alt.to_string(),
                }
            })?;
        let distance = pos.abs_diff(mate.pos);

        Ok(Self {
            detail: BreakendDetail::from_distance(distance, orientation),
            endpoints: Some((pos, mate.pos)),
        })
    }
}
