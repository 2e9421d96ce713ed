//! Borrowed view over a single VCF data line.

use crate::error::{ConvertError, Result};
use memchr::memchr_iter;

pub const CHROM: usize = 0;
pub const POS: usize = 1;
pub const ID: usize = 2;
pub const REF: usize = 3;
pub const ALT: usize = 4;
pub const INFO: usize = 7;

/// Number of fixed VCF columns (CHROM through FORMAT).
pub const FIXED_COLUMNS: usize = 9;

/// A tab-split VCF data line.
///
/// Columns are `CHROM POS ID REF ALT QUAL FILTER INFO [FORMAT SAMPLE...]`;
/// POS is 1-based. Only the first eight are required.
#[derive(Debug, Clone)]
pub struct VcfRecord<'a> {
    fields: Vec<&'a str>,
    line_number: usize,
}

impl<'a> VcfRecord<'a> {
    /// Split a line (without its trailing newline) into columns.
    pub fn parse(line: &'a str, line_number: usize) -> Result<Self> {
        let mut fields = Vec::with_capacity(16);
        let mut start = 0;
        for tab in memchr_iter(b'\t', line.as_bytes()) {
            fields.push(&line[start..tab]);
            start = tab + 1;
        }
        fields.push(&line[start..]);

        if fields.len() <= INFO {
            return Err(ConvertError::TooFewFields {
                line: line_number,
                found: fields.len(),
            });
        }

        Ok(Self {
            fields,
            line_number,
        })
    }

    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[inline]
    pub fn chrom(&self) -> &'a str {
        self.fields[CHROM]
    }

    #[inline]
    pub fn id(&self) -> &'a str {
        self.fields[ID]
    }

    #[inline]
    pub fn ref_allele(&self) -> &'a str {
        self.fields[REF]
    }

    #[inline]
    pub fn alt(&self) -> &'a str {
        self.fields[ALT]
    }

    #[inline]
    pub fn info(&self) -> &'a str {
        self.fields[INFO]
    }

    /// 1-based position.
    pub fn pos(&self) -> Result<u64> {
        let raw = self.fields[POS];
        raw.parse().map_err(|_| ConvertError::InvalidNumber {
            line: self.line_number,
            field: "POS",
            value: raw.to_string(),
        })
    }

    /// Columns from REF onward, copied unchanged into every output row.
    #[inline]
    pub fn payload(&self) -> &[&'a str] {
        &self.fields[REF..]
    }

    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }
}
