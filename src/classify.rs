//! Per-record variant classification and interval derivation.
//!
//! Every data line falls into exactly one [`VariantCategory`], and each
//! category has its own rule for turning the 1-based VCF position into
//! 0-based half-open BED intervals.

use crate::breakend::BreakendSpan;
use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::info::{self, InfoMap, InfoValue};
use crate::interval::BedInterval;
use crate::vcf::VcfRecord;
use log::{debug, warn};
use std::borrow::Cow;

/// How a record is turned into BED rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantCategory {
    /// No SVTYPE: SNVs, small indels. Spans the REF allele.
    Point,
    /// SVTYPE=BND.
    Breakend,
    /// SVTYPE=INV in multi-line mode: one marker per breakpoint.
    InversionPair,
    /// Any other structural variant, spanning to END when present.
    Spanning,
}

impl VariantCategory {
    pub fn of(info: &InfoMap<'_>, options: &ConvertOptions) -> Self {
        match info.get(info::SVTYPE) {
            None => Self::Point,
            Some(InfoValue::Value("BND")) => Self::Breakend,
            Some(InfoValue::Value("INV")) if options.inv_multi => Self::InversionPair,
            Some(_) => Self::Spanning,
        }
    }
}

/// Intervals derived from one record, plus the INFO text to emit with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub category: VariantCategory,
    /// One interval, or two for [`VariantCategory::InversionPair`].
    pub intervals: Vec<BedInterval>,
    /// Borrowed from the record unless `BND_DETAIL` was appended.
    pub info: Cow<'a, str>,
}

/// Classify a record and derive its BED intervals.
pub fn classify_record<'a>(
    record: &VcfRecord<'a>,
    options: &ConvertOptions,
) -> Result<Classified<'a>> {
    let info = InfoMap::parse(record.info());
    let category = VariantCategory::of(&info, options);
    let line = record.line_number();
    let chrom = record.chrom();
    let pos = record.pos()?;

    let mut info_text = Cow::Borrowed(record.info());

    let intervals = match category {
        VariantCategory::Point => {
            let start = zero_based(pos, "POS", line)?;
            let end = offset(start, record.ref_allele().len() as u64, "POS", line)?;
            vec![BedInterval::new(chrom, start, end, record.id())]
        }
        VariantCategory::Breakend => {
            let name = breakend_name(record, &info, options)?;
            let marker = BedInterval::new(chrom, zero_based(pos, "POS", line)?, pos, name);

            let interval = if options.bnd_span {
                let span = BreakendSpan::resolve(chrom, pos, record.alt(), line)?;
                debug!("line {}: {} at {}:{} is {}", line, record.id(), chrom, pos, span.detail);

                if info.contains(info::BND_DETAIL) {
                    warn!("line {}: record already has {}, appending another", line, info::BND_DETAIL);
                }
                info_text = Cow::Owned(format!(
                    "{};{}={}",
                    record.info(),
                    info::BND_DETAIL,
                    span.detail
                ));

                match span.endpoints {
                    Some((a, b)) => BedInterval::spanning(chrom, a, b, marker.name),
                    None => marker,
                }
            } else {
                marker
            };
            vec![interval]
        }
        VariantCategory::InversionPair => {
            let end = info
                .position(info::END, line)?
                .ok_or(ConvertError::MissingInfo {
                    line,
                    key: info::END,
                })?;
            vec![
                BedInterval::new(chrom, pos, offset(pos, 1, "POS", line)?, record.id()),
                BedInterval::new(chrom, zero_based(end, "END", line)?, end, record.id()),
            ]
        }
        VariantCategory::Spanning => {
            // END is 1-based inclusive, so [POS, END) is already the 0-based half-open span.
            let interval = match info.position(info::END, line)? {
                Some(end) => BedInterval::new(chrom, pos, end, record.id()),
                None => BedInterval::new(chrom, zero_based(pos, "POS", line)?, pos, record.id()),
            };
            vec![interval]
        }
    };

    Ok(Classified {
        category,
        intervals,
        info: info_text,
    })
}

fn breakend_name<'a>(
    record: &VcfRecord<'a>,
    info: &InfoMap<'a>,
    options: &ConvertOptions,
) -> Result<&'a str> {
    if options.event_id {
        return info.require(info::EVENT, record.line_number());
    }
    Ok(record.id())
}

#[inline]
fn offset(pos: u64, by: u64, field: &'static str, line: usize) -> Result<u64> {
    pos.checked_add(by).ok_or(ConvertError::InvalidNumber {
        line,
        field,
        value: pos.to_string(),
    })
}

#[inline]
fn zero_based(pos: u64, field: &'static str, line: usize) -> Result<u64> {
    pos.checked_sub(1).ok_or(ConvertError::InvalidNumber {
        line,
        field,
        value: pos.to_string(),
    })
}
