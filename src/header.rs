//! Line routing and VCF to BED header translation.

use crate::vcf::FIXED_COLUMNS;

/// Replacement for the VCF `##fileformat=` line.
pub const BED_FILEFORMAT: &str = "##fileformat=BEDv0.2";

/// Fixed columns of the emitted BED header, before sample names.
pub const BED_COLUMNS: [&str; 10] = [
    "#CHROM",
    "POS_START",
    "POS_END",
    "ID",
    "REF",
    "ALT",
    "QUAL",
    "FILTER",
    "INFO",
    "FORMAT",
];

const FILEFORMAT_PREFIX: &str = "##fileformat=";

/// Kind of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `##fileformat=...`
    FileFormat,
    /// Any other `##` meta line, passed through verbatim.
    Meta,
    /// The single-`#` column header line.
    ColumnHeader,
    /// A variant record.
    Data,
    /// An empty line.
    Blank,
}

impl LineKind {
    #[inline]
    pub fn of(line: &str) -> Self {
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with(FILEFORMAT_PREFIX) {
            Self::FileFormat
        } else if line.starts_with("##") {
            Self::Meta
        } else if line.starts_with('#') {
            Self::ColumnHeader
        } else {
            Self::Data
        }
    }
}

/// Rebuild the column header: BED fixed columns followed by the VCF sample names.
pub fn translate_column_header(line: &str) -> String {
    let mut header = BED_COLUMNS.join("\t");
    for sample in line.split('\t').skip(FIXED_COLUMNS) {
        header.push('\t');
        header.push_str(sample);
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of("##fileformat=VCFv4.2"), LineKind::FileFormat);
        assert_eq!(LineKind::of("##INFO=<ID=END,Number=1>"), LineKind::Meta);
        assert_eq!(LineKind::of("#CHROM\tPOS"), LineKind::ColumnHeader);
        assert_eq!(LineKind::of("#"), LineKind::ColumnHeader);
        assert_eq!(LineKind::of("chr1\t100"), LineKind::Data);
        assert_eq!(LineKind::of(""), LineKind::Blank);
    }

    #[test]
    fn test_translate_with_samples() {
        let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2";
        assert_eq!(
            translate_column_header(vcf),
            "#CHROM\tPOS_START\tPOS_END\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2"
        );
    }

    #[test]
    fn test_translate_sites_only() {
        let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO";
        assert_eq!(
            translate_column_header(vcf),
            "#CHROM\tPOS_START\tPOS_END\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT"
        );
    }
}
