//! VCF to BED conversion command.
//!
//! Reads a VCF stream line by line, translates the header, and writes one
//! or two BED rows per variant record in input order.

use crate::classify::{classify_record, VariantCategory};
use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::header::{translate_column_header, LineKind, BED_FILEFORMAT};
use crate::streaming::BedWriter;
use crate::vcf::VcfRecord;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

/// Statistics from a conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub header_lines: usize,
    pub records: usize,
    pub rows_written: usize,
    pub breakends: usize,
}

impl std::fmt::Display for ConvertStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Header lines: {}, Records: {}, Rows: {}, BND: {}",
            self.header_lines, self.records, self.rows_written, self.breakends
        )
    }
}

/// VCF to BED converter.
#[derive(Debug, Clone, Default)]
pub struct ConvertCommand {
    pub options: ConvertOptions,
}

impl ConvertCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a VCF file.
    pub fn run<P: AsRef<Path>, W: Write>(&self, input: P, output: &mut W) -> Result<ConvertStats> {
        let file = File::open(input)?;
        self.convert_streaming(file, output)
    }

    /// Convert VCF from stdin.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<ConvertStats> {
        let stdin = io::stdin();
        self.convert_streaming(stdin.lock(), output)
    }

    /// Streaming conversion. Stops at the first malformed record.
    pub fn convert_streaming<R: Read, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<ConvertStats> {
        let mut reader = BufReader::new(input);
        let mut writer = BedWriter::new(output);
        let mut stats = ConvertStats::default();
        let mut buffer = Vec::with_capacity(4096);
        let mut line_number = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;
            let line = std::str::from_utf8(&buffer)
                .map_err(|_| ConvertError::InvalidUtf8 { line: line_number })?
                .trim_end();

            match LineKind::of(line) {
                LineKind::Blank => continue,
                LineKind::FileFormat => {
                    stats.header_lines += 1;
                    writer.write_line(BED_FILEFORMAT)?;
                }
                LineKind::Meta => {
                    stats.header_lines += 1;
                    writer.write_line(line)?;
                }
                LineKind::ColumnHeader => {
                    stats.header_lines += 1;
                    writer.write_line(&translate_column_header(line))?;
                }
                LineKind::Data => {
                    let record = VcfRecord::parse(line, line_number)?;
                    let classified = classify_record(&record, &self.options)?;

                    stats.records += 1;
                    if classified.category == VariantCategory::Breakend {
                        stats.breakends += 1;
                    }
                    for interval in &classified.intervals {
                        writer.write_row(interval, record.payload(), &classified.info)?;
                        stats.rows_written += 1;
                    }
                }
            }
        }

        writer.flush()?;
        info!("Converted {}", stats);
        Ok(stats)
    }
}
