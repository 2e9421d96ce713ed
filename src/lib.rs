//! svbed: structural-variant VCF to BED conversion
//!
//! This library turns VCF records into BED intervals so that interval tools
//! (overlap, merge, filter) can work on structural variants.
//!
//! # Features
//!
//! - **Per-type coordinates**: point variants, breakends, inversions and
//!   END-spanning SVs each map to the correct 0-based half-open interval
//! - **Breakend spans**: optional mate span and `BND_DETAIL` annotation
//!   inferred from ALT bracket notation
//! - **Streaming I/O**: one line in, one or two rows out, in input order
//!
//! # Example
//!
//! ```rust
//! use svbed::{commands::ConvertCommand, config::ConvertOptions};
//!
//! let vcf = "1\t200\tdup1\tN\t<DUP>\t.\tPASS\tSVTYPE=DUP;END=300\n";
//! let cmd = ConvertCommand::with_options(ConvertOptions::new());
//! let mut out = Vec::new();
//! cmd.convert_streaming(vcf.as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b"1\t200\t300\tdup1\tN\t<DUP>\t.\tPASS\tSVTYPE=DUP;END=300\n");
//! ```

pub mod breakend;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod header;
pub mod info;
pub mod interval;
pub mod streaming;
pub mod vcf;

// Re-export commonly used types
pub use classify::{classify_record, Classified, VariantCategory};
pub use config::ConvertOptions;
pub use error::{ConvertError, Result};
pub use interval::BedInterval;
pub use vcf::VcfRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::breakend::{BreakendDetail, BreakendOrientation};
    pub use crate::classify::{classify_record, Classified, VariantCategory};
    pub use crate::commands::{ConvertCommand, ConvertStats};
    pub use crate::config::ConvertOptions;
    pub use crate::error::ConvertError;
    pub use crate::interval::BedInterval;
    pub use crate::vcf::VcfRecord;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::prelude::*;

        let vcf = "##fileformat=VCFv4.2\n\
                   #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\n\
                   1\t100\tbnd1\tN\tN[1:600[\t.\tPASS\tSVTYPE=BND;EVENT=ev1\tGT\t0/1\n";
        let cmd = ConvertCommand::with_options(ConvertOptions::new().with_event_id(true));
        let mut out = Vec::new();
        let stats = cmd.convert_streaming(vcf.as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("##fileformat=BEDv0.2\n#CHROM\tPOS_START\tPOS_END\t"));
        assert!(out.ends_with("1\t99\t100\tev1\tN\tN[1:600[\t.\tPASS\tSVTYPE=BND;EVENT=ev1\tGT\t0/1\n"));
        assert_eq!(stats.breakends, 1);
    }
}
