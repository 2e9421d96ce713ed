//! INFO column parsing.
//!
//! The INFO field is split on `;`, and each token on its first `=`.
//! Tokens without `=` are flags.

use crate::error::{ConvertError, Result};
use rustc_hash::FxHashMap;

pub const SVTYPE: &str = "SVTYPE";
pub const END: &str = "END";
pub const EVENT: &str = "EVENT";
pub const BND_DETAIL: &str = "BND_DETAIL";

/// Value of a single INFO annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoValue<'a> {
    /// `KEY=value`
    Value(&'a str),
    /// `KEY` with no value.
    Flag,
}

impl<'a> InfoValue<'a> {
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            InfoValue::Value(v) => Some(*v),
            InfoValue::Flag => None,
        }
    }
}

/// Key/value view over one record's INFO column.
///
/// Borrows from the line; built fresh for every record. Later
/// duplicates of a key replace earlier ones.
#[derive(Debug, Default)]
pub struct InfoMap<'a> {
    entries: FxHashMap<&'a str, InfoValue<'a>>,
}

impl<'a> InfoMap<'a> {
    pub fn parse(info: &'a str) -> Self {
        let mut entries = FxHashMap::default();
        for token in info.split(';') {
            match token.split_once('=') {
                Some((key, value)) => entries.insert(key, InfoValue::Value(value)),
                None => entries.insert(token, InfoValue::Flag),
            };
        }
        Self { entries }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<InfoValue<'a>> {
        self.entries.get(key).copied()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key that must be present with a value.
    pub fn require(&self, key: &'static str, line: usize) -> Result<&'a str> {
        match self.get(key) {
            Some(InfoValue::Value(v)) => Ok(v),
            Some(InfoValue::Flag) => Err(ConvertError::FlagInfo { line, key }),
            None => Err(ConvertError::MissingInfo { line, key }),
        }
    }

    /// Look up a key that must carry an unsigned integer when present.
    pub fn position(&self, key: &'static str, line: usize) -> Result<Option<u64>> {
        match self.get(key) {
            None => Ok(None),
            Some(_) => {
                let raw = self.require(key, line)?;
                raw.parse()
                    .map(Some)
                    .map_err(|_| ConvertError::InvalidNumber {
                        line,
                        field: key,
                        value: raw.to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_and_flags() {
        let info = InfoMap::parse("SVTYPE=DEL;END=500;IMPRECISE;CIPOS=-10,10");
        assert_eq!(info.len(), 4);
        assert_eq!(info.get(SVTYPE), Some(InfoValue::Value("DEL")));
        assert_eq!(info.get(END), Some(InfoValue::Value("500")));
        assert_eq!(info.get("IMPRECISE"), Some(InfoValue::Flag));
        assert_eq!(info.get("CIPOS").and_then(|v| v.as_str()), Some("-10,10"));
        assert!(!info.contains(EVENT));
    }

    #[test]
    fn test_split_on_first_equals() {
        let info = InfoMap::parse("NOTE=a=b");
        assert_eq!(info.get("NOTE"), Some(InfoValue::Value("a=b")));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let info = InfoMap::parse("svtype=BND");
        assert!(!info.contains(SVTYPE));
        assert!(info.contains("svtype"));
    }

    #[test]
    fn test_missing_info_placeholder() {
        let info = InfoMap::parse(".");
        assert_eq!(info.get("."), Some(InfoValue::Flag));
        assert!(!info.contains(SVTYPE));
    }

    #[test]
    fn test_require() {
        let info = InfoMap::parse("EVENT=ev1;END");
        assert_eq!(info.require(EVENT, 1).unwrap(), "ev1");
        assert!(matches!(
            info.require(END, 2),
            Err(ConvertError::FlagInfo { line: 2, key: "END" })
        ));
        assert!(matches!(
            info.require(SVTYPE, 3),
            Err(ConvertError::MissingInfo { line: 3, key: "SVTYPE" })
        ));
    }

    #[test]
    fn test_position() {
        let info = InfoMap::parse("END=300;BAD=x");
        assert_eq!(info.position(END, 1).unwrap(), Some(300));
        assert_eq!(info.position(EVENT, 1).unwrap(), None);
        assert!(matches!(
            info.position("BAD", 7),
            Err(ConvertError::InvalidNumber { line: 7, .. })
        ));
    }
}
