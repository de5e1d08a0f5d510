use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by all configuration documents (`YPLN-0001`, `YPLN-0002`, ...)
pub const DOCUMENT_PREFIX: &str = "YPLN";

/// Width of the zero-padded numeric part of every code
pub const CODE_WIDTH: usize = 4;

// ============================================================================
// Document code
// ============================================================================

/// Code of a configuration document, e.g. `YPLN-0003`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentCode(String);

impl DocumentCode {
    /// Code used when a request does not name a document
    pub const SENTINEL: &'static str = "YPLN-0000";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn sentinel() -> Self {
        Self(Self::SENTINEL.to_string())
    }

    /// `YPLN-` followed by `ordinal` padded to four digits
    pub fn sequential(ordinal: u32) -> Self {
        Self(format!("{}-{:0width$}", DOCUMENT_PREFIX, ordinal, width = CODE_WIDTH))
    }

    /// Resolve the `evrakno` query value: blank or missing falls back to the sentinel,
    /// anything else is trimmed and taken as is.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self::sentinel(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for DocumentCode {
    fn default() -> Self {
        Self::sentinel()
    }
}

// ============================================================================
// Parameter code
// ============================================================================

/// Code of a parameter inside a document, e.g. `YPLN-0003.0001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCode(String);

impl ParameterCode {
    pub fn new(document: &DocumentCode, ordinal: u32) -> Self {
        Self(format!("{}.{:0width$}", document, ordinal, width = CODE_WIDTH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix after the last `.`; `None` for codes not built by [`ParameterCode::new`]
    pub fn ordinal(&self) -> Option<u32> {
        self.0.rsplit_once('.').and_then(|(_, n)| n.parse().ok())
    }

    /// Element id for the input control of this parameter: `p_` plus the code
    /// with every non-word character removed.
    pub fn dom_id(&self) -> String {
        let stripped: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        format!("p_{}", stripped)
    }
}

impl fmt::Display for ParameterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Sequence
// ============================================================================

/// Monotonic ordinal source. Each catalog build owns its own sequence,
/// so codes never leak between catalogs.
#[derive(Debug)]
pub struct CodeSequence {
    next: u32,
}

impl CodeSequence {
    pub fn starting_at_one() -> Self {
        Self { next: 1 }
    }

    pub fn next_ordinal(&mut self) -> u32 {
        let current = self.next;
        self.next += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_codes_are_zero_padded() {
        assert_eq!(DocumentCode::sequential(1).as_str(), "YPLN-0001");
        assert_eq!(DocumentCode::sequential(42).as_str(), "YPLN-0042");
    }

    #[test]
    fn blank_query_falls_back_to_sentinel() {
        assert!(DocumentCode::from_query(None).is_sentinel());
        assert!(DocumentCode::from_query(Some("")).is_sentinel());
        assert!(DocumentCode::from_query(Some("   ")).is_sentinel());
        assert_eq!(
            DocumentCode::from_query(Some("  YPLN-0001 ")).as_str(),
            "YPLN-0001"
        );
    }

    #[test]
    fn parameter_code_carries_document_prefix() {
        let doc = DocumentCode::new("YPLN-0003");
        let code = ParameterCode::new(&doc, 12);
        assert_eq!(code.as_str(), "YPLN-0003.0012");
        assert_eq!(code.ordinal(), Some(12));
        assert_eq!(code.dom_id(), "p_YPLN00030012");
    }

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut seq = CodeSequence::starting_at_one();
        assert_eq!(seq.next_ordinal(), 1);
        assert_eq!(seq.next_ordinal(), 2);
        assert_eq!(seq.next_ordinal(), 3);
    }
}
