//! Conversion options.
//!
//! Options are plain values passed into the converter; there is no
//! process-global state.

/// Per-run conversion switches. All default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Emit inversions as two 1bp breakend markers instead of one span.
    pub inv_multi: bool,
    /// Prefer the EVENT annotation over ID as the name of BND rows.
    pub event_id: bool,
    /// Emit the span between a breakend and its mate and annotate
    /// the record with `BND_DETAIL`.
    pub bnd_span: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_inv_multi(mut self, enabled: bool) -> Self {
        self.inv_multi = enabled;
        self
    }

    #[inline]
    pub fn with_event_id(mut self, enabled: bool) -> Self {
        self.event_id = enabled;
        self
    }

    #[inline]
    pub fn with_bnd_span(mut self, enabled: bool) -> Self {
        self.bnd_span = enabled;
        self
    }
}
