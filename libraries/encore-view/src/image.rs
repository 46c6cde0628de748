//! One-shot image fallback tracking.

/// An image element's source selection.
///
/// The slot serves the primary source until the owner reports a load
/// failure, after which it serves the fallback for the rest of the
/// component's lifetime. The failure flag transitions once and never
/// reverts; the primary is not retried.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    primary: String,
    fallback: String,
    failed: bool,
}

impl ImageSlot {
    /// Create a slot serving `primary`, with `fallback` held in reserve.
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// The source the image element should currently display.
    pub fn current(&self) -> &str {
        if self.failed {
            &self.fallback
        } else {
            &self.primary
        }
    }

    /// Record that the primary source failed to load.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    /// Whether the primary source has failed.
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}
