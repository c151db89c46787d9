//! Query-string assembly for optional endpoint parameters.
//!
//! Parameters are collected as ordered `(name, value)` pairs and joined with
//! `&`. Unset and empty values are omitted, so callers get uniform omission
//! semantics for optional parameters instead of hand-concatenated fragments.

/// Ordered query-pair collector.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `name=value`, skipping empty values.
    pub(crate) fn push(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((name, value.to_string()));
        }
    }

    /// Append `name=value` when present; `None` is omitted entirely.
    pub(crate) fn push_opt(&mut self, name: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.push(name, &value);
        }
    }

    /// Append a numeric count, skipping zero.
    ///
    /// Zero is treated as unset, matching the falsy-omission contract for
    /// optional counters.
    pub(crate) fn push_count(&mut self, name: &'static str, value: u32) {
        if value != 0 {
            self.pairs.push((name, value.to_string()));
        }
    }

    /// Join the surviving pairs, or `None` when every value was skipped.
    pub(crate) fn finish(self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        Some(
            self.pairs
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }
}
