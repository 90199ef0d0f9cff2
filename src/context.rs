use serde::{Deserialize, Serialize};

/// Per-call query options, threaded unchanged through every step.
///
/// Deserializes from `{"index": 1}`; a missing `index` means `[i]` behaves
/// like `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    /// Element selected by `[i]` segments.
    pub index: Option<usize>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}
