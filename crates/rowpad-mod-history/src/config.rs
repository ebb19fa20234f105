//! Configuration for the undo history.

/// Maximum number of undo items kept per document.
/// Oldest items are evicted when this limit is exceeded.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for the history system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max undo items on the stack.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Creates a config with the given depth, never below one item.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }
}
