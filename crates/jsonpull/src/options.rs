//! Parser configuration.

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum container nesting depth.
    ///
    /// Container parsing recurses, so unbounded nesting would be limited only
    /// by the call stack. Entering a container at depth `max_depth` fails
    /// with [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded)
    /// before the container's start event is emitted. There is no unlimited
    /// mode.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
