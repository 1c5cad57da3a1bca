/// Knobs for [`crate::Value::parse_with`].
///
/// The only knob today is the recursion depth guard; the grammar itself (RFC
/// 8259 plus this crate's documented deviations) is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum array/object nesting depth before the parser gives up with
    /// [`crate::ParseError::DepthLimitExceeded`] rather than recursing further.
    pub max_depth: usize,
}

/// Default nesting depth, deep enough for realistic documents without letting
/// adversarial input blow the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
