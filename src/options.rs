/// Knobs for the scanner and grammar driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Treat a bare `<?` as an open tag, like PHP's `short_open_tag` ini setting.
    pub short_open_tag: bool,
    /// Attach comments and doc comments to nodes. When off, trivia is dropped.
    pub attach_comments: bool,
    /// Deepest statement/expression nesting the parser descends into. Deeper
    /// input is reported as [`ParseError::NestingTooDeep`] and skipped.
    ///
    /// [`ParseError::NestingTooDeep`]: crate::ParseError::NestingTooDeep
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            short_open_tag: false,
            attach_comments: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    /// Fits a 2 MiB thread stack with room left for walking the result.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn short_open_tag(mut self, enabled: bool) -> Self {
        self.short_open_tag = enabled;
        self
    }

    pub fn attach_comments(mut self, enabled: bool) -> Self {
        self.attach_comments = enabled;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
