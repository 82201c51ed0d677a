use crate::input::CodeLoc;
use std::borrow::Cow;
use thiserror::Error;

/// Error returned when a parse result is turned into a `std::result::Result`
///
/// Inside the combinators failures travel as `ParseResult::Failure` values;
/// this type only shows up at the edges, in `into_result` and `parse_all`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse failed: {message}")]
    Failed { message: Cow<'static, str> },

    /// The parser succeeded but did not consume the whole input
    #[error("unparsed input at {loc}: {remaining:?}")]
    TrailingInput { loc: CodeLoc, remaining: String },
}

impl ParseError {
    /// The location of the problem, when there is one
    pub fn loc(&self) -> Option<CodeLoc> {
        match self {
            ParseError::Failed { .. } => None,
            ParseError::TrailingInput { loc, .. } => Some(*loc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;

    #[test]
    fn test_failed_display() {
        let error = ParseError::Failed {
            message: "No input".into(),
        };

        assert_eq!(error.to_string(), "parse failed: No input");
        assert_eq!(error.loc(), None);
    }

    #[test]
    fn test_trailing_input_display() {
        let input = Input::new("12\nab").tail().tail().tail();
        let error = ParseError::TrailingInput {
            loc: input.loc(),
            remaining: input.as_str().to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("line 2"));
        assert!(display.contains("\"ab\""));
        assert_eq!(error.loc().map(|loc| loc.position), Some(3));
    }
}
