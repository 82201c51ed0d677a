use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use tracing::trace;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Repetition is greedy and never backtracks: matching stops at the first
/// failure and everything matched so far is kept. It also stops after an
/// occurrence that consumed nothing, since repeating it could only produce
/// the same match forever.
pub struct SomeParser<P> {
    parser: P,
}

impl<P> SomeParser<P> {
    pub fn new(parser: P) -> Self {
        SomeParser { parser }
    }
}

impl<'code, P> Parser<'code> for SomeParser<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, start: Input<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first, mut input) = match self.parser.parse(start) {
            ParseResult::Success { value, remaining } => (value, remaining),
            ParseResult::Failure { message } => return ParseResult::failure(message),
        };
        let mut values = vec![first];
        let mut progressed = consumed(start, input);

        while progressed {
            match self.parser.parse(input) {
                ParseResult::Success { value, remaining } => {
                    values.push(value);
                    progressed = consumed(input, remaining);
                    input = remaining;
                }
                ParseResult::Failure { .. } => break,
            }
        }

        if !progressed {
            trace!(count = values.len(), "repetition made no progress, stopping");
        }
        trace!(count = values.len(), "repetition finished");
        ParseResult::success(values, input)
    }
}

fn consumed(before: Input<'_>, after: Input<'_>) -> bool {
    after.as_str().len() < before.as_str().len()
}

/// Convenience function to create a SomeParser
pub fn some<'code, P>(parser: P) -> SomeParser<P>
where
    P: Parser<'code>,
{
    SomeParser::new(parser)
}

/// Extension trait to add .some() method support for parsers
pub trait SomeExt<'code>: Parser<'code> + Sized {
    fn some(self) -> SomeParser<Self> {
        SomeParser::new(self)
    }
}

impl<'code, P> SomeExt<'code> for P where P: Parser<'code> {}
