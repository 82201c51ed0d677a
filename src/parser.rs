use crate::error::ParseError;
use crate::input::Input;
use crate::result::ParseResult;
use tracing::debug;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from an input to a parse result. Implementors
/// must not keep state between calls, so a parser can be built once and
/// invoked any number of times, from any number of threads.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given input
    ///
    /// Returns the matched value and the remaining input on success. A
    /// failure carries no input, so failures never consume.
    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output>;

    /// Parse from the start of `text`
    fn parse_str(&self, text: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(Input::new(text))
    }

    /// Parse `text` and require that all of it is consumed
    fn parse_all(&self, text: &'code str) -> Result<Self::Output, ParseError> {
        let (value, remaining) = self.parse_str(text).into_result().inspect_err(|error| {
            debug!(%error, "parser rejected input");
        })?;

        if remaining.is_empty() {
            return Ok(value);
        }

        let loc = remaining.loc();
        debug!(%loc, "parser left input unconsumed");
        Err(ParseError::TrailingInput {
            loc,
            remaining: remaining.as_str().to_string(),
        })
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}
