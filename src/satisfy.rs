use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Message used by `satisfy` when the predicate rejects the value
pub const PREDICATE_NOT_SATISFIED: &str = "predicate not satisfied";

/// Parser that only accepts the output of another parser when a predicate holds
///
/// A rejected value is dropped together with the input it consumed, so the
/// failure leaves the position where it was before the attempt.
pub struct Satisfy<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Satisfy<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            message,
        }
    }
}

impl<'code, P, F> Parser<'code> for Satisfy<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(input).flat_map(|value, remaining| {
            if (self.predicate)(&value) {
                ParseResult::success(value, remaining)
            } else {
                ParseResult::failure(self.message.clone())
            }
        })
    }
}

/// Extension trait to add satisfy methods to all parsers
pub trait SatisfyExt<'code>: Parser<'code> + Sized {
    fn satisfy<F>(self, predicate: F) -> Satisfy<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Satisfy::new(self, predicate, Cow::Borrowed(PREDICATE_NOT_SATISFIED))
    }

    /// Like `satisfy`, failing with `message` instead of the generic one
    fn satisfy_or<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Satisfy<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Satisfy::new(self, predicate, message.into())
    }
}

impl<'code, P: Parser<'code>> SatisfyExt<'code> for P {}

/// Convenience function to create a Satisfy parser
pub fn satisfy<'code, P, F>(parser: P, predicate: F) -> Satisfy<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Satisfy::new(parser, predicate, Cow::Borrowed(PREDICATE_NOT_SATISFIED))
}
