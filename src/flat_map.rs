use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that feeds the output of a parser into a function
/// choosing the parser to run next
///
/// The second parser runs on the input left over by the first. Sequencing of
/// any kind can be expressed with this and `value_of`:
///
/// ```
/// use parsimony::prelude::*;
/// use parsimony::{item, value_of};
///
/// let pair = item().flat_map(|first| item().flat_map(move |second| value_of((first, second))));
/// let (value, remaining) = pair.parse_str("abc").into_result().unwrap();
///
/// assert_eq!(value, ('a', 'b'));
/// assert_eq!(remaining.as_str(), "c");
/// ```
pub struct FlatMap<P, F> {
    parser: P,
    next: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        FlatMap { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input)
            .flat_map(|value, remaining| (self.next)(value).parse(remaining))
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, next: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, next)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, next: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, next)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
