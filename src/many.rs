use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::some::SomeParser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// This is one-or-more with an empty fallback, so it never fails. The same
/// greedy, no-backtracking rules as `SomeParser` apply.
pub struct Many<P> {
    some: SomeParser<P>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many {
            some: SomeParser::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        self.some
            .parse(input)
            .or(|| ParseResult::success(Vec::new(), input))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
