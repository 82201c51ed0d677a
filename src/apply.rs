use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Applicative composition: run a parser producing a function, then run
/// `parser` on what is left and apply the function to its output
///
/// This combines independently defined parsers without nesting `flat_map`:
///
/// ```
/// use parsimony::prelude::*;
/// use parsimony::item;
///
/// let tag = item().map(|tag| move |body: char| format!("{tag}={body}"));
/// let (value, _) = item().apply(tag).parse_str("k7").into_result().unwrap();
///
/// assert_eq!(value, "k=7");
/// ```
pub struct Apply<P, PF> {
    parser: P,
    functions: PF,
}

impl<P, PF> Apply<P, PF> {
    pub fn new(parser: P, functions: PF) -> Self {
        Apply { parser, functions }
    }
}

impl<'code, P, PF, F, U> Parser<'code> for Apply<P, PF>
where
    P: Parser<'code>,
    PF: Parser<'code, Output = F>,
    F: FnOnce(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        self.functions
            .parse(input)
            .flat_map(|function, remaining| self.parser.parse(remaining).map(function))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, P, PF, F, U>(parser: P, functions: PF) -> Apply<P, PF>
where
    P: Parser<'code>,
    PF: Parser<'code, Output = F>,
    F: FnOnce(P::Output) -> U,
{
    Apply::new(parser, functions)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PF, F, U>(self, functions: PF) -> Apply<Self, PF>
    where
        PF: Parser<'code, Output = F>,
        F: FnOnce(Self::Output) -> U,
    {
        Apply::new(self, functions)
    }
}

impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::failure;
    use crate::item::{NO_INPUT, item};
    use crate::map::MapExt;
    use crate::satisfy::SatisfyExt;
    use crate::value_of::value_of;

    #[derive(Debug, PartialEq)]
    struct Assignment {
        name: char,
        value: u32,
    }

    #[test]
    fn test_apply_function_parser() {
        let input = Input::new("Any input");
        let functions = value_of(|v: i32| v.to_string());
        let parser = value_of(10).apply(functions);

        assert_eq!(parser.parse(input), ParseResult::success("10".to_string(), input));
    }

    #[test]
    fn test_apply_runs_on_remaining_input() {
        let name = item().satisfy(char::is_ascii_alphabetic);
        let digit = item()
            .satisfy(char::is_ascii_digit)
            .map(|ch| ch.to_digit(10).unwrap_or_default());
        let parser = digit.apply(name.map(|name| move |value: u32| Assignment { name, value }));

        assert_eq!(
            parser.parse_str("x4;"),
            ParseResult::success(Assignment { name: 'x', value: 4 }, Input::new(";"))
        );
    }

    #[test]
    fn test_apply_function_parser_fails() {
        let functions = failure::<fn(char) -> char>("no function");
        let parser = item().apply(functions);

        assert_eq!(parser.parse_str("abc"), ParseResult::failure("no function"));
    }

    #[test]
    fn test_apply_argument_parser_fails() {
        let functions = item().map(|first| move |second: char| (first, second));
        let parser = item().apply(functions);

        assert_eq!(parser.parse_str("a"), ParseResult::failure(NO_INPUT));
    }

    #[test]
    fn test_function_syntax() {
        let parser = apply(item(), value_of(|ch: char| ch.to_ascii_uppercase()));

        assert_eq!(parser.parse_str("ab"), ParseResult::success('A', Input::new("b")));
    }
}
