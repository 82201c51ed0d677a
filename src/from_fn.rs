use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::fmt;

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<F> FromFn<F> {
    pub fn new(function: F) -> Self {
        FromFn { function }
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("function", &"<function>")
            .finish()
    }
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(Input<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (self.function)(input)
    }
}

/// Turn a function from input to parse result into a parser
pub fn from_fn<'code, F, T>(function: F) -> FromFn<F>
where
    F: Fn(Input<'code>) -> ParseResult<'code, T>,
{
    FromFn::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_returns_function_result() {
        let expected = ParseResult::success(123, Input::new("Any remaining input"));
        let parser = from_fn(|_| expected.clone());

        let result = parser.parse(Input::new("Any input"));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_from_fn_sees_the_given_input() {
        let parser = from_fn(|input| ParseResult::success(input.len(), input));

        let result = parser.parse_str("four");

        assert_eq!(result, ParseResult::success(4, Input::new("four")));
    }
}
