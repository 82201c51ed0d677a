use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct ValueOf<T> {
    value: T,
}

impl<T> ValueOf<T> {
    pub fn new(value: T) -> Self {
        ValueOf { value }
    }
}

impl<'code, T> Parser<'code> for ValueOf<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        ParseResult::success(self.value.clone(), input)
    }
}

/// Convenience function to create a ValueOf parser
pub fn value_of<T>(value: T) -> ValueOf<T>
where
    T: Clone,
{
    ValueOf::new(value)
}
