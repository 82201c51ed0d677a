use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message, consuming nothing
#[derive(Debug, Clone)]
pub struct Failure<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Failure<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            message: message.into(),
            _output: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Failure<T> {
    type Output = T;

    fn parse(&self, _input: Input<'code>) -> ParseResult<'code, Self::Output> {
        ParseResult::failure(self.message.clone())
    }
}

/// Convenience function to create a Failure parser
pub fn failure<T>(message: impl Into<Cow<'static, str>>) -> Failure<T> {
    Failure::new(message)
}
