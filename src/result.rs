use crate::error::ParseError;
use crate::input::Input;
use std::borrow::Cow;

/// Outcome of a single parse attempt
///
/// A failure carries only an advisory message and never an input: a failed
/// attempt cannot leak partial consumption into whatever runs next.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ParseResult<'code, T> {
    Success { value: T, remaining: Input<'code> },
    Failure { message: Cow<'static, str> },
}

impl<'code, T> ParseResult<'code, T> {
    pub fn success(value: T, remaining: Input<'code>) -> Self {
        ParseResult::Success { value, remaining }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        ParseResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn remaining(&self) -> Option<Input<'code>> {
        match self {
            ParseResult::Success { remaining, .. } => Some(*remaining),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { message } => Some(message),
        }
    }

    /// Transform the matched value, keeping the remaining input
    pub fn map<U, F>(self, mapper: F) -> ParseResult<'code, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseResult::Success { value, remaining } => ParseResult::Success {
                value: mapper(value),
                remaining,
            },
            ParseResult::Failure { message } => ParseResult::Failure { message },
        }
    }

    /// Keep a success, otherwise evaluate `alternative`
    ///
    /// `alternative` is not called at all when `self` is a success.
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure { .. } => alternative(),
        }
    }

    /// Continue with the matched value and the input that is left after it
    pub fn flat_map<U, F>(self, next: F) -> ParseResult<'code, U>
    where
        F: FnOnce(T, Input<'code>) -> ParseResult<'code, U>,
    {
        match self {
            ParseResult::Success { value, remaining } => next(value, remaining),
            ParseResult::Failure { message } => ParseResult::Failure { message },
        }
    }

    pub fn into_result(self) -> Result<(T, Input<'code>), ParseError> {
        match self {
            ParseResult::Success { value, remaining } => Ok((value, remaining)),
            ParseResult::Failure { message } => Err(ParseError::Failed { message }),
        }
    }
}
