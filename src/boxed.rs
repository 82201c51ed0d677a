use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::fmt;
use std::sync::Arc;

/// Type-erased, cheaply clonable parser handle
///
/// Combinator types grow with every composition step. A `BoxedParser` hides
/// that type behind a shared pointer, which is what recursive grammars and
/// grammar tables need. It can be shared between threads as-is.
pub struct BoxedParser<'code, T> {
    inner: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("inner", &"<parser>")
            .finish()
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        self.inner.parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
