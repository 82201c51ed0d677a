use crate::input::Input;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Message of the failure produced when there is nothing left to consume
pub const NO_INPUT: &str = "No input";

/// Parser that consumes and returns a single code point
///
/// This is the only parser that looks at the input directly. Everything else
/// is built by combining it with the other combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Item;

impl Item {
    pub fn new() -> Self {
        Item
    }
}

impl<'code> Parser<'code> for Item {
    type Output = char;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        if input.is_empty() {
            return ParseResult::failure(NO_INPUT);
        }
        ParseResult::success(input.head(), input.tail())
    }
}

/// Convenience function to create an Item parser
pub fn item() -> Item {
    Item::new()
}
