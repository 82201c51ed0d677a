//! # Parsimony - Parser Combinator Algebra
//!
//! A small set of primitive parsers and combinators over code-point input.
//!
//! A parser is a pure function from an [`Input`] to a [`ParseResult`]. The
//! only primitive that looks at the input is [`item`], which consumes one
//! code point. Everything else is composition:
//!
//! - **Choice**: [`or_else`] backtracks to the original input on failure
//! - **Sequencing**: [`flat_map`] and applicative [`apply`]
//! - **Transformation**: [`map`] and the [`satisfy`] predicate filter
//! - **Repetition**: [`many`] and [`some`], iterative and greedy
//!
//! ```
//! use parsimony::prelude::*;
//! use parsimony::{Input, ParseResult, item};
//!
//! let digits = item()
//!     .satisfy(char::is_ascii_digit)
//!     .map(|ch| ch.to_digit(10).unwrap_or_default())
//!     .many();
//!
//! assert_eq!(
//!     digits.parse_str("123ABC"),
//!     ParseResult::success(vec![1, 2, 3], Input::new("ABC"))
//! );
//! ```
//!
//! Parsers hold no mutable state, so one parser value can be reused freely
//! and shared between threads.

pub mod apply;
pub mod boxed;
pub mod error;
pub mod failure;
pub mod flat_map;
pub mod from_fn;
pub mod input;
pub mod item;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or_else;
pub mod parser;
pub mod result;
pub mod satisfy;
pub mod some;
pub mod value_of;

pub use apply::apply;
pub use boxed::BoxedParser;
pub use error::ParseError;
pub use failure::failure;
pub use flat_map::flat_map;
pub use from_fn::from_fn;
pub use input::{CodeLoc, Input};
pub use item::{NO_INPUT, item};
pub use lazy::lazy;
pub use many::many;
pub use map::map;
pub use or_else::or_else;
pub use parser::Parser;
pub use result::ParseResult;
pub use satisfy::{PREDICATE_NOT_SATISFIED, satisfy};
pub use some::some;
pub use value_of::value_of;

/// The parser trait together with every combinator extension trait
pub mod prelude {
    pub use crate::apply::ApplyExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::or_else::OrElseExt;
    pub use crate::parser::Parser;
    pub use crate::satisfy::SatisfyExt;
    pub use crate::some::SomeExt;
}
