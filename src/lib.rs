//! # AmbiComb - Ambiguity-Preserving Parser Combinators
//!
//! A parser combinator library where a parser returns *every* way it can
//! match, not just the first. Parsers are generic over the symbol type of
//! the input sequence and compose into larger grammars whose ambiguity is
//! carried through to the caller as an ordered list of alternatives.
//!
//! - **Failure is data**: a parser that does not match returns no alternatives
//! - **Ordered results**: every combinator documents the order it emits alternatives in
//! - **No recursion in repetition**: `many`, `some` and `separated_list` use an explicit work-list
//! - **Recursive grammars**: built with [`lazy`](lazy::lazy) and [`BoxedParser`]
//!
//! ```
//! use ambicomb::prelude::*;
//! use ambicomb::{many::greedy, symbol::any_symbol};
//!
//! let data: Vec<char> = "ab".chars().collect();
//! let parser = greedy(any_symbol().or(any_symbol().map(|c: char| c.to_ascii_uppercase())));
//!
//! let results: Vec<String> = parser
//!     .parse_at(&data, 0)
//!     .into_iter()
//!     .map(|(letters, _)| letters.into_iter().collect())
//!     .collect();
//! assert_eq!(results, ["AB", "Ab", "aB", "ab"]);
//! ```

pub mod and;
pub mod bind;
pub mod boxed;
pub mod choice;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod from_fn;
pub mod lazy;
pub mod look;
pub mod many;
pub mod map;
pub mod option;
pub mod or;
pub mod pack;
pub mod parser;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod succeed;
pub mod symbol;
pub mod text;
pub mod token;

pub use boxed::BoxedParser;
pub use cursor::Cursor;
pub use driver::{parse, parse_complete};
pub use error::ParseError;
pub use parser::{Alternatives, Parser};

/// The parser trait and every extension trait, for method syntax
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::bind::BindExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::map::MapExt;
    pub use crate::option::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::Parser;
}
