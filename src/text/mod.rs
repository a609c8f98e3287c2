//! Character grammars built from the public combinators
//!
//! Everything here works on `char` sequences and is an ordinary parser;
//! nothing has access to engine internals.

pub mod delimited;
pub mod identifier;
pub mod number;
pub mod string;
pub mod whitespace;

pub use delimited::{braced, bracketed, comma_list, parenthesised, semi_list};
pub use identifier::identifier;
pub use number::{digit, integer, natural};
pub use string::escaped_string;
pub use whitespace::{whitespace, whitespaced};
