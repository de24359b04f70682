//! # TextComb - Minimal Parser Combinator Library
//!
//! TextComb provides composable, type-safe parsers over text input. A
//! parser consumes a prefix of its input left-to-right and yields a
//! typed value plus the unconsumed remainder, or a structured failure.
//! The library emphasizes:
//!
//! - **Zero panics**: all parsing failures are handled through `Result` types
//! - **Errors as data**: failures carry what was expected and what was found
//! - **Composability**: small parsers combine into larger ones using combinators
//! - **Reusability**: parsers are immutable values, safe to apply any number of times
//!
//! The three building blocks are [`literal`] for matching a fixed
//! prefix, [`ThenExt::then`] for sequencing, and [`PaddedExt::padded`]
//! for discarding whitespace around a token:
//!
//! ```
//! use textcomb::{PaddedExt, Parser, ThenExt, literal};
//!
//! let parser = literal("Hello, ").then(literal("world!").padded());
//!
//! let ((greeting, subject), remaining) = parser.parse("Hello,   world!  ").unwrap();
//! assert_eq!(greeting, "Hello, ");
//! assert_eq!(subject, "world!");
//! assert_eq!(remaining, "");
//!
//! let error = parser.parse("Hello,, world!").unwrap_err();
//! assert_eq!(error.to_string(), "Expected: \"Hello, \" got: \"Hello,,\"");
//! ```

pub mod error;
pub mod literal;
pub mod padded;
pub mod parser;
pub mod then;

pub use error::ParseError;
pub use literal::{Literal, literal};
pub use padded::{Padded, PaddedExt, padded};
pub use parser::{ParseOutcome, Parser};
pub use then::{Then, ThenExt, then};
