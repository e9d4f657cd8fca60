//! Strongly-typed parsers and formatters for the textual grammars of HTTP
//! and its companion RFCs: URI (RFC 3986), URI Template (RFC 6570), language
//! tags and ranges (RFC 5646 / 4647), and the RFC 7230–7234 header syntaxes.
//!
//! Every grammar element pairs a parser with a formatter through
//! [`TextEntity`]; `FromStr` parses a complete input, `ToString` emits the
//! canonical text. Nothing here touches the network or normalizes
//! semantically — values re-render from their structured form.

pub use gossamer_core::{convert_error, ParserError, ParserInput, ParserResult, TextEntity};

pub use gossamer_uri as uri;
pub use gossamer_language as language;
pub use gossamer_http as http;
