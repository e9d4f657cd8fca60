use nom::combinator::map;
use nom::error::context;
use nom::sequence::preceded;

use gossamer_core::grammar::number_sign;
use gossamer_core::percent::{percent_decoded0, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::query::is_query_char;

// fragment      = *( pchar / "/" / "?" )
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
//
// Shares the query character class; the leading "#" belongs to the parser and
// the renderer.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fragment(pub String);

impl TextEntity for Fragment {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "FRAGMENT",
            map(
                preceded(number_sign, percent_decoded0(is_query_char)),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!("#{}", percent_encode(&self.0, is_query_char))
    }
}

impl_text_entity_traits!(Fragment);
