use nom::combinator::map;
use nom::error::context;
use nom::sequence::preceded;

use gossamer_core::grammar::{is_question_mark_char, is_solidus_char, question_mark};
use gossamer_core::percent::{percent_decoded0, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::path::is_pchar_char;

/// Returns if a char may appear in a query (percent triples aside).
///
/// query         = *( pchar / "/" / "?" )
pub fn is_query_char(input: char) -> bool {
    is_pchar_char(input) || is_solidus_char(input) || is_question_mark_char(input)
}

// query         = *( pchar / "/" / "?" )
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
//
// The leading "?" belongs to the parser and the renderer; the stored value is
// the decoded query text without it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Query(pub String);

impl TextEntity for Query {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "QUERY",
            map(
                preceded(question_mark, percent_decoded0(is_query_char)),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!("?{}", percent_encode(&self.0, is_query_char))
    }
}

impl_text_entity_traits!(Query);
