use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_uri::UriReference;

// Referer       = absolute-URI / partial-URI
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.5.2
//
// Stored as a URI-reference; the RFC's fragment-free forms are a strict
// subset of it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Referer(pub UriReference);

impl TextEntity for Referer {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "REFERER",
            map(UriReference::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(Referer);
