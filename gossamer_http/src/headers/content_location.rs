use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_uri::UriReference;

// Content-Location = absolute-URI / partial-URI
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.4.2
//
// Stored as a URI-reference; the fragment-free constraint of partial-URI is
// advisory, like the other hand-construction constraints.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContentLocation(pub UriReference);

impl TextEntity for ContentLocation {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONTENT-LOCATION",
            map(UriReference::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(ContentLocation);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn round_trip() {
        for input in ["http://example.com/a", "/rfc/rfc7231.txt"] {
            let header = ContentLocation::from_str(input).unwrap();

            assert_eq!(header.to_string(), String::from(input));
        }
    }
}
