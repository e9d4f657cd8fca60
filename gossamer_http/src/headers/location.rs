use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_uri::UriReference;

// Location      = URI-reference
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Location(pub UriReference);

impl TextEntity for Location {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "LOCATION",
            map(UriReference::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(Location);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn round_trip() {
        for input in ["http://www.example.net/index.html", "/People.html#tim", "../other"] {
            let header = Location::from_str(input).unwrap();

            assert_eq!(header.to_string(), String::from(input), "{input}");
        }
    }
}
