use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::date_time::HttpDate;

// If-Modified-Since = HTTP-date
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-3.3
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct IfModifiedSince(pub HttpDate);

impl TextEntity for IfModifiedSince {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "IF-MODIFIED-SINCE",
            map(HttpDate::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(IfModifiedSince);

// If-Unmodified-Since = HTTP-date
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-3.4
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct IfUnmodifiedSince(pub HttpDate);

impl TextEntity for IfUnmodifiedSince {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "IF-UNMODIFIED-SINCE",
            map(HttpDate::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(IfUnmodifiedSince);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn round_trip() {
        let header = IfModifiedSince::from_str("Sat, 29 Oct 1994 19:43:31 GMT").unwrap();

        assert_eq!(header.to_string(), String::from("Sat, 29 Oct 1994 19:43:31 GMT"));
    }
}
