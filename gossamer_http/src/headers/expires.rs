use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::date_time::HttpDate;

// Expires       = HTTP-date
//
// https://datatracker.ietf.org/doc/html/rfc7234#section-5.3
//
// RFC 7234's "treat an unparseable date as already expired" is cache policy,
// not grammar; an invalid date is a parse error here.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Expires(pub HttpDate);

impl TextEntity for Expires {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "EXPIRES",
            map(HttpDate::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(Expires);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn from_str() {
        assert!(Expires::from_str("Thu, 01 Dec 1994 16:00:00 GMT").is_ok());

        assert!(Expires::from_str("0").is_err());
    }
}
