use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::date_time::HttpDate;

// Last-Modified = HTTP-date
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-2.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LastModified(pub HttpDate);

impl TextEntity for LastModified {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "LAST-MODIFIED",
            map(HttpDate::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(LastModified);
