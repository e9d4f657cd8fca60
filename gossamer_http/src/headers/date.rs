use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::date_time::HttpDate;

// Date          = HTTP-date
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.1.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Date(pub HttpDate);

impl TextEntity for Date {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "DATE",
            map(HttpDate::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(Date);
