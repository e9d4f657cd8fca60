use nom::branch::alt;
use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::date_time::HttpDate;
use crate::grammar::delta_seconds;

// Retry-After   = HTTP-date / delta-seconds
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.3
//
// A date starts with a day name, so the alternatives cannot collide; the
// date form is still tried first to mirror the ABNF order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum RetryAfter {
    Date(HttpDate),
    Delay(u64),
}

impl TextEntity for RetryAfter {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "RETRY-AFTER",
            alt((
                map(HttpDate::parse_text, Self::Date),
                map(delta_seconds, Self::Delay),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Date(date) => date.render_text(),
            Self::Delay(seconds) => seconds.to_string(),
        }
    }
}

impl_text_entity_traits!(RetryAfter);
