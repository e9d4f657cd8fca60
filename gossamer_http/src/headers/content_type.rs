use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::media_type::MediaType;

// Content-Type  = media-type
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.5
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContentType(pub MediaType);

impl TextEntity for ContentType {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONTENT-TYPE",
            map(MediaType::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(ContentType);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use crate::media_type::{Parameter, Parameters};

    #[test]
    fn from_str() {
        assert_eq!(
            ContentType::from_str("text/html;charset=utf-8"),
            Ok(ContentType(MediaType::new(
                "text",
                "html",
                Parameters(vec![Parameter::new("charset", "utf-8")]),
            ))),
        );

        assert!(ContentType::from_str("texthtml").is_err());
    }
}
