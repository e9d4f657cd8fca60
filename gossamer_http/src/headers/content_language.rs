use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_language::LanguageTag;

use crate::grammar::list_separator;

// Content-Language = 1#language-tag
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.3.2
//
// Each element is a full RFC 5646 tag.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContentLanguage(pub Vec<LanguageTag>);

impl TextEntity for ContentLanguage {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONTENT-LANGUAGE",
            map(
                separated_list1(list_separator, LanguageTag::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|tag| tag.render_text()).join(", ")
    }
}

impl_text_entity_traits!(ContentLanguage);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn round_trip() {
        for input in ["en", "mi, en", "de-CH-1901, zh-Hant"] {
            let header = ContentLanguage::from_str(input).unwrap();

            assert_eq!(header.to_string(), String::from(input));
        }

        assert!(ContentLanguage::from_str("en,,de").is_err());
    }
}
