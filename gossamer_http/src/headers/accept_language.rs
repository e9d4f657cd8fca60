use itertools::Itertools;

use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::separated_list1;
use nom::sequence::pair;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_language::LanguageRange;

use crate::grammar::{list_separator, Weight};

/// One element of the Accept-Language list.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptableLanguage {
    pub range: LanguageRange,
    pub weight: Option<Weight>,
}

impl TextEntity for AcceptableLanguage {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(LanguageRange::parse_text, opt(Weight::parse_text)),
            |(range, weight)| Self { range, weight },
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{}{}", self.range.render_text(), self.weight.render_text())
    }
}

impl_text_entity_traits!(AcceptableLanguage);

// Accept-Language = 1#( language-range [ weight ] )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.5
//
// Ranges are RFC 4647 basic language ranges.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptLanguage(pub Vec<AcceptableLanguage>);

impl TextEntity for AcceptLanguage {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ACCEPT-LANGUAGE",
            map(
                separated_list1(list_separator, AcceptableLanguage::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|language| language.render_text()).join(", ")
    }
}

impl_text_entity_traits!(AcceptLanguage);
