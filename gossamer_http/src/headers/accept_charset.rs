use itertools::Itertools;

use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::separated_list1;
use nom::sequence::pair;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, token, Weight};

// charset       = token ; "*" matches every charset
//
// "*" is itself a valid token, so the wildcard is separated after tokenizing.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Charset {
    Any,
    Named(String),
}

impl TextEntity for Charset {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(token, |value: ParserInput| {
            if *value.fragment() == "*" {
                Self::Any
            } else {
                Self::Named(value.to_string())
            }
        })(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Any => String::from("*"),
            Self::Named(charset) => charset.to_owned(),
        }
    }
}

impl_text_entity_traits!(Charset);

/// One element of the Accept-Charset list.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptableCharset {
    pub charset: Charset,
    pub weight: Option<Weight>,
}

impl TextEntity for AcceptableCharset {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(Charset::parse_text, opt(Weight::parse_text)),
            |(charset, weight)| Self { charset, weight },
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{}{}", self.charset.render_text(), self.weight.render_text())
    }
}

impl_text_entity_traits!(AcceptableCharset);

// Accept-Charset = 1#( ( charset / "*" ) [ weight ] )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.3
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptCharset(pub Vec<AcceptableCharset>);

impl TextEntity for AcceptCharset {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ACCEPT-CHARSET",
            map(
                separated_list1(list_separator, AcceptableCharset::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|charset| charset.render_text()).join(", ")
    }
}

impl_text_entity_traits!(AcceptCharset);
