use itertools::Itertools;

use nom::branch::alt;
use nom::combinator::map;
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{pair, preceded};

use gossamer_core::grammar::{asterisk, hyphen_minus};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::tag::{alpha_m_n, alphanum_m_n};

// language-range = (1*8ALPHA *("-" 1*8alphanum)) / "*"
//
// https://datatracker.ietf.org/doc/html/rfc4647#section-2.1
//
// A basic language range; the wildcard matches any tag.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum LanguageRange {
    Range(Vec<String>),
    Any,
}

impl TextEntity for LanguageRange {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "LANGUAGE-RANGE",
            alt((
                map(asterisk, |_| Self::Any),
                map(
                    pair(
                        alpha_m_n(1, 8),
                        many0(preceded(hyphen_minus, alphanum_m_n(1, 8))),
                    ),
                    |(first, rest)| {
                        let mut subtags = vec![first.to_string()];

                        subtags.extend(rest.iter().map(|subtag| subtag.to_string()));

                        Self::Range(subtags)
                    },
                ),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Range(subtags) => subtags.iter().join("-"),
            Self::Any => String::from("*"),
        }
    }
}

impl_text_entity_traits!(LanguageRange);
