use itertools::Itertools;

use nom::branch::alt;
use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;

use gossamer_core::grammar::asterisk;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::list_separator;
use crate::headers::etag::EntityTag;

// If-Match      = "*" / 1#entity-tag
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-3.1
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum IfMatch {
    Any,
    Tags(Vec<EntityTag>),
}

impl TextEntity for IfMatch {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "IF-MATCH",
            alt((
                map(asterisk, |_| Self::Any),
                map(
                    separated_list1(list_separator, EntityTag::parse_text),
                    Self::Tags,
                ),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Any => String::from("*"),
            Self::Tags(tags) => tags.iter().map(|tag| tag.render_text()).join(", "),
        }
    }
}

impl_text_entity_traits!(IfMatch);

// If-None-Match = "*" / 1#entity-tag
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-3.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum IfNoneMatch {
    Any,
    Tags(Vec<EntityTag>),
}

impl TextEntity for IfNoneMatch {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "IF-NONE-MATCH",
            alt((
                map(asterisk, |_| Self::Any),
                map(
                    separated_list1(list_separator, EntityTag::parse_text),
                    Self::Tags,
                ),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Any => String::from("*"),
            Self::Tags(tags) => tags.iter().map(|tag| tag.render_text()).join(", "),
        }
    }
}

impl_text_entity_traits!(IfNoneMatch);
