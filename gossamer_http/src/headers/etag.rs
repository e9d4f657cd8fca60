use nom::bytes::complete::take_while;
use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::{delimited, pair};

use gossamer_core::grammar::{dquote, tag};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

/// etagc         = %x21 / %x23-7E
fn is_etagc_char(input: char) -> bool {
    matches!(input, '\x21' | '\x23'..='\x7E')
}

// entity-tag    = [ weak ] opaque-tag
// weak          = %x57.2F ; "W/", case-sensitive
// opaque-tag    = DQUOTE *etagc DQUOTE
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-2.3
//
// The stored string is the text between the quotes.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum EntityTag {
    Strong(String),
    Weak(String),
}

impl EntityTag {
    pub fn opaque_tag(&self) -> &str {
        match self {
            Self::Strong(tag) => tag,
            Self::Weak(tag) => tag,
        }
    }
}

fn opaque_tag(input: ParserInput) -> ParserResult<ParserInput> {
    delimited(dquote, take_while(is_etagc_char), dquote)(input)
}

impl TextEntity for EntityTag {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ENTITY-TAG",
            map(
                pair(opt(tag("W/")), opaque_tag),
                |(weak, value)| {
                    if weak.is_some() {
                        Self::Weak(value.to_string())
                    } else {
                        Self::Strong(value.to_string())
                    }
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Strong(value) => format!("\"{}\"", value),
            Self::Weak(value) => format!("W/\"{}\"", value),
        }
    }
}

impl_text_entity_traits!(EntityTag);

// ETag          = entity-tag
//
// https://datatracker.ietf.org/doc/html/rfc7232#section-2.3
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ETag(pub EntityTag);

impl TextEntity for ETag {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ETAG",
            map(EntityTag::parse_text, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.render_text()
    }
}

impl_text_entity_traits!(ETag);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text() {
        assert_parser_output!(
            EntityTag::parse_text("\"xyzzy\", rest".into()),
            (
                ", rest",
                EntityTag::Strong(String::from("xyzzy")),
            ),
        );

        assert_parser_output!(
            EntityTag::parse_text("W/\"xyzzy\"".into()),
            (
                "",
                EntityTag::Weak(String::from("xyzzy")),
            ),
        );

        // The empty opaque-tag is legal.
        assert_parser_output!(
            EntityTag::parse_text("\"\"".into()),
            (
                "",
                EntityTag::Strong(String::new()),
            ),
        );

        // The weak prefix is case sensitive.
        assert!(EntityTag::parse_text("w/\"xyzzy\"".into()).is_err());
        assert!(EntityTag::parse_text("xyzzy".into()).is_err());
    }

    #[test]
    fn render_text() {
        assert_eq!(
            ETag(EntityTag::Strong(String::from("xyzzy"))).render_text(),
            String::from("\"xyzzy\""),
        );

        assert_eq!(
            ETag(EntityTag::Weak(String::from("xyzzy"))).render_text(),
            String::from("W/\"xyzzy\""),
        );
    }

    #[test]
    fn round_trip() {
        for input in ["\"xyzzy\"", "W/\"xyzzy\"", "\"\""] {
            let header = ETag::from_str(input).unwrap();

            assert_eq!(header.to_string(), String::from(input));
        }
    }
}
