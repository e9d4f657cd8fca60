use nom::branch::alt;
use nom::combinator::{map, opt, success};
use nom::error::context;
use nom::sequence::tuple;

use gossamer_core::grammar::tag;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::authority::Authority;
use crate::fragment::Fragment;
use crate::path::{PathAbsolute, PathAbsoluteOrEmpty, PathNoScheme};
use crate::query::Query;
use crate::uri::Uri;

// relative-part = "//" authority path-abempty
//               / path-absolute
//               / path-noscheme
//               / path-empty
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-4.2
//
// Differs from hier-part only in the rootless position: the leading segment
// must be colon-free, otherwise it would read as a scheme.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum RelativePart {
    Authority(Authority, PathAbsoluteOrEmpty),
    Absolute(PathAbsolute),
    NoScheme(PathNoScheme),
    Empty,
}

impl TextEntity for RelativePart {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "RELATIVE-PART",
            alt((
                map(
                    tuple((
                        tag("//"),
                        Authority::parse_text,
                        PathAbsoluteOrEmpty::parse_text,
                    )),
                    |(_, authority, path)| Self::Authority(authority, path),
                ),
                map(PathAbsolute::parse_text, Self::Absolute),
                map(PathNoScheme::parse_text, Self::NoScheme),
                success(Self::Empty),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Authority(authority, path) => {
                format!("//{}{}", authority.render_text(), path.render_text())
            },
            Self::Absolute(path) => path.render_text(),
            Self::NoScheme(path) => path.render_text(),
            Self::Empty => String::new(),
        }
    }
}

impl_text_entity_traits!(RelativePart);

// relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-4.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RelativeReference {
    pub relative_part: RelativePart,
    pub query: Option<Query>,
    pub fragment: Option<Fragment>,
}

impl RelativeReference {
    pub fn new(
        relative_part: RelativePart,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Self {
        Self { relative_part, query, fragment }
    }
}

impl TextEntity for RelativeReference {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "RELATIVE-REF",
            map(
                tuple((
                    RelativePart::parse_text,
                    opt(Query::parse_text),
                    opt(Fragment::parse_text),
                )),
                |(relative_part, query, fragment)| {
                    Self { relative_part, query, fragment }
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}{}{}",
            self.relative_part.render_text(),
            self.query.render_text(),
            self.fragment.render_text(),
        )
    }
}

impl_text_entity_traits!(RelativeReference);

// URI-reference = URI / relative-ref
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
//
// The URI alternative is attempted first and backtracks as a whole.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum UriReference {
    Uri(Uri),
    Relative(RelativeReference),
}

impl TextEntity for UriReference {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "URI-REFERENCE",
            alt((
                map(Uri::parse_text, Self::Uri),
                map(RelativeReference::parse_text, Self::Relative),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Uri(uri) => uri.render_text(),
            Self::Relative(reference) => reference.render_text(),
        }
    }
}

impl_text_entity_traits!(UriReference);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    use crate::host::{Host, RegName};

    #[test]
    fn parse_text_relative_reference() {
        assert_parser_output!(
            RelativeReference::parse_text("a/b?k#f".into()),
            (
                "",
                RelativeReference {
                    relative_part: RelativePart::NoScheme(
                        PathNoScheme(vec![String::from("a"), String::from("b")]),
                    ),
                    query: Some(Query(String::from("k"))),
                    fragment: Some(Fragment(String::from("f"))),
                },
            ),
        );

        assert_parser_output!(
            RelativeReference::parse_text("//example.com/a".into()),
            (
                "",
                RelativeReference {
                    relative_part: RelativePart::Authority(
                        Authority::new(Host::Name(RegName::new("example.com")), None, None),
                        PathAbsoluteOrEmpty(vec![String::from("a")]),
                    ),
                    query: None,
                    fragment: None,
                },
            ),
        );

        // The empty reference is valid (same-document reference).
        assert_parser_output!(
            RelativeReference::parse_text("".into()),
            (
                "",
                RelativeReference {
                    relative_part: RelativePart::Empty,
                    query: None,
                    fragment: None,
                },
            ),
        );
    }

    #[test]
    fn uri_reference_prefers_uri() {
        assert!(matches!(
            UriReference::from_str("http://example.com").unwrap(),
            UriReference::Uri(_),
        ));

        // "a:b" carries a scheme, so it is a URI, not a relative reference.
        assert!(matches!(
            UriReference::from_str("a:b").unwrap(),
            UriReference::Uri(_),
        ));

        assert!(matches!(
            UriReference::from_str("a/b:c").unwrap(),
            UriReference::Relative(_),
        ));

        assert!(matches!(
            UriReference::from_str("#f").unwrap(),
            UriReference::Relative(_),
        ));
    }

    #[test]
    fn relative_reference_rejects_scheme() {
        // The leading segment of a relative reference may not contain ":".
        assert!(RelativeReference::from_str("a:b").is_err());
    }

    #[test]
    fn round_trip() {
        for input in ["", "#f", "?q", "a/b", "/a/b?q#f", "//user@example.com:80/x"] {
            let reference = UriReference::from_str(input).unwrap();

            assert_eq!(UriReference::from_str(&reference.to_string()), Ok(reference), "{input}");
        }
    }
}
