use nom::branch::alt;
use nom::combinator::{map, opt, success};
use nom::error::context;
use nom::sequence::tuple;

use gossamer_core::grammar::{colon, tag};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::authority::Authority;
use crate::fragment::Fragment;
use crate::path::{PathAbsolute, PathAbsoluteOrEmpty, PathRootless};
use crate::query::Query;
use crate::scheme::Scheme;

// hier-part     = "//" authority path-abempty
//               / path-absolute
//               / path-rootless
//               / path-empty
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3
//
// path-empty is the Empty variant; it re-emits as the empty string.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum HierarchyPart {
    Authority(Authority, PathAbsoluteOrEmpty),
    Absolute(PathAbsolute),
    Rootless(PathRootless),
    Empty,
}

impl TextEntity for HierarchyPart {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "HIER-PART",
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
                map(PathRootless::parse_text, Self::Rootless),
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
            Self::Rootless(path) => path.render_text(),
            Self::Empty => String::new(),
        }
    }
}

impl_text_entity_traits!(HierarchyPart);

// URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Uri {
    pub scheme: Scheme,
    pub hierarchy_part: HierarchyPart,
    pub query: Option<Query>,
    pub fragment: Option<Fragment>,
}

impl Uri {
    pub fn new(
        scheme: Scheme,
        hierarchy_part: HierarchyPart,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Self {
        Self { scheme, hierarchy_part, query, fragment }
    }
}

impl TextEntity for Uri {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "URI",
            map(
                tuple((
                    Scheme::parse_text,
                    colon,
                    HierarchyPart::parse_text,
                    opt(Query::parse_text),
                    opt(Fragment::parse_text),
                )),
                |(scheme, _colon, hierarchy_part, query, fragment)| {
                    Self { scheme, hierarchy_part, query, fragment }
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}:{}{}{}",
            self.scheme.render_text(),
            self.hierarchy_part.render_text(),
            self.query.render_text(),
            self.fragment.render_text(),
        )
    }
}

impl_text_entity_traits!(Uri);

// absolute-URI  = scheme ":" hier-part [ "?" query ]
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-4.3
//
// Identical to URI except that a fragment can never appear.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AbsoluteUri {
    pub scheme: Scheme,
    pub hierarchy_part: HierarchyPart,
    pub query: Option<Query>,
}

impl AbsoluteUri {
    pub fn new(scheme: Scheme, hierarchy_part: HierarchyPart, query: Option<Query>) -> Self {
        Self { scheme, hierarchy_part, query }
    }
}

impl TextEntity for AbsoluteUri {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ABSOLUTE-URI",
            map(
                tuple((
                    Scheme::parse_text,
                    colon,
                    HierarchyPart::parse_text,
                    opt(Query::parse_text),
                )),
                |(scheme, _colon, hierarchy_part, query)| {
                    Self { scheme, hierarchy_part, query }
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}:{}{}",
            self.scheme.render_text(),
            self.hierarchy_part.render_text(),
            self.query.render_text(),
        )
    }
}

impl_text_entity_traits!(AbsoluteUri);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    use crate::authority::{Port, UserInfo};
    use crate::host::{Host, RegName};

    #[test]
    fn parse_text() {
        assert_parser_output!(
            Uri::parse_text("http://user@example.com:8080/a/b?k=v#f".into()),
            (
                "",
                Uri {
                    scheme: Scheme::new("http"),
                    hierarchy_part: HierarchyPart::Authority(
                        Authority::new(
                            Host::Name(RegName::new("example.com")),
                            Some(Port(8080)),
                            Some(UserInfo::new("user")),
                        ),
                        PathAbsoluteOrEmpty(vec![String::from("a"), String::from("b")]),
                    ),
                    query: Some(Query(String::from("k=v"))),
                    fragment: Some(Fragment(String::from("f"))),
                },
            ),
        );

        assert_parser_output!(
            Uri::parse_text("urn:oasis:names TESTING".into()),
            (
                " TESTING",
                Uri {
                    scheme: Scheme::new("urn"),
                    hierarchy_part: HierarchyPart::Rootless(
                        PathRootless(vec![String::from("oasis:names")]),
                    ),
                    query: None,
                    fragment: None,
                },
            ),
        );

        // An empty hier-part is valid.
        assert_parser_output!(
            Uri::parse_text("about:?q".into()),
            (
                "",
                Uri {
                    scheme: Scheme::new("about"),
                    hierarchy_part: HierarchyPart::Empty,
                    query: Some(Query(String::from("q"))),
                    fragment: None,
                },
            ),
        );

        assert!(Uri::parse_text("no-colon".into()).is_err());
    }

    #[test]
    fn render_text() {
        assert_eq!(
            Uri {
                scheme: Scheme::new("http"),
                hierarchy_part: HierarchyPart::Authority(
                    Authority::new(Host::Name(RegName::new("example.com")), None, None),
                    PathAbsoluteOrEmpty(vec![]),
                ),
                query: None,
                fragment: None,
            }.render_text(),
            String::from("http://example.com"),
        );

        assert_eq!(
            Uri {
                scheme: Scheme::new("about"),
                hierarchy_part: HierarchyPart::Empty,
                query: None,
                fragment: Some(Fragment(String::from("top"))),
            }.render_text(),
            String::from("about:#top"),
        );
    }

    #[test]
    fn absolute_uri_forbids_fragment() {
        assert!(AbsoluteUri::from_str("http://example.com/a?k=v").is_ok());

        // The "#" cannot be consumed, so full-input parsing fails.
        assert!(AbsoluteUri::from_str("http://example.com/a#f").is_err());
    }

    #[test]
    fn round_trip() {
        let inputs = [
            "http://user@example.com:8080/a/b?k=v#f",
            "ftp://ftp.is.co.za/rfc/rfc1808.txt",
            "ldap://[2001:db8::7]/c=GB?objectClass?one",
            "mailto:John.Doe@example.com",
            "news:comp.infosystems.www.servers.unix",
            "tel:+1-816-555-1212",
            "telnet://192.0.2.16:80/",
            "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
            "about:",
        ];

        for input in inputs {
            let uri = Uri::from_str(input).unwrap();

            assert_eq!(Uri::from_str(&uri.to_string()), Ok(uri), "{input}");
        }
    }
}
