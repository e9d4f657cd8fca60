use itertools::Itertools;

use nom::combinator::{map, opt};
use nom::multi::many0;
use nom::sequence::{pair, preceded};

use gossamer_core::grammar::{
    is_colon_char, is_commercial_at_char, is_sub_delims_char, is_unreserved_char, solidus,
};
use gossamer_core::percent::{percent_decoded0, percent_decoded1, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

/// Returns if pchar (percent triples aside).
///
/// pchar         = unreserved / pct-encoded / sub-delims / ":" / "@"
pub fn is_pchar_char(input: char) -> bool {
    is_unreserved_char(input)
        || is_sub_delims_char(input)
        || is_colon_char(input)
        || is_commercial_at_char(input)
}

/// Returns if a char may appear in segment-nz-nc — pchar without ":".
pub fn is_segment_nz_nc_char(input: char) -> bool {
    is_unreserved_char(input) || is_sub_delims_char(input) || is_commercial_at_char(input)
}

/// segment       = *pchar
fn segment(input: ParserInput) -> ParserResult<String> {
    percent_decoded0(is_pchar_char)(input)
}

/// segment-nz    = 1*pchar
fn segment_nz(input: ParserInput) -> ParserResult<String> {
    percent_decoded1(is_pchar_char)(input)
}

/// segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
///               ; non-zero-length segment without any colon ":"
fn segment_nz_nc(input: ParserInput) -> ParserResult<String> {
    percent_decoded1(is_segment_nz_nc_char)(input)
}

fn render_segment(segment: &str) -> String {
    percent_encode(segment, is_pchar_char)
}

// path-abempty  = *( "/" segment )
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct PathAbsoluteOrEmpty(pub Vec<String>);

impl TextEntity for PathAbsoluteOrEmpty {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            many0(preceded(solidus, segment)),
            Self,
        )(input)
    }

    fn render_text(&self) -> String {
        self.0
            .iter()
            .map(|segment| format!("/{}", render_segment(segment)))
            .join("")
    }
}

impl_text_entity_traits!(PathAbsoluteOrEmpty);

// path-absolute = "/" [ segment-nz *( "/" segment ) ]
//
// A hand-built value whose first segment is empty would render as "//...",
// which reads as the start of an authority; `try_new` and `validate` police
// that, `new` does not.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PathAbsolute(Vec<String>);

impl PathAbsolute {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn try_new(segments: Vec<String>) -> Result<Self, String> {
        let path = Self(segments);

        path.validate()?;

        Ok(path)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl TextEntity for PathAbsolute {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            preceded(
                solidus,
                opt(
                    pair(
                        segment_nz,
                        many0(preceded(solidus, segment)),
                    )
                ),
            ),
            |tail| {
                let mut segments = Vec::new();

                if let Some((first, rest)) = tail {
                    segments.push(first);
                    segments.extend(rest);
                }

                Self(segments)
            },
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "/{}",
            self.0.iter().map(|segment| render_segment(segment)).join("/"),
        )
    }

    fn validate(&self) -> Result<(), String> {
        if self.0.first().map_or(false, |segment| segment.is_empty()) {
            Err(String::from("path-absolute cannot begin with an empty segment"))
        } else {
            Ok(())
        }
    }
}

impl_text_entity_traits!(PathAbsolute);

// path-noscheme = segment-nz-nc *( "/" segment )
//
// The leading segment cannot contain ":" (it would read as a scheme); the
// renderer percent-encodes any ":" a hand-built first segment carries.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PathNoScheme(pub Vec<String>);

impl TextEntity for PathNoScheme {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(
                segment_nz_nc,
                many0(preceded(solidus, segment)),
            ),
            |(first, rest)| {
                let mut segments = vec![first];

                segments.extend(rest);

                Self(segments)
            },
        )(input)
    }

    fn render_text(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                if index == 0 {
                    percent_encode(segment, is_segment_nz_nc_char)
                } else {
                    render_segment(segment)
                }
            })
            .join("/")
    }
}

impl_text_entity_traits!(PathNoScheme);

// path-rootless = segment-nz *( "/" segment )
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PathRootless(pub Vec<String>);

impl TextEntity for PathRootless {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(
                segment_nz,
                many0(preceded(solidus, segment)),
            ),
            |(first, rest)| {
                let mut segments = vec![first];

                segments.extend(rest);

                Self(segments)
            },
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|segment| render_segment(segment)).join("/")
    }
}

impl_text_entity_traits!(PathRootless);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text_path_abempty() {
        assert_parser_output!(
            PathAbsoluteOrEmpty::parse_text("/a/b?k=v".into()),
            (
                "?k=v",
                PathAbsoluteOrEmpty(vec![String::from("a"), String::from("b")]),
            ),
        );

        // Zero segments are fine.
        assert_parser_output!(
            PathAbsoluteOrEmpty::parse_text("?k=v".into()),
            (
                "?k=v",
                PathAbsoluteOrEmpty(vec![]),
            ),
        );

        // Trailing and doubled slashes produce empty segments.
        assert_parser_output!(
            PathAbsoluteOrEmpty::parse_text("/a//b/".into()),
            (
                "",
                PathAbsoluteOrEmpty(vec![
                    String::from("a"),
                    String::new(),
                    String::from("b"),
                    String::new(),
                ]),
            ),
        );
    }

    #[test]
    fn parse_text_path_absolute() {
        assert_parser_output!(
            PathAbsolute::parse_text("/a/b#f".into()),
            (
                "#f",
                PathAbsolute(vec![String::from("a"), String::from("b")]),
            ),
        );

        assert_parser_output!(
            PathAbsolute::parse_text("/".into()),
            (
                "",
                PathAbsolute(vec![]),
            ),
        );

        // "//" is not path-absolute; the leading solidus is consumed, the
        // second one cannot start a segment-nz.
        assert_parser_output!(
            PathAbsolute::parse_text("//x".into()),
            (
                "/x",
                PathAbsolute(vec![]),
            ),
        );

        assert!(PathAbsolute::parse_text("a/b".into()).is_err());
    }

    #[test]
    fn parse_text_path_noscheme() {
        assert_parser_output!(
            PathNoScheme::parse_text("a/b:c?q".into()),
            (
                "?q",
                PathNoScheme(vec![String::from("a"), String::from("b:c")]),
            ),
        );

        // A colon in the first segment reads as a scheme, so it cannot match.
        assert_parser_output!(
            PathNoScheme::parse_text("a:b".into()),
            (
                ":b",
                PathNoScheme(vec![String::from("a")]),
            ),
        );
    }

    #[test]
    fn parse_text_path_rootless() {
        assert_parser_output!(
            PathRootless::parse_text("a:1/b rest".into()),
            (
                " rest",
                PathRootless(vec![String::from("a:1"), String::from("b")]),
            ),
        );

        assert!(PathRootless::parse_text("/a".into()).is_err());
    }

    #[test]
    fn render_text() {
        assert_eq!(
            PathAbsoluteOrEmpty(vec![String::from("a"), String::from("b c")]).render_text(),
            String::from("/a/b%20c"),
        );

        assert_eq!(PathAbsoluteOrEmpty(vec![]).render_text(), String::new());

        assert_eq!(PathAbsolute(vec![]).render_text(), String::from("/"));

        // A decoded "/" inside a segment is re-encoded, not re-split.
        assert_eq!(
            PathRootless(vec![String::from("a/b")]).render_text(),
            String::from("a%2Fb"),
        );

        // The first noscheme segment re-encodes ":".
        assert_eq!(
            PathNoScheme(vec![String::from("a:b"), String::from("c:d")]).render_text(),
            String::from("a%3Ab/c:d"),
        );
    }

    #[test]
    fn try_new_rejects_leading_empty_segment() {
        assert!(PathAbsolute::try_new(vec![String::new(), String::from("x")]).is_err());

        assert!(PathAbsolute::try_new(vec![]).is_ok());
        assert!(PathAbsolute::try_new(vec![String::from("x"), String::new()]).is_ok());

        // `new` stays advisory.
        assert!(PathAbsolute::new(vec![String::new()]).validate().is_err());
    }

    #[test]
    fn round_trip() {
        for input in ["/", "/a/b", "/a//b/", "/a%2Fb"] {
            let path = PathAbsoluteOrEmpty::from_str(input).unwrap();

            assert_eq!(PathAbsoluteOrEmpty::from_str(&path.to_string()), Ok(path));
        }
    }
}
