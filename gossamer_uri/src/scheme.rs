use nom::branch::alt;
use nom::bytes::complete::is_a;
use nom::combinator::{map, recognize};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::pair;

use gossamer_core::grammar::{alpha, digit, is_alpha_char, is_alphanum_char};

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

// scheme      = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
//
// No case normalization is applied on parse or render.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Scheme(String);

impl Scheme {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_scheme_chars(input: ParserInput) -> ParserResult<Scheme> {
    map(
        recognize(
            pair(
                alpha,
                many0(
                    alt((
                        alpha,
                        digit,
                        is_a("+-."),
                    ))
                ),
            )
        ),
        |value: ParserInput| Scheme(value.to_string()),
    )(input)
}

fn parse_scheme_with_message(input: ParserInput) -> ParserResult<Scheme> {
    parse_scheme_chars(input).map_err(move |error| match error {
        nom::Err::Error(_error) => {
            nom::Err::Error(
                ParserError::new(
                    String::from("expected RFC-3986 SCHEME (ALPHA *( ALPHA / DIGIT / \"+\" / \"-\" / \".\" ))"),
                    input,
                )
            )
        },

        nom::Err::Failure(_error) => {
            nom::Err::Failure(
                ParserError::new(
                    String::from("expected RFC-3986 SCHEME (ALPHA *( ALPHA / DIGIT / \"+\" / \"-\" / \".\" ))"),
                    input,
                )
            )
        },

        error => error,
    })
}

impl TextEntity for Scheme {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "SCHEME",
            parse_scheme_with_message,
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.clone()
    }

    fn validate(&self) -> Result<(), String> {
        let mut chars = self.0.chars();

        match chars.next() {
            Some(first) if is_alpha_char(first) => {},
            _ => return Err(String::from("scheme must begin with an ALPHA character")),
        }

        if chars.all(|value| is_alphanum_char(value) || matches!(value, '+' | '-' | '.')) {
            Ok(())
        } else {
            Err(String::from("scheme may only contain ALPHA / DIGIT / \"+\" / \"-\" / \".\""))
        }
    }
}

impl_text_entity_traits!(Scheme);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::{assert_parser_output, assert_parser_error};

    #[test]
    fn parse_text() {
        assert_parser_output!(
            Scheme::parse_text("http://example.com".into()),
            (
                "://example.com",
                Scheme(String::from("http")),
            ),
        );

        assert_parser_output!(
            Scheme::parse_text("coap+tcp:".into()),
            (
                ":",
                Scheme(String::from("coap+tcp")),
            ),
        );

        // Greedy over the full scheme charset.
        assert_parser_output!(
            Scheme::parse_text("a1-b.c+d rest".into()),
            (
                " rest",
                Scheme(String::from("a1-b.c+d")),
            ),
        );

        assert!(Scheme::parse_text("1http:".into()).is_err());
        assert!(Scheme::parse_text("+x:".into()).is_err());
        assert!(Scheme::parse_text(":".into()).is_err());
    }

    #[test]
    fn parse_text_error() {
        assert_parser_error!(
            Scheme::parse_text("9gag:".into()),
            nom::Err::Error(
                span: "9gag:",
                message: "expected RFC-3986 SCHEME (ALPHA *( ALPHA / DIGIT / \"+\" / \"-\" / \".\" ))",
                context: ["SCHEME"],
            ),
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(
            Scheme(String::from("urn")).render_text(),
            String::from("urn"),
        );

        // Case is preserved, not folded.
        assert_eq!(
            Scheme(String::from("HTTP")).render_text(),
            String::from("HTTP"),
        );
    }

    #[test]
    fn from_str_requires_full_input() {
        assert_eq!(
            Scheme::from_str("https"),
            Ok(Scheme(String::from("https"))),
        );

        assert!(Scheme::from_str("https:").is_err());
    }

    #[test]
    fn validate() {
        assert!(Scheme::new("ftp").validate().is_ok());

        assert!(Scheme::new("").validate().is_err());
        assert!(Scheme::new("9gag").validate().is_err());
        assert!(Scheme::new("ht tp").validate().is_err());
    }
}
