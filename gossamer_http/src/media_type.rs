use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, tuple};

use gossamer_core::grammar::{equals_sign, solidus};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{parameter_separator, render_token_or_quoted, token, token_or_quoted};

// parameter     = token "=" ( token / quoted-string )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.1
//
// The value is stored unescaped; rendering quotes it again only when it is
// not a valid token.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

impl TextEntity for Parameter {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            separated_pair(token, equals_sign, token_or_quoted),
            |(name, value)| Self {
                name: name.to_string(),
                value,
            },
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{}={}", self.name, render_token_or_quoted(&self.value))
    }
}

impl_text_entity_traits!(Parameter);

/// *( OWS ";" OWS parameter )
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Parameters(pub Vec<Parameter>);

impl TextEntity for Parameters {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            many0(preceded(parameter_separator, Parameter::parse_text)),
            Self,
        )(input)
    }

    fn render_text(&self) -> String {
        self.0
            .iter()
            .map(|parameter| format!(";{}", parameter.render_text()))
            .join("")
    }
}

impl_text_entity_traits!(Parameters);

// media-type    = type "/" subtype *( OWS ";" OWS parameter )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.1
//
// No case folding is applied; values re-render as they were written.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MediaType {
    pub type_name: String,
    pub subtype: String,
    pub parameters: Parameters,
}

impl MediaType {
    pub fn new(
        type_name: impl Into<String>,
        subtype: impl Into<String>,
        parameters: Parameters,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            subtype: subtype.into(),
            parameters,
        }
    }
}

impl TextEntity for MediaType {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "MEDIA-TYPE",
            map(
                tuple((
                    token,
                    solidus,
                    token,
                    Parameters::parse_text,
                )),
                |(type_name, _, subtype, parameters)| Self {
                    type_name: type_name.to_string(),
                    subtype: subtype.to_string(),
                    parameters,
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}/{}{}",
            self.type_name,
            self.subtype,
            self.parameters.render_text(),
        )
    }
}

impl_text_entity_traits!(MediaType);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text() {
        assert_parser_output!(
            MediaType::parse_text("text/html;charset=utf-8\r\n".into()),
            (
                "\r\n",
                MediaType::new(
                    "text",
                    "html",
                    Parameters(vec![Parameter::new("charset", "utf-8")]),
                ),
            ),
        );

        // Whitespace around the ";" is tolerated, and quoted values are
        // unescaped.
        assert_parser_output!(
            MediaType::parse_text("multipart/form-data ; boundary=\"a b\"".into()),
            (
                "",
                MediaType::new(
                    "multipart",
                    "form-data",
                    Parameters(vec![Parameter::new("boundary", "a b")]),
                ),
            ),
        );

        assert!(MediaType::parse_text("texthtml".into()).is_err());
    }

    #[test]
    fn render_text() {
        assert_eq!(
            MediaType::new(
                "application",
                "json",
                Parameters(vec![]),
            ).render_text(),
            String::from("application/json"),
        );

        // A non-token value re-renders quoted.
        assert_eq!(
            MediaType::new(
                "multipart",
                "form-data",
                Parameters(vec![Parameter::new("boundary", "a b")]),
            ).render_text(),
            String::from("multipart/form-data;boundary=\"a b\""),
        );
    }

    #[test]
    fn round_trip() {
        for input in ["text/plain", "text/html;charset=utf-8", "a/b;x=1;y=\"q z\""] {
            let media_type = MediaType::from_str(input).unwrap();

            assert_eq!(MediaType::from_str(&media_type.to_string()), Ok(media_type), "{input}");
        }
    }
}
