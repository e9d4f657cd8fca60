use itertools::Itertools;

use nom::branch::alt;
use nom::combinator::{map, not, opt, verify};
use nom::error::context;
use nom::multi::{many0, separated_list0};
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};

use gossamer_core::grammar::{equals_sign, solidus, tag};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{
    list_separator, parameter_separator, render_token_or_quoted, token, token_or_quoted, Weight,
};
use crate::media_type::{Parameter, Parameters};

// media-range   = ( "*/*" / ( type "/" "*" ) / ( type "/" subtype ) )
//                 *( OWS ";" OWS parameter )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.2
//
// The range head only; its parameters live on `AcceptableMedia` because the
// "q" parameter ends them.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum MediaRange {
    Any,
    Type(String),
    Closed(String, String),
}

impl TextEntity for MediaRange {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        alt((
            map(terminated(tag("*/*"), not(token)), |_| Self::Any),
            map(
                tuple((token, tag("/*"), not(token))),
                |(type_name, _, _)| Self::Type(type_name.to_string()),
            ),
            map(
                separated_pair(token, solidus, token),
                |(type_name, subtype)| Self::Closed(type_name.to_string(), subtype.to_string()),
            ),
        ))(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Any => String::from("*/*"),
            Self::Type(type_name) => format!("{}/*", type_name),
            Self::Closed(type_name, subtype) => format!("{}/{}", type_name, subtype),
        }
    }
}

impl_text_entity_traits!(MediaRange);

// accept-ext    = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptExtension {
    pub name: String,
    pub value: Option<String>,
}

impl TextEntity for AcceptExtension {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            preceded(
                parameter_separator,
                pair(
                    token,
                    opt(preceded(equals_sign, token_or_quoted)),
                ),
            ),
            |(name, value)| Self {
                name: name.to_string(),
                value,
            },
        )(input)
    }

    fn render_text(&self) -> String {
        match &self.value {
            Some(value) => format!(";{}={}", self.name, render_token_or_quoted(value)),
            None => format!(";{}", self.name),
        }
    }
}

impl_text_entity_traits!(AcceptExtension);

// accept-params = weight *( accept-ext )
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptParameters {
    pub weight: Weight,
    pub extensions: Vec<AcceptExtension>,
}

impl TextEntity for AcceptParameters {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(
                Weight::parse_text,
                many0(AcceptExtension::parse_text),
            ),
            |(weight, extensions)| Self { weight, extensions },
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}{}",
            self.weight.render_text(),
            self.extensions.iter().map(|extension| extension.render_text()).join(""),
        )
    }
}

impl_text_entity_traits!(AcceptParameters);

/// The media-range parameters stop where the "q" parameter begins.
fn media_parameters(input: ParserInput) -> ParserResult<Parameters> {
    map(
        many0(
            preceded(
                parameter_separator,
                verify(Parameter::parse_text, |parameter: &Parameter| {
                    !parameter.name.eq_ignore_ascii_case("q")
                }),
            )
        ),
        Parameters,
    )(input)
}

/// One element of the Accept list.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptableMedia {
    pub range: MediaRange,
    pub parameters: Parameters,
    pub accept_parameters: Option<AcceptParameters>,
}

impl TextEntity for AcceptableMedia {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            tuple((
                MediaRange::parse_text,
                media_parameters,
                opt(AcceptParameters::parse_text),
            )),
            |(range, parameters, accept_parameters)| Self {
                range,
                parameters,
                accept_parameters,
            },
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}{}{}",
            self.range.render_text(),
            self.parameters.render_text(),
            self.accept_parameters.render_text(),
        )
    }
}

impl_text_entity_traits!(AcceptableMedia);

// Accept        = #( media-range [ accept-params ] )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.2
//
// The list may be empty.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Accept(pub Vec<AcceptableMedia>);

impl TextEntity for Accept {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ACCEPT",
            map(
                separated_list0(list_separator, AcceptableMedia::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|media| media.render_text()).join(", ")
    }
}

impl_text_entity_traits!(Accept);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text_media_range() {
        assert_parser_output!(
            MediaRange::parse_text("*/*;q=0.5".into()),
            (
                ";q=0.5",
                MediaRange::Any,
            ),
        );

        assert_parser_output!(
            MediaRange::parse_text("text/*, audio/basic".into()),
            (
                ", audio/basic",
                MediaRange::Type(String::from("text")),
            ),
        );

        assert_parser_output!(
            MediaRange::parse_text("audio/basic".into()),
            (
                "",
                MediaRange::Closed(String::from("audio"), String::from("basic")),
            ),
        );
    }

    #[test]
    fn parse_text_accept() {
        assert_parser_output!(
            Accept::parse_text("audio/*;q=0.2, audio/basic\r\n".into()),
            (
                "\r\n",
                Accept(vec![
                    AcceptableMedia {
                        range: MediaRange::Type(String::from("audio")),
                        parameters: Parameters(vec![]),
                        accept_parameters: Some(AcceptParameters {
                            weight: Weight(200),
                            extensions: vec![],
                        }),
                    },
                    AcceptableMedia {
                        range: MediaRange::Closed(String::from("audio"), String::from("basic")),
                        parameters: Parameters(vec![]),
                        accept_parameters: None,
                    },
                ]),
            ),
        );

        // A media parameter before the weight, an extension after it.
        assert_parser_output!(
            Accept::parse_text("text/html;level=1;q=0.5;ext=on".into()),
            (
                "",
                Accept(vec![
                    AcceptableMedia {
                        range: MediaRange::Closed(String::from("text"), String::from("html")),
                        parameters: Parameters(vec![Parameter::new("level", "1")]),
                        accept_parameters: Some(AcceptParameters {
                            weight: Weight(500),
                            extensions: vec![
                                AcceptExtension {
                                    name: String::from("ext"),
                                    value: Some(String::from("on")),
                                },
                            ],
                        }),
                    },
                ]),
            ),
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(
            Accept(vec![
                AcceptableMedia {
                    range: MediaRange::Type(String::from("text")),
                    parameters: Parameters(vec![]),
                    accept_parameters: Some(AcceptParameters {
                        weight: Weight(300),
                        extensions: vec![],
                    }),
                },
                AcceptableMedia {
                    range: MediaRange::Any,
                    parameters: Parameters(vec![]),
                    accept_parameters: None,
                },
            ]).render_text(),
            String::from("text/*;q=0.3, */*"),
        );
    }

    #[test]
    fn round_trip() {
        let inputs = [
            "text/*;q=0.3, text/html;q=0.7, text/html;level=1, */*;q=0.5",
            "audio/*;q=0.2, audio/basic",
        ];

        for input in inputs {
            let header = Accept::from_str(input).unwrap();

            assert_eq!(Accept::from_str(&header.to_string()), Ok(header), "{input}");
        }
    }
}
