use itertools::Itertools;

use nom::branch::alt;
use nom::bytes::complete::{take_while1, take_while_m_n};
use nom::combinator::{map, opt, recognize};
use nom::error::context;
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{pair, preceded};

use gossamer_core::grammar::{asterisk, colon, comma, is_alphanum_char, is_digit_char, period};
use gossamer_core::percent::pct_encoded;

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

/// Returns if varchar (percent triples aside).
///
/// varchar       = ALPHA / DIGIT / "_" / pct-encoded
pub fn is_varchar_char(input: char) -> bool {
    is_alphanum_char(input) || input == '_'
}

/// 1*( varchar ) allowing embedded percent triples.
fn varchar_run(input: ParserInput) -> ParserResult<ParserInput> {
    recognize(
        many1(
            alt((
                take_while1(is_varchar_char),
                pct_encoded,
            ))
        )
    )(input)
}

// varname       = varchar *( ["."] varchar )
//
// https://datatracker.ietf.org/doc/html/rfc6570#section-2.3
//
// Stored as written: the name is an identifier, so percent triples inside it
// are not decoded and data keys are looked up against the written form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VariableName(String);

impl VariableName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TextEntity for VariableName {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "VARNAME",
            map(
                recognize(
                    pair(
                        varchar_run,
                        many0(pair(opt(period), varchar_run)),
                    )
                ),
                |value: ParserInput| Self(value.to_string()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.clone()
    }
}

impl_text_entity_traits!(VariableName);

// modifier-level4 = prefix / explode
// prefix          = ":" max-length
// explode         = "*"
//
// https://datatracker.ietf.org/doc/html/rfc6570#section-2.4
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Modifier {
    Prefix(usize),
    Explode,
}

impl TextEntity for Modifier {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "MODIFIER",
            alt((
                map(preceded(colon, max_length), Self::Prefix),
                map(asterisk, |_| Self::Explode),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Prefix(length) => format!(":{}", length),
            Self::Explode => String::from("*"),
        }
    }
}

impl_text_entity_traits!(Modifier);

/// max-length    = %x31-39 0*3DIGIT   ; positive integer < 10000
fn max_length(input: ParserInput) -> ParserResult<usize> {
    let (remaining, digits) = recognize(
        pair(
            take_while_m_n(1, 1, |value: char| ('1'..='9').contains(&value)),
            take_while_m_n(0, 3, is_digit_char),
        )
    )(input)?;

    let Ok(length) = digits.to_string().parse::<usize>() else {
        return Err(
            nom::Err::Error(
                ParserError::new(String::from("invalid prefix max-length"), input)
            )
        );
    };

    Ok((remaining, length))
}

// varspec       = varname [ modifier-level4 ]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VariableSpec {
    pub name: VariableName,
    pub modifier: Option<Modifier>,
}

impl VariableSpec {
    pub fn new(name: VariableName, modifier: Option<Modifier>) -> Self {
        Self { name, modifier }
    }
}

impl TextEntity for VariableSpec {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(
                VariableName::parse_text,
                opt(Modifier::parse_text),
            ),
            |(name, modifier)| Self { name, modifier },
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{}{}", self.name.render_text(), self.modifier.render_text())
    }
}

impl_text_entity_traits!(VariableSpec);

// variable-list = varspec *( "," varspec )
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VariableList(pub Vec<VariableSpec>);

impl TextEntity for VariableList {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "VARIABLE-LIST",
            map(
                separated_list1(comma, VariableSpec::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|spec| spec.render_text()).join(",")
    }
}

impl_text_entity_traits!(VariableList);
