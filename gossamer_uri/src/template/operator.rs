use nom::branch::alt;
use nom::combinator::map;
use nom::error::context;

use gossamer_core::grammar::tag;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

// operator      = op-level2 / op-level3 / op-reserve
//
// https://datatracker.ietf.org/doc/html/rfc6570#section-2.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Level2(OperatorLevel2),
    Level3(OperatorLevel3),
    Reserved(OperatorReserved),
}

impl TextEntity for Operator {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "OPERATOR",
            alt((
                map(OperatorLevel2::parse_text, Self::Level2),
                map(OperatorLevel3::parse_text, Self::Level3),
                map(OperatorReserved::parse_text, Self::Reserved),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Level2(operator) => operator.render_text(),
            Self::Level3(operator) => operator.render_text(),
            Self::Reserved(operator) => operator.render_text(),
        }
    }
}

impl_text_entity_traits!(Operator);

// op-level2     = "+" / "#"
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum OperatorLevel2 {
    Reserved,
    Fragment,
}

impl TextEntity for OperatorLevel2 {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        alt((
            map(tag("+"), |_| Self::Reserved),
            map(tag("#"), |_| Self::Fragment),
        ))(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Reserved => String::from("+"),
            Self::Fragment => String::from("#"),
        }
    }
}

impl_text_entity_traits!(OperatorLevel2);

// op-level3     = "." / "/" / ";" / "?" / "&"
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum OperatorLevel3 {
    Label,
    Segment,
    Parameter,
    Query,
    QueryContinuation,
}

impl TextEntity for OperatorLevel3 {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        alt((
            map(tag("."), |_| Self::Label),
            map(tag("/"), |_| Self::Segment),
            map(tag(";"), |_| Self::Parameter),
            map(tag("?"), |_| Self::Query),
            map(tag("&"), |_| Self::QueryContinuation),
        ))(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Label => String::from("."),
            Self::Segment => String::from("/"),
            Self::Parameter => String::from(";"),
            Self::Query => String::from("?"),
            Self::QueryContinuation => String::from("&"),
        }
    }
}

impl_text_entity_traits!(OperatorLevel3);

// op-reserve    = "=" / "," / "!" / "@" / "|"
//
// Reserved for future extension; such expressions parse and re-render but
// expand like the operator-less form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum OperatorReserved {
    Equals,
    Comma,
    Exclamation,
    At,
    Pipe,
}

impl TextEntity for OperatorReserved {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        alt((
            map(tag("="), |_| Self::Equals),
            map(tag(","), |_| Self::Comma),
            map(tag("!"), |_| Self::Exclamation),
            map(tag("@"), |_| Self::At),
            map(tag("|"), |_| Self::Pipe),
        ))(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Equals => String::from("="),
            Self::Comma => String::from(","),
            Self::Exclamation => String::from("!"),
            Self::At => String::from("@"),
            Self::Pipe => String::from("|"),
        }
    }
}

impl_text_entity_traits!(OperatorReserved);
