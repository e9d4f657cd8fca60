use itertools::Itertools;

use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::separated_list0;
use nom::sequence::pair;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, token, Weight};

// codings       = content-coding / "identity" / "*"
//
// "identity" compares case insensitively and normalizes to lowercase.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Codings {
    Any,
    Identity,
    Coding(String),
}

impl TextEntity for Codings {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(token, |value: ParserInput| {
            let coding = value.fragment();

            if *coding == "*" {
                Self::Any
            } else if coding.eq_ignore_ascii_case("identity") {
                Self::Identity
            } else {
                Self::Coding(coding.to_string())
            }
        })(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Any => String::from("*"),
            Self::Identity => String::from("identity"),
            Self::Coding(coding) => coding.to_owned(),
        }
    }
}

impl_text_entity_traits!(Codings);

/// One element of the Accept-Encoding list.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AcceptableEncoding {
    pub codings: Codings,
    pub weight: Option<Weight>,
}

impl TextEntity for AcceptableEncoding {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(Codings::parse_text, opt(Weight::parse_text)),
            |(codings, weight)| Self { codings, weight },
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{}{}", self.codings.render_text(), self.weight.render_text())
    }
}

impl_text_entity_traits!(AcceptableEncoding);

// Accept-Encoding = #( codings [ weight ] )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.4
//
// An empty list is meaningful: it says the client accepts no codings.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct AcceptEncoding(pub Vec<AcceptableEncoding>);

impl TextEntity for AcceptEncoding {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ACCEPT-ENCODING",
            map(
                separated_list0(list_separator, AcceptableEncoding::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|encoding| encoding.render_text()).join(", ")
    }
}

impl_text_entity_traits!(AcceptEncoding);
