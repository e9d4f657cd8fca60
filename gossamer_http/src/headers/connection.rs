use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, token};

// Connection    = 1#connection-option
// connection-option = token
//
// https://datatracker.ietf.org/doc/html/rfc7230#section-6.1
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Connection(pub Vec<String>);

impl TextEntity for Connection {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONNECTION",
            map(
                separated_list1(list_separator, token),
                |options| Self(options.iter().map(|option| option.to_string()).collect()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().join(", ")
    }
}

impl_text_entity_traits!(Connection);
