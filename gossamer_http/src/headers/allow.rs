use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list0;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::list_separator;
use crate::method::Method;

// Allow         = #method
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-7.4.1
//
// The list may be empty: "Allow:" with no value tells the client the
// resource allows no methods at all.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Allow(pub Vec<Method>);

impl TextEntity for Allow {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "ALLOW",
            map(
                separated_list0(list_separator, Method::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|method| method.render_text()).join(", ")
    }
}

impl_text_entity_traits!(Allow);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(
            Allow::from_str("GET, HEAD, PUT"),
            Ok(Allow(vec![Method::Get, Method::Head, Method::Put])),
        );

        assert_eq!(Allow::from_str(""), Ok(Allow(vec![])));
    }

    #[test]
    fn render_text() {
        assert_eq!(
            Allow(vec![Method::Get, Method::Head]).render_text(),
            String::from("GET, HEAD"),
        );

        assert_eq!(Allow(vec![]).render_text(), String::new());
    }
}
