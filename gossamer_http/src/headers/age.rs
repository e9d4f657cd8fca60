use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::delta_seconds;

// Age           = delta-seconds
//
// https://datatracker.ietf.org/doc/html/rfc7234#section-5.1
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Age(pub u64);

impl TextEntity for Age {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "AGE",
            map(delta_seconds, Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.to_string()
    }
}

impl_text_entity_traits!(Age);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Age::from_str("0"), Ok(Age(0)));
        assert_eq!(Age::from_str("86400"), Ok(Age(86400)));

        assert!(Age::from_str("-1").is_err());
    }
}
