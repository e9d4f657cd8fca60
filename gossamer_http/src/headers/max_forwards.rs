use nom::bytes::complete::take_while1;
use nom::error::context;

use gossamer_core::grammar::is_digit_char;

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

// Max-Forwards  = 1*DIGIT
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.1.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MaxForwards(pub u32);

fn parse_max_forwards(input: ParserInput) -> ParserResult<MaxForwards> {
    let (remaining, digits) = take_while1(is_digit_char)(input)?;

    let Ok(hops) = digits.to_string().parse::<u32>() else {
        return Err(
            nom::Err::Error(
                ParserError::new(String::from("max-forwards does not fit an unsigned 32-bit integer"), input)
            )
        );
    };

    Ok((remaining, MaxForwards(hops)))
}

impl TextEntity for MaxForwards {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "MAX-FORWARDS",
            parse_max_forwards,
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.to_string()
    }
}

impl_text_entity_traits!(MaxForwards);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(MaxForwards::from_str("10"), Ok(MaxForwards(10)));

        assert!(MaxForwards::from_str("ten").is_err());
    }
}
