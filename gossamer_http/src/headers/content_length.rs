use nom::bytes::complete::take_while1;
use nom::error::context;

use gossamer_core::grammar::is_digit_char;

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

// Content-Length = 1*DIGIT
//
// https://datatracker.ietf.org/doc/html/rfc7230#section-3.3.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContentLength(pub u64);

fn parse_content_length(input: ParserInput) -> ParserResult<ContentLength> {
    let (remaining, digits) = take_while1(is_digit_char)(input)?;

    let Ok(length) = digits.to_string().parse::<u64>() else {
        return Err(
            nom::Err::Error(
                ParserError::new(String::from("content-length does not fit an unsigned 64-bit integer"), input)
            )
        );
    };

    Ok((remaining, ContentLength(length)))
}

impl TextEntity for ContentLength {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONTENT-LENGTH",
            parse_content_length,
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.to_string()
    }
}

impl_text_entity_traits!(ContentLength);
