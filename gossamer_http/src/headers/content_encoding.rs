use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, token};

// Content-Encoding = 1#content-coding
// content-coding   = token
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.2.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ContentEncoding(pub Vec<String>);

impl TextEntity for ContentEncoding {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CONTENT-ENCODING",
            map(
                separated_list1(list_separator, token),
                |codings| Self(codings.iter().map(|coding| coding.to_string()).collect()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().join(", ")
    }
}

impl_text_entity_traits!(ContentEncoding);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(
            ContentEncoding::from_str("gzip"),
            Ok(ContentEncoding(vec![String::from("gzip")])),
        );

        assert_eq!(
            ContentEncoding::from_str("deflate, gzip"),
            Ok(ContentEncoding(vec![String::from("deflate"), String::from("gzip")])),
        );

        assert!(ContentEncoding::from_str("").is_err());
    }
}
