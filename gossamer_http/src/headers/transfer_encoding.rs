use itertools::Itertools;

use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, token};

// transfer-coding = "chunked" / "compress" / "deflate" / "gzip"
//                 / transfer-extension
//
// https://datatracker.ietf.org/doc/html/rfc7230#section-4
//
// Registered codings are recognized case insensitively and normalize to
// their lowercase form on render; anything else is an extension token.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TransferCoding {
    Chunked,
    Compress,
    Deflate,
    Gzip,
    Extension(String),
}

impl TextEntity for TransferCoding {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(token, |value: ParserInput| {
            let coding = value.fragment();

            if coding.eq_ignore_ascii_case("chunked") {
                Self::Chunked
            } else if coding.eq_ignore_ascii_case("compress") {
                Self::Compress
            } else if coding.eq_ignore_ascii_case("deflate") {
                Self::Deflate
            } else if coding.eq_ignore_ascii_case("gzip") {
                Self::Gzip
            } else {
                Self::Extension(coding.to_string())
            }
        })(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Chunked => String::from("chunked"),
            Self::Compress => String::from("compress"),
            Self::Deflate => String::from("deflate"),
            Self::Gzip => String::from("gzip"),
            Self::Extension(coding) => coding.to_owned(),
        }
    }
}

impl_text_entity_traits!(TransferCoding);

// Transfer-Encoding = 1#transfer-coding
//
// https://datatracker.ietf.org/doc/html/rfc7230#section-3.3.1
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TransferEncoding(pub Vec<TransferCoding>);

impl TextEntity for TransferEncoding {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "TRANSFER-ENCODING",
            map(
                separated_list1(list_separator, TransferCoding::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|coding| coding.render_text()).join(", ")
    }
}

impl_text_entity_traits!(TransferEncoding);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text() {
        assert_parser_output!(
            TransferEncoding::parse_text("gzip, chunked\r\n".into()),
            (
                "\r\n",
                TransferEncoding(vec![TransferCoding::Gzip, TransferCoding::Chunked]),
            ),
        );

        // Codings match case insensitively.
        assert_parser_output!(
            TransferEncoding::parse_text("Chunked".into()),
            (
                "",
                TransferEncoding(vec![TransferCoding::Chunked]),
            ),
        );

        assert_parser_output!(
            TransferEncoding::parse_text("br".into()),
            (
                "",
                TransferEncoding(vec![TransferCoding::Extension(String::from("br"))]),
            ),
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(
            TransferEncoding(vec![TransferCoding::Gzip, TransferCoding::Chunked]).render_text(),
            String::from("gzip, chunked"),
        );
    }

    #[test]
    fn round_trip() {
        let encoding = TransferEncoding::from_str("gzip, br, chunked").unwrap();

        assert_eq!(TransferEncoding::from_str(&encoding.to_string()), Ok(encoding));
    }
}
