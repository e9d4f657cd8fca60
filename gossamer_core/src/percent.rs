use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::combinator::{map, recognize};
use nom::multi::{many0, many1};
use nom::sequence::tuple;

use crate::grammar::{hexdig, is_hexdig_char, percent_sign};

use crate::{ParserInput, ParserResult, ParserError};

/// pct-encoded   = "%" HEXDIG HEXDIG
///
/// Both hex digit cases are accepted.
///
/// https://datatracker.ietf.org/doc/html/rfc3986#section-2.1
///
/// # Examples
///
/// ```rust
/// use gossamer_core::percent::pct_encoded;
///
/// assert!(pct_encoded("%20".into()).is_ok());
/// assert!(pct_encoded("%c3%a9".into()).is_ok());
///
/// assert!(pct_encoded("%2".into()).is_err());
/// assert!(pct_encoded("%GG".into()).is_err());
/// assert!(pct_encoded("20".into()).is_err());
/// ```
pub fn pct_encoded(input: ParserInput) -> ParserResult<ParserInput> {
    recognize(
        tuple((percent_sign, hexdig, hexdig))
    )(input)
}

/// Parses one `%XX` triple into the octet it encodes.
fn pct_encoded_octet(input: ParserInput) -> ParserResult<u8> {
    let (remaining, triple) = pct_encoded(input)?;

    let Ok(octet) = u8::from_str_radix(&triple.fragment()[1..], 16) else {
        return Err(
            nom::Err::Error(
                ParserError::new(String::from("invalid percent-encoded octet"), input)
            )
        );
    };

    Ok((remaining, octet))
}

/// Builds a parser for a percent-encoded production over the given character
/// whitelist: a possibly empty run of whitelisted characters and `%XX`
/// triples, yielding the decoded string.
///
/// Percent triples decode to octets; the accumulated octet stream must form
/// valid UTF-8, otherwise the run fails as a whole.
pub fn percent_decoded0<F>(is_allowed: F) -> impl Fn(ParserInput) -> ParserResult<String>
where
    F: Fn(char) -> bool + Copy,
{
    move |input: ParserInput| {
        let (remaining, chunks) = many0(percent_decoded_chunk(is_allowed))(input)?;

        decoded_chunks_to_string(input, remaining, chunks)
    }
}

/// Non-empty variant of [`percent_decoded0`].
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_unreserved_char;
/// use gossamer_core::percent::percent_decoded1;
///
/// let (remaining, decoded) = percent_decoded1(is_unreserved_char)("a%20b/c".into()).unwrap();
///
/// assert_eq!(*remaining, "/c");
/// assert_eq!(decoded, String::from("a b"));
///
/// assert!(percent_decoded1(is_unreserved_char)("/".into()).is_err());
/// ```
pub fn percent_decoded1<F>(is_allowed: F) -> impl Fn(ParserInput) -> ParserResult<String>
where
    F: Fn(char) -> bool + Copy,
{
    move |input: ParserInput| {
        let (remaining, chunks) = many1(percent_decoded_chunk(is_allowed))(input)?;

        decoded_chunks_to_string(input, remaining, chunks)
    }
}

fn percent_decoded_chunk<F>(is_allowed: F) -> impl Fn(ParserInput) -> ParserResult<Vec<u8>>
where
    F: Fn(char) -> bool + Copy,
{
    move |input: ParserInput| {
        alt((
            map(
                take_while1(move |value: char| value != '%' && is_allowed(value)),
                |span: ParserInput| span.fragment().as_bytes().to_vec(),
            ),
            map(pct_encoded_octet, |octet| vec![octet]),
        ))(input)
    }
}

fn decoded_chunks_to_string<'a>(
    input: ParserInput<'a>,
    remaining: ParserInput<'a>,
    chunks: Vec<Vec<u8>>,
) -> ParserResult<'a, String> {
    match String::from_utf8(chunks.concat()) {
        Ok(decoded) => Ok((remaining, decoded)),

        Err(_error) => {
            Err(
                nom::Err::Error(
                    ParserError::new(String::from("percent-encoded octets are not valid UTF-8"), input)
                )
            )
        },
    }
}

/// Encodes a decoded string against a character whitelist.
///
/// The string is serialized as UTF-8; each octet is written verbatim if the
/// whitelist admits it, and as `%XX` (uppercase hex) otherwise. A `%` octet
/// already followed by two hex digits is passed through untouched, so text
/// that is already percent-encoded survives re-encoding unchanged.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_unreserved_char;
/// use gossamer_core::percent::percent_encode;
///
/// assert_eq!(percent_encode("a b", is_unreserved_char), String::from("a%20b"));
/// assert_eq!(percent_encode("a%20b", is_unreserved_char), String::from("a%20b"));
/// assert_eq!(percent_encode("100%", is_unreserved_char), String::from("100%25"));
/// ```
pub fn percent_encode<F>(value: &str, is_allowed: F) -> String
where
    F: Fn(char) -> bool,
{
    let bytes = value.as_bytes();

    let mut encoded = String::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];

        if byte == b'%'
            && index + 2 < bytes.len()
            && is_hexdig_char(bytes[index + 1] as char)
            && is_hexdig_char(bytes[index + 2] as char)
        {
            encoded.push_str(&value[index..index + 3]);
            index += 3;
        } else if byte.is_ascii() && is_allowed(byte as char) {
            encoded.push(byte as char);
            index += 1;
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
            index += 1;
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grammar::is_unreserved_char;

    use crate::assert_parser_output;

    #[test]
    fn percent_decoded() {
        assert_parser_output!(
            percent_decoded1(is_unreserved_char)("a%20b TESTING".into()),
            (
                " TESTING",
                String::from("a b"),
            ),
        );

        // Hex digits decode case insensitively.
        assert_parser_output!(
            percent_decoded1(is_unreserved_char)("caf%c3%A9 TESTING".into()),
            (
                " TESTING",
                String::from("café"),
            ),
        );

        // The empty run is fine for the zero-or-more variant only.
        assert_parser_output!(
            percent_decoded0(is_unreserved_char)("/rest".into()),
            (
                "/rest",
                String::new(),
            ),
        );

        assert!(percent_decoded1(is_unreserved_char)("/rest".into()).is_err());

        // A lone octet from a multi-byte UTF-8 sequence is rejected.
        assert!(percent_decoded1(is_unreserved_char)("%c3".into()).is_err());
        assert!(percent_decoded1(is_unreserved_char)("%ff%fe".into()).is_err());
    }

    #[test]
    fn percent_decoded_stops_at_non_whitelisted_chars() {
        assert_parser_output!(
            percent_decoded1(is_unreserved_char)("abc/def".into()),
            (
                "/def",
                String::from("abc"),
            ),
        );
    }

    #[test]
    fn percent_encode_round_trip() {
        let encoded = percent_encode("a b", is_unreserved_char);

        assert_eq!(encoded, String::from("a%20b"));

        let (_remaining, decoded) = percent_decoded1(is_unreserved_char)(encoded.as_str().into()).unwrap();

        assert_eq!(decoded, String::from("a b"));
    }

    #[test]
    fn percent_encode_is_idempotent_on_encoded_input() {
        assert_eq!(
            percent_encode("a%20b%2Fc", is_unreserved_char),
            String::from("a%20b%2Fc"),
        );

        // A bare percent is not a triple and gets encoded itself.
        assert_eq!(
            percent_encode("50%", is_unreserved_char),
            String::from("50%25"),
        );

        assert_eq!(
            percent_encode("%2x", is_unreserved_char),
            String::from("%252x"),
        );
    }

    #[test]
    fn percent_encode_multi_byte_chars() {
        assert_eq!(
            percent_encode("café", is_unreserved_char),
            String::from("caf%C3%A9"),
        );
    }
}
