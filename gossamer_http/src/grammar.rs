use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1, take_while_m_n};
use nom::combinator::{map, opt};
use nom::multi::many0;
use nom::sequence::{delimited, preceded, tuple};

use gossamer_core::grammar::{
    backslash, comma, dquote, is_digit_char, is_alphanum_char, is_htab_char, is_space_char,
    period, semicolon, tag,
};

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

/// Returns if RFC-7230 tchar.
///
/// tchar         = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "."
///               / "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
pub fn is_tchar_char(input: char) -> bool {
    is_alphanum_char(input)
        || matches!(input, '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~')
}

/// token         = 1*tchar
///
/// # Examples
///
/// ```rust
/// use gossamer_http::grammar::token;
///
/// let (remaining, parsed) = token("gzip, deflate".into()).unwrap();
///
/// assert_eq!(*remaining, ", deflate");
/// assert_eq!(*parsed, "gzip");
///
/// assert!(token(", deflate".into()).is_err());
/// ```
pub fn token(input: ParserInput) -> ParserResult<ParserInput> {
    take_while1(is_tchar_char)(input)
}

/// OWS           = *( SP / HTAB )
pub fn ows(input: ParserInput) -> ParserResult<ParserInput> {
    take_while(|value: char| is_space_char(value) || is_htab_char(value))(input)
}

/// The separator of the `1#element` list rule: optional whitespace around a
/// comma.
pub fn list_separator(input: ParserInput) -> ParserResult<ParserInput> {
    delimited(ows, comma, ows)(input)
}

/// The separator in front of a parameter: optional whitespace around a
/// semicolon.
pub fn parameter_separator(input: ParserInput) -> ParserResult<ParserInput> {
    delimited(ows, semicolon, ows)(input)
}

/// qdtext        = HTAB / SP / %x21 / %x23-5B / %x5D-7E
fn is_qdtext_char(input: char) -> bool {
    matches!(input, '\t' | ' ' | '\x21' | '\x23'..='\x5B' | '\x5D'..='\x7E')
}

/// quoted-pair   = "\" ( HTAB / SP / VCHAR )
fn is_quoted_pair_char(input: char) -> bool {
    matches!(input, '\t' | ' ' | '\x21'..='\x7E')
}

/// quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
///
/// Yields the unescaped text between the quotes.
///
/// # Examples
///
/// ```rust
/// use gossamer_http::grammar::quoted_string;
///
/// let (remaining, parsed) = quoted_string(r#""a \"b\" c" rest"#.into()).unwrap();
///
/// assert_eq!(*remaining, " rest");
/// assert_eq!(parsed, String::from(r#"a "b" c"#));
/// ```
pub fn quoted_string(input: ParserInput) -> ParserResult<String> {
    let (remaining, chunks) = delimited(
        dquote,
        many0(
            alt((
                map(
                    take_while1(is_qdtext_char),
                    |span: ParserInput| span.fragment().to_string(),
                ),
                map(
                    preceded(backslash, take_while_m_n(1, 1, is_quoted_pair_char)),
                    |span: ParserInput| span.fragment().to_string(),
                ),
            ))
        ),
        dquote,
    )(input)?;

    Ok((remaining, chunks.concat()))
}

/// token / quoted-string, unescaped either way.
pub fn token_or_quoted(input: ParserInput) -> ParserResult<String> {
    alt((
        map(token, |span: ParserInput| span.to_string()),
        quoted_string,
    ))(input)
}

/// Renders a value as a bare token when it can be one, and as a
/// quoted-string (escaping `"` and `\`) otherwise.
pub fn render_token_or_quoted(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_tchar_char) {
        return value.to_string();
    }

    let mut rendered = String::from("\"");

    for value in value.chars() {
        if value == '"' || value == '\\' {
            rendered.push('\\');
        }

        rendered.push(value);
    }

    rendered.push('"');

    rendered
}

/// delta-seconds = 1*DIGIT
pub fn delta_seconds(input: ParserInput) -> ParserResult<u64> {
    let (remaining, digits) = take_while1(is_digit_char)(input)?;

    let Ok(seconds) = digits.to_string().parse::<u64>() else {
        return Err(
            nom::Err::Error(
                ParserError::new(String::from("delta-seconds does not fit an unsigned 64-bit integer"), input)
            )
        );
    };

    Ok((remaining, seconds))
}

// weight        = OWS ";" OWS "q=" qvalue
// qvalue        = ( "0" [ "." 0*3DIGIT ] )
//               / ( "1" [ "." 0*3("0") ] )
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.1
//
// Stored in thousandths so types carrying a weight keep Eq and Hash;
// "q=0.05" is Weight(50). Rendering trims trailing zeros.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Weight(pub u16);

impl TextEntity for Weight {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        let (remaining, _) = tuple((ows, semicolon, ows, tag("q=")))(input)?;

        qvalue(remaining)
    }

    fn render_text(&self) -> String {
        if self.0 >= 1000 {
            return String::from(";q=1");
        }

        if self.0 == 0 {
            return String::from(";q=0");
        }

        let digits = format!("{:03}", self.0);

        format!(";q=0.{}", digits.trim_end_matches('0'))
    }
}

impl_text_entity_traits!(Weight);

fn qvalue(input: ParserInput) -> ParserResult<Weight> {
    alt((
        map(
            preceded(tag("0"), opt(preceded(period, take_while_m_n(0, 3, is_digit_char)))),
            |digits: Option<ParserInput>| {
                let Some(digits) = digits else {
                    return Weight(0);
                };

                let mut digits = digits.to_string();

                while digits.len() < 3 {
                    digits.push('0');
                }

                Weight(digits.parse::<u16>().unwrap_or(0))
            },
        ),
        map(
            preceded(
                tag("1"),
                opt(preceded(period, take_while_m_n(0, 3, |value| value == '0'))),
            ),
            |_| Weight(1000),
        ),
    ))(input)
}
