use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;

use crate::{ParserInput, ParserResult, ParserError};

/// Recognizes a pattern
///
/// Wrapped nom::bytes::complete::tag to provide better error messages e.g. "expected '<tag text>'"
/// over the unhelpful nom base tag parser.
///
/// The input data will be compared to the tag combinator's argument and will return the part of
/// the input that matches the argument
///
/// It will return `Err(Err::Error((ParserError)))` if the input doesn't match the pattern
/// # Example
/// ```rust
/// # use nom::{Err, error::{Error, ErrorKind}, Needed, IResult};
/// use gossamer_core::{ParserError, ParserInput, ParserResult};
/// use gossamer_core::grammar::tag;
///
/// fn parser(input: ParserInput) -> ParserResult<ParserInput> {
///   tag("http")(input)
/// }
///
/// assert!(parser("http://example.com".into()).is_ok());
///
/// let input: ParserInput = "ftp://example.com".into();
///
/// assert_eq!(
///     parser(input),
///     Err(
///         nom::Err::Error(
///             ParserError::new(String::from("expected 'http'"), input)
///         )
///     ),
/// );
/// ```
pub fn tag<'a>(tag: &'a str) -> impl Fn(ParserInput) -> ParserResult<ParserInput> + 'a {
    move |input: ParserInput| {
        match nom::bytes::complete::tag::<&'a str, ParserInput, ParserError>(tag)(input) {
            Ok(result) => Ok(result),

            Err(nom::Err::Error(_error)) => {
                Err(
                    nom::Err::Error(
                        ParserError::new(format!("expected '{}'", tag), input)
                    )
                )
            },

            Err(nom::Err::Failure(_error)) => {
                Err(
                    nom::Err::Failure(
                        ParserError::new(format!("expected '{}'", tag), input)
                    )
                )
            },

            Err(nom::Err::Incomplete(error)) => {
                Err(
                    nom::Err::Incomplete(error)
                )
            },
        }
    }
}

// +------------------------+-------------------+
// | Character class        | ABNF              |
// +------------------------+-------------------+
// | ALPHA                  | %x41-5A / %x61-7A |
// +------------------------+-------------------+

/// Returns if ASCII alphabetic char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_alpha_char;
///
/// assert!(is_alpha_char('a'));
/// assert!(is_alpha_char('Z'));
///
/// assert_eq!(is_alpha_char('0'), false);
/// assert_eq!(is_alpha_char('-'), false);
/// ```
pub fn is_alpha_char(input: char) -> bool {
    input.is_ascii_alphabetic()
}

/// Parses a single ALPHA char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::alpha;
///
/// assert!(alpha("abc".into()).is_ok());
/// assert!(alpha("1bc".into()).is_err());
///
/// // It only takes one char at a time.
/// let (remaining, parsed) = alpha("ab".into()).unwrap();
///
/// assert_eq!(*remaining, "b");
/// assert_eq!(*parsed, "a");
/// ```
pub fn alpha(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_alpha_char)(input)
}

// +------------------------+-------------------+
// | Character class        | ABNF              |
// +------------------------+-------------------+
// | DIGIT                  | %x30-39           |
// +------------------------+-------------------+

/// Returns if ASCII digit char.
pub fn is_digit_char(input: char) -> bool {
    input.is_ascii_digit()
}

/// Parses a single DIGIT char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::digit;
///
/// assert!(digit("1bc".into()).is_ok());
/// assert!(digit("abc".into()).is_err());
/// ```
pub fn digit(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_digit_char)(input)
}

// +------------------------+-------------------+
// | Character class        | ABNF              |
// +------------------------+-------------------+
// | HEXDIG                 | DIGIT / "A"-"F"   |
// +------------------------+-------------------+

/// Returns if hexadecimal digit char. Both cases are accepted.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_hexdig_char;
///
/// assert!(is_hexdig_char('0'));
/// assert!(is_hexdig_char('a'));
/// assert!(is_hexdig_char('F'));
///
/// assert_eq!(is_hexdig_char('g'), false);
/// assert_eq!(is_hexdig_char(':'), false);
/// ```
pub fn is_hexdig_char(input: char) -> bool {
    input.is_ascii_hexdigit()
}

/// Parses a single HEXDIG char.
pub fn hexdig(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_hexdig_char)(input)
}

/// Returns if ALPHA or DIGIT char.
pub fn is_alphanum_char(input: char) -> bool {
    is_alpha_char(input) || is_digit_char(input)
}

/// alphanum = ALPHA / DIGIT
pub fn alphanum(input: ParserInput) -> ParserResult<ParserInput> {
    alt((alpha, digit))(input)
}

// +------------------------+-----------------------------------------+
// | Character class        | ABNF                                    |
// +------------------------+-----------------------------------------+
// | unreserved             | ALPHA / DIGIT / "-" / "." / "_" / "~"   |
// +------------------------+-----------------------------------------+

/// Returns if RFC-3986 unreserved char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_unreserved_char;
///
/// assert!(is_unreserved_char('a'));
/// assert!(is_unreserved_char('0'));
/// assert!(is_unreserved_char('~'));
///
/// assert_eq!(is_unreserved_char('/'), false);
/// assert_eq!(is_unreserved_char('%'), false);
/// ```
pub fn is_unreserved_char(input: char) -> bool {
    is_alphanum_char(input) || matches!(input, '-' | '.' | '_' | '~')
}

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub fn unreserved(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_unreserved_char)(input)
}

// +------------------------+-----------------------------------------+
// | Character class        | ABNF                                    |
// +------------------------+-----------------------------------------+
// | sub-delims             | "!" / "$" / "&" / "'" / "(" / ")"       |
// |                        | / "*" / "+" / "," / ";" / "="           |
// +------------------------+-----------------------------------------+

/// Returns if RFC-3986 sub-delims char.
pub fn is_sub_delims_char(input: char) -> bool {
    matches!(input, '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=')
}

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
pub fn sub_delims(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_sub_delims_char)(input)
}

// +------------------------+-----------------------------------------+
// | Character class        | ABNF                                    |
// +------------------------+-----------------------------------------+
// | gen-delims             | ":" / "/" / "?" / "#" / "[" / "]" / "@" |
// +------------------------+-----------------------------------------+

/// Returns if RFC-3986 gen-delims char.
pub fn is_gen_delims_char(input: char) -> bool {
    matches!(input, ':' | '/' | '?' | '#' | '[' | ']' | '@')
}

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub fn gen_delims(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_gen_delims_char)(input)
}

/// Returns if RFC-3986 reserved char.
pub fn is_reserved_char(input: char) -> bool {
    is_gen_delims_char(input) || is_sub_delims_char(input)
}

/// reserved = gen-delims / sub-delims
pub fn reserved(input: ParserInput) -> ParserResult<ParserInput> {
    alt((gen_delims, sub_delims))(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | HTAB                   | 9                 |
// +------------------------+-------------------+

/// Returns if horizontal tab char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::is_htab_char;
///
/// assert!(is_htab_char('\t'));
///
/// assert_eq!(is_htab_char('_'), false);
/// assert_eq!(is_htab_char(' '), false);
/// ```
pub fn is_htab_char(input: char) -> bool {
    input as u8 == b'\t'
}

/// Parses horizontal tab char.
pub fn htab(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_htab_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | SPACE                  | 32                |
// +------------------------+-------------------+

/// Returns if space char.
pub fn is_space_char(input: char) -> bool {
    input == ' '
}

/// Parses space char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::space;
///
/// assert!(space(" test".into()).is_ok());
/// assert!(space("test".into()).is_err());
/// ```
pub fn space(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_space_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | DQUOTE                 | 34                |
// +------------------------+-------------------+

/// Returns if double quote char.
pub fn is_dquote_char(input: char) -> bool {
    input == '"'
}

/// Parses double quote char.
pub fn dquote(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_dquote_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | NUMBER SIGN            | 35                |
// +------------------------+-------------------+

/// Returns if number sign char.
pub fn is_number_sign_char(input: char) -> bool {
    input == '#'
}

/// Parses number sign char.
pub fn number_sign(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_number_sign_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | PERCENT SIGN           | 37                |
// +------------------------+-------------------+

/// Returns if percent sign char.
pub fn is_percent_sign_char(input: char) -> bool {
    input == '%'
}

/// Parses percent sign char.
pub fn percent_sign(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_percent_sign_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | AMPERSAND              | 38                |
// +------------------------+-------------------+

/// Returns if ampersand char.
pub fn is_ampersand_char(input: char) -> bool {
    input == '&'
}

/// Parses ampersand char.
pub fn ampersand(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_ampersand_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | ASTERISK               | 42                |
// +------------------------+-------------------+

/// Returns if asterisk char.
pub fn is_asterisk_char(input: char) -> bool {
    input == '*'
}

/// Parses asterisk char.
pub fn asterisk(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_asterisk_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | COMMA                  | 44                |
// +------------------------+-------------------+

/// Returns if comma char.
pub fn is_comma_char(input: char) -> bool {
    input == ','
}

/// Parses comma char.
///
/// # Examples
///
/// ```rust
/// use gossamer_core::grammar::comma;
///
/// assert!(comma(",test".into()).is_ok());
/// assert!(comma("test".into()).is_err());
///
/// // It only takes one char at a time.
/// let (remaining, parsed) = comma(",,".into()).unwrap();
///
/// assert_eq!(*remaining, ",");
/// assert_eq!(*parsed, ",");
/// ```
pub fn comma(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_comma_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | HYPHEN-MINUS           | 45                |
// +------------------------+-------------------+

/// Returns if hyphen-minus char.
pub fn is_hyphen_minus_char(input: char) -> bool {
    input == '-'
}

/// Parses hyphen-minus char.
pub fn hyphen_minus(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_hyphen_minus_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | PERIOD                 | 46                |
// +------------------------+-------------------+

/// Returns if period char.
pub fn is_period_char(input: char) -> bool {
    input == '.'
}

/// Parses period char.
pub fn period(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_period_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | SOLIDUS                | 47                |
// +------------------------+-------------------+

/// Returns if solidus char.
pub fn is_solidus_char(input: char) -> bool {
    input == '/'
}

/// Parses solidus char.
pub fn solidus(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_solidus_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | COLON                  | 58                |
// +------------------------+-------------------+

/// Returns if colon char.
pub fn is_colon_char(input: char) -> bool {
    input == ':'
}

/// Parses colon char.
pub fn colon(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_colon_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | SEMICOLON              | 59                |
// +------------------------+-------------------+

/// Returns if semicolon char.
pub fn is_semicolon_char(input: char) -> bool {
    input == ';'
}

/// Parses semicolon char.
pub fn semicolon(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_semicolon_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | EQUALS SIGN            | 61                |
// +------------------------+-------------------+

/// Returns if equals sign char.
pub fn is_equals_sign_char(input: char) -> bool {
    input == '='
}

/// Parses equals sign char.
pub fn equals_sign(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_equals_sign_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | QUESTION MARK          | 63                |
// +------------------------+-------------------+

/// Returns if question mark char.
pub fn is_question_mark_char(input: char) -> bool {
    input == '?'
}

/// Parses question mark char.
pub fn question_mark(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_question_mark_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | COMMERCIAL AT          | 64                |
// +------------------------+-------------------+

/// Returns if commercial at char.
pub fn is_commercial_at_char(input: char) -> bool {
    input == '@'
}

/// Parses commercial at char.
pub fn commercial_at(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_commercial_at_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | LEFT SQUARE BRACKET    | 91                |
// +------------------------+-------------------+

/// Returns if left square bracket char.
pub fn is_left_square_bracket_char(input: char) -> bool {
    input == '['
}

/// Parses left square bracket char.
pub fn left_square_bracket(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_left_square_bracket_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | RIGHT SQUARE BRACKET   | 93                |
// +------------------------+-------------------+

/// Returns if right square bracket char.
pub fn is_right_square_bracket_char(input: char) -> bool {
    input == ']'
}

/// Parses right square bracket char.
pub fn right_square_bracket(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_right_square_bracket_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | BACKSLASH              | 92                |
// +------------------------+-------------------+

/// Returns if backslash char.
pub fn is_backslash_char(input: char) -> bool {
    input == '\\'
}

/// Parses backslash char.
pub fn backslash(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_backslash_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | LEFT CURLY BRACKET     | 123               |
// +------------------------+-------------------+

/// Returns if left curly bracket char.
pub fn is_left_curly_bracket_char(input: char) -> bool {
    input == '{'
}

/// Parses left curly bracket char.
pub fn left_curly_bracket(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_left_curly_bracket_char)(input)
}

// +------------------------+-------------------+
// | Character name         | Decimal codepoint |
// +------------------------+-------------------+
// | RIGHT CURLY BRACKET    | 125               |
// +------------------------+-------------------+

/// Returns if right curly bracket char.
pub fn is_right_curly_bracket_char(input: char) -> bool {
    input == '}'
}

/// Parses right curly bracket char.
pub fn right_curly_bracket(input: ParserInput) -> ParserResult<ParserInput> {
    take_while_m_n(1, 1, is_right_curly_bracket_char)(input)
}
