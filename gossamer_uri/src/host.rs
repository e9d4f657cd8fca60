use std::net::{Ipv4Addr, Ipv6Addr};

use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::combinator::{map, not, recognize, verify};
use nom::error::context;
use nom::multi::many_m_n;
use nom::sequence::{delimited, terminated, tuple};

use gossamer_core::grammar::{
    digit, is_hexdig_char, is_sub_delims_char, is_unreserved_char,
    left_square_bracket, period, right_square_bracket,
};
use gossamer_core::percent::{percent_decoded1, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

/// Returns if a char may appear in reg-name (percent triples aside).
pub fn is_reg_name_char(input: char) -> bool {
    is_unreserved_char(input) || is_sub_delims_char(input)
}

// reg-name      = *( unreserved / pct-encoded / sub-delims )
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
//
// Stored in decoded form, re-encoded on render. Parsed non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RegName(String);

impl RegName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TextEntity for RegName {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "REG-NAME",
            map(percent_decoded1(is_reg_name_char), Self),
        )(input)
    }

    fn render_text(&self) -> String {
        percent_encode(&self.0, is_reg_name_char)
    }
}

impl_text_entity_traits!(RegName);

/// dec-octet     = DIGIT                 ; 0-9
///               / %x31-39 DIGIT         ; 10-99
///               / "1" 2DIGIT            ; 100-199
///               / "2" %x30-34 DIGIT     ; 200-249
///               / "25" %x30-35          ; 250-255
fn dec_octet(input: ParserInput) -> ParserResult<ParserInput> {
    verify(
        recognize(many_m_n(1, 3, digit)),
        |value: &ParserInput| {
            value.to_string().parse::<u8>().is_ok()
        }
    )(input)
}

/// IPv4address   = dec-octet "." dec-octet "." dec-octet "." dec-octet
///
/// A dotted quad that runs straight into further reg-name text (as in
/// "1.2.3.4.5") is rejected here so the reg-name alternative can claim the
/// whole name, and the candidate must belong to the IPv4 address family
/// (std's parser also rules out leading zeroes, per the ABNF).
fn ip_v4_address(input: ParserInput) -> ParserResult<Ipv4Addr> {
    let (remaining, candidate) = terminated(
        recognize(
            tuple((
                dec_octet,
                period,
                dec_octet,
                period,
                dec_octet,
                period,
                dec_octet,
            ))
        ),
        not(take_while1(|value: char| is_reg_name_char(value) || value == '%')),
    )(input)?;

    match candidate.to_string().parse::<Ipv4Addr>() {
        Ok(address) => Ok((remaining, address)),

        Err(_error) => {
            Err(
                nom::Err::Error(
                    ParserError::new(String::from("invalid IPv4 address"), input)
                )
            )
        },
    }
}

/// IP-literal    = "[" IPv6address "]"
///
/// The bracketed candidate must belong to the IPv6 address family; IPvFuture
/// is not supported.
fn ip_v6_literal(input: ParserInput) -> ParserResult<Ipv6Addr> {
    let (remaining, candidate) = delimited(
        left_square_bracket,
        take_while1(|value: char| is_hexdig_char(value) || value == ':' || value == '.'),
        right_square_bracket,
    )(input)?;

    match candidate.to_string().parse::<Ipv6Addr>() {
        Ok(address) => Ok((remaining, address)),

        Err(_error) => {
            Err(
                nom::Err::Error(
                    ParserError::new(String::from("invalid IPv6 address"), input)
                )
            )
        },
    }
}

// host          = IP-literal / IPv4address / reg-name
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
//
// Ordered choice: the address alternatives are tried before reg-name, and an
// address candidate that fails family validation falls through to reg-name.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Host {
    IpV4(Ipv4Addr),
    IpV6(Ipv6Addr),
    Name(RegName),
}

impl TextEntity for Host {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "HOST",
            alt((
                map(ip_v6_literal, Self::IpV6),
                map(ip_v4_address, Self::IpV4),
                map(RegName::parse_text, Self::Name),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::IpV4(address) => address.to_string(),
            Self::IpV6(address) => format!("[{}]", address),
            Self::Name(name) => name.render_text(),
        }
    }
}

impl_text_entity_traits!(Host);
