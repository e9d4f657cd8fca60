use nom::combinator::{map, opt, recognize};
use nom::error::context;
use nom::multi::many1;
use nom::sequence::{preceded, terminated, tuple};

use gossamer_core::grammar::{
    colon, commercial_at, digit, is_colon_char, is_sub_delims_char, is_unreserved_char,
};
use gossamer_core::percent::{percent_decoded1, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, ParserError, impl_text_entity_traits};

use crate::host::Host;

/// Returns if a char may appear in userinfo (percent triples aside).
pub fn is_user_info_char(input: char) -> bool {
    is_unreserved_char(input) || is_sub_delims_char(input) || is_colon_char(input)
}

// userinfo      = *( unreserved / pct-encoded / sub-delims / ":" )
//
// Stored in decoded form, re-encoded on render. Parsed non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UserInfo(String);

impl UserInfo {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TextEntity for UserInfo {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "USERINFO",
            map(percent_decoded1(is_user_info_char), Self),
        )(input)
    }

    fn render_text(&self) -> String {
        percent_encode(&self.0, is_user_info_char)
    }
}

impl_text_entity_traits!(UserInfo);

// port          = *DIGIT
//
// The standalone entity requires at least one digit; the optional ":" suffix
// of an authority folds an empty run of digits away instead.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Port(pub u32);

impl TextEntity for Port {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        let (remaining, digits) = recognize(many1(digit))(input)?;

        let Ok(port) = digits.to_string().parse::<u32>() else {
            return Err(
                nom::Err::Error(
                    ParserError::new(String::from("port does not fit an unsigned 32-bit integer"), input)
                )
            );
        };

        Ok((remaining, Self(port)))
    }

    fn render_text(&self) -> String {
        self.0.to_string()
    }
}

impl_text_entity_traits!(Port);

/// [ ":" port ] where port = *DIGIT — a colon followed by no digits parses
/// as no port at all.
fn port_suffix(input: ParserInput) -> ParserResult<Option<Port>> {
    map(
        opt(preceded(colon, opt(Port::parse_text))),
        Option::flatten,
    )(input)
}

// authority     = [ userinfo "@" ] host [ ":" port ]
//
// https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
//
// The userinfo alternative backtracks: it only holds when the "@" sentinel
// follows. The stored field order (host, port, userinfo) intentionally
// differs from the emitted order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Authority {
    pub host: Host,
    pub port: Option<Port>,
    pub user_info: Option<UserInfo>,
}

impl Authority {
    pub fn new(host: Host, port: Option<Port>, user_info: Option<UserInfo>) -> Self {
        Self { host, port, user_info }
    }
}

impl TextEntity for Authority {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "AUTHORITY",
            map(
                tuple((
                    opt(terminated(UserInfo::parse_text, commercial_at)),
                    Host::parse_text,
                    port_suffix,
                )),
                |(user_info, host, port)| Self { host, port, user_info },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        let mut rendered = String::new();

        if let Some(user_info) = &self.user_info {
            rendered.push_str(&user_info.render_text());
            rendered.push('@');
        }

        rendered.push_str(&self.host.render_text());

        if let Some(port) = &self.port {
            rendered.push(':');
            rendered.push_str(&port.render_text());
        }

        rendered
    }
}

impl_text_entity_traits!(Authority);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    use crate::host::RegName;

    fn name(value: &str) -> Host {
        Host::Name(RegName::new(value))
    }

    #[test]
    fn parse_text() {
        assert_parser_output!(
            Authority::parse_text("user@example.com:8080/a".into()),
            (
                "/a",
                Authority {
                    host: name("example.com"),
                    port: Some(Port(8080)),
                    user_info: Some(UserInfo(String::from("user"))),
                },
            ),
        );

        // No "@" sentinel: the userinfo alternative backtracks and the whole
        // run is the host.
        assert_parser_output!(
            Authority::parse_text("example.com/a".into()),
            (
                "/a",
                Authority {
                    host: name("example.com"),
                    port: None,
                    user_info: None,
                },
            ),
        );

        // Userinfo may carry ":" (deprecated user:password form).
        assert_parser_output!(
            Authority::parse_text("user:pass@example.com".into()),
            (
                "",
                Authority {
                    host: name("example.com"),
                    port: None,
                    user_info: Some(UserInfo(String::from("user:pass"))),
                },
            ),
        );

        // port = *DIGIT allows the degenerate "host:"; the port is folded
        // away and not re-emitted.
        assert_parser_output!(
            Authority::parse_text("example.com:".into()),
            (
                "",
                Authority {
                    host: name("example.com"),
                    port: None,
                    user_info: None,
                },
            ),
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(
            Authority {
                host: name("example.com"),
                port: Some(Port(8080)),
                user_info: Some(UserInfo::new("user")),
            }.render_text(),
            String::from("user@example.com:8080"),
        );

        // No userinfo and no port re-emits just the host.
        assert_eq!(
            Authority::new(name("example.com"), None, None).render_text(),
            String::from("example.com"),
        );
    }

    #[test]
    fn round_trip() {
        for input in ["example.com", "user@example.com", "[::1]:443", "a:b@1.2.3.4:80"] {
            let authority = Authority::from_str(input).unwrap();

            assert_eq!(Authority::from_str(&authority.to_string()), Ok(authority));
        }
    }
}
