use nom::combinator::map;
use nom::error::context;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::token;

// method        = token
//
// https://datatracker.ietf.org/doc/html/rfc7231#section-4
//
// The registered methods are matched case sensitively, as the RFC demands;
// any other token is an extension method and re-renders as written.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Post,
    Put,
    Trace,
    Extension(String),
}

impl TextEntity for Method {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "METHOD",
            map(token, |value: ParserInput| {
                match *value.fragment() {
                    "CONNECT" => Self::Connect,
                    "DELETE" => Self::Delete,
                    "GET" => Self::Get,
                    "HEAD" => Self::Head,
                    "OPTIONS" => Self::Options,
                    "POST" => Self::Post,
                    "PUT" => Self::Put,
                    "TRACE" => Self::Trace,
                    other => Self::Extension(other.to_string()),
                }
            }),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Connect => String::from("CONNECT"),
            Self::Delete => String::from("DELETE"),
            Self::Get => String::from("GET"),
            Self::Head => String::from("HEAD"),
            Self::Options => String::from("OPTIONS"),
            Self::Post => String::from("POST"),
            Self::Put => String::from("PUT"),
            Self::Trace => String::from("TRACE"),
            Self::Extension(method) => method.to_owned(),
        }
    }
}

impl_text_entity_traits!(Method);

#[cfg(test)]
mod tests {
    use super::*;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text() {
        assert_parser_output!(
            Method::parse_text("GET /index HTTP/1.1".into()),
            (
                " /index HTTP/1.1",
                Method::Get,
            ),
        );

        // Methods are case sensitive; a lowercase "get" is an extension
        // token.
        assert_parser_output!(
            Method::parse_text("get /".into()),
            (
                " /",
                Method::Extension(String::from("get")),
            ),
        );

        assert_parser_output!(
            Method::parse_text("PATCH /".into()),
            (
                " /",
                Method::Extension(String::from("PATCH")),
            ),
        );

        assert!(Method::parse_text(" GET".into()).is_err());
    }

    #[test]
    fn render_text() {
        assert_eq!(Method::Options.render_text(), String::from("OPTIONS"));
        assert_eq!(
            Method::Extension(String::from("PATCH")).render_text(),
            String::from("PATCH"),
        );
    }
}
