use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::{pair, preceded};

use gossamer_core::grammar::colon;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use gossamer_uri::{Host as UriHost, Port};

// Host          = uri-host [ ":" port ]
//
// https://datatracker.ietf.org/doc/html/rfc7230#section-5.4
//
// The uri-host reuses the RFC 3986 host grammar, brackets and address-family
// validation included. A colon with no digits parses as no port, as in an
// authority.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Host {
    pub host: UriHost,
    pub port: Option<Port>,
}

impl Host {
    pub fn new(host: UriHost, port: Option<Port>) -> Self {
        Self { host, port }
    }
}

impl TextEntity for Host {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "HOST",
            map(
                pair(
                    UriHost::parse_text,
                    map(opt(preceded(colon, opt(Port::parse_text))), Option::flatten),
                ),
                |(host, port)| Self { host, port },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        let mut rendered = self.host.render_text();

        if let Some(port) = &self.port {
            rendered.push(':');
            rendered.push_str(&port.render_text());
        }

        rendered
    }
}

impl_text_entity_traits!(Host);
