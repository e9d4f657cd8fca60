use itertools::Itertools;

use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::separated_list1;
use nom::sequence::{pair, preceded};

use gossamer_core::grammar::equals_sign;

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

use crate::grammar::{list_separator, render_token_or_quoted, token, token_or_quoted};

// cache-directive = token [ "=" ( token / quoted-string ) ]
//
// https://datatracker.ietf.org/doc/html/rfc7234#section-5.2
//
// Directive names compare case insensitively. A known directive whose
// argument shape does not fit (e.g. "max-age" without seconds, or "private"
// with a field list) is preserved as an extension directive so nothing is
// lost on re-render.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum CacheDirective {
    MaxAge(u64),
    MaxStale(Option<u64>),
    MinFresh(u64),
    MustRevalidate,
    NoCache,
    NoStore,
    NoTransform,
    OnlyIfCached,
    Private,
    ProxyRevalidate,
    Public,
    SMaxAge(u64),
    Extension(String, Option<String>),
}

fn classify(name: &str, argument: Option<String>) -> CacheDirective {
    let seconds = argument.as_deref().and_then(|value| value.parse::<u64>().ok());
    let has_argument = argument.is_some();

    match (name.to_ascii_lowercase().as_str(), has_argument, seconds) {
        ("max-age", true, Some(seconds)) => CacheDirective::MaxAge(seconds),
        ("max-stale", false, _) => CacheDirective::MaxStale(None),
        ("max-stale", true, Some(seconds)) => CacheDirective::MaxStale(Some(seconds)),
        ("min-fresh", true, Some(seconds)) => CacheDirective::MinFresh(seconds),
        ("must-revalidate", false, _) => CacheDirective::MustRevalidate,
        ("no-cache", false, _) => CacheDirective::NoCache,
        ("no-store", false, _) => CacheDirective::NoStore,
        ("no-transform", false, _) => CacheDirective::NoTransform,
        ("only-if-cached", false, _) => CacheDirective::OnlyIfCached,
        ("private", false, _) => CacheDirective::Private,
        ("proxy-revalidate", false, _) => CacheDirective::ProxyRevalidate,
        ("public", false, _) => CacheDirective::Public,
        ("s-maxage", true, Some(seconds)) => CacheDirective::SMaxAge(seconds),
        _ => CacheDirective::Extension(name.to_string(), argument),
    }
}

impl TextEntity for CacheDirective {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(
            pair(
                token,
                opt(preceded(equals_sign, token_or_quoted)),
            ),
            |(name, argument)| classify(name.fragment(), argument),
        )(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::MaxAge(seconds) => format!("max-age={}", seconds),
            Self::MaxStale(None) => String::from("max-stale"),
            Self::MaxStale(Some(seconds)) => format!("max-stale={}", seconds),
            Self::MinFresh(seconds) => format!("min-fresh={}", seconds),
            Self::MustRevalidate => String::from("must-revalidate"),
            Self::NoCache => String::from("no-cache"),
            Self::NoStore => String::from("no-store"),
            Self::NoTransform => String::from("no-transform"),
            Self::OnlyIfCached => String::from("only-if-cached"),
            Self::Private => String::from("private"),
            Self::ProxyRevalidate => String::from("proxy-revalidate"),
            Self::Public => String::from("public"),
            Self::SMaxAge(seconds) => format!("s-maxage={}", seconds),
            Self::Extension(name, None) => name.to_owned(),
            Self::Extension(name, Some(argument)) => {
                format!("{}={}", name, render_token_or_quoted(argument))
            },
        }
    }
}

impl_text_entity_traits!(CacheDirective);

// Cache-Control = 1#cache-directive
//
// https://datatracker.ietf.org/doc/html/rfc7234#section-5.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CacheControl(pub Vec<CacheDirective>);

impl TextEntity for CacheControl {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "CACHE-CONTROL",
            map(
                separated_list1(list_separator, CacheDirective::parse_text),
                Self,
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|directive| directive.render_text()).join(", ")
    }
}

impl_text_entity_traits!(CacheControl);
