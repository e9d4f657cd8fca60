use itertools::Itertools;

use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::combinator::{map, not, opt, recognize};
use nom::error::context;
use nom::multi::{many0, many_m_n};
use nom::sequence::{pair, preceded, terminated, tuple};

use gossamer_core::grammar::{
    alphanum, digit, hyphen_minus, is_alpha_char, is_alphanum_char, is_digit_char,
};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

/// n*m ALPHA terminated by a negative look-ahead, so a fixed-width subtag
/// cannot leak into the alphanumeric run that follows it.
pub(crate) fn alpha_m_n(min: usize, max: usize) -> impl Fn(ParserInput) -> ParserResult<ParserInput> {
    move |input: ParserInput| {
        recognize(
            terminated(
                take_while_m_n(min, max, is_alpha_char),
                not(alphanum),
            )
        )(input)
    }
}

/// n*m DIGIT terminated by the same look-ahead discipline.
pub(crate) fn digit_m_n(min: usize, max: usize) -> impl Fn(ParserInput) -> ParserResult<ParserInput> {
    move |input: ParserInput| {
        recognize(
            terminated(
                take_while_m_n(min, max, is_digit_char),
                not(alphanum),
            )
        )(input)
    }
}

/// n*m alphanum terminated by the same look-ahead discipline.
pub(crate) fn alphanum_m_n(min: usize, max: usize) -> impl Fn(ParserInput) -> ParserResult<ParserInput> {
    move |input: ParserInput| {
        recognize(
            terminated(
                take_while_m_n(min, max, is_alphanum_char),
                not(alphanum),
            )
        )(input)
    }
}

// language      = 2*3ALPHA ["-" extlang] ; shortest ISO 639 code
//               / 4ALPHA                 ; reserved for future use
//               / 5*8ALPHA               ; registered language subtag
//
// extlang       = 3ALPHA *2("-" 3ALPHA)
//
// https://datatracker.ietf.org/doc/html/rfc5646#section-2.1
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Language {
    pub primary: String,
    pub extensions: Option<Vec<String>>,
}

impl Language {
    pub fn new(primary: impl Into<String>, extensions: Option<Vec<String>>) -> Self {
        Self { primary: primary.into(), extensions }
    }
}

/// 1*3("-" 3ALPHA)
fn extlang(input: ParserInput) -> ParserResult<Vec<String>> {
    map(
        many_m_n(1, 3, preceded(hyphen_minus, alpha_m_n(3, 3))),
        |subtags| subtags.iter().map(|subtag| subtag.to_string()).collect(),
    )(input)
}

impl TextEntity for Language {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "LANGUAGE",
            alt((
                map(
                    pair(alpha_m_n(2, 3), opt(extlang)),
                    |(primary, extensions)| Self {
                        primary: primary.to_string(),
                        extensions,
                    },
                ),
                map(alpha_m_n(4, 4), |primary| Self {
                    primary: primary.to_string(),
                    extensions: None,
                }),
                map(alpha_m_n(5, 8), |primary| Self {
                    primary: primary.to_string(),
                    extensions: None,
                }),
            )),
        )(input)
    }

    fn render_text(&self) -> String {
        let mut rendered = self.primary.clone();

        if let Some(extensions) = &self.extensions {
            for extension in extensions {
                rendered.push('-');
                rendered.push_str(extension);
            }
        }

        rendered
    }
}

impl_text_entity_traits!(Language);

// script        = 4ALPHA              ; ISO 15924 code
//
// The leading "-" separator belongs to the parser and the renderer, not the
// stored value.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Script(pub String);

impl TextEntity for Script {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "SCRIPT",
            map(
                preceded(hyphen_minus, alpha_m_n(4, 4)),
                |value| Self(value.to_string()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!("-{}", self.0)
    }
}

impl_text_entity_traits!(Script);

// region        = 2ALPHA              ; ISO 3166-1 code
//               / 3DIGIT              ; UN M.49 code
//
// Same separator convention as script. The numeric form really is digits.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Region(pub String);

impl TextEntity for Region {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "REGION",
            map(
                preceded(
                    hyphen_minus,
                    alt((
                        alpha_m_n(2, 2),
                        digit_m_n(3, 3),
                    )),
                ),
                |value| Self(value.to_string()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!("-{}", self.0)
    }
}

impl_text_entity_traits!(Region);

// variant       = 5*8alphanum         ; registered variants
//               / (DIGIT 3alphanum)
//
// Zero or more "-"-prefixed variant subtags.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Variant(pub Vec<String>);

fn variant_subtag(input: ParserInput) -> ParserResult<ParserInput> {
    alt((
        alphanum_m_n(5, 8),
        recognize(
            terminated(
                pair(digit, take_while_m_n(3, 3, is_alphanum_char)),
                not(alphanum),
            )
        ),
    ))(input)
}

impl TextEntity for Variant {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "VARIANT",
            map(
                many0(preceded(hyphen_minus, variant_subtag)),
                |subtags| Self(subtags.iter().map(|subtag| subtag.to_string()).collect()),
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|subtag| format!("-{}", subtag)).join("")
    }
}

impl_text_entity_traits!(Variant);

// Language-Tag  = language ["-" script] ["-" region] *("-" variant)
//
// https://datatracker.ietf.org/doc/html/rfc5646#section-2.1
//
// Grandfathered, extension and private-use forms are out of scope.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LanguageTag {
    pub language: Language,
    pub script: Option<Script>,
    pub region: Option<Region>,
    pub variant: Variant,
}

impl LanguageTag {
    pub fn new(
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
        variant: Variant,
    ) -> Self {
        Self { language, script, region, variant }
    }
}

impl TextEntity for LanguageTag {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "LANGUAGE-TAG",
            map(
                tuple((
                    Language::parse_text,
                    opt(Script::parse_text),
                    opt(Region::parse_text),
                    Variant::parse_text,
                )),
                |(language, script, region, variant)| Self {
                    language,
                    script,
                    region,
                    variant,
                },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!(
            "{}{}{}{}",
            self.language.render_text(),
            self.script.render_text(),
            self.region.render_text(),
            self.variant.render_text(),
        )
    }
}

impl_text_entity_traits!(LanguageTag);

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use gossamer_core::assert_parser_output;

    #[test]
    fn parse_text_language() {
        assert_parser_output!(
            Language::parse_text("en;q=0.5".into()),
            (
                ";q=0.5",
                Language::new("en", None),
            ),
        );

        // The 2*3ALPHA alternative may not leak into a longer run.
        assert_parser_output!(
            Language::parse_text("hylaz".into()),
            (
                "",
                Language::new("hylaz", None),
            ),
        );

        assert_parser_output!(
            Language::parse_text("zh-gan-yue TESTING".into()),
            (
                " TESTING",
                Language::new("zh", Some(vec![String::from("gan"), String::from("yue")])),
            ),
        );

        // A four-letter run after "-" is a script, not an extlang.
        assert_parser_output!(
            Language::parse_text("zh-Hant".into()),
            (
                "-Hant",
                Language::new("zh", None),
            ),
        );

        assert!(Language::parse_text("1en".into()).is_err());
        assert!(Language::parse_text("a".into()).is_err());
    }

    #[test]
    fn parse_text_language_tag() {
        assert_parser_output!(
            LanguageTag::parse_text("hy-Latn-IT-arvela".into()),
            (
                "",
                LanguageTag {
                    language: Language::new("hy", None),
                    script: Some(Script(String::from("Latn"))),
                    region: Some(Region(String::from("IT"))),
                    variant: Variant(vec![String::from("arvela")]),
                },
            ),
        );

        assert_parser_output!(
            LanguageTag::parse_text("en-US TESTING".into()),
            (
                " TESTING",
                LanguageTag {
                    language: Language::new("en", None),
                    script: None,
                    region: Some(Region(String::from("US"))),
                    variant: Variant(vec![]),
                },
            ),
        );

        assert_parser_output!(
            LanguageTag::parse_text("de-CH-1901".into()),
            (
                "",
                LanguageTag {
                    language: Language::new("de", None),
                    script: None,
                    region: Some(Region(String::from("CH"))),
                    variant: Variant(vec![String::from("1901")]),
                },
            ),
        );

        // UN M.49 numeric region.
        assert_parser_output!(
            LanguageTag::parse_text("es-419".into()),
            (
                "",
                LanguageTag {
                    language: Language::new("es", None),
                    script: None,
                    region: Some(Region(String::from("419"))),
                    variant: Variant(vec![]),
                },
            ),
        );

        // A five-letter run is a variant, not a script.
        assert_parser_output!(
            LanguageTag::parse_text("en-abcde".into()),
            (
                "",
                LanguageTag {
                    language: Language::new("en", None),
                    script: None,
                    region: None,
                    variant: Variant(vec![String::from("abcde")]),
                },
            ),
        );

        assert_parser_output!(
            LanguageTag::parse_text("zh-cmn-Hans-CN".into()),
            (
                "",
                LanguageTag {
                    language: Language::new("zh", Some(vec![String::from("cmn")])),
                    script: Some(Script(String::from("Hans"))),
                    region: Some(Region(String::from("CN"))),
                    variant: Variant(vec![]),
                },
            ),
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(
            LanguageTag {
                language: Language::new("hy", None),
                script: Some(Script(String::from("Latn"))),
                region: Some(Region(String::from("IT"))),
                variant: Variant(vec![String::from("arvela")]),
            }.render_text(),
            String::from("hy-Latn-IT-arvela"),
        );

        assert_eq!(
            LanguageTag {
                language: Language::new("en", None),
                script: None,
                region: None,
                variant: Variant(vec![]),
            }.render_text(),
            String::from("en"),
        );
    }

    #[test]
    fn round_trip() {
        let inputs = [
            "en",
            "en-US",
            "hy-Latn-IT-arvela",
            "zh-gan",
            "zh-cmn-Hans-CN",
            "de-CH-1901",
            "es-419",
            "sl-rozaj-biske",
        ];

        for input in inputs {
            let tag = LanguageTag::from_str(input).unwrap();

            assert_eq!(LanguageTag::from_str(&tag.to_string()), Ok(tag), "{input}");
        }
    }

    #[test]
    fn from_str_rejects_malformed_tags() {
        // Two region-shaped subtags cannot both attach.
        assert!(LanguageTag::from_str("de-419-DE").is_err());

        assert!(LanguageTag::from_str("a-DE").is_err());
        assert!(LanguageTag::from_str("en-").is_err());
    }
}
