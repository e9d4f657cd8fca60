pub mod data;
pub mod operator;
pub mod variable;

mod expansion;
mod matching;

pub use data::{TemplateValue, UriTemplateData};
pub use operator::{Operator, OperatorLevel2, OperatorLevel3, OperatorReserved};
pub use variable::{Modifier, VariableList, VariableName, VariableSpec};

use itertools::Itertools;

use nom::branch::alt;
use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::many1;
use nom::sequence::{delimited, pair};

use gossamer_core::grammar::{left_curly_bracket, right_curly_bracket};
use gossamer_core::percent::{percent_decoded1, percent_encode};

use gossamer_core::{TextEntity, ParserInput, ParserResult, impl_text_entity_traits};

/// Returns if a char may appear in a template literal (percent triples
/// aside).
///
/// literals      = %x21 / %x23-24 / %x26 / %x28-3B / %x3D / %x3F-5B
///               / %x5D / %x5F / %x61-7A / %x7E
pub fn is_literal_char(input: char) -> bool {
    matches!(input,
        '\x21'
        | '\x23'..='\x24'
        | '\x26'
        | '\x28'..='\x3B'
        | '\x3D'
        | '\x3F'..='\x5B'
        | '\x5D'
        | '\x5F'
        | '\x61'..='\x7A'
        | '\x7E'
    )
}

// A literal run between expressions, stored decoded.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Literal(pub String);

impl TextEntity for Literal {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        map(percent_decoded1(is_literal_char), Self)(input)
    }

    fn render_text(&self) -> String {
        percent_encode(&self.0, is_literal_char)
    }
}

impl_text_entity_traits!(Literal);

// expression    = "{" [ operator ] variable-list "}"
//
// https://datatracker.ietf.org/doc/html/rfc6570#section-2.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Expression {
    pub operator: Option<Operator>,
    pub variables: VariableList,
}

impl Expression {
    pub fn new(operator: Option<Operator>, variables: VariableList) -> Self {
        Self { operator, variables }
    }
}

impl TextEntity for Expression {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "EXPRESSION",
            map(
                delimited(
                    left_curly_bracket,
                    pair(
                        opt(Operator::parse_text),
                        VariableList::parse_text,
                    ),
                    right_curly_bracket,
                ),
                |(operator, variables)| Self { operator, variables },
            ),
        )(input)
    }

    fn render_text(&self) -> String {
        format!("{{{}{}}}", self.operator.render_text(), self.variables.render_text())
    }
}

impl_text_entity_traits!(Expression);

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TemplatePart {
    Literal(Literal),
    Expression(Expression),
}

impl TextEntity for TemplatePart {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        alt((
            map(Expression::parse_text, Self::Expression),
            map(Literal::parse_text, Self::Literal),
        ))(input)
    }

    fn render_text(&self) -> String {
        match self {
            Self::Literal(literal) => literal.render_text(),
            Self::Expression(expression) => expression.render_text(),
        }
    }
}

impl_text_entity_traits!(TemplatePart);

// URI-Template  = *( literal / expression )
//
// https://datatracker.ietf.org/doc/html/rfc6570#section-2
//
// Parsed non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UriTemplate(pub Vec<TemplatePart>);

impl UriTemplate {
    /// Expands the template against the given bindings. Unbound variables
    /// and empty collections are dropped; an expression whose variables all
    /// dropped contributes nothing.
    pub fn render(&self, data: &UriTemplateData) -> String {
        expansion::render_template(self, data)
    }

    /// Extracts variable bindings from a string this template could have
    /// rendered. Fails when any input byte cannot be assigned to a part.
    pub fn match_text(&self, input: &str) -> Result<UriTemplateData, String> {
        matching::match_template(self, input)
    }
}

impl TextEntity for UriTemplate {
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        context(
            "URI-TEMPLATE",
            map(many1(TemplatePart::parse_text), Self),
        )(input)
    }

    fn render_text(&self) -> String {
        self.0.iter().map(|part| part.render_text()).join("")
    }
}

impl_text_entity_traits!(UriTemplate);

impl std::ops::Add for UriTemplate {
    type Output = Self;

    /// Concatenation. A literal seam is merged into a single literal so the
    /// result renders the way a freshly parsed template would.
    fn add(self, other: Self) -> Self {
        let mut parts = self.0;
        let mut remainder = other.0.into_iter().peekable();

        if let Some(TemplatePart::Literal(last)) = parts.last_mut() {
            if let Some(TemplatePart::Literal(first)) = remainder.peek() {
                last.0.push_str(&first.0);
                remainder.next();
            }
        }

        parts.extend(remainder);

        Self(parts)
    }
}
