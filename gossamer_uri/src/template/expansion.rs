use itertools::Itertools;

use gossamer_core::grammar::{is_reserved_char, is_unreserved_char};
use gossamer_core::percent::percent_encode;

use gossamer_core::TextEntity;

use super::data::{TemplateValue, UriTemplateData};
use super::operator::{Operator, OperatorLevel2, OperatorLevel3};
use super::variable::{Modifier, VariableSpec};
use super::{Expression, TemplatePart, UriTemplate};

/// Expansion behavior selected by an expression's operator
/// (RFC 6570, appendix A).
pub(super) struct OperatorBehavior {
    pub prefix: &'static str,
    pub separator: &'static str,
    pub allow_reserved: bool,
    pub named: bool,
    pub omits_equals_when_empty: bool,
}

pub(super) fn operator_behavior(operator: Option<&Operator>) -> OperatorBehavior {
    match operator {
        // Reserved operators have no defined semantics and expand like the
        // operator-less form.
        None | Some(Operator::Reserved(_)) => OperatorBehavior {
            prefix: "",
            separator: ",",
            allow_reserved: false,
            named: false,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level2(OperatorLevel2::Reserved)) => OperatorBehavior {
            prefix: "",
            separator: ",",
            allow_reserved: true,
            named: false,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level2(OperatorLevel2::Fragment)) => OperatorBehavior {
            prefix: "#",
            separator: ",",
            allow_reserved: true,
            named: false,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level3(OperatorLevel3::Label)) => OperatorBehavior {
            prefix: ".",
            separator: ".",
            allow_reserved: false,
            named: false,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level3(OperatorLevel3::Segment)) => OperatorBehavior {
            prefix: "/",
            separator: "/",
            allow_reserved: false,
            named: false,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level3(OperatorLevel3::Parameter)) => OperatorBehavior {
            prefix: ";",
            separator: ";",
            allow_reserved: false,
            named: true,
            omits_equals_when_empty: true,
        },

        Some(Operator::Level3(OperatorLevel3::Query)) => OperatorBehavior {
            prefix: "?",
            separator: "&",
            allow_reserved: false,
            named: true,
            omits_equals_when_empty: false,
        },

        Some(Operator::Level3(OperatorLevel3::QueryContinuation)) => OperatorBehavior {
            prefix: "&",
            separator: "&",
            allow_reserved: false,
            named: true,
            omits_equals_when_empty: false,
        },
    }
}

pub(super) fn encode_value(behavior: &OperatorBehavior, value: &str) -> String {
    if behavior.allow_reserved {
        percent_encode(value, |value| is_unreserved_char(value) || is_reserved_char(value))
    } else {
        percent_encode(value, is_unreserved_char)
    }
}

pub(super) fn render_template(template: &UriTemplate, data: &UriTemplateData) -> String {
    template
        .0
        .iter()
        .map(|part| match part {
            TemplatePart::Literal(literal) => literal.render_text(),
            TemplatePart::Expression(expression) => render_expression(expression, data),
        })
        .join("")
}

fn render_expression(expression: &Expression, data: &UriTemplateData) -> String {
    let behavior = operator_behavior(expression.operator.as_ref());

    let mut items: Vec<String> = Vec::new();

    for spec in expression.variables.0.iter() {
        let Some(value) = data.get(spec.name.as_str()) else {
            continue;
        };

        // Empty collections contribute nothing; an empty-string atom does.
        match value {
            TemplateValue::List(values) if values.is_empty() => continue,
            TemplateValue::Keys(pairs) if pairs.is_empty() => continue,
            _ => {},
        }

        items.extend(expand_variable(&behavior, spec, value));
    }

    // The prefix appears only when at least one variable produced output.
    if items.is_empty() {
        return String::new();
    }

    format!("{}{}", behavior.prefix, items.join(behavior.separator))
}

fn expand_variable(
    behavior: &OperatorBehavior,
    spec: &VariableSpec,
    value: &TemplateValue,
) -> Vec<String> {
    let name = spec.name.as_str();

    match (value, spec.modifier.as_ref()) {
        (TemplateValue::Atom(value), modifier) => {
            let value = match modifier {
                Some(Modifier::Prefix(length)) => value.chars().take(*length).collect::<String>(),
                _ => value.clone(),
            };

            vec![named_item(behavior, name, encode_value(behavior, &value), value.is_empty())]
        },

        (TemplateValue::List(values), Some(Modifier::Explode)) => {
            values
                .iter()
                .map(|value| {
                    named_item(behavior, name, encode_value(behavior, value), value.is_empty())
                })
                .collect()
        },

        (TemplateValue::List(values), _) => {
            let joined = values.iter().map(|value| encode_value(behavior, value)).join(",");
            let is_empty = joined.is_empty();

            vec![named_item(behavior, name, joined, is_empty)]
        },

        (TemplateValue::Keys(pairs), Some(Modifier::Explode)) => {
            // The variable name is shadowed by the keys themselves.
            pairs
                .iter()
                .map(|(key, value)| {
                    if value.is_empty() && behavior.omits_equals_when_empty {
                        encode_value(behavior, key)
                    } else {
                        format!("{}={}", encode_value(behavior, key), encode_value(behavior, value))
                    }
                })
                .collect()
        },

        (TemplateValue::Keys(pairs), _) => {
            let joined = pairs
                .iter()
                .flat_map(|(key, value)| {
                    [encode_value(behavior, key), encode_value(behavior, value)]
                })
                .join(",");
            let is_empty = joined.is_empty();

            vec![named_item(behavior, name, joined, is_empty)]
        },
    }
}

/// Wraps an expanded value in `name=` for the named operators; the
/// Parameter operator drops the `=` when the value is empty.
fn named_item(behavior: &OperatorBehavior, name: &str, encoded: String, is_empty: bool) -> String {
    if !behavior.named {
        return encoded;
    }

    if is_empty && behavior.omits_equals_when_empty {
        return String::from(name);
    }

    format!("{}={}", name, encoded)
}
