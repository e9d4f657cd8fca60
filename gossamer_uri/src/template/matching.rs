use gossamer_core::grammar::{equals_sign, is_reserved_char, is_unreserved_char, tag};
use gossamer_core::percent::{percent_decoded0, percent_decoded1};

use gossamer_core::{TextEntity, ParserInput, ParserResult};

use super::data::{TemplateValue, UriTemplateData};
use super::expansion::{operator_behavior, OperatorBehavior};
use super::variable::{Modifier, VariableSpec};
use super::{TemplatePart, UriTemplate};

/// Reverse expansion: walks the template parts over a concrete string,
/// requiring literals verbatim and deriving a parser per variable from its
/// (operator, modifier) pair. The whole input must be consumed.
pub(super) fn match_template(template: &UriTemplate, input: &str) -> Result<UriTemplateData, String> {
    let mut remaining: ParserInput = input.into();
    let mut data = UriTemplateData::new();

    for part in template.0.iter() {
        match part {
            TemplatePart::Literal(literal) => {
                let rendered = literal.render_text();

                match tag(rendered.as_str())(remaining) {
                    Ok((rest, _)) => remaining = rest,
                    Err(error) => return Err(flatten_error(error)),
                };
            },

            TemplatePart::Expression(expression) => {
                match match_expression(expression, remaining) {
                    Ok((rest, bindings)) => {
                        data = data.union(bindings);
                        remaining = rest;
                    },
                    Err(error) => return Err(flatten_error(error)),
                }
            },
        }
    }

    if remaining.fragment().is_empty() {
        Ok(data)
    } else {
        Err(format!("unmatched input remains at offset {}", remaining.location_offset()))
    }
}

fn flatten_error(error: nom::Err<gossamer_core::ParserError>) -> String {
    match error {
        nom::Err::Error(error) | nom::Err::Failure(error) => error.to_string(),
        nom::Err::Incomplete(_) => String::from("Error: incomplete input"),
    }
}

fn match_expression<'a>(
    expression: &super::Expression,
    input: ParserInput<'a>,
) -> ParserResult<'a, UriTemplateData> {
    let behavior = operator_behavior(expression.operator.as_ref());

    let mut data = UriTemplateData::new();

    // An expression whose variables were all dropped rendered nothing — the
    // missing prefix identifies that case.
    let mut remaining = match tag_optional(behavior.prefix, input) {
        Some(rest) => rest,
        None => return Ok((input, data)),
    };

    let mut matched_any = false;

    for spec in expression.variables.0.iter() {
        let checkpoint = remaining;

        let item_input = if matched_any {
            match tag(behavior.separator)(remaining) {
                Ok((rest, _)) => rest,
                // No separator: the later variables were unbound.
                Err(_) => break,
            }
        } else {
            remaining
        };

        match match_variable(&behavior, spec, item_input) {
            Ok((rest, value)) => {
                data.insert(spec.name.as_str(), value);
                remaining = rest;
                matched_any = true;
            },

            Err(_) => {
                remaining = checkpoint;
                break;
            },
        }
    }

    Ok((remaining, data))
}

/// Consumes `prefix` if non-empty; `None` means the prefix was required but
/// absent.
fn tag_optional<'a>(prefix: &str, input: ParserInput<'a>) -> Option<ParserInput<'a>> {
    if prefix.is_empty() {
        return Some(input);
    }

    match tag(prefix)(input) {
        Ok((rest, _)) => Some(rest),
        Err(_) => None,
    }
}

fn match_variable<'a>(
    behavior: &OperatorBehavior,
    spec: &VariableSpec,
    input: ParserInput<'a>,
) -> ParserResult<'a, TemplateValue> {
    let exploded = matches!(spec.modifier, Some(Modifier::Explode));

    match (behavior.named, exploded) {
        (true, true) => match_named_exploded(behavior, spec, input),
        (true, false) => match_named(behavior, spec, input),
        (false, true) => match_unnamed_exploded(behavior, input),
        (false, false) => {
            let (remaining, values) = comma_separated_values(behavior, input)?;

            Ok((remaining, atom_or_list(values)))
        },
    }
}

/// `name=v1,v2,...`, or a bare `name` for the Parameter operator's empty
/// atom.
fn match_named<'a>(
    behavior: &OperatorBehavior,
    spec: &VariableSpec,
    input: ParserInput<'a>,
) -> ParserResult<'a, TemplateValue> {
    let (remaining, _) = tag(spec.name.as_str())(input)?;

    match equals_sign(remaining) {
        Ok((rest, _)) => {
            let (rest, values) = comma_separated_values(behavior, rest)?;

            Ok((rest, atom_or_list(values)))
        },

        Err(_error) if behavior.omits_equals_when_empty => {
            Ok((remaining, TemplateValue::Atom(String::new())))
        },

        Err(error) => Err(error),
    }
}

/// `name=v<sep>name=v...` repeats for an exploded list; any other
/// `key=value` sequence is exploded keys. Keys win the look-ahead.
fn match_named_exploded<'a>(
    behavior: &OperatorBehavior,
    spec: &VariableSpec,
    input: ParserInput<'a>,
) -> ParserResult<'a, TemplateValue> {
    let name = spec.name.as_str();

    match key_value_pair(behavior, input) {
        Ok((_, (first_key, _))) if first_key == name => {
            let (remaining, values) = named_list_run(behavior, name, input)?;

            Ok((remaining, TemplateValue::List(values)))
        },

        Ok(_) => {
            let (remaining, pairs) = key_value_pairs(behavior, input)?;

            Ok((remaining, TemplateValue::Keys(pairs)))
        },

        Err(error) => {
            // A bare name is the Parameter operator's empty atom.
            if behavior.omits_equals_when_empty {
                if let Ok((remaining, _)) = tag(name)(input) {
                    return Ok((remaining, TemplateValue::Atom(String::new())));
                }
            }

            Err(error)
        },
    }
}

/// An exploded unnamed variable is a separator-separated run: `key=value`
/// shaped items parse as keys, anything else as a list.
fn match_unnamed_exploded<'a>(
    behavior: &OperatorBehavior,
    input: ParserInput<'a>,
) -> ParserResult<'a, TemplateValue> {
    if let Ok((remaining, pairs)) = key_value_pairs(behavior, input) {
        return Ok((remaining, TemplateValue::Keys(pairs)));
    }

    let (remaining, values) = separated_run(behavior, behavior.separator, input)?;

    Ok((remaining, TemplateValue::List(values)))
}

fn atom_or_list(mut values: Vec<String>) -> TemplateValue {
    if values.len() == 1 {
        TemplateValue::Atom(values.pop().unwrap_or_default())
    } else {
        TemplateValue::List(values)
    }
}

/// The item charset derived from the operator: unreserved, or
/// unreserved + reserved for the Reserved/Fragment operators, always minus
/// the separator and the comma so item boundaries stay observable.
fn item_predicate(behavior: &OperatorBehavior) -> impl Fn(char) -> bool + Copy {
    let allow_reserved = behavior.allow_reserved;
    let separator = behavior.separator;

    move |value: char| {
        let allowed = if allow_reserved {
            is_unreserved_char(value) || is_reserved_char(value)
        } else {
            is_unreserved_char(value)
        };

        allowed && !separator.contains(value) && value != ','
    }
}

fn item_value<'a>(behavior: &OperatorBehavior, input: ParserInput<'a>) -> ParserResult<'a, String> {
    percent_decoded0(item_predicate(behavior))(input)
}

fn comma_separated_values<'a>(
    behavior: &OperatorBehavior,
    input: ParserInput<'a>,
) -> ParserResult<'a, Vec<String>> {
    separated_run(behavior, ",", input)
}

fn separated_run<'a>(
    behavior: &OperatorBehavior,
    separator: &str,
    input: ParserInput<'a>,
) -> ParserResult<'a, Vec<String>> {
    let (mut remaining, first) = item_value(behavior, input)?;

    let mut values = vec![first];

    loop {
        let Ok((rest, _)) = tag(separator)(remaining) else {
            break;
        };

        match item_value(behavior, rest) {
            Ok((rest, value)) => {
                remaining = rest;
                values.push(value);
            },

            Err(_error) => break,
        }
    }

    Ok((remaining, values))
}

fn named_list_run<'a>(
    behavior: &OperatorBehavior,
    name: &str,
    input: ParserInput<'a>,
) -> ParserResult<'a, Vec<String>> {
    let (mut remaining, first) = named_list_item(behavior, name, input)?;

    let mut values = vec![first];

    loop {
        let Ok((rest, _)) = tag(behavior.separator)(remaining) else {
            break;
        };

        match named_list_item(behavior, name, rest) {
            Ok((rest, value)) => {
                remaining = rest;
                values.push(value);
            },

            Err(_error) => break,
        }
    }

    Ok((remaining, values))
}

fn named_list_item<'a>(
    behavior: &OperatorBehavior,
    name: &str,
    input: ParserInput<'a>,
) -> ParserResult<'a, String> {
    let (remaining, _) = tag(name)(input)?;
    let (remaining, _) = equals_sign(remaining)?;

    item_value(behavior, remaining)
}

fn key_value_pairs<'a>(
    behavior: &OperatorBehavior,
    input: ParserInput<'a>,
) -> ParserResult<'a, Vec<(String, String)>> {
    let (mut remaining, first) = key_value_pair(behavior, input)?;

    let mut pairs = vec![first];

    loop {
        let Ok((rest, _)) = tag(behavior.separator)(remaining) else {
            break;
        };

        match key_value_pair(behavior, rest) {
            Ok((rest, pair)) => {
                remaining = rest;
                pairs.push(pair);
            },

            Err(_error) => break,
        }
    }

    Ok((remaining, pairs))
}

fn key_value_pair<'a>(
    behavior: &OperatorBehavior,
    input: ParserInput<'a>,
) -> ParserResult<'a, (String, String)> {
    let predicate = item_predicate(behavior);

    let (remaining, key) = percent_decoded1(move |value| predicate(value) && value != '=')(input)?;
    let (remaining, _) = equals_sign(remaining)?;
    let (remaining, value) = item_value(behavior, remaining)?;

    Ok((remaining, (key, value)))
}
