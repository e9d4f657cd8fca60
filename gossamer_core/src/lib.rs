pub mod grammar;
pub mod percent;

/// Error value threaded through every parser in the workspace.
///
/// Carries the span at which parsing failed (offset and line come from the
/// `nom_locate` span), an optional human readable message, and a stack of
/// grammar production names added via `nom::error::context`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParserError<'a> {
    span: ParserInput<'a>,
    message: Option<String>,
    context: Vec<String>,
}

impl<'a> std::fmt::Display for ParserError<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message.clone().unwrap_or(String::from("-"));

        if self.context.is_empty() {
            write!(f, "Error: {message} at offset {}", self.offset())
        } else {
            let context = self.context.join(" <- ");

            write!(f, "Error: {message} at offset {} in {context}", self.offset())
        }
    }
}

impl<'a> ParserError<'a> {
    pub fn new(message: String, span: ParserInput<'a>) -> Self {
        Self {
            span,
            message: Some(message),
            context: Vec::new(),
        }
    }

    pub fn span(&self) -> &ParserInput {
        &self.span
    }

    pub fn message(&self) -> String {
        self.message.clone().unwrap_or(String::from("-"))
    }

    pub fn context(&self) -> Vec<String> {
        self.context.clone()
    }

    pub fn line(&self) -> u32 {
        self.span().location_line()
    }

    pub fn offset(&self) -> usize {
        self.span().location_offset()
    }
}

impl<'a> nom::error::ParseError<ParserInput<'a>> for ParserError<'a> {
    fn from_error_kind(input: ParserInput<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(
            format!("parse error {:?}", kind),
            input,
        )
    }

    fn append(_input: ParserInput<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: ParserInput<'a>, unexpected: char) -> Self {
        Self::new(
            format!("unexpected character '{}'", unexpected),
            input,
        )
    }
}

impl<'a> nom::error::ContextError<ParserInput<'a>> for ParserError<'a> {
    fn add_context(_input: ParserInput, context: &'static str, mut other: Self) -> Self {
        other.context.push(String::from(context));
        other
    }
}

impl<'a, E> nom::error::FromExternalError<ParserInput<'a>, E> for ParserError<'a>
where
    E: ToString,
{
    /// Create a new error from an input position and an external error
    fn from_external_error(input: ParserInput<'a>, _kind: nom::error::ErrorKind, error: E) -> Self {
        Self::new(error.to_string(), input)
    }
}

/// Flattens a `ParserError` into the single-line message surfaced by the
/// `FromStr` implementations.
pub fn convert_error<I: core::ops::Deref<Target = str>>(_input: I, error: ParserError) -> std::string::String {
    error.to_string()
}

pub type ParserInput<'a> = nom_locate::LocatedSpan<&'a str>;
pub type ParserResult<'a, O> = nom::IResult<ParserInput<'a>, O, ParserError<'a>>;

/// The paired parser and formatter of a single grammar element.
///
/// `parse_text` consumes a prefix of the input and produces the typed value;
/// `render_text` emits the canonical textual form of a value. Values obtained
/// through `parse_text` always satisfy `validate`; values assembled by hand
/// may not, which is deliberate — the constructors are advisory.
pub trait TextEntity {
    fn parse_text(input: ParserInput) -> ParserResult<Self>
    where
        Self: Sized;

    fn render_text(&self) -> String;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T> TextEntity for Option<T>
where
    T: TextEntity,
{
    fn parse_text(input: ParserInput) -> ParserResult<Self> {
        T::parse_text(input).map(|(remaining, parsed)| (remaining, Some(parsed)))
    }

    fn render_text(&self) -> String {
        if let Some(entity) = self {
            entity.render_text()
        } else {
            String::new()
        }
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(entity) = self {
            entity.validate()
        } else {
            Ok(())
        }
    }
}

#[macro_export]
macro_rules! impl_text_entity_traits {
    ($entity:ident) => {
        impl std::str::FromStr for $entity {
            type Err = String;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let parser_result = nom::combinator::all_consuming(
                    <Self as $crate::TextEntity>::parse_text
                )(input.into());

                match parser_result {
                    Ok((_remaining, value)) => Ok(value),

                    Err(error) => {
                        if let nom::Err::Error(error) = error {
                            Err($crate::convert_error(input, error))
                        } else {
                            Err(error.to_string())
                        }
                    }
                }
            }
        }

        impl ToString for $entity {
            fn to_string(&self) -> String {
                $crate::TextEntity::render_text(self)
            }
        }
    }
}

/// Replaces the message of a parser's error with a readable "expected ..."
/// description, keeping the failing span.
#[macro_export]
macro_rules! map_err_message {
    ($parser:expr, $message:expr $(,)*) => {
        |input: $crate::ParserInput| {
            ($parser)(input).map_err(move |error| match error {
                nom::Err::Error(_error) => {
                    nom::Err::Error(
                        $crate::ParserError::new(String::from($message), input)
                    )
                },

                nom::Err::Failure(_error) => {
                    nom::Err::Failure(
                        $crate::ParserError::new(String::from($message), input)
                    )
                },

                error => error,
            })
        }
    };
}

#[macro_export]
macro_rules! assert_parser_output {
    ($subject:expr, ($remaining:expr, $expected:expr $(,)*) $(,)*) => {
        let result = $subject;

        let Ok((remaining, parsed_value)) = result else {
            panic!("Expected to be Ok, Actual: {:#?}", result);
        };

        pretty_assertions_sorted::assert_eq!(remaining.to_string(), String::from($remaining));
        pretty_assertions_sorted::assert_eq_sorted!(parsed_value, $expected);
    }
}

#[macro_export]
macro_rules! assert_parser_error {
    ($subject:expr, nom::Err::Error(span: $span:expr, message: $message:expr, context: [$($context:expr),* $(,)*] $(,)*) $(,)*) => {
        let result = $subject;

        let Err(nom::Err::Error(error)) = result else {
            panic!("Expected to be Err(nom::Err::Error), Actual: {:#?}", result);
        };

        pretty_assertions_sorted::assert_eq!(error.span().to_string(), String::from($span));
        pretty_assertions_sorted::assert_eq!(error.message(), String::from($message));
        pretty_assertions_sorted::assert_eq!(error.context(), vec![$(String::from($context)),*] as Vec<String>);
    }
}
