use std::collections::HashMap;

/// One shape a template variable binding can take: a scalar, an ordered
/// collection, or an ordered association.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TemplateValue {
    Atom(String),
    List(Vec<String>),
    Keys(Vec<(String, String)>),
}

impl TemplateValue {
    pub fn atom(value: impl Into<String>) -> Self {
        Self::Atom(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn keys<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Keys(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Variable bindings fed to `render` and produced by `match_text`.
///
/// Keys are unique; no iteration order is promised. Combining two maps via
/// `union` is right-biased — on a key collision the right-hand binding wins.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UriTemplateData(HashMap<String, TemplateValue>);

impl UriTemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous binding of `name`.
    pub fn set(mut self, name: impl Into<String>, value: TemplateValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TemplateValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.0.get(name)
    }

    pub fn union(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<HashMap<String, TemplateValue>> for UriTemplateData {
    fn from(value: HashMap<String, TemplateValue>) -> Self {
        Self(value)
    }
}

impl FromIterator<(String, TemplateValue)> for UriTemplateData {
    fn from_iter<I: IntoIterator<Item = (String, TemplateValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_keys_unique() {
        let data = UriTemplateData::new()
            .set("x", TemplateValue::atom("1"))
            .set("x", TemplateValue::atom("2"));

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("x"), Some(&TemplateValue::atom("2")));
    }

    #[test]
    fn union_is_right_biased() {
        let left = UriTemplateData::new()
            .set("x", TemplateValue::atom("left"))
            .set("y", TemplateValue::atom("only-left"));

        let right = UriTemplateData::new()
            .set("x", TemplateValue::atom("right"));

        let merged = left.union(right);

        assert_eq!(merged.get("x"), Some(&TemplateValue::atom("right")));
        assert_eq!(merged.get("y"), Some(&TemplateValue::atom("only-left")));
    }
}
