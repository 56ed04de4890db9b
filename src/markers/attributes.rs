use std::fmt;

/// A typed marker property value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Label(String),
}

impl AttributeValue {
    /// Returns the value if this is a [`AttributeValue::Real`].
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if this is a [`AttributeValue::Label`].
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Label(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Label(s)
    }
}

/// Named properties of a marker, kept in insertion order.
///
/// Setting an existing name overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(&'static str, AttributeValue)>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`.
    pub fn set(&mut self, name: &'static str, value: impl Into<AttributeValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let attrs = Attributes::new()
            .with("StationValue", 20.0)
            .with("DisplayText", "20")
            .with("Terminal", false);
        let names: Vec<&str> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["StationValue", "DisplayText", "Terminal"]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut attrs = Attributes::new().with("A", 1_i64).with("B", 2_i64);
        attrs.set("A", 3_i64);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("A"), Some(&AttributeValue::Integer(3)));
        assert_eq!(attrs.iter().next().map(|(n, _)| n), Some("A"));
    }

    #[test]
    fn typed_accessors() {
        let attrs = Attributes::new().with("GradePercent", 2.02).with("ArrowColor", "Green");
        assert_eq!(attrs.get("GradePercent").and_then(AttributeValue::as_real), Some(2.02));
        assert_eq!(attrs.get("ArrowColor").and_then(AttributeValue::as_label), Some("Green"));
        assert_eq!(attrs.get("ArrowColor").and_then(AttributeValue::as_real), None);
        assert!(attrs.get("Missing").is_none());
    }
}
