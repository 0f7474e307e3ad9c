/// An attribute set on a node, with a name and value:
/// `name="value"`
///
/// A node can have multiple attributes with the same name; lookups return the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// The name of the attribute.
    pub name: String,

    /// The value of the attribute.
    pub value: String,
}
impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the name of the attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the attribute.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attribute {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
