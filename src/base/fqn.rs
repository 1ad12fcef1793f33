use std::fmt;

/// A namespace-qualified name identifying an EDM metadata element.
///
/// Equality is exact string equality on both fields. An alias and the
/// namespace it abbreviates compare as different values; equivalence between
/// them is established through the registry's resolution cache, never by
/// normalizing the strings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullQualifiedName {
    namespace: String,
    name: String,
}

impl FullQualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse the `Namespace.Name` string form, splitting at the LAST dot.
    ///
    /// A dotless input parses as an empty namespace, so
    /// `parse("Model") == FullQualifiedName::new("", "Model")` while
    /// `parse("org.example.Model")` yields namespace `org.example`.
    pub fn parse(text: &str) -> Self {
        match text.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", text),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FullQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}
