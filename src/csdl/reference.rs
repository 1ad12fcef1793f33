//! External metadata document references.

/// One namespace pulled in from a referenced document, with an optional
/// document-local alias.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceInclude {
    pub namespace: String,
    pub alias: Option<String>,
}

impl ReferenceInclude {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A reference to an external metadata document.
///
/// The registry indexes one reference record under every include's namespace
/// and alias; resolving any of those keys resolves the whole record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Reference {
    pub uri: String,
    pub includes: Vec<ReferenceInclude>,
}

impl Reference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            includes: Vec::new(),
        }
    }

    pub fn with_include(mut self, include: ReferenceInclude) -> Self {
        self.includes.push(include);
        self
    }
}
