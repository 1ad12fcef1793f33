//! Annotation groups: out-of-line annotations targeting a model element.

/// A single annotation applying a vocabulary term.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Qualified name of the applied term.
    pub term: String,
    pub qualifier: Option<String>,
    /// Constant expression value, when one is declared inline.
    pub value: Option<String>,
}

impl Annotation {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            qualifier: None,
            value: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A group of annotations sharing one target element and optional qualifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationGroup {
    /// Path of the annotated element, relative to the schema namespace.
    pub target: String,
    pub qualifier: Option<String>,
    pub annotations: Vec<Annotation>,
}

impl AnnotationGroup {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            qualifier: None,
            annotations: Vec::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}
