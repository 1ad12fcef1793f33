/// An alias declared for a namespace, either on a local schema or on a
/// reference include.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasInfo {
    pub alias: String,
    pub namespace: String,
}

impl AliasInfo {
    pub fn new(alias: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            namespace: namespace.into(),
        }
    }
}
