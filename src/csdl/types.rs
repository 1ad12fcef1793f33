//! Type declarations: entity types, complex types, enum types, type
//! definitions, and vocabulary terms.

use crate::base::FullQualifiedName;

/// A structural property of an entity or complex type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    pub collection: bool,
    pub nullable: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            collection: false,
            nullable: true,
        }
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn non_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// A navigation property relating an entity type to another entity type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationProperty {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    pub collection: bool,
    pub partner: Option<String>,
}

impl NavigationProperty {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            collection: false,
            partner: None,
        }
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }
}

/// An entity type declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EntityType {
    pub name: String,
    pub base_type: Option<FullQualifiedName>,
    pub is_abstract: bool,
    /// Names of the key properties, in declaration order.
    pub key: Vec<String>,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            is_abstract: false,
            key: Vec::new(),
            properties: Vec::new(),
            navigation_properties: Vec::new(),
        }
    }

    pub fn with_base_type(mut self, base: FullQualifiedName) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_key(mut self, key: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.key = key.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_navigation_property(mut self, property: NavigationProperty) -> Self {
        self.navigation_properties.push(property);
        self
    }
}

/// A complex type declaration (structured, but not addressable by key).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexType {
    pub name: String,
    pub base_type: Option<FullQualifiedName>,
    pub properties: Vec<Property>,
}

impl ComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            properties: Vec::new(),
        }
    }

    pub fn with_base_type(mut self, base: FullQualifiedName) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

/// A single named member of an enum type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An enum type declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub underlying_type: FullQualifiedName,
    pub is_flags: bool,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying_type: FullQualifiedName::new("Edm", "Int32"),
            is_flags: false,
            members: Vec::new(),
        }
    }

    pub fn with_underlying_type(mut self, underlying: FullQualifiedName) -> Self {
        self.underlying_type = underlying;
        self
    }

    pub fn flags(mut self) -> Self {
        self.is_flags = true;
        self
    }

    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }
}

/// A type definition: a named restriction of a primitive type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    pub underlying_type: FullQualifiedName,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, underlying_type: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            underlying_type,
        }
    }
}

/// A vocabulary term usable in annotations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub name: String,
    pub type_fqn: FullQualifiedName,
    /// Element kinds this term may annotate, empty meaning "any".
    pub applies_to: Vec<String>,
}

impl Term {
    pub fn new(name: impl Into<String>, type_fqn: FullQualifiedName) -> Self {
        Self {
            name: name.into(),
            type_fqn,
            applies_to: Vec::new(),
        }
    }

    pub fn with_applies_to(mut self, kinds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.applies_to = kinds.into_iter().map(Into::into).collect();
        self
    }
}
