//! Properties and navigation properties of structured types.

use super::typeref::EdmType;

/// A structural (scalar or complex-valued) property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: EdmType,
    /// From the `Nullable` attribute; the protocol default is true.
    pub nullable: bool,
}

/// A typed relationship from one EntityType to another, or to a collection
/// thereof. The target type is carried as a resolved [`EdmType`]
/// descriptor, not an object reference; tying it to the actual EntityType
/// is a later phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationProperty {
    pub name: String,
    pub ty: EdmType,
    pub nullable: bool,
    /// True when related entities are contained by this one rather than
    /// addressable through their own entity set.
    pub contains_target: bool,
    /// Path of the inverse navigation property on the target type.
    /// Empty when the relationship declares no partner.
    pub partner: String,
    pub referential_constraints: Vec<ReferentialConstraint>,
    pub on_delete: Option<OnDeleteAction>,
}

/// Pairs a dependent property on the declaring type with the principal
/// property it references on the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialConstraint {
    pub property: String,
    pub referenced_property: String,
}

/// Action applied to related entities when the source entity is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDeleteAction {
    Cascade,
    None,
    SetNull,
    SetDefault,
}

impl OnDeleteAction {
    /// Match the `Action` attribute of an `OnDelete` element.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Cascade" => Some(Self::Cascade),
            "None" => Some(Self::None),
            "SetNull" => Some(Self::SetNull),
            "SetDefault" => Some(Self::SetDefault),
            _ => None,
        }
    }
}
