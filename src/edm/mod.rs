//! EDM data model: type references and the declared symbols of a schema.
//!
//! Everything in this module is produced during a single top-to-bottom
//! parse of the metadata document and never mutated afterwards. Symbols
//! that point at other symbols (an EntitySet's entity type, a navigation
//! property's target) carry name-keyed descriptors, not object references;
//! resolving those against the finished namespace map is a later phase.

mod container;
mod entity;
mod function;
mod primitive;
mod property;
mod typeref;

pub use container::{EntityContainer, EntitySet, NavigationPropertyBinding};
pub use entity::{ComplexType, EntityType, Key};
pub use function::{EdmFunction, Parameter};
pub use primitive::PrimitiveKind;
pub use property::{NavigationProperty, OnDeleteAction, Property, ReferentialConstraint};
pub use typeref::{EdmType, TypeClass};
