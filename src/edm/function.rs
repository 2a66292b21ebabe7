//! Schema-declared functions.

use super::typeref::EdmType;

/// A function declared by a schema. The `ReturnType` child is mandatory in
/// the metadata document; a function without one aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmFunction {
    pub schema_namespace: String,
    pub name: String,
    /// True for bound functions, whose first parameter is the binding
    /// parameter.
    pub is_bound: bool,
    pub return_type: EdmType,
    pub parameters: Vec<Parameter>,
}

/// One function parameter, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: EdmType,
}
