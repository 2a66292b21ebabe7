//! The fixed set of OData primitive types.

/// One of the predefined OData 4.0 primitive types.
///
/// In a metadata document these appear namespaced as `Edm.<name>`, e.g.
/// `Edm.String` or `Edm.GeographyPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
    Geography,
    GeographyPoint,
    GeographyLineString,
    GeographyPolygon,
    GeographyMultiPoint,
    GeographyMultiLineString,
    GeographyMultiPolygon,
    GeographyCollection,
    Geometry,
    GeometryPoint,
    GeometryLineString,
    GeometryPolygon,
    GeometryMultiPoint,
    GeometryMultiLineString,
    GeometryMultiPolygon,
    GeometryCollection,
}

impl PrimitiveKind {
    /// Match the short (un-namespaced) primitive name, exactly as spelled
    /// in the protocol. Returns `None` for anything else, including case
    /// variants; the caller decides how to degrade.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "Binary" => Self::Binary,
            "Boolean" => Self::Boolean,
            "Byte" => Self::Byte,
            "Date" => Self::Date,
            "DateTimeOffset" => Self::DateTimeOffset,
            "Decimal" => Self::Decimal,
            "Double" => Self::Double,
            "Duration" => Self::Duration,
            "Guid" => Self::Guid,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "SByte" => Self::SByte,
            "Single" => Self::Single,
            "Stream" => Self::Stream,
            "String" => Self::String,
            "TimeOfDay" => Self::TimeOfDay,
            "Geography" => Self::Geography,
            "GeographyPoint" => Self::GeographyPoint,
            "GeographyLineString" => Self::GeographyLineString,
            "GeographyPolygon" => Self::GeographyPolygon,
            "GeographyMultiPoint" => Self::GeographyMultiPoint,
            "GeographyMultiLineString" => Self::GeographyMultiLineString,
            "GeographyMultiPolygon" => Self::GeographyMultiPolygon,
            "GeographyCollection" => Self::GeographyCollection,
            "Geometry" => Self::Geometry,
            "GeometryPoint" => Self::GeometryPoint,
            "GeometryLineString" => Self::GeometryLineString,
            "GeometryPolygon" => Self::GeometryPolygon,
            "GeometryMultiPoint" => Self::GeometryMultiPoint,
            "GeometryMultiLineString" => Self::GeometryMultiLineString,
            "GeometryMultiPolygon" => Self::GeometryMultiPolygon,
            "GeometryCollection" => Self::GeometryCollection,
            _ => return None,
        };
        Some(kind)
    }

    /// The short name as it appears after `Edm.` in a metadata document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Date => "Date",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Duration => "Duration",
            Self::Guid => "Guid",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::Stream => "Stream",
            Self::String => "String",
            Self::TimeOfDay => "TimeOfDay",
            Self::Geography => "Geography",
            Self::GeographyPoint => "GeographyPoint",
            Self::GeographyLineString => "GeographyLineString",
            Self::GeographyPolygon => "GeographyPolygon",
            Self::GeographyMultiPoint => "GeographyMultiPoint",
            Self::GeographyMultiLineString => "GeographyMultiLineString",
            Self::GeographyMultiPolygon => "GeographyMultiPolygon",
            Self::GeographyCollection => "GeographyCollection",
            Self::Geometry => "Geometry",
            Self::GeometryPoint => "GeometryPoint",
            Self::GeometryLineString => "GeometryLineString",
            Self::GeometryPolygon => "GeometryPolygon",
            Self::GeometryMultiPoint => "GeometryMultiPoint",
            Self::GeometryMultiLineString => "GeometryMultiLineString",
            Self::GeometryMultiPolygon => "GeometryMultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for name in ["String", "Int32", "Guid", "GeographyMultiLineString"] {
            let kind = PrimitiveKind::from_name(name).unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn unknown_and_case_variant_names_miss() {
        assert_eq!(PrimitiveKind::from_name("FooBar"), None);
        assert_eq!(PrimitiveKind::from_name("string"), None);
        assert_eq!(PrimitiveKind::from_name(""), None);
    }
}
