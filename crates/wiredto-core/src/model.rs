use crate::error::Error;

///
/// DtoModel
/// Macro-generated static model for one DTO variant. Field identity and
/// kind are fixed at definition time; only values change at hydration.
///

#[derive(Debug)]
pub struct DtoModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Variant name used in error messages.
    pub dto_name: &'static str,
    /// Declared fields in declaration order.
    pub fields: &'static [DtoFieldModel],
}

impl DtoModel {
    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Result<&DtoFieldModel, Error> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| Error::MissingProperty {
                dto: self.dto_name,
                field: name.to_string(),
            })
    }

    /// Returns `true` if `name` is a declared field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Iterate over declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}

///
/// DtoFieldModel
/// Static metadata for a single declared field.
///

#[derive(Debug)]
pub struct DtoFieldModel {
    pub name: &'static str,
    pub kind: DtoFieldKind,
}

///
/// DtoFieldKind
///
/// Compile-time classification driving hydration: scalars assign
/// through `FieldValue`, nested kinds construct recursively from
/// composite raw values.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DtoFieldKind {
    Scalar,
    Dto,
    Collection,
}

impl DtoFieldKind {
    /// Returns `true` for kinds that hydrate by constructing a nested
    /// instance rather than assigning a scalar.
    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Dto | Self::Collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: DtoModel = DtoModel {
        path: "wiredto_core::model::tests::Sample",
        dto_name: "Sample",
        fields: &[
            DtoFieldModel {
                name: "id",
                kind: DtoFieldKind::Scalar,
            },
            DtoFieldModel {
                name: "child",
                kind: DtoFieldKind::Dto,
            },
            DtoFieldModel {
                name: "items",
                kind: DtoFieldKind::Collection,
            },
        ],
    };

    #[test]
    fn field_lookup_resolves_declared_names() {
        let field = MODEL.field("child").unwrap();
        assert_eq!(field.kind, DtoFieldKind::Dto);
        assert!(field.kind.is_nested());

        let field = MODEL.field("id").unwrap();
        assert_eq!(field.kind, DtoFieldKind::Scalar);
        assert!(!field.kind.is_nested());
    }

    #[test]
    fn field_lookup_names_the_missing_property() {
        let err = MODEL.field("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "property 'nope' does not exist on Sample"
        );
    }

    #[test]
    fn field_names_follow_declaration_order() {
        let names: Vec<_> = MODEL.field_names().collect();
        assert_eq!(names, vec!["id", "child", "items"]);
        assert!(MODEL.contains("items"));
        assert!(!MODEL.contains("Items"));
    }
}
