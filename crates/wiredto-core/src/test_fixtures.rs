use crate::{
    model::{DtoFieldKind, DtoFieldModel, DtoModel},
    traits::{Dto, FieldValue},
    value::Map,
};
use serde::{Deserialize, Serialize};

///
/// TestItem
///
/// Hand-written fixture DTO. The derive macro lives downstream of this
/// crate, so core tests implement the trait directly; the shape matches
/// what the macro generates.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TestItem {
    pub n: i64,
    pub label: String,
}

impl Dto for TestItem {
    const MODEL: &'static DtoModel = &DtoModel {
        path: "wiredto_core::test_fixtures::TestItem",
        dto_name: "TestItem",
        fields: &[
            DtoFieldModel {
                name: "n",
                kind: DtoFieldKind::Scalar,
            },
            DtoFieldModel {
                name: "label",
                kind: DtoFieldKind::Scalar,
            },
        ],
    };

    fn hydrate(&mut self, raw: &Map) {
        if let Some(value) = raw.get("n") {
            if let Some(typed) = FieldValue::from_value(value) {
                self.n = typed;
            }
        }
        if let Some(value) = raw.get("label") {
            if let Some(typed) = FieldValue::from_value(value) {
                self.label = typed;
            }
        }
    }

    fn flatten(&self) -> Map {
        let mut map = Map::new();
        map.insert("n", self.n.to_value());
        map.insert("label", self.label.to_value());

        map
    }
}
