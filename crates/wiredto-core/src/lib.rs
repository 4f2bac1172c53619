//! Core runtime for wiredto: the raw value model, DTO and field traits,
//! static field models, typed collections, and hydration observability.
//! The `#[derive(Dto)]` macro that targets these traits lives in
//! `wiredto-derive` and is re-exported by the `wiredto` facade.

mod macros;

pub mod collection;
pub mod error;
pub mod model;
pub mod obs;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        collection::{CollectionItem, DtoCollection},
        error::Error,
        model::{DtoFieldKind, DtoFieldModel, DtoModel},
        traits::{Dto, FieldValue},
        value::{Map, Value},
    };
}
