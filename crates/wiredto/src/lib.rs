//! wiredto: typed DTO hydration and flattening for wire-format payloads.
//!
//! ## Crate layout
//! - `core` (`wiredto-core`): raw value model, DTO and field traits,
//!   static field models, typed collections, hydration observability.
//! - `wiredto-derive`: `#[derive(Dto)]`, generating the static field
//!   model plus `hydrate`/`flatten` from declared field types.
//!
//! This facade re-exports the whole surface; generated code resolves
//! its paths against this crate.

pub use wiredto_core as core;

// derive macro, serde-style: same name as the trait, macro namespace
pub use wiredto_derive::Dto;

// root re-exports, referenced by macro-generated code
pub use wiredto_core::{collection, error, model, obs, traits, value};

pub use wiredto_core::{
    collection::{CollectionItem, DtoCollection},
    error::Error,
    list, map,
    traits::{Dto, FieldValue},
    value::{Map, Value},
};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        CollectionItem, Dto, DtoCollection, Error, FieldValue, Map, Value,
        model::{DtoFieldKind, DtoFieldModel, DtoModel},
    };
}
