use thiserror::Error as ThisError;

///
/// Error
///
/// Runtime failures surfaced by this crate. Hydration itself is total;
/// the only failure is introspecting a field the variant never declared.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("property '{field}' does not exist on {dto}")]
    MissingProperty { dto: &'static str, field: String },
}
