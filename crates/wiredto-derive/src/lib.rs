//! `#[derive(Dto)]`: generates the static field model plus the
//! `hydrate`/`flatten` implementations of `wiredto::Dto` for a struct
//! with named fields. Generated paths resolve against the `wiredto`
//! facade crate.

use proc_macro::TokenStream;

mod dto;

#[proc_macro_derive(Dto, attributes(dto))]
pub fn derive_dto(input: TokenStream) -> TokenStream {
    dto::derive_dto(input.into()).into()
}
