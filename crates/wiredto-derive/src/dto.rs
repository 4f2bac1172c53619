use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Type};

// derive_dto
pub fn derive_dto(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let ident_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Dto can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Dto can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut classified = Vec::new();
    for field in fields {
        match classify_field(field) {
            Ok(kind) => classified.push((field, kind)),
            Err(err) => return err.to_compile_error(),
        }
    }

    let model_entries = classified.iter().map(|(field, kind)| {
        let field_name = field.ident.as_ref().expect("named field").to_string();
        let kind = match kind {
            FieldKind::Scalar => quote!(::wiredto::model::DtoFieldKind::Scalar),
            FieldKind::Dto => quote!(::wiredto::model::DtoFieldKind::Dto),
            FieldKind::Collection => quote!(::wiredto::model::DtoFieldKind::Collection),
        };

        quote! {
            ::wiredto::model::DtoFieldModel { name: #field_name, kind: #kind },
        }
    });

    let hydrate_stmts = classified.iter().map(|(field, kind)| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();
        let field_ty = &field.ty;

        match kind {
            // Scalars assign through FieldValue; a mismatched raw value
            // leaves the field untouched.
            FieldKind::Scalar => quote! {
                if let Some(value) = raw.get(#field_name) {
                    if let Some(typed) = ::wiredto::traits::FieldValue::from_value(value) {
                        self.#field_ident = typed;
                    }
                }
            },
            // Nested kinds construct recursively, and only from
            // composite raw values.
            FieldKind::Dto => quote! {
                if let Some(value) = raw.get(#field_name) {
                    if value.is_composite() {
                        self.#field_ident = <#field_ty as ::wiredto::traits::Dto>::from_raw(value);
                    }
                }
            },
            FieldKind::Collection => quote! {
                if let Some(value) = raw.get(#field_name) {
                    if value.is_composite() {
                        self.#field_ident = <#field_ty>::from_raw(value);
                    }
                }
            },
        }
    });

    let flatten_stmts = classified.iter().map(|(field, kind)| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        match kind {
            FieldKind::Scalar => quote! {
                map.insert(#field_name, ::wiredto::traits::FieldValue::to_value(&self.#field_ident));
            },
            FieldKind::Dto => quote! {
                map.insert(#field_name, ::wiredto::traits::Dto::to_wire(&self.#field_ident));
            },
            FieldKind::Collection => quote! {
                map.insert(#field_name, self.#field_ident.to_raw());
            },
        }
    });

    let raw_param = if classified.is_empty() {
        quote!(_raw)
    } else {
        quote!(raw)
    };

    let flatten_body = if classified.is_empty() {
        quote! {
            ::wiredto::value::Map::new()
        }
    } else {
        quote! {
            let mut map = ::wiredto::value::Map::new();
            #(#flatten_stmts)*

            map
        }
    };

    quote! {
        impl #impl_generics ::wiredto::traits::Dto for #ident #ty_generics #where_clause {
            const MODEL: &'static ::wiredto::model::DtoModel = &::wiredto::model::DtoModel {
                path: ::core::concat!(::core::module_path!(), "::", #ident_name),
                dto_name: #ident_name,
                fields: &[
                    #(#model_entries)*
                ],
            };

            fn hydrate(&mut self, #raw_param: &::wiredto::value::Map) {
                #(#hydrate_stmts)*
            }

            fn flatten(&self) -> ::wiredto::value::Map {
                #flatten_body
            }
        }
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy)]
enum FieldKind {
    Scalar,
    Dto,
    Collection,
}

// Explicit #[dto(...)] wins; otherwise a field whose type path ends in
// `DtoCollection` is a collection and everything else is a scalar.
// Aliased collection types need the attribute.
fn classify_field(field: &Field) -> Result<FieldKind, Error> {
    let mut explicit = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("dto") {
            continue;
        }

        let arg: syn::Ident = attr.parse_args()?;
        let kind = if arg == "nested" {
            FieldKind::Dto
        } else if arg == "collection" {
            FieldKind::Collection
        } else if arg == "scalar" {
            FieldKind::Scalar
        } else {
            return Err(Error::new_spanned(
                &arg,
                "expected one of `nested`, `collection`, `scalar`",
            ));
        };

        if explicit.replace(kind).is_some() {
            return Err(Error::new_spanned(attr, "duplicate #[dto(...)] attribute"));
        }
    }

    Ok(explicit.unwrap_or_else(|| {
        if is_path_ident(&field.ty, "DtoCollection") {
            FieldKind::Collection
        } else {
            FieldKind::Scalar
        }
    }))
}

fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}
