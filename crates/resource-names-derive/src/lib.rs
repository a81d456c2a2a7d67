// Procedural macros for resource-names

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive macro for the `Bindable` trait
///
/// Associates struct fields with variable segment names via the
/// `#[binding("...")]` field attribute. Fields without the attribute are not
/// considered for binding or rendering.
///
/// # Example
///
/// ```ignore
/// #[derive(Bindable, Default)]
/// pub struct Book {
///     #[binding("user_id")]
///     pub user_id: String,
///     #[binding("book_id")]
///     pub book_id: u64,
///     pub title: String, // not bound
/// }
/// ```
#[proc_macro_derive(Bindable, attributes(binding))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_bindable(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_bindable(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`Bindable` can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "`Bindable` requires a struct with named fields",
        ));
    };

    let mut registrations = Vec::new();

    for field in &fields.named {
        let ident = field.ident.as_ref().expect("named field has an ident");

        if let Some(variable) = binding_name(&field.attrs)? {
            registrations.push(quote! {
                .field(
                    #variable,
                    |record: &#name #ty_generics| &record.#ident,
                    |record, value| record.#ident = value,
                )
            });
        }
    }

    Ok(quote! {
        impl #impl_generics resource_names::Bindable for #name #ty_generics #where_clause {
            fn bindings() -> resource_names::Bindings<Self> {
                resource_names::Bindings::new()
                    #(#registrations)*
            }
        }
    })
}

/// Extract the segment name from a field's #[binding("...")] attribute
fn binding_name(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("binding") {
            let segment: syn::LitStr = attr.parse_args()?;
            return Ok(Some(segment.value()));
        }
    }

    Ok(None)
}
