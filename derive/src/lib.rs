//! Derive support for `remodel`.
//!
//! `#[derive(Model)]` implements the `Value` and `Record` traits for a
//! struct with named fields. Public fields become the record's visible
//! surface; private fields stay out of field access but still take part in
//! whole-value cloning and zero tests.
//!
//! Field attributes:
//!
//! - `#[model("name,omitempty,notraverse")]` — the raw annotation string,
//!   stored verbatim and interpreted by the engine.
//! - `#[model(embedded)]` — marks the field as embedded, splicing its keys
//!   into the parent during mapping.
//! - `#[model("tag", embedded)]` — both at once.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Token, Visibility, parse_macro_input,
    parse_quote,
};

#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

// -----------------------------------------------------------------------------
// Attribute parsing

enum ModelArg {
    Tag(LitStr),
    Embedded,
}

impl Parse for ModelArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            Ok(ModelArg::Tag(input.parse()?))
        } else if lookahead.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == "embedded" {
                Ok(ModelArg::Embedded)
            } else {
                Err(Error::new(
                    ident.span(),
                    "unknown `model` option, expected `embedded` or a string annotation",
                ))
            }
        } else {
            Err(lookahead.error())
        }
    }
}

struct FieldAttrs {
    tag: String,
    embedded: bool,
}

fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut tag = String::new();
    let mut embedded = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("model") {
            continue;
        }
        let args = attr.parse_args_with(Punctuated::<ModelArg, Token![,]>::parse_terminated)?;
        for arg in args {
            match arg {
                ModelArg::Tag(lit) => tag = lit.value(),
                ModelArg::Embedded => embedded = true,
            }
        }
    }
    Ok(FieldAttrs { tag, embedded })
}

// -----------------------------------------------------------------------------
// Expansion

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "`#[derive(Model)]` only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            &input.ident,
            "`#[derive(Model)]` only supports structs with named fields",
        ));
    };

    let name = &input.ident;
    let all_fields: Vec<&Field> = fields.named.iter().collect();
    let pub_fields: Vec<&Field> = all_fields
        .iter()
        .copied()
        .filter(|field| matches!(field.vis, Visibility::Public(_)))
        .collect();

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for field in &all_fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::remodel::Value));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Whole-value operations cover every field, public or not.
    let all_idents: Vec<&Ident> = all_fields
        .iter()
        .map(|field| field.ident.as_ref().ok_or_else(|| {
            Error::new_spanned(field, "expected a named field")
        }))
        .collect::<syn::Result<_>>()?;

    let clone_fields = all_idents.iter().map(|ident| {
        quote! {
            #ident: ::remodel::__macro_exports::concrete(self.#ident.clone_literal())
        }
    });
    let zero_fields = all_idents.iter().map(|ident| {
        quote! {
            #ident: ::remodel::__macro_exports::concrete(self.#ident.make_zero())
        }
    });
    let zero_checks = all_idents.iter().map(|ident| {
        quote! {
            && self.#ident.is_zero_value()
        }
    });

    // Field access covers the public fields only.
    let mut field_infos = Vec::new();
    let mut ref_arms = Vec::new();
    let mut mut_arms = Vec::new();
    let mut index_arms = Vec::new();
    for (index, field) in pub_fields.iter().enumerate() {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
        let attrs = parse_field_attrs(field)?;
        let name_str = ident.to_string();
        let tag_str = &attrs.tag;
        let embedded = attrs.embedded;
        field_infos.push(quote! {
            ::remodel::__macro_exports::FieldInfo::new(#name_str, #tag_str, #embedded)
        });
        ref_arms.push(quote! {
            #name_str => ::core::option::Option::Some(&self.#ident)
        });
        mut_arms.push(quote! {
            #name_str => ::core::option::Option::Some(&mut self.#ident)
        });
        index_arms.push(quote! {
            #index => ::core::option::Option::Some(&self.#ident)
        });
    }
    let pub_len = pub_fields.len();

    Ok(quote! {
        impl #impl_generics ::remodel::Value for #name #ty_generics #where_clause {
            fn set_boxed(
                &mut self,
                value: ::std::boxed::Box<dyn ::remodel::Value>,
            ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::remodel::Value>> {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn value_kind(&self) -> ::remodel::Kind {
                ::remodel::Kind::Record
            }

            #[inline]
            fn value_ref(&self) -> ::remodel::ops::ValueRef<'_> {
                ::remodel::ops::ValueRef::Record(self)
            }

            #[inline]
            fn value_mut(&mut self) -> ::remodel::ops::ValueMut<'_> {
                ::remodel::ops::ValueMut::Record(self)
            }

            fn clone_literal(&self) -> ::std::boxed::Box<dyn ::remodel::Value> {
                ::std::boxed::Box::new(Self {
                    #(#clone_fields,)*
                })
            }

            fn make_zero(&self) -> ::std::boxed::Box<dyn ::remodel::Value> {
                ::std::boxed::Box::new(Self {
                    #(#zero_fields,)*
                })
            }

            fn is_zero_value(&self) -> bool {
                true #(#zero_checks)*
            }
        }

        impl #impl_generics ::remodel::ops::Record for #name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::remodel::Value> {
                match name {
                    #(#ref_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn ::remodel::Value> {
                match name {
                    #(#mut_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn ::remodel::Value> {
                match index {
                    #(#index_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_len(&self) -> usize {
                #pub_len
            }

            fn field_info(&self) -> &'static [::remodel::__macro_exports::FieldInfo] {
                const FIELDS: &[::remodel::__macro_exports::FieldInfo] = &[
                    #(#field_infos,)*
                ];
                FIELDS
            }
        }
    })
}
