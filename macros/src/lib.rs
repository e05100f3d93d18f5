use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// The validity range declared on a field with `#[range(min, max)]`.
struct FieldRange {
    ident: syn::Ident,
    docs: Vec<syn::Attribute>,
    min: syn::Expr,
    max: syn::Expr,
}

fn take_range(field: &mut syn::Field) -> syn::Result<FieldRange> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(&field.ty, "model fields must be named"))?;

    let position = field
        .attrs
        .iter()
        .position(|a| a.path().is_ident("range"))
        .ok_or_else(|| {
            syn::Error::new_spanned(&ident, "model fields need a #[range(min, max)] attribute")
        })?;
    let attr = field.attrs.remove(position);

    let bounds = attr.parse_args_with(Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated)?;
    if bounds.len() != 2 {
        return Err(syn::Error::new_spanned(
            attr,
            "expected exactly two bounds: #[range(min, max)]",
        ));
    }
    let mut bounds = bounds.into_iter();
    let min = bounds.next().unwrap();
    let max = bounds.next().unwrap();

    let docs = field
        .attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .cloned()
        .collect();

    Ok(FieldRange {
        ident,
        docs,
        min,
        max,
    })
}

/// Generate a constructor validated color model from a struct with between 1
/// and 4 real valued fields, each carrying a `#[range(min, max)]` attribute.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.is_empty() || input.fields.len() > 4 {
        return quote! {
            compile_error!("Models must have between 1 and 4 fields, one for each component of the color.")
        }
        .into();
    }

    let mut ranges = vec![];
    for field in input.fields.iter_mut() {
        match take_range(field) {
            Ok(range) => ranges.push(range),
            Err(err) => return err.to_compile_error().into(),
        }
        // Components are only reachable through the validated constructor.
        field.vis = syn::Visibility::Inherited;
    }

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let arity = ranges.len();

    let names: Vec<_> = ranges.iter().map(|r| r.ident.clone()).collect();
    let labels: Vec<_> = names
        .iter()
        .map(|n| syn::LitStr::new(&n.to_string(), Span::call_site()))
        .collect();
    let mins: Vec<_> = ranges.iter().map(|r| r.min.clone()).collect();
    let maxs: Vec<_> = ranges.iter().map(|r| r.max.clone()).collect();
    let indices: Vec<_> = (0..arity).map(syn::Index::from).collect();

    let getters = ranges.iter().map(|r| {
        let FieldRange { ident, docs, .. } = r;
        quote! {
            #(#docs)*
            pub fn #ident(&self) -> crate::color::Component {
                self.#ident
            }
        }
    });

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color space. Fails if any
            /// component lies outside its legal range.
            pub fn new(
                #(#names: crate::color::Component,)*
            ) -> crate::Result<Self> {
                #(
                    let #names = crate::error::check_range(
                        <Self as crate::color::HasSpace>::SPACE,
                        #labels,
                        #names,
                        #mins,
                        #maxs,
                    )?;
                )*
                Ok(Self { #(#names,)* })
            }

            #(#getters)*

            /// Return the components of this color in declaration order.
            pub fn to_components(&self) -> [crate::color::Component; #arity] {
                [#(self.#names,)*]
            }
        }

        impl crate::models::Model for #struct_name {
            const ARITY: usize = #arity;

            fn from_tokens(tokens: &[&str]) -> crate::Result<Self> {
                let space = <Self as crate::color::HasSpace>::SPACE;
                crate::parse::expect_arity(space, tokens, #arity)?;
                Self::new(
                    #(crate::parse::real(space, #labels, tokens[#indices])?,)*
                )
            }

            fn from_color(color: &crate::color::Color) -> Option<&Self> {
                match color {
                    crate::color::Color::#struct_name(model) => Some(model),
                    _ => None,
                }
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
