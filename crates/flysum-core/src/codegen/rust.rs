//! Rust renderer

use std::path::PathBuf;

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use super::{to_snake_case, EnumModel, RenderedArtifact};
use crate::error::FlysumError;

pub(super) const ALL_CONST: &str = "ALL";
pub(super) const NAME_FN: &str = "name";

const HEADER: &str = "// @generated by flysum. Do not edit.\n\n";

/// Accessor method name in Rust casing (`getChecksum` -> `get_checksum`)
pub(super) fn accessor_name(model: &EnumModel) -> String {
    to_snake_case(&model.accessor)
}

/// Render the model as a fieldless Rust enum with a `const fn` accessor
///
/// The package is not represented; the file is meant to be pulled in
/// with `include!` or declared as a module.
pub(super) fn render(model: &EnumModel) -> Result<RenderedArtifact, FlysumError> {
    let enum_ident = format_ident!("{}", model.name);
    let accessor_ident = format_ident!("{}", accessor_name(model));
    let all_ident = format_ident!("{}", ALL_CONST);
    let name_ident = format_ident!("{}", NAME_FN);

    let variants: Vec<_> = model
        .constants
        .iter()
        .map(|constant| format_ident!("{}", constant.name))
        .collect();
    let values: Vec<TokenStream> = model
        .constants
        .iter()
        .map(|constant| signed_literal(constant.value))
        .collect();
    let names: Vec<&str> = model
        .constants
        .iter()
        .map(|constant| constant.name.as_str())
        .collect();

    let enum_doc = format!(" CRC-32 checksums of the `{}` migrations.", model.qualified_name());
    let accessor_doc = format!(" Checksum of the migration, `{}` in the source model.", model.field);

    let output = quote! {
        #[doc = #enum_doc]
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #enum_ident {
            #(#variants,)*
        }

        impl #enum_ident {
            /// Every migration, in discovery order.
            pub const #all_ident: &'static [Self] = &[#(Self::#variants),*];

            #[doc = #accessor_doc]
            pub const fn #accessor_ident(self) -> i32 {
                match self {
                    #(Self::#variants => #values,)*
                }
            }

            /// Name of the migration constant.
            pub const fn #name_ident(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }
        }
    };

    let syntax_tree: syn::File =
        syn::parse2(output).map_err(|e| FlysumError::Render(e.to_string()))?;

    Ok(RenderedArtifact {
        relative_path: PathBuf::from(format!("{}.rs", to_snake_case(&model.name))),
        source: format!("{HEADER}{}", prettyplease::unparse(&syntax_tree)),
    })
}

/// Integer literal tokens for `value`, negated when needed
///
/// Built from the magnitude so `i32::MIN` renders as `-2147483648`.
fn signed_literal(value: i32) -> TokenStream {
    let magnitude = Literal::u32_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}
