use crate::element::{
	infer_type,
	Meta,
	Source,
};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

/// Emit the `Shape` impl (field table)
pub fn derive_shape(meta: &Meta) -> TokenStream {
	let Meta { name, tag, ignore_unknown, .. } = meta;

	let rows: TokenStream = meta.fields.iter().map(|field| {
		let span = field.span;
		let field_name = field.name.to_string();
		let optional = field.optional;
		let (source, kind) = match &field.source {
			Source::Attribute { key, .. } => (quote!(#key), quote!(Attribute)),
			Source::Key(key) => (quote!(#key), quote!(Key)),
			Source::Child => {
				let element = infer_type::element_type(&field.ty);
				(quote_spanned!(span=> <#element as Shape>::NAME), quote!(Element))
			},
		};
		quote_spanned! {span=>
			FieldSpec {
				field: #field_name,
				source: #source,
				kind: FieldKind::#kind,
				optional: #optional,
			},
		}
	}).collect();

	quote! {
		const _: () = {
			use shape_data::shape::{
				FieldKind,
				FieldSpec,
				Shape,
			};

			impl Shape for #name {
				const NAME: &'static str = #tag;
				const FIELDS: &'static [FieldSpec] = &[
					#rows
				];
				const IGNORE_UNKNOWN: bool = #ignore_unknown;
			}
		};
	}
}
