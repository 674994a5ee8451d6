use crate::element::{
	Field,
	Meta,
	Source,
};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
	Error,
	Result,
};

/// Emit the XML parse state and `parser::Element` impl
pub fn derive_element_parser(meta: &Meta) -> Result<TokenStream> {
	let Meta { name, .. } = meta;

	let mut state_fields = TokenStream::new();
	let mut finish = TokenStream::new();
	let mut vacant = TokenStream::new();
	let mut el_attrs = TokenStream::new();
	let mut el_inner_node = TokenStream::new();

	for field in &meta.fields {
		let Field { name, span, ty, .. } = field;
		match &field.source {
			Source::Key(_) => {
				return Err(Error::new(*span, "JSON keys can't be parsed from XML; use `attr` or a child element"));
			},
			Source::Attribute { key: attr_key, is_string } => {
				let value_t = if *is_string {
					quote!(ValueString)
				} else {
					quote!(ValueDefault)
				};
				if field.optional {
					// already optional
					state_fields.extend(quote_spanned! {*span=>
						#name: #ty,
					});
					finish.extend(quote_spanned! {*span=>
						#name: self.#name,
					});
				} else {
					state_fields.extend(quote_spanned! {*span=>
						#name: Option<#ty>,
					});
					finish.extend(quote_spanned! {*span=>
						#name: match self.#name {
							Some(v) => v,
							None => return Err(errors::missing_attribute(#attr_key)),
						},
					});
				}
				el_attrs.extend(quote_spanned! {*span=>
					if #attr_key == key && self.#name.is_none() {
						self.#name = Some(#value_t::parse_value(key, value)?);
						return Ok(());
					}
				});
				vacant.extend(quote_spanned! {*span=>
					&& self.#name.is_none()
				});
			},
			Source::Child => {
				state_fields.extend(quote_spanned! {*span=>
					#name: <#ty as Inner>::ParseState,
				});
				finish.extend(quote_spanned! {*span=>
					#name: self.#name.parse_inner_finish()?,
				});
				el_inner_node.extend(quote_spanned! {*span=>
					let parser = match self.#name.parse_inner_node(tag, parser)? {
						InnerParseResult::Next(p) => p,
						InnerParseResult::Success => return Ok(()),
					};
				});
				vacant.extend(quote_spanned! {*span=>
					&& self.#name.parse_inner_vacant()
				});
			},
		}
	}

	let handle_unknown_attribute = if meta.ignore_unknown {
		quote! {
			let _ = (key, value);
			Ok(())
		}
	} else {
		quote! {
			let _ = value;
			Err(errors::unexpected_attribute(key))
		}
	};
	let handle_unknown_element = if meta.ignore_unknown {
		quote! {
			parser.parse_element_state(&mut IgnoreElement)
		}
	} else {
		quote! {
			let _ = parser;
			Err(errors::unexpected_element(tag))
		}
	};
	let handle_text = if meta.ignore_unknown {
		quote! {
			fn parse_element_inner_text(&mut self, text: Cow<'_, str>) -> Result<()> {
				let _ = text;
				Ok(())
			}
		}
	} else {
		// default implementation rejects non-whitespace text
		TokenStream::new()
	};

	Ok(quote! {
		const _: () = {
			#[allow(unused_imports)]
			use shape_data::{
				errors,
				parser::{
					Element,
					ElementParser,
					FixedElementState,
					IgnoreElement,
					Inner,
					InnerParseResult,
					InnerState,
					Value,
					ValueDefault,
					ValueString,
				},
				shape::Shape,
				Result,
			};
			use std::borrow::Cow;

			#[doc(hidden)]
			#[derive(Default)]
			pub struct State {
				#state_fields
			}

			impl FixedElementState for State {
				type Output = #name;

				const TAG: &'static str = <#name as Shape>::NAME;

				fn parse_element_attribute(&mut self, key: &str, value: Cow<'_, str>) -> Result<()> {
					#el_attrs
					#handle_unknown_attribute
				}

				#handle_text

				fn parse_element_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<()> {
					#el_inner_node
					#handle_unknown_element
				}

				fn parse_element_vacant(&self) -> bool {
					true #vacant
				}

				fn parse_element_finish(self) -> Result<Self::Output> {
					Ok(#name {
						#finish
					})
				}
			}

			impl Element for #name {
				type ParseState = State;
			}
		};
	})
}
