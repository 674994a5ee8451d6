//! Derive `shape-data` trait implementations
//!
//! Deriving supports the following attributes on the struct:
//! - `#[shape(tag = "...")]`: XML tag / shape name; defaults to struct name
//! - `#[shape(ignore_unknown)]`: Ignore unknown attributes, inner nodes and inner text in XML, and
//!   unknown keys in JSON objects
//!
//! And the following attributes on struct fields:
//! - `#[shape(attr)]`: Mark field as attribute of the XML element (key is the field name)
//! - `#[shape(attr = "...")]`: Mark field as attribute of the XML element with given key
//! - `#[shape(key)]`, `#[shape(key = "...")]`: Mark field as JSON object key (only for deriving
//!   `Shape`); the JSON decoder reads the given key and hands it to `serde` under the field name, so
//!   don't rename the field with `#[serde(rename)]` too
//!
//! Fields without annotation are child elements; their type needs to be `E`, `Option<E>` or
//! `Vec<E>` for some element `E`.  A field is optional if its type is `Option<...>` (or `Vec<...>`
//! for child elements).
//!
//! Multiple attributes can be combined like `#[shape(tag = "...", ignore_unknown)]`.
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/shape-data-derive/0.1.0")]

extern crate proc_macro;

mod attributes;
mod element;
mod parser;
mod shape;

use crate::element::Meta;
use proc_macro::TokenStream;
use syn::{
	parse_macro_input,
	DeriveInput,
};

/// Derive `shape-data::shape::Shape` (the field table)
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match Meta::from_input(&input) {
		Ok(meta) => shape::derive_shape(&meta),
		Err(e) => e.to_compile_error(),
	})
}

/// Derive `shape-data::shape::Shape` and `shape-data::parser::Element`
#[proc_macro_derive(Element, attributes(shape))]
pub fn derive_element(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	let meta = match Meta::from_input(&input) {
		Ok(meta) => meta,
		Err(e) => return e.to_compile_error().into(),
	};
	TokenStream::from(match parser::derive_element_parser(&meta) {
		Ok(parser) => {
			let mut output = shape::derive_shape(&meta);
			output.extend(parser);
			output
		},
		Err(e) => e.to_compile_error(),
	})
}
