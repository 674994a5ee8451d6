use crate::attributes::{
	all_attributes,
	string_lit,
};
use proc_macro2::Span;
use syn::{
	spanned::Spanned,
	Data,
	DeriveInput,
	Error,
	Fields,
	Ident,
	NestedMeta,
	Result,
	Type,
};

pub mod infer_type;

/// Where the data for a field comes from
pub enum Source {
	/// `#[shape(attr)]` / `#[shape(attr = "KEY")]`
	Attribute { key: String, is_string: bool },
	/// `#[shape(key)]` / `#[shape(key = "key")]`
	Key(String),
	/// No annotation: child element(s), tag taken from the element type
	Child,
}

pub struct Field {
	pub name: Ident,
	pub ty: Type,
	pub span: Span,
	pub source: Source,
	pub optional: bool,
}

impl Field {
	fn from_field(field: &syn::Field) -> Result<Self> {
		let name = match &field.ident {
			Some(ident) => ident.clone(),
			None => return Err(Error::new(field.span(), "Only named fields supported")),
		};

		let mut source = Source::Child;
		for nested in all_attributes(&field.attrs)? {
			let meta = match &nested {
				NestedMeta::Meta(meta) => meta,
				NestedMeta::Lit(lit) => return Err(Error::new(lit.span(), "expected `attr` or `key`")),
			};
			if meta.path().is_ident("attr") {
				source = Source::Attribute {
					key: string_lit(meta)?.unwrap_or_else(|| name.to_string()),
					is_string: infer_type::as_ref_str(infer_type::option_inner(&field.ty)),
				};
			} else if meta.path().is_ident("key") {
				source = Source::Key(string_lit(meta)?.unwrap_or_else(|| name.to_string()));
			} else {
				return Err(Error::new(meta.span(), "unknown field attribute; expected `attr` or `key`"));
			}
		}

		let optional = infer_type::option(&field.ty)
			|| (matches!(source, Source::Child) && infer_type::vec(&field.ty));

		Ok(Self {
			name,
			ty: field.ty.clone(),
			span: field.span(),
			source,
			optional,
		})
	}
}

/// Everything the derives need to know about a struct
pub struct Meta {
	pub name: Ident,
	pub tag: String,
	pub fields: Vec<Field>,
	pub ignore_unknown: bool,
}

impl Meta {
	pub fn from_input(input: &DeriveInput) -> Result<Self> {
		let mut tag = None;
		let mut ignore_unknown = false;
		for nested in all_attributes(&input.attrs)? {
			match &nested {
				NestedMeta::Meta(meta) if meta.path().is_ident("tag") => {
					tag = Some(string_lit(meta)?.ok_or_else(|| Error::new(meta.span(), "tag needs a value"))?);
				},
				NestedMeta::Meta(syn::Meta::Path(path)) if path.is_ident("ignore_unknown") => {
					ignore_unknown = true;
				},
				_ => {
					return Err(Error::new(
						nested.span(),
						"unknown attribute; expected `tag = \"...\"` or `ignore_unknown`",
					))
				},
			}
		}

		let fields = match &input.data {
			Data::Struct(data) => match &data.fields {
				Fields::Named(named) => named.named.iter().map(Field::from_field).collect::<Result<Vec<_>>>()?,
				Fields::Unit => Vec::new(),
				Fields::Unnamed(_) => return Err(Error::new(input.span(), "Only named structs are supported")),
			},
			_ => return Err(Error::new(input.span(), "Only structs are supported")),
		};

		Ok(Self {
			name: input.ident.clone(),
			tag: tag.unwrap_or_else(|| input.ident.to_string()),
			fields,
			ignore_unknown,
		})
	}
}
