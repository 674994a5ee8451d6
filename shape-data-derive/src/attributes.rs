use syn::{
	spanned::Spanned,
	Attribute,
	Error,
	Lit,
	Meta,
	NestedMeta,
	Result,
};

/// Collect the nested items of all `#[shape(...)]` attributes
pub fn all_attributes(attrs: &[Attribute]) -> Result<Vec<NestedMeta>> {
	let mut result = Vec::new();
	for attr in attrs.iter().filter(|attr| attr.path.is_ident("shape")) {
		match attr.parse_meta()? {
			Meta::List(meta) => result.extend(meta.nested),
			other => return Err(Error::new(other.span(), "expected #[shape(...)]")),
		}
	}
	Ok(result)
}

/// Accepts `name = lit`, `name(lit)` and plain `name` (returning `None`)
pub fn single_lit(meta: &Meta) -> Result<Option<&Lit>> {
	match meta {
		Meta::Path(_) => Ok(None),
		Meta::List(l) => {
			if l.nested.len() > 1 {
				return Err(Error::new(l.span(), "only single argument allowed for argument"));
			}
			match l.nested.first() {
				Some(NestedMeta::Lit(l)) => Ok(Some(l)),
				Some(NestedMeta::Meta(m)) => single_lit(m),
				None => Ok(None),
			}
		},
		Meta::NameValue(nv) => Ok(Some(&nv.lit)),
	}
}

pub fn string_lit(meta: &Meta) -> Result<Option<String>> {
	match single_lit(meta)? {
		None => Ok(None),
		Some(Lit::Str(s)) => Ok(Some(s.value())),
		Some(other) => Err(Error::new(other.span(), "invalid literal; expected string")),
	}
}
