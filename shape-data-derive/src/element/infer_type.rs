use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// Infer whether a type is likely one that `ValueString` handles (`String`, `Cow<str>`).
pub fn as_ref_str(ty: &Type) -> bool {
	if let Some(last) = selfless_last(ty) {
		if last.ident == "String" {
			return true;
		}

		if last.ident == "Cow" {
			if let PathArguments::AngleBracketed(args) = &last.arguments {
				if args.args.len() != 2 {
					return false;
				}

				return match args.args.iter().nth(1) {
					Some(GenericArgument::Type(gat)) => {
						selfless_last(gat).map_or(false, |seg| seg.ident == "str")
					},
					Some(_) | None => false,
				};
			}
		}
	}

	false
}

/// Infer whether a type appears to be `Option<T>`.
pub fn option(ty: &Type) -> bool {
	wrapped(ty, "Option").is_some()
}

/// Infer whether a type appears to be `Vec<T>`.
pub fn vec(ty: &Type) -> bool {
	wrapped(ty, "Vec").is_some()
}

/// `T` for `Option<T>`, otherwise the type itself
pub fn option_inner(ty: &Type) -> &Type {
	wrapped(ty, "Option").unwrap_or(ty)
}

/// The element type of a child field: `T` for `T`, `Option<T>` and `Vec<T>`
pub fn element_type(ty: &Type) -> &Type {
	wrapped(ty, "Option").or_else(|| wrapped(ty, "Vec")).unwrap_or(ty)
}

fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
	let last = selfless_last(ty)?;
	if last.ident != wrapper {
		return None;
	}

	if let PathArguments::AngleBracketed(args) = &last.arguments {
		if args.args.len() == 1 {
			if let Some(GenericArgument::Type(inner)) = args.args.first() {
				return Some(inner);
			}
		}
	}

	None
}

fn selfless_last(ty: &Type) -> Option<&PathSegment> {
	if let Type::Path(ty) = ty {
		if ty.qself.is_none() {
			return ty.path.segments.last();
		}
	}

	None
}
