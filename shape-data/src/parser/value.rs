use crate::{
	errors,
	Result,
};
use std::borrow::Cow;

/// Trait to parse attribute values
///
/// This is implemented by "marker" types to decide how to parse a type (the same type can be
/// parsed differently depending on the marker type).  `key` names the attribute for error
/// reporting.
pub trait Value<T> {
	/// Parse value from text
	fn parse_value(key: &str, text: Cow<'_, str>) -> Result<T>;
}

/// Implements `Value` for all types implementing `std::str::FromStr`; this is a good default.
pub struct ValueDefault;

impl<T> Value<T> for ValueDefault
where
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	fn parse_value(key: &str, text: Cow<'_, str>) -> Result<T> {
		text.parse::<T>().map_err(|e| errors::type_mismatch(key, e))
	}
}

/// Implements `Value` for `String` and `Cow<str>` (taking the text as is).
pub struct ValueString;

impl Value<String> for ValueString {
	fn parse_value(_key: &str, text: Cow<'_, str>) -> Result<String> {
		Ok(text.into_owned())
	}
}

impl<'a> Value<Cow<'a, str>> for ValueString {
	fn parse_value(_key: &str, text: Cow<'_, str>) -> Result<Cow<'a, str>> {
		Ok(Cow::Owned(text.into_owned()))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn default_parses_from_str() {
		let v: u32 = ValueDefault::parse_value("other", "42".into()).unwrap();
		assert_eq!(v, 42);
		let err = <ValueDefault as Value<u32>>::parse_value("other", "forty".into()).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	}

	#[test]
	fn string_keeps_text() {
		let v: String = ValueString::parse_value("TIME", "2013.05.27 00:00:00".into()).unwrap();
		assert_eq!(v, "2013.05.27 00:00:00");
	}
}
