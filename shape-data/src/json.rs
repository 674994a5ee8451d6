//! Decode JSON documents from memory
//!
//! The shape's field table is the only source of key names: every key of the input object is
//! looked up by its declared source key and handed to the record's `serde::Deserialize` impl under
//! the field name. Required keys are checked before any conversion, so a missing key is reported as
//! `MissingKey` instead of a generic data error.

use crate::{
	errors,
	shape::{
		FieldKind,
		FieldSpec,
		Shape,
	},
	Result,
};
use serde::de::{
	self,
	value::BorrowedStrDeserializer,
	DeserializeOwned,
	DeserializeSeed,
	MapAccess,
	Visitor,
};
use serde_json::{
	Map,
	Value,
};
use std::cell::Cell;

/// Decode a JSON object into the record `T`
///
/// - keys are matched against the `Key` rows of `T::FIELDS` by their source name
/// - required keys must be present and not `null`
/// - optional keys may be missing or `null` (decoding to `None`)
/// - other keys are rejected, unless `T::IGNORE_UNKNOWN` is set
pub fn decode_json<T: Shape + DeserializeOwned>(text: &str) -> Result<T> {
	tracing::debug!(shape = T::NAME, len = text.len(), "decoding JSON document");
	let object = match serde_json::from_str::<Value>(text).map_err(errors::syntax)? {
		Value::Object(object) => object,
		other => {
			return Err(errors::type_mismatch(
				T::NAME,
				format_args!("expected a JSON object, found {}", json_type(&other)),
			))
		},
	};
	check_required_keys::<T>(&object)?;
	let entries = map_keys::<T>(object)?;

	let current = Cell::new(None);
	let record = Record { entries, current: &current };
	T::deserialize(record).map_err(|e| conversion_error::<T>(current.get(), e))
}

fn check_required_keys<T: Shape>(object: &Map<String, Value>) -> Result<()> {
	for spec in T::required_fields().filter(|spec| spec.kind == FieldKind::Key) {
		match object.get(spec.source) {
			None | Some(Value::Null) => return Err(errors::missing_key(spec.source)),
			Some(_) => (),
		}
	}
	Ok(())
}

fn map_keys<T: Shape>(object: Map<String, Value>) -> Result<Vec<(&'static FieldSpec, Value)>> {
	let mut entries = Vec::with_capacity(object.len());
	for (key, value) in object {
		match T::FIELDS.iter().find(|spec| spec.kind == FieldKind::Key && spec.source == key) {
			Some(spec) => entries.push((spec, value)),
			None if T::IGNORE_UNKNOWN => {
				tracing::trace!(shape = T::NAME, key = %key, "ignoring unknown key");
			},
			None => return Err(errors::unexpected_key(&key)),
		}
	}
	Ok(entries)
}

fn conversion_error<T: Shape>(key: Option<&'static str>, e: serde_json::Error) -> crate::Error {
	match (missing_field(&e), key) {
		// nested objects are converted by serde alone
		(Some(field), Some(key)) => errors::missing_key(&format!("{}.{}", key, field)),
		(Some(field), None) => errors::missing_key(&field),
		(None, key) => errors::type_mismatch(key.unwrap_or(T::NAME), e),
	}
}

// serde reports absent struct fields through `de::Error::missing_field`
fn missing_field(e: &serde_json::Error) -> Option<String> {
	let message = e.to_string();
	let rest = message.strip_prefix("missing field `")?;
	rest.split('`').next().map(str::to_owned)
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

// Deserializer presenting the mapped entries as a map keyed by record field names
struct Record<'a> {
	entries: Vec<(&'static FieldSpec, Value)>,
	current: &'a Cell<Option<&'static str>>,
}

impl<'de, 'a> de::Deserializer<'de> for Record<'a> {
	type Error = serde_json::Error;

	fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, Self::Error> {
		visitor.visit_map(Entries {
			iter: self.entries.into_iter(),
			value: None,
			current: self.current,
		})
	}

	serde::forward_to_deserialize_any! {
		bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
		bytes byte_buf option unit unit_struct newtype_struct seq tuple
		tuple_struct map struct enum identifier ignored_any
	}
}

struct Entries<'a> {
	iter: std::vec::IntoIter<(&'static FieldSpec, Value)>,
	value: Option<Value>,
	current: &'a Cell<Option<&'static str>>,
}

impl<'de, 'a> MapAccess<'de> for Entries<'a> {
	type Error = serde_json::Error;

	fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> std::result::Result<Option<K::Value>, Self::Error> {
		match self.iter.next() {
			Some((spec, value)) => {
				self.current.set(Some(spec.source));
				self.value = Some(value);
				seed.deserialize(BorrowedStrDeserializer::new(spec.field)).map(Some)
			},
			None => {
				self.current.set(None);
				Ok(None)
			},
		}
	}

	fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> std::result::Result<V::Value, Self::Error> {
		match self.value.take() {
			Some(value) => seed.deserialize(value),
			None => Err(de::Error::custom("value requested before key")),
		}
	}

	fn size_hint(&self) -> Option<usize> {
		Some(self.iter.len())
	}
}
