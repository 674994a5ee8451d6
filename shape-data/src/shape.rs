//! Static field tables describing how a record maps to its source document
//!
//! A `Shape` lists every field of a record together with where it comes from (XML attribute, XML
//! child element or JSON key) and whether it may be absent. Decoders consult the table instead of
//! inspecting the record type at runtime.

/// Where a field's data is read from
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldKind {
	/// Attribute of the record's own XML element
	Attribute,
	/// Child element of the record's XML element
	Element,
	/// Key of a JSON object
	Key,
}

/// One row of a shape's field table
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FieldSpec {
	/// Name of the record field
	pub field: &'static str,
	/// Attribute key, element tag or JSON key in the source document
	pub source: &'static str,
	/// Kind of source
	pub kind: FieldKind,
	/// Whether absence decodes to `None` instead of an error
	pub optional: bool,
}

impl FieldSpec {
	/// Whether a decode must fail if the source for this field is missing
	pub fn is_required(&self) -> bool {
		!self.optional
	}
}

/// Declared structure of a record
///
/// Can be derived (if `derive` feature is active); deriving `Element` implements this too.
pub trait Shape {
	/// Name of the shape; for XML elements this is the tag
	const NAME: &'static str;

	/// Field table
	const FIELDS: &'static [FieldSpec];

	/// Whether data without a row in the field table is skipped instead of rejected
	const IGNORE_UNKNOWN: bool = false;

	/// Lookup a field by its record field name
	fn field(name: &str) -> Option<&'static FieldSpec> {
		Self::FIELDS.iter().find(|spec| spec.field == name)
	}

	/// Iterate over fields whose absence is an error
	fn required_fields() -> RequiredFields {
		Self::FIELDS.iter().filter(is_required as fn(&&'static FieldSpec) -> bool)
	}
}

/// Iterator returned by `Shape::required_fields`
pub type RequiredFields =
	std::iter::Filter<std::slice::Iter<'static, FieldSpec>, fn(&&'static FieldSpec) -> bool>;

fn is_required(spec: &&'static FieldSpec) -> bool {
	spec.is_required()
}

#[cfg(test)]
mod test {
	use super::*;

	struct Point;

	impl Shape for Point {
		const NAME: &'static str = "point";
		const FIELDS: &'static [FieldSpec] = &[
			FieldSpec { field: "x", source: "X", kind: FieldKind::Attribute, optional: false },
			FieldSpec { field: "label", source: "LABEL", kind: FieldKind::Attribute, optional: true },
		];
	}

	#[test]
	fn lookup() {
		assert_eq!(Point::field("label").map(|spec| spec.source), Some("LABEL"));
		assert!(Point::field("y").is_none());
		let required: Vec<_> = Point::required_fields().map(|spec| spec.field).collect();
		assert_eq!(required, ["x"]);
	}
}
