#![allow(missing_docs)] // names should be good enough
//! Sample record shapes
//!
//! `Person` is decoded from JSON; `Tables` and its children from XML like
//!
//! ```xml
//! <TABLES>
//!     <TABLE NAME="abcd" TIME="2013.05.27 00:00:00">
//!         <SPECIAL>
//!             <WEEK NAME="abcde" PARAM="128"/>
//!         </SPECIAL>
//!     </TABLE>
//! </TABLES>
//! ```

use serde::Deserialize;

/// A person with an optional occupation
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, crate::Shape)]
pub struct Person {
	#[shape(key)]
	pub name: String,
	#[shape(key)]
	pub occupation: Option<String>,
}

/// Root element wrapping exactly one `Table`
#[derive(Clone, PartialEq, Eq, Debug, crate::Element)]
#[shape(tag = "TABLES")]
pub struct Tables {
	pub table: Table,
}

#[derive(Clone, PartialEq, Eq, Debug, crate::Element)]
#[shape(tag = "TABLE")]
pub struct Table {
	/// `None` if `<SPECIAL>` is missing or empty
	pub special: Option<Special>,
	#[shape(attr = "NAME")]
	pub name: String,
	/// Timestamp text, kept as is
	#[shape(attr = "TIME")]
	pub time: String,
}

/// Either, both or none of the children may be present
#[derive(Clone, PartialEq, Eq, Debug, crate::Element)]
#[shape(tag = "SPECIAL")]
pub struct Special {
	pub week: Option<Week>,
	pub day: Option<Day>,
}

#[derive(Clone, PartialEq, Eq, Debug, crate::Element)]
#[shape(tag = "WEEK")]
pub struct Week {
	#[shape(attr = "PARAM")]
	pub param: String,
	#[shape(attr = "NAME")]
	pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug, crate::Element)]
#[shape(tag = "DAY")]
pub struct Day {
	#[shape(attr = "DATE")]
	pub date: String,
	#[shape(attr = "MASK")]
	pub mask: String,
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		fixtures,
		json::decode_json,
		shape::{
			FieldKind,
			FieldSpec,
			Shape,
		},
		ErrorKind,
	};

	fn week(param: &str, name: &str) -> Week {
		Week { param: param.into(), name: name.into() }
	}

	fn table(special: Option<Special>) -> Tables {
		Tables {
			table: Table {
				special,
				name: "abcd".into(),
				time: "2013.05.27 00:00:00".into(),
			},
		}
	}

	#[test]
	fn field_tables() {
		assert_eq!(Tables::NAME, "TABLES");
		assert_eq!(
			Table::FIELDS,
			&[
				FieldSpec { field: "special", source: "SPECIAL", kind: FieldKind::Element, optional: true },
				FieldSpec { field: "name", source: "NAME", kind: FieldKind::Attribute, optional: false },
				FieldSpec { field: "time", source: "TIME", kind: FieldKind::Attribute, optional: false },
			][..],
		);
		assert_eq!(
			Tables::field("table"),
			Some(&FieldSpec { field: "table", source: "TABLE", kind: FieldKind::Element, optional: false }),
		);
		assert_eq!(
			Person::FIELDS,
			&[
				FieldSpec { field: "name", source: "name", kind: FieldKind::Key, optional: false },
				FieldSpec { field: "occupation", source: "occupation", kind: FieldKind::Key, optional: true },
			][..],
		);
	}

	#[derive(PartialEq, Debug, Deserialize, crate::Shape)]
	struct Contact {
		#[shape(key = "full_name")]
		name: String,
		#[shape(key = "job")]
		occupation: Option<String>,
	}

	#[derive(PartialEq, Debug, Deserialize, crate::Shape)]
	#[shape(ignore_unknown)]
	struct Nickname {
		#[shape(key)]
		name: String,
	}

	#[test]
	fn json_declared_keys() {
		assert_eq!(Contact::field("name").map(|spec| spec.source), Some("full_name"));
		assert_eq!(
			decode_json::<Contact>(r#"{"full_name": "Pavneet", "job": "dev"}"#).unwrap(),
			Contact { name: "Pavneet".into(), occupation: Some("dev".into()) },
		);
		assert_eq!(
			decode_json::<Contact>(r#"{"full_name": "Pavneet"}"#).unwrap(),
			Contact { name: "Pavneet".into(), occupation: None },
		);

		let err = decode_json::<Contact>(r#"{"full_name": "Pavneet", "name": "X", "job": "dev"}"#).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnexpectedContent);
		assert_eq!(err.to_string(), "Unexpected key: name");

		let err = decode_json::<Contact>(r#"{"name": "Pavneet"}"#).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
		assert_eq!(err.to_string(), r#"Missing key "full_name""#);

		let err = decode_json::<Contact>(r#"{"full_name": "Pavneet", "job": 3}"#).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TypeMismatch);
		assert!(err.to_string().starts_with(r#"Invalid value for "job": "#), "{}", err);
	}

	#[test]
	fn json_unknown_keys() {
		let err = decode_json::<Person>(r#"{"name": "Pavneet", "age": 30}"#).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::UnexpectedContent);
		assert_eq!(
			decode_json::<Nickname>(r#"{"name": "Pav", "age": 30}"#).unwrap(),
			Nickname { name: "Pav".into() },
		);
	}

	#[test]
	fn json_person() {
		assert_eq!(
			decode_json::<Person>(fixtures::PERSON_NAME_ONLY).unwrap(),
			Person { name: "Pavneet".into(), occupation: None },
		);
		assert_eq!(
			decode_json::<Person>(r#"{"name": "Pavneet", "occupation": "engineer"}"#).unwrap(),
			Person { name: "Pavneet".into(), occupation: Some("engineer".into()) },
		);
		assert_eq!(
			decode_json::<Person>(r#"{"occupation": "engineer"}"#).unwrap_err().kind(),
			ErrorKind::MissingRequiredField,
		);
		let err = decode_json::<Person>(r#"{"name": 42}"#).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TypeMismatch);
		assert!(err.to_string().starts_with(r#"Invalid value for "name": "#), "{}", err);
		assert_eq!(decode_json::<Person>(r#"{"name": "#).unwrap_err().kind(), ErrorKind::Syntax);
	}

	#[cfg(feature = "quick-xml")]
	mod xml {
		use super::*;
		use crate::xml::decode_xml;

		#[test]
		fn empty_special() {
			assert_eq!(decode_xml::<Tables>(fixtures::TABLES_EMPTY_SPECIAL).unwrap(), table(None));
		}

		#[test]
		fn empty_and_missing_special_match() {
			let missing = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"/></TABLES>"#,
			)
			.unwrap();
			let self_closing = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"><SPECIAL/></TABLE></TABLES>"#,
			)
			.unwrap();
			let compact = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"><SPECIAL></SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap();
			assert_eq!(missing, table(None));
			assert_eq!(missing, self_closing);
			assert_eq!(missing, compact);
		}

		#[test]
		fn week_only() {
			let tables = decode_xml::<Tables>(fixtures::TABLES_WEEK_SPECIAL).unwrap();
			assert_eq!(
				tables,
				table(Some(Special {
					week: Some(week("128", "abcde")),
					day: None,
				})),
			);
		}

		#[test]
		fn day_only_and_both() {
			let day = Day { date: "2013.05.27".into(), mask: "0x7f".into() };
			let tables = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"><SPECIAL><DAY DATE="2013.05.27" MASK="0x7f"/></SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap();
			assert_eq!(tables, table(Some(Special { week: None, day: Some(day.clone()) })));

			let tables = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"><SPECIAL><DAY DATE="2013.05.27" MASK="0x7f"/><WEEK PARAM="128" NAME="abcde"/></SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap();
			assert_eq!(
				tables,
				table(Some(Special {
					week: Some(week("128", "abcde")),
					day: Some(day),
				})),
			);
		}

		#[test]
		fn empty_week_collapses_special() {
			let tables = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="2013.05.27 00:00:00"><SPECIAL> <WEEK/> </SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap();
			assert_eq!(tables, table(None));
		}

		#[test]
		fn missing_required() {
			let err = decode_xml::<Tables>("<TABLES></TABLES>").unwrap_err();
			assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
			assert_eq!(err.to_string(), r#"Missing element "TABLE""#);

			let err = decode_xml::<Tables>(r#"<TABLES><TABLE TIME="2013.05.27 00:00:00"/></TABLES>"#).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
			assert_eq!(err.to_string(), r#"Missing attribute "NAME""#);

			let err = decode_xml::<Tables>(r#"<TABLES><TABLE NAME="abcd"/></TABLES>"#).unwrap_err();
			assert_eq!(err.to_string(), r#"Missing attribute "TIME""#);

			let err = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="t"><SPECIAL><WEEK NAME="abcde"/></SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap_err();
			assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
			assert_eq!(err.to_string(), r#"Missing attribute "PARAM""#);

			let err = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="t"><SPECIAL><DAY DATE="d"/></SPECIAL></TABLE></TABLES>"#,
			)
			.unwrap_err();
			assert_eq!(err.to_string(), r#"Missing attribute "MASK""#);
		}

		#[test]
		fn single_table_only() {
			let err = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="a" TIME="t"/><TABLE NAME="b" TIME="t"/></TABLES>"#,
			)
			.unwrap_err();
			assert_eq!(err.kind(), ErrorKind::UnexpectedContent);
		}

		#[test]
		fn malformed() {
			for input in &[
				r#"<TABLES><TABLE NAME="abcd" TIME="t"></TABLES>"#,
				r#"<TABLES><TABLE NAME="abcd" TIME="t"/>"#,
				r#"<TABLES><TABLE NAME="abcd" TIME="t"/></TABLES></TABLES>"#,
				"",
			] {
				let err = decode_xml::<Tables>(input).unwrap_err();
				assert_eq!(err.kind(), ErrorKind::Syntax, "{}: {}", input, err);
			}
		}

		#[test]
		fn unknown_content() {
			let err = decode_xml::<Tables>(
				r#"<TABLES><TABLE NAME="abcd" TIME="t" ROWS="3"/></TABLES>"#,
			)
			.unwrap_err();
			assert_eq!(err.kind(), ErrorKind::UnexpectedContent);
		}
	}
}
