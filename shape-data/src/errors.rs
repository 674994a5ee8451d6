#![allow(missing_docs)] // names should be good enough
//! Decode errors and helper functions to generate common errors
//!
//! Every failure is a `DecodeError`; `DecodeError::kind` sorts it into one of the few categories
//! callers usually care about.

use crate::Error;
use std::fmt;

/// Coarse classification of a `DecodeError`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
	/// Input text isn't well-formed JSON or XML
	Syntax,
	/// A non-optional attribute, element or key is absent
	MissingRequiredField,
	/// A present value couldn't be converted to the declared type
	TypeMismatch,
	/// Input contains data the target shape doesn't declare
	UnexpectedContent,
}

/// Error returned by all decode operations
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("syntax error: {message}")]
	Syntax { message: String },
	#[error("unexpected eof: {context}")]
	UnexpectedEof { context: &'static str },
	#[error("Unexpected end tag")]
	UnexpectedEnd,
	#[error("Unexpected decl <?xml ... ?>")]
	UnexpectedDecl,
	#[error("Unexpected <!DOCTYPE ...>")]
	UnexpectedDocType,
	#[error("Unexpected processing instructions <?...?>")]
	UnexpectedPI,
	#[error("Unexpected (non-whitespace) text/CDATA")]
	UnexpectedText,
	#[error("Unexpected element: {tag}")]
	UnexpectedElement { tag: String },
	#[error("Element {tag:?} must only appear once")]
	DuplicateElement { tag: String },
	#[error("Unexpected attribute: {key}")]
	UnexpectedAttribute { key: String },
	#[error("Unexpected key: {key}")]
	UnexpectedKey { key: String },
	#[error("Inner element {tag:?} wasn't fully parsed")]
	InnerElementNotParsed { tag: String },
	#[error("Missing element {tag:?}")]
	MissingElement { tag: String },
	#[error("Missing element")]
	MissingUnknownElement,
	#[error("Missing attribute {key:?}")]
	MissingAttribute { key: String },
	#[error("Missing key {key:?}")]
	MissingKey { key: String },
	#[error("Invalid value for {field:?}: {message}")]
	TypeMismatch { field: String, message: String },
}

impl DecodeError {
	/// Category of this error
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Syntax { .. }
			| Self::UnexpectedEof { .. }
			| Self::UnexpectedEnd
			| Self::UnexpectedDecl
			| Self::UnexpectedDocType => ErrorKind::Syntax,
			Self::MissingElement { .. }
			| Self::MissingUnknownElement
			| Self::MissingAttribute { .. }
			| Self::MissingKey { .. } => ErrorKind::MissingRequiredField,
			Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
			Self::UnexpectedPI
			| Self::UnexpectedText
			| Self::UnexpectedElement { .. }
			| Self::DuplicateElement { .. }
			| Self::UnexpectedAttribute { .. }
			| Self::UnexpectedKey { .. }
			| Self::InnerElementNotParsed { .. } => ErrorKind::UnexpectedContent,
		}
	}
}

pub fn syntax(message: impl fmt::Display) -> Error {
	DecodeError::Syntax { message: message.to_string() }
}

pub fn unexpected_eof(context: &'static str) -> Error {
	DecodeError::UnexpectedEof { context }
}

pub fn unexpected_end() -> Error {
	DecodeError::UnexpectedEnd
}

pub fn unexpected_decl() -> Error {
	DecodeError::UnexpectedDecl
}

pub fn unexpected_doctype() -> Error {
	DecodeError::UnexpectedDocType
}

pub fn unexpected_pi() -> Error {
	DecodeError::UnexpectedPI
}

pub fn unexpected_text() -> Error {
	DecodeError::UnexpectedText
}

pub fn unexpected_element(tag: &str) -> Error {
	DecodeError::UnexpectedElement { tag: tag.into() }
}

pub fn duplicate_element(tag: &str) -> Error {
	DecodeError::DuplicateElement { tag: tag.into() }
}

pub fn unexpected_attribute(key: &str) -> Error {
	DecodeError::UnexpectedAttribute { key: key.into() }
}

pub fn unexpected_key(key: &str) -> Error {
	DecodeError::UnexpectedKey { key: key.into() }
}

pub fn inner_element_not_parsed(tag: &str) -> Error {
	DecodeError::InnerElementNotParsed { tag: tag.into() }
}

pub fn missing_element(tag: &str) -> Error {
	DecodeError::MissingElement { tag: tag.into() }
}

pub fn missing_unknown_element() -> Error {
	DecodeError::MissingUnknownElement
}

pub fn missing_attribute(key: &str) -> Error {
	DecodeError::MissingAttribute { key: key.into() }
}

pub fn missing_key(key: &str) -> Error {
	DecodeError::MissingKey { key: key.into() }
}

pub fn type_mismatch(field: &str, message: impl fmt::Display) -> Error {
	DecodeError::TypeMismatch {
		field: field.into(),
		message: message.to_string(),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn kinds() {
		assert_eq!(syntax("bad").kind(), ErrorKind::Syntax);
		assert_eq!(unexpected_eof("unclosed element").kind(), ErrorKind::Syntax);
		assert_eq!(missing_attribute("NAME").kind(), ErrorKind::MissingRequiredField);
		assert_eq!(missing_key("name").kind(), ErrorKind::MissingRequiredField);
		assert_eq!(type_mismatch("other", "invalid digit").kind(), ErrorKind::TypeMismatch);
		assert_eq!(duplicate_element("TABLE").kind(), ErrorKind::UnexpectedContent);
		assert_eq!(unexpected_key("job").kind(), ErrorKind::UnexpectedContent);
	}

	#[test]
	fn messages() {
		assert_eq!(missing_attribute("TIME").to_string(), r#"Missing attribute "TIME""#);
		assert_eq!(
			type_mismatch("other", "invalid digit found in string").to_string(),
			r#"Invalid value for "other": invalid digit found in string"#,
		);
	}
}
