//! Decode XML documents from memory

use crate::{
	parser::Element,
	quick_xml::Parser,
	shape::Shape,
	Result,
};

/// Decode a full XML document into the root element `E`
///
/// The document must contain exactly one root element with `E`'s tag.
pub fn decode_xml<E: Element + Shape>(text: &str) -> Result<E> {
	tracing::debug!(shape = E::NAME, len = text.len(), "decoding XML document");
	let mut reader = quick_xml::Reader::from_str(text);
	let mut parser = Parser::new(&mut reader);
	let result = parser.parse_document::<E>();
	if let Err(e) = &result {
		tracing::debug!(shape = E::NAME, error = %e, "XML decode failed");
	}
	result
}
