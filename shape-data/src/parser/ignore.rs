use crate::{
	parser::{
		ElementParser,
		ElementState,
	},
	Result,
};
use std::borrow::Cow;

/// `ElementState` skipping an element with all its content (attributes, sub elements and text)
///
/// Used for unknown elements of shapes marked `#[shape(ignore_unknown)]`.  A skipped element is
/// always vacant: nothing of it ends up in any record.
pub struct IgnoreElement;

impl ElementState for IgnoreElement {
	type Output = ();

	fn parse_element_start(_tag: &str) -> Option<Self> {
		Some(Self)
	}

	fn parse_element_attribute(&mut self, _key: &str, _value: Cow<'_, str>) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_text(&mut self, _text: Cow<'_, str>) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<()> {
		tracing::trace!(tag, "skipping unknown element");
		// nested elements are skipped with the same state
		parser.parse_element_state(self)
	}

	fn parse_element_vacant(&self) -> bool {
		true
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		Ok(())
	}
}
