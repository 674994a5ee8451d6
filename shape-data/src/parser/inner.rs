use crate::{
	errors,
	parser::{
		Element,
		ElementParser,
		ElementState,
		Inner,
	},
	Result,
};
use std::borrow::Cow;

/// Result of `InnerState` parse methods to signal whether they successfully parsed the input or
/// another `InnerState` needs to take a shot.
#[derive(Debug)]
pub enum InnerParseResult<Input> {
	/// Parsed successfully
	Success,
	/// Need something else to take the input
	Next(Input),
}

/// State to parse multiple elements (on the same level)
pub trait InnerState: Default {
	/// Once fully parsed this is the resulting output type.
	type Output: Sized;

	/// Try parsing an element with the given tag
	///
	/// Should not fail if it doesn't recognize the tag; instead it needs to return the parser.
	fn parse_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<InnerParseResult<P>> {
		let _ = tag;
		Ok(InnerParseResult::Next(parser))
	}

	/// Try parsing inner text
	///
	/// Should not fail if it doesn't take text (but may fail if it does but can't parse it).
	fn parse_inner_text<'t>(&mut self, text: Cow<'t, str>) -> Result<InnerParseResult<Cow<'t, str>>> {
		Ok(InnerParseResult::Next(text))
	}

	/// Whether nothing was collected so far
	fn parse_inner_vacant(&self) -> bool {
		false
	}

	/// Finish parsing.
	fn parse_inner_finish(self) -> Result<Self::Output>;
}

/// `InnerState` to parse a single required element
pub struct ParseElementOnce<E: ElementState> {
	element: Option<E::Output>,
}

impl<E: ElementState> Default for ParseElementOnce<E> {
	fn default() -> Self {
		Self { element: None }
	}
}

impl<E: ElementState> InnerState for ParseElementOnce<E> {
	type Output = E::Output;

	fn parse_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<InnerParseResult<P>> {
		if let Some(mut state) = E::parse_element_start(tag) {
			if self.element.is_some() {
				return Err(errors::duplicate_element(tag));
			}
			parser.parse_element_state(&mut state)?;
			self.element = Some(state.parse_element_finish()?);
			return Ok(InnerParseResult::Success);
		}
		Ok(InnerParseResult::Next(parser))
	}

	fn parse_inner_vacant(&self) -> bool {
		self.element.is_none()
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		if let Some(o) = self.element {
			Ok(o)
		} else {
			E::parse_error_not_found()
		}
	}
}

impl<E: Element> Inner for E {
	type ParseState = ParseElementOnce<E::ParseState>;
}

/// `InnerState` to parse a single optional element
///
/// An element without any data (`<tag/>`, `<tag></tag>`, only whitespace or ignored content)
/// results in `None`, same as a missing element.
pub struct ParseElementOptional<E: ElementState> {
	seen: bool,
	element: Option<E::Output>,
}

impl<E: ElementState> Default for ParseElementOptional<E> {
	fn default() -> Self {
		Self {
			seen: false,
			element: None,
		}
	}
}

impl<E: ElementState> InnerState for ParseElementOptional<E> {
	type Output = Option<E::Output>;

	fn parse_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<InnerParseResult<P>> {
		if let Some(mut state) = E::parse_element_start(tag) {
			if self.seen {
				return Err(errors::duplicate_element(tag));
			}
			self.seen = true;
			parser.parse_element_state(&mut state)?;
			if state.parse_element_vacant() {
				tracing::trace!(tag, "empty optional element treated as absent");
			} else {
				self.element = Some(state.parse_element_finish()?);
			}
			return Ok(InnerParseResult::Success);
		}
		Ok(InnerParseResult::Next(parser))
	}

	fn parse_inner_vacant(&self) -> bool {
		self.element.is_none()
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		Ok(self.element)
	}
}

impl<E: Element> Inner for Option<E> {
	type ParseState = ParseElementOptional<E::ParseState>;
}

/// `InnerState` to parse multiple occurences of a single element
///
/// Vacant occurences are skipped like in `ParseElementOptional`.
pub struct ParseElementList<E: ElementState> {
	elements: Vec<E::Output>,
}

impl<E: ElementState> Default for ParseElementList<E> {
	fn default() -> Self {
		Self {
			elements: Vec::new(),
		}
	}
}

impl<E: ElementState> InnerState for ParseElementList<E> {
	type Output = Vec<E::Output>;

	fn parse_inner_node<P: ElementParser>(&mut self, tag: &str, parser: P) -> Result<InnerParseResult<P>> {
		if let Some(mut state) = E::parse_element_start(tag) {
			parser.parse_element_state(&mut state)?;
			if !state.parse_element_vacant() {
				self.elements.push(state.parse_element_finish()?);
			}
			Ok(InnerParseResult::Success)
		} else {
			Ok(InnerParseResult::Next(parser))
		}
	}

	fn parse_inner_vacant(&self) -> bool {
		self.elements.is_empty()
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		Ok(self.elements)
	}
}

impl<E: Element> Inner for Vec<E> {
	type ParseState = ParseElementList<E::ParseState>;
}
