use crate::{
	errors,
	parser::{
		Element,
		ElementParser,
		ElementState,
	},
	Result,
};
use quick_xml::events::Event;
use std::io::BufRead;

/// Parser adaptor for `quick_xml::Reader`
pub struct Parser<'r, B: BufRead> {
	inner: &'r mut quick_xml::Reader<B>,
	buf: Vec<u8>,
	pending: Option<Event<'static>>,
}

impl<'r, B: BufRead> Parser<'r, B> {
	/// Create a new adaptor from a reader
	pub fn new(inner: &'r mut quick_xml::Reader<B>) -> Self {
		Self {
			inner,
			buf: Vec::new(),
			pending: None,
		}
	}

	fn peek(&mut self) -> Result<Event<'static>> {
		if let Some(event) = &self.pending {
			return Ok(event.clone());
		}
		self.buf.clear();
		let event = self.inner.read_event(&mut self.buf)?.into_owned();
		self.pending = Some(event.clone());
		Ok(event)
	}

	fn clear(&mut self) {
		self.pending = None;
	}

	/// Parse a single (root) element from reading a document
	///
	/// Uses the default state type for the returned element.
	pub fn parse_document<E: Element>(&mut self) -> Result<E> {
		self.parse_document_for_state::<E::ParseState>()
	}

	/// Parse a single (root) element from reading a document
	///
	/// Uses the given state type.
	pub fn parse_document_for_state<S: ElementState>(&mut self) -> Result<S::Output> {
		let mut output = None;
		loop {
			match self.peek()? {
				Event::Eof => {
					if let Some(o) = output {
						return Ok(o);
					}
					return Err(errors::unexpected_eof("empty document"));
				},
				Event::End(_) => {
					return Err(errors::unexpected_end());
				},
				Event::Start(s) | Event::Empty(s) => {
					let tag = self.inner.decode(s.name());
					if output.is_some() {
						// only a single root element
						return Err(errors::unexpected_element(&tag));
					}
					tracing::trace!(tag = %tag, "root element");
					let mut finished_inner = false;
					let p = PRef { parser: self, finished_element: &mut finished_inner };
					output = Some(parse_root::<S, _>(p, &tag)?);
					if !finished_inner {
						return Err(errors::inner_element_not_parsed(&tag));
					}
					continue;
				},
				// not supported
				Event::PI(_) => return Err(errors::unexpected_pi()),
				// ignore those at document level before the root element
				Event::Decl(_) => {
					if output.is_some() {
						return Err(errors::unexpected_decl());
					}
				},
				Event::DocType(_) => {
					if output.is_some() {
						return Err(errors::unexpected_doctype());
					}
				},
				// ignore comments
				Event::Comment(_) => (),
				// text+cdata
				Event::Text(t) | Event::CData(t) => {
					let t = t.unescape_and_decode(self.inner)?;
					if !t.trim().is_empty() {
						return Err(errors::unexpected_text());
					}
				},
			}
			// Start+Empty continue directly; everything else needs to be cleared so we don't read it again
			self.clear();
		}
	}
}

// A root element must match the state's tag; a vacant root is still finished so it reports the
// first missing attribute or child.
fn parse_root<S: ElementState, P: ElementParser>(parser: P, tag: &str) -> Result<S::Output> {
	let mut state = S::parse_element_start(tag).ok_or_else(|| errors::unexpected_element(tag))?;
	parser.parse_element_state(&mut state)?;
	state.parse_element_finish()
}

struct PRef<'x, 'r, B: BufRead> {
	parser: &'x mut Parser<'r, B>,
	finished_element: &'x mut bool,
}

impl<'x, 'r, B: BufRead> ElementParser for PRef<'x, 'r, B> {
	fn parse_element_state<E: ElementState>(self, state: &mut E) -> Result<()> {
		let (start, closed) = match self.parser.peek()? {
			Event::Start(s) => (s, false),
			Event::Empty(s) => (s, true),
			other => return Err(errors::syntax(format!("expected element start, found {:?}", other))),
		};

		for attr in start.attributes() {
			let attr = attr?;
			let attr_key = self.parser.inner.decode(attr.key);
			let attr_value = attr.unescape_and_decode_value(self.parser.inner)?;
			state.parse_element_attribute(&attr_key, attr_value.into())?;
		}

		self.parser.clear(); // consume start tag

		// read inner (unless there is no inner)
		if closed {
			*self.finished_element = true;
			return Ok(());
		}

		loop {
			match self.parser.peek()? {
				Event::Eof => return Err(errors::unexpected_eof("unclosed element")),
				Event::End(_) => {
					self.parser.clear();
					*self.finished_element = true;
					return Ok(());
				},
				Event::Start(s) | Event::Empty(s) => {
					let tag = self.parser.inner.decode(s.name());
					tracing::trace!(tag = %tag, "child element");
					let mut finished_inner = false;
					let p = PRef { parser: self.parser, finished_element: &mut finished_inner };
					state.parse_element_inner_node(&tag, p)?;
					if !finished_inner {
						return Err(errors::inner_element_not_parsed(&tag));
					}
					continue;
				},
				// not supported
				Event::PI(_) => return Err(errors::unexpected_pi()),
				// within elements those shouldn't be there
				Event::Decl(_) => return Err(errors::unexpected_decl()),
				Event::DocType(_) => return Err(errors::unexpected_doctype()),
				// ignore comments
				Event::Comment(_) => (),
				// text+cdata
				Event::Text(t) | Event::CData(t) => {
					let t = t.unescape_and_decode(self.parser.inner)?;
					state.parse_element_inner_text(t.into())?;
				},
			}
			// Start+Empty continue directly; everything else needs to be cleared so we don't read it again
			self.parser.clear();
		}
	}
}
