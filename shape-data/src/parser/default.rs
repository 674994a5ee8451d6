use crate::parser::{
	ElementState,
	InnerState,
};

/// Record that can be decoded from an XML element
///
/// Links the state type building the record; `#[derive(Element)]` implements this together with
/// `Shape`, so the field table and the parse state come from the same declarations.
pub trait Element: Sized {
	/// Parse state to use for this element
	type ParseState: ElementState<Output = Self>;
}

/// Child elements of a record field (`E`, `Option<E>` or `Vec<E>` for some `E: Element`)
///
/// The linked state decides how often the child may appear and whether an empty one counts.
pub trait Inner: Sized {
	/// Parse state to use for this inner data
	type ParseState: InnerState<Output = Self>;
}
