//! Traits and helper structs to parse XML
//!
//! To implement parsing for your data types (mapping to XML elements) you need intermediate
//! "state" types (implementing `FixedElementState` or `ElementState`), which work like "builders":
//! they will receive the various parts incrementally until they can "build" the result.
//!
//! To define a default state for your type (so it can be easily found in certain places) you need
//! to implement `Element`; `#[derive(Element)]` generates both.
//!
//! Child elements are collected by `InnerState` types; the default state is defined by
//! implementing `Inner`.  If `E` implements `Element`, `E` (exactly once), `Option<E>` (at most
//! once, an empty element counts as missing), and `Vec<E>` automatically implement `Inner`.
//!
//! To implement parser adaptors for an XML library you need to implement `ElementParser`.

mod core;
mod default;
mod fixed_element;
mod ignore;
mod inner;
mod value;

pub use self::{
	core::{
		ElementParser,
		ElementState,
	},
	default::{
		Element,
		Inner,
	},
	fixed_element::FixedElementState,
	ignore::IgnoreElement,
	inner::{
		InnerParseResult,
		InnerState,
		ParseElementList,
		ParseElementOnce,
		ParseElementOptional,
	},
	value::{
		Value,
		ValueDefault,
		ValueString,
	},
};
