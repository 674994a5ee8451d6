#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/shape-data/0.1.0")]
//! This library decodes JSON and XML documents into statically declared record types ("shapes")
//! with an explicit policy for optional data: a field typed `Option<T>` decodes to `None` when its
//! source is missing, and also when an XML element for it is present but empty
//! (`<SPECIAL></SPECIAL>`). Non-optional fields fail the decode when missing.
//!
//! Every shape declares a field table (see [`Shape`]) mapping record fields to XML attributes, XML
//! child elements or JSON keys; the table and the XML parse states are usually derived:
//!
//! - `#[derive(Shape)]`: only the field table (enough for JSON, together with
//!   `serde::Deserialize`)
//! - `#[derive(Element)]`: field table and XML parse state
//!
//! XML parsing works similar to a builder: a parser adaptor (for now only
//! [`quick-xml`](https://crates.io/crates/quick-xml), behind the equally named feature) feeds
//! attributes and child nodes into "state" types (see [`parser`]), which build the result once the
//! element is closed.
//!
//! JSON decoding uses `serde_json`; object keys are matched through the field table (required,
//! optional and unknown keys), and `serde` converts the values, so a missing key and a badly typed
//! value are reported differently.

extern crate self as shape_data;

pub mod errors;
pub mod fixtures;
pub mod json;
pub mod parser;
pub mod shape;

#[cfg(feature = "derive")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
pub mod shapes;

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod xml;

#[cfg(all(test, feature = "derive"))]
mod test_struct;

/// Error type of all decode operations
pub type Error = errors::DecodeError;
/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;

pub use self::{
	errors::{
		DecodeError,
		ErrorKind,
	},
	json::decode_json,
	parser::Element,
	shape::Shape,
};

#[cfg(feature = "quick-xml")]
pub use self::xml::decode_xml;

#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
#[cfg(feature = "derive")]
pub use shape_data_derive::{
	Element,
	Shape,
};
