//! Parser adaptor using `quick-xml`

mod parser;

/// Re-export `quick-xml` crate
pub use quick_xml;

pub use self::parser::Parser;

impl From<quick_xml::Error> for crate::DecodeError {
	fn from(e: quick_xml::Error) -> Self {
		crate::errors::syntax(e)
	}
}
