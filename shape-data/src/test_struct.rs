use std::borrow::Cow;

#[derive(crate::Element)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[shape(tag = "data")]
pub struct Data {
	#[shape(attr)]
	pub key: Cow<'static, str>,
	#[shape(attr)]
	pub other: u32,
	#[shape(attr = "note")]
	pub note: Option<String>,
	pub foo: Option<Foo>,
	pub tags: Vec<Tag>,
}

impl Data {
	pub const TEST_PARSE_DOCUMENT_1: &'static str = r#"<?xml version="1.1" encoding="utf-8"?>
<data key="abc" other="42"><foo flag="true" color="red">
		<unknown><nested/></unknown>
	</foo></data>"#;

	pub fn test_result_1() -> Self {
		Self {
			key: Cow::Borrowed("abc"),
			other: 42,
			note: None,
			foo: Some(Foo { flag: Some(true) }),
			tags: Vec::new(),
		}
	}
}

/// Lenient element: unknown content is skipped
#[derive(crate::Element)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[shape(tag = "foo", ignore_unknown)]
pub struct Foo {
	#[shape(attr)]
	pub flag: Option<bool>,
}

#[derive(crate::Element)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[shape(tag = "tag")]
pub struct Tag {
	#[shape(attr)]
	pub name: Option<String>,
}
