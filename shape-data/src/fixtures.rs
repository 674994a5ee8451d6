//! Sample documents
//!
//! Used by the `optional_fields` example and the tests.

/// `<SPECIAL>` present but empty: decodes to `special: None`
pub const TABLES_EMPTY_SPECIAL: &str = r#"<TABLES>
    <TABLE NAME="abcd" TIME="2013.05.27 00:00:00" >
        <SPECIAL></SPECIAL> 
    </TABLE>
</TABLES>"#;

/// `<SPECIAL>` with a `<WEEK>` but no `<DAY>`
pub const TABLES_WEEK_SPECIAL: &str = r#"<TABLES>
    <TABLE NAME="abcd" TIME="2013.05.27 00:00:00" >
        <SPECIAL>
            <WEEK NAME="abcde" PARAM="128" />
        </SPECIAL> 
    </TABLE>
</TABLES>"#;

/// Person without the optional `occupation`
pub const PERSON_NAME_ONLY: &str = r#"{
    "name": "Pavneet"
}"#;
