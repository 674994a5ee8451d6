// use `cargo run -p shape-data --example optional_fields` to run from git repository base directory
// (`RUST_LOG=shape_data=trace` shows what the decoders do)

use shape_data::{
	decode_json,
	decode_xml,
	fixtures,
	shapes::{
		Person,
		Tables,
	},
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn parse_xml() -> shape_data::Result<()> {
	// empty <SPECIAL> tag
	println!("{:?}", decode_xml::<Tables>(fixtures::TABLES_EMPTY_SPECIAL)?);
	// <SPECIAL> with WEEK but no DAY
	println!("{:?}", decode_xml::<Tables>(fixtures::TABLES_WEEK_SPECIAL)?);
	Ok(())
}

fn parse_json() -> shape_data::Result<()> {
	// missing "occupation"
	println!("{:?}", decode_json::<Person>(fixtures::PERSON_NAME_ONLY)?);
	Ok(())
}

fn main() {
	init_tracing();

	let mut failed = false;
	if let Err(e) = parse_xml() {
		eprintln!("XML decoding failed: {}", e);
		failed = true;
	}
	if let Err(e) = parse_json() {
		eprintln!("JSON decoding failed: {}", e);
		failed = true;
	}
	if failed {
		std::process::exit(1);
	}
}
