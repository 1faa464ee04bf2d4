use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use spectree_cli::SpecTreeCli;
use spectree_core::AnyEmptyResult;

#[test]
fn cli_definition_is_valid() {
	SpecTreeCli::command().debug_assert();
}

#[test]
fn parses_file_and_output() -> AnyEmptyResult {
	let args = SpecTreeCli::try_parse_from(["spectree", "input.md", "-o", "output.md"])?;

	assert_eq!(args.file, Some(PathBuf::from("input.md")));
	assert_eq!(args.output, Some(PathBuf::from("output.md")));
	assert_eq!(args.root_dir, None);
	assert_eq!(args.strict, None);
	assert!(!args.verbose);

	Ok(())
}

#[test]
fn parses_root_dir_and_strict() -> AnyEmptyResult {
	let args = SpecTreeCli::try_parse_from([
		"spectree",
		"--root-dir",
		"/project",
		"--strict",
		"-v",
		"docs/main.md",
	])?;

	assert_eq!(args.file, Some(PathBuf::from("docs/main.md")));
	assert_eq!(args.root_dir, Some(PathBuf::from("/project")));
	assert_eq!(args.strict, Some(true));
	assert!(args.verbose);

	Ok(())
}

#[test]
fn file_is_optional_at_parse_time() -> AnyEmptyResult {
	let args = SpecTreeCli::try_parse_from(["spectree", "--no-color"])?;
	assert_eq!(args.file, None);
	assert!(args.no_color);

	Ok(())
}

#[test]
fn rejects_extra_positionals() {
	let result = SpecTreeCli::try_parse_from(["spectree", "a.md", "b.md"]);
	assert!(result.is_err());
}

#[test]
fn strict_accepts_explicit_value() -> AnyEmptyResult {
	let args = SpecTreeCli::try_parse_from(["spectree", "--strict=false", "main.md"])?;
	assert_eq!(args.strict, Some(false));
	assert_eq!(args.file, Some(PathBuf::from("main.md")));

	let args = SpecTreeCli::try_parse_from(["spectree", "--strict", "main.md"])?;
	assert_eq!(args.strict, Some(true));
	assert_eq!(args.file, Some(PathBuf::from("main.md")));

	Ok(())
}
