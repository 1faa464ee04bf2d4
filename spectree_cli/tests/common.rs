use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn spectree_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("spectree"));
	cmd.env("NO_COLOR", "1")
		.env_remove("SPECTREE_OUTPUT")
		.env_remove("SPECTREE_ROOT_DIR")
		.env_remove("SPECTREE_STRICT")
		.env_remove("RUST_LOG");
	cmd
}

pub const SIMPLE_DOCUMENT: &str = "# Simple Document\n\nThis document has no references.";

/// Write a `main.md` that references a header, content and footer file from
/// an `includes/` directory.
pub fn write_main_fixture(dir: &std::path::Path) -> std::io::Result<()> {
	std::fs::create_dir_all(dir.join("includes"))?;
	std::fs::write(
		dir.join("main.md"),
		"# Main Document\n\n@./includes/header.md\n\n@./includes/content.md\n\n\
		 @./includes/footer.md\n",
	)?;
	std::fs::write(
		dir.join("includes/header.md"),
		"## Header\n\nThis is the header section.\n",
	)?;
	std::fs::write(
		dir.join("includes/content.md"),
		"## Content\n\nThis is the main content.\n",
	)?;
	std::fs::write(
		dir.join("includes/footer.md"),
		"## Footer\n\nThis is the footer section.\n",
	)?;

	Ok(())
}
