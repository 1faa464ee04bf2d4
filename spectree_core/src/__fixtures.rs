use std::path::Path;

use crate::MemoryLoader;

pub const SIMPLE_DOCUMENT: &str = "# Simple Document\n\nThis document has no references.";

/// A `main.md` which pulls in a header, a content section and a footer from
/// an `includes/` directory.
pub fn main_document_loader(root: &Path) -> MemoryLoader {
	MemoryLoader::new()
		.with_file(
			root.join("main.md"),
			"# Main Document\n\n@./includes/header.md\n\n@./includes/content.md\n\n\
			 @./includes/footer.md\n",
		)
		.with_file(
			root.join("includes/header.md"),
			"## Header\n\nThis is the header section.\n",
		)
		.with_file(
			root.join("includes/content.md"),
			"## Content\n\n@./nested/detail.md\n",
		)
		.with_file(
			root.join("includes/nested/detail.md"),
			"Nested detail from a second level.\n",
		)
		.with_file(
			root.join("includes/footer.md"),
			"## Footer\n\nThis is the footer section.",
		)
}

/// `alpha.md` and `beta.md` reference each other.
pub fn cyclic_loader(root: &Path) -> MemoryLoader {
	MemoryLoader::new()
		.with_file(root.join("alpha.md"), "# Alpha\n@beta.md\n")
		.with_file(root.join("beta.md"), "# Beta\n@alpha.md\n")
}

/// `main.md` references two files which both reference `shared.md`.
pub fn diamond_loader(root: &Path) -> MemoryLoader {
	MemoryLoader::new()
		.with_file(root.join("main.md"), "@left.md\n@right.md")
		.with_file(root.join("left.md"), "left\n@shared.md\n")
		.with_file(root.join("right.md"), "right\n@shared.md\n")
		.with_file(root.join("shared.md"), "shared\n")
}
