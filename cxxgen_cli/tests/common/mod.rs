use std::path::Path;

use assert_cmd::Command;

pub fn cxxgen_cmd() -> Command {
	Command::cargo_bin("cxxgen").expect("cxxgen binary builds")
}

/// Write a minimal project: a config enabling the given tools and one header
/// under `src/` with the given content.
pub fn write_project(root: &Path, tools: &str, header: &str) {
	let config = format!(
		"product = \"foo\"\nversion = \"1.2.3\"\nsource = \"src\"\n\n[tools]\n{tools}"
	);
	std::fs::write(root.join("cxxgen.toml"), config).expect("write config");
	std::fs::create_dir_all(root.join("src")).expect("create src");
	std::fs::write(root.join("src/api.h"), header).expect("write header");
}

pub fn read_header(root: &Path) -> String {
	std::fs::read_to_string(root.join("src/api.h")).expect("read header")
}
