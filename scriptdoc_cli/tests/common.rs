use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn scriptdoc_cmd(root: &Path) -> Command {
	let mut cmd = Command::new(get_cargo_bin("scriptdoc"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd.current_dir(root);
	cmd
}

/// Write `definitions` to the default input location under `root`.
pub fn write_definitions(root: &Path, definitions: &str) -> std::io::Result<()> {
	let dir = root.join("sandman").join("priv");
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("api_definitions.json"), definitions)
}

pub const DEFINITIONS: &str = r#"{
  "print": { "type": "function", "description": "Prints a line" },
  "sandman": {
    "type": "table",
    "json": {
      "type": "table",
      "decode": {
        "type": "function",
        "description": "Decode a JSON string",
        "has_try": true,
        "schema": { "ret_vals": [{ "name": "data", "type": "any" }] }
      }
    },
    "metrics": {
      "count": {
        "type": "function",
        "description": "Count things",
        "schema": { "params": [{ "name": "key", "type": "string" }], "ret_vals": [{ "name": "total", "type": "number" }] },
        "example_values": { "key": "\"requests\"" }
      }
    }
  }
}"#;
