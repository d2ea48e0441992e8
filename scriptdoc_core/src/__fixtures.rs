use std::path::Path;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use super::*;

pub(crate) const NAMESPACE: &str = "sandman";

pub(crate) fn source() -> &'static Path {
	Path::new("api_definitions.json")
}

/// Definitions covering globals, known and unknown modules, try variants,
/// example values and metadata entries.
pub(crate) fn sample_definitions() -> Value {
	json!({
		"print": {
			"type": "function",
			"description": "Prints a line"
		},
		"sandman": {
			"type": "table",
			"json": {
				"type": "table",
				"decode": {
					"type": "function",
					"description": "Decode a JSON string",
					"has_try": true,
					"schema": {
						"ret_vals": [{ "name": "data", "type": "any" }]
					}
				},
				"encode": {
					"type": "function",
					"description": "Encode a value as JSON",
					"schema": {
						"params": [{ "name": "value", "type": "any" }],
						"ret_vals": [{ "name": "json", "type": "string" }]
					},
					"example_values": { "value": "{name = \"sandman\"}" }
				}
			},
			"http": {
				"get": {
					"type": "function",
					"description": "Send a GET request",
					"has_try": true,
					"schema": {
						"params": [
							{ "name": "url", "type": "string" },
							{ "name": "headers", "type": "table" }
						],
						"ret_vals": [{ "name": "response", "type": "table" }]
					},
					"example_values": { "url": "\"https://example.com\"" }
				}
			},
			"metrics": {
				"count": {
					"type": "function",
					"description": "Count things",
					"schema": { "params": [], "ret_vals": [] }
				}
			}
		}
	})
}

pub(crate) fn sample_tree() -> DefinitionTree {
	DefinitionTree::from_value(&sample_definitions(), NAMESPACE, source())
		.unwrap_or_else(|e| panic!("sample definitions should load: {e}"))
}

/// Load a single global function from its raw definition.
pub(crate) fn global_function(name: &str, definition: Value) -> FunctionDef {
	let mut root = Map::new();
	root.insert(name.to_string(), definition);

	let tree = DefinitionTree::from_value(&Value::Object(root), NAMESPACE, source())
		.unwrap_or_else(|e| panic!("fixture should load: {e}"));
	tree.globals
		.into_iter()
		.next()
		.unwrap_or_else(|| panic!("`{name}` should be a function"))
}

/// Load a single function of `sandman.<module>` from its raw definition.
pub(crate) fn module_function(module: &str, name: &str, definition: Value) -> FunctionDef {
	let mut functions = Map::new();
	functions.insert(name.to_string(), definition);
	let mut modules = Map::new();
	modules.insert(module.to_string(), Value::Object(functions));
	let mut root = Map::new();
	root.insert(NAMESPACE.to_string(), Value::Object(modules));

	let tree = DefinitionTree::from_value(&Value::Object(root), NAMESPACE, source())
		.unwrap_or_else(|e| panic!("fixture should load: {e}"));
	tree.modules
		.into_iter()
		.flat_map(|module| module.functions)
		.next()
		.unwrap_or_else(|| panic!("`{module}.{name}` should be a function"))
}

pub(crate) fn page<'a>(pages: &'a [GeneratedPage], file_name: &str) -> &'a GeneratedPage {
	pages
		.iter()
		.find(|page| page.file_name() == file_name)
		.unwrap_or_else(|| panic!("missing page `{file_name}`"))
}
