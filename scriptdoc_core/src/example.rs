//! Synthesized call examples.
//!
//! Nothing here executes code. Every example is composed from the function's
//! qualified name, its schema and its configured example values.

use serde_json::Value;

use crate::FunctionDef;
use crate::Signature;
use crate::naming::derive_try_name;

/// Argument list shown when the schema does not declare parameters.
pub const UNKNOWN_ARGUMENTS: &str = "...";

/// The one schema-less function with a hand-written example.
const PRINT_FUNCTION: &str = "print";
const PRINT_EXAMPLE: &str = r#"print("Hello, World!")"#;

/// Argument values for each declared parameter, in schema order. Each
/// parameter uses its example value when one is configured and its own name
/// otherwise.
///
/// Returns `None` when the schema declares no parameter list.
pub fn argument_values(function: &FunctionDef) -> Option<Vec<String>> {
	let signature = Signature::of(function.schema.as_ref());
	let params = signature.params?;

	let values = params
		.iter()
		.map(|param| {
			function
				.example_value(param.name())
				.map_or_else(|| param.name().to_string(), display_literal)
		})
		.collect();

	Some(values)
}

/// Strings are already source text and are shown verbatim. Other values use
/// their JSON form.
pub fn display_literal(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// The call shown in the "Usage" section.
///
/// Unknown parameter lists render as `...`. Module functions bind the first
/// return value when there are arguments; global functions are shown as a
/// bare call.
pub fn usage_example(function: &FunctionDef) -> String {
	let signature = Signature::of(function.schema.as_ref());
	let args = argument_values(function).unwrap_or_else(|| vec![UNKNOWN_ARGUMENTS.to_string()]);
	let name = &function.qualified_name;

	if args.is_empty() {
		return format!("{name}()");
	}

	let joined = args.join(", ");
	if name.contains('.') {
		format!("{} = {name}({joined})", signature.return_name())
	} else {
		format!("{name}({joined})")
	}
}

/// The direct call shown under "Basic usage".
pub fn basic_example(function: &FunctionDef) -> String {
	let signature = Signature::of(function.schema.as_ref());
	let return_name = signature.return_name();
	let name = &function.qualified_name;

	match argument_values(function) {
		Some(args) if args.is_empty() => format!("{name}()"),
		Some(args) => format!("{return_name} = {name}({})", args.join(", ")),
		None if name == PRINT_FUNCTION => PRINT_EXAMPLE.to_string(),
		None => format!("-- Example usage of {name}\n{return_name} = {name}()"),
	}
}

/// The call of the non-throwing variant, reusing the direct call's
/// arguments. `None` when the function has no try variant.
pub fn try_example(function: &FunctionDef) -> Option<String> {
	if !function.has_try {
		return None;
	}

	let signature = Signature::of(function.schema.as_ref());
	let try_name = derive_try_name(&function.qualified_name);
	let args = argument_values(function).unwrap_or_default().join(", ");

	Some(format!(
		"{}_or_nil, error = {try_name}({args})",
		signature.return_name()
	))
}

/// Contents of the "Examples" code block: the basic call and, when the
/// function has a try variant, the safe call followed by the truthy check.
pub fn examples(function: &FunctionDef) -> String {
	let mut content = format!("-- Basic usage\n{}", basic_example(function));

	if let Some(try_call) = try_example(function) {
		let return_name = Signature::of(function.schema.as_ref()).return_name();
		content.push_str(&format!(
			"\n\n-- Safe alternative (returns {return_name}_or_nil, error):\n{try_call}"
		));
		content.push_str(&format!(
			"\nif {return_name}_or_nil then\n  -- Use {return_name}_or_nil\nelse\n  -- Handle the \
			 error\nend"
		));
	}

	content
}
