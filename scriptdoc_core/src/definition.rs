use std::path::Path;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::DeserializeOwned;
use serde::de::Error as _;
use serde_json::Map;
use serde_json::Value;

use crate::ScriptdocError;
use crate::ScriptdocResult;
use crate::naming::qualify;

/// Key carrying the type marker on definition entries.
pub const TYPE_KEY: &str = "type";

/// Type marker value identifying a function entry.
pub const FUNCTION_MARKER: &str = "function";

/// Placeholder used for a parameter without a name.
pub const DEFAULT_PARAM_NAME: &str = "param";

/// Type shown for a parameter or return value without a declared type.
pub const DEFAULT_TYPE_NAME: &str = "any";

/// Binding name used for a return value without a name.
pub const DEFAULT_RETURN_NAME: &str = "result";

/// What a raw definition entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Carries `"type": "function"`.
	Function,
	/// A named grouping of further entries.
	Module,
	/// A bare type marker, scalar or empty object. Never listed.
	Metadata,
}

/// Decide what kind of entry `value` is.
///
/// The function marker wins over everything else. An object with at least one
/// key besides the type marker is a module. Anything else is metadata.
pub fn classify(value: &Value) -> NodeKind {
	let Value::Object(map) = value else {
		return NodeKind::Metadata;
	};

	if map.get(TYPE_KEY).and_then(Value::as_str) == Some(FUNCTION_MARKER) {
		return NodeKind::Function;
	}

	if map.keys().any(|key| key != TYPE_KEY) {
		NodeKind::Module
	} else {
		NodeKind::Metadata
	}
}

/// A classified definition entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Function(FunctionDef),
	Module(ModuleDef),
	Metadata,
}

impl Node {
	/// Classify and materialize the entry `name` found under `prefix`.
	///
	/// Modules keep only their direct function children. Groupings nested
	/// inside a module are beyond the supported depth and are dropped with a
	/// warning.
	pub fn from_value(
		prefix: Option<&str>,
		name: &str,
		value: &Value,
		source: &Path,
	) -> ScriptdocResult<Node> {
		let qualified_name = qualify(prefix, name);

		match classify(value) {
			NodeKind::Function => {
				let function = FunctionDef::from_value(&qualified_name, name, value, source)?;
				Ok(Node::Function(function))
			}
			NodeKind::Module => {
				let mut functions = Vec::new();
				for (child_name, child) in entries(value) {
					match classify(child) {
						NodeKind::Function => {
							functions.push(FunctionDef::from_value(
								&qualify(Some(&qualified_name), child_name),
								child_name,
								child,
								source,
							)?);
						}
						NodeKind::Module => {
							tracing::warn!(
								module = %qualified_name,
								entry = %child_name,
								"nested modules are not supported, skipping entry"
							);
						}
						NodeKind::Metadata => {}
					}
				}

				Ok(Node::Module(ModuleDef {
					name: name.to_string(),
					qualified_name,
					functions,
				}))
			}
			NodeKind::Metadata => Ok(Node::Metadata),
		}
	}
}

fn entries(value: &Value) -> impl Iterator<Item = (&String, &Value)> {
	value.as_object().into_iter().flat_map(Map::iter)
}

/// A documented function.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FunctionDef {
	/// Name within the immediate parent.
	#[serde(skip)]
	pub name: String,
	/// Dot-joined path from the naming root, e.g. `sandman.json.decode`.
	#[serde(skip)]
	pub qualified_name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
	/// Whether a non-throwing `try_` sibling exists.
	#[serde(default, deserialize_with = "null_as_default")]
	pub has_try: bool,
	#[serde(default)]
	pub schema: Option<Schema>,
	/// Literal display values keyed by parameter name.
	#[serde(default)]
	pub example_values: Option<Map<String, Value>>,
}

impl FunctionDef {
	fn from_value(
		qualified_name: &str,
		name: &str,
		value: &Value,
		source: &Path,
	) -> ScriptdocResult<Self> {
		let mut function = Self::deserialize(value).map_err(|e| {
			ScriptdocError::MalformedInput {
				path: source.display().to_string(),
				reason: format!("function `{qualified_name}`: {e}"),
			}
		})?;
		function.name = name.to_string();
		function.qualified_name = qualified_name.to_string();

		Ok(function)
	}

	/// The display value configured for `param_name`, if any. `null` and
	/// `false` count as unset.
	pub fn example_value(&self, param_name: &str) -> Option<&Value> {
		self.example_values
			.as_ref()
			.and_then(|values| values.get(param_name))
			.filter(|value| !matches!(value, Value::Null | Value::Bool(false)))
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything other than an array reads as an undeclared list.
fn list_or_none<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	match Value::deserialize(deserializer)? {
		value @ Value::Array(_) => {
			Vec::<T>::deserialize(value)
				.map(Some)
				.map_err(D::Error::custom)
		}
		_ => Ok(None),
	}
}

/// Parameter and return-value descriptors of a function.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Schema {
	/// `None` when the schema does not declare a parameter list, or declares
	/// something other than a list.
	#[serde(default, deserialize_with = "list_or_none")]
	pub params: Option<Vec<Param>>,
	#[serde(default, deserialize_with = "list_or_none")]
	pub ret_vals: Option<Vec<ReturnValue>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Param {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, rename = "type")]
	pub r#type: Option<String>,
}

impl Param {
	pub fn name(&self) -> &str {
		self.name.as_deref().unwrap_or(DEFAULT_PARAM_NAME)
	}

	pub fn type_name(&self) -> &str {
		self.r#type.as_deref().unwrap_or(DEFAULT_TYPE_NAME)
	}
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ReturnValue {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, rename = "type")]
	pub r#type: Option<String>,
}

impl ReturnValue {
	pub fn name(&self) -> &str {
		self.name.as_deref().unwrap_or(DEFAULT_RETURN_NAME)
	}

	pub fn type_name(&self) -> &str {
		self.r#type.as_deref().unwrap_or(DEFAULT_TYPE_NAME)
	}
}

/// A module of the reserved namespace, e.g. `sandman.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDef {
	pub name: String,
	pub qualified_name: String,
	pub functions: Vec<FunctionDef>,
}

/// The classified API definitions, read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionTree {
	/// The reserved top-level key holding the modules.
	pub namespace: String,
	/// Functions documented on the global page. Includes functions declared
	/// directly under the namespace, under their qualified name.
	pub globals: Vec<FunctionDef>,
	/// Namespaced modules in document order.
	pub modules: Vec<ModuleDef>,
}

impl DefinitionTree {
	/// Read and classify the definitions file at `path`.
	pub fn load(path: &Path, namespace: &str) -> ScriptdocResult<Self> {
		if !path.exists() {
			return Err(ScriptdocError::MissingInput {
				path: path.display().to_string(),
			});
		}

		tracing::info!(path = %path.display(), "loading API definitions");
		let content = std::fs::read_to_string(path)?;
		Self::parse(&content, namespace, path)
	}

	/// Parse definitions from a JSON string. `source` is only used in error
	/// messages.
	pub fn parse(content: &str, namespace: &str, source: &Path) -> ScriptdocResult<Self> {
		let value: Value =
			serde_json::from_str(content).map_err(|e| ScriptdocError::MalformedInput {
				path: source.display().to_string(),
				reason: e.to_string(),
			})?;

		Self::from_value(&value, namespace, source)
	}

	pub fn from_value(value: &Value, namespace: &str, source: &Path) -> ScriptdocResult<Self> {
		let Value::Object(root) = value else {
			return Err(ScriptdocError::MalformedInput {
				path: source.display().to_string(),
				reason: "the top-level value must be an object".to_string(),
			});
		};

		let mut tree = DefinitionTree {
			namespace: namespace.to_string(),
			globals: Vec::new(),
			modules: Vec::new(),
		};

		for (name, entry) in root {
			if name == namespace {
				tree.load_namespace(entry, source)?;
				continue;
			}

			match Node::from_value(None, name, entry, source)? {
				Node::Function(function) => tree.globals.push(function),
				Node::Module(_) => {
					tracing::warn!(
						entry = %name,
						namespace = %namespace,
						"top-level groupings outside the namespace are not documented"
					);
				}
				Node::Metadata => {}
			}
		}

		tracing::debug!(
			globals = tree.globals.len(),
			modules = tree.modules.len(),
			"classified API definitions"
		);

		Ok(tree)
	}

	fn load_namespace(&mut self, value: &Value, source: &Path) -> ScriptdocResult<()> {
		match classify(value) {
			NodeKind::Metadata => {}
			NodeKind::Function => {
				if let Node::Function(function) =
					Node::from_value(None, &self.namespace.clone(), value, source)?
				{
					self.globals.push(function);
				}
			}
			NodeKind::Module => {
				let namespace = self.namespace.clone();
				for (name, entry) in entries(value) {
					match Node::from_value(Some(&namespace), name, entry, source)? {
						Node::Function(function) => self.globals.push(function),
						Node::Module(module) => self.modules.push(module),
						Node::Metadata => {}
					}
				}
			}
		}

		Ok(())
	}

	/// Look up a namespaced module by its short name.
	pub fn module(&self, name: &str) -> Option<&ModuleDef> {
		self.modules.iter().find(|module| module.name == name)
	}

	/// Every function in the tree, globals first.
	pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
		self.globals
			.iter()
			.chain(self.modules.iter().flat_map(|module| module.functions.iter()))
	}
}
