use std::collections::HashSet;

use minijinja::AutoEscape;
use minijinja::Environment;
use minijinja::context;
use serde::Serialize;

use crate::DefinitionTree;
use crate::FunctionDef;
use crate::ModuleDef;
use crate::ScriptdocError;
use crate::ScriptdocResult;
use crate::Signature;
use crate::example;
use crate::naming::anchor;
use crate::naming::capitalize;
use crate::naming::derive_try_name;
use crate::naming::display_name;

/// Title of the overview page, also the `parent` of every other page.
pub const API_TITLE: &str = "Sandman Lua API";

/// Navigation position of the overview and global pages.
pub const OVERVIEW_NAV_ORDER: u32 = 2;

/// Navigation position of modules missing from [`KNOWN_MODULES`].
pub const DEFAULT_NAV_ORDER: u32 = 10;

const OVERVIEW_PERMALINK: &str = "/docs/api/";
const GLOBAL_PERMALINK: &str = "/docs/api-global/";
const GLOBAL_TITLE: &str = "Global Functions";

/// A module with hand-maintained page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownModule {
	pub name: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub nav_order: u32,
}

/// Modules in documented order.
pub const KNOWN_MODULES: [KnownModule; 7] = [
	KnownModule {
		name: "http",
		title: "HTTP Client",
		description: "Make HTTP requests to external services:",
		nav_order: 3,
	},
	KnownModule {
		name: "server",
		title: "HTTP Server",
		description: "Create HTTP server endpoints and handle requests:",
		nav_order: 4,
	},
	KnownModule {
		name: "document",
		title: "Document Context",
		description: "Manage document-scoped persistent data:",
		nav_order: 5,
	},
	KnownModule {
		name: "json",
		title: "JSON Utilities",
		description: "Encode and decode JSON data:",
		nav_order: 6,
	},
	KnownModule {
		name: "base64",
		title: "Base64 Utilities",
		description: "Base64 encoding and decoding with URL-safe variants:",
		nav_order: 7,
	},
	KnownModule {
		name: "jwt",
		title: "JWT Utilities",
		description: "JSON Web Token creation and verification:",
		nav_order: 8,
	},
	KnownModule {
		name: "uri",
		title: "URI Utilities",
		description: "Parse, construct, and manipulate URIs and URLs:",
		nav_order: 9,
	},
];

fn known_module(name: &str) -> Option<&'static KnownModule> {
	KNOWN_MODULES.iter().find(|module| module.name == name)
}

pub fn module_title(name: &str) -> String {
	known_module(name).map_or_else(|| capitalize(name), |module| module.title.to_string())
}

pub fn module_description(name: &str) -> String {
	known_module(name).map_or_else(
		|| format!("{} utilities:", capitalize(name)),
		|module| module.description.to_string(),
	)
}

pub fn nav_order(name: &str) -> u32 {
	known_module(name).map_or(DEFAULT_NAV_ORDER, |module| module.nav_order)
}

pub fn module_permalink(name: &str) -> String {
	format!("/docs/api-{name}/")
}

/// Metadata block at the top of every page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FrontMatter {
	pub layout: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub permalink: String,
	pub nav_order: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub has_children: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
}

/// A rendered page, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
	pub front_matter: FrontMatter,
	pub body: String,
}

impl GeneratedPage {
	/// File name derived from the permalink's last segment, e.g.
	/// `/docs/api-json/` becomes `api-json.md`.
	pub fn file_name(&self) -> String {
		let stem = self
			.front_matter
			.permalink
			.split('/')
			.rfind(|segment| !segment.is_empty())
			.unwrap_or("index");
		format!("{stem}.md")
	}

	/// The full file contents: serialized front matter between `---` fences,
	/// followed by the body and a single trailing newline.
	pub fn contents(&self) -> ScriptdocResult<String> {
		let front_matter = serde_yaml_ng::to_string(&self.front_matter).map_err(|e| {
			ScriptdocError::FrontMatter {
				page: self.file_name(),
				reason: e.to_string(),
			}
		})?;

		Ok(format!("---\n{front_matter}---\n\n{}\n", self.body.trim_end()))
	}
}

/// Where index entries point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
	/// Anchors on the page being rendered.
	SamePage,
	/// Anchors on the page with the given permalink.
	Page(&'a str),
}

impl LinkTarget<'_> {
	fn href(self, anchor: &str) -> String {
		match self {
			Self::SamePage => format!("#{anchor}"),
			Self::Page(permalink) => format!("{permalink}#{anchor}"),
		}
	}
}

/// One bullet linking a function's display name to its anchor.
pub fn index_entry(function: &FunctionDef, target: LinkTarget<'_>) -> String {
	let display = display_name(&function.qualified_name, function.has_try);
	let href = target.href(&anchor(&function.qualified_name));

	format!("- [`{display}()`]({href}) - {}", function.description)
}

/// The "Functions" section of a page. Empty when there are no functions.
pub fn function_index(functions: &[FunctionDef]) -> String {
	if functions.is_empty() {
		return String::new();
	}

	let entries: Vec<String> = functions
		.iter()
		.map(|function| index_entry(function, LinkTarget::SamePage))
		.collect();

	format!("## Functions\n\n{}\n", entries.join("\n"))
}

/// Bullet list of functions linking to another page, used by the overview.
pub fn function_list(functions: &[FunctionDef], permalink: &str) -> String {
	functions
		.iter()
		.map(|function| index_entry(function, LinkTarget::Page(permalink)))
		.collect::<Vec<_>>()
		.join("\n")
}

/// The full documentation block of a single function.
pub fn function_doc(function: &FunctionDef) -> String {
	let name = &function.qualified_name;
	let mut content = format!(
		"## {} {{#{}}}\n\n",
		display_name(name, function.has_try),
		anchor(name)
	);
	content.push_str("**Type:** Function  \n");
	content.push_str(&format!("**Description:** {}\n", function.description));

	if function.has_try {
		content.push_str(&format!(
			"\n**⚠️ Note:** This function can throw errors. A `{}` alternative is available that \
			 returns `result_or_nil, error` instead of throwing.\n",
			derive_try_name(name)
		));
	}

	content.push_str("\n### Usage\n\n");
	content.push_str(&format!("```lua\n{}\n```\n", example::usage_example(function)));

	if function.schema.is_some() {
		content.push_str(&schema_doc(Signature::of(function.schema.as_ref())));
	}

	content.push_str(&format!(
		"\n### Examples\n\n```lua\n{}\n```\n",
		example::examples(function)
	));

	content
}

/// An empty parameter list gets no "Parameters" heading.
fn schema_doc(signature: Signature<'_>) -> String {
	let mut content = String::new();

	if !signature.params().is_empty() {
		content.push_str("\n### Parameters\n\n");
		for param in signature.params() {
			content.push_str(&format!("- **{}: {}**\n", param.name(), param.type_name()));
		}
	}

	if !signature.ret_vals.is_empty() {
		content.push_str("\n### Returns\n\n");
		for ret_val in signature.ret_vals {
			content.push_str(&format!("- **{}: {}**\n", ret_val.name(), ret_val.type_name()));
		}
	}

	content
}

/// Documentation blocks for every function, separated by blank lines.
pub fn functions_doc(functions: &[FunctionDef]) -> String {
	functions
		.iter()
		.map(function_doc)
		.collect::<Vec<_>>()
		.join("\n\n")
}

/// Warn about functions whose anchors collide on one page. Each collision
/// makes one of the links ambiguous.
fn check_anchors(page: &str, functions: &[FunctionDef]) {
	let mut seen = HashSet::new();
	for function in functions {
		let anchor = anchor(&function.qualified_name);
		if !seen.insert(anchor.clone()) {
			tracing::warn!(
				page = %page,
				function = %function.qualified_name,
				anchor = %anchor,
				"duplicate anchor on page"
			);
		}
	}
}

const OVERVIEW_TEMPLATE: &str = include_str!("templates/overview.md");
const GLOBAL_TEMPLATE: &str = include_str!("templates/global.md");
const MODULE_TEMPLATE: &str = include_str!("templates/module.md");

/// Renders pages from the definition tree.
pub struct PageRenderer<'a> {
	tree: &'a DefinitionTree,
	layout: String,
	env: Environment<'static>,
}

impl<'a> PageRenderer<'a> {
	pub fn new(tree: &'a DefinitionTree, layout: &str) -> ScriptdocResult<Self> {
		let mut env = Environment::new();
		env.set_auto_escape_callback(|_| AutoEscape::None);
		for (name, source) in [
			("overview.md", OVERVIEW_TEMPLATE),
			("global.md", GLOBAL_TEMPLATE),
			("module.md", MODULE_TEMPLATE),
		] {
			env.add_template(name, source)
				.map_err(|e| ScriptdocError::TemplateRender(e.to_string()))?;
		}

		Ok(Self {
			tree,
			layout: layout.to_string(),
			env,
		})
	}

	fn render_template(&self, name: &str, ctx: minijinja::Value) -> ScriptdocResult<String> {
		self.env
			.get_template(name)
			.and_then(|template| template.render(ctx))
			.map_err(|e| ScriptdocError::TemplateRender(e.to_string()))
	}

	/// Modules in page order: those in [`KNOWN_MODULES`] first, in table
	/// order, then the rest in document order.
	pub fn ordered_modules(&self) -> Vec<&'a ModuleDef> {
		let tree = self.tree;
		let known = KNOWN_MODULES
			.iter()
			.filter_map(move |known| tree.module(known.name));
		let unknown = tree
			.modules
			.iter()
			.filter(|module| known_module(&module.name).is_none());

		known.chain(unknown).collect()
	}

	/// Every page: the overview, the global page, then one per module.
	pub fn render_all(&self) -> ScriptdocResult<Vec<GeneratedPage>> {
		let mut pages = vec![self.overview()?, self.global()?];
		for module in self.ordered_modules() {
			pages.push(self.module(module)?);
		}

		Ok(pages)
	}

	pub fn overview(&self) -> ScriptdocResult<GeneratedPage> {
		let modules: Vec<String> = self
			.ordered_modules()
			.into_iter()
			.map(|module| {
				let permalink = module_permalink(&module.name);
				format!(
					"### [{}]({permalink})\n{}\n{}\n",
					module_title(&module.name),
					module_description(&module.name),
					function_list(&module.functions, &permalink)
				)
			})
			.collect();

		let body = self.render_template(
			"overview.md",
			context! {
				global_permalink => GLOBAL_PERMALINK,
				global_functions => function_list(&self.tree.globals, GLOBAL_PERMALINK),
				modules => modules.join("\n"),
			},
		)?;
		tracing::debug!(page = OVERVIEW_PERMALINK, "rendered overview page");

		Ok(GeneratedPage {
			front_matter: FrontMatter {
				layout: self.layout.clone(),
				title: API_TITLE.to_string(),
				description: Some(
					"Complete reference for all Lua functions available in Sandman. These \
					 functions provide HTTP client/server capabilities, data encoding/decoding, \
					 and utility functions for your scripts."
						.to_string(),
				),
				permalink: OVERVIEW_PERMALINK.to_string(),
				nav_order: OVERVIEW_NAV_ORDER,
				has_children: Some(true),
				parent: None,
			},
			body,
		})
	}

	pub fn global(&self) -> ScriptdocResult<GeneratedPage> {
		let functions = &self.tree.globals;
		check_anchors(GLOBAL_PERMALINK, functions);

		let body = self.render_template(
			"global.md",
			context! {
				title => GLOBAL_TITLE,
				index => function_index(functions),
				docs => functions_doc(functions),
			},
		)?;
		tracing::debug!(page = GLOBAL_PERMALINK, functions = functions.len(), "rendered page");

		Ok(GeneratedPage {
			front_matter: FrontMatter {
				layout: self.layout.clone(),
				title: GLOBAL_TITLE.to_string(),
				description: None,
				permalink: GLOBAL_PERMALINK.to_string(),
				nav_order: OVERVIEW_NAV_ORDER,
				has_children: None,
				parent: Some(API_TITLE.to_string()),
			},
			body,
		})
	}

	pub fn module(&self, module: &ModuleDef) -> ScriptdocResult<GeneratedPage> {
		let permalink = module_permalink(&module.name);
		let title = module_title(&module.name);
		check_anchors(&permalink, &module.functions);

		let body = self.render_template(
			"module.md",
			context! {
				title => &title,
				description => module_description(&module.name),
				index => function_index(&module.functions),
				docs => functions_doc(&module.functions),
			},
		)?;
		tracing::debug!(
			page = %permalink,
			functions = module.functions.len(),
			"rendered page"
		);

		Ok(GeneratedPage {
			front_matter: FrontMatter {
				layout: self.layout.clone(),
				title,
				description: None,
				permalink,
				nav_order: nav_order(&module.name),
				has_children: None,
				parent: Some(API_TITLE.to_string()),
			},
			body,
		})
	}
}
