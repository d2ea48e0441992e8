use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ScriptdocError {
	#[error(transparent)]
	#[diagnostic(code(scriptdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("API definitions file not found: {path}")]
	#[diagnostic(
		code(scriptdoc::missing_input),
		help("pass `--input <file>` or set `input` in scriptdoc.toml")
	)]
	MissingInput { path: String },

	#[error("failed to parse API definitions `{path}`: {reason}")]
	#[diagnostic(
		code(scriptdoc::malformed_input),
		help("the definitions file must be a JSON object keyed by function or namespace name")
	)]
	MalformedInput { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(scriptdoc::config_parse),
		help("check that scriptdoc.toml is valid TOML with `input`, `output`, `namespace` or `layout` keys")
	)]
	ConfigParse(String),

	#[error("page rendering failed: {0}")]
	#[diagnostic(code(scriptdoc::template_render))]
	TemplateRender(String),

	#[error("failed to serialize front matter for `{page}`: {reason}")]
	#[diagnostic(code(scriptdoc::front_matter))]
	FrontMatter { page: String, reason: String },
}

pub type ScriptdocResult<T> = Result<T, ScriptdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
