//! Naming conventions shared by the index, the headings and the examples.

/// Join `name` onto an optional dotted `prefix`.
pub fn qualify(prefix: Option<&str>, name: &str) -> String {
	match prefix {
		Some(prefix) if !prefix.is_empty() => format!("{prefix}.{name}"),
		_ => name.to_string(),
	}
}

/// In-page fragment identifier for a qualified name: lowercased with every
/// `.` removed.
pub fn anchor(qualified_name: &str) -> String {
	qualified_name.to_lowercase().replace('.', "")
}

/// Name of the non-throwing variant: the last dot-delimited segment gains a
/// `try_` prefix. A name without dots is a single segment.
pub fn derive_try_name(qualified_name: &str) -> String {
	match qualified_name.rsplit_once('.') {
		Some((head, last)) => format!("{head}.try_{last}"),
		None => format!("try_{qualified_name}"),
	}
}

/// Name shown in headings and indexes: the try variant when one exists.
pub fn display_name(qualified_name: &str, has_try: bool) -> String {
	if has_try {
		derive_try_name(qualified_name)
	} else {
		qualified_name.to_string()
	}
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}
