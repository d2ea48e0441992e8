use crate::DEFAULT_RETURN_NAME;
use crate::Param;
use crate::ReturnValue;
use crate::Schema;

/// Ordered parameter and return-value descriptors read from an optional
/// schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signature<'a> {
	/// `None` when no parameter list is declared, which is distinct from an
	/// empty one.
	pub params: Option<&'a [Param]>,
	pub ret_vals: &'a [ReturnValue],
}

impl<'a> Signature<'a> {
	pub fn of(schema: Option<&'a Schema>) -> Self {
		let Some(schema) = schema else {
			return Self::default();
		};

		Self {
			params: schema.params.as_deref(),
			ret_vals: schema.ret_vals.as_deref().unwrap_or_default(),
		}
	}

	/// Declared parameters, empty when none are known.
	pub fn params(&self) -> &'a [Param] {
		self.params.unwrap_or_default()
	}

	/// Canonical binding name for the result: the first return value's name,
	/// or `result`.
	pub fn return_name(&self) -> &'a str {
		self.ret_vals
			.first()
			.map_or(DEFAULT_RETURN_NAME, ReturnValue::name)
	}
}
