//! Instruction descriptors.

use crate::binding::CodegenBinding;
use crate::error::MissingBinding;
use crate::kind::InstructionKind;
use crate::meta::InstructionMeta;

/// One declared condition, action or expression.
///
/// Created during its extension's population phase, mutated only there, then
/// immutable and shared for the rest of the process's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionDef {
	kind: InstructionKind,
	identifier: String,
	meta: InstructionMeta,
	binding: Option<CodegenBinding>,
}

impl InstructionDef {
	pub(crate) fn new(kind: InstructionKind, identifier: String, meta: InstructionMeta) -> Self {
		Self {
			kind,
			identifier,
			meta,
			binding: None,
		}
	}

	pub fn kind(&self) -> InstructionKind {
		self.kind
	}

	/// Stable key referenced by authored event graphs. Effectively a
	/// persisted, append-only interface: renaming it breaks every project
	/// that used it.
	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn meta(&self) -> &InstructionMeta {
		&self.meta
	}

	/// Mutable access to display metadata during the population phase.
	pub fn meta_mut(&mut self) -> &mut InstructionMeta {
		&mut self.meta
	}

	/// Records the runtime function this instruction compiles to.
	///
	/// Trusted registration code only; chainable.
	pub fn set_function_name(&mut self, target: impl Into<String>) -> &mut Self {
		self.binding = Some(CodegenBinding::function_call(target));
		self
	}

	/// Records an arbitrary binding kind.
	pub fn set_binding(&mut self, binding: CodegenBinding) -> &mut Self {
		self.binding = Some(binding);
		self
	}

	/// The recorded binding, or the registration defect if none was attached.
	pub fn binding(&self) -> Result<&CodegenBinding, MissingBinding> {
		self.binding.as_ref().ok_or_else(|| MissingBinding {
			kind: self.kind,
			identifier: self.identifier.clone(),
		})
	}

	pub fn has_binding(&self) -> bool {
		self.binding.is_some()
	}
}
