//! Process-wide extension registry.
//!
//! # Role
//!
//! [`RegistryBuilder`] collects extensions during the single-threaded
//! bootstrap phase; [`RegistryBuilder::build`] freezes them into an
//! [`InstructionRegistry`] that every code-generator invocation shares by
//! reference. There is no ambient singleton: the dependency is explicit in
//! each consumer's interface.

use indexmap::IndexMap;

use crate::binding::CodegenBinding;
use crate::descriptor::InstructionDef;
use crate::error::{LookupError, RegistryError, ResolveError};
use crate::extension::Extension;
use crate::kind::InstructionKind;

/// Collects extensions during bootstrap.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	extensions: IndexMap<String, Extension>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an extension under its internal name.
	///
	/// Idempotent-guarded: a name collision leaves the existing extension in
	/// place and reports [`RegistryError::DuplicateExtensionName`]. Callers
	/// decide whether to halt startup or quarantine the duplicate; the
	/// registry never continues with a half-registered state.
	pub fn register(&mut self, extension: Extension) -> Result<(), RegistryError> {
		let name = extension.internal_name().to_owned();
		if self.extensions.contains_key(&name) {
			tracing::warn!(extension = %name, "duplicate extension registration rejected");
			return Err(RegistryError::DuplicateExtensionName { name });
		}
		tracing::debug!(
			extension = %name,
			conditions = extension.catalog().len(InstructionKind::Condition),
			actions = extension.catalog().len(InstructionKind::Action),
			expressions = extension.catalog().len(InstructionKind::Expression),
			"registered extension"
		);
		self.extensions.insert(name, extension);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.extensions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty()
	}

	/// Freezes the collected extensions into an immutable registry.
	pub fn build(self) -> InstructionRegistry {
		InstructionRegistry {
			extensions: self.extensions,
		}
	}
}

/// Immutable lookup across every registered extension.
///
/// Safe for unsynchronized concurrent reads; all operations are in-memory,
/// synchronous and bounded.
#[derive(Debug, Clone)]
pub struct InstructionRegistry {
	extensions: IndexMap<String, Extension>,
}

impl InstructionRegistry {
	pub fn extension(&self, internal_name: &str) -> Option<&Extension> {
		self.extensions.get(internal_name)
	}

	/// Extensions in registration order.
	pub fn iter_extensions(&self) -> impl Iterator<Item = &Extension> {
		self.extensions.values()
	}

	pub fn len(&self) -> usize {
		self.extensions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty()
	}

	/// Resolves `(kind, identifier)` to its descriptor.
	///
	/// Extensions are consulted in registration order and the first
	/// declaration wins. A [`LookupError::NotFound`] means the authored
	/// program references an instruction unknown to the loaded extension
	/// set; it must surface as a compile error, never a silent no-op.
	pub fn find(
		&self,
		kind: InstructionKind,
		identifier: &str,
	) -> Result<&InstructionDef, LookupError> {
		self.extensions
			.values()
			.find_map(|extension| extension.catalog().find(kind, identifier))
			.ok_or_else(|| LookupError::NotFound {
				kind,
				identifier: identifier.to_owned(),
			})
	}

	/// Resolves an instruction use straight to its call target.
	///
	/// The exact consultation the code generator performs for every
	/// instruction it lowers.
	pub fn resolve(
		&self,
		kind: InstructionKind,
		identifier: &str,
	) -> Result<&CodegenBinding, ResolveError> {
		let def = self.find(kind, identifier)?;
		Ok(def.binding()?)
	}
}
