//! Error taxonomy for catalog population, registration and lookup.
//!
//! Registration-time errors are fatal to the affected extension only and
//! never skip individual descriptors silently. Lookup-time errors propagate
//! into the code generator's compile result as blocking, recoverable
//! failures.

use thiserror::Error;

use crate::kind::InstructionKind;

/// Errors raised while populating an extension catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// A `declare_*` call hit an identifier already present in the namespace.
	///
	/// Intentional replacement must go through the `override_*` operations;
	/// an implicit collision is treated as a typo.
	#[error("{kind} \"{identifier}\" is already declared in this extension")]
	DuplicateInstruction {
		kind: InstructionKind,
		identifier: String,
	},
	/// A binding was attached to an identifier nothing declared.
	#[error("cannot bind {kind} \"{identifier}\": no such declaration")]
	UnknownInstruction {
		kind: InstructionKind,
		identifier: String,
	},
}

/// An instruction was consulted for code generation without a recorded
/// binding.
///
/// This is a defect in the owning extension's setup routine, not a user
/// error; it must surface loudly at build or validation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} \"{identifier}\" has no code-generation binding")]
pub struct MissingBinding {
	pub kind: InstructionKind,
	pub identifier: String,
}

/// Errors raised while building or registering extensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Two extensions share one internal name. The first registration is
	/// retained; the second is quarantined and reported.
	#[error("an extension named \"{name}\" is already registered")]
	DuplicateExtensionName { name: String },
	/// Catalog population failed, aborting the extension's construction.
	#[error("extension \"{name}\" failed to populate its catalog: {source}")]
	Catalog {
		name: String,
		#[source]
		source: CatalogError,
	},
}

/// A lookup for an identifier absent from every registered extension.
///
/// Surfaced to the user as a compile error naming the offending identifier
/// and its namespace, never a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	#[error("no {kind} named \"{identifier}\" is declared by any loaded extension")]
	NotFound {
		kind: InstructionKind,
		identifier: String,
	},
}

/// Errors raised when resolving an instruction use to its call target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	#[error(transparent)]
	Lookup(#[from] LookupError),
	#[error(transparent)]
	MissingBinding(#[from] MissingBinding),
}
