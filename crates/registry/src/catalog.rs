//! Per-extension instruction catalogs.
//!
//! # Role
//!
//! A catalog holds everything one extension declares, partitioned into the
//! three instruction namespaces. Declaration is strict: colliding with an
//! existing identifier is an error, and intentional replacement goes through
//! the separate `override_*` operations so the call site documents itself.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::descriptor::InstructionDef;
use crate::error::CatalogError;
use crate::kind::InstructionKind;
use crate::meta::InstructionMeta;

/// The instructions declared by one extension.
///
/// Exclusively owned by its [`Extension`](crate::Extension); mutation is
/// confined to the extension's population phase, after which the catalog is
/// read-only and safe for concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCatalog {
	conditions: FxHashMap<String, InstructionDef>,
	actions: FxHashMap<String, InstructionDef>,
	expressions: FxHashMap<String, InstructionDef>,
}

impl ExtensionCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	fn namespace(&self, kind: InstructionKind) -> &FxHashMap<String, InstructionDef> {
		match kind {
			InstructionKind::Condition => &self.conditions,
			InstructionKind::Action => &self.actions,
			InstructionKind::Expression => &self.expressions,
		}
	}

	fn namespace_mut(&mut self, kind: InstructionKind) -> &mut FxHashMap<String, InstructionDef> {
		match kind {
			InstructionKind::Condition => &mut self.conditions,
			InstructionKind::Action => &mut self.actions,
			InstructionKind::Expression => &mut self.expressions,
		}
	}

	/// Declares a new instruction and returns a handle for attaching a
	/// binding and further metadata.
	///
	/// Strict: an identifier already present in the namespace is rejected
	/// with [`CatalogError::DuplicateInstruction`].
	pub fn declare(
		&mut self,
		kind: InstructionKind,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> Result<&mut InstructionDef, CatalogError> {
		match self.namespace_mut(kind).entry(identifier.into()) {
			Entry::Occupied(occupied) => Err(CatalogError::DuplicateInstruction {
				kind,
				identifier: occupied.key().clone(),
			}),
			Entry::Vacant(vacant) => {
				let identifier = vacant.key().clone();
				Ok(vacant.insert(InstructionDef::new(kind, identifier, meta)))
			}
		}
	}

	pub fn declare_condition(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> Result<&mut InstructionDef, CatalogError> {
		self.declare(InstructionKind::Condition, identifier, meta)
	}

	pub fn declare_action(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> Result<&mut InstructionDef, CatalogError> {
		self.declare(InstructionKind::Action, identifier, meta)
	}

	pub fn declare_expression(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> Result<&mut InstructionDef, CatalogError> {
		self.declare(InstructionKind::Expression, identifier, meta)
	}

	/// Replaces whatever descriptor currently holds `identifier`.
	///
	/// The self-documenting call site for implementing another extension's
	/// declared contract. Also valid when nothing is replaced.
	pub fn override_instruction(
		&mut self,
		kind: InstructionKind,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> &mut InstructionDef {
		match self.namespace_mut(kind).entry(identifier.into()) {
			Entry::Occupied(mut occupied) => {
				let def = InstructionDef::new(kind, occupied.key().clone(), meta);
				occupied.insert(def);
				occupied.into_mut()
			}
			Entry::Vacant(vacant) => {
				let identifier = vacant.key().clone();
				vacant.insert(InstructionDef::new(kind, identifier, meta))
			}
		}
	}

	pub fn override_condition(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> &mut InstructionDef {
		self.override_instruction(InstructionKind::Condition, identifier, meta)
	}

	pub fn override_action(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> &mut InstructionDef {
		self.override_instruction(InstructionKind::Action, identifier, meta)
	}

	pub fn override_expression(
		&mut self,
		identifier: impl Into<String>,
		meta: InstructionMeta,
	) -> &mut InstructionDef {
		self.override_instruction(InstructionKind::Expression, identifier, meta)
	}

	/// Attaches a function-call binding to an already-declared instruction.
	///
	/// The population-phase counterpart of the shared declaration helpers:
	/// a platform extension declares through them, then binds here.
	pub fn bind(
		&mut self,
		kind: InstructionKind,
		identifier: &str,
		target: &str,
	) -> Result<(), CatalogError> {
		match self.namespace_mut(kind).get_mut(identifier) {
			Some(def) => {
				def.set_function_name(target);
				Ok(())
			}
			None => Err(CatalogError::UnknownInstruction {
				kind,
				identifier: identifier.to_owned(),
			}),
		}
	}

	pub fn condition_mut(&mut self, identifier: &str) -> Option<&mut InstructionDef> {
		self.conditions.get_mut(identifier)
	}

	pub fn action_mut(&mut self, identifier: &str) -> Option<&mut InstructionDef> {
		self.actions.get_mut(identifier)
	}

	pub fn expression_mut(&mut self, identifier: &str) -> Option<&mut InstructionDef> {
		self.expressions.get_mut(identifier)
	}

	/// Looks up a descriptor. Read-only, no side effects.
	pub fn find(&self, kind: InstructionKind, identifier: &str) -> Option<&InstructionDef> {
		self.namespace(kind).get(identifier)
	}

	/// Iterates one namespace. No ordering is guaranteed across identifiers;
	/// consumers must never depend on declaration order for correctness.
	pub fn iter(&self, kind: InstructionKind) -> impl Iterator<Item = &InstructionDef> {
		self.namespace(kind).values()
	}

	pub fn len(&self, kind: InstructionKind) -> usize {
		self.namespace(kind).len()
	}

	pub fn is_empty(&self) -> bool {
		InstructionKind::ALL.iter().all(|&kind| self.namespace(kind).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::CatalogError;

	#[test]
	fn redeclaring_an_identifier_is_rejected() {
		let mut catalog = ExtensionCatalog::new();
		catalog
			.declare_condition("Timer", InstructionMeta::default())
			.unwrap();

		let err = catalog
			.declare_condition("Timer", InstructionMeta::default())
			.unwrap_err();
		assert_eq!(
			err,
			CatalogError::DuplicateInstruction {
				kind: InstructionKind::Condition,
				identifier: "Timer".into(),
			}
		);
	}

	#[test]
	fn namespaces_are_disjoint() {
		let mut catalog = ExtensionCatalog::new();
		catalog
			.declare_condition("TimeScale", InstructionMeta::default())
			.unwrap();
		catalog
			.declare_expression("TimeScale", InstructionMeta::default())
			.unwrap();

		assert!(catalog.find(InstructionKind::Condition, "TimeScale").is_some());
		assert!(catalog.find(InstructionKind::Expression, "TimeScale").is_some());
		assert!(catalog.find(InstructionKind::Action, "TimeScale").is_none());
	}

	#[test]
	fn override_replaces_the_previous_descriptor() {
		let mut catalog = ExtensionCatalog::new();
		catalog
			.declare_action("ResetTimer", InstructionMeta::default())
			.unwrap()
			.set_function_name("runtime.scene.resetTimerLegacy");

		catalog
			.override_action("ResetTimer", InstructionMeta::default())
			.set_function_name("runtime.scene.resetTimer");

		let def = catalog.find(InstructionKind::Action, "ResetTimer").unwrap();
		assert_eq!(def.binding().unwrap().target(), "runtime.scene.resetTimer");
	}

	#[test]
	fn binding_an_undeclared_instruction_fails() {
		let mut catalog = ExtensionCatalog::new();
		let err = catalog
			.bind(InstructionKind::Action, "PauseTimer", "runtime.scene.pauseTimer")
			.unwrap_err();
		assert_eq!(
			err,
			CatalogError::UnknownInstruction {
				kind: InstructionKind::Action,
				identifier: "PauseTimer".into(),
			}
		);
	}
}
