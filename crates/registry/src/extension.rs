//! Extension identity and atomic construction.

use crate::catalog::ExtensionCatalog;
use crate::descriptor::InstructionDef;
use crate::error::{CatalogError, RegistryError};
use crate::kind::InstructionKind;

/// Identity metadata for an extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionInfo {
	/// Process-unique registry key. Persisted by authored projects, so it is
	/// effectively append-only across releases.
	pub internal_name: String,
	/// Localizable display name.
	pub full_name: String,
	pub description: String,
	pub author: String,
	pub license: String,
	pub version: String,
}

impl ExtensionInfo {
	pub fn new(internal_name: impl Into<String>, full_name: impl Into<String>) -> Self {
		Self {
			internal_name: internal_name.into(),
			full_name: full_name.into(),
			..Self::default()
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn author(mut self, author: impl Into<String>) -> Self {
		self.author = author.into();
		self
	}

	pub fn license(mut self, license: impl Into<String>) -> Self {
		self.license = license.into();
		self
	}

	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();
		self
	}
}

/// A named, versioned bundle of instruction declarations and bindings.
#[derive(Debug, Clone)]
pub struct Extension {
	info: ExtensionInfo,
	catalog: ExtensionCatalog,
}

impl Extension {
	/// Builds an extension by running `populate` against a fresh catalog.
	///
	/// Population is atomic: any error aborts construction and no extension
	/// value exists. A partially populated extension would make later lookups
	/// miss instructions silently instead of failing loudly.
	pub fn build<F>(info: ExtensionInfo, populate: F) -> Result<Self, RegistryError>
	where
		F: FnOnce(&mut ExtensionCatalog) -> Result<(), CatalogError>,
	{
		let mut catalog = ExtensionCatalog::new();
		populate(&mut catalog).map_err(|source| RegistryError::Catalog {
			name: info.internal_name.clone(),
			source,
		})?;
		Ok(Self { info, catalog })
	}

	/// Stable key used by the registry.
	pub fn internal_name(&self) -> &str {
		&self.info.internal_name
	}

	pub fn info(&self) -> &ExtensionInfo {
		&self.info
	}

	pub fn catalog(&self) -> &ExtensionCatalog {
		&self.catalog
	}

	/// Convenience delegate to [`ExtensionCatalog::find`].
	pub fn find(&self, kind: InstructionKind, identifier: &str) -> Option<&InstructionDef> {
		self.catalog.find(kind, identifier)
	}
}
