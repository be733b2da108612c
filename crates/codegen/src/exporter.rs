//! Exporter collaborator boundary.
//!
//! Packaging a project into a native executable is owned entirely by the
//! collaborator behind this trait: dialogs, compiler invocation and failure
//! reporting included. The core supplies the finished project and nothing
//! else.

use thiserror::Error;

use crate::project::Project;

/// Outcome of an export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
	/// The project was handed to the packaging pipeline.
	Exported,
	/// The user dismissed the export; no compilation occurred.
	Cancelled,
}

/// Failure reported by an exporter implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("export failed: {reason}")]
pub struct ExportError {
	pub reason: String,
}

impl ExportError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}
}

/// Drives a finished project through an external packaging pipeline.
pub trait Exporter {
	fn export_project(&mut self, project: &Project) -> Result<ExportOutcome, ExportError>;
}
