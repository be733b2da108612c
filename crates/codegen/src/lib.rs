//! Event-graph lowering against the instruction registry.
//!
//! [`EventsCodeGenerator`] walks a project's event sheets and, for every
//! instruction use, consults the [`InstructionRegistry`](eventum_registry::InstructionRegistry)
//! it borrows to obtain the call target, then emits runtime source. The
//! registry dependency is explicit; nothing here reaches for a global.

pub mod exporter;
pub mod generator;
pub mod project;

pub use exporter::{ExportError, ExportOutcome, Exporter};
pub use generator::{CodegenError, EventsCodeGenerator};
pub use project::{Argument, Event, InstructionUse, Project, Scene};
