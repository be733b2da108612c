//! The authored project model.
//!
//! Projects are persisted as JSON by the editor; the types here mirror that
//! format. The model records what the designer authored and nothing else:
//! resolution against the loaded extension set happens at generation time.

use serde::{Deserialize, Serialize};

/// A finished project: named scenes, each carrying one event sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub name: String,
	#[serde(default)]
	pub scenes: Vec<Scene>,
}

/// One scene and its event sheet. Scenes are independent compile units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
	pub name: String,
	#[serde(default)]
	pub events: Vec<Event>,
}

/// One visual event: conditions guarding actions, plus nested sub-events
/// that only run when the conditions held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
	#[serde(default)]
	pub conditions: Vec<InstructionUse>,
	#[serde(default)]
	pub actions: Vec<InstructionUse>,
	#[serde(default)]
	pub sub_events: Vec<Event>,
}

/// A reference to a declared instruction, as authored in an event sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionUse {
	/// Identifier within the namespace implied by position (condition list vs
	/// action list vs expression argument).
	pub identifier: String,
	#[serde(default)]
	pub args: Vec<Argument>,
	/// Inverted conditions succeed when the underlying predicate fails.
	/// Ignored for actions.
	#[serde(default)]
	pub inverted: bool,
}

impl InstructionUse {
	pub fn new(identifier: impl Into<String>) -> Self {
		Self {
			identifier: identifier.into(),
			..Self::default()
		}
	}

	pub fn arg(mut self, arg: Argument) -> Self {
		self.args.push(arg);
		self
	}

	pub fn inverted(mut self) -> Self {
		self.inverted = true;
		self
	}
}

/// An authored argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
	/// Verbatim literal, already in runtime syntax.
	Literal(String),
	/// A call into the expression namespace.
	Expression {
		identifier: String,
		#[serde(default)]
		args: Vec<Argument>,
	},
}

impl Argument {
	pub fn literal(text: impl Into<String>) -> Self {
		Self::Literal(text.into())
	}

	pub fn expression(identifier: impl Into<String>, args: Vec<Argument>) -> Self {
		Self::Expression {
			identifier: identifier.into(),
			args,
		}
	}
}
