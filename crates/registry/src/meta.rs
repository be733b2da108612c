//! Display metadata attached to instruction descriptors.
//!
//! Everything in this module is editor-facing. The code generator never
//! consults these fields; only the binding recorded on the descriptor crosses
//! into emitted code.

use serde::{Deserialize, Serialize};

/// A declared parameter of an instruction.
///
/// Recorded for presentation and to document the calling convention. The
/// registry never validates authored arguments against this list; arity and
/// type checking belong to the editor and the code generator's collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMeta {
	/// Parameter kind understood by the editor (e.g. `"expression"`, `"string"`).
	pub kind: String,
	/// Help text shown next to the input field.
	#[serde(default)]
	pub description: String,
	/// Optional parameters may be omitted by the authored event.
	#[serde(default)]
	pub optional: bool,
}

impl ParameterMeta {
	pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			description: description.into(),
			optional: false,
		}
	}

	/// Marks the parameter as omittable.
	pub fn optional(mut self) -> Self {
		self.optional = true;
		self
	}
}

/// Human-facing metadata for one instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionMeta {
	/// Localizable display name.
	pub full_name: String,
	/// Help text shown in the instruction picker.
	pub description: String,
	/// Sentence template rendered in the event sheet, with `_PARAM0_`-style
	/// slots substituted by the authored arguments.
	#[serde(default)]
	pub sentence: String,
	/// Grouping path in the editor's instruction list.
	#[serde(default)]
	pub group: String,
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub small_icon: String,
	/// Declared parameters, excluding the implicit execution context.
	#[serde(default)]
	pub parameters: Vec<ParameterMeta>,
	/// Hidden instructions stay resolvable, so previously authored projects
	/// keep compiling, but are not offered for new events. Used for
	/// deprecated aliases.
	#[serde(default)]
	pub hidden: bool,
}

impl InstructionMeta {
	/// Minimal metadata: display name and help text.
	pub fn new(full_name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			full_name: full_name.into(),
			description: description.into(),
			..Self::default()
		}
	}

	pub fn sentence(mut self, sentence: impl Into<String>) -> Self {
		self.sentence = sentence.into();
		self
	}

	pub fn group(mut self, group: impl Into<String>) -> Self {
		self.group = group.into();
		self
	}

	pub fn icon(mut self, icon: impl Into<String>, small_icon: impl Into<String>) -> Self {
		self.icon = icon.into();
		self.small_icon = small_icon.into();
		self
	}

	/// Appends a declared parameter.
	pub fn parameter(mut self, parameter: ParameterMeta) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Hides the instruction from the editor's picker.
	pub fn hidden(mut self) -> Self {
		self.hidden = true;
		self
	}
}
