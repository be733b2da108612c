//! Code-generation bindings.

/// The call target the code generator emits for one instruction.
///
/// A binding is a closed, tagged record resolved once per identifier; future
/// emission strategies (inline expansion, multi-call) are added as variants,
/// never through reflection.
///
/// Calling convention: the current execution context is always passed as the
/// first argument. The registry records that convention; it never validates
/// call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodegenBinding {
	/// Emit a call to a fully-qualified, dot-separated runtime function.
	FunctionCall {
		/// Runtime function path, e.g. `runtime.scene.timerElapsedTime`.
		target: String,
	},
}

impl CodegenBinding {
	pub fn function_call(target: impl Into<String>) -> Self {
		Self::FunctionCall { target: target.into() }
	}

	/// The target string emitted verbatim into generated code.
	pub fn target(&self) -> &str {
		match self {
			Self::FunctionCall { target } => target,
		}
	}
}

impl std::fmt::Display for CodegenBinding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FunctionCall { target } => write!(f, "call {target}"),
		}
	}
}
