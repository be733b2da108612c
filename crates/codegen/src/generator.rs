//! Lowering event sheets to runtime source.

use eventum_registry::{
	InstructionKind, InstructionRegistry, LookupError, MissingBinding, ResolveError,
};
use thiserror::Error;

use crate::project::{Argument, Event, InstructionUse, Project, Scene};

/// The implicit first argument every instruction call receives.
const CONTEXT_ARG: &str = "runtimeScene";

/// Errors produced while lowering an event sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
	/// The sheet references an instruction no loaded extension declares.
	/// Surfaced to the user as a compile error.
	#[error("unknown {kind} \"{identifier}\" referenced by the event sheet")]
	UnknownInstruction {
		kind: InstructionKind,
		identifier: String,
	},
	/// An extension declared an instruction but never attached its binding.
	/// A defect in the extension, not in the authored project.
	#[error("internal consistency error: {0}")]
	Internal(#[from] MissingBinding),
}

impl From<ResolveError> for CodegenError {
	fn from(err: ResolveError) -> Self {
		match err {
			ResolveError::Lookup(LookupError::NotFound { kind, identifier }) => {
				Self::UnknownInstruction { kind, identifier }
			}
			ResolveError::MissingBinding(defect) => Self::Internal(defect),
		}
	}
}

/// Lowers event sheets into runtime source, resolving every instruction use
/// through the registry it borrows.
pub struct EventsCodeGenerator<'r> {
	registry: &'r InstructionRegistry,
}

impl<'r> EventsCodeGenerator<'r> {
	pub fn new(registry: &'r InstructionRegistry) -> Self {
		Self { registry }
	}

	/// Generates the code for every scene of a project.
	///
	/// Scenes are independent compile units: a failing sheet blocks only its
	/// own scene, and the other results are returned untouched.
	pub fn generate_project(
		&self,
		project: &Project,
	) -> Vec<(String, Result<String, CodegenError>)> {
		project
			.scenes
			.iter()
			.map(|scene| (scene.name.clone(), self.generate_scene(scene)))
			.collect()
	}

	/// Generates one scene's event function.
	///
	/// On error, no partial output is returned for the sheet.
	pub fn generate_scene(&self, scene: &Scene) -> Result<String, CodegenError> {
		let mut out = String::new();
		out.push_str(&format!(
			"function {}({CONTEXT_ARG}) {{\n",
			scene_function_name(&scene.name)
		));
		for event in &scene.events {
			self.generate_event(event, 1, &mut out)?;
		}
		out.push_str("}\n");
		Ok(out)
	}

	fn generate_event(
		&self,
		event: &Event,
		depth: usize,
		out: &mut String,
	) -> Result<(), CodegenError> {
		if event.conditions.is_empty() {
			self.generate_event_body(event, depth, out)
		} else {
			let tests = event
				.conditions
				.iter()
				.map(|condition| self.condition_test(condition))
				.collect::<Result<Vec<_>, _>>()?;
			let indent = indent(depth);
			out.push_str(&format!("{indent}if ({}) {{\n", tests.join(" && ")));
			self.generate_event_body(event, depth + 1, out)?;
			out.push_str(&format!("{indent}}}\n"));
			Ok(())
		}
	}

	fn generate_event_body(
		&self,
		event: &Event,
		depth: usize,
		out: &mut String,
	) -> Result<(), CodegenError> {
		let indent = indent(depth);
		for action in &event.actions {
			let call = self.instruction_call(InstructionKind::Action, action)?;
			out.push_str(&format!("{indent}{call};\n"));
		}
		for sub_event in &event.sub_events {
			self.generate_event(sub_event, depth, out)?;
		}
		Ok(())
	}

	fn condition_test(&self, condition: &InstructionUse) -> Result<String, CodegenError> {
		let call = self.instruction_call(InstructionKind::Condition, condition)?;
		Ok(if condition.inverted { format!("!({call})") } else { call })
	}

	fn instruction_call(
		&self,
		kind: InstructionKind,
		instruction: &InstructionUse,
	) -> Result<String, CodegenError> {
		let binding = self.registry.resolve(kind, &instruction.identifier)?;
		tracing::trace!(%kind, identifier = %instruction.identifier, target = binding.target(), "resolved instruction");
		self.emit_call(binding.target(), &instruction.args)
	}

	fn emit_call(&self, target: &str, args: &[Argument]) -> Result<String, CodegenError> {
		let mut parts = Vec::with_capacity(args.len() + 1);
		parts.push(CONTEXT_ARG.to_owned());
		for arg in args {
			parts.push(self.lower_argument(arg)?);
		}
		Ok(format!("{target}({})", parts.join(", ")))
	}

	fn lower_argument(&self, arg: &Argument) -> Result<String, CodegenError> {
		match arg {
			Argument::Literal(text) => Ok(text.clone()),
			Argument::Expression { identifier, args } => {
				let binding = self.registry.resolve(InstructionKind::Expression, identifier)?;
				self.emit_call(binding.target(), args)
			}
		}
	}
}

fn indent(depth: usize) -> String {
	"  ".repeat(depth)
}

/// Mangles a scene name into a valid runtime identifier.
fn scene_function_name(name: &str) -> String {
	let mangled: String = name
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
		.collect();
	format!("scene_{mangled}_events")
}

#[cfg(test)]
mod tests {
	use eventum_registry::{
		Extension, ExtensionInfo, InstructionKind, InstructionMeta, InstructionRegistry,
		RegistryBuilder,
	};
	use pretty_assertions::assert_eq;

	use super::{CodegenError, EventsCodeGenerator, scene_function_name};
	use crate::project::{Argument, Event, InstructionUse, Project, Scene};

	fn builtin_registry() -> InstructionRegistry {
		let mut builder = RegistryBuilder::new();
		eventum_extensions::register_all(&mut builder).unwrap();
		builder.build()
	}

	#[test]
	fn lowers_conditions_actions_and_sub_events() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let scene = Scene {
			name: "Main".into(),
			events: vec![Event {
				conditions: vec![
					InstructionUse::new("Timer")
						.arg(Argument::literal("1.5"))
						.arg(Argument::literal("\"spawn\"")),
				],
				actions: vec![InstructionUse::new("ResetTimer").arg(Argument::literal("\"spawn\""))],
				sub_events: vec![Event {
					conditions: vec![
						InstructionUse::new("TimerPaused")
							.arg(Argument::literal("\"spawn\""))
							.inverted(),
					],
					actions: vec![InstructionUse::new("PauseTimer").arg(Argument::literal("\"spawn\""))],
					sub_events: vec![],
				}],
			}],
		};

		let code = generator.generate_scene(&scene).unwrap();
		let expected = "\
function scene_Main_events(runtimeScene) {
  if (runtime.scene.timerElapsedTime(runtimeScene, 1.5, \"spawn\")) {
    runtime.scene.resetTimer(runtimeScene, \"spawn\");
    if (!(runtime.scene.timerPaused(runtimeScene, \"spawn\"))) {
      runtime.scene.pauseTimer(runtimeScene, \"spawn\");
    }
  }
}
";
		assert_eq!(code, expected);
	}

	#[test]
	fn expression_arguments_lower_recursively() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let scene = Scene {
			name: "Hud".into(),
			events: vec![Event {
				conditions: vec![],
				actions: vec![
					InstructionUse::new("ChangeTimeScale").arg(Argument::expression(
						"Random",
						vec![Argument::expression("TimerElapsedTime", vec![Argument::literal("\"spawn\"")])],
					)),
				],
				sub_events: vec![],
			}],
		};

		let code = generator.generate_scene(&scene).unwrap();
		let expected = "\
function scene_Hud_events(runtimeScene) {
  runtime.scene.setTimeScale(runtimeScene, runtime.common.random(runtimeScene, runtime.scene.getTimerElapsedTimeInSeconds(runtimeScene, \"spawn\")));
}
";
		assert_eq!(code, expected);
	}

	#[test]
	fn alias_expressions_emit_the_identical_call() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let scene_using = |identifier: &str| Scene {
			name: "Hud".into(),
			events: vec![Event {
				conditions: vec![],
				actions: vec![
					InstructionUse::new("ChangeTimeScale")
						.arg(Argument::expression(identifier, vec![])),
				],
				sub_events: vec![],
			}],
		};

		let legacy = generator.generate_scene(&scene_using("TempsFrame")).unwrap();
		let current = generator.generate_scene(&scene_using("ElapsedTime")).unwrap();
		assert_eq!(legacy, current);
		assert!(legacy.contains("runtime.scene.getElapsedTimeInSeconds(runtimeScene)"));
	}

	#[test]
	fn unknown_instruction_names_the_offender_and_emits_nothing() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let scene = Scene {
			name: "Broken".into(),
			events: vec![Event {
				conditions: vec![InstructionUse::new("UnknownThing")],
				actions: vec![InstructionUse::new("ResetTimer").arg(Argument::literal("\"spawn\""))],
				sub_events: vec![],
			}],
		};

		let err = generator.generate_scene(&scene).unwrap_err();
		assert_eq!(
			err,
			CodegenError::UnknownInstruction {
				kind: InstructionKind::Condition,
				identifier: "UnknownThing".into(),
			}
		);
		assert_eq!(
			err.to_string(),
			"unknown condition \"UnknownThing\" referenced by the event sheet"
		);
	}

	#[test]
	fn a_failing_scene_leaves_other_scenes_unaffected() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let project = Project {
			name: "Demo".into(),
			scenes: vec![
				Scene {
					name: "Good".into(),
					events: vec![Event {
						conditions: vec![],
						actions: vec![InstructionUse::new("Quit")],
						sub_events: vec![],
					}],
				},
				Scene {
					name: "Bad".into(),
					events: vec![Event {
						conditions: vec![],
						actions: vec![InstructionUse::new("UnknownThing")],
						sub_events: vec![],
					}],
				},
			],
		};

		let results = generator.generate_project(&project);
		assert_eq!(results.len(), 2);
		assert!(results[0].1.as_ref().unwrap().contains("runtime.scene.stopGame(runtimeScene)"));
		assert_eq!(
			results[1].1,
			Err(CodegenError::UnknownInstruction {
				kind: InstructionKind::Action,
				identifier: "UnknownThing".into(),
			})
		);
	}

	#[test]
	fn unbound_instruction_is_an_internal_error() {
		let sloppy = Extension::build(ExtensionInfo::new("Sloppy", "Sloppy"), |catalog| {
			catalog.declare_action("HalfDone", InstructionMeta::default())?;
			Ok(())
		})
		.unwrap();
		let mut builder = RegistryBuilder::new();
		builder.register(sloppy).unwrap();
		let registry = builder.build();
		let generator = EventsCodeGenerator::new(&registry);

		let scene = Scene {
			name: "Main".into(),
			events: vec![Event {
				conditions: vec![],
				actions: vec![InstructionUse::new("HalfDone")],
				sub_events: vec![],
			}],
		};

		let err = generator.generate_scene(&scene).unwrap_err();
		assert!(matches!(err, CodegenError::Internal(_)));
	}

	#[test]
	fn scene_names_are_mangled_into_identifiers() {
		assert_eq!(scene_function_name("Main menu"), "scene_Main_menu_events");
		assert_eq!(scene_function_name("Niveau 1"), "scene_Niveau_1_events");
	}

	#[test]
	fn authored_json_project_compiles_end_to_end() {
		let registry = builtin_registry();
		let generator = EventsCodeGenerator::new(&registry);

		let json = r#"{
			"name": "Fixture",
			"scenes": [
				{
					"name": "Main",
					"events": [
						{
							"conditions": [{"identifier": "DepartScene"}],
							"actions": [
								{
									"identifier": "ChangeTimeScale",
									"args": [{"literal": "0.5"}]
								}
							]
						}
					]
				}
			]
		}"#;
		let project: Project = serde_json::from_str(json).unwrap();
		let results = generator.generate_project(&project);
		let code = results[0].1.as_ref().unwrap();
		assert!(code.contains("if (runtime.scene.sceneJustBegins(runtimeScene))"));
		assert!(code.contains("runtime.scene.setTimeScale(runtimeScene, 0.5);"));
	}
}
