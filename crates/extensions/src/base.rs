//! Shared base declarations.
//!
//! These helpers populate a catalog with display metadata only; they never
//! attach bindings. A platform extension declares through them, then binds
//! each instruction to its own runtime functions. Keeping the declarations in
//! one place guarantees every platform exposes the same instruction set under
//! the same identifiers.

use eventum_registry::{CatalogError, ExtensionCatalog, InstructionMeta, ParameterMeta};

/// Declares the full built-in time instruction set.
pub fn declare_time_instructions(catalog: &mut ExtensionCatalog) -> Result<(), CatalogError> {
	catalog.declare_condition(
		"Timer",
		InstructionMeta::new("Value of a timer", "Test the elapsed time of a timer.")
			.sentence("The timer _PARAM1_ is greater than _PARAM0_ seconds")
			.group("Timers and time")
			.icon("res/conditions/timer24.png", "res/conditions/timer.png")
			.parameter(ParameterMeta::new("expression", "Time in seconds"))
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_condition(
		"TimerPaused",
		InstructionMeta::new("State of a timer", "Test if the specified timer is paused.")
			.sentence("The timer _PARAM0_ is paused")
			.group("Timers and time")
			.icon("res/conditions/timerPaused24.png", "res/conditions/timerPaused.png")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_condition(
		"TimeScale",
		InstructionMeta::new("Time scale", "Test the time scale of the scene.")
			.sentence("The time scale is _PARAM0_")
			.group("Timers and time")
			.icon("res/conditions/time24.png", "res/conditions/time.png")
			.parameter(ParameterMeta::new("expression", "Time scale to compare to")),
	)?;

	catalog.declare_action(
		"ResetTimer",
		InstructionMeta::new("Reset a timer", "Reset the specified timer.")
			.sentence("Reset the timer _PARAM0_")
			.group("Timers and time")
			.icon("res/actions/timer24.png", "res/actions/timer.png")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_action(
		"PauseTimer",
		InstructionMeta::new("Pause a timer", "Pause the specified timer.")
			.sentence("Pause the timer _PARAM0_")
			.group("Timers and time")
			.icon("res/actions/pauseTimer24.png", "res/actions/pauseTimer.png")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_action(
		"UnPauseTimer",
		InstructionMeta::new("Unpause a timer", "Unpause the specified timer.")
			.sentence("Unpause the timer _PARAM0_")
			.group("Timers and time")
			.icon("res/actions/unPauseTimer24.png", "res/actions/unPauseTimer.png")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_action(
		"RemoveTimer",
		InstructionMeta::new("Delete a timer", "Delete a timer from the scene.")
			.sentence("Delete the timer _PARAM0_")
			.group("Timers and time")
			.icon("res/actions/timer24.png", "res/actions/timer.png")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_action(
		"ChangeTimeScale",
		InstructionMeta::new("Change time scale", "Change the time scale of the scene.")
			.sentence("Set the time scale to _PARAM0_")
			.group("Timers and time")
			.icon("res/actions/time24.png", "res/actions/time.png")
			.parameter(ParameterMeta::new(
				"expression",
				"Scale (1: default, 2: twice as fast, 0.5: half speed...)",
			)),
	)?;

	catalog.declare_expression(
		"TimeDelta",
		InstructionMeta::new("Time elapsed in the previous frame", "Time in seconds.")
			.group("Timers and time"),
	)?;
	// Legacy spelling kept resolvable for old projects.
	catalog.declare_expression(
		"TempsFrame",
		InstructionMeta::new("Time elapsed in the previous frame", "Time in seconds.")
			.group("Timers and time")
			.hidden(),
	)?;
	catalog.declare_expression(
		"ElapsedTime",
		InstructionMeta::new("Time elapsed in the previous frame", "Time in seconds.")
			.group("Timers and time"),
	)?;
	catalog.declare_expression(
		"TimerElapsedTime",
		InstructionMeta::new("Value of a timer", "Elapsed time, in seconds, of a timer.")
			.group("Timers and time")
			.parameter(ParameterMeta::new("string", "Timer's name")),
	)?;
	catalog.declare_expression(
		"TimeFromStart",
		InstructionMeta::new(
			"Time elapsed since the beginning of the scene",
			"Time in seconds.",
		)
		.group("Timers and time"),
	)?;
	// Legacy spelling kept resolvable for old projects.
	catalog.declare_expression(
		"TempsDebut",
		InstructionMeta::new(
			"Time elapsed since the beginning of the scene",
			"Time in seconds.",
		)
		.group("Timers and time")
		.hidden(),
	)?;
	catalog.declare_expression(
		"TimeScale",
		InstructionMeta::new("Time scale", "Time scale of the scene.").group("Timers and time"),
	)?;
	catalog.declare_expression(
		"Time",
		InstructionMeta::new("Current time", "Current time, formatted by the runtime.")
			.group("Timers and time")
			.parameter(ParameterMeta::new("string", "Format")),
	)?;

	Ok(())
}

/// Declares the built-in scene instruction set.
pub fn declare_scene_instructions(catalog: &mut ExtensionCatalog) -> Result<(), CatalogError> {
	catalog.declare_condition(
		"DepartScene",
		InstructionMeta::new(
			"At the beginning of the scene",
			"True only when the scene is rendering its first frame.",
		)
		.sentence("At the beginning of the scene")
		.group("Scene")
		.icon("res/conditions/depart24.png", "res/conditions/depart.png"),
	)?;

	catalog.declare_action(
		"Quit",
		InstructionMeta::new("Quit the game", "Stop the game and close its window.")
			.sentence("Quit the game")
			.group("Scene")
			.icon("res/actions/quit24.png", "res/actions/quit.png"),
	)?;

	catalog.declare_expression(
		"Random",
		InstructionMeta::new("Random value", "Random integer between 0 and the maximum.")
			.group("Scene")
			.parameter(ParameterMeta::new("expression", "Maximum value")),
	)?;
	catalog.declare_expression(
		"SceneName",
		InstructionMeta::new("Scene name", "Name of the scene being played.").group("Scene"),
	)?;

	Ok(())
}
