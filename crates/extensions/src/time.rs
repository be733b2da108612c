//! The built-in Time extension.

use eventum_registry::{Extension, ExtensionInfo, InstructionKind, RegistryError};

use crate::base;

/// Internal name the registry files this extension under.
pub const EXTENSION_NAME: &str = "BuiltinTime";

/// Builds the Time extension: base declarations plus the runtime bindings.
pub fn extension() -> Result<Extension, RegistryError> {
	let info = ExtensionInfo::new(EXTENSION_NAME, "Time")
		.description("Built-in extension providing actions and conditions about the time.")
		.author("Eventum contributors")
		.license("MIT")
		.version("1.0.0");

	Extension::build(info, |catalog| {
		base::declare_time_instructions(catalog)?;

		use InstructionKind::{Action, Condition, Expression};

		catalog.bind(Condition, "Timer", "runtime.scene.timerElapsedTime")?;
		catalog.bind(Condition, "TimerPaused", "runtime.scene.timerPaused")?;
		catalog.bind(Condition, "TimeScale", "runtime.scene.getTimeScale")?;

		catalog.bind(Action, "ResetTimer", "runtime.scene.resetTimer")?;
		catalog.bind(Action, "PauseTimer", "runtime.scene.pauseTimer")?;
		catalog.bind(Action, "UnPauseTimer", "runtime.scene.unpauseTimer")?;
		catalog.bind(Action, "RemoveTimer", "runtime.scene.removeTimer")?;
		catalog.bind(Action, "ChangeTimeScale", "runtime.scene.setTimeScale")?;

		catalog.bind(Expression, "TimeDelta", "runtime.scene.getElapsedTimeInSeconds")?;
		catalog.bind(Expression, "TempsFrame", "runtime.scene.getElapsedTimeInSeconds")?;
		catalog.bind(Expression, "ElapsedTime", "runtime.scene.getElapsedTimeInSeconds")?;
		catalog.bind(
			Expression,
			"TimerElapsedTime",
			"runtime.scene.getTimerElapsedTimeInSeconds",
		)?;
		catalog.bind(Expression, "TimeFromStart", "runtime.scene.getTimeFromStartInSeconds")?;
		catalog.bind(Expression, "TempsDebut", "runtime.scene.getTimeFromStartInSeconds")?;
		catalog.bind(Expression, "TimeScale", "runtime.scene.getTimeScale")?;
		catalog.bind(Expression, "Time", "runtime.scene.getTime")?;

		Ok(())
	})
}
