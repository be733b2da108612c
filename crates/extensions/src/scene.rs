//! The built-in Scene extension.

use eventum_registry::{Extension, ExtensionInfo, InstructionKind, RegistryError};

use crate::base;

pub const EXTENSION_NAME: &str = "BuiltinScene";

/// Builds the Scene extension.
pub fn extension() -> Result<Extension, RegistryError> {
	let info = ExtensionInfo::new(EXTENSION_NAME, "Scene")
		.description("Built-in extension for scene lifecycle and general utilities.")
		.author("Eventum contributors")
		.license("MIT")
		.version("1.0.0");

	Extension::build(info, |catalog| {
		base::declare_scene_instructions(catalog)?;

		use InstructionKind::{Action, Condition, Expression};

		catalog.bind(Condition, "DepartScene", "runtime.scene.sceneJustBegins")?;
		catalog.bind(Action, "Quit", "runtime.scene.stopGame")?;
		catalog.bind(Expression, "Random", "runtime.common.random")?;
		catalog.bind(Expression, "SceneName", "runtime.scene.getSceneName")?;

		Ok(())
	})
}

#[cfg(test)]
mod tests {
	use eventum_registry::InstructionKind;
	use pretty_assertions::assert_eq;

	use super::extension;

	#[test]
	fn scene_instructions_are_declared_and_bound() {
		let extension = extension().unwrap();
		let def = extension
			.find(InstructionKind::Condition, "DepartScene")
			.unwrap();
		assert_eq!(def.binding().unwrap().target(), "runtime.scene.sceneJustBegins");
		assert_eq!(extension.catalog().len(InstructionKind::Expression), 2);
	}
}
