//! Built-in extensions for Eventum.
//!
//! Each extension module exposes an `extension()` constructor that builds its
//! catalog atomically; [`register_all`] registers every built-in with a
//! bootstrap builder, in a fixed order.

pub mod base;
pub mod scene;
pub mod time;

use eventum_registry::{RegistryBuilder, RegistryError};

/// Registers all built-in extensions with the provided builder.
///
/// Intended to run exactly once per builder, during startup. A second call
/// collides on the built-ins' internal names and reports the first duplicate,
/// leaving the original registrations intact.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
	builder.register(time::extension()?)?;
	builder.register(scene::extension()?)?;
	tracing::debug!(extensions = builder.len(), "built-in extensions registered");
	Ok(())
}

#[cfg(test)]
mod tests {
	use eventum_registry::{InstructionKind, RegistryBuilder, RegistryError};

	use super::register_all;

	#[test]
	fn all_builtin_instructions_are_bound() {
		let mut builder = RegistryBuilder::new();
		register_all(&mut builder).unwrap();
		let registry = builder.build();

		for extension in registry.iter_extensions() {
			for kind in InstructionKind::ALL {
				for def in extension.catalog().iter(kind) {
					let binding = def
						.binding()
						.unwrap_or_else(|defect| panic!("{defect}"));
					assert!(!binding.target().is_empty());
				}
			}
		}
	}

	#[test]
	fn second_bootstrap_into_one_builder_is_rejected() {
		let mut builder = RegistryBuilder::new();
		register_all(&mut builder).unwrap();
		let before = builder.len();

		let err = register_all(&mut builder).unwrap_err();
		assert!(matches!(err, RegistryError::DuplicateExtensionName { .. }));
		assert_eq!(builder.len(), before);
	}
}
