use super::RegistryConfig;
use crate::error::AnnotationError;
use crate::registry::AnnotationRegistry;

/// Outcome of applying a [`RegistryConfig`].
#[derive(Debug, Default)]
pub struct ConfigApplyReport {
	/// Keys defined successfully, in file order.
	pub defined: Vec<String>,
	/// Annotations that could not be defined.
	pub errors: Vec<AnnotationError>,
}

impl ConfigApplyReport {
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty()
	}
}

impl AnnotationRegistry {
	/// Defines every configured annotation, then applies the mute switch.
	///
	/// A refused annotation does not stop the others from being defined.
	pub fn apply_config(&self, config: &RegistryConfig) -> ConfigApplyReport {
		let mut report = ConfigApplyReport::default();

		for annotation in &config.annotations {
			match self.define(&annotation.key, &annotation.class, annotation.style.clone()) {
				Ok(controller) => report.defined.push(controller.key().to_string()),
				Err(error) => {
					tracing::warn!(key = %annotation.key, %error, "skipping configured annotation");
					report.errors.push(error);
				}
			}
		}

		self.mute_handlers(config.muted);
		report
	}
}
