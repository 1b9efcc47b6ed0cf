//! Command construction for the wrapped .NET tools.
//!
//! Builders turn a project descriptor plus tool settings into a
//! [`CommandInvocation`]. Building is pure apart from the artifact existence
//! checks; running the invocation is left to [`crate::execute`].

pub mod gallio;
pub mod ndeps;
pub mod types;

pub use gallio::GallioCommandBuilder;
pub use ndeps::NDepsCommandBuilder;
pub use types::CommandInvocation;

use crate::artifact::ConfigError;

/// A configured builder for one external tool.
pub trait CommandBuilder {
  /// Tool name used in logs and errors.
  fn tool_name(&self) -> &'static str;

  /// Validate the configuration and produce the invocation.
  ///
  /// Never returns a partial invocation: any missing artifact or unset
  /// field is reported as a [`ConfigError`].
  fn to_command(&self) -> Result<CommandInvocation, ConfigError>;
}

/// Unwrap a required builder field or report it as unconfigured.
pub(crate) fn required<'a, T: ?Sized>(
  value: Option<&'a T>,
  tool: &'static str,
  field: &'static str,
) -> Result<&'a T, ConfigError> {
  value.ok_or(ConfigError::BuilderNotConfigured { tool, field })
}
