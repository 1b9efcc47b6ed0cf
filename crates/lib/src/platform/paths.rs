use crate::consts::APP_NAME;
use std::path::PathBuf;

/// Returns the user's home directory, if known
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("USERPROFILE").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the user's home directory, if known
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> Option<PathBuf> {
  std::env::var_os("APPDATA")
    .filter(|v| !v.is_empty())
    .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> Option<PathBuf> {
  let config_home = std::env::var_os("XDG_CONFIG_HOME")
    .filter(|v| !v.is_empty())
    .map(PathBuf::from)
    .or_else(|| home_dir().map(|home| home.join(".config")))?;
  Some(config_home.join(APP_NAME))
}

#[cfg(test)]
#[cfg(not(windows))]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn xdg_config_home_takes_precedence() {
    temp_env::with_vars(
      [
        ("XDG_CONFIG_HOME", Some("/custom/config")),
        ("HOME", Some("/home/user")),
      ],
      || {
        assert_eq!(config_dir(), Some(PathBuf::from("/custom/config").join(APP_NAME)));
      },
    );
  }

  #[test]
  #[serial]
  fn xdg_fallback_to_home_directory() {
    temp_env::with_vars(
      [("XDG_CONFIG_HOME", None::<&str>), ("HOME", Some("/home/user"))],
      || {
        assert_eq!(config_dir(), Some(PathBuf::from("/home/user/.config").join(APP_NAME)));
      },
    );
  }

  #[test]
  #[serial]
  fn no_home_means_no_config_dir() {
    temp_env::with_vars([("XDG_CONFIG_HOME", None::<&str>), ("HOME", None)], || {
      assert_eq!(config_dir(), None);
    });
  }
}
