use std::path::Path;

use anyhow::Result;
use serde_json::json;

use dotscan_lib::consts::{GALLIO_EXECUTABLE_ENV, NDEPS_EXECUTABLE_ENV};
use dotscan_lib::platform::platform_triple;
use dotscan_lib::settings::default_locations;

use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(config: Option<&Path>, format: OutputFormat) -> Result<()> {
  let settings_file = match config {
    Some(path) => Some(path.to_path_buf()),
    None => default_locations().into_iter().find(|p| p.is_file()),
  };
  let env_value = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

  if format.is_json() {
    return print_json(&json!({
      "version": env!("CARGO_PKG_VERSION"),
      "platform": platform_triple(),
      "settings": settings_file,
      "env": {
        (NDEPS_EXECUTABLE_ENV): env_value(NDEPS_EXECUTABLE_ENV),
        (GALLIO_EXECUTABLE_ENV): env_value(GALLIO_EXECUTABLE_ENV),
      },
    }));
  }

  println!("dotscan v{}", env!("CARGO_PKG_VERSION"));
  print_stat("Platform", &platform_triple());
  match &settings_file {
    Some(path) => print_stat("Settings", &path.display().to_string()),
    None => print_stat("Settings", "defaults (no settings file found)"),
  }
  for name in [NDEPS_EXECUTABLE_ENV, GALLIO_EXECUTABLE_ENV] {
    if let Some(value) = env_value(name) {
      print_stat(name, &value);
    }
  }

  Ok(())
}
