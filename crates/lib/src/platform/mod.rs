pub mod paths;

/// Returns the platform identifier of the running system (e.g., "x86_64-linux")
pub fn platform_triple() -> String {
  format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS)
}
