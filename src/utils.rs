use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Directory containing the running executable. Output files and
/// `config.toml` are resolved against it, not the working directory.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .context("Executable path has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(1520.004), 1520.0);
        assert_relative_eq!(round2(1520.456), 1520.46);
        assert_relative_eq!(round2(-12.345678), -12.35);
        assert_relative_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_program_dir_is_a_directory() -> Result<()> {
        let dir = program_dir()?;
        assert!(dir.is_dir());
        Ok(())
    }
}
