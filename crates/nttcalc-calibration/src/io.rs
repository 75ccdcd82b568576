//! Where calibration profiles live, and reading/writing them.
//!
//! The profile is looked up in `$XDG_CONFIG_HOME/nttcalc/` (or
//! `~/.config/nttcalc/`) first, then as a hidden file in the working
//! directory.

use std::path::{Path, PathBuf};

use crate::profile::{self, CalibrationProfile};

const PROFILE_FILENAME: &str = "nttcalc_calibration.json";
const CONFIG_DIR_NAME: &str = "nttcalc";

/// First usable profile among the candidate locations.
///
/// A stale profile in the config directory does not hide a usable one in
/// the working directory.
#[must_use]
pub fn load_validated_profile() -> Option<CalibrationProfile> {
    let fingerprint = profile::cpu_fingerprint();
    candidate_paths()
        .into_iter()
        .filter(|path| path.exists())
        .find_map(|path| load_validated_from_path(&path, &fingerprint))
}

/// Read `path` and keep the profile only if it is usable with this build
/// on a CPU with `fingerprint`.
#[must_use]
pub fn load_validated_from_path(path: &Path, fingerprint: &str) -> Option<CalibrationProfile> {
    load_from_path(path).and_then(|p| usable(p, fingerprint))
}

fn usable(p: CalibrationProfile, fingerprint: &str) -> Option<CalibrationProfile> {
    let rejection = if !p.is_compatible() {
        Some("format version differs")
    } else if !p.is_valid() {
        Some("threshold or transform limits are invalid")
    } else if !p.matches_cpu(fingerprint) {
        Some("recorded on a different CPU")
    } else {
        None
    };
    match rejection {
        Some(reason) => {
            tracing::info!(reason, "ignoring calibration profile");
            None
        }
        None => Some(p),
    }
}

/// Write the profile to the config directory, creating it if needed, or
/// to the working directory when no config directory is known.
///
/// Returns the path written.
pub fn save_profile(p: &CalibrationProfile) -> std::io::Result<PathBuf> {
    let path = match config_profile_path() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            path
        }
        None => cwd_profile_path(),
    };
    save_to_path(p, &path)?;
    tracing::info!(path = %path.display(), threshold = p.hybrid_threshold, "saved calibration profile");
    Ok(path)
}

/// Write the profile as pretty JSON to `path`.
pub fn save_to_path(p: &CalibrationProfile, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Read a profile from `path`; `None` if missing or malformed.
#[must_use]
pub fn load_from_path(path: &Path) -> Option<CalibrationProfile> {
    let json = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&json)
        .map_err(|e| tracing::warn!(path = %path.display(), error = %e, "malformed calibration profile"))
        .ok()
}

fn candidate_paths() -> Vec<PathBuf> {
    config_profile_path()
        .into_iter()
        .chain(std::iter::once(cwd_profile_path()))
        .collect()
}

fn config_profile_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

fn cwd_profile_path() -> PathBuf {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    dir.join(format!(".{PROFILE_FILENAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_profile(dir: &TempDir, p: &CalibrationProfile) -> PathBuf {
        let path = dir.path().join(PROFILE_FILENAME);
        save_to_path(p, &path).unwrap();
        path
    }

    #[test]
    fn round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let p = CalibrationProfile {
            hybrid_threshold: 17_500,
            ..CalibrationProfile::default()
        };
        let path = write_profile(&dir, &p);
        assert_eq!(load_from_path(&path), Some(p));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_path(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn garbage_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn future_version_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(
            &dir,
            &CalibrationProfile {
                version: 999,
                ..CalibrationProfile::default()
            },
        );
        assert!(load_validated_from_path(&path, "").is_none());
    }

    #[test]
    fn oversized_threshold_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(
            &dir,
            &CalibrationProfile {
                hybrid_threshold: 50_000,
                ..CalibrationProfile::default()
            },
        );
        assert!(load_validated_from_path(&path, "").is_none());
    }

    #[test]
    fn other_cpu_rejected() {
        let dir = TempDir::new().unwrap();
        let p = CalibrationProfile {
            cpu_fingerprint: "cores=64".into(),
            ..CalibrationProfile::default()
        };
        let path = write_profile(&dir, &p);
        assert!(load_validated_from_path(&path, "cores=2").is_none());
        assert_eq!(load_validated_from_path(&path, "cores=64"), Some(p));
    }

    #[test]
    fn working_directory_is_last_candidate() {
        let paths = candidate_paths();
        let last = paths.last().unwrap();
        assert_eq!(
            last.file_name().unwrap().to_string_lossy(),
            format!(".{PROFILE_FILENAME}")
        );
        if let Some(config) = config_profile_path() {
            assert_eq!(paths[0], config);
            assert!(config.ends_with(Path::new(CONFIG_DIR_NAME).join(PROFILE_FILENAME)));
        }
    }
}
