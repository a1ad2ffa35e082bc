use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;

/// Settings that can be stored in a TOML file instead of being passed on the command line.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File to inspect. Relative paths are resolved against the directory of the configuration file.
    pub path: Option<PathBuf>,
    /// First line index (0-based, inclusive).
    pub start: Option<usize>,
    /// Last line index (0-based, exclusive).
    pub end: Option<usize>,
    #[serde(default)]
    pub suspicious_only: bool,
}

impl Config {
    pub fn open<P: AsRef<Path>>(file: P) -> Result<Self, Error> {
        let file = file.as_ref();
        log::debug!("Reading configuration from {}", file.display());
        let mut config: Self = toml::from_str(&fs_err::read_to_string(file)?)?;
        if let (Some(path), Some(dir)) = (config.path.as_mut(), file.parent()) {
            if path.is_relative() && path.as_os_str() != "-" {
                *path = dir.join(&*path);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn open() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("linescope.toml");
        fs_err::write(&file, "path = \"src/main.rs\"\nstart = 3\nend = 7\n").unwrap();
        let config = Config::open(&file).unwrap();
        assert_eq!(
            Config {
                path: Some(dir.path().join("src/main.rs")),
                start: Some(3),
                end: Some(7),
                suspicious_only: false,
            },
            config
        );
    }

    #[test]
    fn absolute_path_and_stdin_are_kept() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("linescope.toml");
        fs_err::write(&file, "path = \"/etc/hosts\"\n").unwrap();
        assert_eq!(Some(PathBuf::from("/etc/hosts")), Config::open(&file).unwrap().path);
        fs_err::write(&file, "path = \"-\"\nsuspicious_only = true\n").unwrap();
        let config = Config::open(&file).unwrap();
        assert_eq!(Some(PathBuf::from("-")), config.path);
        assert!(config.suspicious_only);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("linescope.toml");
        fs_err::write(&file, "lines = \"41..50\"\n").unwrap();
        assert!(matches!(Config::open(&file), Err(Error::Toml(..))));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::open(dir.path().join("missing.toml")),
            Err(Error::Io(..))
        ));
    }

    #[test]
    fn config_gen() {
        let config = Config {
            path: Some("src/lib.rs".into()),
            start: Some(40),
            end: Some(50),
            suspicious_only: true,
        };
        let string = toml::to_string(&config).unwrap();
        assert_eq!(config, toml::from_str(&string).unwrap());
    }
}
