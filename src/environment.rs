//! Execution settings of the interpreter, fixed once at startup.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_BASE: u32 = 10;

/// The numeric base must lie in `BASE_RANGE`.
pub const BASE_RANGE: std::ops::Range<u32> = 2..37;

/// Settings read from a TOML file. Anything missing falls back to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base: Option<u32>,
    pub dump_memory: Option<bool>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Toml)
    }
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        FileConfig::from_toml(&text)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBase(u32),
    Io(PathBuf, std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBase(base) => write!(f, "Invalid base {}, expected {} to {}.", base, BASE_RANGE.start, BASE_RANGE.end - 1),
            ConfigError::Io(path, err) => write!(f, "cannot read `{}`: {}", path.display(), err),
            ConfigError::Toml(err) => write!(f, "bad config file: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What a running program needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    program_path: PathBuf,
    base: u32,
    dump_memory: bool,
}

impl Environment {
    pub fn new(program_path: impl Into<PathBuf>, base: u32) -> Result<Self, ConfigError> {
        if !BASE_RANGE.contains(&base) {
            return Err(ConfigError::InvalidBase(base));
        }
        Ok(Environment { program_path: program_path.into(), base, dump_memory: false })
    }
    /// Layers explicit settings over a config file, over the defaults.
    pub fn resolve(
        program_path: impl Into<PathBuf>,
        base: Option<u32>,
        dump_memory: bool,
        file: &FileConfig,
    ) -> Result<Self, ConfigError> {
        let base = base.or(file.base).unwrap_or(DEFAULT_BASE);
        let mut environment = Environment::new(program_path, base)?;
        environment.dump_memory = dump_memory || file.dump_memory.unwrap_or(false);
        Ok(environment)
    }
    pub fn program_path(&self) -> &Path {
        &self.program_path
    }
    /// Radix used to read input and write output.
    pub fn base(&self) -> u32 {
        self.base
    }
    pub fn dump_memory(&self) -> bool {
        self.dump_memory
    }
}

#[test]
fn test_base_validation() {
    assert!(Environment::new("a.gly", 2).is_ok());
    assert!(Environment::new("a.gly", 36).is_ok());
    assert!(matches!(Environment::new("a.gly", 1), Err(ConfigError::InvalidBase(1))));
    assert!(matches!(Environment::new("a.gly", 37), Err(ConfigError::InvalidBase(37))));
}

#[test]
fn test_resolve() {
    let file = FileConfig::from_toml("base = 16\ndump_memory = true").unwrap();
    assert_eq!(file, FileConfig { base: Some(16), dump_memory: Some(true) });

    let environment = Environment::resolve("a.gly", None, false, &file).unwrap();
    assert_eq!(environment.base(), 16);
    assert!(environment.dump_memory());

    let environment = Environment::resolve("a.gly", Some(2), false, &file).unwrap();
    assert_eq!(environment.base(), 2);

    let environment = Environment::resolve("a.gly", None, false, &FileConfig::default()).unwrap();
    assert_eq!(environment.base(), DEFAULT_BASE);
    assert!(!environment.dump_memory());
    assert_eq!(environment.program_path(), Path::new("a.gly"));

    assert!(FileConfig::from_toml("radix = 3").is_err());
    let file = FileConfig::from_toml("base = 40").unwrap();
    assert!(Environment::resolve("a.gly", None, false, &file).is_err());
}
