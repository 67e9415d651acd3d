//! Settings loading from the process environment.
//!
//! Collects the recognized variables (case-insensitive names), applies
//! defaults, validates, resolves `DATA_DIR` and `LOGS_DIR` against `CWD`,
//! and provisions both directories on disk. Anything else in the
//! environment is ignored.

use std::{
    collections::HashMap,
    env, fmt, fs,
    path::PathBuf,
    str::FromStr,
};

use crate::error::AppError;

/// Variable names the loader recognizes; everything else is skipped.
const KNOWN_KEYS: [&str; 7] = [
    "debug",
    "log_level",
    "api_host",
    "api_port",
    "cwd",
    "data_dir",
    "logs_dir",
];

/// Logging level, set via `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Directive string understood by the tracing filter.
    /// `Critical` maps to `error`; tracing has no critical level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(AppError::Config(format!(
                "log_level: {s:?} is not one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        })
    }
}

/// Fully-resolved application settings.
///
/// Built once at startup by [`load`] and handed to whatever needs it;
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    pub log_level: LogLevel,
    pub api_host: String,
    /// Always in [1, 65535].
    pub api_port: u16,
    /// Base working directory (already expanded, no `~`).
    pub cwd: PathBuf,
    /// Data directory, already joined onto `cwd` and created on disk.
    pub data_dir: PathBuf,
    /// Log-file directory, already joined onto `cwd` and created on disk.
    pub logs_dir: PathBuf,
}

/// Load settings from the process environment.
///
/// `.env` loading happens earlier in startup; dotenvy never overrides
/// variables that are already set, so the real environment wins over the
/// file.
pub fn load() -> Result<Config, AppError> {
    load_from_vars(env::vars())
}

/// Inner loader over injected variables.
/// Tests pass their own pairs instead of mutating the process environment.
pub fn load_from_vars<I, K, V>(vars: I) -> Result<Config, AppError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .filter_map(|(k, v)| {
            let key = k.as_ref().to_ascii_lowercase();
            KNOWN_KEYS.contains(&key.as_str()).then(|| (key, v.into()))
        })
        .collect();

    let debug = match vars.get("debug") {
        Some(raw) => parse_bool("debug", raw)?,
        None => false,
    };

    let log_level = match vars.get("log_level") {
        Some(raw) => raw.parse()?,
        None => LogLevel::Info,
    };

    let api_host = vars
        .get("api_host")
        .cloned()
        .unwrap_or_else(|| "0.0.0.0".to_string());

    let api_port = match vars.get("api_port") {
        Some(raw) => parse_port(raw)?,
        None => 8000,
    };

    let cwd = match vars.get("cwd") {
        Some(raw) if !raw.is_empty() => expand_home(raw),
        _ => {
            return Err(AppError::Config(
                "cwd: missing required field (base working directory)".into(),
            ));
        }
    };

    let data_dir = cwd.join(vars.get("data_dir").map(String::as_str).unwrap_or("data"));
    let logs_dir = cwd.join(vars.get("logs_dir").map(String::as_str).unwrap_or("logs"));

    // Idempotent: pre-existing directories are left untouched.
    for dir in [&data_dir, &logs_dir] {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::Config(format!("cannot create {}: {e}", dir.display())))?;
    }

    Ok(Config {
        debug,
        log_level,
        api_host,
        api_port,
        cwd,
        data_dir,
        logs_dir,
    })
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{field}: {raw:?} is not a boolean"
        ))),
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    let port: u16 = raw.parse().map_err(|_| {
        AppError::Config(format!("api_port: {raw:?} is not an integer in [1, 65535]"))
    })?;
    if port == 0 {
        return Err(AppError::Config("api_port: 0 is outside [1, 65535]".into()));
    }
    Ok(port)
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — plain defaults, no directory side effects.
#[cfg(test)]
impl Config {
    pub fn test_default(cwd: &std::path::Path) -> Self {
        Self {
            debug: false,
            log_level: LogLevel::Info,
            api_host: "0.0.0.0".into(),
            api_port: 8000,
            cwd: cwd.to_path_buf(),
            data_dir: cwd.join("data"),
            logs_dir: cwd.join("logs"),
        }
    }
}
