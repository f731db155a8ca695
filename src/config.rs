#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the remote API lives.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Application configuration, resolved once at startup and handed to the
/// component tree via context so nothing reads the environment ambiently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the build environment.
    ///
    /// `TOUCHLINE_API_BASE` is baked in at compile time (Trunk forwards it
    /// to rustc); when unset or blank the local development endpoint is
    /// used.
    pub fn from_env() -> Self {
        Self::from_override(option_env!("TOUCHLINE_API_BASE"))
    }

    /// Build a config from an optional base-URL override.
    pub fn from_override(base: Option<&str>) -> Self {
        match base {
            Some(value) if !value.trim().is_empty() => Self {
                api_base: value.trim().to_owned(),
            },
            _ => Self::default(),
        }
    }
}
