use tracing::warn;

pub const DEFAULT_DB_PATH: &str = "./readnext.db";
pub const DEFAULT_STRATEGY: &str = "popular";
pub const DEFAULT_LIMIT: usize = 8;

/// Runtime settings, read from `READNEXT_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub default_strategy: String,
    pub default_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            default_strategy: DEFAULT_STRATEGY.into(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys keep their defaults;
    /// an unparseable limit is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let default_limit = match lookup("READNEXT_LIMIT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid READNEXT_LIMIT, using default");
                defaults.default_limit
            }),
            None => defaults.default_limit,
        };
        Self {
            db_path: lookup("READNEXT_DB").unwrap_or(defaults.db_path),
            default_strategy: lookup("READNEXT_DEFAULT_STRATEGY")
                .unwrap_or(defaults.default_strategy),
            default_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.db_path, DEFAULT_DB_PATH);
        assert_eq!(cfg.default_strategy, "popular");
        assert_eq!(cfg.default_limit, 8);
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("READNEXT_DB", "/tmp/x.db"),
            ("READNEXT_DEFAULT_STRATEGY", "hybrid"),
            ("READNEXT_LIMIT", " 12 "),
        ]));
        assert_eq!(cfg.db_path, "/tmp/x.db");
        assert_eq!(cfg.default_strategy, "hybrid");
        assert_eq!(cfg.default_limit, 12);
    }

    #[test]
    fn test_bad_limit_falls_back() {
        let cfg = Config::from_lookup(lookup_from(&[("READNEXT_LIMIT", "lots")]));
        assert_eq!(cfg.default_limit, DEFAULT_LIMIT);
    }
}
