use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    /// Reads the process environment. A `--profile` given on the command line
    /// wins over the `PROFILE` variable.
    pub fn from_env_with_profile(profile: Option<String>) -> Self {
        Self::from_lookup(|key| match (key, &profile) {
            ("PROFILE", Some(p)) => Some(p.clone()),
            _ => env::var(key).ok(),
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("PROFILE").unwrap_or_else(|| "default".to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            if profile == "default" {
                "sqlite://bezerras.db?mode=rwc".to_string()
            } else {
                format!("sqlite://bezerras_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            seed_demo: lookup("SEED_DEMO")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.profile, "default");
        assert_eq!(config.database_url, "sqlite://bezerras.db?mode=rwc");
        assert!(!config.seed_demo);
    }

    #[test]
    fn test_profile_selects_database_file() {
        let config = Config::from_lookup(lookup_from(&[("PROFILE", "lunch")]));
        assert_eq!(config.database_url, "sqlite://bezerras_lunch.db?mode=rwc");
    }

    #[test]
    fn test_explicit_database_url_wins() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROFILE", "lunch"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.profile, "lunch");
    }

    #[test]
    fn test_seed_flag() {
        assert!(Config::from_lookup(lookup_from(&[("SEED_DEMO", "1")])).seed_demo);
        assert!(!Config::from_lookup(lookup_from(&[("SEED_DEMO", "false")])).seed_demo);
        assert!(!Config::from_lookup(lookup_from(&[("SEED_DEMO", "0")])).seed_demo);
    }
}
