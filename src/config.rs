use serde::Serialize;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub graphql: GraphqlConfig,
}

/// Declarative GraphQL plugin settings, consumed unmodified by the host
/// framework. Nothing here executes — it is configuration data.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub shadow_crud: bool,
    pub playground_always: bool,
    pub default_limit: u64,
    pub max_limit: u64,
    pub introspection: bool,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        GraphqlConfig {
            enabled: true,
            endpoint: "/graphql".to_string(),
            shadow_crud: true,
            playground_always: true,
            default_limit: 100,
            max_limit: 1000,
            introspection: true,
        }
    }
}

impl GraphqlConfig {
    pub fn from_env() -> GraphqlConfig {
        GraphqlConfig {
            enabled: env_bool("GRAPHQL_ENABLED", true),
            introspection: env_bool("GRAPHQL_INTROSPECTION", true),
            ..Default::default()
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

impl Config {
    pub fn init() -> Config {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL wajib diisi di .env");

        Config {
            database_url,
            graphql: GraphqlConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_defaults_match_plugin_contract() {
        let cfg = GraphqlConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.endpoint, "/graphql");
        assert!(cfg.shadow_crud);
        assert_eq!(cfg.default_limit, 100);
        assert_eq!(cfg.max_limit, 1000);
        assert!(cfg.introspection);
    }

    #[test]
    fn graphql_config_serializes() {
        let json = serde_json::to_value(GraphqlConfig::default()).unwrap();
        assert_eq!(json["endpoint"], "/graphql");
        assert_eq!(json["max_limit"], 1000);
    }

    #[test]
    fn env_bool_parses_common_spellings() {
        // Unique key, nothing else reads it
        env::set_var("WARTA_TEST_FLAG", "false");
        assert!(!env_bool("WARTA_TEST_FLAG", true));
        env::set_var("WARTA_TEST_FLAG", "YES");
        assert!(env_bool("WARTA_TEST_FLAG", false));
        env::remove_var("WARTA_TEST_FLAG");
        assert!(env_bool("WARTA_TEST_FLAG", true));
    }
}
