use config::{Config, Environment, File, FileFormat};
use failure::ResultExt;
use serde::Deserialize;
use slog_scope::{info, warn};
use std::path::PathBuf;

use crate::accessors::SearchOptions;
use crate::Error;

/// Program settings. Configuration files keep the accessor options in a
/// table under the 'query' key:
///
/// ```toml
/// [query]
/// query_fields = ["label", "name"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub query: SearchOptions,
}

impl Settings {
    /// Reads the settings from `<config_dir>/default.toml`, then from
    /// `<config_dir>/<name>.toml` when a name is given. Without a config
    /// directory, the default configuration embedded at compile time is
    /// used. Environment variables prefixed with HUGINN_ override the files
    /// in all cases.
    pub fn new(config_dir: &Option<PathBuf>, name: &Option<String>) -> Result<Self, Error> {
        let mut config = Config::new();
        let config_dir = config_dir.clone();
        match config_dir {
            Some(mut dir) => {
                dir.push("default");
                // Start off by merging in the "default" configuration file
                if let Some(path) = dir.to_str() {
                    info!("using configuration from {}", path);
                    config.merge(File::with_name(path)).with_context(|e| {
                        format!(
                            "Could not merge default configuration from file {}: {}",
                            path, e
                        )
                    })?;
                } else {
                    return Err(failure::err_msg(format!(
                        "Could not read default settings in '{}'",
                        dir.display()
                    )));
                }

                dir.pop(); // remove the default
                           // If we provided a special configuration, merge it.
                if let Some(name) = name {
                    if name == "default" {
                        warn!("settings name 'default' ignored, it is merged in all cases");
                    } else {
                        dir.push(name);

                        if let Some(path) = dir.to_str() {
                            info!("using configuration from {}", path);
                            config
                                .merge(File::with_name(path).required(true))
                                .with_context(|e| {
                                    format!(
                                        "Could not merge {} configuration in file {}: {}",
                                        name, path, e
                                    )
                                })?;
                        } else {
                            return Err(failure::err_msg(format!(
                                "Could not read configuration for '{}'",
                                name,
                            )));
                        }
                        dir.pop();
                    }
                }
            }
            None => {
                if name.is_some() {
                    // A named configuration can only be read from a config
                    // directory, so warn and leave with an error.
                    warn!("settings option used without the 'config_dir' option. Please set the config directory with --config-dir.");
                    return Err(failure::err_msg(String::from(
                        "Could not build program settings",
                    )));
                }
                config
                    .merge(File::from_str(
                        include_str!("../config/default.toml"),
                        FileFormat::Toml,
                    ))
                    .with_context(|e| {
                        format!(
                            "Could not merge default configuration from file at compile time: {}",
                            e
                        )
                    })?;
            }
        }

        // Settings from the environment override the files, eg
        // HUGINN_QUERY__TITLE=Search (a double underscore separates the keys).
        config
            .merge(Environment::with_prefix("HUGINN").separator("__"))
            .with_context(|e| format!("Could not merge environment settings: {}", e))?;

        // You can deserialize (and thus freeze) the entire configuration as
        config.try_into().map_err(|e| {
            failure::err_msg(format!(
                "Could not generate settings from configuration: {}",
                e
            ))
        })
    }

    /// Parses settings directly from a toml string, for embedded or test
    /// configurations.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        toml::from_str(content)
            .map_err(|e| failure::err_msg(format!("Could not parse settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_ok_without_config_dir() {
        let settings = Settings::new(&None, &None);
        assert!(
            settings.is_ok(),
            "Expected Ok, Got an Err: {}",
            settings.unwrap_err().to_string()
        );
        assert_eq!(settings.unwrap().query.query_fields, vec!["_all"]);
    }

    #[test]
    fn should_return_ok_with_config_dir() {
        let config_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config");
        let settings = Settings::new(&Some(config_dir), &None);
        assert!(
            settings.is_ok(),
            "Expected Ok, Got an Err: {}",
            settings.unwrap_err().to_string()
        );
        assert_eq!(settings.unwrap().query.query_fields, vec!["_all"]);
    }

    #[test]
    fn should_merge_the_named_configuration() {
        let config_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config");
        let settings = Settings::new(&Some(config_dir), &Some("testing".to_string()));
        assert!(
            settings.is_ok(),
            "Expected Ok, Got an Err: {}",
            settings.unwrap_err().to_string()
        );
        let query = settings.unwrap().query;
        assert_eq!(query.query_fields, vec!["label", "name"]);
        assert_eq!(query.title.as_deref(), Some("Search"));
        assert_eq!(
            query.prefix_query_fields,
            Some(vec!["label.prefix".to_string()])
        );
    }

    #[test]
    fn should_return_err_with_name_but_no_config_dir() {
        let settings = Settings::new(&None, &Some("testing".to_string()));
        assert!(settings.is_err());
    }

    #[test]
    fn should_override_files_with_environment_variables() {
        // the only test mutating the environment; no other test asserts
        // this key, so a concurrent Settings::new cannot be tripped up
        std::env::set_var("HUGINN_QUERY__ADD_TO_FILTERS", "true");
        let settings = Settings::new(&None, &None);
        std::env::remove_var("HUGINN_QUERY__ADD_TO_FILTERS");

        assert!(
            settings.is_ok(),
            "Expected Ok, Got an Err: {}",
            settings.unwrap_err().to_string()
        );
        let query = settings.unwrap().query;
        assert!(query.add_to_filters);
        // the rest still comes from the embedded default file
        assert_eq!(query.query_fields, vec!["_all"]);
    }

    #[test]
    fn should_parse_settings_from_toml() {
        let settings = Settings::from_toml(
            r#"
            [query]
            query_fields = ["name"]
            add_to_filters = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.query.query_fields, vec!["name"]);
        assert!(settings.query.add_to_filters);
    }
}
