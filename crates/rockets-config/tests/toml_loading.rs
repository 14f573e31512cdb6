//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use rockets_config::{ConfigError, RocketsConfig};

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
data_path = "data/launches.json"
enrichment_path = "data/prices.json"
default_limit = 3
"#,
        )?;

        let config: RocketsConfig = Figment::from(Serialized::defaults(RocketsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.data_path, "data/launches.json");
        assert_eq!(
            config.general.enrichment_path().unwrap().to_str(),
            Some("data/prices.json")
        );
        assert_eq!(config.general.default_limit, 3);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rockets")?;
        jail.create_file(
            ".rockets/config.toml",
            r#"
[report]
countries = ["USA", "Europe"]
"#,
        )?;

        let config = RocketsConfig::load().expect("config loads");
        assert_eq!(config.report.countries, vec!["USA", "Europe"]);
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn invalid_limit_in_project_file_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rockets")?;
        jail.create_file(".rockets/config.toml", "[general]\ndefault_limit = 0\n")?;

        let err = RocketsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "got: {err}");
        Ok(())
    });
}

#[test]
fn malformed_toml_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rockets")?;
        jail.create_file(".rockets/config.toml", "[general\n")?;

        let err = RocketsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "got: {err}");
        Ok(())
    });
}
