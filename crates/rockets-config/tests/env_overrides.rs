use figment::Jail;
use rockets_config::RocketsConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ROCKETS_GENERAL__DATA_PATH", "/srv/launches.json");
        jail.set_env("ROCKETS_GENERAL__DEFAULT_LIMIT", "5");

        let config = RocketsConfig::load().expect("config loads");
        assert_eq!(config.general.data_path, "/srv/launches.json");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rockets")?;
        jail.create_file(".rockets/config.toml", "[general]\ndefault_limit = 7\n")?;
        jail.set_env("ROCKETS_GENERAL__DEFAULT_LIMIT", "2");

        let config = RocketsConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 2);
        Ok(())
    });
}

#[test]
fn env_country_list_parses_as_array() {
    Jail::expect_with(|jail| {
        jail.set_env("ROCKETS_REPORT__COUNTRIES", "[USA, Europe]");

        let config = RocketsConfig::load().expect("config loads");
        assert_eq!(config.report.countries, vec!["USA", "Europe"]);
        Ok(())
    });
}
