//! `.env` files next to the project directory feed the `ZOO_*` environment layer.
//!
//! Kept in its own test binary: dotenvy writes into the process environment.

use figment::Jail;
use zoo_config::ZooConfig;

#[test]
fn dotenv_in_project_root_is_applied() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_file(".env", "ZOO_STORE__DATA_FILE=park.json\n")?;

        let config = ZooConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.store.data_file, "park.json");
        Ok(())
    });
}
