//! Process wiring: settings, pool construction and logging setup.

use std::ffi::OsString;

use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::rstest;
use taskdesk::{
    config::{ConfigError, TaskdeskSettings},
    persistence::{PoolSetupError, build_pool},
    telemetry::init_tracing,
};

#[rstest]
fn pool_requires_a_database_url() {
    let _guard = lock_env([("TASKDESK_DATABASE_URL", None::<String>)]);
    let settings = TaskdeskSettings::load_from_iter([OsString::from("taskdesk")])
        .expect("config should load");

    let result = build_pool(&settings);

    assert!(matches!(
        result,
        Err(PoolSetupError::Config(ConfigError::MissingDatabaseUrl))
    ));
}

#[rstest]
fn tracing_can_be_initialised_more_than_once() {
    init_tracing("info");
    init_tracing("debug");
}
