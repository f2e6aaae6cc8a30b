use catalog::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("CATALOG_PROFILE");
        env::remove_var("CATALOG_API_BIND_ADDR");
        env::remove_var("CATALOG_LOG_LEVEL");
        env::remove_var("CATALOG_RACING_DATABASE_URL");
        env::remove_var("CATALOG_SEED_ROW_COUNT");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.racing_database_url, "sqlite://racing.db?mode=rwc");
    assert_eq!(cfg.sports_database_url, "sqlite://sports.db?mode=rwc");
    assert_eq!(cfg.seed_row_count, 100);
    cfg.bind_addr().expect("default bind addr parses");
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "CATALOG_API_BIND_ADDR=127.0.0.1:3000\n");
    write_env_file(
        &temp_dir,
        ".env.test",
        "CATALOG_API_BIND_ADDR=192.168.0.10:5000\nCATALOG_SEED_ROW_COUNT=7\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "CATALOG_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "CATALOG_PROFILE=test\nCATALOG_API_BIND_ADDR=127.0.0.1:4000\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    assert_eq!(cfg.seed_row_count, 7);
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "CATALOG_API_BIND_ADDR=127.0.0.1:3000\nCATALOG_RACING_DATABASE_URL=sqlite://from-file.db\n",
    );

    unsafe {
        env::set_var("CATALOG_API_BIND_ADDR", "0.0.0.0:9090");
        env::set_var("CATALOG_RACING_DATABASE_URL", "sqlite::memory:");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:9090");
    assert_eq!(cfg.racing_database_url, "sqlite::memory:");

    clear_env();
}

#[test]
fn invalid_bind_addr_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("CATALOG_API_BIND_ADDR", "not-an-addr");
    }
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("invalid bind addr should fail");
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    assert!(format!("{}", err).contains("invalid api bind address"));

    clear_env();
}

#[test]
fn non_numeric_seed_count_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("CATALOG_SEED_ROW_COUNT", "plenty");
    }
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("non-numeric seed count should fail");
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));

    clear_env();
}
