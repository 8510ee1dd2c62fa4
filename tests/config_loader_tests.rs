use biztime::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const KEYS: &[&str] = &[
    "BIZTIME_PROFILE",
    "BIZTIME_API_BIND_ADDR",
    "BIZTIME_LOG_LEVEL",
    "BIZTIME_LOG_FORMAT",
    "BIZTIME_DATABASE_URL",
    "BIZTIME_DB_USER",
    "BIZTIME_DB_PASS",
    "BIZTIME_DB_HOST",
    "BIZTIME_DB_PORT",
    "BIZTIME_DB_NAME",
    "BIZTIME_DB_MAX_CONNECTIONS",
    "BIZTIME_DB_ACQUIRE_TIMEOUT_MS",
];

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
    for key in KEYS {
        unsafe {
            env::remove_var(key);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

fn loader_for(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_base_dir(PathBuf::from(dir.path()))
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.db_name, "biztime");
    assert_eq!(cfg.db_port, 5432);
    cfg.bind_addr().expect("default bind addr parses");
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "BIZTIME_API_BIND_ADDR=127.0.0.1:3000\n");
    write_env_file(
        &temp_dir,
        ".env.test",
        "BIZTIME_API_BIND_ADDR=192.168.0.10:5000\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "BIZTIME_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "BIZTIME_PROFILE=test\nBIZTIME_API_BIND_ADDR=127.0.0.1:4000\n",
    );

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    clear_env();
}

#[test]
fn test_profile_targets_test_database() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("BIZTIME_PROFILE", "test");
    }

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_for(&temp_dir).load().expect("config loads");

    assert!(cfg.is_test());
    assert_eq!(cfg.db_name, "biztime_test");
    assert!(cfg.database_url().unwrap().ends_with("/biztime_test"));
    clear_env();
}

#[test]
fn explicit_db_name_overrides_test_default() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "BIZTIME_PROFILE=test\nBIZTIME_DB_NAME=ci_biztime\n",
    );

    let cfg = loader_for(&temp_dir).load().expect("config loads");
    assert_eq!(cfg.db_name, "ci_biztime");
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
        "BIZTIME_API_BIND_ADDR=127.0.0.1:3000\nBIZTIME_DB_USER=from_file\n",
    );

    unsafe {
        env::set_var("BIZTIME_API_BIND_ADDR", "0.0.0.0:9090");
        env::set_var("BIZTIME_DB_USER", "from_env");
    }

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with env override");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:9090");
    assert_eq!(cfg.db_user.as_deref(), Some("from_env"));

    clear_env();
}

#[test]
fn invalid_bind_addr_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("BIZTIME_API_BIND_ADDR", "not-an-addr");
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_for(&temp_dir)
        .load()
        .expect_err("invalid bind addr should fail");
    assert!(format!("{}", err).contains("invalid api bind address"));

    clear_env();
}

#[test]
fn non_numeric_port_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("BIZTIME_DB_PORT", "five");
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_for(&temp_dir)
        .load()
        .expect_err("non-numeric port should fail");
    assert!(matches!(err, ConfigError::InvalidNumber { ref key, .. } if key == "DB_PORT"));

    clear_env();
}

#[test]
fn out_of_range_pool_size_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("BIZTIME_DB_MAX_CONNECTIONS", "0");
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_for(&temp_dir)
        .load()
        .expect_err("zero pool size should fail");
    assert!(matches!(err, ConfigError::InvalidMaxConnections { value: 0 }));

    clear_env();
}
