use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()` so no other test mutates the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("ASSETS_DIR");
    }
}

#[test]
fn from_env_defaults() {
    let _env = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(cfg.assets_dir, None);
}

#[test]
fn from_env_parses_overrides() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("ASSETS_DIR", "/srv/portfolio/public");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.assets_dir, Some(PathBuf::from("/srv/portfolio/public")));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_blank_assets_dir_falls_back() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("ASSETS_DIR", "  ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.assets_dir, None);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_host_errors() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "not-an-ip");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid HOST"));

    unsafe { clear_server_env() };
}
