use super::load::normalize_root;
use super::schema::*;
use crate::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn settings_load_from_toml_file() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("TESLA_MUSIC__ADD_INDEX_PREFIX");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        dir.path(),
        "config.toml",
        r#"
source_directories = ["/music/a", "/music/b"]
target_directory = "/media/usb"
file_whitelist = ["\\.mp3$"]
file_blacklist = ["/podcasts/"]
extensions_whitelist = ["flac"]
add_index_prefix = true
follow_links = false
"#,
    );

    let s = Settings::load(&cfg_path).unwrap();
    assert_eq!(
        s.source_directories,
        vec![PathBuf::from("/music/a"), PathBuf::from("/music/b")]
    );
    assert_eq!(s.target_directory, PathBuf::from("/media/usb"));
    assert_eq!(s.file_whitelist, vec![r"\.mp3$".to_string()]);
    assert_eq!(s.file_blacklist, vec!["/podcasts/".to_string()]);
    assert_eq!(s.extensions_whitelist, vec!["flac".to_string()]);
    assert!(s.add_index_prefix);
    assert!(!s.follow_links);
}

#[test]
fn settings_load_from_json_applies_defaults() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("TESLA_MUSIC__ADD_INDEX_PREFIX");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        dir.path(),
        "config.json",
        r#"{ "source_directories": "/music", "target_directory": "/media/usb" }"#,
    );

    let s = Settings::load(&cfg_path).unwrap();
    assert_eq!(s.source_directories, vec![PathBuf::from("/music")]);
    assert!(s.file_whitelist.is_empty());
    assert!(s.file_blacklist.is_empty());
    assert!(s.extensions_whitelist.is_empty());
    assert!(!s.add_index_prefix);
    assert!(s.follow_links);
}

#[test]
fn settings_load_fails_without_target_directory() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(dir.path(), "config.toml", "source_directories = [\"/music\"]\n");

    let err = Settings::load(&cfg_path).unwrap_err();
    assert!(matches!(err, Error::ConfigLoad(_)));
}

#[test]
fn settings_load_fails_with_empty_source_list() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        dir.path(),
        "config.toml",
        "source_directories = []\ntarget_directory = \"/media/usb\"\n",
    );

    let err = Settings::load(&cfg_path).unwrap_err();
    assert!(matches!(err, Error::Config(_) | Error::ConfigLoad(_)));
}

#[test]
fn settings_load_fails_for_missing_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    assert!(Settings::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(
        dir.path(),
        "config.toml",
        r#"
source_directories = ["/music"]
target_directory = "/media/usb"
add_index_prefix = false
"#,
    );

    let _g1 = EnvGuard::set("TESLA_MUSIC__ADD_INDEX_PREFIX", "true");

    let s = Settings::load(&cfg_path).unwrap();
    assert!(s.add_index_prefix);
}

#[test]
fn check_paths_rejects_missing_source_and_target() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("src");
    let target = dir.path().join("dst");

    let s = Settings::from_paths(source.clone(), target.clone());
    assert!(matches!(
        s.check_paths(),
        Err(Error::MissingPath { role: "source", .. })
    ));

    std::fs::create_dir(&source).unwrap();
    assert!(matches!(
        s.check_paths(),
        Err(Error::MissingPath { role: "target", .. })
    ));

    std::fs::create_dir(&target).unwrap();
    assert!(s.check_paths().is_ok());
}

#[test]
fn normalize_root_appends_separator_to_drive_letters() {
    assert_eq!(normalize_root(Path::new("E:")), PathBuf::from("E:\\"));
    assert_eq!(normalize_root(Path::new("/media/usb")), PathBuf::from("/media/usb"));
}
