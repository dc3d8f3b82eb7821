use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__SITE_TEST_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__SITE_TEST_EP_VALID__", " 8080 ") };
    let val: u16 = env_parse("__SITE_TEST_EP_VALID__", 0);
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__SITE_TEST_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__SITE_TEST_EP_INVALID__", "not-a-port") };
    let val: u16 = env_parse("__SITE_TEST_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__SITE_TEST_EP_INVALID__") };
}

// =============================================================================
// env_path
// =============================================================================

#[test]
fn env_path_blank_uses_default() {
    unsafe { std::env::set_var("__SITE_TEST_PATH_BLANK__", "  ") };
    assert_eq!(env_path("__SITE_TEST_PATH_BLANK__", "dist"), PathBuf::from("dist"));
    unsafe { std::env::remove_var("__SITE_TEST_PATH_BLANK__") };
}

#[test]
fn env_path_present_overrides_default() {
    unsafe { std::env::set_var("__SITE_TEST_PATH_SET__", "/tmp/site") };
    assert_eq!(env_path("__SITE_TEST_PATH_SET__", "dist"), PathBuf::from("/tmp/site"));
    unsafe { std::env::remove_var("__SITE_TEST_PATH_SET__") };
}

// =============================================================================
// ExportConfig
// =============================================================================

#[test]
fn defaults_match_constants() {
    let config = ExportConfig::default();
    assert_eq!(config.out_dir, PathBuf::from("dist"));
    assert_eq!(config.assets_dir, PathBuf::from("public"));
    assert_eq!(config.pkg_dir, PathBuf::from("target/site/pkg"));
    assert_eq!(config.preview_port, 3000);
    assert_eq!(config.manifest, PathBuf::from("Cargo.toml"));
}
