use super::*;

// =============================================================
// Backend
// =============================================================

#[test]
fn backend_default_is_local() {
    assert_eq!(Backend::default(), Backend::Local);
}

#[test]
fn backend_parses_known_values_case_insensitively() {
    assert_eq!("local".parse::<Backend>().unwrap(), Backend::Local);
    assert_eq!(" Remote ".parse::<Backend>().unwrap(), Backend::Remote);
}

#[test]
fn backend_rejects_unknown_value() {
    let err = "cloud".parse::<Backend>().unwrap_err();
    assert!(err.contains("unknown backend 'cloud'"));
}

#[test]
fn backend_display_matches_as_str() {
    assert_eq!(Backend::Local.to_string(), "local");
    assert_eq!(Backend::Remote.to_string(), "remote");
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn client_config_default_uses_local_storage_and_tasks_endpoint() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.backend, Backend::Local);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn meta_content_round_trips() {
    let cfg = ClientConfig { backend: Backend::Remote, api_base: "https://todo.example.com/api/list/".to_owned() };
    let raw = cfg.to_meta_content();
    assert_eq!(raw, r#"{"backend":"remote","api_base":"https://todo.example.com/api/list/"}"#);
    assert_eq!(ClientConfig::from_meta_content(&raw), cfg);
}

#[test]
fn meta_content_fills_missing_fields_with_defaults() {
    let cfg = ClientConfig::from_meta_content(r#"{"backend":"remote"}"#);
    assert_eq!(cfg.backend, Backend::Remote);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn unreadable_meta_content_yields_defaults() {
    assert_eq!(ClientConfig::from_meta_content("not json"), ClientConfig::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_outside_browser_is_default() {
    assert_eq!(ClientConfig::detect(), ClientConfig::default());
}
