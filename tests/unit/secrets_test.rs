//! Tests for redeploy hook resolution

use std::fs;

use guardian::adapters::resolve_hooks;
use guardian::adapters::secrets::load_secrets_file;
use guardian::core::models::DeployHooks;
use tempfile::TempDir;

fn env_hooks() -> DeployHooks {
    DeployHooks {
        render: "https://render.example/env".to_string(),
        netlify: "https://netlify.example/env".to_string(),
        vercel: "https://vercel.example/env".to_string(),
    }
}

#[test]
fn secrets_file_takes_precedence_per_hook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("secrets.json");
    fs::write(&path, r#"{"render": "https://render.example/file"}"#).unwrap();

    let hooks = resolve_hooks(Some(&path), &env_hooks());
    assert_eq!(hooks.render, "https://render.example/file");
    assert_eq!(hooks.netlify, "https://netlify.example/env");
    assert_eq!(hooks.vercel, "https://vercel.example/env");
}

#[test]
fn empty_file_value_falls_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("secrets.json");
    fs::write(&path, r#"{"render": "", "netlify": "https://netlify.example/file"}"#).unwrap();

    let hooks = resolve_hooks(Some(&path), &env_hooks());
    assert_eq!(hooks.render, "https://render.example/env");
    assert_eq!(hooks.netlify, "https://netlify.example/file");
}

#[test]
fn null_file_value_falls_back_for_that_hook_only() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("secrets.json");
    fs::write(&path, r#"{"render": "https://render.example/file", "netlify": null}"#).unwrap();

    let hooks = resolve_hooks(Some(&path), &env_hooks());
    assert_eq!(hooks.render, "https://render.example/file");
    assert_eq!(hooks.netlify, "https://netlify.example/env");
    assert_eq!(hooks.vercel, "https://vercel.example/env");

    let without_fallbacks = resolve_hooks(Some(&path), &DeployHooks::default());
    assert_eq!(without_fallbacks.render, "https://render.example/file");
    assert!(without_fallbacks.netlify.is_empty());
}

#[test]
fn no_secrets_file_uses_fallbacks() {
    assert_eq!(resolve_hooks(None, &env_hooks()), env_hooks());
}

#[test]
fn missing_or_malformed_file_is_ignored() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.json");
    assert!(load_secrets_file(&missing).is_none());
    assert_eq!(resolve_hooks(Some(&missing), &env_hooks()), env_hooks());

    let broken = temp.path().join("broken.json");
    fs::write(&broken, "render=https://x").unwrap();
    assert!(load_secrets_file(&broken).is_none());
    assert_eq!(resolve_hooks(Some(&broken), &DeployHooks::default()), DeployHooks::default());
}
