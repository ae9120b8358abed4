//! Unit tests for CLI commands

use crate::cli::{demo_routes, run, Cli, Commands};
use crate::runtime_config::RouterConfig;
use clap::Parser;
use std::io::Write;

fn run_to_string(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn config_file(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_match_command_parses() {
    let cli = Cli::try_parse_from(["routemap", "match", "--path", "/users/1"]).unwrap();
    match cli.command {
        Commands::Match { method, path } => {
            assert_eq!(method, "GET");
            assert_eq!(path, "/users/1");
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn test_url_command_parses_params() {
    let cli = Cli::try_parse_from([
        "routemap", "url", "--name", "post_show", "-P", "user_id=1", "--param", "post_id=a=b",
        "--absolute",
    ])
    .unwrap();
    match cli.command {
        Commands::Url {
            name,
            params,
            absolute,
        } => {
            assert_eq!(name, "post_show");
            assert_eq!(
                params,
                vec![
                    ("user_id".to_string(), "1".to_string()),
                    ("post_id".to_string(), "a=b".to_string()),
                ]
            );
            assert!(absolute);
        }
        _ => panic!("Expected Url command"),
    }
}

#[test]
fn test_url_command_rejects_bad_param() {
    assert!(Cli::try_parse_from(["routemap", "url", "--name", "x", "-P", "novalue"]).is_err());
    assert!(Cli::try_parse_from(["routemap", "url", "--name", "x", "-P", "=v"]).is_err());
}

#[test]
fn test_demo_routes_are_valid() {
    let routes = demo_routes(&RouterConfig::default()).unwrap();
    assert!(routes.get("user_show").is_some());
    assert_eq!(routes.all()[0].uri(), "/");
}

#[test]
fn test_run_match() {
    let file = config_file("base_url: https://example.com\n");
    let config = file.path().to_str().unwrap();

    let out = run_to_string(&["routemap", "-c", config, "match", "-p", "/users/42?x=1"]).unwrap();
    assert_eq!(out, "GET /users/42 -> get_user [user_show] params: {id=42}\n");

    let out = run_to_string(&["routemap", "-c", config, "match", "-p", "/users/me"]).unwrap();
    assert_eq!(out, "GET /users/me -> current_user [user_me] params: {}\n");

    let out = run_to_string(&["routemap", "-c", config, "match", "-m", "PATCH", "-p", "/users/1"])
        .unwrap();
    assert_eq!(out, "PATCH /users/1 -> no match\n");
}

#[test]
fn test_run_url() {
    let file = config_file("base_url: https://example.com\nbase_path: /api\n");
    let config = file.path().to_str().unwrap();

    let out = run_to_string(&[
        "routemap", "--config", config, "url", "--name", "user_show", "-P", "id=7", "--absolute",
    ])
    .unwrap();
    assert_eq!(out, "https://example.com/api/users/7\n");

    let err = run_to_string(&["routemap", "--config", config, "url", "--name", "user_show"])
        .unwrap_err();
    assert!(err.to_string().contains("missing value for parameter 'id'"));
}

#[test]
fn test_run_routes_lists_in_order() {
    let file = config_file("");
    let config = file.path().to_str().unwrap();
    let out = run_to_string(&["routemap", "routes", "--config", config]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("root_handler"));
    assert!(lines[4].contains("/users/me"));
}

#[test]
fn test_run_invalid_method() {
    let file = config_file("");
    let config = file.path().to_str().unwrap();
    let err = run_to_string(&["routemap", "-c", config, "match", "-m", "G T", "-p", "/"]).unwrap_err();
    assert!(err.to_string().contains("invalid HTTP method"));
}
