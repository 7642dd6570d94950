use envreg::{Kind, Registry, VarError, HELP_HEADER};
use serial_test::serial;
use std::collections::HashMap;
use std::env;

fn cleanup_env(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_port_set_host_missing() {
    let vars = ["ENVREG_IT_PORT", "ENVREG_IT_HOST"];
    cleanup_env(&vars);
    env::set_var("ENVREG_IT_PORT", "8080");

    let mut registry = Registry::new();
    let port = registry.int("ENVREG_IT_PORT", true, 0, "");
    let host = registry.string("ENVREG_IT_HOST", true, "", "");

    let err = registry.parse().unwrap_err();
    assert!(err.to_string().contains("ENVREG_IT_HOST"));
    assert_eq!(
        err.failures(),
        &[VarError::Missing {
            name: "ENVREG_IT_HOST".to_string()
        }]
    );
    assert_eq!(port.get(), 8080);
    assert_eq!(host.get(), "");

    cleanup_env(&vars);
}

#[test]
#[serial]
fn test_timeout_default() {
    cleanup_env(&["ENVREG_IT_TIMEOUT"]);

    let mut registry = Registry::new();
    let timeout = registry.float64("ENVREG_IT_TIMEOUT", false, 30.0, "request timeout");

    registry.parse().unwrap();
    assert_eq!(timeout.get(), 30.0);
}

#[test]
#[serial]
fn test_parse_twice_follows_environment() {
    let vars = ["ENVREG_IT_DEBUG"];
    env::set_var("ENVREG_IT_DEBUG", "true");

    let mut registry = Registry::new();
    let debug = registry.bool("ENVREG_IT_DEBUG", true, false, "");

    registry.parse().unwrap();
    assert!(debug.get());

    env::set_var("ENVREG_IT_DEBUG", "FALSE");
    registry.parse().unwrap();
    assert!(!debug.get());

    cleanup_env(&vars);
}

#[test]
#[serial]
fn test_required_missing_keeps_zero_value() {
    cleanup_env(&["ENVREG_IT_WORKERS"]);

    let mut registry = Registry::new();
    let workers = registry.int("ENVREG_IT_WORKERS", true, 4, "");

    assert!(registry.parse().is_err());
    assert_eq!(workers.get(), 0);
}

#[test]
fn test_integer_literals() {
    for literal in ["0", "1", "-1", "8080", "+15", "-2147483648"] {
        let mut registry = Registry::new();
        let value = registry.int("N", true, 0, "");
        registry
            .parse_from(&HashMap::from([("N", literal)]))
            .unwrap();
        assert_eq!(value.get(), literal.parse::<isize>().unwrap());
    }
}

#[test]
fn test_non_integer_strings() {
    for raw in ["abc", "1.0", "1e3", "--1", "8080 "] {
        let mut registry = Registry::new();
        registry.int("WORKERS", true, 0, "");

        let err = registry
            .parse_from(&HashMap::from([("WORKERS", raw)]))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("WORKERS"), "{}", message);
        assert!(message.contains(Kind::Int.as_str()), "{}", message);
    }
}

#[test]
fn test_help_on_empty_registry() {
    assert_eq!(Registry::new().help(), format!("{}\n", HELP_HEADER));
}
