//! Where raw variable values come from

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::Hash;

/// A source of raw variable values.
///
/// `None` and `Some("")` are treated the same by the parser: a variable that
/// is set to the empty string cannot be told apart from one that is unset.
pub trait Lookup {
    /// Raw value for `key`, if the source has one
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The current process environment.
///
/// Values that are not valid UTF-8 are returned lossily converted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<K, V> Lookup for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.as_ref().to_string())
    }
}

impl<K, V> Lookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.as_ref().to_string())
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_lookup() {
        let vars = HashMap::from([("PORT", "8080")]);
        assert_eq!(vars.lookup("PORT").as_deref(), Some("8080"));
        assert_eq!(vars.lookup("HOST"), None);
    }

    #[test]
    fn test_owned_btree_lookup() {
        let mut vars = BTreeMap::new();
        vars.insert("HOST".to_string(), String::from("localhost"));
        assert_eq!((&vars).lookup("HOST").as_deref(), Some("localhost"));
    }

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("ENVREG_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.lookup("ENVREG_SOURCE_TEST").as_deref(),
            Some("value")
        );

        env::remove_var("ENVREG_SOURCE_TEST");
        assert_eq!(ProcessEnv.lookup("ENVREG_SOURCE_TEST"), None);
    }
}
