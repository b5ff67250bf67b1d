use crate::inventory::utils::lock;
use indexmap::IndexMap;
use log::debug;
use std::sync::Mutex;

#[derive(Debug)]
pub struct Host {
    name: String,
    vars: Mutex<IndexMap<String, String>>,
}

impl Host {
    pub(crate) fn new(name: &str) -> Self {
        Host {
            name: name.to_string(),
            vars: Mutex::new(IndexMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets `key` to `value`, replacing any previous value for the same key.
    pub fn add_variable(&self, key: &str, value: &str) {
        debug!("Setting variable '{key}' on host '{}'", self.name);
        lock(&self.vars).insert(key.to_string(), value.to_string());
    }

    pub fn get_variable(&self, key: &str) -> Option<String> {
        lock(&self.vars).get(key).cloned()
    }

    /// Snapshot of the host's variables in first-insertion order.
    pub fn vars(&self) -> IndexMap<String, String> {
        lock(&self.vars).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_variable_last_write_wins() {
        let host = Host::new("comp01");
        host.add_variable("k", "v1");
        host.add_variable("k", "v2");

        let vars = host.vars();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("k").map(String::as_str), Some("v2"));
    }

    #[test]
    fn test_vars_keep_insertion_order() {
        let host = Host::new("comp01");
        host.add_variable("zeta", "1");
        host.add_variable("alpha", "2");
        host.add_variable("zeta", "3");

        let vars = host.vars();
        let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(host.get_variable("zeta").as_deref(), Some("3"));
    }

    #[test]
    fn test_get_variable_missing() {
        let host = Host::new("comp01");
        assert_eq!(host.get_variable("nope"), None);
        assert_eq!(host.name(), "comp01");
    }
}
