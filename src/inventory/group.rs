use super::error::InventoryError;
use super::manager::InventoryCore;
use super::output::GroupDocument;
use super::utils::{lock, remove_all};
use super::{ALL_GROUP, UNGROUPED_GROUP};
use indexmap::IndexMap;
use log::debug;
use std::sync::{Mutex, Weak};

#[derive(Debug, Default)]
struct GroupState {
    hosts: Vec<String>,
    vars: IndexMap<String, String>,
    children: Vec<String>,
}

#[derive(Debug)]
pub struct Group {
    name: String,
    state: Mutex<GroupState>,
    inventory: Weak<InventoryCore>,
}

impl Group {
    pub(crate) fn new(name: &str, inventory: Weak<InventoryCore>) -> Self {
        Group {
            name: name.to_string(),
            state: Mutex::new(GroupState::default()),
            inventory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for `all` and `ungrouped`, whose membership the inventory maintains itself.
    pub fn is_implicit(&self) -> bool {
        self.name == ALL_GROUP || self.name == UNGROUPED_GROUP
    }

    /// Adds a registered host to this group, taking it out of `ungrouped`.
    ///
    /// # Errors
    /// - [`InventoryError::UnknownHost`] if the host was never passed to
    ///   [`Inventory::add_host`](super::Inventory::add_host).
    /// - [`InventoryError::ReservedGroup`] when called on `all` or `ungrouped`.
    /// - [`InventoryError::InventoryDropped`] if the owning inventory no longer exists.
    ///
    /// Adding a host that is already a member is a no-op.
    pub fn add_host(&self, hostname: &str) -> Result<(), InventoryError> {
        if self.is_implicit() {
            return Err(InventoryError::ReservedGroup(self.name.clone()));
        }

        let inventory = self
            .inventory
            .upgrade()
            .ok_or_else(|| InventoryError::InventoryDropped(self.name.clone()))?;

        let registry = lock(&inventory.registry);
        if !registry.hosts.contains_key(hostname) {
            return Err(InventoryError::UnknownHost(hostname.to_string()));
        }

        let mut state = lock(&self.state);
        if state.hosts.iter().any(|h| h == hostname) {
            debug!("Host '{hostname}' is already a member of '{}'", self.name);
            return Ok(());
        }

        if remove_all(&mut lock(&inventory.ungrouped.state).hosts, hostname) {
            debug!("Host '{hostname}' removed from '{UNGROUPED_GROUP}'");
        }

        debug!("Adding host '{hostname}' to '{}'", self.name);
        state.hosts.push(hostname.to_string());

        Ok(())
    }

    /// Sets `key` to `value`, replacing any previous value for the same key.
    pub fn add_variable(&self, key: &str, value: &str) {
        debug!("Setting variable '{key}' on group '{}'", self.name);
        lock(&self.state)
            .vars
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_variable(&self, key: &str) -> Option<String> {
        lock(&self.state).vars.get(key).cloned()
    }

    /// Snapshot of the member host names in insertion order.
    pub fn hosts(&self) -> Vec<String> {
        lock(&self.state).hosts.clone()
    }

    pub fn vars(&self) -> IndexMap<String, String> {
        lock(&self.state).vars.clone()
    }

    /// Child group names; only ever populated for `all`.
    pub fn children(&self) -> Vec<String> {
        lock(&self.state).children.clone()
    }

    pub(crate) fn push_host(&self, hostname: &str) {
        lock(&self.state).hosts.push(hostname.to_string());
    }

    pub(crate) fn add_child(&self, group_name: &str) {
        let mut state = lock(&self.state);
        if !state.children.iter().any(|c| c == group_name) {
            state.children.push(group_name.to_string());
        }
    }

    /// Consistent copy of members, variables and children taken under one lock.
    pub(crate) fn to_document(&self) -> GroupDocument {
        let state = lock(&self.state);
        GroupDocument {
            vars: state.vars.clone(),
            hosts: state.hosts.clone(),
            children: state.children.clone(),
        }
    }
}
