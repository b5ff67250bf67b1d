use super::error::InventoryError;
use super::group::Group;
use super::host::Host;
use super::utils::lock;
use super::{ALL_GROUP, META_KEY, UNGROUPED_GROUP};
use indexmap::IndexMap;
use log::debug;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub(crate) struct Registry {
    pub(crate) hosts: IndexMap<String, Arc<Host>>,
    pub(crate) groups: IndexMap<String, Arc<Group>>,
}

/// State shared between an [`Inventory`] and the weak back-references held by its groups.
///
/// Lock order is `registry` -> target group -> `ungrouped` -> host. Nothing takes the
/// registry lock while holding a group or host lock.
#[derive(Debug)]
pub(crate) struct InventoryCore {
    pub(crate) registry: Mutex<Registry>,
    pub(crate) all: Arc<Group>,
    pub(crate) ungrouped: Arc<Group>,
}

/// Root container owning every host and group of one build session.
///
/// All methods take `&self`; wrap the inventory in an `Arc` to populate it from
/// several threads.
#[derive(Debug)]
pub struct Inventory {
    core: Arc<InventoryCore>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        let core = Arc::new_cyclic(|weak| {
            let all = Arc::new(Group::new(ALL_GROUP, weak.clone()));
            let ungrouped = Arc::new(Group::new(UNGROUPED_GROUP, weak.clone()));
            all.add_child(UNGROUPED_GROUP);

            let mut registry = Registry::default();
            registry
                .groups
                .insert(ALL_GROUP.to_string(), Arc::clone(&all));
            registry
                .groups
                .insert(UNGROUPED_GROUP.to_string(), Arc::clone(&ungrouped));

            InventoryCore {
                registry: Mutex::new(registry),
                all,
                ungrouped,
            }
        });

        Inventory { core }
    }

    pub(crate) fn core(&self) -> &InventoryCore {
        &self.core
    }

    /// Registers a new host and makes it a member of `all` and `ungrouped`.
    pub fn add_host(&self, name: &str) -> Result<Arc<Host>, InventoryError> {
        let mut registry = lock(&self.core.registry);

        if registry.hosts.contains_key(name) {
            return Err(InventoryError::DuplicateHost(name.to_string()));
        }

        debug!("Adding host '{name}'");

        let host = Arc::new(Host::new(name));
        self.core.all.push_host(name);
        self.core.ungrouped.push_host(name);
        registry.hosts.insert(name.to_string(), Arc::clone(&host));

        Ok(host)
    }

    pub fn get_host(&self, name: &str) -> Option<Arc<Host>> {
        lock(&self.core.registry).hosts.get(name).cloned()
    }

    /// Registers a new group and lists it as a child of `all`.
    pub fn add_group(&self, name: &str) -> Result<Arc<Group>, InventoryError> {
        let mut registry = lock(&self.core.registry);

        if registry.groups.contains_key(name) {
            return Err(InventoryError::DuplicateGroup(name.to_string()));
        }

        if name == META_KEY {
            return Err(InventoryError::ReservedGroupName(name.to_string()));
        }

        debug!("Adding group '{name}'");

        let group = Arc::new(Group::new(name, Arc::downgrade(&self.core)));
        self.core.all.add_child(name);
        registry.groups.insert(name.to_string(), Arc::clone(&group));

        Ok(group)
    }

    pub fn get_group(&self, name: &str) -> Option<Arc<Group>> {
        lock(&self.core.registry).groups.get(name).cloned()
    }

    /// The implicit group holding every host.
    pub fn all(&self) -> Arc<Group> {
        Arc::clone(&self.core.all)
    }

    /// The implicit group holding hosts that belong to no user group.
    pub fn ungrouped(&self) -> Arc<Group> {
        Arc::clone(&self.core.ungrouped)
    }

    /// Hosts in registration order.
    pub fn list_hosts(&self) -> Vec<Arc<Host>> {
        lock(&self.core.registry).hosts.values().cloned().collect()
    }

    /// Groups in creation order, starting with `all` and `ungrouped`.
    pub fn list_groups(&self) -> Vec<Arc<Group>> {
        lock(&self.core.registry).groups.values().cloned().collect()
    }
}
