use super::error::InventoryError;
use super::manager::Inventory;
use super::utils::lock;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub type Vars = IndexMap<String, String>;

/// The `--list` document understood by Ansible-style dynamic inventory consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    #[serde(flatten)]
    pub groups: IndexMap<String, GroupDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub hostvars: IndexMap<String, Vars>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupDocument {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub vars: Vars,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

/// What a dynamic inventory invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSelector {
    List,
    Host(String),
}

impl Inventory {
    /// Builds the full document from a snapshot of the registered hosts and groups.
    ///
    /// The inventory lock is only held while copying the entity handles; each host and
    /// group is then read under its own lock.
    pub fn serialize(&self) -> InventoryDocument {
        let (hosts, groups) = {
            let registry = lock(&self.core().registry);
            (
                registry.hosts.values().cloned().collect::<Vec<_>>(),
                registry.groups.values().cloned().collect::<Vec<_>>(),
            )
        };

        let hostvars = hosts
            .iter()
            .map(|host| (host.name().to_string(), host.vars()))
            .collect();

        let groups = groups
            .iter()
            .map(|group| (group.name().to_string(), group.to_document()))
            .collect();

        InventoryDocument {
            meta: Meta { hostvars },
            groups,
        }
    }

    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Variables of a single host, `None` if it was never registered.
    pub fn host_vars(&self, name: &str) -> Option<Vars> {
        self.get_host(name).map(|host| host.vars())
    }

    /// The `--host` document: the host's variables, or `{}` for an unknown host.
    pub fn host_to_json(&self, name: &str) -> Result<String, InventoryError> {
        let vars = self.host_vars(name).unwrap_or_default();
        Ok(serde_json::to_string(&vars)?)
    }

    /// Writes the document requested by `selector` to `writer`, followed by a newline.
    pub fn write_output<W: Write>(
        &self,
        writer: &mut W,
        selector: &OutputSelector,
        pretty: bool,
    ) -> anyhow::Result<()> {
        match selector {
            OutputSelector::List => {
                let document = self.serialize();
                if pretty {
                    serde_json::to_writer_pretty(&mut *writer, &document)?;
                } else {
                    serde_json::to_writer(&mut *writer, &document)?;
                }
            }
            OutputSelector::Host(name) => {
                let vars = self.host_vars(name).unwrap_or_default();
                if pretty {
                    serde_json::to_writer_pretty(&mut *writer, &vars)?;
                } else {
                    serde_json::to_writer(&mut *writer, &vars)?;
                }
            }
        }

        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
