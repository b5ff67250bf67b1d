use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Hostname '{0}' already exists in inventory")]
    DuplicateHost(String),
    #[error("Group '{0}' already exists in inventory")]
    DuplicateGroup(String),
    #[error("Group name '{0}' is reserved")]
    ReservedGroupName(String),
    #[error("Unknown host: '{0}', add it to the inventory first")]
    UnknownHost(String),
    #[error("Hosts can't be added to implicit group '{0}'")]
    ReservedGroup(String),
    #[error("Group '{0}' no longer belongs to a live inventory")]
    InventoryDropped(String),
    #[error("Failed to serialize inventory: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InventoryError {
    /// True for the name collisions reported by `add_host` and `add_group`.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(
            self,
            InventoryError::DuplicateHost(_) | InventoryError::DuplicateGroup(_)
        )
    }
}
