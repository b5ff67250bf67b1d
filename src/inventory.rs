pub mod error;
pub mod group;
pub mod host;
pub mod manager;
pub mod output;
mod utils;

pub use error::InventoryError;
pub use group::Group;
pub use host::Host;
pub use manager::Inventory;
pub use output::{GroupDocument, InventoryDocument, Meta, OutputSelector, Vars};

/// Implicit group every host belongs to.
pub const ALL_GROUP: &str = "all";
/// Implicit group for hosts that belong to no user-defined group.
pub const UNGROUPED_GROUP: &str = "ungrouped";
/// Top-level document key carrying `hostvars`; never usable as a group name.
pub const META_KEY: &str = "_meta";
