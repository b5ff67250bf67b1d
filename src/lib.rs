pub mod cli;
pub mod inventory;

pub use crate::inventory::{Group, Host, Inventory, InventoryError};
