//! A minimal dynamic inventory script.
//!
//! ```text
//! cargo run --example static_inventory -- --list --pretty
//! cargo run --example static_inventory -- --host comp01
//! ```
use anyhow::Result;
use dyninv::cli;
use dyninv::Inventory;
use log::debug;

fn build() -> Result<Inventory> {
    let inventory = Inventory::new();

    inventory.add_host("comp01")?.add_variable("foo", "bar");
    inventory.add_host("comp02")?.add_variable("baz", "buzz");

    let group = inventory.add_group("group01")?;
    group.add_variable("gvar", "gbaz");
    group.add_host("comp01")?;

    Ok(inventory)
}

fn main() -> Result<()> {
    cli::init_logging();

    let inventory = build()?;
    debug!(
        "inventory ready: {} hosts, {} groups",
        inventory.list_hosts().len(),
        inventory.list_groups().len()
    );

    cli::run(&inventory)
}
