//! Menu Check - validate a navigation document
//!
//! Usage: `menu-check [PATH]`. Without a path the built-in Morphium
//! navigation is checked.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use morphium_menu::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morphium_menu=info,menu_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let model = match std::env::args().nth(1) {
        Some(path) => MenuModel::load(&path).with_context(|| format!("Invalid navigation file {path}"))?,
        None => MenuModel::morphium().context("Built-in navigation is invalid")?,
    };

    println!("=== Navigation: {} groups, {} links ===\n", model.len(), model.link_count());
    for group in model.groups() {
        let icon = group.icon.as_deref().unwrap_or(" ");
        println!("{icon} {:<28} {:<32} {} links", group.id, group.title, group.links.len());
        for link in &group.links {
            println!("      {:<28} -> {}", link.label, link.destination);
        }
    }

    Ok(())
}
