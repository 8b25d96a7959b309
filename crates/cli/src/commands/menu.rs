//! Menu loading and listing.
//!
//! # Usage
//!
//! ```bash
//! # Print the built-in menu
//! bistro menu
//!
//! # Print a menu loaded from YAML, as JSON
//! bistro menu --file menu.yaml --json
//! ```
//!
//! # File Format
//!
//! ```yaml
//! dishes:
//!   - name: Spaghetti
//!     price: "12.99"
//!     kind: pasta
//! drinks:
//!   - name: Cola
//!     price: "1.99"
//! ```

use std::path::Path;

use bistro_core::{Console, MenuItem, MenuManager, Price};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::BistroConfig;

/// Errors that can occur while loading a menu file.
#[derive(Debug, Error)]
pub enum MenuFileError {
    /// File could not be read.
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid menu.
    #[error("Invalid menu file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Menu could not be encoded as JSON.
    #[error("Failed to encode menu: {0}")]
    Json(#[from] serde_json::Error),
}

/// One line of a menu file.
#[derive(Debug, Deserialize)]
struct MenuEntry {
    name: String,
    price: Price,
    #[serde(default)]
    kind: Option<String>,
}

/// Top level of a menu file.
#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(default)]
    dishes: Vec<MenuEntry>,
    #[serde(default)]
    drinks: Vec<MenuEntry>,
}

fn build(entry: MenuEntry, make: fn(String, Price) -> MenuItem) -> MenuItem {
    let item = make(entry.name, entry.price);
    match entry.kind {
        Some(kind) => item.of_kind(kind),
        None => item,
    }
}

/// Parse a menu from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a price is negative.
pub fn parse_menu(yaml: &str) -> Result<MenuManager, MenuFileError> {
    let file: MenuFile = serde_yaml::from_str(yaml)?;
    let mut menu = MenuManager::new();
    for entry in file.dishes {
        menu.add(build(entry, MenuItem::dish));
    }
    for entry in file.drinks {
        menu.add(build(entry, MenuItem::drink));
    }
    Ok(menu)
}

/// Load a menu from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_menu(path: &Path) -> Result<MenuManager, MenuFileError> {
    info!(path = %path.display(), "Loading menu from file");
    let content = std::fs::read_to_string(path)?;
    let menu = parse_menu(&content)?;
    info!(items = menu.len(), "Menu loaded");
    Ok(menu)
}

/// The menu used when no file is given.
#[must_use]
pub fn default_menu() -> MenuManager {
    let mut menu = MenuManager::new();
    menu.add(MenuItem::dish("Spaghetti", Price::from_cents(1299)).of_kind("pasta"));
    menu.add(MenuItem::dish("Salad", Price::from_cents(599)));
    menu.add(MenuItem::drink("Cola", Price::from_cents(199)));
    menu.add(MenuItem::drink("Water", Price::from_cents(99)));
    menu
}

/// The file's menu if a path is given, the built-in one otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn menu_or_default(path: Option<&Path>) -> Result<MenuManager, MenuFileError> {
    path.map_or_else(|| Ok(default_menu()), load_menu)
}

/// Print the menu.
///
/// # Errors
///
/// Returns an error if the menu file cannot be loaded or encoded.
#[allow(clippy::print_stdout)]
pub fn list(
    config: &BistroConfig,
    path: Option<&Path>,
    json: bool,
) -> Result<(), MenuFileError> {
    let menu = menu_or_default(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else {
        let mut console = Console::new(config.locale, config.currency.clone());
        menu.announce(&mut console);
    }
    Ok(())
}
