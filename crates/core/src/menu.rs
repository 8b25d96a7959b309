//! Menu items and the menu manager.
//!
//! A [`MenuItem`] is either a dish or a drink. Extras such as "extra cheese"
//! wrap an item with [`MenuItem::with_option`]; each option adds its own
//! surcharge on top of the base price and the options stack.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::output::{Message, Sink};
use crate::types::Price;

/// Which list of the menu an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dish,
    Drink,
}

/// An extra added on top of a base item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemOption {
    pub name: String,
    pub extra: Price,
}

/// A dish or a drink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: Price,
    category: Category,
    /// Free-form sub-type, e.g. "pasta" or "soft drink".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<ItemOption>,
}

impl MenuItem {
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
            kind: None,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn dish(name: impl Into<String>, price: Price) -> Self {
        Self::new(name, price, Category::Dish)
    }

    #[must_use]
    pub fn drink(name: impl Into<String>, price: Price) -> Self {
        Self::new(name, price, Category::Drink)
    }

    /// Set the free-form sub-type.
    #[must_use]
    pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Wrap the item with an extra option that costs `extra` on top.
    ///
    /// ```
    /// use bistro_core::{MenuItem, Price};
    ///
    /// let pasta = MenuItem::dish("Spaghetti", Price::from_cents(1299))
    ///     .with_option("Parmesan", Price::from_cents(150));
    /// assert_eq!(pasta.display_name(), "Spaghetti + Parmesan");
    /// assert_eq!(pasta.cost(), Price::from_cents(1449));
    /// ```
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, extra: Price) -> Self {
        self.options.push(ItemOption {
            name: name.into(),
            extra,
        });
        self
    }

    /// Base name without options.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base price without options.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[ItemOption] {
        &self.options
    }

    /// Name including every option, e.g. `"Spaghetti + Parmesan + Basil"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.options
            .iter()
            .fold(self.name.clone(), |acc, opt| format!("{acc} + {}", opt.name))
    }

    /// What the guest pays: base price plus every option's surcharge.
    #[must_use]
    pub fn cost(&self) -> Price {
        self.price + self.options.iter().map(|opt| opt.extra).sum::<Price>()
    }
}

/// The restaurant's menu: a list of dishes and a list of drinks.
///
/// Lists keep insertion order and allow duplicates. Removal is by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuManager {
    #[serde(default)]
    dishes: Vec<MenuItem>,
    #[serde(default)]
    drinks: Vec<MenuItem>,
}

impl MenuManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dishes: Vec::new(),
            drinks: Vec::new(),
        }
    }

    fn list_for(&self, category: Category) -> &Vec<MenuItem> {
        match category {
            Category::Dish => &self.dishes,
            Category::Drink => &self.drinks,
        }
    }

    fn list_for_mut(&mut self, category: Category) -> &mut Vec<MenuItem> {
        match category {
            Category::Dish => &mut self.dishes,
            Category::Drink => &mut self.drinks,
        }
    }

    /// Append an item to the list of its category.
    pub fn add(&mut self, item: MenuItem) {
        debug!(item = %item.display_name(), category = ?item.category(), "Adding menu item");
        self.list_for_mut(item.category()).push(item);
    }

    /// Remove the first item equal to `item`.
    ///
    /// Returns false and reports [`Message::ItemNotFound`] if no such item is
    /// on the menu; nothing else changes in that case.
    pub fn remove(&mut self, item: &MenuItem, sink: &mut dyn Sink) -> bool {
        let list = self.list_for_mut(item.category());
        if let Some(pos) = list.iter().position(|candidate| candidate == item) {
            list.remove(pos);
            debug!(item = %item.display_name(), "Removed menu item");
            true
        } else {
            warn!(item = %item.display_name(), "Menu item not found, nothing removed");
            sink.emit(Message::ItemNotFound {
                name: item.display_name(),
            });
            false
        }
    }

    /// Dishes followed by drinks, each in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&MenuItem> {
        self.dishes.iter().chain(&self.drinks).collect()
    }

    #[must_use]
    pub fn dishes(&self) -> &[MenuItem] {
        &self.dishes
    }

    #[must_use]
    pub fn drinks(&self) -> &[MenuItem] {
        &self.drinks
    }

    /// First item whose base name is `name`, dishes searched before drinks.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.dishes
            .iter()
            .chain(&self.drinks)
            .find(|item| item.name() == name)
    }

    /// Number of items in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.list_for(category).len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len() + self.drinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.drinks.is_empty()
    }

    /// Emit one [`Message::MenuLine`] per listed item.
    pub fn announce(&self, sink: &mut dyn Sink) {
        for item in self.list() {
            sink.emit(Message::MenuLine {
                name: item.display_name(),
                price: item.cost(),
            });
        }
    }
}
