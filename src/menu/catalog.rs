use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use tokio::sync::RwLock;

use crate::models::{MenuItem, MenuItemInput};

const ENABLE_LOGS: bool = true;

fn seed_items() -> Vec<MenuItem> {
    let item = |id: &str, name: &str, price: u64, is_active: bool, is_sold_out: bool| MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: None,
        is_active,
        is_sold_out,
    };

    vec![
        item("1", "Americano", 4_900, true, false),
        item("2", "Cafe Latte", 5_500, true, false),
        item("3", "Mini Cake", 3_900, true, true),
        item("4", "Lemon Tea", 7_500, false, false),
    ]
}

/// Trimmed name and positive price, or an error describing the first problem.
fn validate(input: MenuItemInput) -> Result<MenuItemInput> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        bail!("menu name is required");
    }
    if input.price == 0 {
        bail!("price must be greater than zero");
    }
    let image = input.image.filter(|url| !url.trim().is_empty());
    Ok(MenuItemInput {
        name,
        price: input.price,
        image,
    })
}

fn next_id(items: &[MenuItem]) -> String {
    let max = items
        .iter()
        .filter_map(|item| item.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// The kiosk's editable menu board, kept in memory for the session.
#[derive(Clone)]
pub struct MenuCatalog {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::with_items(seed_items())
    }
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn list(&self) -> Vec<MenuItem> {
        self.items.read().await.clone()
    }

    /// New items go to the front of the board, active and in stock.
    pub async fn create(&self, input: MenuItemInput) -> Result<MenuItem> {
        let input = validate(input)?;
        let mut items = self.items.write().await;

        let item = MenuItem {
            id: next_id(&items),
            name: input.name,
            price: input.price,
            image: input.image,
            is_active: true,
            is_sold_out: false,
        };
        items.insert(0, item.clone());

        crate::log_info!("Created menu item {} ({})", item.id, item.name);
        Ok(item)
    }

    pub async fn update(&self, item_id: &str, input: MenuItemInput) -> Result<MenuItem> {
        let input = validate(input)?;
        self.modify(item_id, |item| {
            item.name = input.name;
            item.price = input.price;
            item.image = input.image;
        })
        .await
    }

    pub async fn toggle_active(&self, item_id: &str) -> Result<MenuItem> {
        self.modify(item_id, |item| item.is_active = !item.is_active)
            .await
    }

    pub async fn toggle_sold_out(&self, item_id: &str) -> Result<MenuItem> {
        self.modify(item_id, |item| item.is_sold_out = !item.is_sold_out)
            .await
    }

    pub async fn remove(&self, item_id: &str) -> Result<MenuItem> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| anyhow!("menu item {item_id} not found"))?;

        let removed = items.remove(position);
        crate::log_info!("Removed menu item {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    async fn modify<F>(&self, item_id: &str, change: F) -> Result<MenuItem>
    where
        F: FnOnce(&mut MenuItem),
    {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| anyhow!("menu item {item_id} not found"))?;

        change(item);
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: u64) -> MenuItemInput {
        MenuItemInput {
            name: name.to_string(),
            price,
            image: None,
        }
    }

    #[tokio::test]
    async fn seeded_board_has_four_items() {
        let catalog = MenuCatalog::new();
        let items = catalog.list().await;
        assert_eq!(items.len(), 4);
        assert!(items[2].is_sold_out);
        assert!(!items[3].is_active);
    }

    #[tokio::test]
    async fn create_prepends_with_next_numeric_id() {
        let catalog = MenuCatalog::new();
        let created = catalog.create(input("  Matcha Latte ", 6_200)).await.unwrap();

        assert_eq!(created.id, "5");
        assert_eq!(created.name, "Matcha Latte");
        assert!(created.is_active);
        assert!(!created.is_sold_out);
        assert_eq!(catalog.list().await[0], created);
    }

    #[tokio::test]
    async fn create_rejects_blank_name_and_zero_price() {
        let catalog = MenuCatalog::new();
        assert!(catalog.create(input("   ", 1_000)).await.is_err());
        assert!(catalog.create(input("Tea", 0)).await.is_err());
        assert_eq!(catalog.list().await.len(), 4);
    }

    #[tokio::test]
    async fn update_keeps_flags() {
        let catalog = MenuCatalog::new();
        let updated = catalog.update("3", input("Cheese Cake", 4_500)).await.unwrap();

        assert_eq!(updated.name, "Cheese Cake");
        assert_eq!(updated.price, 4_500);
        assert!(updated.is_sold_out);
    }

    #[tokio::test]
    async fn toggles_flip_flags() {
        let catalog = MenuCatalog::new();
        assert!(catalog.toggle_active("4").await.unwrap().is_active);
        assert!(!catalog.toggle_sold_out("3").await.unwrap().is_sold_out);
        assert!(catalog.toggle_active("99").await.is_err());
    }

    #[tokio::test]
    async fn remove_then_ids_continue_from_max() {
        let catalog = MenuCatalog::new();
        catalog.remove("2").await.unwrap();
        assert!(catalog.remove("2").await.is_err());

        let created = catalog.create(input("Mocha", 5_800)).await.unwrap();
        assert_eq!(created.id, "5");
        assert_eq!(catalog.list().await.len(), 4);
    }
}
