use serde::{Deserialize, Serialize};

/// An entry on the kiosk's editable menu board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    /// Preview URL or asset path; `None` renders the placeholder tile.
    pub image: Option<String>,
    pub is_active: bool,
    pub is_sold_out: bool,
}

/// Input data for creating or editing a menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub image: Option<String>,
}
