use crate::{
    models::{MenuItem, MenuItemInput},
    AppState,
};

pub async fn list_menu_items(state: &AppState) -> Result<Vec<MenuItem>, String> {
    Ok(state.menu.list().await)
}

pub async fn create_menu_item(state: &AppState, input: MenuItemInput) -> Result<MenuItem, String> {
    state.menu.create(input).await.map_err(|e| e.to_string())
}

pub async fn update_menu_item(
    state: &AppState,
    item_id: String,
    input: MenuItemInput,
) -> Result<MenuItem, String> {
    state
        .menu
        .update(&item_id, input)
        .await
        .map_err(|e| e.to_string())
}

pub async fn toggle_menu_item_active(state: &AppState, item_id: String) -> Result<MenuItem, String> {
    state
        .menu
        .toggle_active(&item_id)
        .await
        .map_err(|e| e.to_string())
}

pub async fn toggle_menu_item_sold_out(
    state: &AppState,
    item_id: String,
) -> Result<MenuItem, String> {
    state
        .menu
        .toggle_sold_out(&item_id)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_menu_item(state: &AppState, item_id: String) -> Result<(), String> {
    state
        .menu
        .remove(&item_id)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
