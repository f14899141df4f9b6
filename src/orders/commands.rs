use crate::{models::Order, AppState};

pub async fn list_orders(state: &AppState) -> Result<Vec<Order>, String> {
    Ok(state.orders.list().to_vec())
}

/// Orders placed inside the dashboard's applied range.
pub async fn list_orders_for_period(state: &AppState) -> Result<Vec<Order>, String> {
    let period = state.dashboard.get_state().await;
    Ok(state.orders.in_range(&period.applied))
}

pub async fn get_order(state: &AppState, order_id: String) -> Result<Order, String> {
    state
        .orders
        .get(&order_id)
        .cloned()
        .ok_or_else(|| format!("order {order_id} not found"))
}
