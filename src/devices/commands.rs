use crate::{models::Device, AppState};

pub async fn list_devices(state: &AppState) -> Result<Vec<Device>, String> {
    Ok(state.devices.list().to_vec())
}

pub async fn get_device(state: &AppState, device_id: u32) -> Result<Device, String> {
    state
        .devices
        .get(device_id)
        .cloned()
        .ok_or_else(|| format!("device {device_id} not found"))
}
