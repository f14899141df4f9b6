use crate::models::{Device, DeviceStatus};

const ENABLE_LOGS: bool = true;

fn seed_devices() -> Vec<Device> {
    vec![
        Device {
            id: 1,
            name: "Kiosk #1".into(),
            status: DeviceStatus::Online,
        },
        Device {
            id: 2,
            name: "Kiosk #2".into(),
            status: DeviceStatus::Offline,
        },
    ]
}

/// Kiosk terminals known to the back office. Read-only for the session.
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::with_devices(seed_devices())
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_devices(devices: Vec<Device>) -> Self {
        let online = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Online)
            .count();
        crate::log_info!("{} kiosk devices registered ({} online)", devices.len(), online);
        Self { devices }
    }

    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: u32) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_one_online_and_one_offline_kiosk() {
        let registry = DeviceRegistry::new();
        let statuses: Vec<DeviceStatus> = registry.list().iter().map(|d| d.status).collect();
        assert_eq!(statuses, vec![DeviceStatus::Online, DeviceStatus::Offline]);
        assert_eq!(registry.list()[0].name, "Kiosk #1");
    }

    #[test]
    fn lookup_by_id() {
        let registry = DeviceRegistry::new();
        assert_eq!(registry.get(2).map(|d| d.status), Some(DeviceStatus::Offline));
        assert!(registry.get(9).is_none());
    }
}
