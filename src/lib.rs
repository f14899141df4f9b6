pub mod analytics;
pub mod cli;
pub mod devices;
pub mod menu;
pub mod models;
pub mod orders;
pub mod period;
pub mod settings;
pub mod utils;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use analytics::AnalyticsConfig;
use cli::{Cli, Command, PeriodPreset};
use devices::DeviceRegistry;
use menu::MenuCatalog;
use orders::OrderBook;
use period::{local_today, Clock, DashboardController, PeriodSelection};
use settings::{DashboardSettings, SettingsStore};

pub use devices::commands::{get_device, list_devices};
pub use menu::commands::{
    create_menu_item, delete_menu_item, list_menu_items, toggle_menu_item_active,
    toggle_menu_item_sold_out, update_menu_item,
};
pub use orders::commands::{get_order, list_orders, list_orders_for_period};
pub use period::commands::{apply_custom_range, get_dashboard, select_period, set_custom_draft};

/// Everything the back office pages read from, built once per session.
pub struct AppState {
    pub(crate) dashboard: DashboardController,
    pub(crate) orders: OrderBook,
    pub(crate) menu: MenuCatalog,
    pub(crate) devices: DeviceRegistry,
    pub(crate) settings: DashboardSettings,
}

impl AppState {
    pub fn new(settings: DashboardSettings) -> Self {
        Self::with_clock(settings, local_today)
    }

    pub fn with_clock(settings: DashboardSettings, clock: Clock) -> Self {
        let config = AnalyticsConfig::default();
        let events = analytics::generate_event_log(clock(), &config);
        let dashboard = DashboardController::with_events(events, config, clock);
        let orders = OrderBook::from_events(&dashboard.events(), settings.order_seed);

        Self {
            dashboard,
            orders,
            menu: MenuCatalog::new(),
            devices: DeviceRegistry::new(),
            settings,
        }
    }

    pub fn store_name(&self) -> &str {
        &self.settings.store_name
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn dispatch(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Dashboard { period } => {
            let selection = match period {
                PeriodPreset::Today => PeriodSelection::Today,
                PeriodPreset::Yesterday => PeriodSelection::Yesterday,
            };
            let snapshot = select_period(state, selection).await.map_err(|e| anyhow!(e))?;
            print_json(&snapshot)
        }
        Command::Range { start, end } => {
            select_period(state, PeriodSelection::Custom)
                .await
                .map_err(|e| anyhow!(e))?;
            set_custom_draft(state, Some(start), Some(end))
                .await
                .map_err(|e| anyhow!(e))?;
            let snapshot = apply_custom_range(state).await.map_err(|e| anyhow!(e))?;
            print_json(&snapshot)
        }
        Command::Orders { period } => {
            let listed = if period {
                list_orders_for_period(state).await
            } else {
                list_orders(state).await
            };
            let orders = listed.map_err(|e| anyhow!(e))?;
            print_json(&orders)
        }
        Command::Order { id } => {
            let order = get_order(state, id).await.map_err(|e| anyhow!(e))?;
            print_json(&order)
        }
        Command::Menu => {
            let items = list_menu_items(state).await.map_err(|e| anyhow!(e))?;
            print_json(&items)
        }
        Command::Devices => {
            let devices = list_devices(state).await.map_err(|e| anyhow!(e))?;
            print_json(&devices)
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Reads RUST_LOG; logs go to stderr so stdout stays valid JSON.
    utils::logging::init();

    let store = match cli.settings {
        Some(path) => SettingsStore::new(Some(path))?,
        None => SettingsStore::from_env()?,
    };
    if let Some(path) = store.path() {
        info!("Settings loaded from {}", path.display());
    }

    let state = AppState::new(store.settings().clone());
    info!("{} back office starting up...", state.store_name());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(&state, cli.command.unwrap_or_default()))
}
