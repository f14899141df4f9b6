use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Kiosk back office: dashboard, order history, menu, devices and sales analytics as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON); defaults to $KIOSK_ADMIN_SETTINGS
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dashboard views for today or yesterday
    Dashboard {
        #[arg(value_enum, default_value_t = PeriodPreset::Today)]
        period: PeriodPreset,
    },

    /// Dashboard views for a custom range (dates as YYYY-MM-DD, both inclusive)
    Range { start: String, end: String },

    /// Order history, newest first
    Orders {
        /// Only orders inside the applied period
        #[arg(long)]
        period: bool,
    },

    /// A single order by id
    Order { id: String },

    /// The menu board
    Menu,

    /// Kiosk terminals and their online status
    Devices,
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard {
            period: PeriodPreset::Today,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPreset {
    Today,
    Yesterday,
}
