use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Visitor age bracket, ordered youngest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AgeBracket {
    Teens,
    Twenties,
    Thirties,
    Forties,
    FiftiesPlus,
}

impl AgeBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Teens => "10s",
            AgeBracket::Twenties => "20s",
            AgeBracket::Thirties => "30s",
            AgeBracket::Forties => "40s",
            AgeBracket::FiftiesPlus => "50s+",
        }
    }
}

/// Fixed catalog of items the kiosk sells. Events always reference one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MenuItemKind {
    Americano,
    CafeLatte,
    VanillaLatte,
    Cappuccino,
    Decaf,
    LemonTea,
    IcedTea,
    MiniCake,
    ChocolateCake,
}

impl MenuItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            MenuItemKind::Americano => "Americano",
            MenuItemKind::CafeLatte => "Cafe Latte",
            MenuItemKind::VanillaLatte => "Vanilla Latte",
            MenuItemKind::Cappuccino => "Cappuccino",
            MenuItemKind::Decaf => "Decaf Americano",
            MenuItemKind::LemonTea => "Lemon Tea",
            MenuItemKind::IcedTea => "Iced Tea",
            MenuItemKind::MiniCake => "Mini Cake",
            MenuItemKind::ChocolateCake => "Chocolate Cake",
        }
    }

    /// List price before any hour or day adjustment.
    pub fn base_price(&self) -> u64 {
        match self {
            MenuItemKind::Americano => 4_900,
            MenuItemKind::CafeLatte => 5_500,
            MenuItemKind::VanillaLatte => 5_900,
            MenuItemKind::Cappuccino => 5_500,
            MenuItemKind::Decaf => 5_200,
            MenuItemKind::LemonTea => 7_500,
            MenuItemKind::IcedTea => 3_500,
            MenuItemKind::MiniCake => 3_900,
            MenuItemKind::ChocolateCake => 8_500,
        }
    }

    /// Options a customer can pick at the kiosk. Cakes have none.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            MenuItemKind::Americano
            | MenuItemKind::CafeLatte
            | MenuItemKind::VanillaLatte
            | MenuItemKind::Cappuccino
            | MenuItemKind::Decaf => &["Hot", "Iced", "Extra shot", "Large"],
            MenuItemKind::LemonTea => &["Hot", "Iced"],
            MenuItemKind::IcedTea => &["Regular", "Large"],
            MenuItemKind::MiniCake | MenuItemKind::ChocolateCake => &[],
        }
    }
}

/// A single visit that ended in a purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub timestamp: NaiveDateTime,
    pub sales_amount: u64,
    pub gender: Gender,
    pub age_bracket: AgeBracket,
    pub menu_item: MenuItemKind,
}

impl Event {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
