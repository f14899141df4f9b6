use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Builder;

use crate::analytics::DateRange;
use crate::models::{Event, Order, OrderChannel, OrderLine, OrderStatus, PaymentMethod};

const ENABLE_LOGS: bool = true;

const FIRST_ORDER_NUMBER: usize = 1001;

/// One in this many orders ends up canceled.
const CANCEL_ONE_IN: u32 = 20;

fn random_payment_method(rng: &mut impl Rng) -> PaymentMethod {
    match rng.gen_range(0..2) {
        0 => PaymentMethod::CreditCard,
        1 => PaymentMethod::SimplePay,
        _ => unreachable!(),
    }
}

fn random_status(rng: &mut impl Rng) -> OrderStatus {
    if rng.gen_range(0..CANCEL_ONE_IN) == 0 {
        OrderStatus::Canceled
    } else {
        OrderStatus::Completed
    }
}

fn random_options(rng: &mut impl Rng, choices: &[&str]) -> Vec<String> {
    if choices.is_empty() {
        return Vec::new();
    }
    vec![choices[rng.gen_range(0..choices.len())].to_string()]
}

fn order_from_event(rng: &mut StdRng, index: usize, event: &Event) -> Order {
    // Ids come from the seeded generator so the whole book is reproducible.
    let id = Builder::from_random_bytes(rng.gen()).into_uuid().to_string();
    let line = OrderLine {
        name: event.menu_item.name().to_string(),
        quantity: 1,
        price: event.sales_amount,
        options: random_options(rng, event.menu_item.options()),
    };

    Order {
        id,
        number: format!("#{}", FIRST_ORDER_NUMBER + index),
        placed_at: event.timestamp,
        channel: OrderChannel::Kiosk,
        total: line.price * u64::from(line.quantity),
        status: random_status(rng),
        items: vec![line],
        payment_method: random_payment_method(rng),
    }
}

/// Completed and canceled kiosk orders, newest first.
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// One order per event; numbering follows the events' chronological order.
    pub fn from_events(events: &[Event], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut orders: Vec<Order> = events
            .iter()
            .enumerate()
            .map(|(index, event)| order_from_event(&mut rng, index, event))
            .collect();

        // Reverse first so orders sharing a timestamp keep the higher number on top.
        orders.reverse();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));

        let canceled = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Canceled)
            .count();
        crate::log_info!(
            "Order book built: {} orders ({} canceled)",
            orders.len(),
            canceled
        );

        Self { orders }
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn in_range(&self, range: &DateRange) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| range.contains(order.placed_at.date()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
