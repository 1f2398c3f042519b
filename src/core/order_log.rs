use crate::domain::model::{Order, User};
use std::collections::HashMap;

/// Shop-wide order log. Orders are stored once, keyed by order id; a
/// participant index maps user id to the order ids that user is involved in,
/// so the client-side and vendor-side views of an order never duplicate it.
#[derive(Debug, Default)]
pub struct OrderLog {
    orders: HashMap<u32, Order>,
    by_user: HashMap<u32, Vec<u32>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an order against its customer and the handling vendor.
    pub fn place(&mut self, order: Order, handled_by: &User) {
        let order_id = order.id;
        self.by_user
            .entry(order.customer.id)
            .or_default()
            .push(order_id);
        if handled_by.id != order.customer.id {
            self.by_user.entry(handled_by.id).or_default().push(order_id);
        }

        tracing::info!(
            "Order {} placed by {} {}",
            order_id,
            handled_by.role,
            handled_by.name
        );
        self.orders.insert(order_id, order);
    }

    pub fn get(&self, order_id: u32) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    pub fn orders_for(&self, user_id: u32) -> &[u32] {
        self.by_user.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
