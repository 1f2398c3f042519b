use crate::domain::model::Order;
use std::fmt::Write;

/// Shared body of the order summary and the invoice. Pure function of the
/// order; the two renderings differ only in their header line.
fn order_body(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order #{}", order.id);
    let _ = writeln!(out, "Customer: {}", order.customer.name);
    let _ = writeln!(out, "Date: {}", order.created_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "Total: {} $", order.total);
    let _ = writeln!(out, "Payment method: {}", order.payment_method);
    let _ = writeln!(out, "Status: {}", order.status);
    for flower in &order.flowers {
        let _ = writeln!(out, "- {} ({} $)", flower.name, flower.price);
    }
    out
}

pub fn render_summary(order: &Order) -> String {
    format!("--- Order summary ---\n{}", order_body(order))
}

/// Read-only view over exactly one order; carries no state of its own.
pub struct Invoice<'a> {
    order: &'a Order,
}

impl<'a> Invoice<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self { order }
    }

    pub fn render(&self) -> String {
        format!("--- Invoice ---\n{}", order_body(self.order))
    }
}
