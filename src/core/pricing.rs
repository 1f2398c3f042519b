use crate::domain::model::{Flower, Order, OrderStatus, User};
use crate::utils::error::{FloristError, Result};
use chrono::Utc;
use rust_decimal::Decimal;
use std::rc::Rc;

/// Sum of the selection's prices plus the flat service fee. Exact decimal
/// arithmetic, so the result is independent of summation order.
pub fn selection_total(flowers: &[Rc<Flower>], service_fee: Decimal) -> Decimal {
    flowers.iter().map(|f| f.price).sum::<Decimal>() + service_fee
}

/// Builds a priced order. The selection must be non-empty; an empty
/// selection is a caller error and never reaches pricing.
pub fn create_order(
    id: u32,
    customer: User,
    flowers: Vec<Rc<Flower>>,
    payment_method: &str,
    service_fee: Decimal,
) -> Result<Order> {
    if flowers.is_empty() {
        return Err(FloristError::EmptySelection);
    }

    let total = selection_total(&flowers, service_fee);
    Ok(Order {
        id,
        customer,
        flowers,
        payment_method: payment_method.to_string(),
        service_fee,
        total,
        created_at: Utc::now(),
        status: OrderStatus::Processing,
    })
}

impl Order {
    /// Recomputes the total from the referenced flowers. Flowers are
    /// immutable, so this always matches the stored total.
    pub fn compute_total(&self) -> Decimal {
        selection_total(&self.flowers, self.service_fee)
    }
}
