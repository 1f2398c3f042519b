use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A single catalog entry. Immutable after import; ids are assigned
/// sequentially (1-based) over successfully imported rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub price: Decimal,
    pub description: String,
}

/// Ordered, append-only collection of flowers. Insertion order is file row
/// order over the valid subset. Flowers are held behind `Rc` so orders share
/// them instead of copying.
#[derive(Debug, Default)]
pub struct Catalog {
    flowers: Vec<Rc<Flower>>,
}

impl Catalog {
    pub fn push(&mut self, flower: Flower) {
        self.flowers.push(Rc::new(flower));
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rc<Flower>> {
        self.flowers.get(index).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Flower>> {
        self.flowers.iter()
    }

    /// Selection prefix of at most `n` flowers, sharing the catalog's data.
    pub fn take_first(&self, n: usize) -> Vec<Rc<Flower>> {
        self.flowers.iter().take(n).cloned().collect()
    }
}

/// Role tag for a shop participant. Behavior differs only in log text, so
/// this is plain enum dispatch rather than a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Client,
    Vendor,
    Owner,
    Supplier,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Client => "client",
            Role::Vendor => "vendor",
            Role::Owner => "owner",
            Role::Supplier => "supplier",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(id: u32, name: &str, email: &str, role: Role) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    /// The activity line printed for this participant.
    pub fn task(&self) -> String {
        match self.role {
            Role::Client => format!("Client {} places an order", self.name),
            Role::Vendor => format!("Vendor {} handles orders", self.name),
            Role::Owner => format!("Owner {} runs the shop", self.name),
            Role::Supplier => format!("Supplier {} provides flowers", self.name),
        }
    }
}

/// Orders never transition out of `Processing` at this scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Processing => f.write_str("processing"),
        }
    }
}

/// A priced order. Flowers are shared with the catalog, never copied.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: u32,
    pub customer: User,
    pub flowers: Vec<Rc<Flower>>,
    pub payment_method: String,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}
