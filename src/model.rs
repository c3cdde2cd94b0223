use std::fmt;

use serde::Deserialize;

/// A trimmed, non-empty order UID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderIdError {
    #[error("order UID is empty")]
    Empty,
}

impl OrderId {
    /// Trim the raw input and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, OrderIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OrderIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scalar wire value. The backend is not strict about whether numbers
/// arrive as numbers or strings, so anything scalar-shaped is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(serde_json::Value),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

/// The document returned by `GET /api/order/{uid}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderDocument {
    pub order_uid: Option<Scalar>,
    pub track_number: Option<Scalar>,
    pub entry: Option<Scalar>,
    pub delivery: Option<Delivery>,
    pub payment: Option<Payment>,
    pub items: Option<Vec<Item>>,
    pub locale: Option<Scalar>,
    pub internal_signature: Option<Scalar>,
    pub customer_id: Option<Scalar>,
    pub delivery_service: Option<Scalar>,
    pub shardkey: Option<Scalar>,
    pub sm_id: Option<Scalar>,
    pub date_created: Option<Scalar>,
    pub oof_shard: Option<Scalar>,
}

impl OrderDocument {
    /// Line items in the order they were sent; `null` and missing both mean none
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Delivery {
    pub name: Option<Scalar>,
    pub phone: Option<Scalar>,
    pub zip: Option<Scalar>,
    pub city: Option<Scalar>,
    pub address: Option<Scalar>,
    pub region: Option<Scalar>,
    pub email: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub transaction: Option<Scalar>,
    pub request_id: Option<Scalar>,
    pub currency: Option<Scalar>,
    pub provider: Option<Scalar>,
    pub amount: Option<Scalar>,
    pub payment_dt: Option<Scalar>,
    pub bank: Option<Scalar>,
    pub delivery_cost: Option<Scalar>,
    pub goods_total: Option<Scalar>,
    pub custom_fee: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Item {
    pub chrt_id: Option<Scalar>,
    pub track_number: Option<Scalar>,
    pub price: Option<Scalar>,
    pub rid: Option<Scalar>,
    pub name: Option<Scalar>,
    pub sale: Option<Scalar>,
    pub size: Option<Scalar>,
    pub total_price: Option<Scalar>,
    pub nm_id: Option<Scalar>,
    pub brand: Option<Scalar>,
    pub status: Option<Scalar>,
}

/// One entry of `GET /api/orders/recent`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderSummary {
    pub order_uid: Option<Scalar>,
    pub customer_id: Option<Scalar>,
    pub date_created: Option<Scalar>,
}
