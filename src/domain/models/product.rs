use serde::{Deserialize, Serialize};

/// Product as served by `GET /api/products`.
///
/// `price` is kept in minor currency units (cents) so display never goes
/// through floating point. Sparse text fields decode to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: i64,
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

/// Format an amount in cents as dollars, e.g. `12345` -> `$123.45`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
