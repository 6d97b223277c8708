//! Products and shopping cart
use crate::constants::CURRENCY_PREFIX;
use crate::numbers::{parse_price_cents, quantity_to_i64, units_to_cents};
use num_traits::cast::cast;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A product as returned by the store API. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Price in cents to avoid floating-point issues
    #[serde(rename = "price", deserialize_with = "lenient_price", default)]
    pub price_cents: i64,
    #[serde(deserialize_with = "lenient_text", default)]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_text", default)]
    pub short_description: Option<String>,
}

/// A line item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u64,
    pub name: String,
    #[serde(
        rename = "price",
        serialize_with = "cents_as_units",
        deserialize_with = "lenient_price",
        default
    )]
    pub price_cents: i64,
    pub quantity: u32,
    #[serde(deserialize_with = "lenient_text", default)]
    pub image: Option<String>,
}

impl CartLine {
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents
            .saturating_mul(quantity_to_i64(self.quantity))
    }
}

/// Shopping cart state. At most one line per product id, quantities >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

fn lenient_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let cents = match &value {
        Value::String(raw) => parse_price_cents(raw),
        Value::Number(n) => n.as_f64().map(units_to_cents),
        _ => None,
    };
    Ok(cents.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's serialize_with signature
fn cents_as_units<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let units = cast::<i64, f64>(*cents).unwrap_or_default() / 100.0;
    serializer.serialize_f64(units)
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored cart blob.
    ///
    /// Entries that do not deserialize or carry a zero quantity are dropped and
    /// duplicate ids are folded together, so the cart invariants hold after load.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob is not a JSON array.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Value> = serde_json::from_str(raw)?;
        let mut cart = Self::new();
        for entry in entries {
            match CartLine::deserialize(&entry) {
                Ok(line) if line.quantity > 0 => cart.merge_line(line),
                Ok(line) => log::debug!("dropping cart line {} with zero quantity", line.id),
                Err(e) => log::warn!("dropping unreadable cart line: {e}"),
            }
        }
        Ok(cart)
    }

    /// Parse a stored cart blob, starting empty when it is unusable.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    /// Serialize the cart as a JSON array of lines.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn merge_line(&mut self, line: CartLine) {
        if let Some(existing) = self.find_line_mut(line.id) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a cart line by product ID.
    #[must_use]
    pub fn find_line(&self, id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn find_line_mut(&mut self, id: u64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Add one unit of a product. Returns the new quantity for that product.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.find_line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                price_cents: product.price_cents,
                quantity: 1,
                image: product.image.clone(),
            });
            1
        }
    }

    /// Remove a product entirely. Returns whether a line was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Set the quantity of a line; zero or below removes it.
    /// Returns whether the cart changed. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: u64, quantity: i64) -> bool {
        if self.find_line(id).is_none() {
            return false;
        }
        if quantity <= 0 {
            return self.remove(id);
        }
        if let Some(line) = self.find_line_mut(id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        true
    }

    /// Badge count: sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price x quantity over all lines, in cents.
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.lines
            .iter()
            .map(CartLine::line_total_cents)
            .fold(0, i64::saturating_add)
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Format cents with the shekel prefix and two decimals, e.g. `₪20.00`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{CURRENCY_PREFIX}{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Find a product in a fetched collection.
#[must_use]
pub fn find_product(products: &[Product], id: u64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("P{id}"),
            "price": price,
        }))
        .unwrap()
    }

    #[test]
    fn product_accepts_string_and_number_prices() {
        let a: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":"12.50","image":""}"#).unwrap();
        assert_eq!(a.price_cents, 1250);
        assert_eq!(a.image, None);
        let b: Product = serde_json::from_str(
            r#"{"id":2,"name":"B","price":3.2,"image":"https://x/img.png","short_description":"hi"}"#,
        )
        .unwrap();
        assert_eq!(b.price_cents, 320);
        assert_eq!(b.image.as_deref(), Some("https://x/img.png"));
        assert_eq!(b.short_description.as_deref(), Some("hi"));
    }

    #[test]
    fn product_with_bad_price_costs_nothing() {
        let p: Product =
            serde_json::from_str(r#"{"id":3,"name":"C","price":"call us","image":false}"#)
                .unwrap();
        assert_eq!(p.price_cents, 0);
        assert_eq!(p.image, None);
    }

    #[test]
    fn huge_prices_saturate_instead_of_overflowing() {
        let mut cart = Cart::new();
        let pricey = product(5, "50000000000000000");
        cart.add(&pricey);
        cart.add(&pricey);
        cart.add(&product(6, "1e17"));
        assert_eq!(cart.find_line(6).map(|l| l.price_cents), Some(i64::MAX));
        assert_eq!(cart.total_cents(), i64::MAX);
    }

    #[test]
    fn update_quantity_ignores_unknown_ids() {
        let mut cart = Cart::new();
        cart.add(&product(1, "1.00"));
        assert!(!cart.update_quantity(99, 4));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn cart_serializes_prices_as_units() {
        let mut cart = Cart::new();
        cart.add(&product(7, "10.00"));
        let json = cart.to_json().unwrap();
        assert!(json.contains("\"price\":10.0"));
        assert!(json.contains("\"quantity\":1"));
    }

    #[test]
    fn load_folds_duplicates_and_drops_invalid_lines() {
        let cart = Cart::from_json(
            r#"[{"id":1,"name":"A","price":2,"quantity":1},
                {"id":1,"name":"A","price":2,"quantity":2},
                {"id":2,"name":"B","price":1,"quantity":0},
                {"id":3,"name":"C","price":1,"quantity":-4},
                "junk"]"#,
        );
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.find_line(1).map(|l| l.quantity), Some(3));
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        assert!(Cart::from_json("{oops").is_empty());
        assert!(Cart::from_json(r#"{"id":1}"#).is_empty());
    }

    #[test]
    fn format_price_uses_two_decimals() {
        assert_eq!(format_price(0), "₪0.00");
        assert_eq!(format_price(2000), "₪20.00");
        assert_eq!(format_price(1999), "₪19.99");
        assert_eq!(format_price(-250), "₪-2.50");
    }
}
