use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin of a credit grant. The set of tags is owned by the backend;
/// the UI layer only carries the value through to an injected formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumableSource {
    /// Purchased through the web checkout
    Web,
    /// Purchased through the iOS in-app store
    Ios,
    /// Purchased through the Android in-app store
    Android,
    /// Granted for free (signup bonus, promotion)
    Free,
    /// Granted manually by an administrator
    Admin,
}

impl ConsumableSource {
    /// The lowercase wire tag for this source, matching its serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumableSource::Web => "web",
            ConsumableSource::Ios => "ios",
            ConsumableSource::Android => "android",
            ConsumableSource::Free => "free",
            ConsumableSource::Admin => "admin",
        }
    }
}

impl fmt::Display for ConsumableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsumableSource {
    type Err = UnknownSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(ConsumableSource::Web),
            "ios" => Ok(ConsumableSource::Ios),
            "android" => Ok(ConsumableSource::Android),
            "free" => Ok(ConsumableSource::Free),
            "admin" => Ok(ConsumableSource::Admin),
            other => Err(UnknownSourceError(other.to_string())),
        }
    }
}

/// Error returned when a source tag does not name a known [`ConsumableSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSourceError(pub String);

impl fmt::Display for UnknownSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown consumable source tag: {}", self.0)
    }
}

impl std::error::Error for UnknownSourceError {}

/// A purchasable credit package as offered by the store backend.
/// Prices arrive pre-formatted; no arithmetic is ever performed on them here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPackage {
    pub package_id: String,
    /// Store-side product identifier backing this package
    pub product_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Number of credits granted on purchase
    pub credits: u32,
    /// Numeric price in major currency units, for sorting/analytics only
    pub price: f64,
    /// Localized display price, rendered verbatim
    pub price_string: String,
    pub currency_code: String,
}

/// A single credit purchase. Credits are always a gain; price fields are
/// absent for free or administrative grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumablePurchaseRecord {
    pub id: i64,
    pub credits: u32,
    pub source: ConsumableSource,
    /// Payment-provider transaction reference, when one exists
    pub transaction_ref_id: Option<String>,
    pub product_id: Option<String>,
    /// Price paid in minor currency units; present iff `currency` is present
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    /// Creation timestamp as supplied by the backend; display formatting is injected
    pub created_at: String,
}

impl ConsumablePurchaseRecord {
    /// Price as a (minor-units, currency-code) pair, only when both halves
    /// are present. Records missing either half render a placeholder instead.
    pub fn price(&self) -> Option<(i64, &str)> {
        match (self.price_cents, self.currency.as_deref()) {
            (Some(cents), Some(currency)) => Some((cents, currency)),
            _ => None,
        }
    }
}

/// A single credit consumption event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumableUsageRecord {
    pub id: i64,
    /// Name of the file the credit was spent on, when applicable
    pub filename: Option<String>,
    pub created_at: String,
}
