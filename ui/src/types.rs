//! Label and formatter bundles injected into the page components.
//!
//! Labels carry every user-facing string so hosts keep full control over
//! localization; the structs deserialize straight from camelCased i18n JSON.
//! Formatters are Yew [`Callback`]s so they satisfy the `PartialEq` bound on
//! component properties (compared by function identity, not behavior).

use serde::{Deserialize, Serialize};
use shared::ConsumableSource;
use yew::Callback;

/// Label strings for [`CreditStorePage`](crate::CreditStorePage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditStorePageLabels {
    pub title: String,
    pub current_balance_label: String,
    /// Unit word for raw credit counts; not consumed by the current markup,
    /// which delegates unit text to `format_credits`
    pub credits_unit: String,
    pub purchase_button: String,
    pub purchasing_button: String,
    pub no_products: String,
    pub error_title: String,
    pub login_required: String,
    /// Overrides the login button text; "Log in" when absent
    pub login_button: Option<String>,
}

/// Formatting callbacks for [`CreditStorePage`](crate::CreditStorePage).
#[derive(Debug, Clone, PartialEq)]
pub struct CreditStorePageFormatters {
    pub format_credits: Callback<u32, String>,
    /// Resolves a package id to a descriptive line; the description
    /// paragraph is omitted entirely when this capability is absent
    pub get_package_description: Option<Callback<String, String>>,
}

/// Label strings for [`PurchaseHistoryPage`](crate::PurchaseHistoryPage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseHistoryPageLabels {
    pub title: String,
    pub column_date: String,
    pub column_credits: String,
    pub column_source: String,
    /// Header for a product column that is not rendered yet
    pub column_product: String,
    pub column_amount: String,
    pub no_records: String,
    pub load_more: String,
}

/// Formatting callbacks for [`PurchaseHistoryPage`](crate::PurchaseHistoryPage).
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseHistoryPageFormatters {
    pub format_date: Callback<String, String>,
    /// Formats a price given in minor units with its currency code
    pub format_amount: Callback<(i64, String), String>,
    pub format_source: Callback<ConsumableSource, String>,
}

/// Label strings for [`UsageHistoryPage`](crate::UsageHistoryPage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageHistoryPageLabels {
    pub title: String,
    pub column_date: String,
    pub column_filename: String,
    pub no_records: String,
    pub load_more: String,
}

/// Formatting callbacks for [`UsageHistoryPage`](crate::UsageHistoryPage).
#[derive(Debug, Clone, PartialEq)]
pub struct UsageHistoryPageFormatters {
    pub format_date: Callback<String, String>,
}
