//! Presentational components for the consumable-credits feature: a compact
//! balance badge, a credit store page, and purchase/usage history pages.
//!
//! Every component is a pure function of its props. Data fetching, purchase
//! orchestration, authentication, and pagination all live in the host
//! application; this crate receives ready-to-render snapshots plus injected
//! labels and formatters, and produces markup.

pub mod components;
pub mod types;

pub use components::credit_balance_badge::{CreditBalanceBadge, CreditBalanceBadgeProps};
pub use components::credit_store_page::{CreditStorePage, CreditStorePageProps};
pub use components::purchase_history_page::{PurchaseHistoryPage, PurchaseHistoryPageProps};
pub use components::usage_history_page::{UsageHistoryPage, UsageHistoryPageProps};

pub use types::{
    CreditStorePageFormatters, CreditStorePageLabels, PurchaseHistoryPageFormatters,
    PurchaseHistoryPageLabels, UsageHistoryPageFormatters, UsageHistoryPageLabels,
};

pub use shared::{
    ConsumablePurchaseRecord, ConsumableSource, ConsumableUsageRecord, CreditPackage,
};
