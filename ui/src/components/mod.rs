pub mod credit_balance_badge;
pub mod credit_store_page;
pub mod purchase_history_page;
pub mod usage_history_page;

mod loading_spinner;

pub use credit_balance_badge::CreditBalanceBadge;
pub use credit_store_page::CreditStorePage;
pub use purchase_history_page::PurchaseHistoryPage;
pub use usage_history_page::UsageHistoryPage;

/// Placeholder rendered wherever an optional record field has no value.
pub(crate) const MISSING_VALUE: &str = "–";
