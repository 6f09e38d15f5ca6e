#![cfg(not(target_arch = "wasm32"))]

use credits_ui::{
    CreditPackage, CreditStorePage, CreditStorePageFormatters, CreditStorePageLabels,
    CreditStorePageProps,
};
use yew::prelude::*;

async fn render(props: CreditStorePageProps) -> String {
    yew::LocalServerRenderer::<CreditStorePage>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

fn labels() -> CreditStorePageLabels {
    CreditStorePageLabels {
        title: "Credit Store".to_string(),
        current_balance_label: "Current balance".to_string(),
        credits_unit: "credits".to_string(),
        purchase_button: "Buy now".to_string(),
        purchasing_button: "Processing...".to_string(),
        no_products: "No packages available".to_string(),
        error_title: "Something went wrong".to_string(),
        login_required: "You need an account to purchase credits".to_string(),
        login_button: None,
    }
}

fn formatters() -> CreditStorePageFormatters {
    CreditStorePageFormatters {
        format_credits: Callback::from(|count| format!("{} credits", count)),
        get_package_description: None,
    }
}

fn package(package_id: &str, credits: u32, price_string: &str) -> CreditPackage {
    CreditPackage {
        package_id: package_id.to_string(),
        product_id: format!("credits_{}", credits),
        title: format!("{} Credits", credits),
        description: None,
        credits,
        price: 0.0,
        price_string: price_string.to_string(),
        currency_code: "USD".to_string(),
    }
}

fn two_packages() -> Vec<CreditPackage> {
    vec![package("pkg_5", 5, "$4.99"), package("pkg_25", 25, "$19.99")]
}

fn store_props(is_authenticated: bool, packages: Vec<CreditPackage>) -> CreditStorePageProps {
    CreditStorePageProps {
        is_authenticated,
        balance: Some(10),
        packages,
        is_loading: false,
        is_purchasing: false,
        error: None,
        on_purchase: Callback::from(|_| {}),
        on_login_click: Callback::from(|_| {}),
        labels: labels(),
        formatters: formatters(),
        class: Classes::default(),
    }
}

#[tokio::test]
async fn test_balance_summary_requires_auth_and_value() {
    let html = render(store_props(true, two_packages())).await;
    assert!(html.contains("Current balance"));
    assert!(html.contains(">10 credits<"));

    let html = render(store_props(false, two_packages())).await;
    assert!(!html.contains("Current balance"));
    assert!(!html.contains(">10 credits<"));

    let mut props = store_props(true, two_packages());
    props.balance = None;
    let html = render(props).await;
    assert!(!html.contains("Current balance"));
}

#[tokio::test]
async fn test_error_block_only_for_nonempty_error() {
    let mut props = store_props(true, two_packages());
    props.error = Some("Purchase failed".to_string());
    let html = render(props).await;
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("Purchase failed"));

    let mut props = store_props(true, two_packages());
    props.error = Some(String::new());
    let html = render(props).await;
    assert!(!html.contains("role=\"alert\""));

    let html = render(store_props(true, two_packages())).await;
    assert!(!html.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_login_prompt_for_unauthenticated_visitors() {
    let html = render(store_props(false, two_packages())).await;
    assert!(html.contains("You need an account to purchase credits"));
    assert!(html.contains(">Log in<"));

    let html = render(store_props(true, two_packages())).await;
    assert!(!html.contains("You need an account to purchase credits"));
    assert!(!html.contains(">Log in<"));
}

#[tokio::test]
async fn test_login_button_label_override() {
    let mut props = store_props(false, two_packages());
    props.labels.login_button = Some("Sign in".to_string());
    let html = render(props).await;

    assert!(html.contains(">Sign in<"));
    assert!(!html.contains(">Log in<"));
}

#[tokio::test]
async fn test_login_prompt_shows_alongside_error_and_empty_state() {
    let mut props = store_props(false, Vec::new());
    props.error = Some("Session expired".to_string());
    let html = render(props).await;

    assert!(html.contains("Session expired"));
    assert!(html.contains(">Log in<"));
    assert!(html.contains("No packages available"));
}

#[tokio::test]
async fn test_loading_replaces_grid_and_empty_state() {
    let mut props = store_props(true, two_packages());
    props.is_loading = true;
    let html = render(props).await;
    assert!(html.contains("loading-spinner"));
    assert!(!html.contains("package-card"));
    assert!(!html.contains("No packages available"));

    let mut props = store_props(true, Vec::new());
    props.is_loading = true;
    let html = render(props).await;
    assert!(html.contains("loading-spinner"));
    assert!(!html.contains("No packages available"));
}

#[tokio::test]
async fn test_grid_renders_one_card_per_package() {
    let html = render(store_props(true, two_packages())).await;

    assert_eq!(html.matches("package-card").count(), 2);
    assert!(html.contains(">5 credits<"));
    assert!(html.contains(">25 credits<"));
    assert!(html.contains("$4.99"));
    assert!(html.contains("$19.99"));
    assert!(!html.contains("loading-spinner"));
    assert!(!html.contains("No packages available"));
}

#[tokio::test]
async fn test_package_description_is_an_optional_capability() {
    let html = render(store_props(true, two_packages())).await;
    assert!(!html.contains("package-description"));

    let mut props = store_props(true, two_packages());
    props.formatters.get_package_description =
        Some(Callback::from(|package_id: String| format!("About {}", package_id)));
    let html = render(props).await;
    assert_eq!(html.matches("package-description").count(), 2);
    assert!(html.contains("About pkg_5"));
    assert!(html.contains("About pkg_25"));
}

#[tokio::test]
async fn test_purchase_buttons_enabled_only_for_idle_authenticated_store() {
    let html = render(store_props(true, two_packages())).await;
    assert!(!html.contains("disabled"));
    assert_eq!(html.matches(">Buy now<").count(), 2);

    let mut props = store_props(true, two_packages());
    props.is_purchasing = true;
    let html = render(props).await;
    assert!(html.contains("disabled"));
    assert_eq!(html.matches(">Processing...<").count(), 2);
    assert!(!html.contains(">Buy now<"));

    let html = render(store_props(false, two_packages())).await;
    assert!(html.contains("disabled"));
    assert_eq!(html.matches(">Buy now<").count(), 2);
}

#[tokio::test]
async fn test_login_button_never_disabled() {
    // With no packages there is no purchase button, so any disabled marker
    // would have to come from the login button
    let html = render(store_props(false, Vec::new())).await;
    assert!(html.contains(">Log in<"));
    assert!(!html.contains("disabled"));
}

#[tokio::test]
async fn test_custom_class_is_appended_to_root() {
    let mut props = store_props(true, two_packages());
    props.class = classes!("store-layout");
    let html = render(props).await;

    assert!(html.contains("credit-store-page"));
    assert!(html.contains("store-layout"));
}
