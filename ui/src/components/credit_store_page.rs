use yew::prelude::*;
use shared::CreditPackage;
use crate::types::{CreditStorePageFormatters, CreditStorePageLabels};
use super::loading_spinner::LoadingSpinner;

#[derive(Properties, PartialEq)]
pub struct CreditStorePageProps {
    pub is_authenticated: bool,
    /// Current balance; the summary block is hidden while this is `None`
    pub balance: Option<u32>,
    pub packages: Vec<CreditPackage>,
    pub is_loading: bool,
    /// True while the host is executing a purchase; disables every buy button
    pub is_purchasing: bool,
    pub error: Option<String>,
    /// Receives the package id of the clicked card
    pub on_purchase: Callback<String>,
    pub on_login_click: Callback<()>,
    pub labels: CreditStorePageLabels,
    pub formatters: CreditStorePageFormatters,
    #[prop_or_default]
    pub class: Classes,
}

/// Credit store with a balance summary, package grid, and loading/error
/// states, plus a login prompt for unauthenticated visitors.
///
/// Purchasing is fire-and-forget: clicking a buy button emits `on_purchase`
/// with the package id and nothing else; progress and outcome are reported
/// back by the host through `is_purchasing` and `error` on a later render.
#[function_component(CreditStorePage)]
pub fn credit_store_page(props: &CreditStorePageProps) -> Html {
    let error = props.error.as_ref().filter(|e| !e.is_empty());

    let on_login = {
        let on_login_click = props.on_login_click.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🔑 Login button clicked");
            on_login_click.emit(());
        })
    };
    let login_label = props
        .labels
        .login_button
        .clone()
        .unwrap_or_else(|| "Log in".to_string());

    html! {
        <div class={classes!("credit-store-page", props.class.clone())}>
            <h1 class="store-title">{&props.labels.title}</h1>

            {if let (true, Some(balance)) = (props.is_authenticated, props.balance) {
                html! {
                    <div class="balance-summary">
                        <p class="balance-label">{&props.labels.current_balance_label}</p>
                        <p class="balance-value">{props.formatters.format_credits.emit(balance)}</p>
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = error {
                html! {
                    <div class="store-error" role="alert">
                        <p class="error-title">{&props.labels.error_title}</p>
                        <p class="error-text">{error}</p>
                    </div>
                }
            } else { html! {} }}

            {if !props.is_authenticated {
                html! {
                    <div class="login-required">
                        <p class="login-message">{&props.labels.login_required}</p>
                        <button class="btn btn-primary login-btn" onclick={on_login}>
                            {login_label}
                        </button>
                    </div>
                }
            } else { html! {} }}

            {if props.is_loading {
                html! { <LoadingSpinner /> }
            } else if props.packages.is_empty() {
                html! { <p class="store-empty">{&props.labels.no_products}</p> }
            } else {
                html! {
                    <div class="package-grid">
                        {for props.packages.iter().map(|package| package_card(props, package))}
                    </div>
                }
            }}
        </div>
    }
}

fn package_card(props: &CreditStorePageProps, package: &CreditPackage) -> Html {
    let onclick = {
        let on_purchase = props.on_purchase.clone();
        let package_id = package.package_id.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🛒 Purchase clicked for package: {}", package_id);
            on_purchase.emit(package_id.clone());
        })
    };

    let description = props
        .formatters
        .get_package_description
        .as_ref()
        .map(|lookup| lookup.emit(package.package_id.clone()));

    html! {
        <div class="package-card">
            <p class="package-credits">{props.formatters.format_credits.emit(package.credits)}</p>
            {if let Some(description) = description {
                html! { <p class="package-description">{description}</p> }
            } else { html! {} }}
            <p class="package-price">{&package.price_string}</p>
            <button
                class="btn btn-primary purchase-btn"
                onclick={onclick}
                disabled={props.is_purchasing || !props.is_authenticated}
            >
                {if props.is_purchasing {
                    props.labels.purchasing_button.clone()
                } else {
                    props.labels.purchase_button.clone()
                }}
            </button>
        </div>
    }
}
