use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreditBalanceBadgeProps {
    /// Current balance; `None` hides the badge entirely (unless loading)
    pub balance: Option<u32>,
    pub is_loading: bool,
    /// When supplied the badge renders as a button and announces its value
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill-shaped inline badge showing the user's credit balance, meant for
/// topbar placement. Positive balances get the `positive` tone, a drained
/// balance gets `zero`. Renders as a button when `on_click` is provided,
/// otherwise as a plain span.
#[function_component(CreditBalanceBadge)]
pub fn credit_balance_badge(props: &CreditBalanceBadgeProps) -> Html {
    if props.is_loading {
        return html! {
            <span
                class={classes!("credit-balance-badge", "loading", props.class.clone())}
                role="status"
                aria-label="Loading balance"
                aria-busy="true"
            >
                <span class="badge-pulse">{"..."}</span>
            </span>
        };
    }

    let Some(balance) = props.balance else {
        return html! {};
    };

    let tone = if balance > 0 { "positive" } else { "zero" };
    let content = html! {
        <>
            <span class="badge-coin" aria-hidden="true">{"🪙"}</span>
            <span class="badge-value">{balance}</span>
        </>
    };

    match props.on_click.clone() {
        Some(on_click) => {
            let onclick = Callback::from(move |_: MouseEvent| on_click.emit(()));
            html! {
                <button
                    type="button"
                    class={classes!("credit-balance-badge", tone, "clickable", props.class.clone())}
                    aria-label={format!("Credit balance: {}", balance)}
                    onclick={onclick}
                >
                    {content}
                </button>
            }
        }
        None => html! {
            <span class={classes!("credit-balance-badge", tone, props.class.clone())}>
                {content}
            </span>
        },
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_clicking_badge_emits_once() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let clicks = Rc::new(RefCell::new(0u32));
        let on_click = {
            let clicks = clicks.clone();
            Callback::from(move |_: ()| *clicks.borrow_mut() += 1)
        };

        yew::Renderer::<CreditBalanceBadge>::with_root_and_props(
            root.clone(),
            CreditBalanceBadgeProps {
                balance: Some(5),
                is_loading: false,
                on_click: Some(on_click),
                class: Classes::default(),
            },
        )
        .render();
        gloo::timers::future::TimeoutFuture::new(20).await;

        let button = root
            .query_selector("button")
            .unwrap()
            .expect("badge should render a button when on_click is set");
        button.unchecked_into::<web_sys::HtmlElement>().click();
        gloo::timers::future::TimeoutFuture::new(20).await;

        assert_eq!(*clicks.borrow(), 1);
    }
}
