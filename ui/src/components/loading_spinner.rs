use yew::prelude::*;

/// Centered busy indicator shared by the store and history pages.
/// Internal component, not part of the crate barrel.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="loading-spinner" role="status" aria-label="Loading" aria-busy="true">
            <div class="spinner" aria-hidden="true"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spinner_announces_busy_state() {
        let html = yew::LocalServerRenderer::<LoadingSpinner>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("role=\"status\""));
        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("aria-label=\"Loading\""));
    }
}
