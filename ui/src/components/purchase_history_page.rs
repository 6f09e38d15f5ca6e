use yew::prelude::*;
use shared::ConsumablePurchaseRecord;
use crate::types::{PurchaseHistoryPageFormatters, PurchaseHistoryPageLabels};
use super::loading_spinner::LoadingSpinner;
use super::MISSING_VALUE;

#[derive(Properties, PartialEq)]
pub struct PurchaseHistoryPageProps {
    /// Accumulated purchase records, newest pages appended by the host;
    /// rendered in the order given
    pub purchases: Vec<ConsumablePurchaseRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    #[prop_or_default]
    pub on_load_more: Option<Callback<()>>,
    #[prop_or_default]
    pub has_more: bool,
    pub labels: PurchaseHistoryPageLabels,
    pub formatters: PurchaseHistoryPageFormatters,
    #[prop_or_default]
    pub class: Classes,
    /// Custom markup for the empty state; the `no_records` label otherwise
    #[prop_or_default]
    pub empty_state: Option<Html>,
}

/// One purchase reduced to the strings both layouts render. The table and
/// the cards both consume this mapping, never the record directly.
struct PurchaseRowContent {
    date: String,
    credits: String,
    source: String,
    amount: String,
}

fn purchase_row_content(
    record: &ConsumablePurchaseRecord,
    formatters: &PurchaseHistoryPageFormatters,
) -> PurchaseRowContent {
    let amount = match record.price() {
        Some((cents, currency)) => formatters.format_amount.emit((cents, currency.to_string())),
        None => MISSING_VALUE.to_string(),
    };

    PurchaseRowContent {
        date: formatters.format_date.emit(record.created_at.clone()),
        // Purchases are always a gain
        credits: format!("+{}", record.credits),
        source: formatters.format_source.emit(record.source),
        amount,
    }
}

/// Paginated list of credit purchases, rendered simultaneously as a table
/// (wide viewports) and as stacked cards (narrow viewports); CSS on the two
/// wrappers decides which one is visible.
#[function_component(PurchaseHistoryPage)]
pub fn purchase_history_page(props: &PurchaseHistoryPageProps) -> Html {
    let error = props.error.as_ref().filter(|e| !e.is_empty());

    html! {
        <div class={classes!("purchase-history-page", props.class.clone())}>
            <h1 class="history-title">{&props.labels.title}</h1>

            {if let Some(error) = error {
                html! {
                    <div class="history-error" role="alert">
                        <p class="error-text">{error}</p>
                    </div>
                }
            } else { html! {} }}

            {if props.is_loading {
                html! { <LoadingSpinner /> }
            } else if props.purchases.is_empty() {
                match props.empty_state.clone() {
                    Some(empty_state) => empty_state,
                    None => html! { <p class="history-empty">{&props.labels.no_records}</p> },
                }
            } else {
                let rows: Vec<PurchaseRowContent> = props
                    .purchases
                    .iter()
                    .map(|record| purchase_row_content(record, &props.formatters))
                    .collect();
                html! {
                    <>
                        {purchase_table(&props.labels, &rows)}
                        {purchase_cards(&rows)}
                        {load_more_block(props)}
                    </>
                }
            }}
        </div>
    }
}

fn purchase_table(labels: &PurchaseHistoryPageLabels, rows: &[PurchaseRowContent]) -> Html {
    html! {
        <div class="history-table-wrap">
            <table class="history-table" aria-label={labels.title.clone()}>
                <thead>
                    <tr>
                        <th class="col-date">{&labels.column_date}</th>
                        <th class="col-credits">{&labels.column_credits}</th>
                        <th class="col-source">{&labels.column_source}</th>
                        <th class="col-amount">{&labels.column_amount}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr>
                            <td class="col-date">{&row.date}</td>
                            <td class="col-credits credits-gain">{&row.credits}</td>
                            <td class="col-source">{&row.source}</td>
                            <td class="col-amount">{&row.amount}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn purchase_cards(rows: &[PurchaseRowContent]) -> Html {
    html! {
        <div class="history-cards">
            {for rows.iter().map(|row| html! {
                <div class="history-card">
                    <div class="history-card-left">
                        <p class="card-date">{&row.date}</p>
                        <p class="card-source">{&row.source}</p>
                    </div>
                    <div class="history-card-right">
                        <p class="card-credits credits-gain">{&row.credits}</p>
                        <p class="card-amount">{&row.amount}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

fn load_more_block(props: &PurchaseHistoryPageProps) -> Html {
    match props.on_load_more.clone() {
        Some(on_load_more) if props.has_more => {
            let onclick = Callback::from(move |_: MouseEvent| {
                log::info!("📄 Load more purchases clicked");
                on_load_more.emit(());
            });
            html! {
                <div class="load-more">
                    <button class="btn btn-link load-more-btn" onclick={onclick}>
                        {&props.labels.load_more}
                    </button>
                </div>
            }
        }
        _ => html! {},
    }
}
