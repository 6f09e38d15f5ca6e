use yew::prelude::*;
use shared::ConsumableUsageRecord;
use crate::types::{UsageHistoryPageFormatters, UsageHistoryPageLabels};
use super::loading_spinner::LoadingSpinner;
use super::MISSING_VALUE;

#[derive(Properties, PartialEq)]
pub struct UsageHistoryPageProps {
    /// Accumulated usage records, rendered in the order given
    pub usages: Vec<ConsumableUsageRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    #[prop_or_default]
    pub on_load_more: Option<Callback<()>>,
    #[prop_or_default]
    pub has_more: bool,
    pub labels: UsageHistoryPageLabels,
    pub formatters: UsageHistoryPageFormatters,
    #[prop_or_default]
    pub class: Classes,
    /// Custom markup for the empty state; the `no_records` label otherwise
    #[prop_or_default]
    pub empty_state: Option<Html>,
}

/// One usage event reduced to the strings both layouts render.
struct UsageRowContent {
    date: String,
    filename: String,
}

fn usage_row_content(
    record: &ConsumableUsageRecord,
    formatters: &UsageHistoryPageFormatters,
) -> UsageRowContent {
    let filename = match record.filename.as_ref().filter(|f| !f.is_empty()) {
        Some(filename) => filename.clone(),
        None => MISSING_VALUE.to_string(),
    };

    UsageRowContent {
        date: formatters.format_date.emit(record.created_at.clone()),
        filename,
    }
}

/// Paginated list of credit consumption events, rendered simultaneously as a
/// table (wide viewports) and as stacked cards (narrow viewports); CSS on the
/// two wrappers decides which one is visible.
#[function_component(UsageHistoryPage)]
pub fn usage_history_page(props: &UsageHistoryPageProps) -> Html {
    let error = props.error.as_ref().filter(|e| !e.is_empty());

    html! {
        <div class={classes!("usage-history-page", props.class.clone())}>
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
            } else if props.usages.is_empty() {
                match props.empty_state.clone() {
                    Some(empty_state) => empty_state,
                    None => html! { <p class="history-empty">{&props.labels.no_records}</p> },
                }
            } else {
                let rows: Vec<UsageRowContent> = props
                    .usages
                    .iter()
                    .map(|record| usage_row_content(record, &props.formatters))
                    .collect();
                html! {
                    <>
                        {usage_table(&props.labels, &rows)}
                        {usage_cards(&rows)}
                        {load_more_block(props)}
                    </>
                }
            }}
        </div>
    }
}

fn usage_table(labels: &UsageHistoryPageLabels, rows: &[UsageRowContent]) -> Html {
    html! {
        <div class="history-table-wrap">
            <table class="history-table" aria-label={labels.title.clone()}>
                <thead>
                    <tr>
                        <th class="col-date">{&labels.column_date}</th>
                        <th class="col-filename">{&labels.column_filename}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr>
                            <td class="col-date">{&row.date}</td>
                            <td class="col-filename">{&row.filename}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn usage_cards(rows: &[UsageRowContent]) -> Html {
    html! {
        <div class="history-cards">
            {for rows.iter().map(|row| html! {
                <div class="history-card">
                    <p class="card-date">{&row.date}</p>
                    <p class="card-filename">{&row.filename}</p>
                </div>
            })}
        </div>
    }
}

fn load_more_block(props: &UsageHistoryPageProps) -> Html {
    match props.on_load_more.clone() {
        Some(on_load_more) if props.has_more => {
            let onclick = Callback::from(move |_: MouseEvent| {
                log::info!("📄 Load more usages clicked");
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
