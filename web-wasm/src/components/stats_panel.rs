//! カテゴリ別件数・ステータス別件数の棒グラフ

use leptos::prelude::*;
use crate::i18n::{t, Text};
use crate::vertical::WebVertical;
use trade_tracker_common::filter::category_counts;
use trade_tracker_common::{Language, MergedEntity, StatusValue};

fn bar(label: String, count: usize, max: usize) -> impl IntoView {
    let width = if max == 0 { 0.0 } else { count as f32 / max as f32 * 100.0 };
    view! {
        <div class="stats-row">
            <span class="stats-label">{label}</span>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", width) />
            </div>
            <span class="stats-count">{count}</span>
        </div>
    }
}

#[component]
pub fn StatsPanel<E>(
    lang: ReadSignal<Language>,
    items: Signal<Vec<MergedEntity<E>>>,
) -> impl IntoView
where
    E: WebVertical,
{
    view! {
        <div class="stats-panel">
            {move || {
                let lang = lang.get();
                items.with(|items| {
                    let starred = items.iter().filter(|m| m.annotation.is_starred).count();
                    let categories = category_counts(items);
                    let max = categories.values().copied().max().unwrap_or(0);
                    let statuses: Vec<(String, usize)> = E::Status::ALL
                        .iter()
                        .map(|status| {
                            let count = items.iter().filter(|m| m.annotation.status == *status).count();
                            (E::status_label(*status, lang).to_string(), count)
                        })
                        .collect();

                    view! {
                        <p class="stats-summary">
                            {format!(
                                "{}: {} / {}: {}",
                                t(lang, Text::Total),
                                items.len(),
                                t(lang, Text::Starred),
                                starred
                            )}
                        </p>
                        <div class="stats-group">
                            {categories
                                .into_iter()
                                .map(|(category, count)| bar(category, count, max))
                                .collect_view()}
                        </div>
                        <div class="stats-group">
                            {statuses
                                .into_iter()
                                .map(|(label, count)| bar(label, count, items.len()))
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
