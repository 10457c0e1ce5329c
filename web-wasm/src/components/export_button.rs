//! エクスポートボタンコンポーネント

use leptos::prelude::*;
use crate::i18n::{t, Text};
use trade_tracker_common::Language;

#[component]
pub fn ExportButton<F>(
    lang: ReadSignal<Language>,
    count: Signal<usize>,
    on_export: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="export-buttons">
            <button
                class="btn btn-primary"
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                {move || format!("{} ({})", t(lang.get(), Text::Export), count.get())}
            </button>
        </div>
    }
}
