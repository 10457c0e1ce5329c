//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::Vertical;
use crate::i18n::{t, Text};
use trade_tracker_common::Language;

#[component]
pub fn Header(
    lang: ReadSignal<Language>,
    vertical: ReadSignal<Vertical>,
    on_select: Callback<Vertical>,
    on_toggle_lang: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let tab = move |target: Vertical, label: Text| {
        view! {
            <button
                class=move || if vertical.get() == target { "tab tab-active" } else { "tab" }
                on:click=move |_| on_select.run(target)
            >
                {move || t(lang.get(), label)}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1>{move || t(lang.get(), Text::AppTitle)}</h1>
            <nav class="tabs">
                {tab(Vertical::Exhibitors, Text::Exhibitors)}
                {tab(Vertical::Attendees, Text::Attendees)}
            </nav>
            <div class="header-actions">
                <button class="btn btn-secondary btn-small" on:click=move |_| on_toggle_lang.run(())>
                    {move || match lang.get() {
                        Language::En => "中文",
                        Language::Zh => "English",
                    }}
                </button>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_reset.run(())>
                    {move || t(lang.get(), Text::Reset)}
                </button>
            </div>
        </header>
    }
}
