//! ページ送り

use leptos::prelude::*;
use crate::i18n::{t, Text};
use trade_tracker_common::Language;

#[component]
pub fn Pager(
    lang: ReadSignal<Language>,
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    total_pages: Signal<usize>,
    total_items: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn btn-small"
                disabled=move || page.get() <= 1
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                {move || t(lang.get(), Text::Prev)}
            </button>
            <span class="pager-text">
                {move || format!(
                    "{} / {} ({} {})",
                    page.get().min(total_pages.get()),
                    total_pages.get(),
                    t(lang.get(), Text::Total),
                    total_items.get()
                )}
            </span>
            <button
                class="btn btn-small"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| set_page.update(|p| *p += 1)
            >
                {move || t(lang.get(), Text::Next)}
            </button>
        </div>
    }
}
