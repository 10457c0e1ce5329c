//! 一覧ボード（絞り込み結果・統計・エクスポート）

use leptos::prelude::*;
use crate::components::{
    entity_card::EntityCard, export_button::ExportButton, pager::Pager, stats_panel::StatsPanel,
};
use crate::download::download_csv;
use crate::i18n::{self, t, Text};
use crate::store::LocalStorageStore;
use crate::vertical::WebVertical;
use trade_tracker_common::filter::paginate;
use trade_tracker_common::{Language, Outcome, Priority, Tracker};

pub const PER_PAGE: usize = 24;

pub type WebTracker<E> = Tracker<E, LocalStorageStore>;

/// 操作結果をトーストに出す
pub fn report(lang: ReadSignal<Language>, set_toast: WriteSignal<Option<String>>, outcome: Outcome) {
    let lang = lang.get_untracked();
    let message = match outcome {
        Ok(notice) => i18n::notice(lang, &notice),
        Err(e) => i18n::rejection(lang, &e),
    };
    set_toast.set(Some(message));
}

/// 追加フォーム用のコールバック
pub fn add_callback<E: WebVertical>(
    tracker: RwSignal<WebTracker<E>>,
    lang: ReadSignal<Language>,
    set_toast: WriteSignal<Option<String>>,
) -> Callback<E::Draft> {
    Callback::new(move |draft: E::Draft| {
        if let Some(outcome) = tracker.try_update(|t| t.add_entity(draft)) {
            report(lang, set_toast, outcome);
        }
    })
}

#[component]
pub fn Board<E>(
    tracker: RwSignal<WebTracker<E>>,
    query: RwSignal<E::Query>,
    lang: ReadSignal<Language>,
    set_toast: WriteSignal<Option<String>>,
) -> impl IntoView
where
    E: WebVertical,
{
    let (page, set_page) = signal(1usize);

    let filtered = Signal::derive(move || {
        let q = query.get();
        tracker.with(|t| t.filtered(&q))
    });

    // 条件が変わったら1ページ目へ
    Effect::new(move |_| {
        query.track();
        set_page.set(1);
    });

    let total_items = Signal::derive(move || filtered.with(|items| items.len()));
    let total_pages = Signal::derive(move || {
        filtered.with(|items| paginate(items, 1, PER_PAGE).total_pages)
    });

    let on_star = Callback::new(move |id: String| {
        if let Some(outcome) = tracker.try_update(|t| t.toggle_star(&id)) {
            report(lang, set_toast, outcome);
        }
    });
    let on_status = Callback::new(move |(id, status): (String, E::Status)| {
        if let Some(outcome) = tracker.try_update(|t| t.set_status(&id, status)) {
            report(lang, set_toast, outcome);
        }
    });
    let on_notes = Callback::new(move |(id, notes): (String, String)| {
        if let Some(outcome) = tracker.try_update(|t| t.set_notes(&id, notes)) {
            report(lang, set_toast, outcome);
        }
    });
    let on_priority = Callback::new(move |(id, priority): (String, Option<Priority>)| {
        if let Some(outcome) = tracker.try_update(|t| E::set_priority(t, &id, priority)).flatten() {
            report(lang, set_toast, outcome);
        }
    });
    let on_remove = Callback::new(move |id: String| {
        if let Some(outcome) = tracker.try_update(|t| t.remove_entity(&id)) {
            report(lang, set_toast, outcome);
        }
    });

    let on_export = move |_| {
        let q = query.get_untracked();
        match tracker.with_untracked(|t| t.export_csv(&q)) {
            Ok(csv) => {
                let file_name = E::file_name(chrono::Utc::now().date_naive());
                if let Err(e) = download_csv(&file_name, &csv) {
                    gloo::console::error!(format!("download failed: {e:?}"));
                }
            }
            Err(e) => gloo::console::error!(format!("export failed: {e}")),
        }
    };

    view! {
        <div class="board">
            <div class="board-toolbar">
                <ExportButton lang=lang count=total_items on_export=on_export />
            </div>

            <StatsPanel lang=lang items=filtered />

            <div class="entity-list">
                {move || {
                    let lang = lang.get();
                    filtered.with(|items| {
                        let current = paginate(items, page.get(), PER_PAGE);
                        if current.items.is_empty() {
                            view! { <p class="text-muted">{t(lang, Text::NoResults)}</p> }.into_any()
                        } else {
                            current
                                .items
                                .iter()
                                .cloned()
                                .map(|item| {
                                    view! {
                                        <EntityCard
                                            item=item
                                            lang=lang
                                            on_star=on_star
                                            on_status=on_status
                                            on_notes=on_notes
                                            on_priority=on_priority
                                            on_remove=on_remove
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    })
                }}
            </div>

            <Pager
                lang=lang
                page=page
                set_page=set_page
                total_pages=total_pages
                total_items=total_items
            />
        </div>
    }
}
