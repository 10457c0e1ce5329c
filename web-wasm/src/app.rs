//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    add_form::{AttendeeForm, ExhibitorForm},
    board::{add_callback, report, Board},
    filters_panel::{AttendeeFilters, ExhibitorFilters},
    header::Header,
};
use crate::i18n::{t, Text};
use crate::store::LocalStorageStore;
use crate::vertical;
use trade_tracker_common::{Attendee, AttendeeFilter, Exhibitor, ExhibitorFilter, Facets, Language};

/// 表示中の一覧
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Vertical {
    #[default]
    Exhibitors,
    Attendees,
}

#[component]
pub fn App() -> impl IntoView {
    let (lang, set_lang) = signal(Language::load(&LocalStorageStore));
    let (vertical, set_vertical) = signal(Vertical::default());
    let (toast, set_toast) = signal(None::<String>);

    let exhibitors = RwSignal::new(vertical::open::<Exhibitor>());
    let attendees = RwSignal::new(vertical::open::<Attendee>());
    let exhibitor_query = RwSignal::new(ExhibitorFilter::default());
    let attendee_query = RwSignal::new(AttendeeFilter::default());

    // 選択肢は全件から作る（絞り込み結果ではなく）
    let exhibitor_facets =
        Memo::new(move |_| exhibitors.with(|t| Facets::for_exhibitors(&t.merged())));
    let attendee_facets =
        Memo::new(move |_| attendees.with(|t| Facets::for_attendees(&t.merged())));

    let on_select = Callback::new(move |v: Vertical| {
        set_vertical.set(v);
        set_toast.set(None);
    });

    let on_toggle_lang = Callback::new(move |_: ()| {
        let next = lang.get_untracked().toggle();
        next.save(&mut LocalStorageStore);
        set_lang.set(next);
    });

    let on_reset = Callback::new(move |_: ()| {
        let message = t(lang.get_untracked(), Text::ResetConfirm);
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let outcome = match vertical.get_untracked() {
            Vertical::Exhibitors => exhibitors.try_update(|t| t.reset()),
            Vertical::Attendees => attendees.try_update(|t| t.reset()),
        };
        if let Some(outcome) = outcome {
            report(lang, set_toast, outcome);
        }
    });

    let add_exhibitor = add_callback(exhibitors, lang, set_toast);
    let add_attendee = add_callback(attendees, lang, set_toast);

    view! {
        <div class="container">
            <Header
                lang=lang
                vertical=vertical
                on_select=on_select
                on_toggle_lang=on_toggle_lang
                on_reset=on_reset
            />

            <Show when=move || toast.get().is_some()>
                <div class="toast" on:click=move |_| set_toast.set(None)>
                    {move || toast.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || vertical.get() == Vertical::Exhibitors
                fallback=move || view! {
                    <AttendeeFilters lang=lang query=attendee_query facets=attendee_facets />
                    <AttendeeForm lang=lang on_add=add_attendee />
                    <Board tracker=attendees query=attendee_query lang=lang set_toast=set_toast />
                }
            >
                <ExhibitorFilters lang=lang query=exhibitor_query facets=exhibitor_facets />
                <ExhibitorForm lang=lang on_add=add_exhibitor />
                <Board tracker=exhibitors query=exhibitor_query lang=lang set_toast=set_toast />
            </Show>
        </div>
    }
}
