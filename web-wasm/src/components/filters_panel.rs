//! 絞り込みパネル

use leptos::prelude::*;
use crate::i18n::{t, Text};
use crate::vertical::WebVertical;
use trade_tracker_common::{
    Approval, Attendee, AttendeeFilter, Exhibitor, ExhibitorFilter, Facets, Language,
    NegotiationStatus, Priority, Selection, StatusValue, VisitStatus,
};

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn selected_text(selection: &Selection<String>) -> String {
    match selection {
        Selection::All => String::new(),
        Selection::Only(value) => value.clone(),
    }
}

/// 列挙値の選択を <select> の値にする（"" = すべて）
fn selected_key<T>(selection: &Selection<T>, key: impl Fn(&T) -> &'static str) -> &'static str {
    match selection {
        Selection::All => "",
        Selection::Only(value) => key(value),
    }
}

/// 文字列の選択肢（"" = すべて）
fn choice_options(all_label: &'static str, values: Vec<String>) -> impl IntoView {
    view! {
        <option value="">{all_label}</option>
        {values
            .into_iter()
            .map(|v| {
                let label = v.clone();
                view! { <option value=v>{label}</option> }
            })
            .collect_view()}
    }
}

fn clear_button<Q>(lang: ReadSignal<Language>, query: RwSignal<Q>) -> impl IntoView
where
    Q: Default + Send + Sync + 'static,
{
    view! {
        <button class="btn btn-tertiary btn-small" on:click=move |_| query.set(Q::default())>
            {move || t(lang.get(), Text::ClearFilters)}
        </button>
    }
}

fn status_options<E: WebVertical>(lang: Language) -> impl IntoView {
    view! {
        <option value="">{t(lang, Text::AllStatuses)}</option>
        {E::Status::ALL
            .iter()
            .map(|s| view! { <option value=s.as_str()>{E::status_label(*s, lang)}</option> })
            .collect_view()}
    }
}

#[component]
pub fn ExhibitorFilters(
    lang: ReadSignal<Language>,
    query: RwSignal<ExhibitorFilter>,
    facets: Memo<Facets>,
) -> impl IntoView {
    view! {
        <div class="settings-panel filters">
            <input
                type="text"
                placeholder=move || t(lang.get(), Text::Search)
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />

            <select
                prop:value=move || query.with(|q| selected_text(&q.category))
                on:change=move |ev| {
                    query.update(|q| q.category = non_empty(event_target_value(&ev)).into())
                }
            >
                {move || choice_options(t(lang.get(), Text::AllCategories), facets.get().categories)}
            </select>

            <select
                prop:value=move || query.with(|q| selected_text(&q.venue))
                on:change=move |ev| {
                    query.update(|q| q.venue = non_empty(event_target_value(&ev)).into())
                }
            >
                {move || choice_options(t(lang.get(), Text::AllVenues), facets.get().venues)}
            </select>

            <select
                prop:value=move || query.with(|q| selected_text(&q.country))
                on:change=move |ev| {
                    query.update(|q| q.country = non_empty(event_target_value(&ev)).into())
                }
            >
                {move || choice_options(t(lang.get(), Text::AllCountries), facets.get().countries)}
            </select>

            <select
                prop:value=move || query.with(|q| selected_key(&q.status, VisitStatus::as_str).to_string())
                on:change=move |ev| {
                    let status = VisitStatus::parse(&event_target_value(&ev));
                    query.update(|q| q.status = Selection::from(status))
                }
            >
                {move || status_options::<Exhibitor>(lang.get())}
            </select>

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || query.with(|q| q.only_starred)
                    on:change=move |ev| query.update(|q| q.only_starred = event_target_checked(&ev))
                />
                {move || t(lang.get(), Text::StarredOnly)}
            </label>

            {clear_button(lang, query)}
        </div>
    }
}

#[component]
pub fn AttendeeFilters(
    lang: ReadSignal<Language>,
    query: RwSignal<AttendeeFilter>,
    facets: Memo<Facets>,
) -> impl IntoView {
    view! {
        <div class="settings-panel filters">
            <input
                type="text"
                placeholder=move || t(lang.get(), Text::Search)
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />

            <select
                prop:value=move || query.with(|q| selected_text(&q.category))
                on:change=move |ev| {
                    query.update(|q| q.category = non_empty(event_target_value(&ev)).into())
                }
            >
                {move || choice_options(t(lang.get(), Text::AllCategories), facets.get().categories)}
            </select>

            <select
                prop:value=move || query.with(|q| selected_key(&q.status, NegotiationStatus::as_str).to_string())
                on:change=move |ev| {
                    let status = NegotiationStatus::parse(&event_target_value(&ev));
                    query.update(|q| q.status = Selection::from(status))
                }
            >
                {move || status_options::<Attendee>(lang.get())}
            </select>

            <select
                prop:value=move || query.with(|q| selected_key(&q.priority, Priority::as_str).to_string())
                on:change=move |ev| {
                    let priority = Priority::parse(&event_target_value(&ev));
                    query.update(|q| q.priority = Selection::from(priority))
                }
            >
                <option value="">{move || t(lang.get(), Text::AllPriorities)}</option>
                {Priority::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                    .collect_view()}
            </select>

            <select
                prop:value=move || query.with(|q| selected_key(&q.approval, Approval::as_str).to_string())
                on:change=move |ev| {
                    let approval = Approval::parse(&event_target_value(&ev));
                    query.update(|q| q.approval = Selection::from(approval))
                }
            >
                <option value="">{move || t(lang.get(), Text::AllApprovals)}</option>
                <option value=Approval::Approved.as_str()>{move || t(lang.get(), Text::Approved)}</option>
                <option value=Approval::PendingApproval.as_str()>
                    {move || t(lang.get(), Text::Pending)}
                </option>
            </select>

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || query.with(|q| q.only_starred)
                    on:change=move |ev| query.update(|q| q.only_starred = event_target_checked(&ev))
                />
                {move || t(lang.get(), Text::StarredOnly)}
            </label>

            {clear_button(lang, query)}
        </div>
    }
}
