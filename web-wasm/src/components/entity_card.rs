//! エンティティカード（スター・ステータス・優先級・メモ）

use leptos::prelude::*;
use crate::i18n::{t, Text};
use crate::vertical::WebVertical;
use trade_tracker_common::{Language, MergedEntity, Priority, StatusValue};

#[component]
pub fn EntityCard<E>(
    item: MergedEntity<E>,
    lang: Language,
    on_star: Callback<String>,
    on_status: Callback<(String, E::Status)>,
    on_notes: Callback<(String, String)>,
    on_priority: Callback<(String, Option<Priority>)>,
    on_remove: Callback<String>,
) -> impl IntoView
where
    E: WebVertical,
{
    let id = item.id().to_string();
    let name = item.entity.name().to_string();
    let meta = E::card_meta(&item.entity, lang);
    let annotation = item.annotation.clone();
    let current_status = annotation.status;

    let star_label = if annotation.is_starred { "★" } else { "☆" };
    let card_class = if annotation.is_starred {
        "entity-card entity-card-starred"
    } else {
        "entity-card"
    };

    let status_options = E::Status::ALL
        .iter()
        .map(|status| {
            view! {
                <option value=status.as_str() selected={*status == current_status}>
                    {E::status_label(*status, lang)}
                </option>
            }
        })
        .collect_view();

    // 参加者のみ（"" = データセットの値に戻す）
    let priority_select = E::editable_priority(&item.entity).map(|current| {
        let id = id.clone();
        view! {
            <select
                class="priority-select"
                on:change=move |ev| on_priority.run((id.clone(), Priority::parse(&event_target_value(&ev))))
            >
                <option value="" selected={current.is_none()}>{t(lang, Text::Priority)}</option>
                {Priority::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_str() selected={current == Some(*p)}>{p.as_str()}</option> })
                    .collect_view()}
            </select>
        }
    });

    view! {
        <div class=card_class>
            <div class="entity-card-header">
                <button
                    class="star-button"
                    on:click={
                        let id = id.clone();
                        move |_| on_star.run(id.clone())
                    }
                >
                    {star_label}
                </button>
                <span class="entity-name">{name}</span>
                {item.created.then(|| {
                    let id = id.clone();
                    view! {
                        <button
                            class="btn btn-tertiary btn-small"
                            on:click=move |_| on_remove.run(id.clone())
                        >
                            {t(lang, Text::Remove)}
                        </button>
                    }
                })}
            </div>

            <ul class="entity-meta">
                {meta.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>

            <select
                class="status-select"
                on:change={
                    let id = id.clone();
                    move |ev| {
                        if let Some(status) = E::Status::parse(&event_target_value(&ev)) {
                            on_status.run((id.clone(), status));
                        }
                    }
                }
            >
                {status_options}
            </select>

            {priority_select}

            <textarea
                class="notes"
                placeholder=t(lang, Text::Notes)
                prop:value=annotation.notes.clone()
                on:change=move |ev| on_notes.run((id.clone(), event_target_value(&ev)))
            />
        </div>
    }
}
