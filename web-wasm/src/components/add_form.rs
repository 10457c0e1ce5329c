//! 手動追加フォーム

use leptos::prelude::*;
use crate::i18n::{t, Text};
use trade_tracker_common::{Language, NewAttendee, NewExhibitor, Priority};

/// ラベル付きテキスト入力
fn text_field(lang: ReadSignal<Language>, label: Text, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{move || t(lang.get(), label)}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ExhibitorForm(lang: ReadSignal<Language>, on_add: Callback<NewExhibitor>) -> impl IntoView {
    let defaults = NewExhibitor::default();
    let name = RwSignal::new(String::new());
    let booth = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let category = RwSignal::new(defaults.category.clone());
    let website = RwSignal::new(String::new());
    let about = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());

    let submit = move |_| {
        if name.get_untracked().trim().is_empty() {
            return;
        }
        on_add.run(NewExhibitor {
            name: name.get_untracked(),
            booth: booth.get_untracked(),
            country: country.get_untracked(),
            category: category.get_untracked(),
            website: website.get_untracked(),
            about: about.get_untracked(),
            contact: contact.get_untracked(),
        });
        for field in [name, booth, country, website, about, contact] {
            field.set(String::new());
        }
        category.set(defaults.category.clone());
    };

    view! {
        <details class="add-form">
            <summary>{move || t(lang.get(), Text::AddEntry)}</summary>
            <div class="settings-grid">
                {text_field(lang, Text::Name, name)}
                {text_field(lang, Text::Booth, booth)}
                {text_field(lang, Text::Country, country)}
                {text_field(lang, Text::Category, category)}
                {text_field(lang, Text::Website, website)}
                {text_field(lang, Text::About, about)}
                {text_field(lang, Text::Contact, contact)}
            </div>
            <button
                class="btn btn-primary"
                disabled=move || name.get().trim().is_empty()
                on:click=submit
            >
                {move || t(lang.get(), Text::AddEntry)}
            </button>
        </details>
    }
}

#[component]
pub fn AttendeeForm(lang: ReadSignal<Language>, on_add: Callback<NewAttendee>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let job_title = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let linkedin = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let priority = RwSignal::new(None::<Priority>);

    let submit = move |_| {
        if name.get_untracked().trim().is_empty() {
            return;
        }
        on_add.run(NewAttendee {
            name: name.get_untracked(),
            category: category.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone.get_untracked(),
            company: company.get_untracked(),
            job_title: job_title.get_untracked(),
            linkedin: linkedin.get_untracked(),
            country: country.get_untracked(),
            priority: priority.get_untracked(),
        });
        for field in [name, category, company, job_title, email, phone, linkedin, country] {
            field.set(String::new());
        }
        priority.set(None);
    };

    view! {
        <details class="add-form">
            <summary>{move || t(lang.get(), Text::AddEntry)}</summary>
            <div class="settings-grid">
                {text_field(lang, Text::Name, name)}
                {text_field(lang, Text::Category, category)}
                {text_field(lang, Text::Company, company)}
                {text_field(lang, Text::JobTitle, job_title)}
                {text_field(lang, Text::Email, email)}
                {text_field(lang, Text::Phone, phone)}
                {text_field(lang, Text::LinkedIn, linkedin)}
                {text_field(lang, Text::Country, country)}
                <div class="form-group">
                    <label>{move || t(lang.get(), Text::Priority)}</label>
                    <select
                        prop:value=move || priority.get().map(|p| p.as_str()).unwrap_or("")
                        on:change=move |ev| priority.set(Priority::parse(&event_target_value(&ev)))
                    >
                        <option value="">"-"</option>
                        {Priority::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <button
                class="btn btn-primary"
                disabled=move || name.get().trim().is_empty()
                on:click=submit
            >
                {move || t(lang.get(), Text::AddEntry)}
            </button>
        </details>
    }
}
