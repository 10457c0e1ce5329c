//! 絞り込み・検索
//!
//! 全条件のAND。元の順序を保ち、該当なしなら空を返す（失敗しない）。
//! 付随して、選択肢の一覧（Facets）、カテゴリ別件数、ページ分割も提供する。

use crate::attendee::{Approval, Attendee, NegotiationStatus, Priority};
use crate::entity::Entity;
use crate::exhibitor::{Exhibitor, VisitStatus};
use crate::merge::MergedEntity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 1次元の選択（All = 絞り込みなし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// 値が欠けている場合は All のときだけ通す
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(wanted), Some(v)) => wanted == v,
            (Selection::Only(_), None) => false,
        }
    }
}

impl Selection<String> {
    pub fn admits_str(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(wanted), Some(v)) => wanted == v,
            (Selection::Only(_), None) => false,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// 1系統分の絞り込み条件
pub trait Filter<E: Entity> {
    fn matches(&self, item: &MergedEntity<E>) -> bool;
}

/// 条件に合うものを元の順序で返す
pub fn apply<'a, E, F>(items: &'a [MergedEntity<E>], filter: &F) -> Vec<&'a MergedEntity<E>>
where
    E: Entity,
    F: Filter<E> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// 大文字小文字を区別しない部分一致（空の検索語は全件一致）
pub fn matches_search<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExhibitorFilter {
    pub search: String,
    pub category: Selection<String>,
    pub venue: Selection<String>,
    pub country: Selection<String>,
    pub status: Selection<VisitStatus>,
    pub only_starred: bool,
}

impl Filter<Exhibitor> for ExhibitorFilter {
    fn matches(&self, item: &MergedEntity<Exhibitor>) -> bool {
        let e = &item.entity;
        matches_search(&self.search, [e.name.as_str()])
            && self.category.admits_str(e.category.as_deref())
            && self.venue.admits_str(e.venue())
            && self.country.admits_str(e.country.as_deref())
            && self.status.admits(&item.annotation.status)
            && (!self.only_starred || item.annotation.is_starred)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendeeFilter {
    pub search: String,
    pub category: Selection<String>,
    pub status: Selection<NegotiationStatus>,
    pub priority: Selection<Priority>,
    pub approval: Selection<Approval>,
    pub only_starred: bool,
}

impl Filter<Attendee> for AttendeeFilter {
    fn matches(&self, item: &MergedEntity<Attendee>) -> bool {
        let a = &item.entity;
        matches_search(
            &self.search,
            [a.name.as_str(), a.company.as_str(), a.job_title.as_str()],
        ) && self.category.admits(&a.category)
            && self.status.admits(&item.annotation.status)
            && self.priority.admits_opt(a.priority.as_ref())
            && self.approval.admits(&a.approval_status)
            && (!self.only_starred || item.annotation.is_starred)
    }
}

/// 絞り込みの選択肢（重複なし・ソート済み）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub venues: Vec<String>,
    pub countries: Vec<String>,
}

impl Facets {
    pub fn for_exhibitors(items: &[MergedEntity<Exhibitor>]) -> Self {
        Self {
            categories: distinct(items.iter().filter_map(|m| m.entity.category.as_deref())),
            venues: distinct(items.iter().filter_map(|m| m.entity.venue())),
            countries: distinct(items.iter().filter_map(|m| m.entity.country.as_deref())),
        }
    }

    pub fn for_attendees(items: &[MergedEntity<Attendee>]) -> Self {
        Self {
            categories: distinct(items.iter().filter_map(|m| m.entity.category())),
            venues: Vec::new(),
            countries: distinct(
                items
                    .iter()
                    .map(|m| m.entity.country.as_str())
                    .filter(|c| !c.is_empty()),
            ),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// カテゴリ別件数（グラフ表示用）。カテゴリなしは数えない
pub fn category_counts<'a, E: Entity + 'a>(
    items: impl IntoIterator<Item = &'a MergedEntity<E>>,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        if let Some(category) = item.entity.category() {
            *counts.entry(category.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// 1ページ分
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1始まり（範囲外は最終ページに丸める）
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// 配列をページ分割する（page は1始まり）
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}
