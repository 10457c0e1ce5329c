//! 対象（出展者/参加者）ごとのCLI差分
//!
//! コマンド処理は `commands` で共通化し、ここでは絞り込み条件・追加入力・表示行を組み立てる。

use crate::cli::{AddArgs, FilterArgs, Vertical};
use crate::config::Config;
use crate::error::{CliError, Result};
use std::path::Path;
use trade_tracker_common::{
    Approval, Attendee, AttendeeFilter, Bundled, Dataset, Entity, Exhibitor, ExhibitorFilter,
    Facets, FileStore, Filter, KeyValueStore, MergedEntity, NegotiationStatus, NewAttendee,
    NewExhibitor, Notice, Priority, Selection, StatusValue, Tracker,
};

pub trait CliVertical: Bundled {
    type Query: Filter<Self>;

    const VERTICAL: Vertical;

    fn build_filter(args: &FilterArgs) -> Result<Self::Query>;

    fn draft(args: AddArgs) -> Result<Self::Draft>;

    fn facets(items: &[MergedEntity<Self>]) -> Facets;

    /// 一覧の1行
    fn summary(item: &MergedEntity<Self>) -> String;

    /// 詳細表示の (ラベル, 値)
    fn details(entity: &Self) -> Vec<(&'static str, String)>;

    /// 英語表記などの別名
    fn status_alias(_normalized: &str) -> Option<Self::Status> {
        None
    }

    /// 目標優先級の上書き（参加者のみ）
    fn set_priority<B: KeyValueStore>(
        _tracker: &mut Tracker<Self, B>,
        _id: &str,
        _value: &str,
    ) -> Result<Notice> {
        Err(CliError::InvalidValue(format!("{} に優先級はありません", Self::VERTICAL)))
    }
}

/// ステータス文字列を解釈（表記・大文字小文字・区切りの揺れを許容）
pub fn parse_status<E: CliVertical>(input: &str) -> Result<E::Status> {
    if let Some(status) = E::Status::parse(input.trim()) {
        return Ok(status);
    }
    let wanted = normalize(input);
    E::Status::ALL
        .iter()
        .copied()
        .find(|s| normalize(s.as_str()) == wanted)
        .or_else(|| E::status_alias(&wanted))
        .ok_or_else(|| {
            let choices: Vec<&str> = E::Status::ALL.iter().map(|s| s.as_str()).collect();
            CliError::UnknownStatus(format!("{} (choices: {})", input, choices.join(", ")))
        })
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// データセットとファイルストアを開く
pub fn open<E: CliVertical>(config: &Config, data_dir: &Path) -> Result<Tracker<E, FileStore>> {
    let dataset = match config.dataset_for(E::VERTICAL) {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::DatasetNotFound(path.display().to_string()));
            }
            log::info!("using dataset {}", path.display());
            Dataset::from_file(path)?
        }
        None => E::bundled()?,
    };
    let backend = FileStore::open(data_dir)?;
    let tracker = Tracker::new(dataset, backend);
    for warning in tracker.load_warnings() {
        eprintln!("⚠ {}（空の状態で続行します）", warning);
    }
    Ok(tracker)
}

fn text_selection(value: &Option<String>) -> Selection<String> {
    value.clone().into()
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn star(item: &MergedEntity<impl Entity>) -> &'static str {
    if item.annotation.is_starred {
        "★"
    } else {
        "☆"
    }
}

impl CliVertical for Exhibitor {
    type Query = ExhibitorFilter;

    const VERTICAL: Vertical = Vertical::Exhibitors;

    fn build_filter(args: &FilterArgs) -> Result<ExhibitorFilter> {
        let status = match &args.status {
            Some(s) => Selection::Only(parse_status::<Self>(s)?),
            None => Selection::All,
        };
        Ok(ExhibitorFilter {
            search: args.search.clone(),
            category: text_selection(&args.category),
            venue: text_selection(&args.venue),
            country: text_selection(&args.country),
            status,
            only_starred: args.starred,
        })
    }

    fn draft(args: AddArgs) -> Result<NewExhibitor> {
        let defaults = NewExhibitor::default();
        Ok(NewExhibitor {
            name: args.name,
            booth: args.booth,
            country: args.country.unwrap_or_default(),
            category: args.category.unwrap_or(defaults.category),
            website: args.website,
            about: args.about,
            contact: args.contact,
        })
    }

    fn facets(items: &[MergedEntity<Self>]) -> Facets {
        Facets::for_exhibitors(items)
    }

    fn summary(item: &MergedEntity<Self>) -> String {
        let e = &item.entity;
        format!(
            "{} {:<14} {:<28} {:<22} {:<8} {:<14} {}",
            star(item),
            e.iid,
            e.name,
            or_dash(e.venue()),
            or_dash(e.booth_number()),
            or_dash(e.country.as_deref()),
            item.annotation.status.as_str(),
        )
    }

    fn details(e: &Self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", e.iid.clone()),
            ("Name", e.name.clone()),
            ("Venue", or_dash(e.venue())),
            ("Booth", or_dash(e.booth_number())),
            ("Category", or_dash(e.category.as_deref())),
            ("Country", or_dash(e.country.as_deref())),
            ("Website", or_dash(e.website.as_deref())),
            ("Contact", or_dash(e.contact.as_deref())),
            ("About", or_dash(e.about.as_deref())),
        ]
    }
}

impl CliVertical for Attendee {
    type Query = AttendeeFilter;

    const VERTICAL: Vertical = Vertical::Attendees;

    fn build_filter(args: &FilterArgs) -> Result<AttendeeFilter> {
        let status = match &args.status {
            Some(s) => Selection::Only(parse_status::<Self>(s)?),
            None => Selection::All,
        };
        let priority = match &args.priority {
            Some(p) => Selection::Only(parse_priority(p)?),
            None => Selection::All,
        };
        let approval = match &args.approval {
            Some(a) => Selection::Only(
                Approval::parse(a).ok_or_else(|| CliError::InvalidValue(format!("approval: {a}")))?,
            ),
            None => Selection::All,
        };
        Ok(AttendeeFilter {
            search: args.search.clone(),
            category: text_selection(&args.category),
            status,
            priority,
            approval,
            only_starred: args.starred,
        })
    }

    fn draft(args: AddArgs) -> Result<NewAttendee> {
        let priority = args.priority.as_deref().map(parse_priority).transpose()?;
        Ok(NewAttendee {
            name: args.name,
            category: args.category.unwrap_or_default(),
            email: args.email,
            phone_number: args.phone,
            company: args.company,
            job_title: args.title,
            linkedin: args.linkedin,
            country: args.country.unwrap_or_default(),
            priority,
        })
    }

    fn facets(items: &[MergedEntity<Self>]) -> Facets {
        Facets::for_attendees(items)
    }

    fn summary(item: &MergedEntity<Self>) -> String {
        let a = &item.entity;
        format!(
            "{} {:<14} {:<20} {:<22} {:<10} {:<4} {}",
            star(item),
            a.id,
            a.name,
            a.company,
            a.category,
            a.priority.map(|p| p.as_str()).unwrap_or("-"),
            item.annotation.status.as_str(),
        )
    }

    fn details(a: &Self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", a.id.clone()),
            ("Name", a.name.clone()),
            ("Category", or_dash(Some(a.category.as_str()))),
            ("Company", or_dash(Some(a.company.as_str()))),
            ("Title", or_dash(Some(a.job_title.as_str()))),
            ("Email", or_dash(Some(a.email.as_str()))),
            ("Phone", or_dash(Some(a.phone_number.as_str()))),
            ("LinkedIn", or_dash(Some(a.linkedin.as_str()))),
            ("Country", or_dash(Some(a.country.as_str()))),
            ("Priority", or_dash(a.priority.map(|p| p.as_str()))),
            ("Approval", a.approval_status.as_str().to_string()),
            ("Ticket", or_dash(Some(a.ticket_name.as_str()))),
        ]
    }

    fn status_alias(normalized: &str) -> Option<NegotiationStatus> {
        match normalized {
            "notstarted" => Some(NegotiationStatus::NotStarted),
            "inprogress" | "negotiating" => Some(NegotiationStatus::InProgress),
            "confirmed" => Some(NegotiationStatus::Confirmed),
            "notinterested" => Some(NegotiationStatus::NotInterested),
            _ => None,
        }
    }

    fn set_priority<B: KeyValueStore>(
        tracker: &mut Tracker<Self, B>,
        id: &str,
        value: &str,
    ) -> Result<Notice> {
        let priority = match value.trim() {
            "-" => None,
            v => Some(parse_priority(v)?),
        };
        Ok(tracker.set_priority(id, priority)?)
    }
}

fn parse_priority(input: &str) -> Result<Priority> {
    Priority::parse(input).ok_or_else(|| CliError::InvalidValue(format!("priority: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_tracker_common::{MemoryStore, VisitStatus};

    #[test]
    fn test_parse_visit_status_variants() {
        assert_eq!(parse_status::<Exhibitor>("To Visit").unwrap(), VisitStatus::ToVisit);
        assert_eq!(parse_status::<Exhibitor>("to-visit").unwrap(), VisitStatus::ToVisit);
        assert_eq!(parse_status::<Exhibitor>("FOLLOW_UP").unwrap(), VisitStatus::FollowUp);
        assert!(matches!(
            parse_status::<Exhibitor>("maybe"),
            Err(CliError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_parse_negotiation_status_aliases() {
        assert_eq!(
            parse_status::<Attendee>("洽談中").unwrap(),
            NegotiationStatus::InProgress
        );
        assert_eq!(
            parse_status::<Attendee>("Not Interested").unwrap(),
            NegotiationStatus::NotInterested
        );
    }

    #[test]
    fn test_build_attendee_filter() {
        let args = FilterArgs {
            priority: Some("high".to_string()),
            approval: Some("pending".to_string()),
            starred: true,
            ..Default::default()
        };
        let filter = Attendee::build_filter(&args).unwrap();
        assert_eq!(filter.priority, Selection::Only(Priority::High));
        assert_eq!(filter.approval, Selection::Only(Approval::PendingApproval));
        assert!(filter.only_starred);
        assert_eq!(filter.status, Selection::All);

        let bad = FilterArgs {
            approval: Some("maybe".to_string()),
            ..Default::default()
        };
        assert!(Attendee::build_filter(&bad).is_err());
    }

    #[test]
    fn test_exhibitor_draft_defaults_category() {
        let draft = Exhibitor::draft(AddArgs {
            name: "Acme".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(draft.category, "X-Factor");
        assert_eq!(draft.name, "Acme");
    }

    #[test]
    fn test_set_priority_only_for_attendees() {
        let mut attendees = Tracker::new(Attendee::bundled().unwrap(), MemoryStore::new());
        Attendee::set_priority(&mut attendees, "at-2", "low").unwrap();
        assert_eq!(attendees.get("at-2").unwrap().entity.priority, Some(Priority::Low));
        assert!(matches!(
            Attendee::set_priority(&mut attendees, "at-2", "urgent"),
            Err(CliError::InvalidValue(_))
        ));

        let mut exhibitors = Tracker::new(Exhibitor::bundled().unwrap(), MemoryStore::new());
        assert!(matches!(
            Exhibitor::set_priority(&mut exhibitors, "ex-1", "high"),
            Err(CliError::InvalidValue(_))
        ));
    }
}
