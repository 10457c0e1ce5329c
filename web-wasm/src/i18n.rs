//! 表示文言（en / zh）

use trade_tracker_common::{Language, Notice, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    Exhibitors,
    Attendees,
    Search,
    AllCategories,
    AllVenues,
    AllCountries,
    AllStatuses,
    AllPriorities,
    AllApprovals,
    StarredOnly,
    ClearFilters,
    Export,
    Reset,
    ResetConfirm,
    AddEntry,
    Name,
    Booth,
    Country,
    Category,
    Website,
    About,
    Contact,
    Company,
    JobTitle,
    Email,
    Phone,
    LinkedIn,
    Priority,
    Notes,
    Remove,
    Prev,
    Next,
    NoResults,
    Total,
    Starred,
    Approved,
    Pending,
}

pub fn t(lang: Language, text: Text) -> &'static str {
    use Text::*;
    match (lang, text) {
        (Language::En, AppTitle) => "Trade Show Tracker",
        (Language::Zh, AppTitle) => "展會追蹤",
        (Language::En, Exhibitors) => "Exhibitors",
        (Language::Zh, Exhibitors) => "參展商",
        (Language::En, Attendees) => "Attendees",
        (Language::Zh, Attendees) => "參加者",
        (Language::En, Search) => "Search...",
        (Language::Zh, Search) => "搜尋...",
        (Language::En, AllCategories) => "All Categories",
        (Language::Zh, AllCategories) => "所有分類",
        (Language::En, AllVenues) => "All Venues",
        (Language::Zh, AllVenues) => "所有場館",
        (Language::En, AllCountries) => "All Countries",
        (Language::Zh, AllCountries) => "所有國家",
        (Language::En, AllStatuses) => "All Statuses",
        (Language::Zh, AllStatuses) => "所有狀態",
        (Language::En, AllPriorities) => "All Priorities",
        (Language::Zh, AllPriorities) => "所有優先級",
        (Language::En, AllApprovals) => "All Approvals",
        (Language::Zh, AllApprovals) => "所有審核狀態",
        (Language::En, StarredOnly) => "Starred only",
        (Language::Zh, StarredOnly) => "只看星標",
        (Language::En, ClearFilters) => "Clear filters",
        (Language::Zh, ClearFilters) => "清除篩選",
        (Language::En, Export) => "Export CSV",
        (Language::Zh, Export) => "匯出 CSV",
        (Language::En, Reset) => "Reset Data",
        (Language::Zh, Reset) => "重置資料",
        (Language::En, ResetConfirm) => "Clear all stars, statuses, notes and added entries?",
        (Language::Zh, ResetConfirm) => "確定要清除所有星標、狀態、筆記和新增項目嗎？",
        (Language::En, AddEntry) => "Add",
        (Language::Zh, AddEntry) => "新增",
        (Language::En, Name) => "Name",
        (Language::Zh, Name) => "名稱",
        (Language::En, Booth) => "Booth",
        (Language::Zh, Booth) => "攤位",
        (Language::En, Country) => "Country",
        (Language::Zh, Country) => "國家",
        (Language::En, Category) => "Category",
        (Language::Zh, Category) => "分類",
        (Language::En, Website) => "Website",
        (Language::Zh, Website) => "網站",
        (Language::En, About) => "About",
        (Language::Zh, About) => "簡介",
        (Language::En, Contact) => "Contact",
        (Language::Zh, Contact) => "聯絡方式",
        (Language::En, Company) => "Company",
        (Language::Zh, Company) => "公司",
        (Language::En, JobTitle) => "Title",
        (Language::Zh, JobTitle) => "職稱",
        (Language::En, Email) => "Email",
        (Language::Zh, Email) => "電子郵件",
        (Language::En, Phone) => "Phone",
        (Language::Zh, Phone) => "電話",
        (Language::En, LinkedIn) => "LinkedIn",
        (Language::Zh, LinkedIn) => "LinkedIn",
        (Language::En, Priority) => "Priority",
        (Language::Zh, Priority) => "優先級",
        (Language::En, Notes) => "Notes",
        (Language::Zh, Notes) => "筆記",
        (Language::En, Remove) => "Remove",
        (Language::Zh, Remove) => "刪除",
        (Language::En, Prev) => "Prev",
        (Language::Zh, Prev) => "上一頁",
        (Language::En, Next) => "Next",
        (Language::Zh, Next) => "下一頁",
        (Language::En, NoResults) => "No results",
        (Language::Zh, NoResults) => "沒有符合的結果",
        (Language::En, Total) => "Total",
        (Language::Zh, Total) => "總計",
        (Language::En, Starred) => "Starred",
        (Language::Zh, Starred) => "星標",
        (Language::En, Approved) => "Approved",
        (Language::Zh, Approved) => "已審核",
        (Language::En, Pending) => "Pending",
        (Language::Zh, Pending) => "待審核",
    }
}

/// 操作結果のトースト文言
pub fn notice(lang: Language, notice: &Notice) -> String {
    match (lang, notice) {
        (Language::En, Notice::Starred { starred: true, .. }) => "Starred".to_string(),
        (Language::Zh, Notice::Starred { starred: true, .. }) => "已加星標".to_string(),
        (Language::En, Notice::Starred { starred: false, .. }) => "Star removed".to_string(),
        (Language::Zh, Notice::Starred { starred: false, .. }) => "已取消星標".to_string(),
        (Language::En, Notice::StatusUpdated { .. }) => "Status updated".to_string(),
        (Language::Zh, Notice::StatusUpdated { .. }) => "狀態已更新".to_string(),
        (Language::En, Notice::NotesSaved { .. }) => "Notes saved".to_string(),
        (Language::Zh, Notice::NotesSaved { .. }) => "筆記已儲存".to_string(),
        (Language::En, Notice::PriorityUpdated { .. }) => "Priority updated".to_string(),
        (Language::Zh, Notice::PriorityUpdated { .. }) => "優先級已更新".to_string(),
        (Language::En, Notice::Added { id }) => format!("Added {id}"),
        (Language::Zh, Notice::Added { id }) => format!("已新增 {id}"),
        (Language::En, Notice::Removed { id }) => format!("Removed {id}"),
        (Language::Zh, Notice::Removed { id }) => format!("已刪除 {id}"),
        (Language::En, Notice::Reset) => "All data cleared".to_string(),
        (Language::Zh, Notice::Reset) => "已清除所有資料".to_string(),
    }
}

pub fn rejection(lang: Language, error: &TrackerError) -> String {
    match (lang, error) {
        (Language::En, TrackerError::NotRemovable(_)) => "Cannot remove official entry".to_string(),
        (Language::Zh, TrackerError::NotRemovable(_)) => "無法刪除官方資料".to_string(),
        (Language::En, TrackerError::UnknownEntity(id)) => format!("Unknown entry: {id}"),
        (Language::Zh, TrackerError::UnknownEntity(id)) => format!("找不到項目: {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages() {
        assert_eq!(t(Language::En, Text::Export), "Export CSV");
        assert_eq!(t(Language::Zh, Text::Export), "匯出 CSV");
    }

    #[test]
    fn test_priority_notice() {
        let notice = Notice::PriorityUpdated {
            id: "at-1".to_string(),
            priority: None,
        };
        assert_eq!(super::notice(Language::Zh, &notice), "優先級已更新");
    }

    #[test]
    fn test_rejection_message() {
        let error = TrackerError::NotRemovable("ex-1".to_string());
        assert_eq!(rejection(Language::En, &error), "Cannot remove official entry");
    }
}
