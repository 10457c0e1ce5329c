//! CSV出力
//!
//! 全フィールドをダブルクォートで囲み、内部の `"` は `""` にする。
//! 空の入力ではヘッダ行のみ。

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::merge::MergedEntity;
use chrono::NaiveDate;

/// ダウンロード時の MIME タイプ
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// CSV文字列を生成
pub fn to_csv<'a, E, I>(items: I) -> Result<String>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a MergedEntity<E>>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(E::csv_header())?;
    for item in items {
        writer.write_record(item.csv_fields())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Storage(format!("CSV is not UTF-8: {e}")))
}

/// `<prefix>_export_<YYYY-MM-DD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_export_{}.csv", prefix, date.format("%Y-%m-%d"))
}
