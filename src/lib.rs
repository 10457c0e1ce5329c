//! trade-tracker CLI
//!
//! 展示会の出展者・参加者リストにスター・ステータス・メモを付け、CSVに出力する。

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
