//! Trade Tracker Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態レイヤー:
//! データセット + アノテーションストア → 合成 → 絞り込み → CSV出力

pub mod entity;
pub mod exhibitor;
pub mod attendee;
pub mod error;
pub mod storage;
pub mod dataset;
pub mod store;
pub mod merge;
pub mod filter;
pub mod export;
pub mod tracker;
pub mod language;

pub use entity::{Annotation, Entity, StatusValue, StorageKeys};
pub use exhibitor::{Exhibitor, NewExhibitor, VisitStatus};
pub use attendee::{Approval, Attendee, AttendeeEdits, NegotiationStatus, NewAttendee, Priority};
pub use error::{Error, Result, TrackerError};
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use dataset::{Bundled, Dataset};
pub use store::{AnnotationStore, EditMap, LoadWarning};
pub use merge::{merge, MergedEntity};
pub use filter::{AttendeeFilter, ExhibitorFilter, Facets, Filter, Selection};
pub use export::{export_file_name, to_csv};
pub use tracker::{Notice, Outcome, Tracker};
pub use language::Language;
