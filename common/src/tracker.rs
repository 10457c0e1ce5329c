//! 操作レイヤー
//!
//! データセットとアノテーションストアを束ね、UIから呼ばれる操作だけを公開する。
//! 状態が変わったら merged() / filtered() を呼び直して再計算する。

use crate::attendee::{Attendee, Priority};
use crate::dataset::Dataset;
use crate::entity::{Annotation, Entity};
use crate::error::{Result, TrackerError};
use crate::export;
use crate::filter::{self, Filter};
use crate::merge::{merge, MergedEntity};
use crate::storage::KeyValueStore;
use crate::store::{AnnotationStore, LoadWarning};

/// 成功時の通知種別（表示文言はUI側）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Starred { id: String, starred: bool },
    StatusUpdated { id: String },
    NotesSaved { id: String },
    PriorityUpdated { id: String, priority: Option<Priority> },
    Added { id: String },
    Removed { id: String },
    Reset,
}

pub type Outcome = std::result::Result<Notice, TrackerError>;

pub struct Tracker<E: Entity, B: KeyValueStore> {
    dataset: Dataset<E>,
    store: AnnotationStore<E, B>,
}

impl<E: Entity, B: KeyValueStore> Tracker<E, B> {
    pub fn new(dataset: Dataset<E>, backend: B) -> Self {
        let store = AnnotationStore::load(backend);
        Self { dataset, store }
    }

    pub fn dataset(&self) -> &Dataset<E> {
        &self.dataset
    }

    pub fn store(&self) -> &AnnotationStore<E, B> {
        &self.store
    }

    pub fn load_warnings(&self) -> &[LoadWarning] {
        self.store.load_warnings()
    }

    /// データセット + 追加エントリ + アノテーション
    pub fn merged(&self) -> Vec<MergedEntity<E>> {
        merge(
            self.dataset.entities(),
            self.store.created(),
            self.store.annotations(),
            self.store.edits(),
        )
    }

    /// 絞り込み結果（所有権付き）
    pub fn filtered<F: Filter<E> + ?Sized>(&self, filter: &F) -> Vec<MergedEntity<E>> {
        let merged = self.merged();
        filter::apply(&merged, filter).into_iter().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<MergedEntity<E>> {
        let entity = self
            .dataset
            .get(id)
            .or_else(|| self.store.created().iter().find(|e| e.id() == id))?;
        let mut entity = entity.clone();
        if let Some(edits) = self.store.edits().get(id) {
            entity.apply_edits(edits);
        }
        Some(MergedEntity {
            entity,
            annotation: self.store.annotation(id),
            created: self.store.is_created(id),
        })
    }

    pub fn annotation(&self, id: &str) -> Annotation<E::Status> {
        self.store.annotation(id)
    }

    pub fn toggle_star(&mut self, id: &str) -> Outcome {
        self.ensure_known(id)?;
        let starred = self.store.toggle_starred(id);
        Ok(Notice::Starred {
            id: id.to_string(),
            starred,
        })
    }

    pub fn set_status(&mut self, id: &str, status: E::Status) -> Outcome {
        self.ensure_known(id)?;
        self.store.set_status(id, status);
        Ok(Notice::StatusUpdated { id: id.to_string() })
    }

    pub fn set_notes(&mut self, id: &str, notes: impl Into<String>) -> Outcome {
        self.ensure_known(id)?;
        self.store.set_notes(id, notes);
        Ok(Notice::NotesSaved { id: id.to_string() })
    }

    pub fn add_entity(&mut self, draft: E::Draft) -> Outcome {
        let id = self.store.add_created_entity(draft, &self.dataset);
        log::info!("added {}", id);
        Ok(Notice::Added { id })
    }

    pub fn remove_entity(&mut self, id: &str) -> Outcome {
        match self.store.remove_created_entity(id) {
            Ok(_) => {
                log::info!("removed {}", id);
                Ok(Notice::Removed { id: id.to_string() })
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) -> Outcome {
        self.store.reset();
        Ok(Notice::Reset)
    }

    /// 絞り込み結果をCSVにする
    pub fn export_csv<F: Filter<E> + ?Sized>(&self, filter: &F) -> Result<String> {
        let merged = self.merged();
        export::to_csv(filter::apply(&merged, filter))
    }

    fn ensure_known(&self, id: &str) -> std::result::Result<(), TrackerError> {
        if self.dataset.contains(id) || self.store.is_created(id) {
            Ok(())
        } else {
            Err(TrackerError::UnknownEntity(id.to_string()))
        }
    }
}

impl<B: KeyValueStore> Tracker<Attendee, B> {
    /// 目標優先級を上書きする（None でデータセットの値に戻す）
    pub fn set_priority(&mut self, id: &str, priority: Option<Priority>) -> Outcome {
        self.ensure_known(id)?;
        self.store.update_edits(id, |e| e.priority = priority);
        let priority = self.get(id).and_then(|m| m.entity.priority);
        Ok(Notice::PriorityUpdated {
            id: id.to_string(),
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhibitor::{Exhibitor, NewExhibitor, VisitStatus};
    use crate::filter::{AttendeeFilter, ExhibitorFilter, Selection};
    use crate::storage::MemoryStore;

    fn dataset() -> Dataset<Exhibitor> {
        Dataset::from_json(
            r#"[
                {"iid": "ex-1", "名称": "Lumen Optics", "国家": "Japan"},
                {"iid": "ex-2", "名称": "Harbor Audio", "国家": "Taiwan"},
                {"iid": "ex-3", "名称": "Pixel Forge", "国家": "Taiwan"}
            ]"#,
        )
        .unwrap()
    }

    fn tracker() -> Tracker<Exhibitor, MemoryStore> {
        Tracker::new(dataset(), MemoryStore::new())
    }

    fn attendees() -> Dataset<Attendee> {
        Dataset::from_json(
            r#"[
                {"id": "at-1", "name": "Sora", "目標優先級": "低"},
                {"id": "at-2", "name": "Mei", "目標優先級": "高"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_star_then_filter_starred() {
        let mut t = tracker();
        let notice = t.toggle_star("ex-1").unwrap();
        assert_eq!(
            notice,
            Notice::Starred {
                id: "ex-1".to_string(),
                starred: true
            }
        );

        let filter = ExhibitorFilter {
            only_starred: true,
            ..Default::default()
        };
        let ids: Vec<String> = t.filtered(&filter).iter().map(|m| m.id().to_string()).collect();
        assert_eq!(ids, vec!["ex-1"]);
    }

    #[test]
    fn test_add_entity_appears_after_dataset_and_is_removable() {
        let mut t = tracker();
        let Notice::Added { id } = t
            .add_entity(NewExhibitor {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .unwrap()
        else {
            panic!("expected Added");
        };

        assert!(id.starts_with("xf-"));
        let merged = t.merged();
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[3].id(), id);
        assert!(merged[3].created);

        for static_id in ["ex-1", "ex-2", "ex-3"] {
            assert_eq!(
                t.remove_entity(static_id),
                Err(TrackerError::NotRemovable(static_id.to_string()))
            );
        }
        assert_eq!(t.merged().len(), 4);
        assert!(t.remove_entity(&id).is_ok());
        assert_eq!(t.merged().len(), 3);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut t = tracker();
        assert_eq!(
            t.set_status("ex-404", VisitStatus::Visited),
            Err(TrackerError::UnknownEntity("ex-404".to_string()))
        );
        assert!(t.store().annotations().is_empty());
    }

    #[test]
    fn test_status_survives_reload() {
        let mut backend = MemoryStore::new();
        {
            let mut t = Tracker::new(dataset(), &mut backend);
            t.set_status("ex-2", VisitStatus::Visited).unwrap();
            t.set_notes("ex-2", "follow up after keynote").unwrap();
        }

        let reloaded = Tracker::new(dataset(), backend);
        let a = reloaded.annotation("ex-2");
        assert_eq!(a.status, VisitStatus::Visited);
        assert_eq!(a.notes, "follow up after keynote");
    }

    #[test]
    fn test_export_uses_filtered_view() {
        let mut t = tracker();
        t.toggle_star("ex-3").unwrap();
        let filter = ExhibitorFilter {
            only_starred: true,
            ..Default::default()
        };
        let csv = t.export_csv(&filter).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("\"ex-3\",\"Pixel Forge\""));
    }

    #[test]
    fn test_get_merged_entity() {
        let mut t = tracker();
        t.set_status("ex-1", VisitStatus::Contacted).unwrap();
        let item = t.get("ex-1").unwrap();
        assert_eq!(item.annotation.status, VisitStatus::Contacted);
        assert!(!item.created);
        assert!(t.get("missing").is_none());
    }

    #[test]
    fn test_priority_override_survives_reload() {
        let mut backend = MemoryStore::new();
        {
            let mut t = Tracker::new(attendees(), &mut backend);
            assert_eq!(
                t.set_priority("at-1", Some(Priority::High)).unwrap(),
                Notice::PriorityUpdated {
                    id: "at-1".to_string(),
                    priority: Some(Priority::High)
                }
            );
        }

        let mut t = Tracker::new(attendees(), backend);
        assert_eq!(t.get("at-1").unwrap().entity.priority, Some(Priority::High));

        let high = AttendeeFilter {
            priority: Selection::Only(Priority::High),
            ..Default::default()
        };
        let ids: Vec<String> = t.filtered(&high).iter().map(|m| m.id().to_string()).collect();
        assert_eq!(ids, vec!["at-1", "at-2"]);

        let csv = t.export_csv(&high).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains("\"Sora\""));
        assert!(csv.lines().nth(1).unwrap().contains("\"高\""));

        // None でデータセットの値に戻る
        assert_eq!(
            t.set_priority("at-1", None).unwrap(),
            Notice::PriorityUpdated {
                id: "at-1".to_string(),
                priority: Some(Priority::Low)
            }
        );
        assert!(t.store().edits().is_empty());
        assert_eq!(
            t.set_priority("at-404", Some(Priority::Low)),
            Err(TrackerError::UnknownEntity("at-404".to_string()))
        );
    }
}
