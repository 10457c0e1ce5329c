//! ビューモデルの合成
//!
//! データセット（元の順序）+ ユーザー追加エントリ（新しい順）に上書き項目を反映し、
//! アノテーションを付ける。
//! 毎回新しいVecを返す。

use crate::entity::{Annotation, Entity};
use crate::store::{AnnotationMap, EditMap};

/// エンティティ + アノテーション（読み取り専用、永続化しない）
#[derive(Debug, Clone, PartialEq)]
pub struct MergedEntity<E: Entity> {
    pub entity: E,
    pub annotation: Annotation<E::Status>,
    /// ユーザー追加エントリか（削除可能か）
    pub created: bool,
}

impl<E: Entity> MergedEntity<E> {
    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn csv_fields(&self) -> Vec<String> {
        self.entity.csv_fields(&self.annotation)
    }
}

pub fn merge<E: Entity>(
    static_entities: &[E],
    created_entities: &[E],
    annotations: &AnnotationMap<E::Status>,
    edits: &EditMap<E::Edits>,
) -> Vec<MergedEntity<E>> {
    let attach = |entity: &E, created: bool| {
        let mut entity = entity.clone();
        if let Some(edits) = edits.get(entity.id()) {
            entity.apply_edits(edits);
        }
        MergedEntity {
            annotation: annotations.get(entity.id()).cloned().unwrap_or_default(),
            entity,
            created,
        }
    };

    static_entities
        .iter()
        .map(|e| attach(e, false))
        .chain(created_entities.iter().map(|e| attach(e, true)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendee::{Attendee, AttendeeEdits, Priority};
    use crate::exhibitor::{Exhibitor, VisitStatus};
    use std::collections::HashSet;

    fn exhibitor(id: &str) -> Exhibitor {
        Exhibitor {
            iid: id.to_string(),
            name: format!("Company {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_counts_and_order() {
        let statics = vec![exhibitor("ex-1"), exhibitor("ex-2"), exhibitor("ex-3")];
        let created = vec![exhibitor("xf-new"), exhibitor("xf-old")];
        let merged = merge(&statics, &created, &AnnotationMap::new(), &EditMap::new());

        assert_eq!(merged.len(), statics.len() + created.len());
        let ids: Vec<&str> = merged.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["ex-1", "ex-2", "ex-3", "xf-new", "xf-old"]);

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), merged.len());
        assert!(!merged[0].created);
        assert!(merged[3].created);
    }

    #[test]
    fn test_merge_attaches_annotations() {
        let statics = vec![exhibitor("ex-1"), exhibitor("ex-2")];
        let mut annotations = AnnotationMap::new();
        annotations.insert(
            "ex-2".to_string(),
            Annotation {
                is_starred: true,
                status: VisitStatus::Contacted,
                notes: String::new(),
            },
        );
        // 存在しないIDのアノテーションは無視される
        annotations.insert("ex-99".to_string(), Annotation::default());

        let merged = merge(&statics, &[], &annotations, &EditMap::new());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].annotation, Annotation::default());
        assert!(merged[1].annotation.is_starred);
        assert_eq!(merged[1].annotation.status, VisitStatus::Contacted);
    }

    #[test]
    fn test_merge_empty_inputs() {
        let merged = merge::<Exhibitor>(&[], &[], &AnnotationMap::new(), &EditMap::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_applies_edits() {
        let statics = vec![
            Attendee {
                id: "at-1".to_string(),
                priority: Some(Priority::Low),
                ..Default::default()
            },
            Attendee {
                id: "at-2".to_string(),
                priority: Some(Priority::Medium),
                ..Default::default()
            },
        ];
        let mut edits = EditMap::new();
        edits.insert(
            "at-1".to_string(),
            AttendeeEdits {
                priority: Some(Priority::High),
            },
        );

        let merged = merge(&statics, &[], &AnnotationMap::new(), &edits);
        assert_eq!(merged[0].entity.priority, Some(Priority::High));
        assert_eq!(merged[1].entity.priority, Some(Priority::Medium));
        // 元のデータセットは変更しない
        assert_eq!(statics[0].priority, Some(Priority::Low));
    }
}
