//! Document editing: create, merge, and remove records in the resume's lists.
//!
//! These operations are data-level only. The "never remove the last entry" rule
//! belongs to the editing surface and is checked by the handlers.

use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::SectionEntry;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("No entry {id} in {section}")]
    EntryNotFound { section: &'static str, id: Uuid },

    #[error("Line {index} out of range (entry has {len})")]
    LineOutOfRange { index: usize, len: usize },

    #[error("Cannot remove the last entry in {section}")]
    LastEntry { section: &'static str },
}

/// Appends a blank record with a fresh identifier and returns it.
pub fn add_entry<T: SectionEntry>(list: &mut Vec<T>) -> &T {
    list.push(T::blank());
    let last = list.len() - 1;
    &list[last]
}

pub fn find_entry<T: SectionEntry>(list: &[T], id: Uuid) -> Result<&T, EditError> {
    list.iter()
        .find(|e| e.id() == id)
        .ok_or(EditError::EntryNotFound {
            section: T::SECTION,
            id,
        })
}

pub fn find_entry_mut<T: SectionEntry>(list: &mut [T], id: Uuid) -> Result<&mut T, EditError> {
    list.iter_mut()
        .find(|e| e.id() == id)
        .ok_or(EditError::EntryNotFound {
            section: T::SECTION,
            id,
        })
}

/// Merges `patch` into the record with `id`. Identity never changes.
pub fn update_entry<T: SectionEntry>(
    list: &mut [T],
    id: Uuid,
    patch: T::Patch,
) -> Result<&T, EditError> {
    let entry = find_entry_mut(list, id)?;
    entry.merge(patch);
    Ok(&*entry)
}

/// Filters the record with `id` out of the list, preserving the order of the rest.
pub fn remove_entry<T: SectionEntry>(list: &mut Vec<T>, id: Uuid) -> Result<(), EditError> {
    let before = list.len();
    list.retain(|e| e.id() != id);
    if list.len() == before {
        return Err(EditError::EntryNotFound {
            section: T::SECTION,
            id,
        });
    }
    Ok(())
}

/// Like `remove_entry`, but refuses to leave the list empty.
pub fn remove_entry_keep_one<T: SectionEntry>(
    list: &mut Vec<T>,
    id: Uuid,
) -> Result<(), EditError> {
    find_entry(list, id)?;
    if list.len() <= 1 {
        return Err(EditError::LastEntry {
            section: T::SECTION,
        });
    }
    remove_entry(list, id)
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet / highlight lines
// ────────────────────────────────────────────────────────────────────────────

pub fn push_line(lines: &mut Vec<String>, text: String) {
    lines.push(text);
}

pub fn set_line(lines: &mut [String], index: usize, text: String) -> Result<(), EditError> {
    let len = lines.len();
    let slot = lines
        .get_mut(index)
        .ok_or(EditError::LineOutOfRange { index, len })?;
    *slot = text;
    Ok(())
}

pub fn remove_line(lines: &mut Vec<String>, index: usize) -> Result<String, EditError> {
    if index >= lines.len() {
        return Err(EditError::LineOutOfRange {
            index,
            len: lines.len(),
        });
    }
    Ok(lines.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, ExperiencePatch, SkillBlock, SkillPatch};

    #[test]
    fn test_add_entry_appends_blank_with_unique_id() {
        let mut list = vec![SkillBlock::blank()];
        let first_id = list[0].id;
        let added_id = add_entry(&mut list).id;
        assert_eq!(list.len(), 2);
        assert_ne!(first_id, added_id);
        assert_eq!(list[1].id, added_id);
        assert!(list[1].items.is_empty());
    }

    #[test]
    fn test_update_entry_merges_by_id() {
        let mut list = vec![SkillBlock::blank(), SkillBlock::blank()];
        let target = list[1].id;
        update_entry(
            &mut list,
            target,
            SkillPatch {
                items: Some("Rust, SQL".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(list[0].items.is_empty());
        assert_eq!(list[1].items, "Rust, SQL");
        assert_eq!(list[1].id, target);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut list = vec![Experience::blank()];
        let missing = Uuid::new_v4();
        let err = update_entry(&mut list, missing, ExperiencePatch::default()).unwrap_err();
        assert_eq!(
            err,
            EditError::EntryNotFound {
                section: "experiences",
                id: missing
            }
        );
    }

    #[test]
    fn test_remove_entry_preserves_order() {
        let mut list = vec![
            SkillBlock::blank(),
            SkillBlock::blank(),
            SkillBlock::blank(),
        ];
        let ids: Vec<Uuid> = list.iter().map(|s| s.id).collect();
        remove_entry(&mut list, ids[1]).unwrap();
        assert_eq!(list.iter().map(|s| s.id).collect::<Vec<_>>(), vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_remove_entry_may_empty_the_list() {
        let mut list = vec![SkillBlock::blank()];
        let id = list[0].id;
        remove_entry(&mut list, id).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_keep_one_refuses_last_entry() {
        let mut list = vec![Experience::blank()];
        let id = list[0].id;
        assert_eq!(
            remove_entry_keep_one(&mut list, id),
            Err(EditError::LastEntry {
                section: "experiences"
            })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_keep_one_reports_missing_before_last() {
        let mut list = vec![Experience::blank()];
        let missing = Uuid::new_v4();
        assert!(matches!(
            remove_entry_keep_one(&mut list, missing),
            Err(EditError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_line_editing() {
        let mut lines = Vec::new();
        push_line(&mut lines, "first".to_string());
        push_line(&mut lines, "second".to_string());
        set_line(&mut lines, 0, "edited".to_string()).unwrap();
        assert_eq!(lines, vec!["edited", "second"]);

        assert_eq!(remove_line(&mut lines, 1).unwrap(), "second");
        assert_eq!(lines, vec!["edited"]);
    }

    #[test]
    fn test_line_index_out_of_range() {
        let mut lines = vec!["only".to_string()];
        assert_eq!(
            set_line(&mut lines, 3, "x".to_string()),
            Err(EditError::LineOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            remove_line(&mut lines, 1),
            Err(EditError::LineOutOfRange { index: 1, len: 1 })
        );
    }
}
