//! Data model for the intranet components.
//!
//! All entities live in memory for the lifetime of the page/app instance that
//! seeded them. People are read-only reference data addressed by id from
//! folders, documents and organizational units.

pub mod sample;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for model entities.
pub type EntityId = String;

/// Visibility policy on a folder or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharingType {
    /// Accessible to everybody in the company.
    General,
    /// Restricted to the owning organizational structure.
    Organization,
    /// Shared with named individuals only.
    Specific,
}

impl SharingType {
    /// Display label shown on sharing badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "Geral",
            Self::Organization => "Restrito",
            Self::Specific => "Específico",
        }
    }
}

/// A person referenced by ownership and sharing lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub email: String,
    pub avatar_url: String,
    pub is_manager: bool,
}

impl Person {
    /// Initials used as the avatar fallback in terminal rendering.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Look up a person by id in the reference directory.
pub fn person_by_id<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.id == id)
}

/// A document owned by exactly one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    /// Short format tag, e.g. "PDF" or "XLSX".
    pub doc_type: String,
    /// Human-readable size, kept as seeded ("2.4 MB").
    pub size: String,
    pub last_modified: NaiveDate,
    pub owner_id: EntityId,
    pub sharing: SharingType,
    #[serde(default)]
    pub shared_with: Vec<EntityId>,
    #[serde(default)]
    pub starred: bool,
}

/// A container of documents and sub-folders.
///
/// Folders form a rooted tree per top-level collection, independent from the
/// organizational hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: EntityId,
    pub name: String,
    pub documents: Vec<Document>,
    pub sub_folders: Vec<Folder>,
    pub owner_id: EntityId,
    pub sharing: SharingType,
    #[serde(default)]
    pub shared_with: Vec<EntityId>,
    pub expanded: bool,
}

impl Folder {
    /// Create an empty folder with a generated id.
    pub fn new(name: &str, owner_id: &str, sharing: SharingType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            documents: Vec::new(),
            sub_folders: Vec::new(),
            owner_id: owner_id.to_string(),
            sharing,
            shared_with: Vec::new(),
            expanded: false,
        }
    }

    /// Flip `expanded` on the folder with `id` anywhere in the tree.
    ///
    /// Every branch is visited exactly once; siblings and descendants of the
    /// matched folder keep their state. Returns `false` when no folder
    /// matches, leaving the tree untouched.
    pub fn toggle(folders: &mut [Folder], id: &str) -> bool {
        let mut found = false;
        for folder in folders {
            if folder.id == id {
                folder.expanded = !folder.expanded;
                found = true;
            }
            found |= Self::toggle(&mut folder.sub_folders, id);
        }
        found
    }

    /// Set `expanded` on the folder with `id`. Returns `false` when absent.
    pub fn set_expanded(folders: &mut [Folder], id: &str, expanded: bool) -> bool {
        let mut found = false;
        for folder in folders {
            if folder.id == id {
                folder.expanded = expanded;
                found = true;
            }
            found |= Self::set_expanded(&mut folder.sub_folders, id, expanded);
        }
        found
    }

    /// Find a folder by id anywhere in the tree.
    pub fn find<'a>(folders: &'a [Folder], id: &str) -> Option<&'a Folder> {
        for folder in folders {
            if folder.id == id {
                return Some(folder);
            }
            if let Some(hit) = Self::find(&folder.sub_folders, id) {
                return Some(hit);
            }
        }
        None
    }

    /// Direct child folder by id, used by path resolution.
    pub fn child(&self, id: &str) -> Option<&Folder> {
        self.sub_folders.iter().find(|f| f.id == id)
    }

    /// Chain of folders from the top of `folders` down to the folder with
    /// `id`, inclusive. `None` if the id is not in the tree.
    pub fn path_to<'a>(folders: &'a [Folder], id: &str) -> Option<Vec<&'a Folder>> {
        for folder in folders {
            if folder.id == id {
                return Some(vec![folder]);
            }
            if let Some(mut chain) = Self::path_to(&folder.sub_folders, id) {
                chain.insert(0, folder);
                return Some(chain);
            }
        }
        None
    }
}

/// An entry in the organizational hierarchy tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgUnit {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub active: bool,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    pub children: Vec<OrgUnit>,
    pub expanded: bool,
    /// Members of this unit, referencing the person directory.
    #[serde(default)]
    pub member_ids: Vec<EntityId>,
    /// Cover image URL, kept for host round-trips; not rendered.
    #[serde(default)]
    pub cover: Option<String>,
}

impl OrgUnit {
    /// Create a leaf unit with a generated id.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            active: true,
            parent_id: None,
            children: Vec::new(),
            expanded: false,
            member_ids: Vec::new(),
            cover: None,
        }
    }

    /// Flip `expanded` on the unit with `id` anywhere in the forest.
    ///
    /// Recurses into every branch exactly once; no other unit's flag or
    /// structure changes. Absent ids leave the forest unchanged and return
    /// `false`.
    pub fn toggle(units: &mut [OrgUnit], id: &str) -> bool {
        let mut found = false;
        for unit in units {
            if unit.id == id {
                unit.expanded = !unit.expanded;
                found = true;
            }
            found |= Self::toggle(&mut unit.children, id);
        }
        found
    }

    /// Set `expanded` on the unit with `id`. Returns `false` when absent.
    pub fn set_expanded(units: &mut [OrgUnit], id: &str, expanded: bool) -> bool {
        let mut found = false;
        for unit in units {
            if unit.id == id {
                unit.expanded = expanded;
                found = true;
            }
            found |= Self::set_expanded(&mut unit.children, id, expanded);
        }
        found
    }

    /// Find a unit by id anywhere in the forest.
    pub fn find<'a>(units: &'a [OrgUnit], id: &str) -> Option<&'a OrgUnit> {
        for unit in units {
            if unit.id == id {
                return Some(unit);
            }
            if let Some(hit) = Self::find(&unit.children, id) {
                return Some(hit);
            }
        }
        None
    }
}

/// A department shown in the selector and dashboard header.
#[derive(Debug, Clone)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub color: ratatui::style::Color,
    pub member_count: usize,
    pub manager_id: EntityId,
}

/// An item in the news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: EntityId,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    /// Department this item belongs to; `None` means company-wide.
    #[serde(default)]
    pub department_id: Option<EntityId>,
    pub likes: u32,
    pub comments: u32,
}

/// A standalone announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    pub urgent: bool,
}

/// A celebrated person (birthday, work anniversary, new hire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdayEntry {
    pub id: EntityId,
    pub name: String,
    pub department: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub age: Option<u8>,
}

/// A shortcut entry on the quick access card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Brazilian day/month/year date format used across the components.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn unit(id: &str, children: Vec<OrgUnit>) -> OrgUnit {
        OrgUnit {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            active: true,
            parent_id: None,
            children,
            expanded: false,
            member_ids: Vec::new(),
            cover: None,
        }
    }

    fn flags(units: &[OrgUnit], out: &mut Vec<(String, bool)>) {
        for u in units {
            out.push((u.id.clone(), u.expanded));
            flags(&u.children, out);
        }
    }

    #[test]
    fn toggle_flips_only_the_matching_unit() {
        let mut forest = vec![unit(
            "root",
            vec![unit("a", vec![unit("a1", vec![])]), unit("b", vec![])],
        )];

        assert!(OrgUnit::toggle(&mut forest, "a"));

        let mut seen = Vec::new();
        flags(&forest, &mut seen);
        for (id, expanded) in seen {
            assert_eq!(expanded, id == "a", "unexpected flag on {id}");
        }
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let mut forest = vec![unit("root", vec![unit("a", vec![])])];
        assert!(OrgUnit::toggle(&mut forest, "a"));
        assert!(OrgUnit::toggle(&mut forest, "a"));
        assert!(!OrgUnit::find(&forest, "a").unwrap().expanded);
    }

    #[test]
    fn set_expanded_is_idempotent() {
        let mut forest = vec![unit("root", vec![unit("a", vec![])])];
        assert!(OrgUnit::set_expanded(&mut forest, "a", true));
        assert!(OrgUnit::set_expanded(&mut forest, "a", true));
        assert!(OrgUnit::find(&forest, "a").unwrap().expanded);
        assert!(!OrgUnit::set_expanded(&mut forest, "missing", true));
    }

    #[test]
    fn toggle_with_absent_id_is_identity() {
        let mut forest = vec![unit("root", vec![unit("a", vec![])])];
        let before = serde_json::to_string(&forest).unwrap();
        assert!(!OrgUnit::toggle(&mut forest, "missing"));
        assert_eq!(serde_json::to_string(&forest).unwrap(), before);
    }

    #[test]
    fn folder_toggle_keeps_descendants() {
        let child = Folder {
            id: "c".into(),
            name: "Child".into(),
            documents: Vec::new(),
            sub_folders: Vec::new(),
            owner_id: "1".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            expanded: true,
        };
        let mut roots = vec![Folder {
            id: "p".into(),
            name: "Parent".into(),
            documents: Vec::new(),
            sub_folders: vec![child],
            owner_id: "1".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            expanded: false,
        }];

        assert!(Folder::toggle(&mut roots, "p"));
        assert!(roots[0].expanded);
        assert!(roots[0].sub_folders[0].expanded);
    }

    #[test]
    fn sample_references_resolve() {
        let data = sample::intranet();

        let mut check_docs = |docs: &[Document]| {
            for doc in docs {
                assert!(
                    person_by_id(&data.people, &doc.owner_id).is_some(),
                    "document {} has unknown owner",
                    doc.name
                );
                if doc.sharing == SharingType::Specific {
                    assert!(!doc.shared_with.is_empty());
                }
                for id in &doc.shared_with {
                    assert!(person_by_id(&data.people, id).is_some());
                }
            }
        };

        fn walk<'a>(folders: &'a [Folder], out: &mut Vec<&'a Folder>) {
            for f in folders {
                out.push(f);
                walk(&f.sub_folders, out);
            }
        }

        let mut all = Vec::new();
        walk(&data.folders, &mut all);
        for folder in all {
            assert!(person_by_id(&data.people, &folder.owner_id).is_some());
            if folder.sharing == SharingType::Specific {
                assert!(!folder.shared_with.is_empty());
            }
            check_docs(&folder.documents);
        }
    }

    #[test]
    fn sample_org_tree_has_unique_ids() {
        let data = sample::intranet();
        let mut seen = HashSet::new();

        fn walk(units: &[OrgUnit], seen: &mut HashSet<String>) {
            for u in units {
                assert!(seen.insert(u.id.clone()), "duplicate unit id {}", u.id);
                walk(&u.children, seen);
            }
        }
        walk(&data.org_tree, &mut seen);
    }

    proptest! {
        // Any sequence of toggles applied twice over is the identity.
        #[test]
        fn double_toggles_restore_the_forest(
            depth in 1usize..6,
            picks in proptest::collection::vec(0usize..6, 0..12),
        ) {
            // Single chain: unit "0" contains "1" contains "2"...
            let mut forest = (0..depth).rev().fold(Vec::new(), |children, i| {
                let mut u = unit(&i.to_string(), children);
                u.expanded = i % 2 == 0;
                vec![u]
            });
            let before = serde_json::to_string(&forest).unwrap();

            for pick in &picks {
                let id = (pick % depth).to_string();
                OrgUnit::toggle(&mut forest, &id);
                OrgUnit::toggle(&mut forest, &id);
            }
            prop_assert_eq!(serde_json::to_string(&forest).unwrap(), before);
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        let p = Person {
            id: "1".into(),
            name: "Maria Silva Costa".into(),
            role: String::new(),
            email: String::new(),
            avatar_url: String::new(),
            is_manager: false,
        };
        assert_eq!(p.initials(), "MS");
    }
}
