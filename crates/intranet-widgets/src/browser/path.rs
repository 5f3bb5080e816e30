//! Breadcrumb path navigation over a folder tree.

use crate::model::Folder;
use thiserror::Error;

/// Errors raised while resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The stored path no longer matches the folder tree (renamed or removed
    /// folder). Callers are expected to reset to the root listing.
    #[error("navigation path no longer resolves: {path}")]
    StalePath { path: String },
}

/// One step of descent into the folder tree.
///
/// The id is authoritative for resolution; the name exists only for
/// breadcrumb display, so duplicate sibling names stay unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub id: String,
    pub name: String,
}

/// Ordered descent from the root folder listing to the current folder.
///
/// An empty path means the root listing (no folder open). The path stores
/// ids and is re-resolved against the tree on demand, never caching folder
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNavigator {
    segments: Vec<PathSegment>,
}

impl PathNavigator {
    /// Start at the root listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no folder is open.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Breadcrumb segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Descend into `folder`, appending it to the current path.
    ///
    /// The folder is taken as rendered, so no reachability check is done
    /// here; a mismatch surfaces later as a [`NavError::StalePath`].
    pub fn descend(&mut self, folder: &Folder) {
        self.push_segment(&folder.id, &folder.name);
    }

    /// Append a raw segment. Primitive under [`PathNavigator::descend`], for
    /// callers descending through several levels at once.
    pub fn push_segment(&mut self, id: &str, name: &str) {
        self.segments.push(PathSegment {
            id: id.to_string(),
            name: name.to_string(),
        });
    }

    /// Go up one level. At the root this is a no-op.
    pub fn go_back(&mut self) {
        self.segments.pop();
    }

    /// Truncate the path to `index + 1` segments (breadcrumb click).
    ///
    /// Out-of-range indices leave the path unchanged.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.segments.len() {
            self.segments.truncate(index + 1);
        }
    }

    /// Reset to the root listing.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Resolve the path against `roots`.
    ///
    /// `Ok(None)` is the root listing. Resolution walks the tree matching
    /// segment ids in order; any miss means the path refers to folders that
    /// no longer exist there and yields [`NavError::StalePath`].
    pub fn resolve<'a>(&self, roots: &'a [Folder]) -> Result<Option<&'a Folder>, NavError> {
        let mut segments = self.segments.iter();
        let Some(first) = segments.next() else {
            return Ok(None);
        };

        let mut current = roots
            .iter()
            .find(|f| f.id == first.id)
            .ok_or_else(|| self.stale())?;
        for segment in segments {
            current = current.child(&segment.id).ok_or_else(|| self.stale())?;
        }
        Ok(Some(current))
    }

    /// Breadcrumb text, e.g. `Documentos > Relatórios > Institucional`.
    pub fn breadcrumb(&self, root_label: &str) -> String {
        let mut crumb = root_label.to_string();
        for segment in &self.segments {
            crumb.push_str(" > ");
            crumb.push_str(&segment.name);
        }
        crumb
    }

    fn stale(&self) -> NavError {
        NavError::StalePath {
            path: self
                .segments
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SharingType;
    use proptest::prelude::*;

    fn folder(id: &str, name: &str, sub_folders: Vec<Folder>) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            documents: Vec::new(),
            sub_folders,
            owner_id: "1".to_string(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            expanded: false,
        }
    }

    fn tree() -> Vec<Folder> {
        vec![
            folder(
                "a",
                "Relatórios",
                vec![folder("a1", "Institucional", vec![])],
            ),
            folder("b", "Treinamentos", vec![]),
        ]
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let nav = PathNavigator::new();
        assert!(nav.is_root());
        assert_eq!(nav.resolve(&tree()).unwrap(), None);
    }

    #[test]
    fn descend_then_resolve() {
        let roots = tree();
        let mut nav = PathNavigator::new();
        nav.descend(&roots[0]);
        nav.descend(&roots[0].sub_folders[0]);

        let current = nav.resolve(&roots).unwrap().unwrap();
        assert_eq!(current.id, "a1");
        assert_eq!(nav.breadcrumb("Documentos"), "Documentos > Relatórios > Institucional");
    }

    #[test]
    fn go_back_pops_one_level() {
        let roots = tree();
        let mut nav = PathNavigator::new();
        nav.descend(&roots[0]);
        nav.descend(&roots[0].sub_folders[0]);

        nav.go_back();
        assert_eq!(nav.resolve(&roots).unwrap().unwrap().id, "a");

        nav.go_back();
        assert!(nav.is_root());

        // No-op at the root.
        nav.go_back();
        assert!(nav.is_root());
    }

    #[test]
    fn jump_to_truncates_to_prefix() {
        let roots = tree();
        let mut nav = PathNavigator::new();
        nav.descend(&roots[0]);
        nav.descend(&roots[0].sub_folders[0]);

        nav.jump_to(0);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.resolve(&roots).unwrap().unwrap().id, "a");

        // Out of range is a no-op.
        nav.jump_to(5);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn duplicate_sibling_names_resolve_by_id() {
        let roots = vec![
            folder("x", "Relatórios", vec![]),
            folder("y", "Relatórios", vec![]),
        ];
        let mut nav = PathNavigator::new();
        nav.descend(&roots[1]);
        assert_eq!(nav.resolve(&roots).unwrap().unwrap().id, "y");
    }

    #[test]
    fn removed_folder_is_a_stale_path() {
        let roots = tree();
        let mut nav = PathNavigator::new();
        nav.descend(&roots[0]);
        nav.descend(&roots[0].sub_folders[0]);

        let pruned = vec![folder("a", "Relatórios", vec![]), folder("b", "Treinamentos", vec![])];
        assert!(matches!(
            nav.resolve(&pruned),
            Err(NavError::StalePath { .. })
        ));
    }

    proptest! {
        // Descending n times and popping n times always returns to root.
        #[test]
        fn pops_invert_descents(names in proptest::collection::vec("[a-z]{1,8}", 1..8)) {
            let mut nav = PathNavigator::new();
            for (i, name) in names.iter().enumerate() {
                nav.descend(&folder(&format!("id{i}"), name, vec![]));
            }
            prop_assert_eq!(nav.depth(), names.len());

            for expected in (0..names.len()).rev() {
                nav.go_back();
                prop_assert_eq!(nav.depth(), expected);
            }
            prop_assert!(nav.is_root());
        }

        // jump_to(i) always yields the length-(i+1) prefix.
        #[test]
        fn jump_to_yields_prefix(len in 1usize..8, idx in 0usize..8) {
            let mut nav = PathNavigator::new();
            for i in 0..len {
                nav.descend(&folder(&format!("id{i}"), &format!("f{i}"), vec![]));
            }
            let before = nav.segments().to_vec();
            nav.jump_to(idx);
            if idx < len {
                prop_assert_eq!(nav.segments(), &before[..idx + 1]);
            } else {
                prop_assert_eq!(nav.segments(), &before[..]);
            }
        }
    }
}
