//! Document filtering for the browser search box.

use crate::model::Document;

/// Filter documents by a case-insensitive substring match on the name.
///
/// An empty term returns every document in its original order. Matching is a
/// plain substring check on the lowercased name, recomputed per keystroke.
pub fn filter_documents<'a, I>(documents: I, term: &str) -> Vec<&'a Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    if term.is_empty() {
        return documents.into_iter().collect();
    }
    let needle = term.to_lowercase();
    documents
        .into_iter()
        .filter(|doc| doc.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SharingType;
    use chrono::NaiveDate;

    fn doc(name: &str) -> Document {
        Document {
            id: name.to_string(),
            name: name.to_string(),
            doc_type: "PDF".into(),
            size: "1 MB".into(),
            last_modified: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            owner_id: "1".into(),
            sharing: SharingType::General,
            shared_with: Vec::new(),
            starred: false,
        }
    }

    #[test]
    fn empty_term_returns_all_in_order() {
        let docs = vec![doc("b.pdf"), doc("a.pdf"), doc("c.pdf")];
        let filtered = filter_documents(&docs, "");
        let names: Vec<_> = filtered.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let docs = vec![doc("Relatório Mensal.pdf"), doc("Organograma.png")];
        let filtered = filter_documents(&docs, "ORGAN");
        let names: Vec<_> = filtered.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Organograma.png"]);
    }

    #[test]
    fn no_match_is_empty() {
        let docs = vec![doc("a.pdf")];
        assert!(filter_documents(&docs, "zzz").is_empty());
    }
}
