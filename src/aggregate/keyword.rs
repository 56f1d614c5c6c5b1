//! Keyword categories over the note column, with occurrence counting.
//!
//! All notes are joined into one text and each trigger is counted by
//! non-overlapping substring matches. A note matching two triggers of the
//! same category contributes 2, and so does a trigger appearing twice.

use crate::config::CategoryTables;
use crate::store::{Counts, RecordStore};

/// Non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Total trigger occurrences per keyword category, in table order
pub fn keyword_occurrences(store: &RecordStore, tables: &CategoryTables) -> Counts {
    let notes: Vec<&str> = store
        .deduplicated()
        .into_iter()
        .map(|record| record.note())
        .filter(|note| !note.is_empty())
        .collect();
    // Triggers carry no spaces, so the separator cannot create matches
    let text = notes.join(" ");

    tables
        .note_keywords
        .iter()
        .map(|(category, triggers)| {
            let count = triggers.iter().map(|t| count_occurrences(&text, t)).sum::<usize>();
            (category.clone(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriggerTable;
    use crate::record::Record;

    fn tables(entries: &[(&str, &[&str])]) -> CategoryTables {
        let note_keywords: TriggerTable = entries
            .iter()
            .map(|(name, words)| (name.to_string(), words.iter().map(|w| w.to_string()).collect()))
            .collect();
        CategoryTables {
            note_keywords,
            ..CategoryTables::default()
        }
    }

    fn store(notes: &[&str]) -> RecordStore {
        let records = notes
            .iter()
            .enumerate()
            .map(|(i, note)| Record::new("黄浦区", format!("路{}", i), "上海", "地名", *note).unwrap())
            .collect();
        RecordStore::build(records)
    }

    #[test]
    fn test_repeated_trigger_counts_every_occurrence() {
        let counts = keyword_occurrences(&store(&["商业商业区"]), &tables(&[("商业相关", &["商业"])]));
        assert_eq!(counts["商业相关"], 2);
    }

    #[test]
    fn test_two_triggers_in_one_note() {
        let counts = keyword_occurrences(
            &store(&["商圈内的购物中心", "", "住宅"]),
            &tables(&[("商业相关", &["商圈", "购物"]), ("居住区域", &["住宅", "小区"])]),
        );

        assert_eq!(counts["商业相关"], 2);
        assert_eq!(counts["居住区域"], 1);
    }

    #[test]
    fn test_duplicate_roads_are_not_counted_twice() {
        let store = RecordStore::build(vec![
            Record::new("黄浦区", "淮海路", "上海", "淮海", "商业街区").unwrap(),
            Record::new("黄浦区", "淮海路", "上海", "淮海", "商业").unwrap(),
        ]);
        let counts = keyword_occurrences(&store, &tables(&[("商业相关", &["商业"])]));

        assert_eq!(counts["商业相关"], 1);
    }

    #[test]
    fn test_categories_without_matches_are_zero() {
        let counts = keyword_occurrences(&RecordStore::default(), &CategoryTables::default());

        assert_eq!(counts.len(), 7);
        assert!(counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("abc", ""), 0);
    }
}
