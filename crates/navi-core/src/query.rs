//! Free-text search shared by the dashboard list views.
//!
//! Every list screen (team roster, connections, add-member picker) filters
//! the same way: a case-insensitive substring match against a record's
//! designated text fields. The record matches when ANY field contains the
//! query; the empty query matches everything.

/// A record that exposes text fields to the search box.
pub trait Searchable {
    /// The fields the free-text search runs against.
    fn haystacks(&self) -> Vec<&str>;
}

/// Case-insensitive substring match against a record's search fields.
pub fn matches_search<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .haystacks()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter a slice down to the records matching the query, preserving input
/// order. Returns a fresh Vec; the input is never mutated.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_search(*record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        title: String,
        body: String,
    }

    impl Searchable for Note {
        fn haystacks(&self) -> Vec<&str> {
            vec![&self.title, &self.body]
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                title: "Claude rollout".to_string(),
                body: "enable for support".to_string(),
            },
            Note {
                title: "Billing".to_string(),
                body: "renew the Claude plan".to_string(),
            },
            Note {
                title: "Standup".to_string(),
                body: "Tuesday 10am".to_string(),
            },
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = notes();
        assert_eq!(search(&notes, "").len(), notes.len());
    }

    #[test]
    fn match_is_case_insensitive_across_any_field() {
        let notes = notes();
        let hits = search(&notes, "CLAUDE");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Claude rollout");
        assert_eq!(hits[1].title, "Billing");
    }

    #[test]
    fn no_matches_yields_empty_not_error() {
        let notes = notes();
        assert!(search(&notes, "zzz").is_empty());
        let empty: Vec<Note> = Vec::new();
        assert!(search(&empty, "anything").is_empty());
    }

    #[test]
    fn search_is_idempotent() {
        let notes = notes();
        let once: Vec<String> = search(&notes, "claude")
            .iter()
            .map(|n| n.title.clone())
            .collect();
        let first_pass: Vec<Note> = notes
            .into_iter()
            .filter(|n| matches_search(n, "claude"))
            .collect();
        let twice: Vec<String> = search(&first_pass, "claude")
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(once, twice);
    }
}
