//! Model connections: the catalog of AI providers a workspace can enable,
//! plus the filter/sort criteria the Connections screen applies to it.
//!
//! The catalog itself is read-only seed data; toggling a connection on or
//! off is view state and never written back to the record.

use crate::query::{matches_search, Searchable};
use chrono::NaiveDate;

/// Provider categories offered by the category tab strip, without the "All"
/// sentinel (an unset filter means "All").
pub const CATEGORIES: [&str; 5] = [
    "OpenAI",
    "Anthropic",
    "Google DeepMind",
    "Mistral / Mixtral",
    "More",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Active,
    Inactive,
    ComingSoon,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// One provider card on the Connections screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub name: String,
    pub description: String,
    /// Free-form credit cost line, displayed as-is.
    pub credits: String,
    pub available: bool,
    pub category: String,
    pub status: ConnectionStatus,
    pub last_used: Option<NaiveDate>,
}

impl Searchable for Connection {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// Sort options in the order the sort dropdown cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionSort {
    #[default]
    NameAsc,
    NameDesc,
    LastUsedNewest,
    LastUsedOldest,
}

impl ConnectionSort {
    pub fn next(&self) -> Self {
        match self {
            Self::NameAsc => Self::NameDesc,
            Self::NameDesc => Self::LastUsedNewest,
            Self::LastUsedNewest => Self::LastUsedOldest,
            Self::LastUsedOldest => Self::NameAsc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::LastUsedNewest => "Last Used (Newest)",
            Self::LastUsedOldest => "Last Used (Oldest)",
        }
    }
}

/// Active criteria on the Connections screen. `None` in `category` or
/// `status` is the "All"/"Status" sentinel that disables the criterion;
/// active criteria are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFilter {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ConnectionStatus>,
    pub sort: ConnectionSort,
}

impl ConnectionFilter {
    pub fn matches(&self, connection: &Connection) -> bool {
        let matches_search = matches_search(connection, &self.search);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| connection.category == category);
        let matches_status = self
            .status
            .map_or(true, |status| connection.status == status);
        matches_search && matches_category && matches_status
    }

    /// Apply the filter and sort, returning a fresh ordered Vec. The input
    /// is never mutated; `sort_by` is stable so ties keep input order.
    pub fn apply(&self, connections: &[Connection]) -> Vec<Connection> {
        let mut selected: Vec<Connection> = connections
            .iter()
            .filter(|connection| self.matches(connection))
            .cloned()
            .collect();
        selected.sort_by(|a, b| match self.sort {
            // None in last_used compares below every date, matching the
            // dashboard's empty-string compare.
            ConnectionSort::NameAsc => a.name.cmp(&b.name),
            ConnectionSort::NameDesc => b.name.cmp(&a.name),
            ConnectionSort::LastUsedNewest => b.last_used.cmp(&a.last_used),
            ConnectionSort::LastUsedOldest => a.last_used.cmp(&b.last_used),
        });
        selected
    }

    /// Cycle the status criterion through Status -> Active -> Inactive ->
    /// Coming Soon -> Status.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(ConnectionStatus::Active),
            Some(ConnectionStatus::Active) => Some(ConnectionStatus::Inactive),
            Some(ConnectionStatus::Inactive) => Some(ConnectionStatus::ComingSoon),
            Some(ConnectionStatus::ComingSoon) => None,
        };
    }

    /// Move the category tab one step right (wrapping back to "All").
    pub fn next_category(&mut self) {
        self.category = match self.current_category_index() {
            None => Some(CATEGORIES[0].to_string()),
            Some(i) if i + 1 < CATEGORIES.len() => Some(CATEGORIES[i + 1].to_string()),
            Some(_) => None,
        };
    }

    /// Move the category tab one step left (wrapping from "All" to the end).
    pub fn previous_category(&mut self) {
        self.category = match self.current_category_index() {
            None => Some(CATEGORIES[CATEGORIES.len() - 1].to_string()),
            Some(0) => None,
            Some(i) => Some(CATEGORIES[i - 1].to_string()),
        };
    }

    fn current_category_index(&self) -> Option<usize> {
        self.category
            .as_deref()
            .and_then(|current| CATEGORIES.iter().position(|c| *c == current))
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("All")
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or("Status", |status| status.label())
    }
}

/// The provider catalog every session starts from.
pub fn seed_connections() -> Vec<Connection> {
    fn connection(
        name: &str,
        description: &str,
        credits: &str,
        available: bool,
        last_used: Option<NaiveDate>,
        category: &str,
        status: ConnectionStatus,
    ) -> Connection {
        Connection {
            name: name.to_string(),
            description: description.to_string(),
            credits: credits.to_string(),
            available,
            category: category.to_string(),
            status,
            last_used,
        }
    }

    let june = |day| NaiveDate::from_ymd_opt(2024, 6, day);

    vec![
        connection(
            "GPT-4.1",
            "Internal name often used to refer to improved GPT-4-turbo in 2024.",
            "0.8 Credits / 1k Tokens",
            false,
            june(15),
            "OpenAI",
            ConnectionStatus::Inactive,
        ),
        connection(
            "GPT-4.1 nano",
            "Hypothetical or future model variants for mobile/local deployment (not officially branded).",
            "FREE • For paid account only",
            true,
            june(14),
            "OpenAI",
            ConnectionStatus::Active,
        ),
        connection(
            "o4-mini",
            "Hypothetical or future model variants for mobile/local deployment (not officially branded).",
            "0.8 Credits / 1k Tokens",
            false,
            june(13),
            "OpenAI",
            ConnectionStatus::Inactive,
        ),
        connection(
            "GPT-4-turbo",
            "Not officially branded, but often refers to an interim improvement in 2024.",
            "0.8 Credits / 1k Tokens",
            false,
            june(12),
            "OpenAI",
            ConnectionStatus::Inactive,
        ),
        connection(
            "GPT-3.5-turbo-instruct",
            "Instruct-tuned version of 3.5, mostly for API compatibility.",
            "0.8 Credits / 1k Tokens",
            false,
            june(11),
            "OpenAI",
            ConnectionStatus::Inactive,
        ),
        connection(
            "Claude 1, 2, 3",
            "Claude 3 family includes Opus (most powerful), Sonnet (balanced), and Haiku (fastest).",
            "0.8 Credits / 1k Tokens",
            true,
            june(10),
            "Anthropic",
            ConnectionStatus::Active,
        ),
        connection(
            "Claude 3.5 Opus",
            "Latest flagship model from Anthropic (mid-2025).",
            "0.8 Credits / 1k Tokens",
            true,
            june(9),
            "Anthropic",
            ConnectionStatus::Active,
        ),
        connection(
            "Claude-instant",
            "Lighter, faster Claude variant.",
            "0.8 Credits / 1k Tokens",
            true,
            june(8),
            "Anthropic",
            ConnectionStatus::Active,
        ),
        connection(
            "Gemini 1, 1.5",
            "Multimodal models with text, image, code understanding.",
            "0.8 Credits / 1k Tokens",
            false,
            june(7),
            "Google DeepMind",
            ConnectionStatus::Inactive,
        ),
        connection(
            "Gemini Nano",
            "On-device variant used in Android and Pixel devices.",
            "0.8 Credits / 1k Tokens",
            false,
            june(6),
            "Google DeepMind",
            ConnectionStatus::Inactive,
        ),
        connection(
            "Mistral 7B",
            "Open-weight LLM by Mistral AI.",
            "0.8 Credits / 1k Tokens",
            true,
            june(5),
            "Mistral / Mixtral",
            ConnectionStatus::Active,
        ),
        connection(
            "Mixtral 8x7B",
            "Mixture-of-Experts model with 8 experts.",
            "0.8 Credits / 1k Tokens",
            true,
            june(4),
            "Mistral / Mixtral",
            ConnectionStatus::Active,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_everything_sorted_by_name() {
        let catalog = seed_connections();
        let result = ConnectionFilter::default().apply(&catalog);
        assert_eq!(result.len(), catalog.len());
        for pair in result.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn anthropic_claude_scenario() {
        let catalog = seed_connections();
        let filter = ConnectionFilter {
            search: "Claude".to_string(),
            category: Some("Anthropic".to_string()),
            ..Default::default()
        };
        let result = filter.apply(&catalog);
        assert_eq!(result.len(), 3);
        for connection in &result {
            assert_eq!(connection.category, "Anthropic");
            let name = connection.name.to_lowercase();
            let description = connection.description.to_lowercase();
            assert!(name.contains("claude") || description.contains("claude"));
        }
    }

    #[test]
    fn criteria_are_and_combined_and_order_independent() {
        fn assert_order_independent(
            catalog: &[Connection],
            a: &ConnectionFilter,
            b: &ConnectionFilter,
            combined: &ConnectionFilter,
        ) {
            let a_then_b = b.apply(&a.apply(catalog));
            let b_then_a = a.apply(&b.apply(catalog));
            assert_eq!(a_then_b, b_then_a);
            assert_eq!(a_then_b, combined.apply(catalog));
        }

        let catalog = seed_connections();
        let search = ConnectionFilter {
            search: "gpt".to_string(),
            ..Default::default()
        };
        let category = ConnectionFilter {
            category: Some("OpenAI".to_string()),
            ..Default::default()
        };
        let status = ConnectionFilter {
            status: Some(ConnectionStatus::Inactive),
            ..Default::default()
        };

        assert_order_independent(
            &catalog,
            &search,
            &status,
            &ConnectionFilter {
                search: "gpt".to_string(),
                status: Some(ConnectionStatus::Inactive),
                ..Default::default()
            },
        );
        assert_order_independent(
            &catalog,
            &category,
            &search,
            &ConnectionFilter {
                search: "gpt".to_string(),
                category: Some("OpenAI".to_string()),
                ..Default::default()
            },
        );
        assert_order_independent(
            &catalog,
            &category,
            &status,
            &ConnectionFilter {
                category: Some("OpenAI".to_string()),
                status: Some(ConnectionStatus::Inactive),
                ..Default::default()
            },
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = seed_connections();
        let filter = ConnectionFilter {
            search: "claude".to_string(),
            status: Some(ConnectionStatus::Active),
            ..Default::default()
        };
        let once = filter.apply(&catalog);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_on_equal_keys_is_stable() {
        let mut a = seed_connections()[0].clone();
        let mut b = seed_connections()[1].clone();
        let mut c = seed_connections()[2].clone();
        a.name = "Same".to_string();
        b.name = "Same".to_string();
        c.name = "Same".to_string();
        a.description = "first".to_string();
        b.description = "second".to_string();
        c.description = "third".to_string();

        let filter = ConnectionFilter::default();
        let sorted = filter.apply(&[a, b, c]);
        let order: Vec<&str> = sorted.iter().map(|x| x.description.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn missing_last_used_sorts_as_oldest() {
        let mut catalog = seed_connections();
        catalog[0].last_used = None;
        let never_used = catalog[0].name.clone();

        let mut filter = ConnectionFilter::default();
        filter.sort = ConnectionSort::LastUsedNewest;
        let newest_first = filter.apply(&catalog);
        assert_eq!(newest_first.last().unwrap().name, never_used);

        filter.sort = ConnectionSort::LastUsedOldest;
        let oldest_first = filter.apply(&catalog);
        assert_eq!(oldest_first.first().unwrap().name, never_used);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let catalog = seed_connections();
        let filter = ConnectionFilter {
            search: "does-not-exist".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&catalog).is_empty());
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn category_and_status_cycles_wrap() {
        let mut filter = ConnectionFilter::default();
        assert_eq!(filter.category_label(), "All");
        for expected in CATEGORIES {
            filter.next_category();
            assert_eq!(filter.category_label(), expected);
        }
        filter.next_category();
        assert_eq!(filter.category_label(), "All");
        filter.previous_category();
        assert_eq!(filter.category_label(), "More");

        assert_eq!(filter.status_label(), "Status");
        filter.cycle_status();
        assert_eq!(filter.status_label(), "Active");
        filter.cycle_status();
        filter.cycle_status();
        assert_eq!(filter.status_label(), "Coming Soon");
        filter.cycle_status();
        assert_eq!(filter.status_label(), "Status");
    }
}
