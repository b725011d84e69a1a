//! # Navi Core Library
//!
//! This crate provides the core functionality for the Navi dashboard.
//! It contains the data model, seed data and the list engines (filtering,
//! sorting, grouping, membership mutations) independent of any specific
//! user interface.
//!
//! ## Modules
//!
//! - `users`: team roster, grouping engine and membership mutations
//! - `connections`: provider catalog and its filter/sort criteria
//! - `agents`: the AI persona roster referenced by short codes
//! - `query`: free-text search shared by all list views
//! - `settings`: application configuration management
//! - `theme`: UI theming system

pub mod agents;
pub mod connections;
pub mod query;
pub mod settings;
pub mod theme;
pub mod users;

#[cfg(test)]
mod tests {
    use crate::agents;
    use crate::connections::{seed_connections, ConnectionFilter, ConnectionStatus};
    use crate::query::search;
    use crate::users::{CreateGroupForm, Credit, TeamRoster, NOT_ASSIGNED};

    #[test]
    fn add_member_flow_end_to_end() {
        // The add-member modal lists candidates outside the target group,
        // narrows them with the shared search, then assigns the selection.
        let mut roster = TeamRoster::seeded();
        let target = "Chat Support";

        let candidates: Vec<_> = roster
            .candidates_for(target)
            .into_iter()
            .cloned()
            .collect();
        let picked = search(&candidates, "torff");
        assert_eq!(picked.len(), 1);
        let id = picked[0].id;

        let before = roster.len();
        roster.assign_to_group(&[id], target);
        assert_eq!(roster.len(), before);
        assert_eq!(roster.get(id).unwrap().group, target);
        assert!(roster
            .grouped()
            .iter()
            .find(|(name, _)| name == target)
            .unwrap()
            .1
            .iter()
            .any(|member| member.id == id));
    }

    #[test]
    fn create_group_flow_end_to_end() {
        // The create-group modal collects a name, a credit limit, an agent
        // selection from the static roster, and a member selection, then
        // commits them in one call.
        let mut roster = TeamRoster::seeded();
        let picked: Vec<u32> = roster
            .unassigned()
            .iter()
            .take(2)
            .map(|user| user.id)
            .collect();
        let codes: Vec<String> = agents::ROSTER
            .iter()
            .filter(|agent| agent.code == "N" || agent.code == "F")
            .map(|agent| agent.code.to_string())
            .collect();

        roster.create_group(&CreateGroupForm {
            name: "Sales Desk".to_string(),
            credit_limit: Some(2500),
            agents: codes.clone(),
            members: picked.clone(),
        });

        let grouped = roster.grouped();
        let names: Vec<&str> = grouped.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["Admin", "Tech Virtual Assistant", "Chat Support", "Sales Desk"]
        );

        let (_, members) = grouped.last().unwrap();
        assert_eq!(
            members.iter().map(|m| m.id).collect::<Vec<_>>(),
            picked
        );
        for member in members {
            assert_eq!(member.credit, Credit::Limit(2500));
            assert_eq!(member.agents, codes);
            for code in &member.agents {
                assert!(agents::name_for(code).is_some());
            }
        }
    }

    #[test]
    fn delete_reduces_count_by_exactly_one() {
        let mut roster = TeamRoster::seeded();
        let n = roster.len();

        roster.request_delete(7);
        roster.confirm_delete();
        assert_eq!(roster.len(), n - 1);
        assert!(roster.get(7).is_none());

        roster.request_delete(9999);
        roster.confirm_delete();
        assert_eq!(roster.len(), n - 1);
    }

    #[test]
    fn unassigned_members_never_appear_in_group_buckets() {
        let roster = TeamRoster::seeded();
        for (_, members) in roster.grouped() {
            assert!(members.iter().all(|member| member.group != NOT_ASSIGNED));
        }
    }

    #[test]
    fn connections_screen_defaults_match_seed_catalog() {
        let catalog = seed_connections();
        assert_eq!(catalog.len(), 12);

        let active = ConnectionFilter {
            status: Some(ConnectionStatus::Active),
            ..Default::default()
        };
        let active_count = active.apply(&catalog).len();
        assert_eq!(active_count, catalog.iter().filter(|c| c.available).count());
    }
}
