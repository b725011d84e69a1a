//! Team roster: members, groups, and the mutations the Manage Users screen
//! performs on them.
//!
//! The roster is an in-memory collection seeded at startup. Mutations rebuild
//! the whole collection (functional update) instead of patching records in
//! place, and unknown ids are silently ignored, matching the dashboard's
//! observed behavior. Deletion is two-phase: a request parks the id behind a
//! confirmation, and only confirmation removes the record.

use crate::query::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel group for members that have not been placed in a group yet.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// The groups the dashboard knows a display order for.
pub const KNOWN_GROUPS: [&str; 3] = ["Admin", "Tech Virtual Assistant", "Chat Support"];

/// Access level of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Owner,
    Admin,
    SupportAgent,
    TeamLead,
    Requested,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::SupportAgent => "Support Agent",
            Self::TeamLead => "Team Lead",
            Self::Requested => "Requested",
        }
    }
}

/// Invitation state for members that joined through a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Active,
}

/// Usage budget attached to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credit {
    Unlimited,
    Limit(u32),
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "Unlimited"),
            Self::Limit(amount) => write!(f, "${}", group_digits(*amount)),
        }
    }
}

/// Render 12345 as "12,345" the way the dashboard shows credit budgets.
fn group_digits(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A single team member row.
///
/// `id` must be unique within a roster; delete and group-assignment resolve
/// members by id. `group` is [`NOT_ASSIGNED`] or a group name, never both
/// meanings at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserItem {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Path into the external asset store; the roster does not own the image.
    pub avatar: String,
    pub access: Access,
    pub group: String,
    pub credit: Credit,
    /// Short codes of the agents this member can use, see [`crate::agents`].
    pub agents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

impl Searchable for UserItem {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// Display rank for a group name. Known groups come first in a fixed order,
/// everything else sorts after them.
fn group_rank(name: &str) -> u8 {
    match name {
        "Admin" => 1,
        "Tech Virtual Assistant" => 2,
        "Chat Support" => 3,
        _ => 99,
    }
}

/// Partition members by group, excluding [`NOT_ASSIGNED`].
///
/// Returns the groups in display order (fixed priority for known names,
/// unknown names alphabetical after them) with each group's members in
/// input order.
pub fn group_members(users: &[UserItem]) -> Vec<(String, Vec<UserItem>)> {
    let mut groups: Vec<(String, Vec<UserItem>)> = Vec::new();
    for user in users {
        if user.group == NOT_ASSIGNED {
            continue;
        }
        match groups.iter_mut().find(|(name, _)| *name == user.group) {
            Some((_, members)) => members.push(user.clone()),
            None => groups.push((user.group.clone(), vec![user.clone()])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| group_rank(a).cmp(&group_rank(b)).then_with(|| a.cmp(b)));
    groups
}

/// Tabs on the Manage Users screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterTab {
    #[default]
    All,
    Unassigned,
    Groups,
}

impl RosterTab {
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Unassigned,
            Self::Unassigned => Self::Groups,
            Self::Groups => Self::All,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::All => Self::Groups,
            Self::Unassigned => Self::All,
            Self::Groups => Self::Unassigned,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Users",
            Self::Unassigned => "Unassigned",
            Self::Groups => "Groups",
        }
    }
}

/// Inputs collected by the Create Group modal. No field is validated; any
/// value is accepted as entered.
#[derive(Debug, Clone, Default)]
pub struct CreateGroupForm {
    pub name: String,
    pub credit_limit: Option<u32>,
    pub agents: Vec<String>,
    pub members: Vec<u32>,
}

/// The in-memory member collection plus the pending-delete marker.
pub struct TeamRoster {
    users: Vec<UserItem>,
    pending_delete: Option<u32>,
}

impl TeamRoster {
    pub fn new(users: Vec<UserItem>) -> Self {
        Self {
            users,
            pending_delete: None,
        }
    }

    /// Roster populated with the demo seed data.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    pub fn users(&self) -> &[UserItem] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&UserItem> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Members still in the [`NOT_ASSIGNED`] sentinel group.
    pub fn unassigned(&self) -> Vec<&UserItem> {
        self.users
            .iter()
            .filter(|user| user.group == NOT_ASSIGNED)
            .collect()
    }

    pub fn unassigned_count(&self) -> usize {
        self.unassigned().len()
    }

    /// Number of distinct non-sentinel groups currently in use.
    pub fn group_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .users
            .iter()
            .map(|user| user.group.as_str())
            .filter(|group| *group != NOT_ASSIGNED)
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    /// Members visible on the given tab. The All and Unassigned tabs list in
    /// roster order; the Groups tab lists in grouped display order so a row
    /// cursor over it selects what is on screen.
    pub fn visible(&self, tab: RosterTab) -> Vec<&UserItem> {
        match tab {
            RosterTab::All => self.users.iter().collect(),
            RosterTab::Unassigned => self.unassigned(),
            RosterTab::Groups => self.grouped_members(),
        }
    }

    pub fn grouped(&self) -> Vec<(String, Vec<UserItem>)> {
        group_members(&self.users)
    }

    /// The grouped view flattened to member rows, in display order: bucket
    /// order as in [`TeamRoster::grouped`], members in input order within
    /// each bucket, sentinel members excluded.
    pub fn grouped_members(&self) -> Vec<&UserItem> {
        let mut groups: Vec<(&str, Vec<&UserItem>)> = Vec::new();
        for user in &self.users {
            if user.group == NOT_ASSIGNED {
                continue;
            }
            match groups.iter_mut().find(|(name, _)| *name == user.group) {
                Some((_, members)) => members.push(user),
                None => groups.push((user.group.as_str(), vec![user])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| group_rank(a).cmp(&group_rank(b)).then_with(|| a.cmp(b)));
        groups.into_iter().flat_map(|(_, members)| members).collect()
    }

    /// Members eligible for the add-member picker of `group`: everyone not
    /// already in that group.
    pub fn candidates_for(&self, group: &str) -> Vec<&UserItem> {
        self.users.iter().filter(|user| user.group != group).collect()
    }

    /// Move the listed members into `group`. Ids not present in the roster
    /// are silently ignored. The collection is rebuilt as a whole rather
    /// than mutated row by row.
    pub fn assign_to_group(&mut self, ids: &[u32], group: &str) {
        self.users = self
            .users
            .iter()
            .map(|user| {
                if ids.contains(&user.id) {
                    let mut updated = user.clone();
                    updated.group = group.to_string();
                    updated
                } else {
                    user.clone()
                }
            })
            .collect();
    }

    /// Create a group from the modal form: assign the selected members and
    /// stamp the group's credit limit and agent set on them.
    pub fn create_group(&mut self, form: &CreateGroupForm) {
        let credit = match form.credit_limit {
            Some(limit) => Credit::Limit(limit),
            None => Credit::Limit(0),
        };
        self.users = self
            .users
            .iter()
            .map(|user| {
                if form.members.contains(&user.id) {
                    let mut updated = user.clone();
                    updated.group = form.name.clone();
                    updated.credit = credit;
                    updated.agents = form.agents.clone();
                    updated
                } else {
                    user.clone()
                }
            })
            .collect();
    }

    /// First phase of delete: park the id behind a confirmation.
    pub fn request_delete(&mut self, id: u32) {
        self.pending_delete = Some(id);
    }

    /// The member awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&UserItem> {
        self.pending_delete.and_then(|id| self.get(id))
    }

    /// Second phase: remove the pending record. A pending id that no longer
    /// exists is a no-op; either way the marker is cleared.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.users = self
                .users
                .iter()
                .filter(|user| user.id != id)
                .cloned()
                .collect();
        }
    }

    /// Abandon a pending delete without touching the collection.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

impl Default for TeamRoster {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The demo members every session starts from.
pub fn seed_users() -> Vec<UserItem> {
    fn user(
        id: u32,
        name: &str,
        email: &str,
        avatar: &str,
        access: Access,
        group: &str,
        credit: Credit,
        agents: &[&str],
        status: Option<MemberStatus>,
    ) -> UserItem {
        UserItem {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
            access,
            group: group.to_string(),
            credit,
            agents: agents.iter().map(|code| code.to_string()).collect(),
            status,
        }
    }

    vec![
        user(
            1,
            "Oliver Thompson",
            "oliverthompson@email.com",
            "/images/Oliver.jpg",
            Access::Owner,
            "Admin",
            Credit::Unlimited,
            &["N", "P", "C"],
            None,
        ),
        user(
            2,
            "Gretchen Schleifer",
            "gretchen@email.com",
            "/images/Gretchen.jpg",
            Access::Admin,
            "Admin",
            Credit::Unlimited,
            &["N", "P", "C"],
            None,
        ),
        user(
            3,
            "Cristofer Stanton",
            "cristoferpson@email.com",
            "/images/Cristofer.jpg",
            Access::SupportAgent,
            "Tech Virtual Assistant",
            Credit::Limit(5000),
            &["N", "P", "C", "+2"],
            None,
        ),
        user(
            4,
            "Hanna Kenter",
            "hanna@email.com",
            "/images/Hanna.jpg",
            Access::TeamLead,
            "Tech Virtual Assistant",
            Credit::Limit(10000),
            &["N", "P", "C"],
            None,
        ),
        user(
            5,
            "Jaxson Herwitz",
            "jaxson@email.com",
            "/images/Jaxson.jpg",
            Access::SupportAgent,
            "Tech Virtual Assistant",
            Credit::Limit(5000),
            &["N", "C"],
            None,
        ),
        user(
            6,
            "Marcus Korsgaard",
            "marcus@email.com",
            "/images/Marcus.jpg",
            Access::TeamLead,
            "Chat Support",
            Credit::Limit(10000),
            &["N", "F"],
            None,
        ),
        user(
            7,
            "Martin Ekstrom Bothman",
            "martin@email.com",
            "/images/Martin.jpg",
            Access::SupportAgent,
            "Chat Support",
            Credit::Limit(5000),
            &["N", "C"],
            None,
        ),
        user(
            8,
            "Ann George",
            "ann@email.com",
            "/images/Ann.jpg",
            Access::SupportAgent,
            "Chat Support",
            Credit::Limit(5000),
            &["N", "C"],
            None,
        ),
        user(
            9,
            "Martin Torff",
            "martintorff@email.com",
            "/images/Martin.jpg",
            Access::Requested,
            NOT_ASSIGNED,
            Credit::Limit(0),
            &[],
            None,
        ),
        user(
            10,
            "Carter Saris",
            "cartersaris@email.com",
            "/images/Carter.jpg",
            Access::Requested,
            NOT_ASSIGNED,
            Credit::Limit(0),
            &[],
            None,
        ),
        user(
            11,
            "Charlie Press",
            "charlie@email.com",
            "/images/Charlie.jpg",
            Access::Requested,
            NOT_ASSIGNED,
            Credit::Limit(0),
            &[],
            Some(MemberStatus::Pending),
        ),
        user(
            12,
            "Cheyenne Bator",
            "cheyenne@email.com",
            "/images/Cheyenne.jpg",
            Access::Requested,
            NOT_ASSIGNED,
            Credit::Limit(0),
            &[],
            Some(MemberStatus::Pending),
        ),
        user(
            13,
            "James Levin",
            "james@email.com",
            "/images/James.jpg",
            Access::Requested,
            NOT_ASSIGNED,
            Credit::Limit(0),
            &[],
            Some(MemberStatus::Pending),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u32, name: &str, group: &str) -> UserItem {
        UserItem {
            id,
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase()),
            avatar: String::new(),
            access: Access::SupportAgent,
            group: group.to_string(),
            credit: Credit::Limit(5000),
            agents: vec!["N".to_string()],
            status: None,
        }
    }

    #[test]
    fn grouping_excludes_unassigned_and_orders_known_groups() {
        let users = vec![
            member(1, "Ada", "Admin"),
            member(2, "Ben", "Chat Support"),
            member(3, "Cy", NOT_ASSIGNED),
        ];
        let grouped = group_members(&users);
        let names: Vec<&str> = grouped.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Admin", "Chat Support"]);
        assert_eq!(grouped[0].1.iter().map(|u| u.id).collect::<Vec<_>>(), [1]);
        assert_eq!(grouped[1].1.iter().map(|u| u.id).collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn grouping_is_complete_over_non_sentinel_members() {
        let users = seed_users();
        let grouped = group_members(&users);
        let bucketed: usize = grouped.iter().map(|(_, members)| members.len()).sum();
        let expected = users.iter().filter(|u| u.group != NOT_ASSIGNED).count();
        assert_eq!(bucketed, expected);

        // every non-sentinel member lands in exactly one bucket
        for user in users.iter().filter(|u| u.group != NOT_ASSIGNED) {
            let holders = grouped
                .iter()
                .filter(|(_, members)| members.iter().any(|m| m.id == user.id))
                .count();
            assert_eq!(holders, 1, "user {} in {} buckets", user.id, holders);
        }
    }

    #[test]
    fn unknown_groups_sort_alphabetically_after_known_ones() {
        let users = vec![
            member(1, "Ada", "Zeta Squad"),
            member(2, "Ben", "Chat Support"),
            member(3, "Cy", "Beta Squad"),
            member(4, "Dee", "Admin"),
        ];
        let names: Vec<String> = group_members(&users)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Admin", "Chat Support", "Beta Squad", "Zeta Squad"]);
    }

    #[test]
    fn group_member_order_follows_input_order() {
        let users = vec![
            member(5, "Eve", "Admin"),
            member(2, "Ben", "Admin"),
            member(9, "Ida", "Admin"),
        ];
        let grouped = group_members(&users);
        assert_eq!(
            grouped[0].1.iter().map(|u| u.id).collect::<Vec<_>>(),
            [5, 2, 9]
        );
    }

    #[test]
    fn assign_to_group_ignores_unknown_ids() {
        let mut roster = TeamRoster::new(vec![
            member(1, "Ada", NOT_ASSIGNED),
            member(2, "Ben", NOT_ASSIGNED),
        ]);
        roster.assign_to_group(&[1, 42], "Chat Support");
        assert_eq!(roster.get(1).unwrap().group, "Chat Support");
        assert_eq!(roster.get(2).unwrap().group, NOT_ASSIGNED);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn delete_is_two_phase() {
        let mut roster = TeamRoster::new(vec![
            member(1, "Ada", "Admin"),
            member(2, "Ben", "Admin"),
        ]);

        roster.request_delete(2);
        assert_eq!(roster.pending_delete().unwrap().id, 2);
        assert_eq!(roster.len(), 2, "request must not mutate the roster");

        roster.cancel_delete();
        assert!(roster.pending_delete().is_none());
        assert_eq!(roster.len(), 2);

        roster.request_delete(2);
        roster.confirm_delete();
        assert_eq!(roster.len(), 1);
        assert!(roster.get(2).is_none());
        assert!(roster.pending_delete().is_none());
    }

    #[test]
    fn confirming_delete_of_missing_id_is_a_no_op() {
        let mut roster = TeamRoster::new(vec![member(1, "Ada", "Admin")]);
        roster.request_delete(42);
        roster.confirm_delete();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn counts_track_tabs() {
        let roster = TeamRoster::seeded();
        assert_eq!(roster.len(), 13);
        assert_eq!(roster.unassigned_count(), 5);
        assert_eq!(roster.group_count(), 3);
        assert_eq!(roster.visible(RosterTab::All).len(), 13);
        assert_eq!(roster.visible(RosterTab::Unassigned).len(), 5);
    }

    #[test]
    fn groups_tab_lists_members_in_grouped_display_order() {
        let roster = TeamRoster::new(vec![
            member(1, "Ada", "Chat Support"),
            member(2, "Ben", NOT_ASSIGNED),
            member(3, "Cy", "Admin"),
            member(4, "Dee", "Chat Support"),
        ]);

        // Row N on the Groups tab must be the Nth member row the grouped
        // view renders, so cursor actions hit what is on screen.
        let rows: Vec<u32> = roster
            .visible(RosterTab::Groups)
            .iter()
            .map(|user| user.id)
            .collect();
        assert_eq!(rows, [3, 1, 4]);

        let flattened: Vec<u32> = roster
            .grouped()
            .iter()
            .flat_map(|(_, members)| members.iter().map(|m| m.id))
            .collect();
        assert_eq!(rows, flattened);
    }

    #[test]
    fn candidates_exclude_current_group_members() {
        let roster = TeamRoster::seeded();
        let candidates = roster.candidates_for("Chat Support");
        assert!(candidates.iter().all(|user| user.group != "Chat Support"));
        assert_eq!(candidates.len(), 13 - 3);
    }

    #[test]
    fn create_group_stamps_credit_and_agents() {
        let mut roster = TeamRoster::new(vec![
            member(1, "Ada", NOT_ASSIGNED),
            member(2, "Ben", NOT_ASSIGNED),
        ]);
        let form = CreateGroupForm {
            name: "Sales Desk".to_string(),
            credit_limit: Some(2500),
            agents: vec!["N".to_string(), "F".to_string()],
            members: vec![2],
        };
        roster.create_group(&form);

        let ben = roster.get(2).unwrap();
        assert_eq!(ben.group, "Sales Desk");
        assert_eq!(ben.credit, Credit::Limit(2500));
        assert_eq!(ben.agents, vec!["N", "F"]);
        assert_eq!(roster.get(1).unwrap().group, NOT_ASSIGNED);
    }

    #[test]
    fn roster_tab_cycles_both_ways() {
        assert_eq!(RosterTab::All.next(), RosterTab::Unassigned);
        assert_eq!(RosterTab::Groups.next(), RosterTab::All);
        assert_eq!(RosterTab::All.previous(), RosterTab::Groups);
        assert_eq!(RosterTab::Unassigned.previous(), RosterTab::All);
    }

    #[test]
    fn credit_display_formats_thousands() {
        assert_eq!(Credit::Unlimited.to_string(), "Unlimited");
        assert_eq!(Credit::Limit(0).to_string(), "$0");
        assert_eq!(Credit::Limit(5000).to_string(), "$5,000");
        assert_eq!(Credit::Limit(1234567).to_string(), "$1,234,567");
    }
}
