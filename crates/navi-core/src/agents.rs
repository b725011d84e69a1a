//! The agent roster: named AI personas referenced by short codes on member
//! rows and in the create-group form.

/// An AI persona offered to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub code: &'static str,
    pub name: &'static str,
}

/// Agents selectable when creating a group, keyed by the codes stored on
/// `UserItem::agents`.
pub const ROSTER: [Agent; 4] = [
    Agent {
        code: "N",
        name: "Navi",
    },
    Agent {
        code: "P",
        name: "Phoebe",
    },
    Agent {
        code: "C",
        name: "Cody",
    },
    Agent {
        code: "F",
        name: "Finch",
    },
];

/// Resolve an agent code to its display name. Unknown codes (like the "+2"
/// overflow marker in seed data) resolve to None and are shown verbatim.
pub fn name_for(code: &str) -> Option<&'static str> {
    ROSTER
        .iter()
        .find(|agent| agent.code == code)
        .map(|agent| agent.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_to_names() {
        assert_eq!(name_for("N"), Some("Navi"));
        assert_eq!(name_for("F"), Some("Finch"));
        assert_eq!(name_for("+2"), None);
        assert_eq!(name_for(""), None);
    }
}
