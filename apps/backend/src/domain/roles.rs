//! Project roles and their dominance order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::project_users::MemberRole;

/// Effective role of a user on a project.
///
/// Variant order defines dominance: `Viewer < Editor < Owner`, so
/// `role >= required` is the authorization test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Viewer,
    Editor,
    Owner,
}

impl ProjectRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Viewer => "viewer",
            ProjectRole::Editor => "editor",
            ProjectRole::Owner => "owner",
        }
    }

    /// Whether this role is allowed to do what `required` is allowed to do.
    pub fn satisfies(self, required: ProjectRole) -> bool {
        self >= required
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MemberRole> for ProjectRole {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Editor => ProjectRole::Editor,
            MemberRole::Viewer => ProjectRole::Viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectRole;
    use crate::entities::project_users::MemberRole;

    #[test]
    fn dominance_is_strict() {
        assert!(ProjectRole::Owner > ProjectRole::Editor);
        assert!(ProjectRole::Editor > ProjectRole::Viewer);
    }

    #[test]
    fn satisfies_matrix() {
        use ProjectRole::{Editor, Owner, Viewer};
        let cases = [
            (Owner, Owner, true),
            (Owner, Editor, true),
            (Owner, Viewer, true),
            (Editor, Owner, false),
            (Editor, Editor, true),
            (Editor, Viewer, true),
            (Viewer, Owner, false),
            (Viewer, Editor, false),
            (Viewer, Viewer, true),
        ];
        for (held, required, expected) in cases {
            assert_eq!(held.satisfies(required), expected, "{held} vs {required}");
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ProjectRole::Owner).unwrap(), r#""owner""#);
        let role: ProjectRole = serde_json::from_str(r#""editor""#).unwrap();
        assert_eq!(role, ProjectRole::Editor);
        assert!(serde_json::from_str::<ProjectRole>(r#""Editor""#).is_err());
        assert!(serde_json::from_str::<ProjectRole>(r#""admin""#).is_err());
    }

    #[test]
    fn member_roles_never_map_to_owner() {
        assert_eq!(ProjectRole::from(MemberRole::Editor), ProjectRole::Editor);
        assert_eq!(ProjectRole::from(MemberRole::Viewer), ProjectRole::Viewer);
        assert!(serde_json::from_str::<MemberRole>(r#""owner""#).is_err());
    }
}
