//! Account profile and project models.

use serde::Deserialize;

/// The authenticated developer account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeResponse {
    pub distinct_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub current_plan: Option<String>,
    pub first_transaction_at: Option<String>,
}

/// One project under the account, as returned by both the project listing
/// and project detail calls (internal root).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub name: Option<String>,
    pub bundle_id: Option<String>,
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_decodes_with_only_an_id() {
        let project: Project = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(project.id.as_deref(), Some("p1"));
        assert!(project.name.is_none());
    }

    #[test]
    fn me_ignores_unknown_wire_fields() {
        let me: MeResponse =
            serde_json::from_str(r#"{"email":"dev@example.com","plan_price":12.0}"#).unwrap();
        assert_eq!(me.email.as_deref(), Some("dev@example.com"));
    }
}
