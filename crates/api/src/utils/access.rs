//! Access guards shared by the commands
//!
//! The backend enforces authorization on its side; these guards only stop
//! requests it would reject anyway, with a clearer local error.

use portico_domain::{PortalError, ProjectRecord, Result, Viewer};

/// Rejects non-admin viewers before an admin-only call leaves the process.
pub(crate) fn ensure_admin(viewer: &Viewer) -> Result<()> {
    if viewer.is_admin() {
        Ok(())
    } else {
        Err(PortalError::Auth("admin role required".to_string()))
    }
}

/// Finds a project the viewer is allowed to see.
///
/// Admins see every project; clients only their own. A project that exists
/// but is out of scope reads as not found, indistinguishable from a missing
/// id.
pub(crate) fn visible_project<'a>(
    viewer: &Viewer,
    projects: &'a [ProjectRecord],
    project_id: &str,
) -> Result<&'a ProjectRecord> {
    projects
        .iter()
        .find(|p| p.id == project_id)
        .filter(|p| viewer.is_admin() || p.user_id == viewer.id)
        .ok_or_else(|| PortalError::NotFound(format!("project {project_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use portico_domain::Role;

    fn viewer(id: &str, role: Role) -> Viewer {
        Viewer {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: None,
            role,
        }
    }

    fn project(id: &str, user_id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: "Site".to_string(),
            project_type: String::new(),
            description: String::new(),
            website: None,
            timeline: None,
            budget_range: None,
            status: "open".to_string(),
            invoice_approved: 0,
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_ensure_admin_gates_on_role() {
        assert!(ensure_admin(&viewer("usr_1", Role::Admin)).is_ok());
        assert!(matches!(
            ensure_admin(&viewer("usr_1", Role::Client)),
            Err(PortalError::Auth(_))
        ));
    }

    #[test]
    fn test_visible_project_scopes_clients_to_their_own() {
        let projects = vec![project("proj_1", "usr_1"), project("proj_2", "usr_2")];

        let owner = viewer("usr_1", Role::Client);
        assert!(visible_project(&owner, &projects, "proj_1").is_ok());
        assert!(matches!(
            visible_project(&owner, &projects, "proj_2"),
            Err(PortalError::NotFound(_))
        ));

        let admin = viewer("usr_9", Role::Admin);
        assert!(visible_project(&admin, &projects, "proj_2").is_ok());
    }

    #[test]
    fn test_visible_project_misses_unknown_ids() {
        let projects = vec![project("proj_1", "usr_1")];
        let admin = viewer("usr_9", Role::Admin);

        assert!(matches!(
            visible_project(&admin, &projects, "proj_404"),
            Err(PortalError::NotFound(_))
        ));
    }
}
