//! Placeholder records shown in demo mode when the initial load fails

use super::{CommitId, CommitRecord};

/// Number of placeholder records
pub const FALLBACK_LEN: usize = 5;

fn placeholder(
    id: &str,
    project: &str,
    lifecycle: &str,
    action: &str,
    commit_type: &str,
    summary: &str,
    date: &str,
) -> CommitRecord {
    CommitRecord {
        id: Some(CommitId::new(id)),
        project: project.to_string(),
        lifecycle: lifecycle.to_string(),
        action: action.to_string(),
        commit_type: commit_type.to_string(),
        header: format!("{}({}): {}", commit_type, project, summary),
        description: None,
        created_at: Some(date.to_string()),
        updated_at: None,
    }
}

/// The fixed demo set. Ids are stable so deletes against it behave.
pub fn fallback_commits() -> Vec<CommitRecord> {
    vec![
        placeholder(
            "1",
            "auth",
            "development",
            "add",
            "feat",
            "add user authentication system",
            "2024-01-15",
        ),
        placeholder(
            "2",
            "auth",
            "testing",
            "fix",
            "fix",
            "resolve login validation bug",
            "2024-01-14",
        ),
        placeholder(
            "3",
            "api",
            "maintenance",
            "update",
            "docs",
            "update API documentation",
            "2024-01-13",
        ),
        placeholder(
            "4",
            "database",
            "development",
            "refactor",
            "refactor",
            "optimize database queries",
            "2024-01-12",
        ),
        placeholder(
            "5",
            "users",
            "testing",
            "add",
            "test",
            "add unit tests for user service",
            "2024-01-11",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_fallback_has_fixed_size() {
        assert_eq!(fallback_commits().len(), FALLBACK_LEN);
    }

    #[test]
    fn test_fallback_ids_unique() {
        let ids: HashSet<_> = fallback_commits().into_iter().filter_map(|c| c.id).collect();
        assert_eq!(ids.len(), FALLBACK_LEN);
    }
}
