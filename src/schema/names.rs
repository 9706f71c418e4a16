//! Migration name normalization

const MIGRATION_SUFFIX: &str = "_table";
const PIVOT_SUFFIX: &str = "_pivot";

/// True when the key already reads as a migration name
/// (`create_users_table`, `remove_city_from_users_table`, ...)
pub fn is_migration_name(key: &str) -> bool {
    key.len() > MIGRATION_SUFFIX.len() && key.ends_with(MIGRATION_SUFFIX)
}

/// Turn a bare table name into `create_{name}_table`; migration names pass through
pub fn normalize(key: &str) -> String {
    if is_migration_name(key) {
        key.to_string()
    } else {
        format!("create_{}_table", key)
    }
}

/// Split a `{a}_{b}_pivot` key into its two table names
pub fn pivot_tables(key: &str) -> Option<(&str, &str)> {
    let stem = key.strip_suffix(PIVOT_SUFFIX)?;
    let (first, second) = stem.split_once('_')?;

    if first.is_empty() || second.is_empty() {
        return None;
    }

    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_table_name() {
        assert_eq!(normalize("users"), "create_users_table");
        assert_eq!(normalize("user_roles"), "create_user_roles_table");
    }

    #[test]
    fn test_normalize_keeps_migration_names() {
        assert_eq!(
            normalize("remove_city_from_users_table"),
            "remove_city_from_users_table"
        );
        assert_eq!(normalize("create_users_table"), "create_users_table");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("posts");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_bare_suffix_is_not_a_migration_name() {
        assert!(!is_migration_name("_table"));
        assert_eq!(normalize("_table"), "create__table_table");
    }

    #[test]
    fn test_pivot_tables() {
        assert_eq!(pivot_tables("posts_tags_pivot"), Some(("posts", "tags")));
        assert_eq!(pivot_tables("posts_pivot"), None);
        assert_eq!(pivot_tables("_tags_pivot"), None);
        assert_eq!(pivot_tables("posts_tags"), None);
    }
}
