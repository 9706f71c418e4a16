use crate::schema::{ErrorKind, ValidationErrorReport};

/// One human-readable line per recorded error, in report order
pub fn report_lines(report: &ValidationErrorReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (entry, errors) in report.entries() {
        for (column, column_errors) in errors.columns() {
            for (kind, token) in column_errors.iter() {
                let what = match kind {
                    ErrorKind::ColumnType => "column type",
                    ErrorKind::ColumnModifier => "column modifier",
                };
                lines.push(format!(
                    "{}.{}: invalid {} '{}' ({})",
                    entry, column, what, token, kind
                ));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode;
    use crate::schema::SchemaValidator;

    #[test]
    fn test_report_lines() {
        let doc = decode(
            r#"{
                "dogs": {
                    "paws": "yesTheyHaveThemSometimes:index",
                    "ears_invalid": "string:thisIsMyInvalidModifier"
                }
            }"#,
        )
        .unwrap();
        let report = SchemaValidator::standard().validate(&doc);

        assert_eq!(
            report_lines(&report),
            vec![
                "dogs.paws: invalid column type 'yesTheyHaveThemSometimes' (columnType)",
                "dogs.ears_invalid: invalid column modifier 'thisIsMyInvalidModifier' (columnModifier)",
            ]
        );
    }

    #[test]
    fn test_empty_report_has_no_lines() {
        assert!(report_lines(&ValidationErrorReport::default()).is_empty());
    }
}
