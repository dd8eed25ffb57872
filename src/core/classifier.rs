//! Record classification.
//!
//! Tabular records are classified by an ordered list of string-prefix rules
//! over a discriminant column; the first rule whose prefix matches builds
//! the [`EventData`]. Anything else is deliberately ignored and reported as
//! an unrecognised record; the rule lists are partial and grow by adding
//! entries.
//!
//! Document records have no single discriminant: each timestamp field that
//! is present triggers its own event, described by [`FieldRule`]s.

use crate::core::event::{EventData, TimeLabel};
use crate::core::table_reader::Row;
use crate::util::error::{Result, TimelineSleuthError};

/// Values computed before classification and handed to every builder.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowContext {
    /// `end - start` in native units, when both are present.
    pub duration: Option<f64>,
}

/// Constructor of one [`EventData`] variant from a row.
pub type RowBuilder = fn(&Row<'_>, RowContext) -> Result<EventData>;

/// Maps a discriminant prefix to an event-data constructor.
#[derive(Clone, Copy)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub build: RowBuilder,
}

/// First rule whose prefix matches `discriminant`, in declaration order.
pub fn classify<'r>(rules: &'r [PrefixRule], discriminant: &str) -> Option<&'r PrefixRule> {
    rules.iter().find(|rule| discriminant.starts_with(rule.prefix))
}

/// Classify `row` and build its data, or report the discriminant as
/// unrecognised.
pub fn build_from_row(
    rules: &[PrefixRule],
    discriminant: &str,
    row: &Row<'_>,
    context: RowContext,
) -> Result<EventData> {
    match classify(rules, discriminant) {
        Some(rule) => (rule.build)(row, context),
        None => Err(TimelineSleuthError::UnrecognizedRecord {
            discriminant: discriminant.to_string(),
        }),
    }
}

/// A document timestamp field and the label of the event it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub key: &'static str,
    pub label: TimeLabel,
}

impl FieldRule {
    pub const fn new(key: &'static str, label: TimeLabel) -> Self {
        Self { key, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::ApplicationActivity;
    use crate::core::table_reader::{CellValue, ColumnIndex};

    fn build_a(_: &Row<'_>, ctx: RowContext) -> Result<EventData> {
        Ok(EventData::Application(ApplicationActivity {
            bundle_identifier: Some("a".into()),
            duration: ctx.duration,
        }))
    }

    fn build_ab(_: &Row<'_>, _: RowContext) -> Result<EventData> {
        Ok(EventData::Application(ApplicationActivity {
            bundle_identifier: Some("ab".into()),
            duration: None,
        }))
    }

    const RULES: &[PrefixRule] = &[
        PrefixRule { prefix: "/a/b/", build: build_ab },
        PrefixRule { prefix: "/a/", build: build_a },
    ];

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(classify(RULES, "/a/b/c").map(|r| r.prefix), Some("/a/b/"));
        assert_eq!(classify(RULES, "/a/x").map(|r| r.prefix), Some("/a/"));
    }

    #[test]
    fn test_unmatched_discriminant_is_unrecognized() {
        let columns = ColumnIndex::new(["action"]);
        let values = [CellValue::Text("/notification/usage".into())];
        let row = Row::new(&columns, &values);
        let err = build_from_row(RULES, "/notification/usage", &row, RowContext::default()).unwrap_err();
        assert!(matches!(err, TimelineSleuthError::UnrecognizedRecord { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_context_reaches_builder() {
        let columns = ColumnIndex::default();
        let row = Row::new(&columns, &[]);
        let data = build_from_row(RULES, "/a/", &row, RowContext { duration: Some(2.0) }).unwrap();
        assert_eq!(
            data,
            EventData::Application(ApplicationActivity {
                bundle_identifier: Some("a".into()),
                duration: Some(2.0),
            })
        );
    }
}
