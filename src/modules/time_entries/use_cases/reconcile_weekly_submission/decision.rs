use serde::Serialize;

use crate::modules::time_entries::core::entry::TimeEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryChange {
    InsertedNewRow,
    InsertedNewDate,
    UpdatedHours,
    UpdatedFields,
    UpdatedHoursAndFields,
}

impl EntryChange {
    pub fn for_update(hours_changed: bool, fields_changed: bool) -> Option<Self> {
        match (hours_changed, fields_changed) {
            (true, true) => Some(Self::UpdatedHoursAndFields),
            (true, false) => Some(Self::UpdatedHours),
            (false, true) => Some(Self::UpdatedFields),
            (false, false) => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::InsertedNewRow => "Inserted new weekly row",
            Self::InsertedNewDate => "Inserted new date",
            Self::UpdatedHours => "Updated hours",
            Self::UpdatedFields => "Updated fields",
            Self::UpdatedHoursAndFields => "Updated hours and fields",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedWrite {
    pub entry: TimeEntry,
    pub change: EntryChange,
}

impl PlannedWrite {
    pub fn log_line(&self) -> String {
        let group = self
            .entry
            .group_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        format!(
            "{} | group_id={} date={}",
            self.change.label(),
            group,
            self.entry.date
        )
    }
}

/// Writes one weekly row needs: updates of stored dates, then inserts of new ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconcilePlan {
    pub updates: Vec<PlannedWrite>,
    pub inserts: Vec<PlannedWrite>,
}

impl ReconcilePlan {
    pub fn change_log(&self) -> Vec<String> {
        self.updates
            .iter()
            .chain(self.inserts.iter())
            .map(PlannedWrite::log_line)
            .collect()
    }

    pub fn into_entries(self) -> Vec<TimeEntry> {
        self.updates
            .into_iter()
            .chain(self.inserts)
            .map(|write| write.entry)
            .collect()
    }
}

/// Rendered in snake_case over both HTTP and GraphQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
#[graphql(rename_items = "snake_case")]
pub enum ReconcileOutcome {
    Saved,
    Updated,
    SavedAndUpdated,
    NoOp,
}

impl ReconcileOutcome {
    pub fn from_counts(inserted: usize, updated: usize) -> Self {
        match (inserted > 0, updated > 0) {
            (true, false) => Self::Saved,
            (false, true) => Self::Updated,
            (true, true) => Self::SavedAndUpdated,
            (false, false) => Self::NoOp,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Time entries saved successfully",
            Self::Updated => "Time entries updated successfully",
            Self::SavedAndUpdated => "Time entries saved and updated successfully",
            Self::NoOp => "Time entries already saved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciliationResult {
    pub inserted: usize,
    pub updated: usize,
    pub change_log: Vec<String>,
    pub outcome: ReconcileOutcome,
    pub message: String,
}

impl ReconciliationResult {
    pub fn new(inserted: usize, updated: usize, change_log: Vec<String>) -> Self {
        let outcome = ReconcileOutcome::from_counts(inserted, updated);
        Self {
            inserted,
            updated,
            change_log,
            outcome,
            message: outcome.message().to_string(),
        }
    }
}

#[cfg(test)]
mod reconcile_decision_tests {
    use super::*;
    use crate::tests::fixtures::entries::TimeEntryBuilder;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0, ReconcileOutcome::Saved)]
    #[case(0, 3, ReconcileOutcome::Updated)]
    #[case(2, 1, ReconcileOutcome::SavedAndUpdated)]
    #[case(0, 0, ReconcileOutcome::NoOp)]
    fn it_should_classify_the_outcome(
        #[case] inserted: usize,
        #[case] updated: usize,
        #[case] expected: ReconcileOutcome,
    ) {
        let result = ReconciliationResult::new(inserted, updated, Vec::new());
        assert_eq!(result.outcome, expected);
        assert_eq!(result.message, expected.message());
    }

    #[rstest]
    fn it_should_not_report_an_update_when_nothing_changed() {
        assert_eq!(EntryChange::for_update(false, false), None);
        assert_eq!(
            EntryChange::for_update(true, true),
            Some(EntryChange::UpdatedHoursAndFields)
        );
    }

    #[rstest]
    fn it_should_log_updates_before_inserts() {
        let plan = ReconcilePlan {
            updates: vec![PlannedWrite {
                entry: TimeEntryBuilder::new().group_id(4).date("01-01-2024").build(),
                change: EntryChange::UpdatedHours,
            }],
            inserts: vec![PlannedWrite {
                entry: TimeEntryBuilder::new().group_id(4).date("02-01-2024").build(),
                change: EntryChange::InsertedNewDate,
            }],
        };
        assert_eq!(
            plan.change_log(),
            vec![
                "Updated hours | group_id=4 date=01-01-2024",
                "Inserted new date | group_id=4 date=02-01-2024",
            ]
        );
        assert_eq!(plan.into_entries().len(), 2);
    }
}
