use std::collections::HashSet;

use crate::modules::time_entries::core::entry::{TimeEntry, UserRef};
use crate::modules::time_entries::core::work_date::derive_work_date;
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::{
    command::WeeklySubmission,
    decision::{EntryChange, PlannedWrite, ReconcilePlan},
};

/// Everything one weekly row is reconciled with. Built per row so that no state
/// leaks between rows of the same batch.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub group_id: i64,
    pub user: &'a UserRef,
    pub submission: &'a WeeklySubmission,
}

/// Plans the writes that bring the stored entries of one group in line with
/// the submitted row. `existing` are the entries currently stored under
/// `context.group_id`.
pub fn decide_reconcile(context: RowContext<'_>, existing: Vec<TimeEntry>) -> ReconcilePlan {
    let submission = context.submission;

    if existing.is_empty() {
        return ReconcilePlan {
            updates: Vec::new(),
            inserts: plan_inserts(context, |_| true, EntryChange::InsertedNewRow),
        };
    }

    let static_changed = existing[0].differs_from(&submission.fields);
    let stored_dates: HashSet<String> = existing.iter().map(|e| e.date.clone()).collect();

    let mut updates = Vec::new();
    for mut entry in existing {
        let hours_changed = match submission.hours_by_date.get(&entry.date) {
            Some(&hours) if entry.hours != Some(hours) => {
                entry.hours = Some(hours);
                entry.work_date = derive_work_date(&entry.date);
                true
            }
            _ => false,
        };
        if static_changed {
            entry.overwrite_static_fields(context.user, &submission.fields);
        }
        if let Some(change) = EntryChange::for_update(hours_changed, static_changed) {
            updates.push(PlannedWrite { entry, change });
        }
    }

    ReconcilePlan {
        updates,
        inserts: plan_inserts(
            context,
            |date| !stored_dates.contains(date),
            EntryChange::InsertedNewDate,
        ),
    }
}

fn plan_inserts(
    context: RowContext<'_>,
    is_new: impl Fn(&str) -> bool,
    change: EntryChange,
) -> Vec<PlannedWrite> {
    context
        .submission
        .hours_by_date
        .iter()
        .filter(|(date, _)| is_new(date))
        .map(|(date, hours)| PlannedWrite {
            entry: TimeEntry::new_for_date(
                context.group_id,
                context.user,
                &context.submission.fields,
                date,
                *hours,
            ),
            change,
        })
        .collect()
}
