use crate::modules::time_entries::core::entry::StaticFields;
use crate::modules::time_entries::use_cases::amend_time_entry::command::AmendTimeEntry;
use crate::modules::time_entries::use_cases::get_rollup::filter::{RollupFilter, RollupScope};
use crate::modules::time_entries::use_cases::reconcile_weekly_submission::decision::ReconcileOutcome;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::weekly_submission::WeeklySubmissionBuilder;
use crate::tests::fixtures::entries::{make_other_user, make_user};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[tokio::test]
async fn reconciled_weeks_show_up_in_horizon_and_rollup() {
    let state = AppState::in_memory([make_user(), make_other_user()]);
    let fields = WeeklySubmissionBuilder::new().build().fields;

    let first = state
        .reconcile_handler
        .handle(vec![
            WeeklySubmissionBuilder::new()
                .hours(&[("01-01-2024", 4.0)])
                .build(),
            WeeklySubmissionBuilder::new()
                .email("john.roe@example.com")
                .fields(StaticFields {
                    billable: "No".into(),
                    ..fields.clone()
                })
                .hours(&[("01-01-2024", 2.0)])
                .build(),
        ])
        .await
        .unwrap();
    assert_eq!(first.outcome, ReconcileOutcome::Saved);

    let horizon = state.horizon_handler.handle(1, day(1), day(7)).await.unwrap();
    let group_id = horizon[0].group_id.unwrap();

    let second = state
        .reconcile_handler
        .handle(vec![
            WeeklySubmissionBuilder::new()
                .group_id(group_id)
                .hours(&[("01-01-2024", 6.0), ("02-01-2024", 3.0)])
                .build(),
        ])
        .await
        .unwrap();
    assert_eq!((second.inserted, second.updated), (1, 1));

    let horizon = state.horizon_handler.handle(1, day(1), day(7)).await.unwrap();
    assert_eq!(horizon.len(), 1);
    assert_eq!(horizon[0].total_hours, 9.0);

    let rollup = state
        .rollup_handler
        .handle(RollupFilter {
            scope: RollupScope::Client("acme".into()),
            start: day(1),
            end: day(31),
        })
        .await
        .unwrap();
    assert_eq!(rollup.len(), 1);
    assert_eq!(rollup[0].billable_hours, 9.0);
    assert_eq!(rollup[0].non_billable_hours, 2.0);
}

#[tokio::test]
async fn amended_entries_and_ticket_descriptions_flow_into_the_views() {
    let state = AppState::in_memory([make_user()]);
    state
        .reconcile_handler
        .handle(vec![WeeklySubmissionBuilder::new().build()])
        .await
        .unwrap();

    let listed = state.list_handler.handle(1, day(1), day(7)).await.unwrap();
    assert_eq!(listed.len(), 2);

    let fields = WeeklySubmissionBuilder::new().build().fields;
    state
        .amend_handler
        .handle(
            listed[0].id,
            AmendTimeEntry {
                fields,
                hours: 1.0,
                date: "03-01-2024".into(),
            },
        )
        .await
        .unwrap();

    state
        .ticket_description_handler
        .update("T1", "Reconcile timesheets")
        .await
        .unwrap();

    let horizon = state.horizon_handler.handle(1, day(1), day(7)).await.unwrap();
    assert_eq!(horizon.len(), 1);
    let labels: Vec<_> = horizon[0].hours_by_date.keys().cloned().collect();
    assert_eq!(labels, vec!["2 Jan (Tue)", "3 Jan (Wed)"]);
    assert_eq!(horizon[0].total_hours, 5.0);
    assert_eq!(
        horizon[0].ticket_description.as_deref(),
        Some("Reconcile timesheets")
    );
}
