use crate::modules::time_entries::core::entry::TimeEntry;
use crate::modules::time_entries::core::errors::ApplicationError;
use crate::modules::time_entries::core::work_date::derive_work_date;
use crate::modules::time_entries::use_cases::amend_time_entry::command::AmendTimeEntry;

/// Applies `command` to `entry`. `sibling_dates` are the dates held by the
/// other entries of the same group.
pub fn decide_amend(
    mut entry: TimeEntry,
    command: &AmendTimeEntry,
    sibling_dates: &[String],
) -> Result<TimeEntry, ApplicationError> {
    let fields_changed = entry.differs_from(&command.fields);
    let hours_changed = entry.hours != Some(command.hours);
    let date_changed = entry.date != command.date;

    if !(fields_changed || hours_changed || date_changed) {
        return Err(ApplicationError::Validation("no changes detected".into()));
    }
    if date_changed && sibling_dates.contains(&command.date) {
        return Err(ApplicationError::Conflict(format!(
            "group already has an entry on {}",
            command.date
        )));
    }

    entry.apply_static_fields(&command.fields);
    entry.hours = Some(command.hours);
    entry.date = command.date.clone();
    entry.work_date = derive_work_date(&entry.date);
    Ok(entry)
}
