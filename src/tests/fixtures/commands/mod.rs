pub mod weekly_submission;
