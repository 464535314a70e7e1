use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::modules::time_entries::core::entry::UserRef;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub users_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            users_file: std::env::var("TIMESHEET_USERS_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Users seeding the in-memory directory; none when no file is configured.
    pub fn load_users(&self) -> Result<Vec<UserRef>> {
        let Some(path) = &self.users_file else {
            return Ok(Vec::new());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read users file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("users file '{}' is not a JSON array of users", path.display()))
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    fn config(users_file: Option<PathBuf>) -> Config {
        Config {
            host: "127.0.0.1".into(),
            port: 3000,
            rust_log: "debug".into(),
            users_file,
        }
    }

    #[rstest]
    fn it_should_format_the_bind_address() {
        assert_eq!(config(None).bind_address(), "127.0.0.1:3000");
    }

    #[rstest]
    fn it_should_load_no_users_without_a_file() {
        assert!(config(None).load_users().unwrap().is_empty());
    }

    #[rstest]
    fn it_should_load_users_from_a_json_file() {
        let path = std::env::temp_dir().join(format!("timesheet-users-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"user_id": 1, "email": "jane.doe@example.com", "first_name": "Jane", "last_name": "Doe"}]"#,
        )
        .unwrap();

        let users = config(Some(path.clone())).load_users().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "jane.doe@example.com");
    }

    #[rstest]
    fn it_should_fail_on_a_missing_file() {
        let err = config(Some(PathBuf::from("/nonexistent/users.json")))
            .load_users()
            .unwrap_err();
        assert!(err.to_string().contains("could not read users file"));
    }
}
