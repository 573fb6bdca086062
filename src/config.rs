//! Application Configuration
//!
//! Backend addresses, session identity and reward rules. Defaults can be
//! overridden at build time through environment variables, by a JSON blob
//! embedded in the page, and (for the session) by the page query string.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::api::ApiError;
use crate::models::TaskStatus;

const DEFAULT_API_BASE: &str = "https://functions.poehali.dev";
const DEFAULT_USERS_ENDPOINT: &str = "04bbd535-e278-40ef-a668-d4c00cddff55";
const DEFAULT_TASKS_ENDPOINT: &str = "c4d99b39-898a-498c-b916-faedd8a63c90";
const DEFAULT_ACHIEVEMENTS_ENDPOINT: &str = "1bfac6dd-5105-4252-8fa5-eea0ddc83aa2";

const DEMO_TELEGRAM_ID: i64 = 123456789;
const DEMO_USERNAME: &str = "demo_user";

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "taskmaster-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub users_endpoint: String,
    pub tasks_endpoint: String,
    pub achievements_endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("TASKMASTER_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            users_endpoint: option_env!("TASKMASTER_USERS_ENDPOINT")
                .unwrap_or(DEFAULT_USERS_ENDPOINT)
                .to_string(),
            tasks_endpoint: option_env!("TASKMASTER_TASKS_ENDPOINT")
                .unwrap_or(DEFAULT_TASKS_ENDPOINT)
                .to_string(),
            achievements_endpoint: option_env!("TASKMASTER_ACHIEVEMENTS_ENDPOINT")
                .unwrap_or(DEFAULT_ACHIEVEMENTS_ENDPOINT)
                .to_string(),
        }
    }
}

/// Who is acting. The numeric user id is not configured: it comes from the
/// user record returned by the backend for this Telegram id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub telegram_id: i64,
    pub username: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            telegram_id: DEMO_TELEGRAM_ID,
            username: Some(DEMO_USERNAME.to_string()),
        }
    }
}

impl SessionConfig {
    /// Apply `telegram_id` / `username` from a query string such as
    /// `?telegram_id=42&username=ann`. Unparseable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned();
            match key {
                "telegram_id" => match value.parse() {
                    Ok(id) => self.telegram_id = id,
                    Err(_) => log::warn!("[CONFIG] Ignoring telegram_id={:?}", value),
                },
                "username" if !value.is_empty() => self.username = Some(value),
                _ => {}
            }
        }
    }
}

/// Which backend action feeds which achievement, and the XP reward
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub completion_xp: u32,
    pub task_created_achievement: i64,
    pub task_completed_achievement: i64,
    pub progress_increment: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            completion_xp: 25,
            task_created_achievement: 1,
            task_completed_achievement: 2,
            progress_increment: 1,
        }
    }
}

/// What a failed user lookup means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookupFallback {
    /// Only a 404 creates the user; other failures are reported
    #[default]
    NotFoundOnly,
    /// Any failure creates the user
    AnyFailure,
}

impl LookupFallback {
    pub fn should_create(&self, err: &ApiError) -> bool {
        match self {
            LookupFallback::NotFoundOnly => matches!(err, ApiError::NotFound(_)),
            LookupFallback::AnyFailure => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub rewards: RewardConfig,
    pub lookup_fallback: LookupFallback,
    /// Task lists fetched on every load, in display order
    pub loaded_statuses: Vec<TaskStatus>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            rewards: RewardConfig::default(),
            lookup_fallback: LookupFallback::default(),
            loaded_statuses: vec![TaskStatus::Active, TaskStatus::Overdue, TaskStatus::Completed],
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the configuration for the running page
    pub fn load() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());

        let embedded = document
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let mut config = match embedded {
            Some(json) => Self::from_json(&json).unwrap_or_else(|err| {
                log::error!("[CONFIG] Invalid #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(search) = window.and_then(|w| w.location().search().ok()) {
            config.session.apply_query(&search);
        }
        log::info!(
            "[CONFIG] API {} as telegram user {}",
            config.api.base_url,
            config.session.telegram_id
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.rewards.completion_xp, 25);
        assert_eq!(config.rewards.task_created_achievement, 1);
        assert_eq!(config.rewards.task_completed_achievement, 2);
        assert_eq!(config.session.telegram_id, 123456789);
        assert_eq!(config.lookup_fallback, LookupFallback::NotFoundOnly);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"api": {"base_url": "http://localhost:9000"},
                "rewards": {"completion_xp": 40},
                "lookup_fallback": "any_failure",
                "loaded_statuses": ["active"]}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.tasks_endpoint, ApiConfig::default().tasks_endpoint);
        assert_eq!(config.rewards.completion_xp, 40);
        assert_eq!(config.rewards.task_completed_achievement, 2);
        assert_eq!(config.lookup_fallback, LookupFallback::AnyFailure);
        assert_eq!(config.loaded_statuses, vec![TaskStatus::Active]);
    }

    #[test]
    fn test_session_from_query() {
        let mut session = SessionConfig::default();
        session.apply_query("?telegram_id=42&username=Ann%20Lee&theme=dark");
        assert_eq!(session.telegram_id, 42);
        assert_eq!(session.username.as_deref(), Some("Ann Lee"));
    }

    #[test]
    fn test_session_ignores_bad_id() {
        let mut session = SessionConfig::default();
        session.apply_query("telegram_id=abc&username=");
        assert_eq!(session.telegram_id, 123456789);
        assert_eq!(session.username.as_deref(), Some("demo_user"));
    }

    #[test]
    fn test_lookup_fallback() {
        let not_found = ApiError::NotFound("User not found".into());
        let offline = ApiError::Transport("offline".into());
        assert!(LookupFallback::NotFoundOnly.should_create(&not_found));
        assert!(!LookupFallback::NotFoundOnly.should_create(&offline));
        assert!(LookupFallback::AnyFailure.should_create(&offline));
    }
}
