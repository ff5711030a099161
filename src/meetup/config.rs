use std::env;
use std::time::Duration;

use crate::error::{ProjectNightError, ProjectNightResult};

pub const DEFAULT_API_ROOT: &str = "https://api.meetup.com";
pub const DEFAULT_GROUP_URLNAME: &str = "_ChiPy_";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the event API, passed to the client explicitly.
#[derive(Debug, Clone)]
pub struct MeetupConfig {
    pub api_root: String,
    pub group_urlname: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl MeetupConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            group_urlname: DEFAULT_GROUP_URLNAME.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read `MEETUP_API_KEY` (required), `MEETUP_API_ROOT` and `MEETUP_GROUP`.
    pub fn from_env() -> ProjectNightResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ProjectNightResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("MEETUP_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProjectNightError::Config("MEETUP_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Some(root) = lookup("MEETUP_API_ROOT").filter(|r| !r.trim().is_empty()) {
            config.api_root = root.trim_end_matches('/').to_string();
        }
        if let Some(group) = lookup("MEETUP_GROUP").filter(|g| !g.trim().is_empty()) {
            config.group_urlname = group;
        }
        Ok(config)
    }

    pub fn events_url(&self) -> String {
        format!("{}/{}/events", self.api_root, self.group_urlname)
    }

    pub fn rsvps_url(&self, event_id: &str) -> String {
        format!("{}/{}/events/{}/rsvps", self.api_root, self.group_urlname, event_id)
    }

    pub fn member_url(&self, member_id: &str) -> String {
        format!("{}/{}/members/{}", self.api_root, self.group_urlname, member_id)
    }
}
