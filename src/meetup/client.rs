use serde_json::Value;
use tracing::{debug, warn};

use super::api::{EventApi, RawEvent, RawRsvp};
use super::config::MeetupConfig;
use crate::error::{ProjectNightError, ProjectNightResult};
use crate::model::{EventId, MemberId};

/// Blocking client for the event platform. One request per call, no retries.
pub struct MeetupClient {
    config: MeetupConfig,
    agent: ureq::Agent,
}

impl MeetupClient {
    pub fn new(config: MeetupConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { config, agent }
    }

    fn get(&self, url: &str, fields: Option<&str>) -> Result<ureq::Response, ureq::Error> {
        let mut request = self
            .agent
            .get(url)
            .query("sign", "true")
            .query("key", &self.config.api_key);
        if let Some(fields) = fields {
            request = request.query("fields", fields);
        }
        debug!(url, "GET");
        request.call()
    }

    fn get_json(&self, url: &str, fields: Option<&str>) -> ProjectNightResult<Value> {
        let response = self.get(url, fields).map_err(|e| match e {
            ureq::Error::Status(status, _) => ProjectNightError::ExternalService {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(t) => ProjectNightError::Transport {
                url: url.to_string(),
                message: t.to_string(),
            },
        })?;
        Ok(response.into_json()?)
    }
}

impl EventApi for MeetupClient {
    fn upcoming_events(&self) -> ProjectNightResult<Vec<RawEvent>> {
        let json = self.get_json(&self.config.events_url(), None)?;
        Ok(serde_json::from_value(json)?)
    }

    fn rsvps(&self, event_id: &EventId) -> ProjectNightResult<Vec<RawRsvp>> {
        let json = self.get_json(&self.config.rsvps_url(event_id.as_str()), Some("rsvp"))?;
        Ok(serde_json::from_value(json)?)
    }

    fn given_name(&self, member_id: MemberId) -> ProjectNightResult<String> {
        let url = self.config.member_url(&member_id.to_string());
        let response = match self.get(&url, Some("group_profile")) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                warn!(%member_id, status, "member profile unavailable");
                return Ok(String::new());
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(ProjectNightError::Transport {
                    url,
                    message: t.to_string(),
                })
            }
        };

        let json: Value = match response.into_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(%member_id, error = %e, "member profile is not JSON");
                return Ok(String::new());
            }
        };
        Ok(profile_answer(&json))
    }
}

/// First answer of the group profile, or empty when absent.
pub fn profile_answer(json: &Value) -> String {
    json.pointer("/group_profile/answers/0/answer")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
