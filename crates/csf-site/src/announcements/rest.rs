use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{Announcement, AnnouncementError, AnnouncementSource, StoreCredentials};

const TABLE_PATH: &str = "rest/v1/announcements";
const COLUMNS: &str = "id,title,content,published_at";

/// PostgREST-style HTTP source: one `GET` per call, no retries.
#[derive(Debug, Clone)]
pub struct RestAnnouncementSource {
    client: Client,
    credentials: StoreCredentials,
}

/// Error body returned by the store alongside a non-success status.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

impl RestAnnouncementSource {
    pub fn new(credentials: StoreCredentials) -> Result<Self, AnnouncementError> {
        let client = Client::builder()
            .build()
            .map_err(AnnouncementError::Client)?;
        Ok(Self {
            client,
            credentials,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.credentials.url, TABLE_PATH)
    }
}

#[async_trait]
impl AnnouncementSource for RestAnnouncementSource {
    async fn recent(&self, limit: usize) -> Result<Vec<Announcement>, AnnouncementError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("select", COLUMNS),
                ("order", "published_at.desc"),
                ("limit", limit.as_str()),
            ])
            .header("apikey", &self.credentials.api_key)
            .bearer_auth(&self.credentials.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StoreErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message)
                .unwrap_or(body);
            return Err(AnnouncementError::Store {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_announcements_table() {
        let source = RestAnnouncementSource::new(StoreCredentials {
            url: "https://store.example.test".into(),
            api_key: "anon".into(),
        })
        .expect("client builds");
        assert_eq!(
            source.endpoint(),
            "https://store.example.test/rest/v1/announcements"
        );
    }
}
