//! Optional "Latest Announcements" strip on the home page.
//!
//! The feed is resolved once from configuration. Fetch failures never reach
//! the page: they are logged and collapse to an empty strip.

mod rest;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub use crate::config::{AnnouncementStoreConfig, StoreCredentials};
pub use rest::RestAnnouncementSource;

/// Most announcements ever shown at once.
pub const MAX_ANNOUNCEMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Announcement {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "de_published_at")]
    pub published_at: DateTime<Utc>,
}

impl Announcement {
    /// Short Australian date, e.g. `05/03/2025`.
    pub fn display_date(&self) -> String {
        self.published_at.format("%d/%m/%Y").to_string()
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    })
}

fn de_published_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("unrecognised published_at timestamp '{raw}'"))
    })
}

/// RFC 3339 with offset, or a zone-less timestamp read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Debug, thiserror::Error)]
pub enum AnnouncementError {
    #[error("announcement store unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("announcement store returned {status}: {message}")]
    Store { status: u16, message: String },
    #[error("announcement payload malformed: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("unable to build announcement client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Read-only access to recently published announcements.
#[async_trait]
pub trait AnnouncementSource: Send + Sync {
    async fn recent(&self, limit: usize) -> Result<Vec<Announcement>, AnnouncementError>;
}

/// Outcome of a single render-time fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestAnnouncements {
    /// No store configured; nothing was requested.
    Disabled,
    Fetched(Vec<Announcement>),
    /// The store was asked and failed; details went to the log.
    Unavailable,
}

impl LatestAnnouncements {
    pub fn items(&self) -> &[Announcement] {
        match self {
            Self::Fetched(items) => items,
            Self::Disabled | Self::Unavailable => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[derive(Clone, Default)]
pub struct AnnouncementFeed {
    source: Option<Arc<dyn AnnouncementSource>>,
}

impl fmt::Debug for AnnouncementFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnouncementFeed")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl AnnouncementFeed {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_source(source: Arc<dyn AnnouncementSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn from_config(config: &AnnouncementStoreConfig) -> Self {
        let Some(credentials) = config.credentials() else {
            tracing::info!("announcement store not configured; announcements disabled");
            return Self::disabled();
        };

        match RestAnnouncementSource::new(credentials) {
            Ok(source) => Self::with_source(Arc::new(source)),
            Err(err) => {
                tracing::warn!(error = %err, "announcements disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// At most one request per call. Results come back newest first and
    /// capped, even when the store ignores the ordering or limit.
    pub async fn latest(&self) -> LatestAnnouncements {
        let Some(source) = &self.source else {
            return LatestAnnouncements::Disabled;
        };

        match source.recent(MAX_ANNOUNCEMENTS).await {
            Ok(mut items) => {
                items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
                items.truncate(MAX_ANNOUNCEMENTS);
                tracing::debug!(count = items.len(), "fetched announcements");
                LatestAnnouncements::Fetched(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "announcements unavailable");
                LatestAnnouncements::Unavailable
            }
        }
    }
}
