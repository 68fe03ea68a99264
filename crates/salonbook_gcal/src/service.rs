// --- File: crates/salonbook_gcal/src/service.rs ---
use crate::error::GcalError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use salonbook_common::services::{BoxFuture, CalendarApiError, CalendarService, RawEvent};
use serde::Deserialize;
use tracing::debug;

const EVENTS_BASE_URL: &str = "https://www.googleapis.com/calendar/v3/calendars";

/// `events.list` client for the public salon calendar.
#[derive(Clone, Debug)]
pub struct GoogleCalendarService {
    client: Client,
    calendar_id: String,
    api_key: String,
    base_url: String,
}

impl GoogleCalendarService {
    /// Builds the client from configuration. The API key falls back to the
    /// `GCAL_API_KEY` env var; either identifier missing is a startup error,
    /// the service must not come up half-configured.
    pub fn from_config(config: &salonbook_config::GcalConfig) -> Result<Self, GcalError> {
        let calendar_id = config
            .calendar_id
            .clone()
            .ok_or(GcalError::MissingConfig("gcal.calendar_id"))?;
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GCAL_API_KEY").ok())
            .ok_or(GcalError::MissingConfig("GCAL_API_KEY"))?;
        Ok(GoogleCalendarService {
            client: Client::new(),
            calendar_id,
            api_key,
            base_url: EVENTS_BASE_URL.to_string(),
        })
    }

    /// Points the client at a different base URL, for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn list_events(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<RawEvent>, GcalError> {
        let url = format!("{}/{}/events", self.base_url, self.calendar_id);
        let time_min = start_time.to_rfc3339();
        let time_max = end_time.to_rfc3339();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GcalError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let listing: EventListing = serde_json::from_str(&body)?;
        debug!(items = listing.items.len(), "fetched calendar events");
        Ok(listing.items.into_iter().map(RawEvent::from).collect())
    }
}

impl CalendarService for GoogleCalendarService {
    fn fetch_events(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<RawEvent>, CalendarApiError> {
        Box::pin(async move {
            self.list_events(start_time, end_time)
                .await
                .map_err(CalendarApiError::from)
        })
    }
}

// --- events.list payload ---

#[derive(Debug, Deserialize)]
pub(crate) struct EventListing {
    #[serde(default)]
    pub items: Vec<EventItem>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct EventItem {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub start: Option<EventBoundary>,
    #[serde(default)]
    pub end: Option<EventBoundary>,
}

/// Google sends either `dateTime` (timed) or `date` (all-day) per boundary.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventBoundary {
    pub date_time: Option<String>,
    pub date: Option<String>,
}

impl From<EventItem> for RawEvent {
    fn from(item: EventItem) -> Self {
        let start = item.start.unwrap_or_default();
        let end = item.end.unwrap_or_default();
        RawEvent {
            start_date_time: start.date_time,
            end_date_time: end.date_time,
            start_date: start.date,
            end_date: end.date,
            summary: item.summary,
        }
    }
}
