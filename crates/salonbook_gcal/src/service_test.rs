#[cfg(test)]
mod tests {
    use crate::error::GcalError;
    use crate::service::EventListing;
    use salonbook_common::services::{CalendarApiError, RawEvent};

    const SAMPLE: &str = r#"{
        "kind": "calendar#events",
        "items": [
            {
                "summary": "Uñas Acrílicas - Carla",
                "start": { "dateTime": "2025-06-10T12:00:00-04:00" },
                "end": { "dateTime": "2025-06-10T15:00:00-04:00" }
            },
            {
                "summary": "Cerrado",
                "start": { "date": "2025-06-12" },
                "end": { "date": "2025-06-13" }
            },
            {
                "start": { "dateTime": "2025-06-10T16:00:00-04:00" }
            }
        ]
    }"#;

    #[test]
    fn events_list_payload_maps_to_raw_events() {
        let listing: EventListing = serde_json::from_str(SAMPLE).unwrap();
        let events: Vec<RawEvent> = listing.items.into_iter().map(RawEvent::from).collect();
        assert_eq!(events.len(), 3);

        assert_eq!(
            events[0].start_date_time.as_deref(),
            Some("2025-06-10T12:00:00-04:00")
        );
        assert!(events[0].start_date.is_none());

        assert_eq!(events[1].start_date.as_deref(), Some("2025-06-12"));
        assert_eq!(events[1].end_date.as_deref(), Some("2025-06-13"));
        assert_eq!(events[1].summary.as_deref(), Some("Cerrado"));

        // Partial events survive the transport layer untouched; the
        // normalizer is the one that decides to drop them.
        assert!(events[2].end_date_time.is_none());
        assert!(events[2].summary.is_none());
    }

    #[test]
    fn missing_items_key_means_no_events() {
        let listing: EventListing = serde_json::from_str(r#"{"kind":"calendar#events"}"#).unwrap();
        assert!(listing.items.is_empty());
    }

    #[test]
    fn api_errors_keep_the_upstream_status_and_give_a_hint() {
        let forbidden: CalendarApiError = GcalError::Api {
            status: 403,
            body: "forbidden".to_string(),
        }
        .into();
        assert_eq!(forbidden.status, Some(403));
        assert!(forbidden.hint.contains("API key"));

        let not_found: CalendarApiError = GcalError::Api {
            status: 404,
            body: "not found".to_string(),
        }
        .into();
        assert_eq!(not_found.status, Some(404));
        assert!(not_found.hint.contains("calendar id"));
    }

    #[test]
    fn missing_config_is_a_startup_error() {
        let config = salonbook_config::GcalConfig::default();
        let err = crate::service::GoogleCalendarService::from_config(&config).unwrap_err();
        assert!(matches!(err, GcalError::MissingConfig("gcal.calendar_id")));
    }

    fn test_service(base_url: String) -> crate::service::GoogleCalendarService {
        let config = salonbook_config::GcalConfig {
            calendar_id: Some("salon@group.calendar.google.com".to_string()),
            api_key: Some("test-key".to_string()),
        };
        crate::service::GoogleCalendarService::from_config(&config)
            .unwrap()
            .with_base_url(base_url)
    }

    fn day_bounds() -> (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) {
        use chrono::TimeZone;
        (
            chrono::Utc.with_ymd_and_hms(2025, 6, 10, 4, 0, 0).unwrap(),
            chrono::Utc.with_ymd_and_hms(2025, 6, 11, 4, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn fetch_events_queries_the_events_list_endpoint() {
        use salonbook_common::services::CalendarService;

        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/salon@group.calendar.google.com/events")
                    .query_param("singleEvents", "true")
                    .query_param("orderBy", "startTime")
                    .query_param("key", "test-key");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(SAMPLE);
            })
            .await;

        let service = test_service(server.base_url());
        let (start, end) = day_bounds();
        let events = service.fetch_events(start, end).await.unwrap();

        mock.assert_async().await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].summary.as_deref(), Some("Cerrado"));
    }

    #[tokio::test]
    async fn non_success_responses_become_api_errors_with_status() {
        use salonbook_common::services::CalendarService;

        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET);
                then.status(403).body(r#"{"error":{"code":403}}"#);
            })
            .await;

        let service = test_service(server.base_url());
        let (start, end) = day_bounds();
        let err = service.fetch_events(start, end).await.unwrap_err();

        assert_eq!(err.status, Some(403));
        assert!(err.hint.contains("API key"));
    }
}
