//! Visit event model for asynchronous visit tracking.

/// An in-memory visit event passed from the redirect handler to the
/// background worker via a bounded channel, so the redirect response never
/// waits on the stats write.
///
/// The timestamp is captured and formatted at request time; the worker
/// persists whatever the handler observed, not the time of the write.
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub code: String,
    /// Referer header of the request; empty when the header was absent.
    pub referer: String,
    pub client_ip: String,
    /// Preformatted [`crate::domain::entities::VISIT_TIME_FORMAT`] timestamp.
    pub visited_at: String,
}

impl VisitEvent {
    /// Creates a new visit event.
    pub fn new(code: String, referer: String, client_ip: String, visited_at: String) -> Self {
        Self {
            code,
            referer,
            client_ip,
            visited_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_event_creation() {
        let event = VisitEvent::new(
            "Ab3-_x".to_string(),
            "https://google.com".to_string(),
            "192.168.1.1".to_string(),
            "2026-08-07 12:00:00".to_string(),
        );

        assert_eq!(event.code, "Ab3-_x");
        assert_eq!(event.referer, "https://google.com");
        assert_eq!(event.client_ip, "192.168.1.1");
        assert_eq!(event.visited_at, "2026-08-07 12:00:00");
    }

    #[test]
    fn test_visit_event_clone() {
        let event = VisitEvent::new(
            "code1".to_string(),
            String::new(),
            "1.1.1.1".to_string(),
            "2026-08-07 12:00:00".to_string(),
        );

        let cloned = event.clone();

        assert_eq!(cloned.code, event.code);
        assert_eq!(cloned.referer, event.referer);
        assert_eq!(cloned.client_ip, event.client_ip);
        assert_eq!(cloned.visited_at, event.visited_at);
    }
}
