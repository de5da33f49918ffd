//! Visit entity representing a single redirect event.

/// Format of the `visited_at` timestamp, in UTC.
pub const VISIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A visit recorded when a short link is accessed.
///
/// Rows are append-only. `code` is a weak reference to a stored link, not an
/// enforced foreign key, so events survive a link being removed out-of-band.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i64,
    pub code: String,
    /// Referer header of the visiting request; empty when absent.
    pub referer: String,
    pub client_ip: String,
    /// Preformatted [`VISIT_TIME_FORMAT`] timestamp.
    pub visited_at: String,
}

impl Visit {
    /// Creates a new Visit instance.
    pub fn new(
        id: i64,
        code: String,
        referer: String,
        client_ip: String,
        visited_at: String,
    ) -> Self {
        Self {
            id,
            code,
            referer,
            client_ip,
            visited_at,
        }
    }
}

/// Input data for recording a new visit.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub code: String,
    pub referer: String,
    pub client_ip: String,
    pub visited_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_creation() {
        let visit = Visit::new(
            1,
            "Ab3-_x".to_string(),
            "https://google.com".to_string(),
            "192.168.1.1".to_string(),
            "2026-08-07 12:00:00".to_string(),
        );

        assert_eq!(visit.id, 1);
        assert_eq!(visit.code, "Ab3-_x");
        assert_eq!(visit.referer, "https://google.com");
        assert_eq!(visit.client_ip, "192.168.1.1");
        assert_eq!(visit.visited_at, "2026-08-07 12:00:00");
    }

    #[test]
    fn test_visit_with_empty_referer() {
        let visit = Visit::new(
            2,
            "code".to_string(),
            String::new(),
            "10.0.0.1".to_string(),
            "2026-08-07 12:00:00".to_string(),
        );
        assert!(visit.referer.is_empty());
    }

    #[test]
    fn test_visit_time_format_renders() {
        let formatted = chrono::Utc::now().format(VISIT_TIME_FORMAT).to_string();
        // e.g. "2026-08-07 13:40:00"
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }
}
