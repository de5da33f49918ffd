//! DTOs for the statistics endpoint.

use serde::Serialize;

use crate::application::services::LinkStats;
use crate::domain::entities::Visit;

/// A single visit as exposed over the API.
#[derive(Debug, Serialize)]
pub struct VisitInfo {
    pub referer: String,
    pub client_ip: String,
    pub visited_at: String,
}

impl From<Visit> for VisitInfo {
    fn from(visit: Visit) -> Self {
        Self {
            referer: visit.referer,
            client_ip: visit.client_ip,
            visited_at: visit.visited_at,
        }
    }
}

/// Statistics report for a short code.
///
/// Uses an untagged enum so the two shapes serialize without a discriminator
/// field: an unknown code reports only `{ exists, code }`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Found {
        exists: bool,
        code: String,
        target: String,
        visit_count: i64,
        visits: Vec<VisitInfo>,
    },
    NotFound {
        exists: bool,
        code: String,
    },
}

impl StatsResponse {
    /// Builds the report for an existing code.
    pub fn found(stats: LinkStats) -> Self {
        Self::Found {
            exists: true,
            code: stats.code,
            target: stats.target_url,
            visit_count: stats.visit_count,
            visits: stats.visits.into_iter().map(VisitInfo::from).collect(),
        }
    }

    /// Builds the report for a code that was never issued.
    pub fn not_found(code: String) -> Self {
        Self::NotFound {
            exists: false,
            code,
        }
    }
}
