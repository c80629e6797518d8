use time::OffsetDateTime;

use super::{
    dashboard::{build_dashboard, DashboardError, DashboardView},
    metrics::{DashboardMetrics, ErpSnapshot, RawMaterial},
};

/// What the data provider currently knows. Shared through a Dioxus context
/// signal; the dashboard only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderState {
    pub loading: bool,
    pub metrics: Option<DashboardMetrics>,
    pub raw_materials: Option<Vec<RawMaterial>>,
    /// Last fetch failure, cleared by the next successful fetch.
    pub error: Option<String>,
    pub last_updated: Option<OffsetDateTime>,
}

impl Default for ProviderState {
    fn default() -> Self {
        Self {
            loading: true,
            metrics: None,
            raw_materials: None,
            error: None,
            last_updated: None,
        }
    }
}

impl ProviderState {
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn apply_snapshot(&mut self, snapshot: ErpSnapshot, fetched_at: OffsetDateTime) {
        self.metrics = Some(snapshot.dashboard_metrics);
        self.raw_materials = Some(snapshot.raw_materials);
        self.error = None;
        self.last_updated = Some(fetched_at);
        self.loading = false;
    }

    /// Keeps whatever data was shown before the failed fetch.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn dashboard(&self) -> Result<DashboardView, DashboardError> {
        build_dashboard(
            self.metrics.as_ref(),
            self.raw_materials.as_deref(),
            self.loading,
        )
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn snapshot() -> ErpSnapshot {
        ErpSnapshot {
            dashboard_metrics: DashboardMetrics {
                total_products: 3,
                ..Default::default()
            },
            raw_materials: Vec::new(),
        }
    }

    #[test]
    fn starts_loading_without_data() {
        let state = ProviderState::default();
        assert!(state.loading);
        assert!(state.metrics.is_none());
        assert_eq!(state.dashboard(), Ok(DashboardView::Loading));
    }

    #[test]
    fn snapshot_moves_to_ready() {
        let mut state = ProviderState::default();
        state.apply_error("offline");
        state.begin_refresh();
        state.apply_snapshot(snapshot(), datetime!(2026-10-18 09:30 UTC));

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.last_updated, Some(datetime!(2026-10-18 09:30 UTC)));
        assert!(matches!(state.dashboard(), Ok(DashboardView::Ready(_))));
    }

    #[test]
    fn failed_refresh_keeps_previous_data() {
        let mut state = ProviderState::default();
        state.apply_snapshot(snapshot(), datetime!(2026-10-18 09:30 UTC));
        state.begin_refresh();
        assert_eq!(state.dashboard(), Ok(DashboardView::Loading));

        state.apply_error("timeout");
        assert_eq!(state.error.as_deref(), Some("timeout"));
        assert!(state.metrics.is_some());
        assert!(matches!(state.dashboard(), Ok(DashboardView::Ready(_))));
    }

    #[test]
    fn first_fetch_failure_reports_missing_data() {
        let mut state = ProviderState::default();
        state.apply_error("boom");
        assert_eq!(
            state.dashboard(),
            Err(DashboardError::MissingData("dashboard metrics"))
        );
    }
}
