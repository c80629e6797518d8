//! Dashboard data model, formatting and view-model construction.

pub mod dashboard;
pub mod format;
pub mod metrics;
pub mod products;
pub mod provider_state;
pub mod stock;

#[allow(unused_imports)]
pub use dashboard::{
    build_dashboard, change_indicator, CardBinding, ChangeIndicator, ColorToken, DashboardError,
    DashboardView, Icon, MetricCardModel, ProductTableModel, ReadyView, Trend, UnknownColorToken,
    CARD_BINDINGS,
};
#[allow(unused_imports)]
pub use format::{format_value, FormatKind};
#[allow(unused_imports)]
pub use metrics::{
    DashboardMetrics, ErpSnapshot, MetricField, MetricValue, ProductPerformance, RawMaterial,
};
#[allow(unused_imports)]
pub use products::ProductRow;
#[allow(unused_imports)]
pub use provider_state::ProviderState;
#[allow(unused_imports)]
pub use stock::{AlertSeverity, StockAlert};
