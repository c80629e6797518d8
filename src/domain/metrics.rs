use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value shown on a metric card. Providers send plain JSON numbers, but
/// some ERP exports stringify them, so both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        MetricValue::Number(value as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// Scalar fields of [`DashboardMetrics`] that a card can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricField {
    TotalProducts,
    ProfitableProducts,
    TotalInventoryValue,
    DeficitaryProducts,
    AverageProfitMargin,
    CriticalStockItems,
}

/// Aggregate snapshot computed by the ERP backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_products: u32,
    pub profitable_products: u32,
    pub total_inventory_value: f64,
    pub deficitary_products: u32,
    pub average_profit_margin: f64,
    pub critical_stock_items: u32,
    #[serde(default)]
    pub top_profitable_products: Vec<ProductPerformance>,
    #[serde(default)]
    pub bottom_performing_products: Vec<ProductPerformance>,
    /// Period-over-period changes in percent, when the backend computes them.
    #[serde(default)]
    pub changes: BTreeMap<MetricField, f64>,
}

impl DashboardMetrics {
    pub fn value_of(&self, field: MetricField) -> MetricValue {
        match field {
            MetricField::TotalProducts => self.total_products.into(),
            MetricField::ProfitableProducts => self.profitable_products.into(),
            MetricField::TotalInventoryValue => self.total_inventory_value.into(),
            MetricField::DeficitaryProducts => self.deficitary_products.into(),
            MetricField::AverageProfitMargin => self.average_profit_margin.into(),
            MetricField::CriticalStockItems => self.critical_stock_items.into(),
        }
    }

    pub fn change_of(&self, field: MetricField) -> Option<f64> {
        self.changes.get(&field).copied()
    }
}

/// One entry of the ranked product lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub sale_price: f64,
    pub unit_cost: f64,
    pub profit: f64,
    /// Margin in percent (`25.0` means 25 %).
    pub profit_margin: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub current_stock: f64,
    pub minimum_stock: f64,
    #[serde(default)]
    pub unit_cost: Option<f64>,
}

/// Everything the dashboard needs from the data provider in one fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErpSnapshot {
    pub dashboard_metrics: DashboardMetrics,
    pub raw_materials: Vec<RawMaterial>,
}
