//! View model for the dashboard page.
//!
//! `build_dashboard` turns one provider snapshot into a [`DashboardView`];
//! the Dioxus components only render what it returns.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    format::{format_plain, format_value, FormatKind},
    metrics::{DashboardMetrics, MetricField, MetricValue, RawMaterial},
    products::{product_rows, ProductRow},
    stock::{stock_alerts, StockAlert},
};

/// Semantic color of a metric card. Resolved to classes by `ui::palette`.
///
/// Decoding goes through [`FromStr`], so an unknown name is rejected rather
/// than mapped to a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorToken {
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
}

impl ColorToken {
    pub const ALL: [ColorToken; 6] = [
        ColorToken::Blue,
        ColorToken::Green,
        ColorToken::Red,
        ColorToken::Yellow,
        ColorToken::Purple,
        ColorToken::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Yellow => "yellow",
            ColorToken::Purple => "purple",
            ColorToken::Orange => "orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color token: {0}")]
pub struct UnknownColorToken(pub String);

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}

impl TryFrom<String> for ColorToken {
    type Error = UnknownColorToken;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon handle carried through to the card view untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Package,
    TrendingUp,
    DollarSign,
    TrendingDown,
    Percent,
    AlertTriangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChangeIndicator {
    pub trend: Trend,
    pub label: String,
}

/// Non-negative changes point up and get an explicit `+`; negative ones keep
/// their own sign.
pub fn change_indicator(change: f64) -> ChangeIndicator {
    if change >= 0.0 {
        ChangeIndicator {
            trend: Trend::Up,
            label: format!("+{}%", format_plain(change)),
        }
    } else {
        ChangeIndicator {
            trend: Trend::Down,
            label: format!("{}%", format_plain(change)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricCardModel {
    pub title: String,
    pub value: String,
    pub change: Option<ChangeIndicator>,
    pub icon: Icon,
    pub color: ColorToken,
}

impl MetricCardModel {
    pub fn new(
        title: impl Into<String>,
        value: &MetricValue,
        change: Option<f64>,
        icon: Icon,
        color: ColorToken,
        format: FormatKind,
    ) -> Self {
        Self {
            title: title.into(),
            value: format_value(value, format),
            change: change.map(change_indicator),
            icon,
            color,
        }
    }
}

/// Static wiring of a dashboard card to a metrics field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBinding {
    pub title: &'static str,
    pub field: MetricField,
    pub color: ColorToken,
    pub format: FormatKind,
    pub icon: Icon,
    /// Shown until the backend reports a real change for the field.
    pub placeholder_change: f64,
}

pub const CARD_BINDINGS: [CardBinding; 6] = [
    CardBinding {
        title: "Total de Produtos",
        field: MetricField::TotalProducts,
        color: ColorToken::Blue,
        format: FormatKind::Number,
        icon: Icon::Package,
        placeholder_change: 12.0,
    },
    CardBinding {
        title: "Produtos Lucrativos",
        field: MetricField::ProfitableProducts,
        color: ColorToken::Green,
        format: FormatKind::Number,
        icon: Icon::TrendingUp,
        placeholder_change: 8.0,
    },
    CardBinding {
        title: "Receita Total",
        field: MetricField::TotalInventoryValue,
        color: ColorToken::Purple,
        format: FormatKind::Currency,
        icon: Icon::DollarSign,
        placeholder_change: 15.0,
    },
    CardBinding {
        title: "Produtos Deficitários",
        field: MetricField::DeficitaryProducts,
        color: ColorToken::Orange,
        format: FormatKind::Number,
        icon: Icon::TrendingDown,
        placeholder_change: 5.0,
    },
    CardBinding {
        title: "Margem Média",
        field: MetricField::AverageProfitMargin,
        color: ColorToken::Yellow,
        format: FormatKind::Percentage,
        icon: Icon::Percent,
        placeholder_change: 10.0,
    },
    CardBinding {
        title: "Alertas de Estoque",
        field: MetricField::CriticalStockItems,
        color: ColorToken::Red,
        format: FormatKind::Number,
        icon: Icon::AlertTriangle,
        placeholder_change: -5.0,
    },
];

impl CardBinding {
    pub fn card(&self, metrics: &DashboardMetrics) -> MetricCardModel {
        let change = metrics
            .change_of(self.field)
            .unwrap_or(self.placeholder_change);
        MetricCardModel::new(
            self.title,
            &metrics.value_of(self.field),
            Some(change),
            self.icon,
            self.color,
            self.format,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductTableModel {
    pub title: &'static str,
    pub rows: Vec<ProductRow>,
    /// Bottom-performer tables render profit and margin in red.
    pub negative: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadyView {
    pub cards: Vec<MetricCardModel>,
    pub top_products: ProductTableModel,
    pub bottom_products: ProductTableModel,
    pub stock_alerts: Vec<StockAlert>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Loading,
    Ready(ReadyView),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("provider finished loading without {0}")]
    MissingData(&'static str),
}

pub const TOP_PRODUCTS_TITLE: &str = "Produtos Mais Lucrativos";
pub const BOTTOM_PRODUCTS_TITLE: &str = "Produtos com Pior Desempenho";

pub fn build_dashboard(
    metrics: Option<&DashboardMetrics>,
    raw_materials: Option<&[RawMaterial]>,
    loading: bool,
) -> Result<DashboardView, DashboardError> {
    if loading {
        return Ok(DashboardView::Loading);
    }
    let metrics = metrics.ok_or(DashboardError::MissingData("dashboard metrics"))?;
    let raw_materials = raw_materials.ok_or(DashboardError::MissingData("raw materials"))?;

    let cards = CARD_BINDINGS
        .iter()
        .map(|binding| binding.card(metrics))
        .collect();

    Ok(DashboardView::Ready(ReadyView {
        cards,
        top_products: ProductTableModel {
            title: TOP_PRODUCTS_TITLE,
            rows: product_rows(&metrics.top_profitable_products),
            negative: false,
        },
        bottom_products: ProductTableModel {
            title: BOTTOM_PRODUCTS_TITLE,
            rows: product_rows(&metrics.bottom_performing_products),
            negative: true,
        },
        stock_alerts: stock_alerts(raw_materials),
    }))
}
