//! Stock alert classification for raw materials.

use std::cmp::Ordering;

use super::{format::format_plain, metrics::RawMaterial};

/// Stock at or below `minimum * LOW_STOCK_FACTOR` is flagged as low.
pub const LOW_STOCK_FACTOR: f64 = 1.5;

/// Ordered from most to least urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertSeverity {
    Out,
    Critical,
    Low,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Out => "Sem estoque",
            AlertSeverity::Critical => "Crítico",
            AlertSeverity::Low => "Baixo",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StockAlert {
    pub material_id: String,
    pub name: String,
    pub severity: AlertSeverity,
    pub current: String,
    pub minimum: String,
    ratio: f64,
}

pub fn classify(material: &RawMaterial) -> Option<AlertSeverity> {
    let current = material.current_stock;
    let minimum = material.minimum_stock;
    if current.is_nan() || minimum.is_nan() {
        return None;
    }
    if current <= 0.0 {
        Some(AlertSeverity::Out)
    } else if current <= minimum {
        Some(AlertSeverity::Critical)
    } else if current <= minimum * LOW_STOCK_FACTOR {
        Some(AlertSeverity::Low)
    } else {
        None
    }
}

pub fn stock_alerts(materials: &[RawMaterial]) -> Vec<StockAlert> {
    let mut alerts = materials
        .iter()
        .filter_map(|material| {
            let severity = classify(material)?;
            Some(StockAlert {
                material_id: material.id.clone(),
                name: material.name.clone(),
                severity,
                current: with_unit(material.current_stock, &material.unit),
                minimum: with_unit(material.minimum_stock, &material.unit),
                ratio: stock_ratio(material),
            })
        })
        .collect::<Vec<_>>();

    alerts.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.ratio.partial_cmp(&b.ratio).unwrap_or(Ordering::Equal))
            .then_with(|| a.name.cmp(&b.name))
    });
    alerts
}

fn stock_ratio(material: &RawMaterial) -> f64 {
    if material.minimum_stock > 0.0 {
        material.current_stock / material.minimum_stock
    } else {
        0.0
    }
}

fn with_unit(quantity: f64, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        format_plain(quantity)
    } else {
        format!("{} {unit}", format_plain(quantity))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn material(name: &str, current: f64, minimum: f64) -> RawMaterial {
        RawMaterial {
            id: name.to_lowercase(),
            name: name.into(),
            unit: "kg".into(),
            current_stock: current,
            minimum_stock: minimum,
            unit_cost: None,
        }
    }

    #[rstest]
    #[case(0.0, 10.0, Some(AlertSeverity::Out))]
    #[case(-2.0, 10.0, Some(AlertSeverity::Out))]
    #[case(10.0, 10.0, Some(AlertSeverity::Critical))]
    #[case(15.0, 10.0, Some(AlertSeverity::Low))]
    #[case(15.1, 10.0, None)]
    #[case(3.0, 0.0, None)]
    fn classification_thresholds(
        #[case] current: f64,
        #[case] minimum: f64,
        #[case] expected: Option<AlertSeverity>,
    ) {
        assert_eq!(classify(&material("X", current, minimum)), expected);
    }

    #[test]
    fn alerts_sort_by_severity_then_ratio() {
        let materials = vec![
            material("Açúcar", 14.0, 10.0),
            material("Ovos", 5.0, 10.0),
            material("Leite", 0.0, 20.0),
            material("Farinha", 2.0, 10.0),
            material("Sal", 50.0, 1.0),
        ];

        let alerts = stock_alerts(&materials);
        let names: Vec<_> = alerts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Leite", "Farinha", "Ovos", "Açúcar"]);
        assert_eq!(alerts[1].current, "2 kg");
        assert_eq!(alerts[1].minimum, "10 kg");
        assert_eq!(alerts[0].severity.label(), "Sem estoque");
    }

    #[test]
    fn no_alerts_for_healthy_stock() {
        assert!(stock_alerts(&[material("Sal", 50.0, 1.0)]).is_empty());
    }
}
