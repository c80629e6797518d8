use dioxus::prelude::*;

use crate::domain::StockAlert;
use crate::ui::palette;

#[component]
pub fn StockAlerts(alerts: Vec<StockAlert>) -> Element {
    let count = alerts.len();
    rsx! {
        section {
            class: "{palette::PANEL} stock-alerts",
            div {
                class: "panel-header",
                h2 { class: "{palette::PANEL_TITLE}", "Alertas de Estoque" }
                span { class: "badge bg-red-50 text-red-600", "{count}" }
            }
            if alerts.is_empty() {
                p { class: "empty-state", "Nenhum alerta de estoque" }
            } else {
                ul {
                    class: "alert-list",
                    for alert in alerts {
                        li {
                            key: "{alert.material_id}",
                            class: "alert-item",
                            div {
                                p { class: "product-name", "{alert.name}" }
                                p {
                                    class: "product-category",
                                    "Atual: {alert.current} · Mínimo: {alert.minimum}"
                                }
                            }
                            span {
                                class: "{palette::severity_badge(alert.severity)}",
                                "{alert.severity.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{stock::stock_alerts, RawMaterial};

    #[test]
    fn renders_alerts_with_units_and_badges() {
        let alerts = stock_alerts(&[RawMaterial {
            id: "mp-003".into(),
            name: "Manteiga".into(),
            unit: "kg".into(),
            current_stock: 0.0,
            minimum_stock: 10.0,
            unit_cost: None,
        }]);
        let html = dioxus_ssr::render_element(rsx! { StockAlerts { alerts } });
        assert!(html.contains("Manteiga"));
        assert!(html.contains("Mínimo: 10 kg"));
        assert!(html.contains("Sem estoque"));
    }

    #[test]
    fn empty_alerts_show_placeholder() {
        let html = dioxus_ssr::render_element(rsx! { StockAlerts { alerts: Vec::new() } });
        assert!(html.contains("Nenhum alerta de estoque"));
    }
}
