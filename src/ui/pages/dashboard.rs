use dioxus::prelude::*;

use crate::{
    domain::{DashboardView, ProviderState, ReadyView},
    ui::{
        components::{
            loading::LoadingSpinner, metric_card::MetricCard, product_table::ProductTable,
            stock_alerts::StockAlerts,
        },
        palette,
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let provider = use_context::<Signal<ProviderState>>();
    let (view, error) = provider.with(|st| (st.dashboard(), st.error.clone()));

    match view {
        Ok(view) => rsx! {
            if let Some(message) = error {
                div { class: "banner bg-red-50 text-red-600", "Falha ao atualizar: {message}" }
            }
            DashboardContent { view }
        },
        Err(err) => {
            let detail = error.unwrap_or_else(|| err.to_string());
            rsx! {
                div {
                    class: "{palette::PANEL} error-panel",
                    h2 { class: "text-red-600", "Não foi possível carregar o painel" }
                    p { "{detail}" }
                }
            }
        }
    }
}

#[component]
pub fn DashboardContent(view: DashboardView) -> Element {
    match view {
        DashboardView::Loading => rsx! { LoadingSpinner {} },
        DashboardView::Ready(ready) => rsx! { ReadyDashboard { view: ready } },
    }
}

#[component]
fn ReadyDashboard(view: ReadyView) -> Element {
    let ReadyView {
        cards,
        top_products,
        bottom_products,
        stock_alerts,
    } = view;

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "card-grid",
                for card in cards {
                    MetricCard { card }
                }
            }
            div {
                class: "table-grid",
                ProductTable { table: top_products }
                ProductTable { table: bottom_products }
            }
            StockAlerts { alerts: stock_alerts }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::{build_dashboard, DashboardMetrics, ErpSnapshot, RawMaterial};

    fn render(view: DashboardView) -> String {
        dioxus_ssr::render_element(rsx! { DashboardContent { view } })
    }

    #[component]
    fn PageWithState(state: ProviderState) -> Element {
        let provider = use_signal(|| state.clone());
        use_context_provider(|| provider);
        rsx! { DashboardPage {} }
    }

    fn render_page(state: ProviderState) -> String {
        dioxus_ssr::render_element(rsx! { PageWithState { state } })
    }

    fn metrics() -> DashboardMetrics {
        DashboardMetrics {
            total_products: 10,
            profitable_products: 7,
            total_inventory_value: 1234.5,
            deficitary_products: 3,
            average_profit_margin: 42.567,
            critical_stock_items: 1,
            ..Default::default()
        }
    }

    fn materials() -> Vec<RawMaterial> {
        vec![RawMaterial {
            id: "mp-1".into(),
            name: "Ovos".into(),
            unit: "dz".into(),
            current_stock: 2.0,
            minimum_stock: 5.0,
            unit_cost: None,
        }]
    }

    #[test]
    fn loading_state_renders_only_the_spinner() {
        let html = render(build_dashboard(None, None, true).unwrap());
        assert!(html.contains("spinner"));
        assert!(!html.contains("metric-card"));
        assert!(!html.contains("product-table"));
        assert!(!html.contains("stock-alerts"));
    }

    #[test]
    fn ready_state_renders_cards_then_tables_then_alerts() {
        let metrics = metrics();
        let materials = materials();
        let view = build_dashboard(Some(&metrics), Some(materials.as_slice()), false).unwrap();
        let html = render(view);

        assert!(!html.contains("spinner"));
        assert_eq!(html.matches("class=\"metric-card ").count(), 6);
        assert_eq!(html.matches("product-table").count(), 2);
        assert_eq!(html.matches("stock-alerts").count(), 1);

        let last_card = html.rfind("class=\"metric-card ").unwrap();
        let top_table = html.find("data-negative=\"false\"").unwrap();
        let bottom_table = html.find("data-negative=\"true\"").unwrap();
        let alerts = html.find("stock-alerts").unwrap();
        assert!(last_card < top_table);
        assert!(top_table < bottom_table);
        assert!(bottom_table < alerts);

        let titles = [
            "Total de Produtos",
            "Produtos Lucrativos",
            "Receita Total",
            "Produtos Deficitários",
            "Margem Média",
            "Alertas de Estoque",
        ];
        let positions: Vec<_> = titles.iter().map(|t| html.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("42.6%"));
        assert!(html.contains("Ovos"));
    }

    #[test]
    fn first_fetch_failure_renders_the_error_panel() {
        let mut state = ProviderState::default();
        state.apply_error("conexão recusada");
        let html = render_page(state);

        assert!(html.contains("error-panel"));
        assert!(html.contains("Não foi possível carregar o painel"));
        assert!(html.contains("conexão recusada"));
        assert!(!html.contains("metric-card"));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn failed_refresh_shows_banner_over_previous_data() {
        let mut state = ProviderState::default();
        state.apply_snapshot(
            ErpSnapshot {
                dashboard_metrics: metrics(),
                raw_materials: materials(),
            },
            datetime!(2026-10-18 09:30 UTC),
        );
        state.begin_refresh();
        state.apply_error("timeout");
        let html = render_page(state);

        assert!(html.contains("Falha ao atualizar: timeout"));
        assert!(!html.contains("error-panel"));
        assert_eq!(html.matches("class=\"metric-card ").count(), 6);
        assert!(html.find("Falha ao atualizar").unwrap() < html.find("metric-card").unwrap());
    }

    #[test]
    fn healthy_state_has_no_error_markup() {
        let mut state = ProviderState::default();
        state.apply_snapshot(
            ErpSnapshot {
                dashboard_metrics: metrics(),
                raw_materials: materials(),
            },
            datetime!(2026-10-18 09:30 UTC),
        );
        let html = render_page(state);

        assert!(!html.contains("Falha ao atualizar"));
        assert!(!html.contains("error-panel"));
        assert!(html.contains("Receita Total"));
    }
}
