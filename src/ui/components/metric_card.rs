use dioxus::prelude::*;

use crate::domain::{ChangeIndicator, Icon, MetricCardModel, Trend};

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Package => "📦",
        Icon::TrendingUp => "📈",
        Icon::DollarSign => "💲",
        Icon::TrendingDown => "📉",
        Icon::Percent => "％",
        Icon::AlertTriangle => "⚠️",
    }
}

fn trend_view(indicator: &ChangeIndicator) -> (&'static str, &'static str) {
    match indicator.trend {
        Trend::Up => ("▲", "metric-change text-green-600"),
        Trend::Down => ("▼", "metric-change text-red-600"),
    }
}

#[component]
pub fn MetricCard(card: MetricCardModel) -> Element {
    let scheme = card.color.scheme();
    let glyph = icon_glyph(card.icon);
    let change = card.change.as_ref().map(|indicator| {
        let (arrow, class) = trend_view(indicator);
        (arrow, class, indicator.label.clone())
    });

    rsx! {
        div {
            class: "metric-card {scheme.light_background}",
            "data-color": "{card.color}",
            div {
                class: "metric-card-body",
                div {
                    p { class: "metric-title", "{card.title}" }
                    p { class: "metric-value {scheme.text}", "{card.value}" }
                    if let Some((arrow, class, label)) = change {
                        p {
                            class: "{class}",
                            span { class: "trend-arrow", "{arrow}" }
                            span { "{label}" }
                        }
                    }
                }
                div {
                    class: "metric-icon {scheme.background}",
                    "{glyph}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorToken, FormatKind, MetricValue};

    fn render(card: MetricCardModel) -> String {
        dioxus_ssr::render_element(rsx! { MetricCard { card } })
    }

    #[test]
    fn negative_change_renders_down_arrow() {
        let html = render(MetricCardModel::new(
            "Alertas de Estoque",
            &MetricValue::Number(4.0),
            Some(-5.0),
            Icon::AlertTriangle,
            ColorToken::Red,
            FormatKind::Number,
        ));
        assert!(html.contains("Alertas de Estoque"));
        assert!(html.contains("▼"));
        assert!(!html.contains("▲"));
        assert!(html.contains("-5%"));
        assert!(!html.contains("+5%"));
        assert!(html.contains("bg-red-50"));
    }

    #[test]
    fn positive_change_renders_up_arrow_with_plus() {
        let html = render(MetricCardModel::new(
            "Produtos Lucrativos",
            &MetricValue::Number(35.0),
            Some(8.0),
            Icon::TrendingUp,
            ColorToken::Green,
            FormatKind::Number,
        ));
        assert!(html.contains("▲"));
        assert!(html.contains("+8%"));
        assert!(html.contains("text-green-600"));
    }

    #[test]
    fn card_without_change_has_no_arrow() {
        let html = render(MetricCardModel::new(
            "Receita Total",
            &MetricValue::Number(1234.5),
            None,
            Icon::DollarSign,
            ColorToken::Purple,
            FormatKind::Currency,
        ));
        assert!(html.contains("1.234,50"));
        assert!(!html.contains("▲"));
        assert!(!html.contains("▼"));
    }
}
