use dioxus::prelude::*;

use crate::domain::{ProductRow, ProductTableModel};
use crate::ui::palette;

#[component]
pub fn ProductTable(table: ProductTableModel) -> Element {
    let negative = table.negative;
    let is_empty = table.rows.is_empty();

    rsx! {
        section {
            class: "{palette::PANEL} product-table",
            "data-negative": "{negative}",
            h2 { class: "{palette::PANEL_TITLE}", "{table.title}" }
            table {
                class: "data-table",
                thead {
                    class: "{palette::table_header(negative)}",
                    tr {
                        th { "Produto" }
                        th { "Preço de Venda" }
                        th { "Custo" }
                        th { "Lucro" }
                        th { "Margem" }
                    }
                }
                tbody {
                    for row in table.rows {
                        ProductRowView { row, negative }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty-state",
                                colspan: "5",
                                "Nenhum produto encontrado"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductRowView(row: ProductRow, negative: bool) -> Element {
    let profit_class = palette::profit_text(negative, row.loss);
    rsx! {
        tr {
            td {
                p { class: "product-name", "{row.name}" }
                if let Some(category) = row.category.clone() {
                    p { class: "product-category", "{category}" }
                }
            }
            td { "{row.sale_price}" }
            td { "{row.unit_cost}" }
            td { class: "{profit_class}", "{row.profit}" }
            td { class: "{profit_class}", "{row.margin}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::products::product_rows;
    use crate::domain::ProductPerformance;

    fn table(negative: bool, products: &[ProductPerformance]) -> String {
        let table = ProductTableModel {
            title: "Produtos",
            rows: product_rows(products),
            negative,
        };
        dioxus_ssr::render_element(rsx! { ProductTable { table } })
    }

    #[test]
    fn empty_table_shows_placeholder() {
        let html = table(false, &[]);
        assert!(html.contains("Nenhum produto encontrado"));
    }

    #[test]
    fn negative_table_tints_header_and_values() {
        let html = table(
            true,
            &[ProductPerformance {
                id: "p1".into(),
                name: "Suco".into(),
                category: Some("Bebidas".into()),
                sale_price: 9.0,
                unit_cost: 10.35,
                profit: -1.35,
                profit_margin: -15.0,
            }],
        );
        assert!(html.contains("table-header bg-red-50"));
        assert!(html.contains("Bebidas"));
        assert!(html.contains("-15.0%"));
        assert!(!html.contains("text-green-600"));
        assert!(!html.contains("Nenhum produto encontrado"));
    }
}
