use super::{
    format::{format_currency, format_percentage},
    metrics::ProductPerformance,
};

/// Preformatted row for the product tables.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub sale_price: String,
    pub unit_cost: String,
    pub profit: String,
    pub margin: String,
    pub loss: bool,
}

pub fn product_rows(products: &[ProductPerformance]) -> Vec<ProductRow> {
    products.iter().map(product_row).collect()
}

fn product_row(product: &ProductPerformance) -> ProductRow {
    ProductRow {
        id: product.id.clone(),
        name: product.name.clone(),
        category: product
            .category
            .as_ref()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        sale_price: format_currency(product.sale_price),
        unit_cost: format_currency(product.unit_cost),
        profit: format_currency(product.profit),
        margin: format_percentage(product.profit_margin),
        loss: product.profit < 0.0,
    }
}
