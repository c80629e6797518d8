pub mod loading;
pub mod metric_card;
pub mod product_table;
pub mod settings_panel;
pub mod stock_alerts;
pub mod toast;
