//! Static style lookups for the dashboard.

use crate::domain::{AlertSeverity, ColorToken};

/// Classes for one semantic color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: &'static str,
    pub text: &'static str,
    pub light_background: &'static str,
}

impl ColorToken {
    pub fn scheme(self) -> ColorScheme {
        match self {
            ColorToken::Blue => ColorScheme {
                background: "bg-blue-500",
                text: "text-blue-600",
                light_background: "bg-blue-50",
            },
            ColorToken::Green => ColorScheme {
                background: "bg-green-500",
                text: "text-green-600",
                light_background: "bg-green-50",
            },
            ColorToken::Red => ColorScheme {
                background: "bg-red-500",
                text: "text-red-600",
                light_background: "bg-red-50",
            },
            ColorToken::Yellow => ColorScheme {
                background: "bg-yellow-500",
                text: "text-yellow-600",
                light_background: "bg-yellow-50",
            },
            ColorToken::Purple => ColorScheme {
                background: "bg-purple-500",
                text: "text-purple-600",
                light_background: "bg-purple-50",
            },
            ColorToken::Orange => ColorScheme {
                background: "bg-orange-500",
                text: "text-orange-600",
                light_background: "bg-orange-50",
            },
        }
    }
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";

pub fn table_header(negative: bool) -> &'static str {
    if negative {
        "table-header bg-red-50 text-red-600"
    } else {
        "table-header"
    }
}

/// Text class for profit and margin cells.
pub fn profit_text(negative_table: bool, loss: bool) -> &'static str {
    if negative_table || loss {
        "text-red-600"
    } else {
        "text-green-600"
    }
}

pub fn severity_badge(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Out => "badge bg-red-500 text-white",
        AlertSeverity::Critical => "badge bg-red-50 text-red-600",
        AlertSeverity::Low => "badge bg-yellow-50 text-yellow-600",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_token_resolves_to_a_distinct_triple() {
        let schemes: Vec<_> = ColorToken::ALL.iter().map(|token| token.scheme()).collect();
        for scheme in &schemes {
            assert!(!scheme.background.is_empty());
            assert!(!scheme.text.is_empty());
            assert!(!scheme.light_background.is_empty());
        }
        let distinct: HashSet<_> = schemes
            .iter()
            .map(|s| (s.background, s.text, s.light_background))
            .collect();
        assert_eq!(distinct.len(), ColorToken::ALL.len());
    }

    #[test]
    fn scheme_classes_carry_the_token_name() {
        for token in ColorToken::ALL {
            let scheme = token.scheme();
            assert!(scheme.background.contains(token.name()));
            assert!(scheme.text.contains(token.name()));
            assert!(scheme.light_background.contains(token.name()));
        }
    }

    #[test]
    fn negative_tables_always_use_red_profit_text() {
        assert_eq!(profit_text(true, false), "text-red-600");
        assert_eq!(profit_text(false, true), "text-red-600");
        assert_eq!(profit_text(false, false), "text-green-600");
    }
}
