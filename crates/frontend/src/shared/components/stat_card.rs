use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_money};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Money,
    Count,
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Money => format_money(value),
        ValueFormat::Count => format_count(value.round() as i64),
    }
}

/// Headline figure on the dashboard. `None` renders a dash while loading.
#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Gradient modifier, e.g. "sales" -> `stat-card--sales`
    accent: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "-".to_string(),
    };

    view! {
        <div class=format!("stat-card stat-card--{}", accent)>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(120000.0, ValueFormat::Money), "₹1,20,000");
        assert_eq!(format_value(350.0, ValueFormat::Count), "350");
        assert_eq!(format_value(1200.4, ValueFormat::Count), "1,200");
    }
}
