use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Whole number with thousands grouping.
    Integer,
    /// VND currency.
    Money,
    /// Ratio rendered as a percentage.
    Percent,
}

fn format_value(val: f64, fmt: StatFormat) -> String {
    use crate::shared::format::{format_percent, format_thousands, format_vnd};
    match fmt {
        StatFormat::Integer => format_thousands(val.round() as i64),
        StatFormat::Money => format_vnd(val),
        StatFormat::Percent => format_percent(val),
    }
}

/// Summary card shown above list tables and on the revenue dashboard.
/// `value = None` renders a dash (loading or fetch failure).
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    #[prop(into)] value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_follow_their_kind() {
        assert_eq!(format_value(1500.0, StatFormat::Integer), "1.500");
        assert_eq!(format_value(2_500_000.0, StatFormat::Money), "2.500.000 ₫");
        assert_eq!(format_value(0.42, StatFormat::Percent), "42,0%");
    }
}
