//! Custom Askama template filters.

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Pairs an item count with the right noun: `1 item`, `3 items`.
///
/// Usage in templates: `{{ cart.item_count|item_count }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn item_count(count: impl std::fmt::Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = count.to_string();
    let noun = if count == "1" { "item" } else { "items" };
    Ok(format!("{count} {noun}"))
}
