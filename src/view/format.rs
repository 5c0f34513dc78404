//! Display formatting for KPI values
//!
//! Large counts are shortened with `K`/`M` suffixes; missing values render
//! as an em-dash.

/// Placeholder shown for missing values
pub const PLACEHOLDER: &str = "—";

/// Format a count with a magnitude suffix
///
/// - absent or NaN → `"—"`
/// - `>= 1,000,000` → one decimal + `M`
/// - `>= 1,000` → one decimal + `K`
/// - otherwise the plain number
pub fn format_metric(n: Option<f64>) -> String {
    let n = match n {
        Some(n) if !n.is_nan() => n,
        _ => return PLACEHOLDER.to_string(),
    };

    if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 1))
    } else {
        n.to_string()
    }
}

/// Like [`format_metric`], but zero also counts as missing
pub fn format_count_or_dash(n: Option<f64>) -> String {
    format_metric(present(n))
}

/// Format a fraction as a rounded whole percentage (`0.75` → `"75%"`)
///
/// Zero is shown as missing, matching how unmeasured rates are stored.
pub fn format_percent(fraction: Option<f64>) -> String {
    match present(fraction) {
        Some(f) => format!("{}%", to_fixed(f * 100.0, 0)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a dollar amount with a magnitude suffix (`64_800_000` → `"$64.8M"`)
pub fn format_currency(n: Option<f64>) -> String {
    match present(n) {
        Some(n) => format!("${}", format_metric(Some(n))),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render `x` with `digits` decimals, rounding the exact binary value
///
/// `1.45` is stored as `1.4499…` and renders `"1.4"`. Exact ties such as
/// `1.25` round away from zero (`"1.3"`), where `{:.1}` alone would pick
/// the even digit.
fn to_fixed(x: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = x * scale;
    let exact = x.mul_add(scale, -scaled) == 0.0;

    if exact && scaled.fract().abs() == 0.5 {
        let rounded = (scaled.trunc() + scaled.signum()) / scale;
        format!("{:.*}", digits, rounded)
    } else {
        format!("{:.*}", digits, x)
    }
}

fn present(n: Option<f64>) -> Option<f64> {
    n.filter(|v| *v != 0.0 && !v.is_nan())
}
