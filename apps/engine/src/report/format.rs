//! Typed display formatters, one per field kind.
//!
//! Prices render with thousands separators and no decimals; payments render
//! with two. Keeping one function per kind guarantees every section rounds
//! and groups the same way. Negative amounts render with the sign after the
//! dollar sign ("$-16,094").

/// Formats a price-kind amount: `$78,906`, `$-16,094`.
pub fn currency_0dp(value: f64) -> String {
    format!("${}", group_thousands(value.round() as i64))
}

/// Formats a payment-kind amount: `$1,199.10`, `$-0.50`.
pub fn currency_2dp(value: f64) -> String {
    let total_cents = (value * 100.0).round() as i64;
    let sign = if total_cents < 0 { "-" } else { "" };
    let dollars = (total_cents / 100).unsigned_abs();
    let cents = (total_cents % 100).unsigned_abs();
    format!("${sign}{}.{cents:02}", group_digits(dollars))
}

/// Signed thousands grouping: `-16094` -> `-16,094`.
fn group_thousands(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(value.unsigned_abs()))
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
