//! Price and rating formatting.
//!
//! Prices are Colombian pesos shown the way `es-CO` formats them: `$`, a
//! non-breaking space, `.` as thousands separator and no decimals.

use serde::Serialize;

pub const CURRENCY_CODE: &str = "COP";
const CURRENCY_PREFIX: &str = "$\u{a0}";
const THOUSANDS_SEPARATOR: char = '.';
const MAX_STARS: u8 = 5;

/// Never panics. Non-finite input formats as zero.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{:.0}", amount.abs());
    let sign = if amount < 0.0 { "-" } else { "" };

    format!("{}{}{}", sign, CURRENCY_PREFIX, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Star row of the item modal. Any fractional part counts as a half star.
pub fn star_breakdown(rating: f64) -> StarBreakdown {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, f64::from(MAX_STARS))
    } else {
        0.0
    };

    let full = rating.floor() as u8;
    let half = u8::from(rating.fract() > 0.0);

    StarBreakdown {
        full,
        half,
        empty: MAX_STARS - full - half,
    }
}
