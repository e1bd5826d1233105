//! Percentage ledger for material rows

use serde::Serialize;

/// Running total of material percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    pub total: i64,
    /// Total is exactly 100
    pub is_complete: bool,
    /// Total is non-zero and not 100 (under or over)
    pub is_over: bool,
}

/// Style of the displayed total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalStyle {
    Neutral,
    Valid,
    Invalid,
}

impl LedgerState {
    pub fn style(&self) -> TotalStyle {
        if self.is_complete {
            TotalStyle::Valid
        } else if self.is_over {
            TotalStyle::Invalid
        } else {
            TotalStyle::Neutral
        }
    }

    /// Text of the total display
    pub fn display(&self) -> String {
        format!("Общо: {}%", self.total)
    }
}

/// Parse a percentage input
///
/// Reads the leading signed integer the way the page's number input
/// does (`"12.5"` is 12, `"40%"` is 40). Values are not range-checked
/// here; a bad total is rejected by validation. Magnitudes beyond `i32`
/// saturate. Returns `None` when no digits lead the text.
pub fn parse_percentage(input: &str) -> Option<i32> {
    let s = input.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].bytes().fold(0i64, |acc, d| {
        (acc * 10 + i64::from(d - b'0')).min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -value } else { value };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Sum the percentages of `rows`, counting non-numeric values as zero
pub fn recompute<'a, I>(rows: I) -> LedgerState
where
    I: IntoIterator<Item = &'a str>,
{
    let total: i64 = rows
        .into_iter()
        .map(|text| parse_percentage(text).map_or(0, i64::from))
        .sum();
    LedgerState {
        total,
        is_complete: total == 100,
        is_over: total != 0 && total != 100,
    }
}
