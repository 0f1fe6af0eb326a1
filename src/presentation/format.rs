use crate::core::rounding::round_to;

/// en-US 格式：千分位逗號、固定小數位，例如 `1,234.50`
pub fn format_number(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as u32);
    let fixed = format!("{:.*}", decimals, rounded.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

pub fn format_currency(value: f64) -> String {
    format!("US$ {}", format_number(value, 2))
}
