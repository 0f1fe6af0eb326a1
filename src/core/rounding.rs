//! 數值輔助函式。
//!
//! 四捨五入規則：以 `f64` 實際儲存的十進位值做 half-away-from-zero，
//! 不先乘上 `10^decimals`。因此 `0.125 -> 0.13`（可精確表示的中點），
//! 而 `1.005`、`16.465`（實際儲存值略小於中點）分別得到 `1.0`、`16.46`。

use rust_decimal::{Decimal, RoundingStrategy};

/// 非有限值視為 0
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 非有限值或負值視為 0
pub fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let Some(exact) = Decimal::from_f64_retain(value) else {
        // 超出 Decimal 範圍的極大值本身已沒有小數位；極小值視為 0
        return if value.abs() >= 1.0 { value } else { 0.0 };
    };

    let rounded = exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // 整數尾數除以 10 的冪次只有一次捨入，結果是最接近的 f64
    let result = rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32);

    if result == 0.0 {
        // 避免 -0.0
        0.0
    } else {
        result
    }
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// `part / whole * 100`；`whole` 不大於 0 時回傳 `None`
pub fn percentage_of(part: f64, whole: f64) -> Option<f64> {
    if whole > 0.0 {
        Some(part / whole * 100.0)
    } else {
        None
    }
}
