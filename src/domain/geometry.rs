//! 圓形幾何計算
//!
//! 不驗證輸入：負半徑得到負周長，`NaN` 原樣傳遞

use std::f64::consts::PI;

/// π·r²
pub fn area(radius: f64) -> f64 {
    PI * radius * radius
}

/// 2·π·r
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}
