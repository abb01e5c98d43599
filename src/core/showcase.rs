use crate::domain::arithmetic::add;
use crate::domain::geometry::{area, circumference};
use serde_json::Value;

/// 示範程式使用的範例輸入
#[derive(Debug, Clone)]
pub struct Showcase {
    radius: f64,
    augend: Value,
    addend: Value,
}

impl Showcase {
    pub fn new(radius: f64, augend: Value, addend: Value) -> Self {
        Self {
            radius,
            augend,
            addend,
        }
    }

    /// 格式化結果，小數兩位僅用於顯示
    pub fn lines(&self) -> Vec<String> {
        let sum = add(&self.augend, &self.addend)
            .map_or_else(|| "null".to_string(), |s| s.to_string());

        vec![
            format!(
                "The area of a circle with a radius of {} is: {:.2}",
                self.radius,
                area(self.radius)
            ),
            format!(
                "The circumference of a circle with a radius of {} is: {:.2}",
                self.radius,
                circumference(self.radius)
            ),
            format!("{} + {} = {}", self.augend, self.addend, sum),
        ]
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(4.0, Value::from(2), Value::from(2))
    }
}
