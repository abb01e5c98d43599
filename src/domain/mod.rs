// Domain layer: 純計算、回應模型與請求介面

pub mod arithmetic;
pub mod geometry;
pub mod model;
pub mod ports;
