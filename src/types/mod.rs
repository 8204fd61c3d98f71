//! 通用数据类型定义
//!
//! 定义转换器输入侧的无类型数据树

pub mod data_value;

pub use data_value::{DataValue, json_value_to_data_value};
