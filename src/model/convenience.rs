//! 模型便捷函数模块
//!
//! 提供创建字段定义和字段注解的便捷函数

use crate::model::field_types::{FieldDefinition, FieldType};
use crate::types::DataValue;

/// 便捷函数：创建通用字段
pub fn field(name: &str) -> FieldDefinition {
    FieldDefinition::new(name)
}

/// 便捷函数：创建带默认值的字段
pub fn field_with_default(name: &str, default: impl Into<DataValue>) -> FieldDefinition {
    FieldDefinition::new(name).default_value(default.into())
}

/// 便捷函数：嵌套对象注解
pub fn object_of(model: &str) -> FieldType {
    FieldType::Object(model.to_string())
}

/// 便捷函数：嵌套对象数组注解
pub fn array_of(model: &str) -> FieldType {
    FieldType::Array(model.to_string())
}
