//! # 全局转换便捷函数
//!
//! 绑定冻结后的全局注册表与全局转换配置，注册表未冻结时返回 RegistryNotFrozen

use crate::error::ModelCastResult;
use crate::model::instance::ModelInstance;
use crate::model::traits::Model;
use crate::types::DataValue;

use super::ModelConverter;

/// 获取绑定全局注册表的转换器
pub fn global_converter() -> ModelCastResult<ModelConverter<'static>> {
    let registry = crate::manager::global_registry()?;
    Ok(ModelConverter::with_config(registry, crate::global_conversion_config()))
}

/// 便捷函数：解析文本并转换为模型实例
pub fn from_text(text: &str, model: &str) -> ModelCastResult<ModelInstance> {
    global_converter()?.from_text(text, model)
}

/// 便捷函数：转换单个对象
pub fn convert_object(value: &DataValue, model: &str) -> ModelCastResult<ModelInstance> {
    global_converter()?.convert_object(value, model)
}

/// 便捷函数：转换对象数组
pub fn convert_array(value: &DataValue, model: &str) -> ModelCastResult<Vec<ModelInstance>> {
    global_converter()?.convert_array(value, model)
}

/// 便捷函数：转换为强类型模型
pub fn convert_as<T: Model>(value: &DataValue) -> ModelCastResult<T> {
    global_converter()?.convert_as(value)
}

/// 便捷函数：把通用数组转换为强类型模型列表
pub fn convert_array_as<T: Model>(value: &DataValue) -> ModelCastResult<Vec<T>> {
    global_converter()?.convert_array_as(value)
}

/// 便捷函数：解析文本并转换为强类型模型
pub fn from_text_as<T: Model>(text: &str) -> ModelCastResult<T> {
    global_converter()?.from_text_as(text)
}
