//! Model trait 定义模块
//!
//! 定义强类型模型的核心接口

use crate::model::field_types::ModelMeta;
use serde::de::DeserializeOwned;

/// 模型特征
///
/// 强类型模型通过此特征提供静态的字段列表与注解，
/// 一般由 `define_model!` 宏生成
pub trait Model: DeserializeOwned {
    /// 获取模型元数据
    fn meta() -> ModelMeta;

    /// 获取模型名
    fn model_name() -> String {
        Self::meta().name
    }
}
