//! 全局模型注册表管理模块
//!
//! 初始化阶段向全局待写入表注册模型与注解，`freeze_registry()` 之后注册表只读，
//! 转换只能在冻结之后进行

mod manager;
mod model_ops;

// 重新导出主要类型
pub use manager::RegistryManager;

use crate::error::ModelCastResult;
use crate::model::field_types::{FieldType, ModelMeta};
use crate::model::traits::Model;
use crate::registry::ModelRegistry;
use once_cell::sync::Lazy;

/// 全局注册表管理器实例
pub static GLOBAL_REGISTRY_MANAGER: Lazy<RegistryManager> =
    Lazy::new(RegistryManager::new);

/// 获取全局注册表管理器
pub(crate) fn get_global_registry_manager() -> &'static RegistryManager {
    &GLOBAL_REGISTRY_MANAGER
}

/// 便捷函数 - 注册模型元数据
pub fn register_model(model_meta: ModelMeta) -> ModelCastResult<()> {
    get_global_registry_manager().register_model(model_meta)
}

/// 便捷函数 - 注册强类型模型
pub fn register<T: Model>() -> ModelCastResult<()> {
    get_global_registry_manager().register::<T>()
}

/// 便捷函数 - 添加字段注解
pub fn annotate(model: &str, field: &str, field_type: FieldType) -> ModelCastResult<()> {
    get_global_registry_manager().annotate(model, field, field_type)
}

/// 便捷函数 - 从模型定义文件加载
pub fn load_schema_file<P: AsRef<std::path::Path>>(path: P) -> ModelCastResult<usize> {
    get_global_registry_manager().load_schema_file(path)
}

/// 便捷函数 - 冻结全局注册表
pub fn freeze_registry() -> ModelCastResult<&'static ModelRegistry> {
    get_global_registry_manager().freeze()
}

/// 便捷函数 - 全局注册表是否已冻结
pub fn is_registry_frozen() -> bool {
    get_global_registry_manager().is_frozen()
}

/// 便捷函数 - 获取冻结后的全局注册表
pub fn global_registry() -> ModelCastResult<&'static ModelRegistry> {
    get_global_registry_manager().registry()
}

/// 便捷函数 - 获取模型元数据
pub fn get_model(model: &str) -> ModelCastResult<Option<ModelMeta>> {
    get_global_registry_manager().get_model(model)
}

/// 便捷函数 - 检查模型是否已注册
pub fn has_model(model: &str) -> bool {
    get_global_registry_manager().has_model(model)
}
