//! 模型注册相关方法

use crate::error::ModelCastResult;
use crate::model::field_types::{FieldType, ModelMeta};
use crate::model::traits::Model;
use rat_logger::debug;

use super::RegistryManager;

impl RegistryManager {
    /// 注册模型元数据
    pub fn register_model(&self, model_meta: ModelMeta) -> ModelCastResult<()> {
        let model_name = model_meta.name.clone();
        self.with_pending(|builder| {
            builder.define(model_meta);
            Ok(())
        })?;

        debug!("注册模型元数据: {}", model_name);
        Ok(())
    }

    /// 注册强类型模型
    pub fn register<T: Model>(&self) -> ModelCastResult<()> {
        self.register_model(T::meta())
    }

    /// 为已注册模型的字段添加注解
    pub fn annotate(&self, model: &str, field: &str, field_type: FieldType) -> ModelCastResult<()> {
        self.with_pending(|builder| builder.annotate(model, field, field_type).map(|_| ()))
    }

    /// 从模型定义文件加载
    pub fn load_schema_file<P: AsRef<std::path::Path>>(&self, path: P) -> ModelCastResult<usize> {
        self.with_pending(|builder| builder.load_schema_file(path))
    }

    /// 获取模型元数据，冻结前读取待写入表
    pub fn get_model(&self, model: &str) -> ModelCastResult<Option<ModelMeta>> {
        if let Some(registry) = self.frozen.get() {
            return Ok(registry.get(model).cloned());
        }

        let guard = self.read_pending()?;
        Ok((*guard).as_ref().and_then(|builder| builder.get(model).cloned()))
    }

    /// 检查模型是否已注册
    pub fn has_model(&self, model: &str) -> bool {
        matches!(self.get_model(model), Ok(Some(_)))
    }
}
