//! 类型注解注册表模块
//!
//! 初始化阶段通过 `ModelRegistryBuilder` 定义模型和字段注解，
//! `build()` 之后得到只读的 `ModelRegistry`，供转换器并发读取

use crate::converter::ModelConverter;
use crate::config::ConversionConfig;
use crate::error::{ModelCastError, ModelCastResult};
use crate::model::field_types::{FieldType, ModelMeta};
use crate::model::traits::Model;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use rat_logger::{debug, info};

/// 模型定义文件格式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    /// 模型列表
    #[serde(default)]
    pub models: Vec<ModelMeta>,
}

/// 注册表构建器
///
/// 仅在初始化阶段使用，所有写操作都在这里完成
#[derive(Debug, Clone, Default)]
pub struct ModelRegistryBuilder {
    models: IndexMap<String, ModelMeta>,
}

impl ModelRegistryBuilder {
    /// 创建空的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 定义模型，同名模型会被整体替换
    pub fn define(&mut self, meta: ModelMeta) -> &mut Self {
        let model_name = meta.name.clone();
        if self.models.contains_key(&model_name) {
            debug!("模型已存在，将更新元数据: {}", model_name);
        }

        debug!("定义模型: {}, 字段数量={}", model_name, meta.fields.len());
        self.models.insert(model_name, meta);
        self
    }

    /// 定义强类型模型
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.define(T::meta())
    }

    /// 为已定义模型的字段添加注解
    ///
    /// 重复注解同一字段时后写覆盖前写；模型未定义时返回 ModelNotFound
    pub fn annotate(&mut self, model: &str, field: &str, field_type: FieldType) -> ModelCastResult<&mut Self> {
        let meta = self
            .models
            .get_mut(model)
            .ok_or_else(|| crate::cast_error!(model_not_found, model))?;

        debug!("添加字段注解: {}.{} -> {:?}", model, field, field_type);
        meta.annotate(field, field_type);
        Ok(self)
    }

    /// 是否已定义某模型
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// 获取已定义模型
    pub fn get(&self, model: &str) -> Option<&ModelMeta> {
        self.models.get(model)
    }

    /// 从模型定义文件加载，返回加载的模型数量
    ///
    /// 扩展名为 toml 时按TOML解析，否则按JSON解析
    pub fn load_schema_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> ModelCastResult<usize> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ModelCastError::IoError)?;

        let schema: SchemaFile = if crate::config::core::is_toml(path.as_ref()) {
            toml::from_str(&content)
                .map_err(|e| crate::cast_error!(config, format!("解析TOML模型定义失败: {}", e)))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| crate::cast_error!(config, format!("解析JSON模型定义失败: {}", e)))?
        };

        let count = schema.models.len();
        for mut meta in schema.models {
            // 文件中可以省略字段定义里的 name，以键名为准
            for (key, definition) in meta.fields.iter_mut() {
                if definition.name.is_empty() {
                    definition.name = key.clone();
                }
            }
            self.define(meta);
        }

        info!("从文件加载模型定义: {:?}, 模型数量={}", path.as_ref(), count);
        Ok(count)
    }

    /// 冻结为只读注册表
    ///
    /// 所有注解引用的模型都必须已定义，否则返回 UnknownModelReference
    pub fn build(self) -> ModelCastResult<ModelRegistry> {
        for meta in self.models.values() {
            for (field, field_type) in meta.nested_annotations() {
                let Some(target) = field_type.target_model() else {
                    continue;
                };
                if !self.models.contains_key(target) {
                    return Err(ModelCastError::UnknownModelReference {
                        model: meta.name.clone(),
                        field: field.to_string(),
                        target: target.to_string(),
                        message: crate::i18n::tf(
                            "error.unknown_reference",
                            &[("model", meta.name.as_str()), ("field", field), ("target", target)],
                        ),
                    });
                }
            }
        }

        info!("模型注册表已冻结: 模型数量={}", self.models.len());
        Ok(ModelRegistry {
            models: Arc::new(self.models.into_iter().collect()),
        })
    }
}

/// 只读模型注册表
///
/// 没有任何写接口，克隆只增加引用计数
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Arc<HashMap<String, ModelMeta>>,
}

impl ModelRegistry {
    /// 创建注册表构建器
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    /// 获取模型元数据
    pub fn get(&self, model: &str) -> Option<&ModelMeta> {
        self.models.get(model)
    }

    /// 获取模型元数据，未定义时返回 ModelNotFound
    pub fn meta(&self, model: &str) -> ModelCastResult<&ModelMeta> {
        self.get(model).ok_or_else(|| crate::cast_error!(model_not_found, model))
    }

    /// 查询字段注解
    pub fn field_type(&self, model: &str, field: &str) -> Option<&FieldType> {
        self.get(model).map(|meta| meta.field_type(field))
    }

    /// 是否已定义某模型
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// 所有模型名
    pub fn model_names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// 模型数量
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// 使用默认配置创建转换器
    pub fn converter(&self) -> ModelConverter<'_> {
        ModelConverter::new(self)
    }

    /// 使用指定配置创建转换器
    pub fn converter_with(&self, config: ConversionConfig) -> ModelConverter<'_> {
        ModelConverter::with_config(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convenience::{array_of, field, object_of};

    fn employee() -> ModelMeta {
        ModelMeta::new("Employee")
            .field(field("name"))
            .field(field("manager"))
    }

    #[test]
    fn test_annotate_requires_defined_model() {
        let mut builder = ModelRegistryBuilder::new();
        let err = builder.annotate("Employee", "manager", object_of("Employee")).unwrap_err();
        assert!(matches!(err, ModelCastError::ModelNotFound { ref model, .. } if model == "Employee"));
    }

    #[test]
    fn test_build_rejects_dangling_reference() {
        let mut builder = ModelRegistryBuilder::new();
        builder.define(ModelMeta::new("Team").field(field("members")));
        builder.annotate("Team", "members", array_of("Employee")).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            ModelCastError::UnknownModelReference { ref model, ref field, ref target, .. }
                if model == "Team" && field == "members" && target == "Employee"
        ));
    }

    #[test]
    fn test_build_and_lookup() {
        let mut builder = ModelRegistryBuilder::new();
        builder.define(employee());
        builder.annotate("Employee", "manager", object_of("Employee")).unwrap();

        let registry = builder.build().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Employee"));
        assert_eq!(
            registry.field_type("Employee", "manager"),
            Some(&FieldType::Object("Employee".to_string()))
        );
        assert_eq!(registry.field_type("Employee", "name"), Some(&FieldType::Generic));
        assert!(registry.meta("Unknown").is_err());
    }

    #[test]
    fn test_redefine_replaces_model() {
        let mut builder = ModelRegistryBuilder::new();
        builder.define(employee());
        builder.define(ModelMeta::new("Employee").field(field("id")));

        let registry = builder.build().unwrap();
        let names: Vec<&str> = registry.meta("Employee").unwrap().field_names().collect();
        assert_eq!(names, vec!["id"]);
    }

    #[test]
    fn test_load_toml_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.toml");
        std::fs::write(
            &path,
            r#"
[[models]]
name = "Employee"

[models.fields.name]

[models.fields.manager]

[models.annotations]
manager = { object = "Employee" }

[[models]]
name = "Team"

[models.fields.members]

[models.annotations]
members = { array = "Employee" }
"#,
        )
        .unwrap();

        let mut builder = ModelRegistryBuilder::new();
        assert_eq!(builder.load_schema_file(&path).unwrap(), 2);

        let registry = builder.build().unwrap();
        let team = registry.meta("Team").unwrap();
        assert_eq!(team.fields.get("members").map(|f| f.name.as_str()), Some("members"));
        assert_eq!(team.field_type("members"), &FieldType::Array("Employee".to_string()));
    }
}
