//! 递归转换器模块
//!
//! 根据注册表中的字段注解，把通用数据树逐字段复制为模型实例：
//! 通用字段原样赋值，注解字段递归转换为嵌套对象或嵌套对象数组

pub mod global;

use crate::config::{AbsencePolicy, ConversionConfig, ShapePolicy};
use crate::debug_log;
use crate::error::{ModelCastError, ModelCastResult};
use crate::model::field_types::{FieldType, ModelMeta};
use crate::model::instance::{FieldValue, ModelInstance};
use crate::model::traits::Model;
use crate::registry::ModelRegistry;
use crate::types::DataValue;
use rat_logger::debug;

/// 顶层调用时错误信息里使用的字段名
const ROOT_FIELD: &str = "$";

/// 模型转换器
///
/// 只持有注册表的只读引用，本身无状态，可在多个线程中同时使用
#[derive(Debug, Clone, Copy)]
pub struct ModelConverter<'a> {
    registry: &'a ModelRegistry,
    config: ConversionConfig,
}

impl<'a> ModelConverter<'a> {
    /// 使用默认（兼容）配置创建转换器
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self::with_config(registry, ConversionConfig::default())
    }

    /// 使用指定配置创建转换器
    pub fn with_config(registry: &'a ModelRegistry, config: ConversionConfig) -> Self {
        Self { registry, config }
    }

    /// 当前转换配置
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// 解析文本并转换为模型实例
    ///
    /// 文本不是合法JSON时返回 ParseError
    pub fn from_text(&self, text: &str, model: &str) -> ModelCastResult<ModelInstance> {
        let value = DataValue::from_json_str(text)?;
        self.convert_object(&value, model)
    }

    /// 把通用数组的每个元素转换为模型实例，顺序与长度保持不变
    pub fn convert_array(&self, value: &DataValue, model: &str) -> ModelCastResult<Vec<ModelInstance>> {
        let meta = self.registry.meta(model)?;
        match value {
            DataValue::Array(items) => self.copy_array(items, meta, model, ROOT_FIELD),
            other => Err(shape_mismatch(model, ROOT_FIELD, "array", other.type_name())),
        }
    }

    /// 把通用值转换为模型实例
    pub fn convert_object(&self, value: &DataValue, model: &str) -> ModelCastResult<ModelInstance> {
        let meta = self.registry.meta(model)?;
        debug!("开始转换模型: {}, 输入类型={}", model, value.type_name());
        self.copy_object(value, meta, model, ROOT_FIELD)
    }

    /// 转换为强类型模型
    pub fn convert_as<T: Model>(&self, value: &DataValue) -> ModelCastResult<T> {
        let instance = self.convert_object(value, &T::model_name())?;
        instance.deserialize_to()
    }

    /// 把通用数组转换为强类型模型列表
    pub fn convert_array_as<T: Model>(&self, value: &DataValue) -> ModelCastResult<Vec<T>> {
        self.convert_array(value, &T::model_name())?
            .iter()
            .map(ModelInstance::deserialize_to::<T>)
            .collect()
    }

    /// 解析文本并转换为强类型模型
    pub fn from_text_as<T: Model>(&self, text: &str) -> ModelCastResult<T> {
        let value = DataValue::from_json_str(text)?;
        self.convert_as(&value)
    }

    /// 逐字段复制对象
    ///
    /// `owner`/`field` 只用于严格模式下的错误定位
    fn copy_object(&self, value: &DataValue, meta: &ModelMeta, owner: &str, field: &str) -> ModelCastResult<ModelInstance> {
        if !value.is_object() {
            if self.config.shape_policy == ShapePolicy::Strict {
                return Err(shape_mismatch(owner, field, "object", value.type_name()));
            }
            debug_log!("⚠️ {} 的输入不是对象({})，所有字段按缺失处理", meta.name, value.type_name());
        }

        let mut instance = ModelInstance::new(meta);
        for field_name in meta.field_names() {
            let attribute = value.get(field_name);

            match meta.field_type(field_name) {
                FieldType::Generic => {
                    self.assign_generic(&mut instance, field_name, attribute);
                }
                FieldType::Array(item_model) if attribute.is_some_and(DataValue::is_array) => {
                    self.assign_array(&mut instance, meta, field_name, item_model, attribute)?;
                }
                field_type => {
                    self.assign_object(&mut instance, meta, field_name, field_type, attribute)?;
                }
            }
        }

        Ok(instance)
    }

    /// 逐个元素复制数组
    fn copy_array(&self, items: &[DataValue], meta: &ModelMeta, owner: &str, field: &str) -> ModelCastResult<Vec<ModelInstance>> {
        items
            .iter()
            .map(|item| self.copy_object(item, meta, owner, field))
            .collect()
    }

    /// 通用字段：原样赋值，包括缺失
    fn assign_generic(&self, instance: &mut ModelInstance, field_name: &str, attribute: Option<&DataValue>) {
        debug_log!("🔍 通用字段 {}: {:?}", field_name, attribute);
        instance.assign(field_name, FieldValue::from(attribute));
    }

    /// 数组注解且输入为数组：逐个元素转换
    fn assign_array(
        &self,
        instance: &mut ModelInstance,
        owner: &ModelMeta,
        field_name: &str,
        item_model: &str,
        attribute: Option<&DataValue>,
    ) -> ModelCastResult<()> {
        let items = attribute.and_then(DataValue::as_array).unwrap_or_default();
        let item_meta = self.registry.meta(item_model)?;

        debug_log!("🔍 数组字段 {}: {} 个 {}", field_name, items.len(), item_model);
        let converted = self.copy_array(items, item_meta, &owner.name, field_name)?;
        instance.assign(field_name, FieldValue::Array(converted));
        Ok(())
    }

    /// 其余注解情况：缺失为 Null，数组按数组转换，其余按单个对象转换
    fn assign_object(
        &self,
        instance: &mut ModelInstance,
        owner: &ModelMeta,
        field_name: &str,
        field_type: &FieldType,
        attribute: Option<&DataValue>,
    ) -> ModelCastResult<()> {
        let Some(target) = field_type.target_model() else {
            self.assign_generic(instance, field_name, attribute);
            return Ok(());
        };

        let value = match attribute {
            Some(value) if !self.is_absent(value) => value,
            _ => {
                debug_log!("🔍 注解字段 {} 缺失，置为 Null", field_name);
                instance.assign(field_name, FieldValue::Null);
                return Ok(());
            }
        };

        let target_meta = self.registry.meta(target)?;
        match value {
            DataValue::Array(items) => {
                if self.config.shape_policy == ShapePolicy::Strict {
                    return Err(shape_mismatch(&owner.name, field_name, "object", "array"));
                }
                debug_log!("⚠️ 对象字段 {} 收到数组，按 {} 数组转换", field_name, target);
                let converted = self.copy_array(items, target_meta, &owner.name, field_name)?;
                instance.assign(field_name, FieldValue::Array(converted));
            }
            other => {
                if self.config.shape_policy == ShapePolicy::Strict && field_type.is_array() {
                    return Err(shape_mismatch(&owner.name, field_name, "array", other.type_name()));
                }
                debug_log!("🔍 对象字段 {}: 递归转换为 {}", field_name, target);
                let converted = self.copy_object(other, target_meta, &owner.name, field_name)?;
                instance.assign(field_name, FieldValue::Object(Box::new(converted)));
            }
        }

        Ok(())
    }

    /// 按缺失判定策略判断注解字段的值是否视为缺失
    fn is_absent(&self, value: &DataValue) -> bool {
        match self.config.absence_policy {
            AbsencePolicy::Falsy => !value.is_truthy(),
            AbsencePolicy::Strict => value.is_null(),
        }
    }
}

fn shape_mismatch(model: &str, field: &str, expected: &str, found: &str) -> ModelCastError {
    ModelCastError::ShapeMismatch {
        model: model.to_string(),
        field: field.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
        message: crate::i18n::tf(
            "error.shape_mismatch",
            &[("model", model), ("field", field), ("expected", expected), ("found", found)],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convenience::{array_of, field, field_with_default, object_of};
    use crate::registry::ModelRegistryBuilder;

    fn registry() -> ModelRegistry {
        let mut builder = ModelRegistryBuilder::new();
        builder.define(
            ModelMeta::new("Employee")
                .field(field("name"))
                .annotated_field(field("manager"), object_of("Employee")),
        );
        builder.define(
            ModelMeta::new("Team")
                .field(field_with_default("title", "untitled"))
                .annotated_field(field("members"), array_of("Employee")),
        );
        builder.build().unwrap()
    }

    #[test]
    fn test_default_is_overwritten_by_absent_value() {
        let registry = registry();
        let team = registry
            .converter()
            .convert_object(&DataValue::from_json_str("{}").unwrap(), "Team")
            .unwrap();

        // 目标字段总会被赋值，默认值只存在于新建实例上
        assert_eq!(team.get("title"), Some(&FieldValue::Undefined));
        assert_eq!(team.get("members"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_array_annotation_with_single_object() {
        let registry = registry();
        let value = DataValue::from_json_str(r#"{"members": {"name": "Solo"}}"#).unwrap();
        let team = registry.converter().convert_object(&value, "Team").unwrap();

        let solo = team.get("members").and_then(FieldValue::as_object).unwrap();
        assert_eq!(solo.model_name(), "Employee");
        assert_eq!(solo.get("name"), Some(&FieldValue::Generic(DataValue::from("Solo"))));
    }

    #[test]
    fn test_unknown_model() {
        let registry = registry();
        let err = registry
            .converter()
            .convert_object(&DataValue::Null, "Department")
            .unwrap_err();
        assert!(matches!(err, ModelCastError::ModelNotFound { .. }));
    }
}
