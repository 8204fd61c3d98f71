//! 转换结果模块
//!
//! 定义转换器产出的模型实例及其字段值

use crate::error::ModelCastResult;
use crate::model::field_types::ModelMeta;
use crate::types::DataValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// 转换后实例的字段值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 未定义（输入中不存在且未被赋值）
    Undefined,
    /// 通用字段的原值
    Generic(DataValue),
    /// 注解字段的空值
    Null,
    /// 嵌套对象
    Object(Box<ModelInstance>),
    /// 嵌套对象数组
    Array(Vec<ModelInstance>),
}

impl FieldValue {
    /// 是否未定义
    pub fn is_undefined(&self) -> bool {
        matches!(self, FieldValue::Undefined)
    }

    /// 是否为注解字段的空值
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// 获取通用字段原值
    pub fn as_generic(&self) -> Option<&DataValue> {
        match self {
            FieldValue::Generic(value) => Some(value),
            _ => None,
        }
    }

    /// 获取嵌套对象
    pub fn as_object(&self) -> Option<&ModelInstance> {
        match self {
            FieldValue::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// 获取嵌套对象数组
    pub fn as_array(&self) -> Option<&[ModelInstance]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// 导出为通用数据值，未定义返回 None
    pub fn to_data_value(&self) -> Option<DataValue> {
        match self {
            FieldValue::Undefined => None,
            FieldValue::Generic(value) => Some(value.clone()),
            FieldValue::Null => Some(DataValue::Null),
            FieldValue::Object(instance) => Some(instance.to_data_value()),
            FieldValue::Array(items) => Some(DataValue::Array(
                items.iter().map(ModelInstance::to_data_value).collect(),
            )),
        }
    }
}

impl From<Option<&DataValue>> for FieldValue {
    fn from(value: Option<&DataValue>) -> Self {
        match value {
            Some(v) => FieldValue::Generic(v.clone()),
            None => FieldValue::Undefined,
        }
    }
}

/// 模型实例
///
/// 字段集与模型声明的字段完全一致，顺序为声明顺序
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: String,
    fields: IndexMap<String, FieldValue>,
}

impl ModelInstance {
    /// 按模型元数据创建新实例，字段取各自的默认值
    pub fn new(meta: &ModelMeta) -> Self {
        let fields = meta
            .fields
            .iter()
            .map(|(name, definition)| {
                let value = match &definition.default {
                    Some(default) => FieldValue::Generic(default.clone()),
                    None => FieldValue::Undefined,
                };
                (name.clone(), value)
            })
            .collect();

        Self {
            model: meta.name.clone(),
            fields,
        }
    }

    /// 模型名
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// 读取字段值，字段不属于该模型时返回 None
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields.get(field_name)
    }

    /// 写入字段值，只接受模型已声明的字段
    pub(crate) fn assign(&mut self, field_name: &str, value: FieldValue) {
        if let Some(slot) = self.fields.get_mut(field_name) {
            *slot = value;
        }
    }

    /// 按声明顺序返回字段名
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// 按声明顺序遍历字段
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 是否没有字段
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 导出为通用数据对象，未定义的字段不会出现在结果中
    pub fn to_data_value(&self) -> DataValue {
        let object: HashMap<String, DataValue> = self
            .fields
            .iter()
            .filter_map(|(name, value)| value.to_data_value().map(|v| (name.clone(), v)))
            .collect();
        DataValue::Object(object)
    }

    /// 导出为 JSON 值
    pub fn to_json_value(&self) -> serde_json::Value {
        self.to_data_value().to_json_value()
    }

    /// 反序列化为强类型结构体
    pub fn deserialize_to<T>(&self) -> ModelCastResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.to_data_value().deserialize_to()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field_types::FieldDefinition;

    #[test]
    fn test_new_instance_uses_defaults() {
        let meta = ModelMeta::new("Config")
            .field(FieldDefinition::new("retries").default_value(DataValue::Int(3)))
            .field(FieldDefinition::new("label"));

        let instance = ModelInstance::new(&meta);
        assert_eq!(instance.model_name(), "Config");
        assert_eq!(instance.get("retries"), Some(&FieldValue::Generic(DataValue::Int(3))));
        assert_eq!(instance.get("label"), Some(&FieldValue::Undefined));
        assert_eq!(instance.get("other"), None);
    }

    #[test]
    fn test_assign_ignores_undeclared_fields() {
        let meta = ModelMeta::new("Config").field(FieldDefinition::new("label"));
        let mut instance = ModelInstance::new(&meta);

        instance.assign("label", FieldValue::Null);
        instance.assign("extra", FieldValue::Null);

        assert_eq!(instance.len(), 1);
        assert!(instance.get("label").is_some_and(FieldValue::is_null));
    }

    #[test]
    fn test_export_skips_undefined() {
        let meta = ModelMeta::new("Config")
            .field(FieldDefinition::new("label"))
            .field(FieldDefinition::new("parent"));
        let mut instance = ModelInstance::new(&meta);
        instance.assign("parent", FieldValue::Null);

        assert_eq!(instance.to_json_value(), serde_json::json!({"parent": null}));
    }
}
