//! 字段类型定义模块
//!
//! 定义模型字段、字段注解以及模型元数据

use crate::types::DataValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use rat_logger::{debug, warn};

static GENERIC_FIELD: FieldType = FieldType::Generic;

/// 字段类型（字段注解）
///
/// 未注解的字段一律视为 `Generic`，按原值赋值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 通用字段，原样赋值
    Generic,
    /// 嵌套对象，值为目标模型名
    Object(String),
    /// 嵌套对象数组，值为元素模型名
    Array(String),
}

impl FieldType {
    /// 嵌套模型名，通用字段返回 None
    pub fn target_model(&self) -> Option<&str> {
        match self {
            FieldType::Generic => None,
            FieldType::Object(model) | FieldType::Array(model) => Some(model.as_str()),
        }
    }

    /// 是否为数组注解
    pub fn is_array(&self) -> bool {
        matches!(self, FieldType::Array(_))
    }
}

/// 字段定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// 字段名，定义文件中可省略，以键名为准
    #[serde(default)]
    pub name: String,
    /// 默认值，None 表示缺省为“未定义”
    #[serde(default)]
    pub default: Option<DataValue>,
    /// 字段描述
    #[serde(default)]
    pub description: Option<String>,
}

impl FieldDefinition {
    /// 创建新的字段定义
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
            description: None,
        }
    }

    /// 设置默认值
    pub fn default_value(mut self, value: DataValue) -> Self {
        self.default = Some(value);
        self
    }

    /// 设置字段描述
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// 模型元数据
///
/// 字段按声明顺序排列，构成转换时的目标字段集；
/// 注解表挂在模型自身上，首次注解时创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// 模型名
    pub name: String,
    /// 字段定义
    pub fields: IndexMap<String, FieldDefinition>,
    /// 字段注解表
    #[serde(default)]
    pub annotations: Option<IndexMap<String, FieldType>>,
    /// 模型描述
    #[serde(default)]
    pub description: Option<String>,
}

impl ModelMeta {
    /// 创建空模型
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: IndexMap::new(),
            annotations: None,
            description: None,
        }
    }

    /// 添加字段定义，同名字段会被替换但保留原位置
    pub fn field(mut self, definition: FieldDefinition) -> Self {
        self.fields.insert(definition.name.clone(), definition);
        self
    }

    /// 添加字段并同时声明注解
    pub fn annotated_field(mut self, definition: FieldDefinition, field_type: FieldType) -> Self {
        let name = definition.name.clone();
        self.fields.insert(name.clone(), definition);
        self.annotate(&name, field_type);
        self
    }

    /// 设置模型描述
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// 记录字段注解
    ///
    /// 注解表不存在时先创建；同一字段重复注解时后写覆盖前写
    pub fn annotate(&mut self, field_name: &str, field_type: FieldType) {
        if !self.fields.contains_key(field_name) {
            warn!("模型 {} 没有声明字段 {}，该注解不会被使用", self.name, field_name);
        }

        let annotations = self.annotations.get_or_insert_with(IndexMap::new);
        if let Some(previous) = annotations.insert(field_name.to_string(), field_type.clone()) {
            if previous != field_type {
                debug!("覆盖字段注解: {}.{} {:?} -> {:?}", self.name, field_name, previous, field_type);
            }
        }
    }

    /// 查询字段注解，没有注解的字段返回 Generic
    pub fn field_type(&self, field_name: &str) -> &FieldType {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(field_name))
            .unwrap_or(&GENERIC_FIELD)
    }

    /// 按声明顺序返回目标字段名
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// 是否声明了某字段
    pub fn has_field(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    /// 遍历所有非通用注解
    pub fn nested_annotations(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.annotations
            .iter()
            .flat_map(|annotations| annotations.iter())
            .filter(|(_, field_type)| field_type.target_model().is_some())
            .map(|(name, field_type)| (name.as_str(), field_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> ModelMeta {
        ModelMeta::new("Employee")
            .field(FieldDefinition::new("name"))
            .field(FieldDefinition::new("manager"))
    }

    #[test]
    fn test_annotation_table_created_lazily() {
        let mut meta = employee();
        assert!(meta.annotations.is_none());
        assert_eq!(meta.field_type("manager"), &FieldType::Generic);

        meta.annotate("manager", FieldType::Object("Employee".to_string()));
        assert!(meta.annotations.is_some());
        assert_eq!(meta.field_type("manager"), &FieldType::Object("Employee".to_string()));
        assert_eq!(meta.field_type("name"), &FieldType::Generic);
    }

    #[test]
    fn test_annotation_last_write_wins() {
        let mut meta = employee();
        meta.annotate("manager", FieldType::Object("Employee".to_string()));
        meta.annotate("manager", FieldType::Object("Employee".to_string()));
        assert_eq!(meta.annotations.as_ref().map(|a| a.len()), Some(1));

        meta.annotate("manager", FieldType::Array("Employee".to_string()));
        assert_eq!(meta.field_type("manager"), &FieldType::Array("Employee".to_string()));
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let meta = ModelMeta::new("Order")
            .field(FieldDefinition::new("z"))
            .field(FieldDefinition::new("a"))
            .field(FieldDefinition::new("m"));

        let names: Vec<&str> = meta.field_names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_schema_deserialization() {
        let json = r#"{
            "name": "Team",
            "fields": {"members": {"name": "members"}, "title": {"name": "title", "default": "untitled"}},
            "annotations": {"members": {"array": "Employee"}}
        }"#;

        let meta: ModelMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.field_type("members"), &FieldType::Array("Employee".to_string()));
        assert_eq!(
            meta.fields.get("title").and_then(|f| f.default.clone()),
            Some(DataValue::String("untitled".to_string()))
        );
    }
}
