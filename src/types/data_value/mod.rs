use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ModelCastError, ModelCastResult};

/// 通用数据值类型 - 解析后的无类型数据树
///
/// 由原始类型、有序序列（数组）和键值映射（对象）组成，
/// 是转换器的只读输入
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// 空值
    Null,
    /// 布尔值
    Bool(bool),
    /// 整数
    Int(i64),
    /// 无符号整数
    UInt(u64),
    /// 浮点数
    Float(f64),
    /// 字符串
    String(String),
    /// 数组
    Array(Vec<DataValue>),
    /// 对象/文档
    Object(HashMap<String, DataValue>),
}

impl std::fmt::Display for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::UInt(u) => write!(f, "{}", u),
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::String(s) => write!(f, "{}", s),
            DataValue::Array(_) | DataValue::Object(_) => write!(f, "{}", self.to_json_value()),
        }
    }
}

impl std::fmt::Debug for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug trait 和 Display 保持一致，显示实际值而不是类型构造函数
        write!(f, "{}", self)
    }
}

impl DataValue {
    /// 获取数据类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "boolean",
            DataValue::Int(_) => "integer",
            DataValue::UInt(_) => "unsigned_integer",
            DataValue::Float(_) => "float",
            DataValue::String(_) => "string",
            DataValue::Array(_) => "array",
            DataValue::Object(_) => "object",
        }
    }

    /// 判断是否为空值
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// 判断是否为数组
    pub fn is_array(&self) -> bool {
        matches!(self, DataValue::Array(_))
    }

    /// 判断是否为对象
    pub fn is_object(&self) -> bool {
        matches!(self, DataValue::Object(_))
    }

    /// 真值判断
    ///
    /// null、false、0、0.0、NaN 和空字符串为假，其余（包括空数组、空对象）为真
    pub fn is_truthy(&self) -> bool {
        match self {
            DataValue::Null => false,
            DataValue::Bool(b) => *b,
            DataValue::Int(i) => *i != 0,
            DataValue::UInt(u) => *u != 0,
            DataValue::Float(f) => *f != 0.0 && !f.is_nan(),
            DataValue::String(s) => !s.is_empty(),
            DataValue::Array(_) | DataValue::Object(_) => true,
        }
    }

    /// 获取数组内容
    pub fn as_array(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// 获取对象内容
    pub fn as_object(&self) -> Option<&HashMap<String, DataValue>> {
        match self {
            DataValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// 按键读取对象字段，非对象或键不存在时返回 None
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// 从文本解析通用数据树
    ///
    /// 文本不是合法JSON时返回 `ParseError`
    pub fn from_json_str(text: &str) -> ModelCastResult<Self> {
        let json_value: serde_json::Value =
            serde_json::from_str(text).map_err(ModelCastError::parse)?;
        Ok(json_value_to_data_value(json_value))
    }

    /// 转换为 JSON 字符串
    pub fn to_json_string(&self) -> ModelCastResult<String> {
        serde_json::to_string(&self.to_json_value()).map_err(|e| {
            crate::cast_error!(serialization, format!("DataValue 转换为 JSON 失败: {}", e))
        })
    }

    /// 转换为 JSON 值
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            DataValue::Null => serde_json::Value::Null,
            DataValue::Bool(b) => serde_json::Value::Bool(*b),
            DataValue::Int(i) => serde_json::Value::Number(serde_json::Number::from(*i)),
            DataValue::UInt(u) => serde_json::Value::Number(serde_json::Number::from(*u)),
            DataValue::Float(f) => {
                serde_json::Number::from_f64(*f)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            },
            DataValue::String(s) => serde_json::Value::String(s.clone()),
            DataValue::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(DataValue::to_json_value).collect())
            }
            DataValue::Object(obj) => {
                let json_object: serde_json::Map<String, serde_json::Value> = obj
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect();
                serde_json::Value::Object(json_object)
            }
        }
    }

    /// 直接反序列化为指定类型
    pub fn deserialize_to<T>(&self) -> ModelCastResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.to_json_value()).map_err(|e| {
            crate::cast_error!(serialization, format!("DataValue 反序列化失败: {}", e))
        })
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Bool(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Int(value as i64)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int(value)
    }
}

impl From<u64> for DataValue {
    fn from(value: u64) -> Self {
        DataValue::UInt(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float(value)
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(value: Vec<DataValue>) -> Self {
        DataValue::Array(value)
    }
}

impl From<HashMap<String, DataValue>> for DataValue {
    fn from(value: HashMap<String, DataValue>) -> Self {
        DataValue::Object(value)
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        json_value_to_data_value(value)
    }
}

impl<T> From<Option<T>> for DataValue
where
    T: Into<DataValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => DataValue::Null,
        }
    }
}

/// 将 serde_json::Value 递归转换为对应的 DataValue 类型
pub fn json_value_to_data_value(value: serde_json::Value) -> DataValue {
    match value {
        serde_json::Value::Null => DataValue::Null,
        serde_json::Value::Bool(b) => DataValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DataValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                DataValue::UInt(u)
            } else {
                // 非整数一定能表示为 f64
                DataValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => DataValue::String(s),
        serde_json::Value::Array(arr) => {
            DataValue::Array(arr.into_iter().map(json_value_to_data_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let data_object: HashMap<String, DataValue> = obj
                .into_iter()
                .map(|(k, v)| (k, json_value_to_data_value(v)))
                .collect();
            DataValue::Object(data_object)
        }
    }
}
