//! 模型定义系统模块
//!
//! 模型元数据、字段注解、转换结果实例以及强类型模型接口

pub mod convenience;
pub mod field_types;
pub mod instance;
pub mod macros;
pub mod traits;

pub use convenience::*;
pub use field_types::{FieldDefinition, FieldType, ModelMeta};
pub use instance::{FieldValue, ModelInstance};
pub use traits::Model;
