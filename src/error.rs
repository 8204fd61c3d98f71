//! 错误处理模块
//!
//! 定义模型转换过程中所有可能出现的错误类型

use thiserror::Error;

/// 模型转换错误类型
#[derive(Error, Debug)]
pub enum ModelCastError {
    /// 输入文本不是合法的序列化数据
    #[error("{message}")]
    ParseError { message: String },

    /// 模型未定义
    #[error("{message}")]
    ModelNotFound { model: String, message: String },

    /// 注解引用了未定义的模型
    #[error("{message}")]
    UnknownModelReference {
        model: String,
        field: String,
        target: String,
        message: String,
    },

    /// 注册表已冻结，不允许再写入
    #[error("{message}")]
    RegistryFrozen { message: String },

    /// 注册表尚未冻结，不允许执行转换
    #[error("{message}")]
    RegistryNotFrozen { message: String },

    /// 数据形状与注解不匹配（仅在严格模式下出现）
    #[error("{message}")]
    ShapeMismatch {
        model: String,
        field: String,
        expected: String,
        found: String,
        message: String,
    },

    /// 序列化/反序列化失败
    #[error("{message}")]
    SerializationError { message: String },

    /// 配置错误
    #[error("{message}")]
    ConfigError { message: String },

    /// IO错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),
}

/// 模型转换结果类型
pub type ModelCastResult<T> = Result<T, ModelCastError>;

impl From<serde_json::Error> for ModelCastError {
    fn from(e: serde_json::Error) -> Self {
        ModelCastError::SerializationError {
            message: crate::i18n::tf("error.serialization", &[("message", e.to_string().as_str())]),
        }
    }
}

impl ModelCastError {
    /// 由JSON解析错误构造 ParseError
    pub fn parse(e: serde_json::Error) -> Self {
        ModelCastError::ParseError {
            message: crate::i18n::tf("error.parse", &[("message", e.to_string().as_str())]),
        }
    }

    /// 是否为解析错误
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ModelCastError::ParseError { .. })
    }
}

/// 便捷宏：构造常用错误
#[macro_export]
macro_rules! cast_error {
    (model_not_found, $model:expr) => {
        $crate::error::ModelCastError::ModelNotFound {
            model: $model.to_string(),
            message: $crate::i18n::tf("error.model_not_found", &[("model", $model.to_string().as_str())]),
        }
    };
    (registry_frozen) => {
        $crate::error::ModelCastError::RegistryFrozen {
            message: $crate::i18n::t("error.registry_frozen"),
        }
    };
    (registry_not_frozen) => {
        $crate::error::ModelCastError::RegistryNotFrozen {
            message: $crate::i18n::t("error.registry_not_frozen"),
        }
    };
    (config, $message:expr) => {
        $crate::error::ModelCastError::ConfigError {
            message: $crate::i18n::tf("error.config", &[("message", $message.to_string().as_str())]),
        }
    };
    (serialization, $message:expr) => {
        $crate::error::ModelCastError::SerializationError {
            message: $crate::i18n::tf("error.serialization", &[("message", $message.to_string().as_str())]),
        }
    };
}
