//! rat_modelcast - 模型类型转换库
//!
//! 把无类型的通用数据树（通常来自JSON文本）按模型定义和字段注解
//! 递归转换为模型实例：通用字段原样复制，注解字段转换为嵌套对象或嵌套对象数组，
//! 输入中多余的键一律丢弃

use once_cell::sync::OnceCell;

// 全局配置 - 只能在初始化阶段设置一次
static GLOBAL_CAST_CONFIG: OnceCell<CastConfig> = OnceCell::new();

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod model;
pub mod registry;
pub mod manager;
pub mod converter;
pub mod config;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{ModelCastError, ModelCastResult};
pub use types::*;
pub use model::{
    Model, FieldType, FieldDefinition, ModelMeta, FieldValue, ModelInstance,
    field, field_with_default, object_of, array_of
};
pub use registry::{ModelRegistry, ModelRegistryBuilder, SchemaFile};
pub use manager::{
    RegistryManager, register_model, register, annotate, load_schema_file,
    freeze_registry, is_registry_frozen, global_registry, get_model, has_model
};
pub use converter::ModelConverter;
pub use converter::global::{
    global_converter, from_text, convert_object, convert_array,
    convert_as, convert_array_as, from_text_as
};
pub use config::{
    AbsencePolicy, ShapePolicy, ConversionConfig, ConversionConfigBuilder,
    CastConfig, CastConfigBuilder
};

// 日志系统导入
use rat_logger::info;

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_modelcast库
///
/// 这个函数会初始化多语言错误消息系统
///
/// 注意：日志系统由调用者自行初始化，本库不会自动初始化日志
pub fn init() {
    // 初始化多语言错误消息系统
    i18n::ErrorMessageI18n::init();
}

/// 使用库级配置初始化
///
/// 配置只能设置一次，重复调用返回 ConfigError。
/// 指定了语言时会覆盖环境变量中的语言设置
pub fn init_with_config(config: CastConfig) -> ModelCastResult<()> {
    init();

    if let Some(language) = &config.language {
        let normalized = rat_embed_lang::normalize_language_code(language);
        i18n::set_language(&normalized);
    }

    let conversion = config.conversion;
    GLOBAL_CAST_CONFIG
        .set(config)
        .map_err(|_| crate::cast_error!(config, "全局配置已经设置，不能重复初始化"))?;

    info!("rat_modelcast 初始化完成: {:?}", conversion);
    Ok(())
}

/// 获取全局库级配置，未设置时返回 None
pub fn global_config() -> Option<&'static CastConfig> {
    GLOBAL_CAST_CONFIG.get()
}

/// 全局转换配置，未设置时使用兼容模式
pub(crate) fn global_conversion_config() -> ConversionConfig {
    GLOBAL_CAST_CONFIG
        .get()
        .map(|config| config.conversion)
        .unwrap_or_default()
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
