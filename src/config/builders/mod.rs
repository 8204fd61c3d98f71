//! # 配置构建器模块
//!
//! 提供所有配置类型的构建器实现，支持链式调用和严格验证

pub mod cast_builder;
pub mod conversion_builder;

pub use cast_builder::CastConfigBuilder;
pub use conversion_builder::ConversionConfigBuilder;
