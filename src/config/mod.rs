//! # 配置管理模块
//!
//! 提供转换行为配置，支持构建器模式、链式配置和配置文件

pub mod builders;
pub mod core;

pub use builders::{CastConfigBuilder, ConversionConfigBuilder};
pub use self::core::{AbsencePolicy, CastConfig, ConversionConfig, ShapePolicy};
