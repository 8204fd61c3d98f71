//! # 配置管理模块 - 核心配置类型
//!
//! 提供转换行为配置，支持构建器模式和配置文件加载

use crate::error::{ModelCastError, ModelCastResult};
use serde::{Deserialize, Serialize};
use rat_logger::info;

/// 注解字段的“缺失”判定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsencePolicy {
    /// 假值即缺失：null、缺失、0、空字符串、false 都会得到 Null
    Falsy,
    /// 仅 null 与缺失视为缺失
    Strict,
}

/// 数据形状与注解不一致时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePolicy {
    /// 尽力转换：对象注解遇到数组按数组转换，数组注解遇到单值按单个对象转换
    Permissive,
    /// 形状不一致直接返回 ShapeMismatch
    Strict,
}

/// 转换配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// 缺失判定策略
    pub absence_policy: AbsencePolicy,
    /// 形状不匹配处理策略
    pub shape_policy: ShapePolicy,
}

impl ConversionConfig {
    /// 创建转换配置构建器
    pub fn builder() -> super::builders::ConversionConfigBuilder {
        super::builders::ConversionConfigBuilder::new()
    }

    /// 兼容模式：假值视为缺失，形状不匹配时尽力转换
    pub fn compatible() -> Self {
        Self {
            absence_policy: AbsencePolicy::Falsy,
            shape_policy: ShapePolicy::Permissive,
        }
    }

    /// 严格模式：仅 null/缺失视为缺失，形状不匹配报错
    pub fn strict() -> Self {
        Self {
            absence_policy: AbsencePolicy::Strict,
            shape_policy: ShapePolicy::Strict,
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::compatible()
    }
}

/// 库级配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastConfig {
    /// 错误消息语言，如 "zh-CN"、"en-US"
    #[serde(default)]
    pub language: Option<String>,
    /// 转换配置
    pub conversion: ConversionConfig,
}

impl CastConfig {
    /// 创建库级配置构建器
    pub fn builder() -> super::builders::CastConfigBuilder {
        super::builders::CastConfigBuilder::new()
    }

    /// 从配置文件加载配置
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径，扩展名为 toml 时按TOML解析，否则按JSON解析
    pub fn from_file<P: AsRef<std::path::Path>>(config_path: P) -> ModelCastResult<Self> {
        let content = std::fs::read_to_string(config_path.as_ref())
            .map_err(ModelCastError::IoError)?;

        let config: CastConfig = if is_toml(config_path.as_ref()) {
            toml::from_str(&content)
                .map_err(|e| crate::cast_error!(config, format!("解析TOML配置文件失败: {}", e)))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| crate::cast_error!(config, format!("解析JSON配置文件失败: {}", e)))?
        };

        info!("从文件加载配置: {:?}", config_path.as_ref());
        Ok(config)
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, config_path: P) -> ModelCastResult<()> {
        let content = if is_toml(config_path.as_ref()) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::cast_error!(config, format!("序列化TOML配置失败: {}", e)))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| crate::cast_error!(config, format!("序列化JSON配置失败: {}", e)))?
        };

        std::fs::write(config_path.as_ref(), content)
            .map_err(ModelCastError::IoError)?;

        info!("保存配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            conversion: ConversionConfig::default(),
            language: None,
        }
    }
}

/// 根据扩展名判断是否为TOML文件
pub(crate) fn is_toml(path: &std::path::Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}
