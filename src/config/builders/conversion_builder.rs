//! # 转换配置构建器模块
//!
//! 提供转换配置的构建器实现，支持链式调用和严格验证

use crate::config::core::{AbsencePolicy, ConversionConfig, ShapePolicy};
use crate::error::ModelCastError;
use rat_logger::info;

/// 转换配置构建器
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    absence_policy: Option<AbsencePolicy>,
    shape_policy: Option<ShapePolicy>,
}

impl ConversionConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            absence_policy: None,
            shape_policy: None,
        }
    }

    /// 设置缺失判定策略
    ///
    /// # 参数
    ///
    /// * `policy` - 缺失判定策略
    pub fn absence_policy(mut self, policy: AbsencePolicy) -> Self {
        self.absence_policy = Some(policy);
        self
    }

    /// 设置形状不匹配处理策略
    ///
    /// # 参数
    ///
    /// * `policy` - 形状不匹配处理策略
    pub fn shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.shape_policy = Some(policy);
        self
    }

    /// 构建转换配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> Result<ConversionConfig, ModelCastError> {
        let absence_policy = self.absence_policy.ok_or_else(|| {
            crate::cast_error!(config, "缺失判定策略必须设置")
        })?;

        let shape_policy = self.shape_policy.ok_or_else(|| {
            crate::cast_error!(config, "形状不匹配处理策略必须设置")
        })?;

        info!("创建转换配置: 缺失判定={:?}, 形状策略={:?}", absence_policy, shape_policy);

        Ok(ConversionConfig {
            absence_policy,
            shape_policy,
        })
    }
}

impl Default for ConversionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_all_policies() {
        let err = ConversionConfigBuilder::new()
            .absence_policy(AbsencePolicy::Strict)
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelCastError::ConfigError { .. }));

        let config = ConversionConfigBuilder::new()
            .absence_policy(AbsencePolicy::Strict)
            .shape_policy(ShapePolicy::Permissive)
            .build()
            .unwrap();
        assert_eq!(config.absence_policy, AbsencePolicy::Strict);
        assert_eq!(config.shape_policy, ShapePolicy::Permissive);
    }
}
