//! # 库级配置构建器模块
//!
//! 提供库级配置的构建器实现

use crate::config::core::{CastConfig, ConversionConfig};
use crate::error::ModelCastError;
use rat_logger::info;

/// 库级配置构建器
#[derive(Debug)]
pub struct CastConfigBuilder {
    conversion: Option<ConversionConfig>,
    language: Option<String>,
}

impl CastConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            conversion: None,
            language: None,
        }
    }

    /// 设置转换配置
    ///
    /// # 参数
    ///
    /// * `conversion` - 转换配置
    pub fn conversion(mut self, conversion: ConversionConfig) -> Self {
        self.conversion = Some(conversion);
        self
    }

    /// 设置错误消息语言
    ///
    /// # 参数
    ///
    /// * `language` - 语言代码，如 "en-US"
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// 构建库级配置
    ///
    /// # 错误
    ///
    /// 未设置转换配置或语言代码为空时返回错误
    pub fn build(self) -> Result<CastConfig, ModelCastError> {
        let conversion = self.conversion.ok_or_else(|| {
            crate::cast_error!(config, "转换配置必须设置")
        })?;

        if let Some(language) = &self.language {
            if language.trim().is_empty() {
                return Err(crate::cast_error!(config, "语言代码不能为空"));
            }
        }

        info!("创建库级配置: 转换={:?}, 语言={:?}", conversion, self.language);

        Ok(CastConfig {
            conversion,
            language: self.language,
        })
    }
}

impl Default for CastConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cast_config() {
        let config = CastConfigBuilder::new()
            .conversion(ConversionConfig::strict())
            .language("ja-JP")
            .build()
            .unwrap();
        assert_eq!(config.conversion, ConversionConfig::strict());
        assert_eq!(config.language.as_deref(), Some("ja-JP"));
    }

    #[test]
    fn test_build_rejects_missing_conversion_and_blank_language() {
        assert!(CastConfigBuilder::new().build().is_err());
        assert!(
            CastConfigBuilder::new()
                .conversion(ConversionConfig::compatible())
                .language("  ")
                .build()
                .is_err()
        );
    }
}
