//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use std::collections::HashMap;
use std::sync::Once;
use rat_embed_lang::register_translations;

static REGISTER_ONCE: Once = Once::new();

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 文本解析错误
        let mut parse_errors = HashMap::new();
        parse_errors.insert("zh-CN".to_string(), "解析输入文本失败: {message}".to_string());
        parse_errors.insert("en-US".to_string(), "Failed to parse input text: {message}".to_string());
        parse_errors.insert("ja-JP".to_string(), "入力テキストの解析に失敗しました: {message}".to_string());
        translations.insert("error.parse".to_string(), parse_errors);

        // 模型未定义
        let mut model_not_found = HashMap::new();
        model_not_found.insert("zh-CN".to_string(), "模型 '{model}' 未定义".to_string());
        model_not_found.insert("en-US".to_string(), "Model '{model}' is not defined".to_string());
        model_not_found.insert("ja-JP".to_string(), "モデル '{model}' が定義されていません".to_string());
        translations.insert("error.model_not_found".to_string(), model_not_found);

        // 注解引用了未定义的模型
        let mut unknown_reference = HashMap::new();
        unknown_reference.insert("zh-CN".to_string(), "模型 '{model}' 的字段 '{field}' 引用了未定义的模型 '{target}'".to_string());
        unknown_reference.insert("en-US".to_string(), "Field '{field}' of model '{model}' references undefined model '{target}'".to_string());
        unknown_reference.insert("ja-JP".to_string(), "モデル '{model}' のフィールド '{field}' が未定義のモデル '{target}' を参照しています".to_string());
        translations.insert("error.unknown_reference".to_string(), unknown_reference);

        // 注册表已冻结
        let mut registry_frozen = HashMap::new();
        registry_frozen.insert("zh-CN".to_string(), "模型注册表已冻结，不允许再定义模型或添加注解".to_string());
        registry_frozen.insert("en-US".to_string(), "Model registry is frozen, models and annotations can no longer be added".to_string());
        registry_frozen.insert("ja-JP".to_string(), "モデルレジストリは凍結済みです。モデルや注釈は追加できません".to_string());
        translations.insert("error.registry_frozen".to_string(), registry_frozen);

        // 注册表未冻结
        let mut registry_not_frozen = HashMap::new();
        registry_not_frozen.insert("zh-CN".to_string(), "模型注册表尚未冻结，请先调用 freeze_registry".to_string());
        registry_not_frozen.insert("en-US".to_string(), "Model registry is not frozen yet, please call freeze_registry first".to_string());
        registry_not_frozen.insert("ja-JP".to_string(), "モデルレジストリがまだ凍結されていません。まず freeze_registry を呼び出してください".to_string());
        translations.insert("error.registry_not_frozen".to_string(), registry_not_frozen);

        // 数据形状不匹配
        let mut shape_mismatch = HashMap::new();
        shape_mismatch.insert("zh-CN".to_string(), "模型 '{model}' 字段 '{field}' 形状不匹配: 期望{expected}，实际为{found}".to_string());
        shape_mismatch.insert("en-US".to_string(), "Shape mismatch on field '{field}' of model '{model}': expected {expected}, found {found}".to_string());
        shape_mismatch.insert("ja-JP".to_string(), "モデル '{model}' のフィールド '{field}' の形状が一致しません: 期待値 {expected}、実際 {found}".to_string());
        translations.insert("error.shape_mismatch".to_string(), shape_mismatch);

        // 序列化错误
        let mut serialization_errors = HashMap::new();
        serialization_errors.insert("zh-CN".to_string(), "数据序列化失败: {message}".to_string());
        serialization_errors.insert("en-US".to_string(), "Data serialization failed: {message}".to_string());
        serialization_errors.insert("ja-JP".to_string(), "データシリアライズが失敗しました: {message}".to_string());
        translations.insert("error.serialization".to_string(), serialization_errors);

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        ensure_registered();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}

/// 确保翻译只注册一次
fn ensure_registered() {
    REGISTER_ONCE.call_once(ErrorMessageI18n::register_all_translations);
}

/// 获取翻译后的消息
pub fn t(key: &str) -> String {
    ensure_registered();
    rat_embed_lang::t(key)
}

/// 获取带参数的翻译消息
pub fn tf(key: &str, args: &[(&str, &str)]) -> String {
    ensure_registered();
    rat_embed_lang::tf(key, args)
}

/// 重新导出rat_embed_lang的语言切换函数
pub use rat_embed_lang::{set_language, current_language};
