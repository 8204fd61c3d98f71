//! 模型相关的宏定义
//!
//! 提供便捷的宏来定义强类型模型及其字段注解

/// 便捷宏：定义模型
///
/// 生成结构体、声明顺序的字段列表常量以及 `Model` 实现。
/// 字段列表来自结构体声明本身，注解写在 `annotations` 块中：
///
/// ```ignore
/// define_model! {
///     struct Employee {
///         name: Option<String>,
///         manager: Option<Box<Employee>>,
///     }
///
///     model = "Employee",
///     annotations = {
///         manager: object_of("Employee"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_model {
    (
        $(#[$meta:meta])*
        struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $field_type:ty,
            )*
        }

        model = $model:expr,
        $(
            annotations = {
                $(
                    $ann_field:ident: $ann:expr,
                )*
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl $name {
            /// 按声明顺序排列的字段名
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl $crate::model::traits::Model for $name {
            fn meta() -> $crate::model::field_types::ModelMeta {
                #[allow(unused_mut)]
                let mut meta = $crate::model::field_types::ModelMeta::new($model);
                for field_name in Self::FIELDS {
                    meta = meta.field($crate::model::field_types::FieldDefinition::new(field_name));
                }
                $(
                    $(
                        meta.annotate(stringify!($ann_field), $ann);
                    )*
                )?
                meta
            }
        }
    };
}
