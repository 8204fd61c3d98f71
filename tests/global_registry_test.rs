//! 全局注册表生命周期集成测试
//!
//! 全局状态在整个测试进程内共享，生命周期按顺序在单个测试中验证

use rat_modelcast::{
    annotate, convert_array, convert_object, field, freeze_registry, from_text, global_config,
    global_registry, has_model, init_with_config, is_registry_frozen, object_of, register_model,
    CastConfig, ConversionConfig, DataValue, FieldValue, ModelCastError, ModelMeta,
};

#[test]
fn test_global_registry_lifecycle() {
    let config = CastConfig::builder()
        .conversion(ConversionConfig::compatible())
        .language("en-US")
        .build()
        .unwrap();
    init_with_config(config.clone()).unwrap();
    assert_eq!(global_config(), Some(&config));

    let err = init_with_config(config).unwrap_err();
    assert!(matches!(err, ModelCastError::ConfigError { .. }));

    // 冻结前不允许转换
    assert!(!is_registry_frozen());
    let err = from_text("{}", "Employee").unwrap_err();
    assert!(matches!(err, ModelCastError::RegistryNotFrozen { .. }));
    assert!(global_registry().is_err());

    let err = annotate("Employee", "manager", object_of("Employee")).unwrap_err();
    assert!(matches!(err, ModelCastError::ModelNotFound { .. }));

    register_model(ModelMeta::new("Employee").field(field("name")).field(field("manager"))).unwrap();
    annotate("Employee", "manager", object_of("Employee")).unwrap();
    assert!(has_model("Employee"));

    let registry = freeze_registry().unwrap();
    assert!(registry.contains("Employee"));
    assert!(is_registry_frozen());
    assert!(has_model("Employee"));

    // 冻结后所有写操作都被拒绝
    let err = register_model(ModelMeta::new("Team")).unwrap_err();
    assert!(matches!(err, ModelCastError::RegistryFrozen { .. }));
    let err = annotate("Employee", "name", object_of("Employee")).unwrap_err();
    assert!(matches!(err, ModelCastError::RegistryFrozen { .. }));
    assert!(freeze_registry().is_err());

    let alice = from_text(r#"{"name": "Alice", "manager": {"name": "Bob"}}"#, "Employee").unwrap();
    let bob = alice.get("manager").and_then(FieldValue::as_object).unwrap();
    assert_eq!(bob.get("manager"), Some(&FieldValue::Null));

    let value = DataValue::from_json_str(r#"{"name": "Carol", "manager": 0}"#).unwrap();
    let carol = convert_object(&value, "Employee").unwrap();
    assert_eq!(carol.get("manager"), Some(&FieldValue::Null));

    let value = DataValue::from_json_str(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
    assert_eq!(convert_array(&value, "Employee").unwrap().len(), 2);

    // 多线程并发读取冻结后的注册表
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!(r#"{{"name": "worker-{}"}}"#, i);
                from_text(&text, "Employee").map(|instance| instance.len())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 2);
    }
}
