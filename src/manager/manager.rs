//! 注册表管理器核心定义

use crate::error::ModelCastResult;
use crate::registry::{ModelRegistry, ModelRegistryBuilder};
use once_cell::sync::OnceCell;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rat_logger::{debug, info, warn};

/// 注册表管理器 - 管理初始化阶段的写入与冻结后的只读注册表
#[derive(Debug)]
pub struct RegistryManager {
    /// 冻结前的待写入表，冻结后为 None
    pub(crate) pending: RwLock<Option<ModelRegistryBuilder>>,
    /// 冻结后的只读注册表
    pub(crate) frozen: OnceCell<ModelRegistry>,
}

impl RegistryManager {
    /// 创建新的注册表管理器
    pub fn new() -> Self {
        debug!("创建注册表管理器");

        Self {
            pending: RwLock::new(Some(ModelRegistryBuilder::new())),
            frozen: OnceCell::new(),
        }
    }

    pub(crate) fn read_pending(&self) -> ModelCastResult<RwLockReadGuard<'_, Option<ModelRegistryBuilder>>> {
        self.pending
            .read()
            .map_err(|_| crate::cast_error!(config, "模型注册表锁被污染"))
    }

    pub(crate) fn write_pending(&self) -> ModelCastResult<RwLockWriteGuard<'_, Option<ModelRegistryBuilder>>> {
        self.pending
            .write()
            .map_err(|_| crate::cast_error!(config, "模型注册表锁被污染"))
    }

    /// 在待写入表上执行写操作，已冻结时返回 RegistryFrozen
    pub(crate) fn with_pending<R>(
        &self,
        f: impl FnOnce(&mut ModelRegistryBuilder) -> ModelCastResult<R>,
    ) -> ModelCastResult<R> {
        let mut guard = self.write_pending()?;
        match (*guard).as_mut() {
            Some(builder) => f(builder),
            None => {
                warn!("模型注册表已冻结，拒绝写入");
                Err(crate::cast_error!(registry_frozen))
            }
        }
    }

    /// 冻结注册表
    ///
    /// 校验失败时待写入表保持原样，可以修正后再次冻结
    pub fn freeze(&self) -> ModelCastResult<&ModelRegistry> {
        let mut guard = self.write_pending()?;
        let builder = (*guard).as_ref().ok_or_else(|| crate::cast_error!(registry_frozen))?;

        let registry = builder.clone().build()?;
        self.frozen
            .set(registry)
            .map_err(|_| crate::cast_error!(registry_frozen))?;
        *guard = None;

        info!("全局模型注册表已冻结");
        self.registry()
    }

    /// 是否已冻结
    pub fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// 获取只读注册表，未冻结时返回 RegistryNotFrozen
    pub fn registry(&self) -> ModelCastResult<&ModelRegistry> {
        self.frozen
            .get()
            .ok_or_else(|| crate::cast_error!(registry_not_frozen))
    }
}

impl Default for RegistryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelCastError;
    use crate::model::convenience::{field, object_of};
    use crate::model::field_types::ModelMeta;

    #[test]
    fn test_lifecycle() {
        let manager = RegistryManager::new();
        assert!(!manager.is_frozen());
        assert!(matches!(manager.registry(), Err(ModelCastError::RegistryNotFrozen { .. })));

        manager
            .register_model(ModelMeta::new("Employee").field(field("name")).field(field("manager")))
            .unwrap();
        manager.annotate("Employee", "manager", object_of("Employee")).unwrap();

        let registry = manager.freeze().unwrap();
        assert!(registry.contains("Employee"));
        assert!(manager.is_frozen());

        let err = manager.register_model(ModelMeta::new("Team")).unwrap_err();
        assert!(matches!(err, ModelCastError::RegistryFrozen { .. }));
        assert!(matches!(manager.freeze(), Err(ModelCastError::RegistryFrozen { .. })));
    }

    #[test]
    fn test_failed_freeze_keeps_pending() {
        let manager = RegistryManager::new();
        manager
            .register_model(ModelMeta::new("Team").field(field("lead")))
            .unwrap();
        manager.annotate("Team", "lead", object_of("Employee")).unwrap();

        let err = manager.freeze().unwrap_err();
        assert!(matches!(err, ModelCastError::UnknownModelReference { .. }));
        assert!(!manager.is_frozen());

        manager
            .register_model(ModelMeta::new("Employee").field(field("name")))
            .unwrap();
        assert!(manager.freeze().is_ok());
    }
}
