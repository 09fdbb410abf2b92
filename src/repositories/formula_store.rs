use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::models::FormulaModel;

type Slot = Arc<Mutex<FormulaModel>>;

/// 内存中的配方存储
///
/// 每个配方有自己的锁，同一配方的修改与重算在锁内一次完成，不同配方之间互不阻塞。
#[derive(Clone, Default)]
pub struct FormulaStore {
    inner: Arc<RwLock<HashMap<Uuid, Slot>>>,
}

impl FormulaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, model: FormulaModel) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(model)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<FormulaModel> {
        let slot = self.slot(id).await?;
        let model = slot.lock().await;
        Some(model.clone())
    }

    pub async fn list(&self) -> Vec<(Uuid, FormulaModel)> {
        let slots: Vec<(Uuid, Slot)> = self
            .inner
            .read()
            .await
            .iter()
            .map(|(id, slot)| (*id, slot.clone()))
            .collect();

        let mut items = Vec::with_capacity(slots.len());
        for (id, slot) in slots {
            items.push((id, slot.lock().await.clone()));
        }
        items
    }

    /// 在该配方的锁内执行修改，返回修改结果和修改后的快照
    pub async fn update<R, F>(&self, id: Uuid, f: F) -> Option<(R, FormulaModel)>
    where
        F: FnOnce(&mut FormulaModel) -> R,
    {
        let slot = self.slot(id).await?;
        let mut model = slot.lock().await;
        let result = f(&mut *model);
        Some((result, model.clone()))
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    async fn slot(&self, id: Uuid) -> Option<Slot> {
        self.inner.read().await.get(&id).cloned()
    }
}
