use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::EntitySnapshot;

use super::event_type::EventType;

/// 云事件（CloudEvent）
///
/// 引擎生命周期事件对外发布的不可变表示：
/// - `id`：构造时分配的全局唯一标识，进程生命周期内不重复；
/// - `timestamp`：事件构造时刻，同一执行上下文内反映发射顺序；
/// - `event_type`：固定枚举的事件类型判别字段；
/// - `entity`：事件发生时刻受影响实体的不可变副本。
///
/// 构造后不暴露任何修改方法；相等性仅由 `id` 决定。
/// 线格式（serde）：`id`、`timestamp`（ISO-8601）、`eventType`、内嵌 `entity` 对象。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudEvent {
    id: String,
    timestamp: DateTime<Utc>,
    event_type: EventType,
    entity: EntitySnapshot,
}

impl CloudEvent {
    /// 构造云事件，`id` 与 `timestamp` 在此刻确定
    pub fn new(event_type: EventType, entity: EntitySnapshot) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type,
            entity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn entity(&self) -> &EntitySnapshot {
        &self.entity
    }
}

impl PartialEq for CloudEvent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CloudEvent {}

impl std::hash::Hash for CloudEvent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
