use crate::model::EntitySnapshot;

use super::cloud_event::CloudEvent;
use super::event_type::EventType;
use super::runtime_event::RuntimeEvent;

/// 原始事件到云事件的转换器
///
/// 纯函数映射：对每一种 `RuntimeEvent` 变体给出对应的 `EventType`，
/// 并在转换时刻复制实体快照。映射以穷尽 `match` 表达，
/// 新增原始事件种类而缺少映射分支时无法通过编译，
/// 不存在运行期"未知事件种类"的错误路径。
#[derive(Debug, Clone, Copy, Default)]
pub struct ToCloudEventConverter;

impl ToCloudEventConverter {
    pub fn new() -> Self {
        Self
    }

    /// 转换一条原始事件，快照在此刻复制
    pub fn convert(&self, event: RuntimeEvent<'_>) -> CloudEvent {
        match event {
            RuntimeEvent::TaskCreated(task) => {
                CloudEvent::new(EventType::TaskCreated, EntitySnapshot::from(task))
            }
            RuntimeEvent::TaskAssigned(task) => {
                CloudEvent::new(EventType::TaskAssigned, EntitySnapshot::from(task))
            }
            RuntimeEvent::TaskCompleted(task) => {
                CloudEvent::new(EventType::TaskCompleted, EntitySnapshot::from(task))
            }
            RuntimeEvent::TaskCancelled(task) => {
                CloudEvent::new(EventType::TaskCancelled, EntitySnapshot::from(task))
            }
            RuntimeEvent::TaskUpdated(task) => {
                CloudEvent::new(EventType::TaskUpdated, EntitySnapshot::from(task))
            }
            RuntimeEvent::ProcessStarted(process) => {
                CloudEvent::new(EventType::ProcessStarted, EntitySnapshot::from(process))
            }
            RuntimeEvent::ProcessCompleted(process) => {
                CloudEvent::new(EventType::ProcessCompleted, EntitySnapshot::from(process))
            }
            RuntimeEvent::ProcessCancelled(process) => {
                CloudEvent::new(EventType::ProcessCancelled, EntitySnapshot::from(process))
            }
            RuntimeEvent::ProcessSuspended(process) => {
                CloudEvent::new(EventType::ProcessSuspended, EntitySnapshot::from(process))
            }
            RuntimeEvent::ProcessResumed(process) => {
                CloudEvent::new(EventType::ProcessResumed, EntitySnapshot::from(process))
            }
        }
    }
}
