use serde::{Deserialize, Serialize};

use super::process::ProcessInstance;
use super::task::Task;

/// 实体快照（EntitySnapshot）
///
/// 云事件中内嵌的受影响实体副本。构造时必须复制实体而非引用，
/// 因为引擎内的活动对象在事件触发后仍会继续变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntitySnapshot {
    Task(Task),
    Process(ProcessInstance),
}

impl EntitySnapshot {
    pub fn as_task(&self) -> Option<&Task> {
        match self {
            EntitySnapshot::Task(task) => Some(task),
            _ => None,
        }
    }

    pub fn as_process(&self) -> Option<&ProcessInstance> {
        match self {
            EntitySnapshot::Process(process) => Some(process),
            _ => None,
        }
    }

    /// 快照实体的ID
    pub fn entity_id(&self) -> &str {
        match self {
            EntitySnapshot::Task(task) => task.id(),
            EntitySnapshot::Process(process) => process.id(),
        }
    }
}

impl From<&Task> for EntitySnapshot {
    fn from(task: &Task) -> Self {
        EntitySnapshot::Task(task.clone())
    }
}

impl From<&ProcessInstance> for EntitySnapshot {
    fn from(process: &ProcessInstance) -> Self {
        EntitySnapshot::Process(process.clone())
    }
}
