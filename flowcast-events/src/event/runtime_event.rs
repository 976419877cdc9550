use crate::model::{ProcessInstance, Task};

/// 引擎原始事件（RuntimeEvent）
///
/// 引擎在命令执行期间同步触发的内部通知，携带事件发生时刻
/// 受影响实体的借用视图。借用生命周期保证核心不会在转换之后
/// 继续持有原始事件。
#[derive(Debug, Clone, Copy)]
pub enum RuntimeEvent<'a> {
    TaskCreated(&'a Task),
    TaskAssigned(&'a Task),
    TaskCompleted(&'a Task),
    TaskCancelled(&'a Task),
    TaskUpdated(&'a Task),
    ProcessStarted(&'a ProcessInstance),
    ProcessCompleted(&'a ProcessInstance),
    ProcessCancelled(&'a ProcessInstance),
    ProcessSuspended(&'a ProcessInstance),
    ProcessResumed(&'a ProcessInstance),
}
