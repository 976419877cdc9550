//! 领域实体与快照
//!
//! 定义引擎在命令执行期间操作的活动对象（`Task`、`ProcessInstance`），
//! 以及对外发布时使用的不可变副本 `EntitySnapshot`。

mod process;
mod snapshot;
mod task;

pub use process::{ProcessInstance, ProcessStatus};
pub use snapshot::EntitySnapshot;
pub use task::{Task, TaskStatus};
