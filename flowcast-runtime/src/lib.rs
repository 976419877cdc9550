//! 执行边界层（flowcast-runtime）
//!
//! 连接引擎命令生命周期与云事件核心的边界构件：
//! - `CommandContext`：工作单元守卫，提交冲刷发布、回滚丢弃，二选一；
//! - `CloudEventProducer`：引擎监听适配器，原始事件转换后送入聚合器；
//! - `CommandRunner`：命令到发布的完整编排，便于应用层直接调用。
//!
pub mod command_context;
pub mod error;
pub mod producer;
pub mod runner;

pub use command_context::CommandContext;
pub use producer::CloudEventProducer;
pub use runner::{CommandOutcome, CommandRunner};
