//! 云事件核心库（flowcast-events）
//!
//! 流程引擎生命周期事件的聚合与转换管线核心：
//! - 实体与快照建模（`model`）
//! - 原始事件/云事件模型与穷尽转换（`event`）
//! - 按执行上下文缓冲、随工作单元提交冲刷的聚合器（`aggregator`）
//! - 对外发布的通道抽象与内存实现（`channel`）
//!
//! 本 crate 不绑定具体引擎与消息传输，仅定义核心语义与最小必要的错误类型，
//! 以便在不同基础设施上进行适配实现。
//!
//! 典型用法：
//! 1. 工作单元开始时向 `EventsAggregator` 登记执行上下文；
//! 2. 引擎每触发一条原始事件，经 `ToCloudEventConverter` 转换后 `add` 入缓冲区；
//! 3. 提交时 `flush` 取走有序批次并交给 `ChannelProducer` 发布；
//! 4. 回滚时 `discard`，外部消费者观察不到任何部分序列。
//!
pub mod aggregator;
#[cfg(feature = "channel")]
pub mod channel;
pub mod error;
pub mod event;
pub mod model;
