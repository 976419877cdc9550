//! 事件聚合器（EventsAggregator）
//!
//! 按执行上下文缓冲已转换的云事件，提供与工作单元生命周期绑定的
//! 冲刷/丢弃操作，保证事件对外的"全有或全无"可见性：
//! - `add`：按到达顺序追加到当前上下文的缓冲区；
//! - `flush`：提交时原子取走整个缓冲区，按原始顺序返回；
//! - `discard`：回滚时原子丢弃缓冲区，不产生任何对外可见结果。
//!
//! 共享可变状态仅有上下文ID到缓冲区的映射（DashMap 分片锁）；
//! 同一上下文内的 `add` 由工作单元的单线程执行模型保证不并发，
//! 不同上下文之间互不竞争。任何操作都不跨越发布调用持锁。

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::event::CloudEvent;

/// 执行上下文ID
///
/// 标识一个工作单元（一次引擎命令/事务）的不透明标识，
/// 由引擎或执行边界分配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionContextId(Uuid);

impl ExecutionContextId {
    /// 分配一个新的上下文ID
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ExecutionContextId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ExecutionContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 事件聚合器
///
/// 一个实例服务所有并发工作单元；每个上下文持有独立的有序缓冲区。
/// 上下文在 `begin` 时登记，在 `flush`/`discard` 时销毁。
#[derive(Debug, Default)]
pub struct EventsAggregator {
    buffers: DashMap<ExecutionContextId, Vec<CloudEvent>>,
}

impl EventsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个活动上下文并分配空缓冲区（已存在则保留原缓冲区）
    pub fn begin(&self, context: ExecutionContextId) {
        self.buffers.entry(context).or_default();
    }

    /// 将事件追加到活动上下文的缓冲区末尾。
    ///
    /// 不阻塞、正常情况下不失败。
    ///
    /// # Panics
    ///
    /// 上下文不处于活动状态（从未 `begin`，或已被 `flush`/`discard`）
    /// 属于调用方的契约违反，立即 panic 而非静默丢弃，
    /// 以保持顺序/原子性不变量可验证。
    pub fn add(&self, context: &ExecutionContextId, event: CloudEvent) {
        let Some(mut buffer) = self.buffers.get_mut(context) else {
            panic!("add called outside an active execution context: {context}");
        };
        buffer.push(event);
    }

    /// 原子取走上下文的缓冲区并销毁该上下文，按到达顺序返回事件。
    ///
    /// 对已冲刷（不存在）的上下文返回空序列而非错误。
    pub fn flush(&self, context: &ExecutionContextId) -> Vec<CloudEvent> {
        self.buffers
            .remove(context)
            .map(|(_, buffer)| buffer)
            .unwrap_or_default()
    }

    /// 原子丢弃上下文的缓冲区，不产生任何发射
    pub fn discard(&self, context: &ExecutionContextId) {
        self.buffers.remove(context);
    }

    /// 上下文是否处于活动状态
    pub fn is_active(&self, context: &ExecutionContextId) -> bool {
        self.buffers.contains_key(context)
    }

    /// 当前活动上下文数量
    pub fn active_contexts(&self) -> usize {
        self.buffers.len()
    }
}
