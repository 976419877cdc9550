//! 命令上下文（CommandContext）
//!
//! 工作单元的执行边界守卫：打开时向聚合器登记执行上下文，
//! 结束时在提交/回滚之间二选一——`complete` 冲刷并发布，
//! `abort` 丢弃。两者都消费 `self`，"恰好其一、不多不少"
//! 由所有权保证。

use std::sync::Arc;

use flowcast_events::aggregator::{EventsAggregator, ExecutionContextId};
use flowcast_events::channel::ChannelProducer;
use flowcast_events::event::CloudEvent;

use crate::error::RuntimeResult;

/// 一个工作单元的执行边界。
///
/// 生命周期内引擎触发的事件经监听适配器进入聚合器缓冲区；
/// 只有 `complete` 之后外部消费者才能观察到其中任何事件。
pub struct CommandContext {
    id: ExecutionContextId,
    aggregator: Arc<EventsAggregator>,
    channel: Arc<dyn ChannelProducer>,
    closed: bool,
}

impl CommandContext {
    /// 以新分配的上下文ID打开一个工作单元
    pub fn open(aggregator: Arc<EventsAggregator>, channel: Arc<dyn ChannelProducer>) -> Self {
        Self::with_id(ExecutionContextId::fresh(), aggregator, channel)
    }

    /// 以引擎分配的上下文ID打开一个工作单元
    pub fn with_id(
        id: ExecutionContextId,
        aggregator: Arc<EventsAggregator>,
        channel: Arc<dyn ChannelProducer>,
    ) -> Self {
        aggregator.begin(id);
        Self {
            id,
            aggregator,
            channel,
            closed: false,
        }
    }

    pub fn id(&self) -> ExecutionContextId {
        self.id
    }

    /// 提交：冲刷缓冲区并把有序批次交给通道发布，返回已发布的批次。
    ///
    /// 发布发生在 `flush` 返回之后，不持有聚合器的任何锁。
    /// 发布失败时批次已离开缓冲区，不回填——错误原样上抛，
    /// 整批重试与否由调用方决定（至少一次发射的已知权衡）。
    pub async fn complete(mut self) -> RuntimeResult<Vec<CloudEvent>> {
        self.closed = true;
        let events = self.aggregator.flush(&self.id);
        if events.is_empty() {
            tracing::debug!(context = %self.id, "commit with empty event buffer");
            return Ok(events);
        }

        if let Err(err) = self.channel.send(&events).await {
            tracing::error!(context = %self.id, error = %err, "publish failed after flush");
            return Err(err.into());
        }

        tracing::debug!(context = %self.id, count = events.len(), "published event batch");
        Ok(events)
    }

    /// 回滚：丢弃缓冲区，外部不产生任何可观察结果
    pub fn abort(mut self) {
        self.closed = true;
        self.aggregator.discard(&self.id);
        tracing::debug!(context = %self.id, "discarded event buffer on rollback");
    }
}

impl Drop for CommandContext {
    fn drop(&mut self) {
        // 未显式关闭的上下文等价于从未发生的工作单元
        if !self.closed {
            self.aggregator.discard(&self.id);
        }
    }
}
