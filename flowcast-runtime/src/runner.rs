//! 命令运行器（CommandRunner）
//!
//! 把"执行命令 → 提交冲刷发布 / 失败回滚丢弃"的标准流程编排为
//! 一个入口：命令闭包代表一次引擎命令，执行期间通过
//! `CloudEventProducer` 触发事件；闭包成功则提交，失败则回滚。

use std::sync::Arc;

use flowcast_events::aggregator::{EventsAggregator, ExecutionContextId};
use flowcast_events::channel::ChannelProducer;
use flowcast_events::event::CloudEvent;

use crate::command_context::CommandContext;
use crate::error::{RuntimeError, RuntimeResult};
use crate::producer::CloudEventProducer;

/// 命令执行结果：命令返回值与已发布的事件批次
#[derive(Debug)]
pub struct CommandOutcome<T> {
    pub value: T,
    pub published: Vec<CloudEvent>,
}

/// 面向应用层的命令编排器
pub struct CommandRunner {
    aggregator: Arc<EventsAggregator>,
    channel: Arc<dyn ChannelProducer>,
}

impl CommandRunner {
    pub fn new(aggregator: Arc<EventsAggregator>, channel: Arc<dyn ChannelProducer>) -> Self {
        Self {
            aggregator,
            channel,
        }
    }

    pub fn aggregator(&self) -> &Arc<EventsAggregator> {
        &self.aggregator
    }

    /// 执行一条命令：
    /// 1. 打开命令上下文并登记执行上下文；
    /// 2. 运行闭包，期间触发的事件进入该上下文的缓冲区；
    /// 3. 闭包成功 → 提交（冲刷并发布），失败 → 回滚（丢弃）。
    pub async fn execute<T, F>(&self, command: F) -> RuntimeResult<CommandOutcome<T>>
    where
        F: FnOnce(&CloudEventProducer, &ExecutionContextId) -> anyhow::Result<T>,
    {
        let ctx = CommandContext::open(self.aggregator.clone(), self.channel.clone());
        let producer = CloudEventProducer::new(self.aggregator.clone());
        let id = ctx.id();

        match command(&producer, &id) {
            Ok(value) => {
                let published = ctx.complete().await?;
                Ok(CommandOutcome { value, published })
            }
            Err(err) => {
                ctx.abort();
                Err(RuntimeError::Command {
                    reason: err.to_string(),
                })
            }
        }
    }
}
