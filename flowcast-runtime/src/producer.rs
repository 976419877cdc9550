//! 监听适配器（CloudEventProducer）
//!
//! 注册到引擎监听分发的薄适配层：收到原始事件即转换并交给聚合器，
//! 不做其他事情。一个适配器覆盖全部事件种类（由转换器的穷尽
//! `match` 保证），正常输入下不会失败。

use std::sync::Arc;

use flowcast_events::aggregator::{EventsAggregator, ExecutionContextId};
use flowcast_events::event::{RuntimeEvent, ToCloudEventConverter};

/// 把引擎原始事件转换为云事件并送入聚合器的监听适配器
#[derive(Clone)]
pub struct CloudEventProducer {
    converter: ToCloudEventConverter,
    aggregator: Arc<EventsAggregator>,
}

impl CloudEventProducer {
    pub fn new(aggregator: Arc<EventsAggregator>) -> Self {
        Self {
            converter: ToCloudEventConverter::new(),
            aggregator,
        }
    }

    /// 引擎监听回调：转换并按到达顺序追加到上下文缓冲区。
    /// 返回值被引擎忽略；上下文必须处于活动状态（否则聚合器 panic）。
    pub fn on_event(&self, context: &ExecutionContextId, event: RuntimeEvent<'_>) {
        self.aggregator.add(context, self.converter.convert(event));
    }
}
