use std::sync::Arc;

use flowcast_events::aggregator::EventsAggregator;
use flowcast_events::channel::{ChannelProducer, InMemoryChannel};
use flowcast_events::error::{EventsError, EventsResult};
use flowcast_events::event::{CloudEvent, EventType, RuntimeEvent};
use flowcast_events::model::Task;
use flowcast_runtime::error::RuntimeError;
use flowcast_runtime::{CommandContext, CommandRunner};
use futures_util::StreamExt;

fn task(id: &str) -> Task {
    Task::builder()
        .id(id.to_string())
        .name("review".to_string())
        .process_instance_id("p-1".to_string())
        .build()
}

/// 场景：C1 内触发 [TaskCreated(t1), TaskAssigned(t1,"alice")] → 提交，
/// 发布批次为 [TASK_CREATED{t1}, TASK_ASSIGNED{t1, assignee=alice}]，顺序不变。
#[tokio::test]
async fn commit_publishes_ordered_batch() {
    let aggregator = Arc::new(EventsAggregator::new());
    let channel = Arc::new(InMemoryChannel::new(16));
    let mut stream = channel.subscribe();
    let runner = CommandRunner::new(aggregator, channel);

    let outcome = runner
        .execute(|producer, ctx| {
            let mut t1 = task("t1");
            producer.on_event(ctx, RuntimeEvent::TaskCreated(&t1));
            t1.assign("alice");
            producer.on_event(ctx, RuntimeEvent::TaskAssigned(&t1));
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(outcome.published.len(), 2);

    let batch = stream.next().await.unwrap().unwrap();
    assert_eq!(batch, outcome.published);
    assert_eq!(batch[0].event_type(), EventType::TaskCreated);
    assert_eq!(batch[0].entity().as_task().unwrap().id(), "t1");
    assert_eq!(batch[1].event_type(), EventType::TaskAssigned);
    assert_eq!(
        batch[1].entity().as_task().unwrap().assignee(),
        Some("alice")
    );
}

/// 场景：C2 内触发 [TaskCreated(t2)] → 回滚，通道永远看不到 t2 的任何事件。
#[tokio::test]
async fn rollback_hands_nothing_to_the_channel() {
    let aggregator = Arc::new(EventsAggregator::new());
    let channel = Arc::new(InMemoryChannel::new(16));
    let mut stream = channel.subscribe();
    let runner = CommandRunner::new(aggregator.clone(), channel.clone());

    let err = runner
        .execute::<(), _>(|producer, ctx| {
            let t2 = task("t2");
            producer.on_event(ctx, RuntimeEvent::TaskCreated(&t2));
            anyhow::bail!("constraint violated")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Command { .. }));
    assert_eq!(aggregator.active_contexts(), 0);

    // 之后一次成功提交作为哨兵，确认流里第一条就是它而非 t2 的残留
    runner
        .execute(|producer, ctx| {
            let t3 = task("t3");
            producer.on_event(ctx, RuntimeEvent::TaskCreated(&t3));
            Ok(())
        })
        .await
        .unwrap();

    let batch = stream.next().await.unwrap().unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].entity().as_task().unwrap().id(), "t3");
}

/// 场景：两个上下文各 1 条事件"同时"提交 → 恰好两次发送，
/// 各自只含本上下文的事件，绝不合并。
#[tokio::test]
async fn concurrent_commits_never_merge_batches() {
    let aggregator = Arc::new(EventsAggregator::new());
    let channel = Arc::new(InMemoryChannel::new(16));
    let mut stream = channel.subscribe();

    let mut handles = Vec::new();
    for name in ["c1", "c2"] {
        let runner = CommandRunner::new(aggregator.clone(), channel.clone());
        handles.push(tokio::spawn(async move {
            runner
                .execute(|producer, ctx| {
                    let t = task(&format!("task-{name}"));
                    producer.on_event(ctx, RuntimeEvent::TaskCreated(&t));
                    Ok(())
                })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let first = stream.next().await.unwrap().unwrap();
    let second = stream.next().await.unwrap().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);

    let mut ids = vec![
        first[0].entity().entity_id().to_string(),
        second[0].entity().entity_id().to_string(),
    ];
    ids.sort();
    assert_eq!(ids, vec!["task-c1".to_string(), "task-c2".to_string()]);
}

struct FailingChannel;

#[async_trait::async_trait]
impl ChannelProducer for FailingChannel {
    async fn send(&self, _events: &[CloudEvent]) -> EventsResult<()> {
        Err(EventsError::channel("broker unavailable"))
    }
}

/// 发布失败上抛给调用方；批次不回填，后续 flush 为空。
#[tokio::test]
async fn publish_failure_is_surfaced_without_rebuffering() {
    let aggregator = Arc::new(EventsAggregator::new());
    let ctx = CommandContext::open(aggregator.clone(), Arc::new(FailingChannel));
    let id = ctx.id();

    let converter = flowcast_events::event::ToCloudEventConverter::new();
    let t = task("t-5");
    aggregator.add(&id, converter.convert(RuntimeEvent::TaskCreated(&t)));

    let err = ctx.complete().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Events(EventsError::Channel { .. })
    ));
    assert!(aggregator.flush(&id).is_empty());
}
