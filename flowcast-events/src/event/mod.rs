//! 事件模型与转换
//!
//! 定义引擎原始事件（`RuntimeEvent`）、对外发布的云事件（`CloudEvent`）、
//! 事件类型枚举（`EventType`）以及两者之间的穷尽转换器。

mod cloud_event;
mod convert;
mod event_type;
mod runtime_event;

pub use cloud_event::CloudEvent;
pub use convert::ToCloudEventConverter;
pub use event_type::EventType;
pub use runtime_event::RuntimeEvent;
