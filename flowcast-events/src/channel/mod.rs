//! 通道子系统（channel）
//!
//! 提供事件批次对外发布的抽象与实现：
//! - `ChannelProducer`：统一发布接口，一次逻辑发送一个有序批次；
//! - `InMemoryChannel`：基于 broadcast 的内存实现，用于测试与本地开发；
//! - `wire`：批次的线格式编解码。
//!
//! 该模块仅定义协议与最小实现，不绑定具体消息系统。

mod inmemory;
mod producer;
pub mod wire;

pub use inmemory::InMemoryChannel;
pub use producer::ChannelProducer;
