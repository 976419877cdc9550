use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 流程实例状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStatus {
    Running,
    Suspended,
    Completed,
    Cancelled,
}

/// 流程实例（ProcessInstance）实体
///
/// 与 `Task` 一样属于引擎的活动对象，事件发布前需要复制快照。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstance {
    /// 流程实例ID
    id: String,
    /// 流程定义ID
    process_definition_id: String,
    /// 业务键（用于关联外部业务单据）
    business_key: Option<String>,
    /// 实例名称
    name: Option<String>,
    /// 实例状态
    #[builder(default = ProcessStatus::Running)]
    status: ProcessStatus,
    /// 发起人
    initiator: Option<String>,
    /// 启动时间
    #[builder(default = Utc::now())]
    start_date: DateTime<Utc>,
}

impl ProcessInstance {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn process_definition_id(&self) -> &str {
        &self.process_definition_id
    }

    pub fn business_key(&self) -> Option<&str> {
        self.business_key.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn initiator(&self) -> Option<&str> {
        self.initiator.as_deref()
    }

    pub fn start_date(&self) -> &DateTime<Utc> {
        &self.start_date
    }

    /// 完成流程
    pub fn complete(&mut self) {
        self.status = ProcessStatus::Completed;
    }

    /// 取消流程
    pub fn cancel(&mut self) {
        self.status = ProcessStatus::Cancelled;
    }

    /// 挂起流程
    pub fn suspend(&mut self) {
        self.status = ProcessStatus::Suspended;
    }

    /// 恢复流程
    pub fn resume(&mut self) {
        self.status = ProcessStatus::Running;
    }
}
