use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Created,
    Assigned,
    Suspended,
    Completed,
    Cancelled,
}

/// 任务（Task）实体
///
/// 引擎在命令执行期间持有并持续修改的活动对象；
/// 对外发布前必须通过快照复制固定某一时刻的状态。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务ID
    id: String,
    /// 任务名称
    name: String,
    /// 任务描述
    description: Option<String>,
    /// 当前办理人
    assignee: Option<String>,
    /// 任务状态
    #[builder(default = TaskStatus::Created)]
    status: TaskStatus,
    /// 所属流程实例ID
    process_instance_id: String,
    /// 优先级
    #[builder(default = 50)]
    priority: i32,
    /// 到期时间
    due_date: Option<DateTime<Utc>>,
    /// 创建时间
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl Task {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn process_instance_id(&self) -> &str {
        &self.process_instance_id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn due_date(&self) -> Option<&DateTime<Utc>> {
        self.due_date.as_ref()
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    /// 指派办理人，状态转为 `Assigned`
    pub fn assign(&mut self, assignee: impl Into<String>) {
        self.assignee = Some(assignee.into());
        self.status = TaskStatus::Assigned;
    }

    /// 完成任务
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// 取消任务
    pub fn cancel(&mut self) {
        self.status = TaskStatus::Cancelled;
    }

    /// 挂起任务
    pub fn suspend(&mut self) {
        self.status = TaskStatus::Suspended;
    }

    /// 更新任务名称/描述（对应跨领域的 `TASK_UPDATED` 事件）
    pub fn update(&mut self, name: impl Into<String>, description: Option<String>) {
        self.name = name.into();
        self.description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_and_transitions() {
        let mut task = Task::builder()
            .id("t-1".to_string())
            .name("review".to_string())
            .process_instance_id("p-1".to_string())
            .build();

        assert_eq!(task.status(), TaskStatus::Created);
        assert_eq!(task.priority(), 50);
        assert!(task.assignee().is_none());

        task.assign("alice");
        assert_eq!(task.status(), TaskStatus::Assigned);
        assert_eq!(task.assignee(), Some("alice"));

        task.complete();
        assert_eq!(task.status(), TaskStatus::Completed);
    }
}
