use serde::{Deserialize, Serialize};

// Wire keys are the UI header labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderInfo {
    #[serde(rename = "内镜号")]
    pub scope_number: String,
    #[serde(rename = "清洗次数")]
    pub wash_count: String,
    #[serde(rename = "上次清洗")]
    pub last_wash: String,
    #[serde(rename = "所属科室")]
    pub department: String,
    #[serde(rename = "上次病人")]
    pub last_patient: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WashStep {
    pub id: u32,
    pub name: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInfo {
    pub message: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub name: String,
    pub checked: bool,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    pub header_info: HeaderInfo,
    pub steps: Vec<WashStep>,
    pub review_info: ReviewInfo,
    pub review_records: Vec<ReviewRecord>,
}

impl MonitorSnapshot {
    pub fn active_step(&self) -> Option<&WashStep> {
        self.steps.iter().find(|s| s.status == StepStatus::Active)
    }

    pub fn progress(&self) -> (usize, usize) {
        let done = self
            .steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count();
        (done, self.steps.len())
    }
}
