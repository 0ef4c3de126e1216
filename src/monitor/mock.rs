use super::types::{
    HeaderInfo, MonitorSnapshot, ReviewInfo, ReviewRecord, StepStatus, WashStep,
};

const STEPS: &[(u32, &str, StepStatus)] = &[
    (1, "测漏", StepStatus::Completed),
    (2, "清洗", StepStatus::Completed),
    (3, "漂洗", StepStatus::Active),
    (4, "消毒", StepStatus::Pending),
    (5, "干燥", StepStatus::Pending),
];

pub fn snapshot() -> MonitorSnapshot {
    MonitorSnapshot {
        header_info: HeaderInfo {
            scope_number: "AL4876".to_string(),
            wash_count: "32".to_string(),
            last_wash: "12-23 9:14 李明".to_string(),
            department: "外科4科".to_string(),
            last_patient: "李雄 Q76543".to_string(),
        },
        steps: STEPS
            .iter()
            .map(|(id, name, status)| WashStep {
                id: *id,
                name: name.to_string(),
                status: *status,
            })
            .collect(),
        review_info: ReviewInfo {
            message: "提示信息".to_string(),
            note: "漂洗操作不规范".to_string(),
        },
        review_records: vec![
            ReviewRecord {
                name: "测漏".to_string(),
                checked: true,
                time: "12-23 10:07 李明".to_string(),
            },
            ReviewRecord {
                name: "清洗".to_string(),
                checked: true,
                time: "12-23 10:18 李明".to_string(),
            },
        ],
    }
}
