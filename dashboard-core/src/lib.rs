//! Logic lõi của bảng điều khiển hồ sơ bệnh nhân: mô hình dữ liệu, bộ lọc và trạng thái hiển thị.

mod filter;
mod view_state;

#[cfg(test)]
mod test_support;

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use filter::{filter_records, record_matches};
pub use view_state::{DashboardTab, ViewAction, ViewState};

/// Cấu hình hiển thị của bảng điều khiển.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Số hồ sơ hiển thị trong mục "gần đây" ở tab tổng quan.
    pub recent_records_limit: usize,
    /// Tab được chọn khi bảng điều khiển vừa mở.
    pub default_tab: DashboardTab,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_records_limit: 3,
            default_tab: DashboardTab::Overview,
        }
    }
}

impl DashboardConfig {
    /// Trạng thái hiển thị ban đầu theo cấu hình.
    pub fn initial_state(&self) -> ViewState {
        ViewState::with_tab(self.default_tab)
    }
}

/// Trạng thái điều trị của một hồ sơ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Resolved,
    Chronic,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Resolved => "resolved",
            RecordStatus::Chronic => "chronic",
        }
    }

    /// Nhóm hiển thị tương ứng (chỉ dùng để chọn kiểu trình bày).
    pub fn category(self) -> StatusCategory {
        match self {
            RecordStatus::Active => StatusCategory::InProgress,
            RecordStatus::Resolved => StatusCategory::Resolved,
            RecordStatus::Chronic => StatusCategory::OngoingChronic,
        }
    }
}

/// Nhóm trình bày của trạng thái hồ sơ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    InProgress,
    Resolved,
    OngoingChronic,
}

impl StatusCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::InProgress => "in-progress",
            StatusCategory::Resolved => "resolved",
            StatusCategory::OngoingChronic => "ongoing-chronic",
        }
    }
}

/// Mức độ nghiêm trọng của hồ sơ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordSeverity {
    Low,
    Medium,
    High,
}

impl RecordSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordSeverity::Low => "low",
            RecordSeverity::Medium => "medium",
            RecordSeverity::High => "high",
        }
    }

    /// Nhãn viết hoa chữ đầu, ví dụ `Medium`.
    pub fn display_label(self) -> &'static str {
        match self {
            RecordSeverity::Low => "Low",
            RecordSeverity::Medium => "Medium",
            RecordSeverity::High => "High",
        }
    }

    pub fn intensity(self) -> IntensityLevel {
        match self {
            RecordSeverity::Low => IntensityLevel::Low,
            RecordSeverity::Medium => IntensityLevel::Medium,
            RecordSeverity::High => IntensityLevel::High,
        }
    }
}

/// Cường độ hiển thị của mức độ nghiêm trọng.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
}

impl IntensityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }
}

/// Thông tin hành chính và tiền sử của bệnh nhân.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    pub emergency_contact: String,
    pub last_visit: NaiveDate,
}

/// Một lần khám/điều trị trong hồ sơ bệnh án.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: String,
    pub date: NaiveDate,
    pub condition: String,
    pub diagnosis: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub treatment: String,
    pub status: RecordStatus,
    pub severity: RecordSeverity,
}

impl MedicalRecord {
    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}

/// Các con số tổng hợp trên toàn bộ hồ sơ (không phụ thuộc bộ lọc tìm kiếm).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub total: usize,
    pub active: usize,
    pub resolved: usize,
    pub chronic: usize,
}

impl RecordSummary {
    pub fn from_records(records: &[MedicalRecord]) -> Self {
        let count = |status: RecordStatus| records.iter().filter(|r| r.status == status).count();
        Self {
            total: records.len(),
            active: count(RecordStatus::Active),
            resolved: count(RecordStatus::Resolved),
            chronic: count(RecordStatus::Chronic),
        }
    }
}

/// Hồ sơ bệnh nhân cùng danh sách bệnh án, đã kiểm tra tính duy nhất của mã hồ sơ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "DashboardParts")]
pub struct DashboardData {
    profile: PatientProfile,
    records: Vec<MedicalRecord>,
}

#[derive(Deserialize)]
struct DashboardParts {
    profile: PatientProfile,
    #[serde(default)]
    records: Vec<MedicalRecord>,
}

impl TryFrom<DashboardParts> for DashboardData {
    type Error = DashboardError;

    fn try_from(parts: DashboardParts) -> Result<Self, Self::Error> {
        DashboardData::new(parts.profile, parts.records)
    }
}

impl DashboardData {
    /// Dựng dữ liệu bảng điều khiển, giữ nguyên thứ tự hồ sơ.
    pub fn new(profile: PatientProfile, records: Vec<MedicalRecord>) -> DashboardResult<Self> {
        if profile.id.trim().is_empty() {
            return Err(DashboardError::MissingData("profile.id".into()));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(DashboardError::MissingData("record.id".into()));
            }
            if !seen.insert(record.id.as_str()) {
                tracing::warn!(record_id = %record.id, "bỏ qua bộ dữ liệu có mã hồ sơ trùng");
                return Err(DashboardError::DuplicateRecordId(record.id.clone()));
            }
        }

        Ok(Self { profile, records })
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    /// Danh sách hồ sơ theo thứ tự nguồn.
    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from_records(&self.records)
    }

    /// `limit` hồ sơ đầu tiên theo thứ tự nguồn.
    pub fn recent_records(&self, limit: usize) -> &[MedicalRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn visible_records(&self, state: &ViewState) -> Vec<&MedicalRecord> {
        filter_records(&self.records, &state.search_term)
    }

    /// Ảnh chụp toàn bộ giá trị dẫn xuất cho một trạng thái hiển thị.
    pub fn snapshot(&self, state: &ViewState, config: &DashboardConfig) -> DashboardSnapshot {
        DashboardSnapshot {
            active_tab: state.active_tab,
            search_term: state.search_term.clone(),
            profile: self.profile.clone(),
            summary: self.summary(),
            recent_records: self.recent_records(config.recent_records_limit).to_vec(),
            visible_records: self.visible_records(state).into_iter().cloned().collect(),
        }
    }
}

/// Kết quả dẫn xuất đã sẵn sàng để hiển thị hoặc serialize sang JS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub active_tab: DashboardTab,
    pub search_term: String,
    pub profile: PatientProfile,
    pub summary: RecordSummary,
    pub recent_records: Vec<MedicalRecord>,
    pub visible_records: Vec<MedicalRecord>,
}

/// Nguồn cung cấp hồ sơ bệnh nhân cho bảng điều khiển.
pub trait DashboardProvider {
    fn load(&self) -> DashboardResult<DashboardData>;
}

/// Lỗi chung của bảng điều khiển.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Trạng thái không hợp lệ: {0}")]
    InvalidState(String),
    #[error("Mã hồ sơ bị trùng: {0}")]
    DuplicateRecordId(String),
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu: {0}")]
    MissingData(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_dashboard, sample_profile, sample_records};

    #[test]
    fn duplicate_record_ids_are_rejected() {
        let mut records = sample_records();
        records[2].id = records[0].id.clone();

        let err = DashboardData::new(sample_profile(), records).unwrap_err();
        assert_eq!(err, DashboardError::DuplicateRecordId("1".into()));
    }

    #[test]
    fn blank_record_id_is_missing_data() {
        let mut records = sample_records();
        records[1].id = "  ".into();

        let err = DashboardData::new(sample_profile(), records).unwrap_err();
        assert!(matches!(err, DashboardError::MissingData(_)));
    }

    #[test]
    fn summary_counts_whole_collection() {
        let dashboard = sample_dashboard();
        let summary = dashboard.summary();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.chronic, 1);
        assert_eq!(summary.active, 0);
    }

    #[test]
    fn summary_ignores_search_term() {
        let dashboard = sample_dashboard();
        let config = DashboardConfig::default();
        let unfiltered = dashboard.snapshot(&ViewState::default(), &config);

        let mut state = ViewState::default();
        state.set_search_term("gastro");
        let filtered = dashboard.snapshot(&state, &config);

        assert_eq!(filtered.visible_records.len(), 1);
        assert_eq!(filtered.summary, unfiltered.summary);
        assert_eq!(filtered.summary.resolved, 2);
        assert_eq!(filtered.summary.chronic, 1);
    }

    #[test]
    fn recent_records_respects_limit() {
        let dashboard = sample_dashboard();

        let ids: Vec<_> = dashboard.recent_records(2).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(dashboard.recent_records(10).len(), 3);
        assert!(dashboard.recent_records(0).is_empty());
    }

    #[test]
    fn snapshot_follows_view_state() {
        let dashboard = sample_dashboard();
        let state = ViewState::default()
            .apply(ViewAction::SelectTab {
                tab: DashboardTab::Records,
            })
            .apply(ViewAction::SetSearchTerm {
                term: "Viral".into(),
            });

        let snapshot = dashboard.snapshot(&state, &DashboardConfig::default());

        assert_eq!(snapshot.active_tab, DashboardTab::Records);
        assert_eq!(snapshot.search_term, "Viral");
        let ids: Vec<_> = snapshot.visible_records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(snapshot.recent_records.len(), 3);
    }

    #[test]
    fn config_initial_state_uses_default_tab() {
        let config = DashboardConfig {
            default_tab: DashboardTab::Analytics,
            ..DashboardConfig::default()
        };

        let state = config.initial_state();
        assert_eq!(state.active_tab, DashboardTab::Analytics);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn presentation_mappings_cover_every_value() {
        assert_eq!(RecordStatus::Active.category(), StatusCategory::InProgress);
        assert_eq!(RecordStatus::Resolved.category(), StatusCategory::Resolved);
        assert_eq!(RecordStatus::Chronic.category(), StatusCategory::OngoingChronic);
        assert_eq!(RecordStatus::Chronic.category().as_str(), "ongoing-chronic");

        assert_eq!(RecordSeverity::Low.intensity(), IntensityLevel::Low);
        assert_eq!(RecordSeverity::High.intensity().as_str(), "high");
        assert_eq!(RecordSeverity::Medium.display_label(), "Medium");
    }

    #[test]
    fn deserialization_uses_iso_dates_and_closed_enums() {
        let json = serde_json::json!({
            "profile": {
                "id": "p-1",
                "name": "Jane Roe",
                "age": 41,
                "gender": "Female",
                "blood_type": "A-",
                "emergency_contact": "+1 (555) 000-0000",
                "last_visit": "2024-02-01"
            },
            "records": [{
                "id": "r-1",
                "date": "2024-01-30",
                "condition": "Migraine",
                "diagnosis": "Tension-type headache",
                "treatment": "Analgesics",
                "status": "active",
                "severity": "high"
            }]
        });

        let dashboard: DashboardData = serde_json::from_value(json).expect("dữ liệu hợp lệ");
        let record = &dashboard.records()[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(record.status, RecordStatus::Active);
        assert!(record.symptoms.is_empty());
        assert!(dashboard.profile().allergies.is_empty());
    }

    #[test]
    fn deserialization_rejects_unknown_status() {
        let mut value = serde_json::to_value(sample_dashboard()).unwrap();
        value["records"][0]["status"] = serde_json::json!("pending");

        assert!(serde_json::from_value::<DashboardData>(value).is_err());
    }

    #[test]
    fn deserialization_enforces_unique_ids() {
        let mut value = serde_json::to_value(sample_dashboard()).unwrap();
        value["records"][1]["id"] = serde_json::json!("1");

        let err = serde_json::from_value::<DashboardData>(value).unwrap_err();
        assert!(err.to_string().contains("Mã hồ sơ bị trùng"));
    }
}
