//! Nguồn dữ liệu cho bảng điều khiển: bộ dữ liệu mẫu nhúng sẵn và nạp từ JSON.

use std::str::FromStr;

use dashboard_core::{
    DashboardData, DashboardError, DashboardProvider, DashboardResult, MedicalRecord,
    PatientProfile,
};
use serde::Deserialize;
use serde_json::Value;

/// Bộ dữ liệu mẫu của bệnh nhân `12345`.
const MOCK_DASHBOARD_JSON: &str = include_str!("../data/mock_dashboard.json");

/// Đọc dashboard từ chuỗi JSON dạng `{ "profile": {...}, "records": [...] }`.
pub fn load_dashboard_str(input: &str) -> DashboardResult<DashboardData> {
    let value: Value =
        serde_json::from_str(input).map_err(|err| DashboardError::Parse(err.to_string()))?;
    load_dashboard_value(&value)
}

pub fn load_dashboard_value(value: &Value) -> DashboardResult<DashboardData> {
    let profile_value = value
        .get("profile")
        .ok_or_else(|| DashboardError::MissingData("profile".into()))?;
    let profile = PatientProfile::deserialize(profile_value)
        .map_err(|err| DashboardError::Parse(format!("profile: {err}")))?;

    let records = match value.get("records") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => parse_records(entries)?,
        Some(_) => {
            return Err(DashboardError::Parse(
                "records phải là một mảng".to_string(),
            ))
        }
    };

    let dashboard = DashboardData::new(profile, records)?;
    tracing::debug!(
        patient_id = %dashboard.profile().id,
        records = dashboard.records().len(),
        "đã nạp dữ liệu dashboard"
    );
    Ok(dashboard)
}

fn parse_records(entries: &[Value]) -> DashboardResult<Vec<MedicalRecord>> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            MedicalRecord::deserialize(entry)
                .map_err(|err| DashboardError::Parse(format!("records[{idx}]: {err}")))
        })
        .collect()
}

/// Dữ liệu mẫu biên dịch sẵn vào binary.
pub fn mock_dashboard() -> DashboardResult<DashboardData> {
    load_dashboard_str(MOCK_DASHBOARD_JSON)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockDashboardProvider;

impl DashboardProvider for MockDashboardProvider {
    fn load(&self) -> DashboardResult<DashboardData> {
        mock_dashboard()
    }
}

/// Provider bọc một tài liệu JSON đã có sẵn (file, phản hồi API...).
#[derive(Debug, Clone)]
pub struct JsonDashboardProvider {
    document: Value,
}

impl JsonDashboardProvider {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }
}

impl FromStr for JsonDashboardProvider {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(input)
            .map(Self::from_value)
            .map_err(|err| DashboardError::Parse(err.to_string()))
    }
}

impl DashboardProvider for JsonDashboardProvider {
    fn load(&self) -> DashboardResult<DashboardData> {
        load_dashboard_value(&self.document)
    }
}
