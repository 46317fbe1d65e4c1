//! Bộ dữ liệu mẫu dùng chung cho test.

use chrono::NaiveDate;

use crate::{DashboardData, MedicalRecord, PatientProfile, RecordSeverity, RecordStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("ngày hợp lệ")
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(crate) fn sample_profile() -> PatientProfile {
    PatientProfile {
        id: "12345".into(),
        name: "John Smith".into(),
        age: 34,
        gender: "Male".into(),
        blood_type: "O+".into(),
        allergies: labels(&["Penicillin", "Shellfish"]),
        chronic_conditions: labels(&["Hypertension"]),
        emergency_contact: "+1 (555) 123-4567".into(),
        last_visit: date(2024, 1, 15),
    }
}

pub(crate) fn record(
    id: &str,
    condition: &str,
    diagnosis: &str,
    status: RecordStatus,
    severity: RecordSeverity,
) -> MedicalRecord {
    MedicalRecord {
        id: id.into(),
        date: date(2024, 1, 1),
        condition: condition.into(),
        diagnosis: diagnosis.into(),
        symptoms: Vec::new(),
        treatment: String::new(),
        status,
        severity,
    }
}

pub(crate) fn sample_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            date: date(2024, 1, 15),
            symptoms: labels(&["Runny nose", "Cough", "Mild fever"]),
            treatment: "Rest, fluids, OTC pain relievers".into(),
            ..record(
                "1",
                "Common Cold",
                "Viral upper respiratory infection",
                RecordStatus::Resolved,
                RecordSeverity::Low,
            )
        },
        MedicalRecord {
            date: date(2024, 1, 8),
            symptoms: labels(&["No symptoms"]),
            treatment: "Continue current medication".into(),
            ..record(
                "2",
                "Hypertension Follow-up",
                "Essential hypertension - controlled",
                RecordStatus::Chronic,
                RecordSeverity::Medium,
            )
        },
        MedicalRecord {
            date: date(2023, 12, 22),
            symptoms: labels(&["Nausea", "Vomiting", "Diarrhea"]),
            treatment: "BRAT diet, hydration, rest".into(),
            ..record(
                "3",
                "Gastroenteritis",
                "Viral gastroenteritis",
                RecordStatus::Resolved,
                RecordSeverity::Medium,
            )
        },
    ]
}

pub(crate) fn sample_dashboard() -> DashboardData {
    DashboardData::new(sample_profile(), sample_records()).expect("bộ dữ liệu mẫu hợp lệ")
}
