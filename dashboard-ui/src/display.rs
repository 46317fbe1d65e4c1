//! Định dạng chuỗi hiển thị, độc lập với Yew để test được trên native.

use chrono::NaiveDate;
use dashboard_core::{MedicalRecord, PatientProfile, RecordSeverity};

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn age_and_gender(profile: &PatientProfile) -> String {
    format!("{} years, {}", profile.age, profile.gender)
}

pub fn symptoms_reported(record: &MedicalRecord) -> String {
    match record.symptom_count() {
        1 => "1 symptom reported".to_string(),
        n => format!("{n} symptoms reported"),
    }
}

pub fn severity_caption(severity: RecordSeverity) -> String {
    format!("Severity: {}", severity.display_label())
}

/// Khoảng cách tương đối tới `today`, ví dụ `12 days ago`.
pub fn relative_days(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        -1 => "tomorrow".to_string(),
        d if d > 0 => format!("{d} days ago"),
        d => format!("in {} days", -d),
    }
}

pub fn empty_results_message(term: &str) -> String {
    if term.is_empty() {
        "No medical records on file.".to_string()
    } else {
        format!("No medical records match \"{term}\".")
    }
}
