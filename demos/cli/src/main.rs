use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dashboard_core::{
    DashboardConfig, DashboardProvider, DashboardSnapshot, DashboardTab, MedicalRecord, ViewAction,
    ViewState,
};
use dashboard_data::{load_dashboard_str, MockDashboardProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "dashboard-cli",
    about = "Hiển thị bảng điều khiển hồ sơ bệnh nhân trên terminal."
)]
struct Args {
    /// File JSON `{ "profile": ..., "records": [...] }`; bỏ trống thì dùng dữ liệu mẫu.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Tab cần hiển thị: overview, records hoặc analytics.
    #[arg(short, long)]
    tab: Option<DashboardTab>,

    /// Từ khóa lọc hồ sơ theo bệnh/chẩn đoán.
    #[arg(short, long, default_value = "")]
    search: String,

    /// Số hồ sơ gần đây trong tab tổng quan.
    #[arg(long)]
    recent: Option<usize>,

    /// In snapshot dạng JSON thay vì văn bản.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dashboard=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let dashboard = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Không đọc được file {path:?}"))?;
            load_dashboard_str(&data)
                .with_context(|| format!("Dữ liệu dashboard không hợp lệ: {path:?}"))?
        }
        None => MockDashboardProvider
            .load()
            .context("Không nạp được dữ liệu mẫu")?,
    };

    let mut config = DashboardConfig::default();
    if let Some(limit) = args.recent {
        config.recent_records_limit = limit;
    }

    let mut state = config.initial_state();
    if let Some(tab) = args.tab {
        state = state.apply(ViewAction::SelectTab { tab });
    }
    state = state.apply(ViewAction::SetSearchTerm { term: args.search });
    tracing::info!(tab = %state.active_tab, "hiển thị dashboard");

    let snapshot = dashboard.snapshot(&state, &config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&snapshot, &state));
    }

    Ok(())
}

fn render_text(snapshot: &DashboardSnapshot, state: &ViewState) -> String {
    let mut out = String::new();
    let profile = &snapshot.profile;

    let _ = writeln!(out, "Patient Dashboard | {} (#{})", profile.name, profile.id);
    let _ = writeln!(out, "Last Visit: {}", profile.last_visit);

    let tabs: Vec<String> = DashboardTab::ALL
        .into_iter()
        .map(|tab| {
            if state.is_active(tab) {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}\n", tabs.join("  "));

    match snapshot.active_tab {
        DashboardTab::Overview => {
            let _ = writeln!(out, "Age & Gender: {} years, {}", profile.age, profile.gender);
            let _ = writeln!(out, "Blood Type: {}", profile.blood_type);
            let _ = writeln!(out, "Allergies: {}", join_or_none(&profile.allergies));
            let _ = writeln!(
                out,
                "Chronic Conditions: {}",
                join_or_none(&profile.chronic_conditions)
            );
            let _ = writeln!(out, "Emergency Contact: {}\n", profile.emergency_contact);

            let summary = &snapshot.summary;
            let _ = writeln!(
                out,
                "Total Records: {} | Resolved Cases: {} | Ongoing Conditions: {}\n",
                summary.total, summary.resolved, summary.chronic
            );
            let _ = writeln!(out, "Recent Medical Records:");
            for record in &snapshot.recent_records {
                write_record_line(&mut out, record);
            }
        }
        DashboardTab::Records => {
            let _ = writeln!(out, "Search: {:?}", snapshot.search_term);
            if snapshot.visible_records.is_empty() {
                let _ = writeln!(out, "No medical records match.");
            }
            for record in &snapshot.visible_records {
                write_record_line(&mut out, record);
                let _ = writeln!(out, "    Symptoms: {}", join_or_none(&record.symptoms));
                let _ = writeln!(out, "    Treatment: {}", record.treatment);
            }
        }
        DashboardTab::Analytics => {
            let _ = writeln!(out, "Health Analytics Coming Soon");
        }
    }

    out
}

fn write_record_line(out: &mut String, record: &MedicalRecord) {
    let _ = writeln!(
        out,
        "  {}  {} [{}] Severity: {}",
        record.date,
        record.condition,
        record.status.as_str(),
        record.severity.display_label()
    );
    let _ = writeln!(out, "    {}", record.diagnosis);
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
