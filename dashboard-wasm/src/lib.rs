//! Bridge WASM <-> JavaScript trung lập framework cho bảng điều khiển bệnh nhân.

use dashboard_core::{
    DashboardConfig, DashboardData, DashboardError, DashboardTab, MedicalRecord, RecordSeverity,
    RecordStatus, ViewAction, ViewState,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Tông màu dùng khi nhãn từ JS không thuộc tập giá trị đã biết.
const NEUTRAL_TONE: &str = "neutral";

#[derive(Deserialize)]
struct JsDashboardConfig {
    #[serde(default)]
    recent_records_limit: Option<usize>,
    #[serde(default)]
    default_tab: Option<DashboardTab>,
}

impl From<JsDashboardConfig> for DashboardConfig {
    fn from(cfg: JsDashboardConfig) -> Self {
        let mut base = DashboardConfig::default();
        if let Some(limit) = cfg.recent_records_limit {
            base.recent_records_limit = limit;
        }
        if let Some(tab) = cfg.default_tab {
            base.default_tab = tab;
        }
        base
    }
}

#[derive(Deserialize)]
struct JsViewState {
    #[serde(default)]
    active_tab: Option<DashboardTab>,
    #[serde(default)]
    search_term: Option<String>,
}

impl JsViewState {
    fn into_state(self, config: &DashboardConfig) -> ViewState {
        let mut state = config.initial_state();
        if let Some(tab) = self.active_tab {
            state.set_active_tab(tab);
        }
        if let Some(term) = self.search_term {
            state.set_search_term(term);
        }
        state
    }
}

/// Trả về bộ dữ liệu mẫu biên dịch sẵn.
#[wasm_bindgen]
pub fn load_mock_dashboard() -> Result<JsValue, JsValue> {
    init_panic_hook();
    let dashboard = dashboard_data::mock_dashboard().map_err(dashboard_error)?;
    to_js(&dashboard, "dashboard")
}

/// Tính các giá trị dẫn xuất cho một trạng thái hiển thị.
///
/// `dashboard` là `null`/`undefined` thì dùng dữ liệu mẫu.
#[wasm_bindgen]
pub fn dashboard_snapshot(
    dashboard: JsValue,
    state: Option<JsValue>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    init_panic_hook();

    let dashboard = if dashboard.is_null() || dashboard.is_undefined() {
        dashboard_data::mock_dashboard().map_err(dashboard_error)?
    } else {
        from_js::<DashboardData>(dashboard, "dashboard")?
    };

    let cfg = match config {
        Some(js_cfg) => DashboardConfig::from(from_js::<JsDashboardConfig>(js_cfg, "config")?),
        None => DashboardConfig::default(),
    };

    let state = match state {
        Some(js_state) => from_js::<JsViewState>(js_state, "view state")?.into_state(&cfg),
        None => cfg.initial_state(),
    };

    to_js(&dashboard.snapshot(&state, &cfg), "snapshot")
}

#[wasm_bindgen]
pub fn filter_records(records: JsValue, term: &str) -> Result<JsValue, JsValue> {
    let records: Vec<MedicalRecord> = from_js(records, "records")?;
    let filtered = dashboard_core::filter_records(&records, term);
    to_js(&filtered, "records")
}

/// Áp dụng một thao tác (`{ "type": "select_tab", "tab": "records" }`...) lên trạng thái.
#[wasm_bindgen]
pub fn reduce_view_state(state: JsValue, action: JsValue) -> Result<JsValue, JsValue> {
    let state = if state.is_null() || state.is_undefined() {
        ViewState::default()
    } else {
        from_js::<ViewState>(state, "view state")?
    };
    let action: ViewAction = from_js(action, "action")?;
    to_js(&state.apply(action), "view state")
}

#[wasm_bindgen]
pub fn status_tone(label: &str) -> String {
    tone_for_status(label).to_string()
}

#[wasm_bindgen]
pub fn severity_tone(label: &str) -> String {
    tone_for_severity(label).to_string()
}

fn tone_for_status(label: &str) -> &'static str {
    parse_label::<RecordStatus>(label)
        .map(|status| status.category().as_str())
        .unwrap_or(NEUTRAL_TONE)
}

fn tone_for_severity(label: &str) -> &'static str {
    parse_label::<RecordSeverity>(label)
        .map(|severity| severity.intensity().as_str())
        .unwrap_or(NEUTRAL_TONE)
}

fn parse_label<T: DeserializeOwned>(label: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(label.trim().to_lowercase())).ok()
}

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    from_value(value).map_err(|err| JsValue::from_str(&format!("Không đọc được {what}: {err}")))
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Không serialize {what}: {err}")))
}

fn dashboard_error(err: DashboardError) -> JsValue {
    JsValue::from_str(&format!("Dashboard error: {err}"))
}

fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}
