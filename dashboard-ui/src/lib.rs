//! Giao diện bảng điều khiển bệnh nhân cho môi trường WebAssembly.

pub mod display;

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::{display, styles};
    use chrono::{NaiveDate, Utc};
    use dashboard_core::{
        DashboardConfig, DashboardData, DashboardTab, MedicalRecord, PatientProfile,
        RecordSummary, ViewAction, ViewState,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlInputElement, Window};
    use yew::events::InputEvent;
    use yew::prelude::*;
    use yew::TargetCast;

    #[derive(Clone, Default, PartialEq)]
    struct DashboardState(ViewState);

    impl Reducible for DashboardState {
        type Action = ViewAction;

        fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
            let next = self.0.clone().apply(action);
            if next == self.0 {
                self
            } else {
                Rc::new(DashboardState(next))
            }
        }
    }

    type Dispatcher = UseReducerDispatcher<DashboardState>;

    #[derive(Properties, PartialEq)]
    pub struct PatientDashboardProps {
        pub dashboard: DashboardData,
        #[prop_or_default]
        pub config: DashboardConfig,
    }

    #[function_component(PatientDashboard)]
    fn patient_dashboard(props: &PatientDashboardProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let initial = props.config.initial_state();
        let state = use_reducer(move || DashboardState(initial));
        let view = &state.0;
        let dashboard = &props.dashboard;
        let today = Utc::now().date_naive();

        let content = match view.active_tab {
            DashboardTab::Overview => {
                render_overview(dashboard, props.config.recent_records_limit)
            }
            DashboardTab::Records => render_records(dashboard, view, state.dispatcher()),
            DashboardTab::Analytics => render_analytics(),
        };

        html! {
            <div class="dashboard-root">
                { render_header(dashboard.profile(), today) }
                { render_tabs(view.active_tab, state.dispatcher()) }
                <section class="dashboard-content" data-tab={view.active_tab.as_str()} aria-live="polite">
                    { content }
                </section>
            </div>
        }
    }

    fn render_header(profile: &PatientProfile, today: NaiveDate) -> Html {
        html! {
            <header class="dashboard-header">
                <div class="dashboard-title">
                    <h1>{"Patient Dashboard"}</h1>
                    <p>{"Comprehensive health record management"}</p>
                </div>
                <div class="dashboard-last-visit">
                    <span class="dashboard-eyebrow">{"Last Visit"}</span>
                    <strong>{ display::iso_date(profile.last_visit) }</strong>
                    <span class="dashboard-relative">{ display::relative_days(profile.last_visit, today) }</span>
                </div>
            </header>
        }
    }

    fn render_tabs(active: DashboardTab, dispatcher: Dispatcher) -> Html {
        html! {
            <nav class="dashboard-tabs" role="tablist">
                {
                    for DashboardTab::ALL.into_iter().map(|tab| {
                        let dispatcher = dispatcher.clone();
                        let is_active = tab == active;
                        let onclick = Callback::from(move |_| {
                            dispatcher.dispatch(ViewAction::SelectTab { tab });
                        });

                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("dashboard-tab", is_active.then_some("is-active"))}
                                data-tab={tab.as_str()}
                                onclick={onclick}
                            >
                                { tab.label() }
                            </button>
                        }
                    })
                }
            </nav>
        }
    }

    fn render_overview(dashboard: &DashboardData, recent_limit: usize) -> Html {
        let recent = dashboard.recent_records(recent_limit);
        html! {
            <div class="overview">
                { render_profile_card(dashboard.profile()) }
                { render_summary_cards(dashboard.summary()) }
                <section class="dashboard-card">
                    <header><h2>{"Recent Medical Records"}</h2></header>
                    <ul class="recent-records">
                        {
                            if recent.is_empty() {
                                html! { <li class="dashboard-empty">{ display::empty_results_message("") }</li> }
                            } else {
                                html! { for recent.iter().map(render_recent_record) }
                            }
                        }
                    </ul>
                </section>
            </div>
        }
    }

    fn render_profile_card(profile: &PatientProfile) -> Html {
        html! {
            <section class="dashboard-card profile-card">
                <header><h2>{"Patient Information"}</h2></header>
                <dl class="profile-grid">
                    { render_field("Full Name", profile.name.clone()) }
                    { render_field("Age & Gender", display::age_and_gender(profile)) }
                    { render_field("Blood Type", profile.blood_type.clone()) }
                    { render_field("Patient ID", profile.id.clone()) }
                    { render_field("Emergency Contact", profile.emergency_contact.clone()) }
                </dl>
                <div class="profile-tags">
                    { render_tag_group("Allergies", &profile.allergies, "allergy") }
                    { render_tag_group("Chronic Conditions", &profile.chronic_conditions, "chronic") }
                </div>
            </section>
        }
    }

    fn render_field(label: &str, value: String) -> Html {
        html! {
            <div class="profile-field">
                <dt>{ label }</dt>
                <dd>{ value }</dd>
            </div>
        }
    }

    fn render_tag_group(label: &str, items: &[String], kind: &'static str) -> Html {
        html! {
            <div class="tag-group">
                <span class="tag-group-label">{ label }</span>
                <div class="tag-list">
                    {
                        if items.is_empty() {
                            html! { <span class="tag tag-empty">{"None recorded"}</span> }
                        } else {
                            html! {
                                for items.iter().map(|item| html! {
                                    <span class="tag" data-kind={kind}>{ item.clone() }</span>
                                })
                            }
                        }
                    }
                </div>
            </div>
        }
    }

    fn render_summary_cards(summary: RecordSummary) -> Html {
        let cards = [
            ("total", summary.total, "Total Records"),
            ("resolved", summary.resolved, "Resolved Cases"),
            ("chronic", summary.chronic, "Ongoing Conditions"),
        ];

        html! {
            <div class="summary-grid">
                {
                    for cards.into_iter().map(|(kind, count, label)| html! {
                        <section class="dashboard-card summary-card" data-kind={kind}>
                            <span class="summary-count">{ count }</span>
                            <span class="summary-label">{ label }</span>
                        </section>
                    })
                }
            </div>
        }
    }

    fn render_status_badge(record: &MedicalRecord) -> Html {
        html! {
            <span class="status-badge" data-tone={record.status.category().as_str()}>
                { record.status.as_str() }
            </span>
        }
    }

    fn render_recent_record(record: &MedicalRecord) -> Html {
        html! {
            <li class="recent-record">
                <div class="recent-record-header">
                    <h3>{ record.condition.clone() }</h3>
                    <div class="recent-record-badges">
                        { render_status_badge(record) }
                        <span class="severity-label" data-level={record.severity.intensity().as_str()}>
                            { record.severity.as_str() }
                        </span>
                    </div>
                </div>
                <p class="record-diagnosis">{ record.diagnosis.clone() }</p>
                <div class="recent-record-meta">
                    <span>{ display::iso_date(record.date) }</span>
                    <span>{ display::symptoms_reported(record) }</span>
                </div>
            </li>
        }
    }

    fn render_records(dashboard: &DashboardData, view: &ViewState, dispatcher: Dispatcher) -> Html {
        let visible = dashboard.visible_records(view);

        let on_search = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                dispatcher.dispatch(ViewAction::SetSearchTerm {
                    term: input.value(),
                });
            })
        };

        let on_clear = Callback::from(move |_| dispatcher.dispatch(ViewAction::ClearSearch));

        html! {
            <div class="records">
                <section class="dashboard-card records-toolbar">
                    <div class="toolbar-search">
                        <input
                            type="search"
                            placeholder="Search medical records..."
                            value={view.search_term.clone()}
                            oninput={on_search}
                        />
                        <button type="button" onclick={on_clear}>{"Clear"}</button>
                    </div>
                    // Chế độ chỉ đọc: các thao tác dưới đây chưa có xử lý.
                    <div class="toolbar-actions">
                        <button type="button" class="inert-action" disabled=true>{"Filter"}</button>
                        <button type="button" class="inert-action" disabled=true>{"Export"}</button>
                        <button type="button" class="inert-action is-primary" disabled=true>{"Add Record"}</button>
                    </div>
                </section>
                <ul class="record-list">
                    {
                        if visible.is_empty() {
                            html! { <li class="dashboard-empty">{ display::empty_results_message(&view.search_term) }</li> }
                        } else {
                            html! { for visible.into_iter().map(render_record_card) }
                        }
                    }
                </ul>
            </div>
        }
    }

    fn render_record_card(record: &MedicalRecord) -> Html {
        html! {
            <li class="dashboard-card record-card" key={record.id.clone()}>
                <div class="record-card-header">
                    <div class="record-card-meta">
                        <span class="record-date">{ display::iso_date(record.date) }</span>
                        { render_status_badge(record) }
                    </div>
                    <div class="record-card-actions">
                        <button type="button" class="inert-action" disabled=true>{"Edit"}</button>
                        <button type="button" class="inert-action" disabled=true>{"Delete"}</button>
                    </div>
                </div>
                <h3 class="record-condition">{ record.condition.clone() }</h3>
                <p class="record-diagnosis">{ record.diagnosis.clone() }</p>
                <div class="record-details">
                    <div>
                        <span class="record-detail-label">{"Symptoms"}</span>
                        <div class="tag-list">
                            { for record.symptoms.iter().map(|symptom| html! { <span class="tag" data-kind="symptom">{ symptom.clone() }</span> }) }
                        </div>
                    </div>
                    <div>
                        <span class="record-detail-label">{"Treatment"}</span>
                        <p class="record-treatment">{ record.treatment.clone() }</p>
                    </div>
                </div>
                <footer class="record-card-footer">
                    <span class="severity-label" data-level={record.severity.intensity().as_str()}>
                        { display::severity_caption(record.severity) }
                    </span>
                    <button type="button" class="inert-action" disabled=true>{"View Details"}</button>
                </footer>
            </li>
        }
    }

    fn render_analytics() -> Html {
        html! {
            <section class="dashboard-card analytics-placeholder">
                <h2>{"Health Analytics Coming Soon"}</h2>
                <p>{"Advanced health trends and insights will be available in future updates."}</p>
            </section>
        }
    }

    /// Gắn bảng điều khiển vào element theo `selector`.
    ///
    /// `dashboard` là `null`/`undefined` thì dùng bộ dữ liệu mẫu.
    #[wasm_bindgen]
    pub fn mount_patient_dashboard(selector: &str, dashboard: JsValue) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let dashboard: DashboardData = if dashboard.is_null() || dashboard.is_undefined() {
            dashboard_data::mock_dashboard()
                .map_err(|err| JsValue::from_str(&format!("Dashboard error: {err}")))?
        } else {
            from_value(dashboard)?
        };

        yew::Renderer::<PatientDashboard>::with_root_and_props(
            target,
            PatientDashboardProps {
                dashboard,
                config: DashboardConfig::default(),
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_patient_dashboard;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_patient_dashboard(
    _: &str,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "dashboard-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
