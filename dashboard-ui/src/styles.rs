#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-dashboard-ui]";

/// CSS mặc định của bảng điều khiển, kèm design token dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --dashboard-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --dashboard-bg: #f8fafc;
  --dashboard-card-bg: #ffffff;
  --dashboard-card-border: rgba(148, 163, 184, 0.28);
  --dashboard-radius: 14px;
  --dashboard-text: #1f2933;
  --dashboard-muted: #52606d;
  --dashboard-heading: #11181c;
  --dashboard-accent: #2563eb;
  --dashboard-accent-bg: rgba(37, 99, 235, 0.08);
  --dashboard-header-from: #7c3aed;
  --dashboard-header-to: #6d28d9;
  --dashboard-tone-in-progress: #1e40af;
  --dashboard-tone-in-progress-bg: rgba(59, 130, 246, 0.14);
  --dashboard-tone-resolved: #166534;
  --dashboard-tone-resolved-bg: rgba(34, 197, 94, 0.14);
  --dashboard-tone-chronic: #9a3412;
  --dashboard-tone-chronic-bg: rgba(249, 115, 22, 0.14);
  --dashboard-level-low: #16a34a;
  --dashboard-level-medium: #ca8a04;
  --dashboard-level-high: #dc2626;
}

.dashboard-root {
  font-family: var(--dashboard-font-family);
  background: var(--dashboard-bg);
  color: var(--dashboard-text);
  max-width: 72rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 24px;
  padding: 24px;
}

.dashboard-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 16px;
  padding: 24px 28px;
  border-radius: var(--dashboard-radius);
  color: #ffffff;
  background: linear-gradient(90deg, var(--dashboard-header-from), var(--dashboard-header-to));
}

.dashboard-title h1 {
  margin: 0;
  font-size: 1.5rem;
}

.dashboard-title p {
  margin: 4px 0 0;
  color: rgba(255, 255, 255, 0.78);
}

.dashboard-last-visit {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 2px;
}

.dashboard-eyebrow,
.dashboard-relative {
  font-size: 0.82rem;
  color: rgba(255, 255, 255, 0.78);
}

.dashboard-tabs {
  display: flex;
  background: var(--dashboard-card-bg);
  border: 1px solid var(--dashboard-card-border);
  border-radius: var(--dashboard-radius);
  overflow: hidden;
}

.dashboard-tab {
  padding: 14px 24px;
  font-size: 0.9rem;
  font-weight: 500;
  border: none;
  border-bottom: 2px solid transparent;
  background: transparent;
  color: var(--dashboard-muted);
  cursor: pointer;
  transition: color 0.15s ease, background 0.15s ease;
}

.dashboard-tab:hover {
  color: var(--dashboard-heading);
}

.dashboard-tab.is-active {
  color: var(--dashboard-accent);
  border-bottom-color: var(--dashboard-accent);
  background: var(--dashboard-accent-bg);
}

.dashboard-content,
.overview,
.records {
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.dashboard-card {
  background: var(--dashboard-card-bg);
  border: 1px solid var(--dashboard-card-border);
  border-radius: var(--dashboard-radius);
  padding: 20px 24px;
}

.dashboard-card h2 {
  margin: 0 0 16px;
  font-size: 1.1rem;
  color: var(--dashboard-heading);
}

.profile-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 16px 24px;
  margin: 0;
}

.profile-field dt,
.tag-group-label,
.record-detail-label {
  font-size: 0.82rem;
  font-weight: 500;
  color: var(--dashboard-muted);
}

.profile-field dd {
  margin: 4px 0 0;
  font-size: 1.05rem;
  font-weight: 600;
}

.profile-tags,
.record-details {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 16px 24px;
  margin-top: 20px;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
  margin-top: 6px;
}

.tag {
  font-size: 0.78rem;
  padding: 3px 10px;
  border-radius: 999px;
  border: 1px solid var(--dashboard-card-border);
}

.tag[data-kind="allergy"] {
  background: #dc2626;
  border-color: #dc2626;
  color: #ffffff;
}

.tag[data-kind="chronic"] {
  background: #f1f5f9;
}

.tag-empty {
  color: var(--dashboard-muted);
}

.summary-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 16px;
}

.summary-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
}

.summary-count {
  font-size: 1.6rem;
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

.summary-card[data-kind="total"] .summary-count { color: var(--dashboard-accent); }
.summary-card[data-kind="resolved"] .summary-count { color: var(--dashboard-tone-resolved); }
.summary-card[data-kind="chronic"] .summary-count { color: var(--dashboard-tone-chronic); }

.summary-label {
  font-size: 0.85rem;
  color: var(--dashboard-muted);
}

.recent-records,
.record-list {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.recent-record {
  border: 1px solid var(--dashboard-card-border);
  border-radius: calc(var(--dashboard-radius) - 4px);
  padding: 14px 16px;
}

.recent-record-header,
.record-card-header,
.record-card-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.recent-record-header h3 {
  margin: 0;
  font-size: 1rem;
}

.recent-record-badges,
.record-card-meta,
.record-card-actions {
  display: flex;
  align-items: center;
  gap: 8px;
}

.recent-record-meta {
  display: flex;
  justify-content: space-between;
  font-size: 0.82rem;
  color: var(--dashboard-muted);
}

.status-badge {
  font-size: 0.75rem;
  font-weight: 600;
  padding: 2px 10px;
  border-radius: 999px;
  background: #f1f5f9;
  color: var(--dashboard-muted);
}

.status-badge[data-tone="in-progress"] {
  background: var(--dashboard-tone-in-progress-bg);
  color: var(--dashboard-tone-in-progress);
}

.status-badge[data-tone="resolved"] {
  background: var(--dashboard-tone-resolved-bg);
  color: var(--dashboard-tone-resolved);
}

.status-badge[data-tone="ongoing-chronic"] {
  background: var(--dashboard-tone-chronic-bg);
  color: var(--dashboard-tone-chronic);
}

.severity-label {
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--dashboard-muted);
}

.severity-label[data-level="low"] { color: var(--dashboard-level-low); }
.severity-label[data-level="medium"] { color: var(--dashboard-level-medium); }
.severity-label[data-level="high"] { color: var(--dashboard-level-high); }

.record-diagnosis {
  margin: 6px 0 10px;
  color: var(--dashboard-muted);
}

.record-condition {
  margin: 14px 0 0;
  font-size: 1.2rem;
}

.record-date {
  font-size: 0.85rem;
  color: var(--dashboard-muted);
}

.record-treatment {
  margin: 6px 0 0;
  font-size: 0.9rem;
}

.record-card-footer {
  margin-top: 16px;
  padding-top: 14px;
  border-top: 1px solid var(--dashboard-card-border);
}

.records-toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
  justify-content: space-between;
}

.toolbar-search {
  flex: 1;
  display: flex;
  gap: 8px;
}

.toolbar-search input {
  flex: 1;
  padding: 9px 14px;
  border-radius: 10px;
  border: 1px solid var(--dashboard-card-border);
  font: inherit;
}

.toolbar-search button,
.inert-action {
  padding: 7px 14px;
  border-radius: 10px;
  border: 1px solid var(--dashboard-card-border);
  background: #ffffff;
  font: inherit;
  font-size: 0.85rem;
  cursor: pointer;
}

.toolbar-actions {
  display: flex;
  gap: 8px;
}

.inert-action[disabled] {
  cursor: not-allowed;
  opacity: 0.55;
}

.inert-action.is-primary {
  background: var(--dashboard-accent);
  border-color: var(--dashboard-accent);
  color: #ffffff;
}

.dashboard-empty {
  text-align: center;
  padding: 28px 16px;
  color: var(--dashboard-muted);
  border: 1px dashed var(--dashboard-card-border);
  border-radius: var(--dashboard-radius);
}

.analytics-placeholder {
  text-align: center;
  padding: 40px 24px;
}

.analytics-placeholder p {
  color: var(--dashboard-muted);
}

@media (max-width: 720px) {
  .dashboard-header {
    flex-direction: column;
    align-items: flex-start;
  }

  .dashboard-last-visit {
    align-items: flex-start;
  }

  .summary-grid {
    grid-template-columns: minmax(0, 1fr);
  }

  .toolbar-search {
    flex-direction: column;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-dashboard-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
