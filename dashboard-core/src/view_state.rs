//! Trạng thái hiển thị tạm thời: tab đang mở và từ khóa tìm kiếm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Các vùng hiển thị loại trừ lẫn nhau của bảng điều khiển.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Records,
    Analytics,
}

impl DashboardTab {
    /// Thứ tự hiển thị trên thanh điều hướng.
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Records,
        DashboardTab::Analytics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Records => "records",
            DashboardTab::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Records => "Medical Records",
            DashboardTab::Analytics => "Health Analytics",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardTab {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| DashboardError::InvalidState(format!("tab không tồn tại: {value}")))
    }
}

/// Thao tác người dùng làm thay đổi trạng thái hiển thị.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewAction {
    SelectTab { tab: DashboardTab },
    SetSearchTerm { term: String },
    ClearSearch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_tab: DashboardTab,
    pub search_term: String,
}

impl ViewState {
    pub fn with_tab(tab: DashboardTab) -> Self {
        Self {
            active_tab: tab,
            search_term: String::new(),
        }
    }

    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        tracing::debug!(from = %self.active_tab, to = %tab, "chuyển tab");
        self.active_tab = tab;
    }

    /// Thay từ khóa tìm kiếm; mọi chuỗi đều hợp lệ, kể cả chuỗi rỗng.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::trace!(term_len = self.search_term.len(), "cập nhật từ khóa");
    }

    pub fn is_active(&self, tab: DashboardTab) -> bool {
        self.active_tab == tab
    }

    /// Hàm chuyển trạng thái thuần: trạng thái cũ + thao tác -> trạng thái mới.
    pub fn apply(mut self, action: ViewAction) -> Self {
        match action {
            ViewAction::SelectTab { tab } => self.set_active_tab(tab),
            ViewAction::SetSearchTerm { term } => self.set_search_term(term),
            ViewAction::ClearSearch => self.search_term.clear(),
        }
        self
    }
}
