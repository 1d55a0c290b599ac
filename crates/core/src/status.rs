//! Default lifecycle status strings applied when a create request omits one.

pub const PROJECT_DEFAULT_STATUS: &str = "active";
pub const TODO_DEFAULT_STATUS: &str = "open";
pub const STATUS_REPORT_DEFAULT_STATUS: &str = "draft";

pub fn default_project_status() -> String {
    PROJECT_DEFAULT_STATUS.to_string()
}

pub fn default_todo_status() -> String {
    TODO_DEFAULT_STATUS.to_string()
}

pub fn default_status_report_status() -> String {
    STATUS_REPORT_DEFAULT_STATUS.to_string()
}
