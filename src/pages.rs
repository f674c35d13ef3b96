//! Dashboard pages: column sets bound to row models, grouped by role.

use std::str::FromStr;

use crate::error::{CliError, ParseNameError};
use crate::fixtures::Dataset;
use crate::models::{
    AtRiskStudent, AuditEntry, ClassSection, CourseRiskRecord, DepartmentMetric,
    DepartmentPlacement, DepartmentStats, LogEntry, PlacementRecord, RecruitmentDrive, Role,
    UserRecord,
};
use crate::table::{Column, SortableTable, TableRow, Value};
use crate::view::common::{StyleClass, TableViewModel, ViewCell};

/// Row-type independent table operations, so pages with different row
/// models can live side by side.
pub trait DashboardTable {
    fn view_model(&self, title: &str) -> TableViewModel;
    fn set_sort(&mut self, key: &str) -> bool;
    fn sort_by_column(&mut self, index: usize) -> bool;
    fn column_keys(&self) -> Vec<&'static str>;
    fn is_sortable(&self, index: usize) -> bool;
    fn set_filter(&mut self, filter: Option<String>);
    fn filter(&self) -> Option<&str>;
    /// Displayed rows.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn total_len(&self) -> usize;
    fn selected(&self) -> usize;
    fn select_up(&mut self);
    fn select_down(&mut self);
    fn page_up(&mut self, n: usize);
    fn page_down(&mut self, n: usize);
    fn home(&mut self);
    fn end(&mut self);
}

impl<R: TableRow> DashboardTable for SortableTable<R> {
    fn view_model(&self, title: &str) -> TableViewModel {
        SortableTable::view_model(self, title)
    }

    fn set_sort(&mut self, key: &str) -> bool {
        SortableTable::set_sort(self, key)
    }

    fn sort_by_column(&mut self, index: usize) -> bool {
        SortableTable::sort_by_column(self, index)
    }

    fn column_keys(&self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.key).collect()
    }

    fn is_sortable(&self, index: usize) -> bool {
        self.columns().get(index).is_some_and(|c| c.sortable)
    }

    fn set_filter(&mut self, filter: Option<String>) {
        SortableTable::set_filter(self, filter)
    }

    fn filter(&self) -> Option<&str> {
        SortableTable::filter(self)
    }

    fn len(&self) -> usize {
        SortableTable::len(self)
    }

    fn total_len(&self) -> usize {
        SortableTable::total_len(self)
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn select_up(&mut self) {
        SortableTable::select_up(self)
    }

    fn select_down(&mut self) {
        SortableTable::select_down(self)
    }

    fn page_up(&mut self, n: usize) {
        SortableTable::page_up(self, n)
    }

    fn page_down(&mut self, n: usize) {
        SortableTable::page_down(self, n)
    }

    fn home(&mut self) {
        SortableTable::home(self)
    }

    fn end(&mut self) {
        SortableTable::end(self)
    }
}

/// Dashboard pages that present a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Users,
    Logs,
    Recruiters,
    Placements,
    Classes,
    DepartmentOverview,
    AuditLogs,
    DepartmentPerformance,
    DepartmentStatistics,
    AtRiskStudents,
    StudentsAtRisk,
}

impl Page {
    pub const NAMES: &'static [&'static str] = &[
        "users",
        "logs",
        "recruiters",
        "placements",
        "classes",
        "departments",
        "audit",
        "performance",
        "department-stats",
        "at-risk",
        "course-risk",
    ];

    pub fn all() -> &'static [Page] {
        &[
            Page::Users,
            Page::Logs,
            Page::Recruiters,
            Page::Placements,
            Page::Classes,
            Page::DepartmentOverview,
            Page::AuditLogs,
            Page::DepartmentPerformance,
            Page::DepartmentStatistics,
            Page::AtRiskStudents,
            Page::StudentsAtRisk,
        ]
    }

    /// Pages owned by `role`, in tab order.
    pub fn for_role(role: Role) -> Vec<Page> {
        Page::all()
            .iter()
            .copied()
            .filter(|p| p.role() == role)
            .collect()
    }

    /// Command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Users => "users",
            Page::Logs => "logs",
            Page::Recruiters => "recruiters",
            Page::Placements => "placements",
            Page::Classes => "classes",
            Page::DepartmentOverview => "departments",
            Page::AuditLogs => "audit",
            Page::DepartmentPerformance => "performance",
            Page::DepartmentStatistics => "department-stats",
            Page::AtRiskStudents => "at-risk",
            Page::StudentsAtRisk => "course-risk",
        }
    }

    /// Short tab name.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Users => "USR",
            Page::Logs => "LOG",
            Page::Recruiters => "REC",
            Page::Placements => "PLC",
            Page::Classes => "CLS",
            Page::DepartmentOverview => "DEP",
            Page::AuditLogs => "AUD",
            Page::DepartmentPerformance => "PRF",
            Page::DepartmentStatistics => "DST",
            Page::AtRiskStudents => "ARS",
            Page::StudentsAtRisk => "CRS",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Users => "System Users",
            Page::Logs => "Recent System Logs",
            Page::Recruiters => "Active Recruitment Drives",
            Page::Placements => "Placement Records",
            Page::Classes => "My Classes",
            Page::DepartmentOverview => "Department Overview",
            Page::AuditLogs => "System Audit Logs",
            Page::DepartmentPerformance => "Department Performance",
            Page::DepartmentStatistics => "Department Statistics",
            Page::AtRiskStudents => "At-Risk Students",
            Page::StudentsAtRisk => "Students at Risk",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Page::Users
            | Page::Logs
            | Page::DepartmentOverview
            | Page::AuditLogs
            | Page::DepartmentPerformance => Role::Admin,
            Page::Recruiters | Page::Placements | Page::DepartmentStatistics => Role::Placement,
            Page::Classes | Page::AtRiskStudents | Page::StudentsAtRisk => Role::Faculty,
        }
    }

    /// Builds this page's table over the matching records of `data`.
    pub fn build(&self, data: &Dataset) -> Box<dyn DashboardTable> {
        match self {
            Page::Users => Box::new(SortableTable::new(user_columns(), data.users.clone())),
            Page::Logs => Box::new(SortableTable::new(log_columns(), data.logs.clone())),
            Page::Recruiters => Box::new(SortableTable::new(
                recruiter_columns(),
                data.recruiters.clone(),
            )),
            Page::Placements => Box::new(SortableTable::new(
                placement_columns(),
                data.placements.clone(),
            )),
            Page::Classes => Box::new(SortableTable::new(class_columns(), data.classes.clone())),
            Page::DepartmentOverview => Box::new(SortableTable::new(
                department_overview_columns(),
                data.department_metrics.clone(),
            )),
            Page::AuditLogs => Box::new(SortableTable::new(
                audit_columns(),
                data.audit_logs.clone(),
            )),
            Page::DepartmentPerformance => Box::new(SortableTable::new(
                department_performance_columns(),
                data.department_stats.clone(),
            )),
            Page::DepartmentStatistics => Box::new(SortableTable::new(
                department_statistics_columns(),
                data.department_placements.clone(),
            )),
            Page::AtRiskStudents => Box::new(SortableTable::new(
                at_risk_columns(),
                data.at_risk_students.clone(),
            )),
            Page::StudentsAtRisk => Box::new(SortableTable::new(
                course_risk_columns(),
                data.students_at_risk.clone(),
            )),
        }
    }
}

/// Pages shown for an optional role, and the index of the first tab.
///
/// Without a role every page is shown.
pub fn select_pages(
    role: Option<Role>,
    start: Option<Page>,
) -> Result<(Vec<Page>, usize), CliError> {
    let pages = match role {
        Some(role) => Page::for_role(role),
        None => Page::all().to_vec(),
    };
    if pages.is_empty() {
        return Err(CliError::NoPages {
            role: role.map(|r| r.as_str()).unwrap_or("any"),
        });
    }
    let index = match start {
        None => 0,
        Some(page) => pages
            .iter()
            .position(|&p| p == page)
            .ok_or(CliError::PageNotVisible {
                page: page.slug(),
                role: role.map(|r| r.as_str()).unwrap_or("any"),
            })?,
    };
    Ok((pages, index))
}

impl FromStr for Page {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Page::all()
            .iter()
            .copied()
            .find(|p| p.slug() == lower)
            .ok_or_else(|| ParseNameError {
                kind: "page",
                input: s.to_string(),
                expected: Page::NAMES,
            })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn role_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = match text.as_str() {
        "admin" => StyleClass::Accent,
        "faculty" => StyleClass::Info,
        "placement" => StyleClass::Positive,
        _ => StyleClass::Normal,
    };
    ViewCell::styled(capitalize(&text), style)
}

fn account_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = if text == "active" {
        StyleClass::Positive
    } else {
        StyleClass::Critical
    };
    ViewCell::styled(capitalize(&text), style)
}

fn level_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = match text.as_str() {
        "ERROR" => StyleClass::Critical,
        "WARNING" => StyleClass::Warning,
        _ => StyleClass::Positive,
    };
    ViewCell::styled(text, style)
}

fn drive_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = if text == "Ongoing" {
        StyleClass::Positive
    } else {
        StyleClass::Info
    };
    ViewCell::styled(text, style)
}

fn placement_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = match text.as_str() {
        "Placed" => StyleClass::Positive,
        "Pending" => StyleClass::Warning,
        _ => StyleClass::Critical,
    };
    ViewCell::styled(text, style)
}

fn salary(value: &Value) -> String {
    match value {
        Value::Float(_) | Value::Integer(_) => format!("{} LPA", value),
        _ => "TBD".to_string(),
    }
}

fn percent(value: &Value) -> String {
    format!("{}%", value)
}

fn two_decimals(value: &Value) -> String {
    match value {
        Value::Float(v) => format!("{:.2}", v),
        Value::Integer(v) => format!("{:.2}", *v as f64),
        other => other.to_string(),
    }
}

fn rate_badge(value: &Value) -> ViewCell {
    let style = match value {
        Value::Integer(v) if *v >= 90 => StyleClass::Positive,
        Value::Integer(v) if *v >= 80 => StyleClass::Warning,
        _ => StyleClass::Critical,
    };
    ViewCell::styled(percent(value), style)
}

fn grade_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = if text.starts_with('A') {
        StyleClass::Positive
    } else {
        StyleClass::Warning
    };
    ViewCell::styled(text, style)
}

fn risk_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = match text.as_str() {
        "High" => StyleClass::Critical,
        "Medium" => StyleClass::Warning,
        _ => StyleClass::Positive,
    };
    ViewCell::styled(text, style)
}

fn course_risk_badge(value: &Value) -> ViewCell {
    let text = value.to_string();
    let style = if text == "Critical" {
        StyleClass::Critical
    } else {
        StyleClass::Warning
    };
    ViewCell::styled(text, style)
}

fn user_columns() -> Vec<Column<UserRecord>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("role", "Role").render_with(|v, _| role_badge(v)),
        Column::new("department", "Department"),
        Column::new("status", "Status").render_with(|v, _| account_badge(v)),
        Column::new("lastLogin", "Last Login").sortable(),
    ]
}

fn log_columns() -> Vec<Column<LogEntry>> {
    vec![
        Column::new("timestamp", "Timestamp").sortable(),
        Column::new("level", "Level").render_with(|v, _| level_badge(v)),
        Column::new("component", "Component").sortable(),
        Column::new("message", "Message"),
    ]
}

fn recruiter_columns() -> Vec<Column<RecruitmentDrive>> {
    vec![
        Column::new("company", "Company").sortable(),
        Column::new("role", "Role").sortable(),
        Column::new("openings", "Openings").sortable(),
        Column::new("package", "Package"),
        Column::new("deadline", "Deadline")
            .format_with(|_, row: &RecruitmentDrive| {
                row.deadline.format("%b %-d, %Y").to_string()
            }),
        Column::new("status", "Status").render_with(|v, _| drive_badge(v)),
    ]
}

fn placement_columns() -> Vec<Column<PlacementRecord>> {
    vec![
        Column::new("studentName", "Student Name").sortable(),
        Column::new("company", "Company").sortable(),
        Column::new("position", "Position").sortable(),
        Column::new("salary", "Salary")
            .sortable()
            .format_with(|v, _| salary(v)),
        Column::new("status", "Status").render_with(|v, _| placement_badge(v)),
    ]
}

fn class_columns() -> Vec<Column<ClassSection>> {
    vec![
        Column::new("name", "Class name").sortable(),
        Column::new("code", "Code"),
        Column::new("students", "Students").sortable(),
        Column::new("room", "Room"),
    ]
}

fn department_overview_columns() -> Vec<Column<DepartmentMetric>> {
    vec![
        Column::new("dept", "Department").sortable(),
        Column::new("students", "Total Students").sortable(),
        Column::new("placement", "Placement Rate")
            .sortable()
            .format_with(|v, _| percent(v)),
        Column::new("avgCGPA", "Avg CGPA")
            .sortable()
            .format_with(|v, _| two_decimals(v)),
    ]
}

fn audit_columns() -> Vec<Column<AuditEntry>> {
    vec![
        Column::new("action", "Action").sortable(),
        Column::new("user", "User").sortable(),
        Column::new("timestamp", "Timestamp")
            .sortable()
            .format_with(|_, row: &AuditEntry| {
                row.timestamp.format("%Y-%m-%d %H:%M").to_string()
            }),
        Column::new("status", "Status")
            .render_with(|v, _| ViewCell::styled(v.to_string(), StyleClass::Positive)),
    ]
}

fn department_performance_columns() -> Vec<Column<DepartmentStats>> {
    vec![
        Column::new("department", "Department").sortable(),
        Column::new("students", "Students").sortable(),
        Column::new("faculty", "Faculty").sortable(),
        Column::new("placements", "Placement %").render_with(|v, _| rate_badge(v)),
        Column::new("avgGrade", "Avg. Grade").render_with(|v, _| grade_badge(v)),
    ]
}

fn department_statistics_columns() -> Vec<Column<DepartmentPlacement>> {
    vec![
        Column::new("dept", "Department").sortable(),
        Column::new("total", "Total Students").sortable(),
        Column::new("placed", "Placed").sortable(),
        Column::new("placed", "Placement %").format_with(|_, row: &DepartmentPlacement| {
            row.placement_percent()
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "n/a".to_string())
        }),
        Column::new("package", "Avg Package"),
    ]
}

fn at_risk_columns() -> Vec<Column<AtRiskStudent>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("attendance", "Attendance")
            .sortable()
            .format_with(|v, _| percent(v)),
        Column::new("gpa", "GPA")
            .sortable()
            .format_with(|v, _| two_decimals(v)),
        Column::new("riskLevel", "Risk Level").render_with(|v, _| risk_badge(v)),
    ]
}

fn course_risk_columns() -> Vec<Column<CourseRiskRecord>> {
    vec![
        Column::new("name", "Student Name").sortable(),
        Column::new("course", "Course").sortable(),
        Column::new("attendance", "Attendance"),
        Column::new("grade", "Current Grade"),
        Column::new("status", "Status").render_with(|v, _| course_risk_badge(v)),
    ]
}
