//! Row structs and their TableRow impls.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{
    AccountStatus, DriveStatus, LogLevel, PlacementStatus, RiskLevel, Role, date,
    minute_timestamp, salary, timestamp,
};
use crate::table::{TableRow, Value};

/// Sortable text form of a timestamp; lexicographic order is chronological.
fn timestamp_value(ts: &NaiveDateTime) -> Value {
    Value::Text(ts.format(timestamp::FORMAT).to_string())
}

/// System user account (admin "Users" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: AccountStatus,
    #[serde(with = "timestamp")]
    pub last_login: NaiveDateTime,
}

impl TableRow for UserRecord {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "department" => self.department.as_str().into(),
            "status" => self.status.as_str().into(),
            "lastLogin" => timestamp_value(&self.last_login),
            _ => Value::Missing,
        }
    }
}

/// System log entry (admin "Logs" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: u64,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub component: String,
    pub message: String,
}

impl TableRow for LogEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "timestamp" => timestamp_value(&self.timestamp),
            "level" => self.level.as_str().into(),
            "component" => self.component.as_str().into(),
            "message" => self.message.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Campus recruitment drive (placement "Recruiters" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentDrive {
    pub id: u64,
    pub company: String,
    pub role: String,
    pub openings: u32,
    /// Offered package, free text (e.g. "₹18-24 LPA").
    pub package: String,
    pub status: DriveStatus,
    #[serde(with = "date")]
    pub deadline: NaiveDate,
}

impl TableRow for RecruitmentDrive {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "company" => self.company.as_str().into(),
            "role" => self.role.as_str().into(),
            "openings" => self.openings.into(),
            "package" => self.package.as_str().into(),
            "status" => self.status.as_str().into(),
            // Day number keeps deadlines in calendar order.
            "deadline" => Value::Integer(i64::from(self.deadline.num_days_from_ce())),
            _ => Value::Missing,
        }
    }
}

/// Class taught by a faculty member (faculty "Classes" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub students: u32,
    pub room: String,
}

impl TableRow for ClassSection {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "code" => self.code.as_str().into(),
            "students" => self.students.into(),
            "room" => self.room.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Student placement outcome (placement "Placements" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    pub id: u64,
    pub student_name: String,
    pub company: String,
    pub position: String,
    /// Annual package in lakh per annum; `None` (`TBD`) until an offer is
    /// accepted.
    #[serde(with = "salary")]
    pub salary: Option<f64>,
    pub status: PlacementStatus,
}

impl TableRow for PlacementRecord {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "studentName" => self.student_name.as_str().into(),
            "company" => self.company.as_str().into(),
            "position" => self.position.as_str().into(),
            "salary" => self.salary.into(),
            "status" => self.status.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Per-department summary (admin "Department Overview").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMetric {
    pub id: u64,
    pub dept: String,
    pub students: u32,
    /// Placement rate in percent.
    pub placement: u32,
    #[serde(rename = "avgCGPA")]
    pub avg_cgpa: f64,
}

impl TableRow for DepartmentMetric {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "dept" => self.dept.as_str().into(),
            "students" => self.students.into(),
            "placement" => self.placement.into(),
            "avgCGPA" => self.avg_cgpa.into(),
            _ => Value::Missing,
        }
    }
}

/// Administrative action record (admin "System Audit Logs").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: u64,
    pub action: String,
    pub user: String,
    #[serde(with = "minute_timestamp")]
    pub timestamp: NaiveDateTime,
    pub status: String,
}

impl TableRow for AuditEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "action" => self.action.as_str().into(),
            "user" => self.user.as_str().into(),
            "timestamp" => timestamp_value(&self.timestamp),
            "status" => self.status.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Department staffing and results (admin "Department Performance").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub id: u64,
    pub department: String,
    pub students: u32,
    pub faculty: u32,
    /// Placement rate in percent.
    pub placements: u32,
    pub avg_grade: String,
}

impl TableRow for DepartmentStats {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "department" => self.department.as_str().into(),
            "students" => self.students.into(),
            "faculty" => self.faculty.into(),
            "placements" => self.placements.into(),
            "avgGrade" => self.avg_grade.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Placement counts per department (placement "Department Statistics").
///
/// Source data carries no id; rows without one are numbered on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPlacement {
    #[serde(default)]
    pub id: u64,
    pub dept: String,
    pub total: u32,
    pub placed: u32,
    /// Average package, free text (e.g. "22 LPA").
    pub package: String,
}

impl DepartmentPlacement {
    /// Placed students as a rounded percentage of the total.
    pub fn placement_percent(&self) -> Option<u32> {
        (self.total > 0)
            .then(|| (f64::from(self.placed) * 100.0 / f64::from(self.total)).round() as u32)
    }
}

impl TableRow for DepartmentPlacement {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "dept" => self.dept.as_str().into(),
            "total" => self.total.into(),
            "placed" => self.placed.into(),
            "package" => self.package.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Student flagged by attendance and GPA (faculty "At-Risk Students").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskStudent {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Attendance in percent.
    pub attendance: u32,
    pub gpa: f64,
    pub risk_level: RiskLevel,
}

impl TableRow for AtRiskStudent {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "attendance" => self.attendance.into(),
            "gpa" => self.gpa.into(),
            "riskLevel" => self.risk_level.as_str().into(),
            _ => Value::Missing,
        }
    }
}

/// Student flagged in a course report (faculty "Students at Risk").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRiskRecord {
    pub id: u64,
    pub name: String,
    pub course: String,
    /// Attendance as reported, e.g. "65%".
    pub attendance: String,
    pub grade: String,
    pub status: String,
}

impl TableRow for CourseRiskRecord {
    fn id(&self) -> u64 {
        self.id
    }

    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "course" => self.course.as_str().into(),
            "attendance" => self.attendance.as_str().into(),
            "grade" => self.grade.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => Value::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_uses_camel_case_and_dashboard_timestamps() {
        let json = r#"{
            "id": 9,
            "name": "Ann Lee",
            "email": "ann@example.com",
            "role": "faculty",
            "department": "Physics",
            "status": "inactive",
            "lastLogin": "2025-10-28 16:20:00"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Faculty);
        assert_eq!(user.status, AccountStatus::Inactive);
        assert_eq!(
            user.value("lastLogin"),
            Value::Text("2025-10-28 16:20:00".to_string())
        );

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["lastLogin"], "2025-10-28 16:20:00");
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let json = r#"{"id":1,"timestamp":"yesterday","level":"INFO","component":"API","message":"x"}"#;
        assert!(serde_json::from_str::<LogEntry>(json).is_err());
    }

    #[test]
    fn test_deadline_sorts_by_calendar() {
        let drive = |id, deadline: &str| RecruitmentDrive {
            id,
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            openings: 1,
            package: "-".to_string(),
            status: DriveStatus::Upcoming,
            deadline: NaiveDate::parse_from_str(deadline, "%Y-%m-%d").unwrap(),
        };
        let nov = drive(1, "2025-11-20").value("deadline");
        let dec = drive(2, "2025-12-01").value("deadline");
        assert!(nov < dec);
    }

    #[test]
    fn test_salary_uses_dashboard_form() {
        let json = r#"{"id":5,"studentName":"Vikram Singh","company":"Pending","position":"Multiple Offers","salary":"TBD","status":"Pending"}"#;
        let record: PlacementRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.salary, None);
        assert_eq!(record.value("salary"), Value::Missing);
        assert_eq!(record.value("unknown"), Value::Missing);

        let json = r#"{"id":1,"studentName":"Raj Kumar","company":"TCS","position":"Software Engineer","salary":"6.5 LPA","status":"Placed"}"#;
        let record: PlacementRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.salary, Some(6.5));
        assert_eq!(serde_json::to_value(&record).unwrap()["salary"], "6.5 LPA");
    }

    #[test]
    fn test_bad_or_absent_salary_is_rejected() {
        let bad = r#"{"id":1,"studentName":"A","company":"B","position":"C","salary":"lots","status":"Placed"}"#;
        assert!(serde_json::from_str::<PlacementRecord>(bad).is_err());
        let absent = r#"{"id":1,"studentName":"A","company":"B","position":"C","status":"Placed"}"#;
        assert!(serde_json::from_str::<PlacementRecord>(absent).is_err());
    }

    #[test]
    fn test_department_placement_percent() {
        let json = r#"{"dept":"Computer Science","total":120,"placed":98,"package":"22 LPA"}"#;
        let row: DepartmentPlacement = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, 0);
        assert_eq!(row.placement_percent(), Some(82));

        let empty = DepartmentPlacement { total: 0, ..row };
        assert_eq!(empty.placement_percent(), None);
    }

    #[test]
    fn test_audit_and_risk_rows() {
        let json = r#"{"id":1,"action":"User Login","user":"admin@college.edu","timestamp":"2025-10-29 14:32","status":"Success"}"#;
        let entry: AuditEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.value("timestamp"), Value::Text("2025-10-29 14:32:00".to_string()));

        let json = r#"{"id":3,"name":"Amit Patel","email":"amit@college.edu","attendance":58,"gpa":4.8,"riskLevel":"High"}"#;
        let student: AtRiskStudent = serde_json::from_str(json).unwrap();
        assert_eq!(student.risk_level, RiskLevel::High);
        assert_eq!(student.value("attendance"), Value::Integer(58));
    }

    #[test]
    fn test_ids_beyond_i64_are_missing() {
        let json = r#"{"id":18446744073709551615,"name":"X","code":"C","students":1,"room":"R"}"#;
        let class: ClassSection = serde_json::from_str(json).unwrap();
        assert_eq!(class.value("id"), Value::Missing);
    }
}
