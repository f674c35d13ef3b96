//! Dashboard data set: the built-in sample records and JSON loading.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DataError;
use crate::models::{
    AccountStatus, AtRiskStudent, AuditEntry, ClassSection, CourseRiskRecord, DepartmentMetric,
    DepartmentPlacement, DepartmentStats, DriveStatus, LogEntry, LogLevel, PlacementRecord,
    PlacementStatus, RecruitmentDrive, RiskLevel, Role, UserRecord,
};

/// All records the dashboard pages display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub logs: Vec<LogEntry>,
    pub department_metrics: Vec<DepartmentMetric>,
    pub audit_logs: Vec<AuditEntry>,
    pub department_stats: Vec<DepartmentStats>,
    pub recruiters: Vec<RecruitmentDrive>,
    pub placements: Vec<PlacementRecord>,
    pub department_placements: Vec<DepartmentPlacement>,
    pub classes: Vec<ClassSection>,
    pub at_risk_students: Vec<AtRiskStudent>,
    pub students_at_risk: Vec<CourseRiskRecord>,
}

impl Dataset {
    /// Loads a data set from a JSON file. Missing sections are empty.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset: Dataset = serde_json::from_str(&raw).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        dataset.number_department_placements();
        info!(
            path = %path.display(),
            records = dataset.record_count(),
            "loaded data set"
        );
        Ok(dataset)
    }

    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.logs.len()
            + self.department_metrics.len()
            + self.audit_logs.len()
            + self.department_stats.len()
            + self.recruiters.len()
            + self.placements.len()
            + self.department_placements.len()
            + self.classes.len()
            + self.at_risk_students.len()
            + self.students_at_risk.len()
    }

    /// Gives rows without an id (id 0) their 1-based position, skipping ids
    /// already taken.
    fn number_department_placements(&mut self) {
        let mut next = 1;
        let taken: Vec<u64> = self.department_placements.iter().map(|r| r.id).collect();
        for row in self.department_placements.iter_mut().filter(|r| r.id == 0) {
            while taken.contains(&next) {
                next += 1;
            }
            row.id = next;
            next += 1;
        }
    }

    /// The built-in sample records.
    pub fn sample() -> Self {
        Self {
            users: sample_users(),
            logs: sample_logs(),
            department_metrics: sample_department_metrics(),
            audit_logs: sample_audit_logs(),
            department_stats: sample_department_stats(),
            recruiters: sample_recruiters(),
            placements: sample_placements(),
            department_placements: sample_department_placements(),
            classes: sample_classes(),
            at_risk_students: sample_at_risk_students(),
            students_at_risk: sample_students_at_risk(),
        }
    }
}

fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap_or_default()
}

fn minute(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap_or_default()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn sample_users() -> Vec<UserRecord> {
    let user = |id, name: &str, email: &str, role, department: &str, status, last_login| {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: department.to_string(),
            status,
            last_login: ts(last_login),
        }
    };
    vec![
        user(
            1,
            "John Smith",
            "john.smith@example.com",
            Role::Student,
            "Computer Science",
            AccountStatus::Active,
            "2025-10-29 10:30:00",
        ),
        user(
            2,
            "Emma Wilson",
            "emma.wilson@example.com",
            Role::Faculty,
            "Electronics",
            AccountStatus::Active,
            "2025-10-29 09:15:00",
        ),
        user(
            3,
            "Michael Brown",
            "michael.brown@example.com",
            Role::Admin,
            "Administration",
            AccountStatus::Active,
            "2025-10-29 11:45:00",
        ),
        user(
            4,
            "Sarah Davis",
            "sarah.davis@example.com",
            Role::Placement,
            "Placement Cell",
            AccountStatus::Inactive,
            "2025-10-28 16:20:00",
        ),
    ]
}

fn sample_logs() -> Vec<LogEntry> {
    let entry = |id, timestamp, level, component: &str, message: &str| LogEntry {
        id,
        timestamp: ts(timestamp),
        level,
        component: component.to_string(),
        message: message.to_string(),
    };
    vec![
        entry(
            1,
            "2025-10-29 14:30:22",
            LogLevel::Error,
            "Authentication",
            "Failed login attempt from IP 192.168.1.100",
        ),
        entry(
            2,
            "2025-10-29 14:15:10",
            LogLevel::Info,
            "Database",
            "Backup completed successfully",
        ),
        entry(
            3,
            "2025-10-29 14:00:05",
            LogLevel::Warning,
            "Storage",
            "Storage capacity reaching 85%",
        ),
        entry(
            4,
            "2025-10-29 13:45:30",
            LogLevel::Info,
            "User Management",
            "New faculty account created",
        ),
        entry(
            5,
            "2025-10-29 13:30:15",
            LogLevel::Error,
            "API",
            "Internal server error in attendance module",
        ),
    ]
}

fn sample_recruiters() -> Vec<RecruitmentDrive> {
    let drive = |id, company: &str, role: &str, openings, package: &str, status, deadline| {
        RecruitmentDrive {
            id,
            company: company.to_string(),
            role: role.to_string(),
            openings,
            package: package.to_string(),
            status,
            deadline,
        }
    };
    vec![
        drive(
            1,
            "Microsoft",
            "Software Engineer",
            15,
            "₹18-24 LPA",
            DriveStatus::Ongoing,
            day(2025, 11, 15),
        ),
        drive(
            2,
            "Google",
            "Product Manager",
            5,
            "₹25-32 LPA",
            DriveStatus::Upcoming,
            day(2025, 12, 1),
        ),
        drive(
            3,
            "Amazon",
            "Full Stack Developer",
            20,
            "₹16-22 LPA",
            DriveStatus::Ongoing,
            day(2025, 11, 20),
        ),
    ]
}

fn sample_classes() -> Vec<ClassSection> {
    let class = |id, name: &str, code: &str, students, room: &str| ClassSection {
        id,
        name: name.to_string(),
        code: code.to_string(),
        students,
        room: room.to_string(),
    };
    vec![
        class(1, "Data Structures", "CS201", 45, "B-101"),
        class(2, "Database Systems", "CS202", 38, "A-204"),
        class(3, "Web Development", "CS203", 50, "C-303"),
    ]
}

fn sample_placements() -> Vec<PlacementRecord> {
    let record = |id, student: &str, company: &str, position: &str, salary, status| {
        PlacementRecord {
            id,
            student_name: student.to_string(),
            company: company.to_string(),
            position: position.to_string(),
            salary,
            status,
        }
    };
    vec![
        record(
            1,
            "Raj Kumar",
            "TCS",
            "Software Engineer",
            Some(6.5),
            PlacementStatus::Placed,
        ),
        record(
            2,
            "Priya Singh",
            "Accenture",
            "Data Analyst",
            Some(5.8),
            PlacementStatus::Placed,
        ),
        record(
            3,
            "Amit Patel",
            "Infosys",
            "Full Stack Dev",
            Some(7.2),
            PlacementStatus::Placed,
        ),
        record(
            4,
            "Neha Sharma",
            "Wipro",
            "QA Engineer",
            Some(5.5),
            PlacementStatus::Placed,
        ),
        record(
            5,
            "Vikram Singh",
            "Pending",
            "Multiple Offers",
            None,
            PlacementStatus::Pending,
        ),
    ]
}

fn sample_department_metrics() -> Vec<DepartmentMetric> {
    let dept = |id, dept: &str, students, placement, avg_cgpa| DepartmentMetric {
        id,
        dept: dept.to_string(),
        students,
        placement,
        avg_cgpa,
    };
    vec![
        dept(1, "Computer Science", 850, 95, 8.9),
        dept(2, "Electronics", 720, 88, 8.5),
        dept(3, "Mechanical", 680, 82, 8.2),
        dept(4, "Civil", 590, 78, 8.0),
    ]
}

fn sample_audit_logs() -> Vec<AuditEntry> {
    let entry = |id, action: &str, user: &str, timestamp| AuditEntry {
        id,
        action: action.to_string(),
        user: user.to_string(),
        timestamp: minute(timestamp),
        status: "Success".to_string(),
    };
    vec![
        entry(1, "User Login", "admin@college.edu", "2025-10-29 14:32"),
        entry(2, "Data Export", "faculty@college.edu", "2025-10-29 13:15"),
        entry(3, "User Creation", "admin@college.edu", "2025-10-29 12:45"),
        entry(4, "Report Generation", "placement@college.edu", "2025-10-29 11:20"),
        entry(5, "Database Sync", "system", "2025-10-29 10:00"),
    ]
}

fn sample_department_stats() -> Vec<DepartmentStats> {
    let stats = |id, department: &str, students, faculty, placements, avg_grade: &str| {
        DepartmentStats {
            id,
            department: department.to_string(),
            students,
            faculty,
            placements,
            avg_grade: avg_grade.to_string(),
        }
    };
    vec![
        stats(1, "Computer Science", 850, 45, 95, "A"),
        stats(2, "Electronics", 720, 38, 88, "A-"),
        stats(3, "Mechanical", 680, 42, 82, "B+"),
        stats(4, "Civil", 590, 35, 78, "B+"),
    ]
}

fn sample_department_placements() -> Vec<DepartmentPlacement> {
    let dept = |id, dept: &str, total, placed, package: &str| DepartmentPlacement {
        id,
        dept: dept.to_string(),
        total,
        placed,
        package: package.to_string(),
    };
    vec![
        dept(1, "Computer Science", 120, 98, "22 LPA"),
        dept(2, "Information Tech", 60, 45, "18 LPA"),
        dept(3, "Electronics", 90, 72, "16 LPA"),
        dept(4, "Mechanical", 60, 42, "14 LPA"),
    ]
}

fn sample_at_risk_students() -> Vec<AtRiskStudent> {
    let student = |id, name: &str, email: &str, attendance, gpa, risk_level| AtRiskStudent {
        id,
        name: name.to_string(),
        email: email.to_string(),
        attendance,
        gpa,
        risk_level,
    };
    vec![
        student(1, "Raj Kumar", "raj@college.edu", 65, 5.2, RiskLevel::High),
        student(2, "Priya Singh", "priya@college.edu", 72, 6.1, RiskLevel::Medium),
        student(3, "Amit Patel", "amit@college.edu", 58, 4.8, RiskLevel::High),
        student(4, "Neha Sharma", "neha@college.edu", 75, 6.5, RiskLevel::Low),
    ]
}

fn sample_students_at_risk() -> Vec<CourseRiskRecord> {
    let record = |id, name: &str, course: &str, attendance: &str, grade: &str, status: &str| {
        CourseRiskRecord {
            id,
            name: name.to_string(),
            course: course.to_string(),
            attendance: attendance.to_string(),
            grade: grade.to_string(),
            status: status.to_string(),
        }
    };
    vec![
        record(1, "John Doe", "Data Structures", "65%", "C-", "At Risk"),
        record(2, "Jane Smith", "Database Systems", "72%", "D+", "At Risk"),
        record(3, "Bob Wilson", "Web Development", "58%", "F", "Critical"),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_sample_has_every_page() {
        let data = Dataset::sample();
        assert_eq!(data.users.len(), 4);
        assert_eq!(data.logs.len(), 5);
        assert_eq!(data.recruiters.len(), 3);
        assert_eq!(data.classes.len(), 3);
        assert_eq!(data.placements.len(), 5);
        assert_eq!(data.department_metrics.len(), 4);
        assert_eq!(data.audit_logs.len(), 5);
        assert_eq!(data.department_stats.len(), 4);
        assert_eq!(data.department_placements.len(), 4);
        assert_eq!(data.at_risk_students.len(), 4);
        assert_eq!(data.students_at_risk.len(), 3);
        assert_eq!(data.record_count(), 44);
        assert_eq!(data.audit_logs[0].timestamp, minute("2025-10-29 14:32"));
        assert_ne!(data.audit_logs[0].timestamp, NaiveDateTime::default());
        assert_eq!(data.users[0].last_login, ts("2025-10-29 10:30:00"));
        assert_ne!(data.users[0].last_login, NaiveDateTime::default());
    }

    #[test]
    fn test_sample_round_trips_through_file() {
        let sample = Dataset::sample();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&sample).unwrap().as_bytes())
            .unwrap();

        let loaded = Dataset::from_path(file.path()).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_partial_file_defaults_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"classes":[{"id":1,"name":"Optics","code":"PH101","students":12,"room":"L-1"}]}"#)
            .unwrap();

        let loaded = Dataset::from_path(file.path()).unwrap();
        assert_eq!(loaded.classes.len(), 1);
        assert!(loaded.users.is_empty());
        assert!(loaded.placements.is_empty());
    }

    #[test]
    fn test_dashboard_shaped_json_loads_salaries_and_numbers_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "placements": [
                    {"id": 1, "studentName": "Raj Kumar", "company": "TCS",
                     "position": "Software Engineer", "salary": "6.5 LPA", "status": "Placed"},
                    {"id": 5, "studentName": "Vikram Singh", "company": "Pending",
                     "position": "Multiple Offers", "salary": "TBD", "status": "Pending"}
                ],
                "departmentPlacements": [
                    {"dept": "Computer Science", "total": 120, "placed": 98, "package": "22 LPA"},
                    {"id": 1, "dept": "Mechanical", "total": 60, "placed": 42, "package": "14 LPA"},
                    {"dept": "Electronics", "total": 90, "placed": 72, "package": "16 LPA"}
                ]
            }"#,
        )
        .unwrap();

        let loaded = Dataset::from_path(file.path()).unwrap();
        let salaries: Vec<Option<f64>> = loaded.placements.iter().map(|p| p.salary).collect();
        assert_eq!(salaries, vec![Some(6.5), None]);

        let ids: Vec<u64> = loaded.department_placements.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_unparseable_salary_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"placements": [{"id": 1, "studentName": "A", "company": "B",
                "position": "C", "salary": "a lot", "status": "Placed"}]}"#,
        )
        .unwrap();
        let err = Dataset::from_path(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = Dataset::from_path(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }
}
