//! Record types shown by the dashboard pages, and their enumerated labels.

mod records;

pub use records::*;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// Dashboard role; each page belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Placement,
    Admin,
}

impl Role {
    pub const NAMES: &'static [&'static str] = &["student", "faculty", "placement", "admin"];

    pub fn all() -> &'static [Role] {
        &[Role::Student, Role::Faculty, Role::Placement, Role::Admin]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Placement => "placement",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Role::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| ParseNameError {
                kind: "role",
                input: s.to_string(),
                expected: Role::NAMES,
            })
    }
}

/// Account state of a system user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }
}

/// Severity of a system log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// State of a campus recruitment drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveStatus {
    Ongoing,
    Upcoming,
    Closed,
}

impl DriveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveStatus::Ongoing => "Ongoing",
            DriveStatus::Upcoming => "Upcoming",
            DriveStatus::Closed => "Closed",
        }
    }
}

/// Outcome of a student's placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStatus {
    Placed,
    Pending,
    Rejected,
}

impl PlacementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::Placed => "Placed",
            PlacementStatus::Pending => "Pending",
            PlacementStatus::Rejected => "Rejected",
        }
    }
}

/// Academic risk level of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// `2025-10-29 14:30:22` timestamps as used by the dashboard data.
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

/// `2025-10-29 14:32` audit timestamps, minute precision.
pub(crate) mod minute_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

/// Salaries as written on the placement pages: `6.5 LPA`, or `TBD` when
/// no offer has been accepted.
pub(crate) mod salary {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const PENDING: &str = "TBD";
    const UNIT: &str = "LPA";

    pub fn parse(raw: &str) -> Option<Option<f64>> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(PENDING) {
            return Some(None);
        }
        let amount = raw.strip_suffix(UNIT).unwrap_or(raw).trim();
        amount.parse::<f64>().ok().filter(|v| v.is_finite()).map(Some)
    }

    pub fn serialize<S: Serializer>(salary: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match salary {
            Some(v) => s.serialize_str(&format!("{} {}", v, UNIT)),
            None => s.serialize_str(PENDING),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| {
            D::Error::custom(format!("invalid salary '{}', expected '<amount> LPA' or 'TBD'", raw))
        })
    }
}

/// `2025-11-15` calendar dates.
pub(crate) mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_forms() {
        assert_eq!(salary::parse("6.5 LPA"), Some(Some(6.5)));
        assert_eq!(salary::parse(" 22LPA "), Some(Some(22.0)));
        assert_eq!(salary::parse("TBD"), Some(None));
        assert_eq!(salary::parse("lots"), None);
        assert_eq!(salary::parse("NaN LPA"), None);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" placement ".parse::<Role>(), Ok(Role::Placement));

        let err = "dean".parse::<Role>().unwrap_err();
        assert_eq!(err.input, "dean");
        assert!(err.to_string().contains("student, faculty, placement, admin"));
    }

    #[test]
    fn test_labels_match_serde_names() {
        assert_eq!(
            serde_json::to_string(&LogLevel::Warning).unwrap(),
            format!("\"{}\"", LogLevel::Warning.as_str())
        );
        assert_eq!(
            serde_json::to_string(&AccountStatus::Inactive).unwrap(),
            format!("\"{}\"", AccountStatus::Inactive.as_str())
        );
        assert_eq!(
            serde_json::to_string(&DriveStatus::Upcoming).unwrap(),
            format!("\"{}\"", DriveStatus::Upcoming.as_str())
        );
    }
}
