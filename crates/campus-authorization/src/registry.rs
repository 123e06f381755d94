//! Name-based dispatch over the resource modules
//!
//! Tools and request guards that only know a resource by name go through
//! [`ResourceKind`]; typed callers use the modules directly.

use crate::policy::PolicyCheck;
use crate::resources::{
    announcements, attendance, banking, exams, grades, invoices, parents, schools, staff,
    students, teachers, timesheets,
};
use campus_core::{CampusError, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

type RoleCheck = fn(Role) -> bool;

/// One protected resource module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Parent records
    Parents,
    /// Staff records
    Staff,
    /// Teacher profiles
    Teachers,
    /// Student records
    Students,
    /// School bank accounts
    Banking,
    /// Staff timesheets
    Timesheets,
    /// School announcements
    Announcements,
    /// Attendance records
    Attendance,
    /// Grade entries
    Grades,
    /// Exams
    Exams,
    /// Fee invoices
    Invoices,
    /// Tenant schools (operator console)
    Schools,
}

/// Role-only affordances of one module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affordances {
    /// `can_create_*`
    pub create: bool,
    /// `can_export_*`
    pub export: bool,
    /// `can_delete_*`
    pub delete: bool,
}

impl ResourceKind {
    /// Every module, in registry order
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::Parents,
        ResourceKind::Staff,
        ResourceKind::Teachers,
        ResourceKind::Students,
        ResourceKind::Banking,
        ResourceKind::Timesheets,
        ResourceKind::Announcements,
        ResourceKind::Attendance,
        ResourceKind::Grades,
        ResourceKind::Exams,
        ResourceKind::Invoices,
        ResourceKind::Schools,
    ];

    /// Module name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Parents => "parents",
            ResourceKind::Staff => "staff",
            ResourceKind::Teachers => "teachers",
            ResourceKind::Students => "students",
            ResourceKind::Banking => "banking",
            ResourceKind::Timesheets => "timesheets",
            ResourceKind::Announcements => "announcements",
            ResourceKind::Attendance => "attendance",
            ResourceKind::Grades => "grades",
            ResourceKind::Exams => "exams",
            ResourceKind::Invoices => "invoices",
            ResourceKind::Schools => "schools",
        }
    }

    /// The module's policy, behind the object-safe view
    pub fn policy(&self) -> &'static dyn PolicyCheck {
        match self {
            ResourceKind::Parents => &parents::PARENT_POLICY,
            ResourceKind::Staff => &staff::STAFF_POLICY,
            ResourceKind::Teachers => &teachers::TEACHER_POLICY,
            ResourceKind::Students => &students::STUDENT_POLICY,
            ResourceKind::Banking => &banking::BANK_ACCOUNT_POLICY,
            ResourceKind::Timesheets => &timesheets::TIMESHEET_POLICY,
            ResourceKind::Announcements => &announcements::ANNOUNCEMENT_POLICY,
            ResourceKind::Attendance => &attendance::ATTENDANCE_POLICY,
            ResourceKind::Grades => &grades::GRADE_POLICY,
            ResourceKind::Exams => &exams::EXAM_POLICY,
            ResourceKind::Invoices => &invoices::INVOICE_POLICY,
            ResourceKind::Schools => &schools::SCHOOL_POLICY,
        }
    }

    /// Resource type name used in denial messages
    pub fn resource_type(&self) -> &'static str {
        self.policy().resource_type()
    }

    /// Role-only create, export and delete affordances
    pub fn affordances(&self, role: Role) -> Affordances {
        let (create, export, delete): (RoleCheck, RoleCheck, RoleCheck) = match self {
            ResourceKind::Parents => (
                parents::can_create_parent,
                parents::can_export_parents,
                parents::can_delete_parent,
            ),
            ResourceKind::Staff => (
                staff::can_create_staff,
                staff::can_export_staff,
                staff::can_delete_staff,
            ),
            ResourceKind::Teachers => (
                teachers::can_create_teacher,
                teachers::can_export_teachers,
                teachers::can_delete_teacher,
            ),
            ResourceKind::Students => (
                students::can_create_student,
                students::can_export_students,
                students::can_delete_student,
            ),
            ResourceKind::Banking => (
                banking::can_create_bank_account,
                banking::can_export_bank_accounts,
                banking::can_delete_bank_account,
            ),
            ResourceKind::Timesheets => (
                timesheets::can_create_timesheet,
                timesheets::can_export_timesheets,
                timesheets::can_delete_timesheet,
            ),
            ResourceKind::Announcements => (
                announcements::can_create_announcement,
                announcements::can_export_announcements,
                announcements::can_delete_announcement,
            ),
            ResourceKind::Attendance => (
                attendance::can_create_attendance,
                attendance::can_export_attendance,
                attendance::can_delete_attendance,
            ),
            ResourceKind::Grades => (
                grades::can_create_grade,
                grades::can_export_grades,
                grades::can_delete_grade,
            ),
            ResourceKind::Exams => (
                exams::can_create_exam,
                exams::can_export_exams,
                exams::can_delete_exam,
            ),
            ResourceKind::Invoices => (
                invoices::can_create_invoice,
                invoices::can_export_invoices,
                invoices::can_delete_invoice,
            ),
            ResourceKind::Schools => (
                schools::can_create_school,
                schools::can_export_schools,
                schools::can_delete_school,
            ),
        };

        Affordances {
            create: create(role),
            export: export(role),
            delete: delete(role),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CampusError;

    /// Accepts module names and resource type names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name || kind.resource_type() == name)
            .ok_or_else(|| CampusError::invalid(format!("unknown resource: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_and_type_names() {
        assert_eq!("parents".parse::<ResourceKind>().unwrap(), ResourceKind::Parents);
        assert_eq!("parent".parse::<ResourceKind>().unwrap(), ResourceKind::Parents);
        assert_eq!("bank_account".parse::<ResourceKind>().unwrap(), ResourceKind::Banking);
        assert_eq!("Banking".parse::<ResourceKind>().unwrap(), ResourceKind::Banking);
        assert_eq!(
            "attendance_record".parse::<ResourceKind>().unwrap(),
            ResourceKind::Attendance
        );
        assert!("library_books".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_every_module_has_distinct_type() {
        let mut types: Vec<_> = ResourceKind::ALL.iter().map(|k| k.resource_type()).collect();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_every_module_has_crud_and_export() {
        for kind in ResourceKind::ALL {
            let names = kind.policy().action_names();
            for required in ["create", "read", "update", "delete", "export"] {
                assert!(names.contains(&required), "{kind} lacks {required}");
            }
        }
    }

    #[test]
    fn test_affordances_dispatch() {
        assert_eq!(
            ResourceKind::Announcements.affordances(Role::Principal),
            Affordances {
                create: true,
                export: true,
                delete: true
            }
        );
        assert_eq!(
            ResourceKind::Schools.affordances(Role::Principal),
            Affordances {
                create: false,
                export: false,
                delete: false
            }
        );
        assert_eq!(
            ResourceKind::Schools.affordances(Role::Admin),
            Affordances {
                create: true,
                export: true,
                delete: true
            }
        );
    }
}
