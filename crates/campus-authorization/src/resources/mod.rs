//! Protected resource modules
//!
//! Each module owns its action enum, its rule table and the role-only
//! affordance helpers. Modules share the engine but never actions.

pub mod announcements;
pub mod attendance;
pub mod banking;
pub mod exams;
pub mod grades;
pub mod invoices;
pub mod parents;
pub mod schools;
pub mod staff;
pub mod students;
pub mod teachers;
pub mod timesheets;

pub use announcements::{AnnouncementAction, ANNOUNCEMENT_POLICY};
pub use attendance::{AttendanceAction, ATTENDANCE_POLICY};
pub use banking::{BankAccountAction, BANK_ACCOUNT_POLICY};
pub use exams::{ExamAction, EXAM_POLICY};
pub use grades::{GradeAction, GRADE_POLICY};
pub use invoices::{InvoiceAction, INVOICE_POLICY};
pub use parents::{ParentAction, PARENT_POLICY};
pub use schools::{SchoolAction, SCHOOL_POLICY};
pub use staff::{StaffAction, STAFF_POLICY};
pub use students::{StudentAction, STUDENT_POLICY};
pub use teachers::{TeacherAction, TEACHER_POLICY};
pub use timesheets::{TimesheetAction, TIMESHEET_POLICY};
