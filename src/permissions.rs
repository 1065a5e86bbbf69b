//! Role-based access control lookup.
//!
//! The permission table below is the whole policy: one fixed capability
//! set per role, written down once and never mutated at runtime. Lookups
//! are plain table reads, so callers may hit them concurrently without
//! coordination.
//!
//! Two fail-safe defaults point in opposite directions and must stay that
//! way: an unknown or missing role collapses to the employee set (least
//! privilege), while a page with no explicit visibility policy stays
//! visible (so a freshly added screen does not vanish from navigation).

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::model::role::Role;

/// A single named permission flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    ViewEmployees,
    AddEmployee,
    EditEmployee,
    DeleteEmployee,
    ViewAttendance,
    MarkAttendance,
    EditAttendance,
    ViewLeaveRequests,
    ApproveLeave,
    RejectLeave,
    RequestLeave,
    ViewPayroll,
    ProcessPayroll,
    ViewOwnPayslip,
    ViewAllTasks,
    AssignTasks,
    ViewOwnTasks,
    ViewReports,
    GenerateReports,
    ManageSettings,
    ManageRoles,
}

/// The full set of capability flags granted to one role.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct PermissionSet {
    pub view_dashboard: bool,
    pub view_employees: bool,
    pub add_employee: bool,
    pub edit_employee: bool,
    pub delete_employee: bool,
    pub view_attendance: bool,
    pub mark_attendance: bool,
    pub edit_attendance: bool,
    pub view_leave_requests: bool,
    pub approve_leave: bool,
    pub reject_leave: bool,
    pub request_leave: bool,
    pub view_payroll: bool,
    pub process_payroll: bool,
    pub view_own_payslip: bool,
    pub view_all_tasks: bool,
    pub assign_tasks: bool,
    pub view_own_tasks: bool,
    pub view_reports: bool,
    pub generate_reports: bool,
    pub manage_settings: bool,
    pub manage_roles: bool,
}

impl PermissionSet {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewDashboard => self.view_dashboard,
            Capability::ViewEmployees => self.view_employees,
            Capability::AddEmployee => self.add_employee,
            Capability::EditEmployee => self.edit_employee,
            Capability::DeleteEmployee => self.delete_employee,
            Capability::ViewAttendance => self.view_attendance,
            Capability::MarkAttendance => self.mark_attendance,
            Capability::EditAttendance => self.edit_attendance,
            Capability::ViewLeaveRequests => self.view_leave_requests,
            Capability::ApproveLeave => self.approve_leave,
            Capability::RejectLeave => self.reject_leave,
            Capability::RequestLeave => self.request_leave,
            Capability::ViewPayroll => self.view_payroll,
            Capability::ProcessPayroll => self.process_payroll,
            Capability::ViewOwnPayslip => self.view_own_payslip,
            Capability::ViewAllTasks => self.view_all_tasks,
            Capability::AssignTasks => self.assign_tasks,
            Capability::ViewOwnTasks => self.view_own_tasks,
            Capability::ViewReports => self.view_reports,
            Capability::GenerateReports => self.generate_reports,
            Capability::ManageSettings => self.manage_settings,
            Capability::ManageRoles => self.manage_roles,
        }
    }
}

/// Admin and owner share the same unrestricted set.
const FULL_ACCESS: PermissionSet = PermissionSet {
    view_dashboard: true,
    view_employees: true,
    add_employee: true,
    edit_employee: true,
    delete_employee: true,
    view_attendance: true,
    mark_attendance: true,
    edit_attendance: true,
    view_leave_requests: true,
    approve_leave: true,
    reject_leave: true,
    request_leave: true,
    view_payroll: true,
    process_payroll: true,
    view_own_payslip: true,
    view_all_tasks: true,
    assign_tasks: true,
    view_own_tasks: true,
    view_reports: true,
    generate_reports: true,
    manage_settings: true,
    manage_roles: true,
};

const HR: PermissionSet = PermissionSet {
    view_dashboard: true,
    view_employees: true,
    add_employee: true,
    edit_employee: true,
    delete_employee: true,
    view_attendance: true,
    mark_attendance: true,
    edit_attendance: true,
    view_leave_requests: true,
    approve_leave: true,
    reject_leave: true,
    request_leave: true,
    view_payroll: true,
    process_payroll: true,
    view_own_payslip: true,
    view_all_tasks: true,
    assign_tasks: true,
    view_own_tasks: true,
    view_reports: true,
    generate_reports: true,
    manage_settings: false,
    manage_roles: false,
};

const FINANCE: PermissionSet = PermissionSet {
    view_dashboard: true,
    view_employees: true,
    add_employee: false,
    edit_employee: false,
    delete_employee: false,
    view_attendance: true,
    mark_attendance: true,
    edit_attendance: false,
    view_leave_requests: true,
    approve_leave: false,
    reject_leave: false,
    request_leave: true,
    view_payroll: true,
    process_payroll: true,
    view_own_payslip: true,
    view_all_tasks: false,
    assign_tasks: false,
    view_own_tasks: true,
    view_reports: true,
    generate_reports: true,
    manage_settings: false,
    manage_roles: false,
};

const MANAGER: PermissionSet = PermissionSet {
    view_dashboard: true,
    view_employees: true,
    add_employee: false,
    edit_employee: false,
    delete_employee: false,
    view_attendance: true,
    mark_attendance: true,
    edit_attendance: false,
    view_leave_requests: true,
    approve_leave: true,
    reject_leave: true,
    request_leave: true,
    view_payroll: false,
    process_payroll: false,
    view_own_payslip: true,
    view_all_tasks: true,
    assign_tasks: true,
    view_own_tasks: true,
    view_reports: true,
    generate_reports: false,
    manage_settings: false,
    manage_roles: false,
};

/// Least-privilege floor; also the fallback for missing or foreign roles.
const EMPLOYEE: PermissionSet = PermissionSet {
    view_dashboard: true,
    view_employees: false,
    add_employee: false,
    edit_employee: false,
    delete_employee: false,
    view_attendance: true,
    mark_attendance: true,
    edit_attendance: false,
    view_leave_requests: false,
    approve_leave: false,
    reject_leave: false,
    request_leave: true,
    view_payroll: false,
    process_payroll: false,
    view_own_payslip: true,
    view_all_tasks: false,
    assign_tasks: false,
    view_own_tasks: true,
    view_reports: false,
    generate_reports: false,
    manage_settings: false,
    manage_roles: false,
};

/// Resolves a role to its capability set. Total: a missing role falls back
/// to the employee set rather than failing.
pub fn get_permissions(role: Option<Role>) -> &'static PermissionSet {
    match role {
        Some(Role::Admin) | Some(Role::Owner) => &FULL_ACCESS,
        Some(Role::Hr) => &HR,
        Some(Role::Finance) => &FINANCE,
        Some(Role::Manager) => &MANAGER,
        Some(Role::Employee) | None => &EMPLOYEE,
    }
}

pub fn has_permission(role: Option<Role>, capability: Capability) -> bool {
    get_permissions(role).allows(capability)
}

/// Page visibility predicate used by navigation.
///
/// Pages without an explicit policy stay visible. That matches the shipped
/// behavior; see DESIGN.md for why this is not folded into the restrictive
/// unknown-role default.
pub fn can_access_page(role: Option<Role>, page: &str) -> bool {
    let perms = get_permissions(role);
    match page {
        "dashboard" => perms.view_dashboard,
        "employees" => perms.view_employees,
        "attendance" => perms.view_attendance || perms.mark_attendance,
        "leave" => perms.view_leave_requests || perms.request_leave,
        "payroll" => perms.view_payroll || perms.process_payroll || perms.view_own_payslip,
        "tasks" => perms.view_all_tasks || perms.view_own_tasks,
        "reports" => perms.view_reports || perms.generate_reports,
        "settings" => perms.manage_settings,
        "roles" => perms.manage_roles,
        _ => {
            debug!(page, "no visibility policy for page, defaulting to visible");
            true
        }
    }
}
