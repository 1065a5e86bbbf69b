//! Pure business-rule core of the HRM platform.
//!
//! Three leaf utilities consumed synchronously by the UI and service
//! layers: role-based permission resolution, statutory-style payroll
//! estimation, and the password-strength policy. Everything here is
//! stateless and side-effect free; persistence, authentication and
//! transport live elsewhere.

pub mod model;
pub mod password;
pub mod payroll;
pub mod permissions;

pub use model::role::Role;
pub use model::salary::{SalaryBreakdown, TaxBracket};
pub use password::{PasswordCheck, PasswordRule, PasswordStrength, check_password};
pub use payroll::{annual_income_tax, compute_salary_breakdown};
pub use permissions::{
    Capability, PermissionSet, can_access_page, get_permissions, has_permission,
};
