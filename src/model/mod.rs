pub mod role;
pub mod salary;
