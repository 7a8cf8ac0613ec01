//! Employees: a shared base record plus the `Manager` and `StaffEmployee` variants
//!
//! One generic builder, [`EmployeeBuilder<K>`], carries the base fields. The
//! parameter `K` holds the variant's own builder state, and every base setter
//! returns `EmployeeBuilder<K>`, so variant setters can follow base setters
//! in the same chain:
//!
//! ```rust
//! use candle_store::prelude::*;
//!
//! let staff = StaffEmployee::builder()
//!     .employee_number(101)
//!     .salary(15000.0)
//!     .position("Sales Assistant")
//!     .department_shift("Morning")
//!     .shift_time("08:00-16:00")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(staff.employee_number(), 101);
//! assert_eq!(staff.shift_time(), "08:00-16:00");
//! ```

use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_id, ensure_non_negative, ensure_present};
use crate::entities::value_objects::{ContactDetails, PersonInfo};
use serde::{Deserialize, Serialize};

// =============================================================================
// Base record
// =============================================================================

/// Fields shared by every kind of employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    employee_number: u32,
    salary: f64,
    position: String,
    contact_details: Option<ContactDetails>,
    person_info: Option<PersonInfo>,
}

impl Employee {
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    pub fn employee_number(&self) -> u32 {
        self.employee_number
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn contact_details(&self) -> Option<&ContactDetails> {
        self.contact_details.as_ref()
    }

    pub fn person_info(&self) -> Option<&PersonInfo> {
        self.person_info.as_ref()
    }
}

/// Read access to the base employee fields of any employee variant
pub trait EmployeeRecord {
    fn employee(&self) -> &Employee;

    fn employee_number(&self) -> u32 {
        self.employee().employee_number
    }

    fn salary(&self) -> f64 {
        self.employee().salary
    }

    fn position(&self) -> &str {
        &self.employee().position
    }

    fn contact_details(&self) -> Option<&ContactDetails> {
        self.employee().contact_details.as_ref()
    }

    fn person_info(&self) -> Option<&PersonInfo> {
        self.employee().person_info.as_ref()
    }
}

impl EmployeeRecord for Employee {
    fn employee(&self) -> &Employee {
        self
    }
}

// =============================================================================
// Variants
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    employee: Employee,
    manager_level: String,
    num_employees: u32,
}

impl Manager {
    pub fn builder() -> ManagerBuilder {
        ManagerBuilder::default()
    }

    /// Assemble a manager from an already-built base record
    pub fn from_parts(
        employee: Employee,
        manager_level: impl Into<String>,
        num_employees: u32,
    ) -> Self {
        Self {
            employee,
            manager_level: manager_level.into(),
            num_employees,
        }
    }

    pub fn manager_level(&self) -> &str {
        &self.manager_level
    }

    /// Number of employees reporting to this manager
    pub fn num_employees(&self) -> u32 {
        self.num_employees
    }
}

impl EmployeeRecord for Manager {
    fn employee(&self) -> &Employee {
        &self.employee
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffEmployee {
    #[serde(flatten)]
    employee: Employee,
    department_shift: String,
    shift_time: String,
}

impl StaffEmployee {
    pub fn builder() -> StaffEmployeeBuilder {
        StaffEmployeeBuilder::default()
    }

    pub fn from_parts(
        employee: Employee,
        department_shift: impl Into<String>,
        shift_time: impl Into<String>,
    ) -> Self {
        Self {
            employee,
            department_shift: department_shift.into(),
            shift_time: shift_time.into(),
        }
    }

    pub fn department_shift(&self) -> &str {
        &self.department_shift
    }

    pub fn shift_time(&self) -> &str {
        &self.shift_time
    }
}

impl EmployeeRecord for StaffEmployee {
    fn employee(&self) -> &Employee {
        &self.employee
    }
}

/// Any employee, tagged by variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Personnel {
    Employee(Employee),
    Manager(Manager),
    Staff(StaffEmployee),
}

impl EmployeeRecord for Personnel {
    fn employee(&self) -> &Employee {
        match self {
            Personnel::Employee(e) => e,
            Personnel::Manager(m) => m.employee(),
            Personnel::Staff(s) => s.employee(),
        }
    }
}

impl From<Employee> for Personnel {
    fn from(employee: Employee) -> Self {
        Personnel::Employee(employee)
    }
}

impl From<Manager> for Personnel {
    fn from(manager: Manager) -> Self {
        Personnel::Manager(manager)
    }
}

impl From<StaffEmployee> for Personnel {
    fn from(staff: StaffEmployee) -> Self {
        Personnel::Staff(staff)
    }
}

crate::impl_entity!(Employee, "employee", u32, employee_number);
crate::impl_entity!(Manager, "manager", u32, employee_number);
crate::impl_entity!(StaffEmployee, "staff_employee", u32, employee_number);
crate::impl_entity!(Personnel, "personnel", u32, employee_number);

// =============================================================================
// Builders
// =============================================================================

/// Builder state for a plain [`Employee`]
#[derive(Debug, Clone, Default)]
pub struct BaseFields;

/// Builder state for [`Manager`]
#[derive(Debug, Clone, Default)]
pub struct ManagerFields {
    manager_level: Option<String>,
    num_employees: Option<u32>,
}

/// Builder state for [`StaffEmployee`]
#[derive(Debug, Clone, Default)]
pub struct StaffFields {
    department_shift: Option<String>,
    shift_time: Option<String>,
}

pub type ManagerBuilder = EmployeeBuilder<ManagerFields>;
pub type StaffEmployeeBuilder = EmployeeBuilder<StaffFields>;

/// Builder shared by every employee variant
///
/// `employee_number`, `salary` and `position` are required for all variants.
/// The number must be non-zero, the salary zero or more and the position
/// non-blank.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder<K = BaseFields> {
    employee_number: Option<u32>,
    salary: Option<f64>,
    position: Option<String>,
    contact_details: Option<ContactDetails>,
    person_info: Option<PersonInfo>,
    variant: K,
}

impl<K> EmployeeBuilder<K> {
    builder_setters! {
        employee_number: u32,
        salary: f64,
        contact_details: ContactDetails,
        person_info: PersonInfo,
    }
    builder_string_setters! { position }

    /// Seed the base fields from an existing record, keeping variant fields
    pub fn with_employee(mut self, employee: &Employee) -> Self {
        self.employee_number = Some(employee.employee_number);
        self.salary = Some(employee.salary);
        self.position = Some(employee.position.clone());
        self.contact_details = employee.contact_details.clone();
        self.person_info = employee.person_info.clone();
        self
    }

    /// Check the base fields and split off the variant state
    fn into_parts(self, entity: &'static str) -> ValidationResult<(Employee, K)> {
        let employee_number = required!(entity, self.employee_number);
        let salary = required!(entity, self.salary);
        let position = required!(entity, self.position);
        ensure_present(entity, "position", &position)?;

        let employee = Employee {
            employee_number: ensure_id(entity, "employee_number", employee_number)?,
            salary: ensure_non_negative(entity, "salary", salary)?,
            position,
            contact_details: self.contact_details,
            person_info: self.person_info,
        };
        Ok((employee, self.variant))
    }
}

impl EmployeeBuilder<BaseFields> {
    pub fn copy(employee: &Employee) -> Self {
        Self::default().with_employee(employee)
    }

    pub fn build(self) -> ValidationResult<Employee> {
        let (employee, _) = self.into_parts("employee")?;
        Ok(employee)
    }
}

impl EmployeeBuilder<ManagerFields> {
    pub fn manager_level(mut self, manager_level: impl Into<String>) -> Self {
        self.variant.manager_level = Some(manager_level.into());
        self
    }

    pub fn num_employees(mut self, num_employees: u32) -> Self {
        self.variant.num_employees = Some(num_employees);
        self
    }

    pub fn copy(manager: &Manager) -> Self {
        Self::default()
            .with_employee(&manager.employee)
            .manager_level(manager.manager_level.clone())
            .num_employees(manager.num_employees)
    }

    /// `manager_level` is required; `num_employees` defaults to zero
    pub fn build(self) -> ValidationResult<Manager> {
        let (employee, fields) = self.into_parts("manager")?;
        let manager_level = required!("manager", fields.manager_level);
        ensure_present("manager", "manager_level", &manager_level)?;

        Ok(Manager::from_parts(
            employee,
            manager_level,
            fields.num_employees.unwrap_or_default(),
        ))
    }
}

impl EmployeeBuilder<StaffFields> {
    pub fn department_shift(mut self, department_shift: impl Into<String>) -> Self {
        self.variant.department_shift = Some(department_shift.into());
        self
    }

    pub fn shift_time(mut self, shift_time: impl Into<String>) -> Self {
        self.variant.shift_time = Some(shift_time.into());
        self
    }

    pub fn copy(staff: &StaffEmployee) -> Self {
        Self::default()
            .with_employee(&staff.employee)
            .department_shift(staff.department_shift.clone())
            .shift_time(staff.shift_time.clone())
    }

    pub fn build(self) -> ValidationResult<StaffEmployee> {
        let (employee, fields) = self.into_parts("staff_employee")?;
        let department_shift = required!("staff_employee", fields.department_shift);
        let shift_time = required!("staff_employee", fields.shift_time);
        ensure_present("staff_employee", "department_shift", &department_shift)?;
        ensure_present("staff_employee", "shift_time", &shift_time)?;

        Ok(StaffEmployee::from_parts(employee, department_shift, shift_time))
    }
}
