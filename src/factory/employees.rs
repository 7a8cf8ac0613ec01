use super::{Factory, traced};
use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_non_negative, ensure_present, ensure_u32};
use crate::entities::employee::{EmployeeBuilder, Manager, StaffEmployee};
use crate::entities::value_objects::{ContactDetails, PersonInfo};

/// Checked base fields shared by both employee variants
struct BaseArgs {
    employee_number: u32,
    salary: f64,
}

fn check_base(
    entity: &'static str,
    employee_number: i64,
    salary: f64,
) -> ValidationResult<BaseArgs> {
    Ok(BaseArgs {
        employee_number: ensure_u32(entity, "employee_number", employee_number, 1)?,
        salary: ensure_non_negative(entity, "salary", salary)?,
    })
}

fn with_references<K>(
    mut builder: EmployeeBuilder<K>,
    contact_details: Option<ContactDetails>,
    person_info: Option<PersonInfo>,
) -> EmployeeBuilder<K> {
    if let Some(contact_details) = contact_details {
        builder = builder.contact_details(contact_details);
    }
    if let Some(person_info) = person_info {
        builder = builder.person_info(person_info);
    }
    builder
}

impl Factory {
    /// Create a shift-working staff member
    #[allow(clippy::too_many_arguments)]
    pub fn create_staff_employee(
        &self,
        employee_number: i64,
        salary: f64,
        position: &str,
        department_shift: &str,
        shift_time: &str,
        contact_details: Option<ContactDetails>,
        person_info: Option<PersonInfo>,
    ) -> ValidationResult<StaffEmployee> {
        const ENTITY: &str = "staff_employee";
        traced(|| {
            ensure_present(ENTITY, "position", position)?;
            ensure_present(ENTITY, "department_shift", department_shift)?;
            ensure_present(ENTITY, "shift_time", shift_time)?;
            let base = check_base(ENTITY, employee_number, salary)?;

            let builder = StaffEmployee::builder()
                .employee_number(base.employee_number)
                .salary(base.salary)
                .position(position)
                .department_shift(department_shift)
                .shift_time(shift_time);
            with_references(builder, contact_details, person_info).build()
        })
    }

    /// Create a manager responsible for `num_employees` reports
    #[allow(clippy::too_many_arguments)]
    pub fn create_manager(
        &self,
        employee_number: i64,
        salary: f64,
        position: &str,
        manager_level: &str,
        num_employees: i64,
        contact_details: Option<ContactDetails>,
        person_info: Option<PersonInfo>,
    ) -> ValidationResult<Manager> {
        const ENTITY: &str = "manager";
        traced(|| {
            ensure_present(ENTITY, "position", position)?;
            ensure_present(ENTITY, "manager_level", manager_level)?;
            let base = check_base(ENTITY, employee_number, salary)?;
            let num_employees = ensure_u32(ENTITY, "num_employees", num_employees, 0)?;

            let builder = Manager::builder()
                .employee_number(base.employee_number)
                .salary(base.salary)
                .position(position)
                .manager_level(manager_level)
                .num_employees(num_employees);
            with_references(builder, contact_details, person_info).build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::entities::employee::EmployeeRecord;

    #[test]
    fn test_staff_employee_echoes_arguments() {
        let person = PersonInfo::new("Ayanda", "Zulu", None, "Male");
        let staff = Factory::default()
            .create_staff_employee(
                204,
                18500.0,
                "Packer",
                "Warehouse",
                "Night",
                None,
                Some(person.clone()),
            )
            .unwrap();

        assert_eq!(staff.employee_number(), 204);
        assert_eq!(staff.salary(), 18500.0);
        assert_eq!(staff.position(), "Packer");
        assert_eq!(staff.department_shift(), "Warehouse");
        assert_eq!(staff.shift_time(), "Night");
        assert_eq!(staff.person_info(), Some(&person));
        assert!(staff.contact_details().is_none());
    }

    #[test]
    fn test_employee_number_must_be_positive() {
        let factory = Factory::default();
        for number in [0, -7, i64::from(u32::MAX) + 1] {
            let err = factory
                .create_staff_employee(number, 1.0, "Packer", "Warehouse", "Night", None, None)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert_eq!(err.field(), "employee_number");
        }
    }

    #[test]
    fn test_manager_rules() {
        let factory = Factory::default();
        let manager = factory
            .create_manager(7, 55000.0, "Store Manager", "Senior", 12, None, None)
            .unwrap();
        assert_eq!(manager.manager_level(), "Senior");
        assert_eq!(manager.num_employees(), 12);

        let err = factory
            .create_manager(7, 55000.0, "Store Manager", "Senior", -1, None, None)
            .unwrap_err();
        assert_eq!(err.field(), "num_employees");

        let err = factory
            .create_manager(7, -1.0, "Store Manager", "Senior", 3, None, None)
            .unwrap_err();
        assert_eq!(err.field(), "salary");

        let err = factory
            .create_manager(7, f64::NAN, "", "Senior", 3, None, None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), "position");
    }
}
