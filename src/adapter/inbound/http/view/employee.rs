//! Employee pages.

use super::{escape, layout, options};
use crate::domain::{Department, EmployeeListing};

/// Employee list with department names.
#[must_use]
pub fn list(employees: &[EmployeeListing]) -> String {
    let mut rows = String::new();
    for listing in employees {
        rows.push_str(&format!(
            "<tr><td>{first}</td><td>{last}</td><td>{department}</td></tr>\n",
            first = escape(&listing.employee.first_name),
            last = escape(&listing.employee.last_name),
            department = escape(&listing.department_name),
        ));
    }
    if employees.is_empty() {
        rows.push_str("<tr><td colspan=\"3\">No employees yet.</td></tr>\n");
    }

    let body = format!(
        "<h1>Employees</h1>\n\
         <p><a href=\"/employees/create\">Add employee</a></p>\n\
         <table>\n\
         <thead><tr><th>First name</th><th>Last name</th><th>Department</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>"
    );
    layout("Employees", &body)
}

/// Employee create form.
#[must_use]
pub fn create_form(departments: &[Department]) -> String {
    let department_options = options(
        departments.iter().map(|d| (d.id.get(), d.name.as_str())),
        None,
    );
    let body = format!(
        "<h1>Add employee</h1>\n\
         <form method=\"POST\" action=\"/employees/create\">\n\
         <label>First name <input type=\"text\" name=\"first_name\" required></label>\n\
         <label>Last name <input type=\"text\" name=\"last_name\" required></label>\n\
         <label>Department <select name=\"department_id\">{department_options}</select></label>\n\
         <button type=\"submit\">Create</button>\n\
         </form>"
    );
    layout("Add employee", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartmentId, Employee, EmployeeId};

    #[test]
    fn list_shows_department_names() {
        let listing = EmployeeListing {
            employee: Employee {
                id: EmployeeId::new(1),
                first_name: "Mary".into(),
                last_name: "Jackson".into(),
                department_id: DepartmentId::new(1),
            },
            department_name: "R&D".into(),
        };
        let html = list(&[listing]);
        assert!(html.contains("<td>Mary</td><td>Jackson</td><td>R&amp;D</td>"));
    }

    #[test]
    fn create_form_lists_departments() {
        let departments = vec![Department {
            id: DepartmentId::new(3),
            name: "Support".into(),
        }];
        let html = create_form(&departments);
        assert!(html.contains("<option value=\"3\">Support</option>"));
        assert!(html.contains("action=\"/employees/create\""));
    }
}
