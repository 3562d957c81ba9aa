//! Customer pages.

use super::{escape, layout, options};
use crate::domain::{Company, Customer, CustomerListing, Employee, EmployeeId};

/// Customer list with the search form, re-filled with the submitted terms.
#[must_use]
pub fn list(customers: &[CustomerListing], first_name: &str, last_name: &str) -> String {
    let mut rows = String::new();
    for listing in customers {
        let c = &listing.customer;
        rows.push_str(&format!(
            "<tr><td>{first}</td><td>{last}</td><td>{rating}</td><td>{company}</td>\
             <td><a href=\"/customers/{id}/update\">Update</a> \
             <a href=\"/customers/{id}/delete\">Delete</a></td></tr>\n",
            first = escape(&c.first_name),
            last = escape(&c.last_name),
            rating = c.rating,
            company = escape(&listing.company_name),
            id = c.id,
        ));
    }
    if customers.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No customers found.</td></tr>\n");
    }

    let body = format!(
        "<h1>Customers</h1>\n\
         <form method=\"GET\" action=\"/customers\">\n\
         <label>First name <input type=\"text\" name=\"first_name\" value=\"{first_name}\"></label>\n\
         <label>Last name <input type=\"text\" name=\"last_name\" value=\"{last_name}\"></label>\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n\
         <p><a href=\"/customers/create\">Add customer</a></p>\n\
         <table>\n\
         <thead><tr><th>First name</th><th>Last name</th><th>Rating</th><th>Company</th><th></th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>",
        first_name = escape(first_name),
        last_name = escape(last_name),
    );
    layout("Customers", &body)
}

/// Empty create form.
#[must_use]
pub fn create_form(companies: &[Company], employees: &[Employee]) -> String {
    let body = format!(
        "<h1>Add customer</h1>\n\
         <form method=\"POST\" action=\"/customers/create\">\n{}\n\
         <button type=\"submit\">Create</button>\n\
         </form>",
        fields(None, companies, employees, &[]),
    );
    layout("Add customer", &body)
}

/// Update form pre-filled with the customer, its company and its employees.
#[must_use]
pub fn update_form(
    customer: &Customer,
    companies: &[Company],
    employees: &[Employee],
    assigned: &[EmployeeId],
) -> String {
    let body = format!(
        "<h1>Update {name}</h1>\n\
         <form method=\"POST\" action=\"/customers/{id}/update\">\n{fields}\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        name = escape(&customer.full_name()),
        id = customer.id,
        fields = fields(Some(customer), companies, employees, assigned),
    );
    layout("Update customer", &body)
}

/// Delete confirmation.
#[must_use]
pub fn delete_confirm(customer: &Customer) -> String {
    let body = format!(
        "<h1>Delete customer</h1>\n\
         <p>Are you sure you want to delete {name}?</p>\n\
         <form method=\"POST\" action=\"/customers/{id}/delete\">\n\
         <button type=\"submit\">Confirm delete</button>\n\
         <a href=\"/customers\">Cancel</a>\n\
         </form>",
        name = escape(&customer.full_name()),
        id = customer.id,
    );
    layout("Delete customer", &body)
}

fn fields(
    customer: Option<&Customer>,
    companies: &[Company],
    employees: &[Employee],
    assigned: &[EmployeeId],
) -> String {
    let first_name = customer.map_or("", |c| c.first_name.as_str());
    let last_name = customer.map_or("", |c| c.last_name.as_str());
    let rating = customer.map(|c| c.rating.to_string()).unwrap_or_default();
    let company_options = options(
        companies.iter().map(|c| (c.id.get(), c.name.as_str())),
        customer.map(|c| c.company_id.get()),
    );

    let mut checkboxes = String::new();
    for employee in employees {
        let checked = if assigned.contains(&employee.id) {
            " checked"
        } else {
            ""
        };
        checkboxes.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"employees\" value=\"{id}\"{checked}> {name}</label>\n",
            id = employee.id,
            name = escape(&employee.full_name()),
        ));
    }

    format!(
        "<label>First name <input type=\"text\" name=\"first_name\" value=\"{first}\" required></label>\n\
         <label>Last name <input type=\"text\" name=\"last_name\" value=\"{last}\" required></label>\n\
         <label>Rating <input type=\"number\" name=\"rating\" value=\"{rating}\" required></label>\n\
         <label>Company <select name=\"company_id\">{company_options}</select></label>\n\
         <fieldset><legend>Employees</legend>\n{checkboxes}</fieldset>",
        first = escape(first_name),
        last = escape(last_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanyId, CustomerId, DepartmentId};

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new(7),
            first_name: "Ada".into(),
            last_name: "<Lovelace>".into(),
            rating: 4,
            company_id: CompanyId::new(2),
        }
    }

    fn companies() -> Vec<Company> {
        vec![
            Company {
                id: CompanyId::new(1),
                name: "Acme".into(),
            },
            Company {
                id: CompanyId::new(2),
                name: "Globex".into(),
            },
        ]
    }

    fn employees() -> Vec<Employee> {
        vec![
            Employee {
                id: EmployeeId::new(1),
                first_name: "Mary".into(),
                last_name: "Jackson".into(),
                department_id: DepartmentId::new(1),
            },
            Employee {
                id: EmployeeId::new(2),
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                department_id: DepartmentId::new(2),
            },
        ]
    }

    #[test]
    fn list_escapes_values_and_links_actions() {
        let listing = CustomerListing {
            customer: customer(),
            company_name: "Globex".into(),
        };
        let html = list(&[listing], "Ada", "");
        assert!(html.contains("<td>&lt;Lovelace&gt;</td>"));
        assert!(html.contains("href=\"/customers/7/update\""));
        assert!(html.contains("href=\"/customers/7/delete\""));
        assert!(html.contains("name=\"first_name\" value=\"Ada\""));
    }

    #[test]
    fn empty_list_says_so() {
        assert!(list(&[], "", "").contains("No customers found."));
    }

    #[test]
    fn update_form_preselects_company_and_employees() {
        let html = update_form(&customer(), &companies(), &employees(), &[EmployeeId::new(2)]);
        assert!(html.contains("<option value=\"2\" selected>Globex</option>"));
        assert!(html.contains("<option value=\"1\">Acme</option>"));
        assert!(html.contains("value=\"2\" checked> Grace Hopper"));
        assert!(html.contains("value=\"1\"> Mary Jackson"));
        assert!(html.contains("action=\"/customers/7/update\""));
    }

    #[test]
    fn create_form_starts_blank() {
        let html = create_form(&companies(), &employees());
        assert!(html.contains("name=\"first_name\" value=\"\""));
        assert!(!html.contains(" selected"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn delete_confirm_names_the_customer() {
        let html = delete_confirm(&customer());
        assert!(html.contains("delete Ada &lt;Lovelace&gt;?"));
        assert!(html.contains("action=\"/customers/7/delete\""));
    }
}
