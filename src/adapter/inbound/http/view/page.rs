//! Home, informational and error pages.

use super::layout;

/// Home page with the lucky number of the visit.
#[must_use]
pub fn home(lucky: u32) -> String {
    let body = format!(
        "<h1>Welcome to CRM Desk</h1>\n\
         <p>Your lucky number is <strong id=\"lucky\">{lucky}</strong>.</p>"
    );
    layout("Home", &body)
}

#[must_use]
pub fn about_us() -> String {
    layout(
        "About Us",
        "<h1>About Us</h1>\n\
         <p>We keep track of our customers, the companies they work for and the \
         employees who look after them.</p>",
    )
}

#[must_use]
pub fn contact_us() -> String {
    layout(
        "Contact Us",
        "<h1>Contact Us</h1>\n\
         <p>Questions about an account? Ask the employee assigned to it, or drop \
         by the front desk during office hours.</p>",
    )
}

#[must_use]
pub fn not_found() -> String {
    layout(
        "Not Found",
        "<h1>Not Found</h1>\n<p>The page you asked for does not exist.</p>\n\
         <p><a href=\"/\">Back to home</a></p>",
    )
}

#[must_use]
pub fn server_error() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>The request could not be completed. \
         Please try again.</p>",
    )
}
