//! Server-rendered HTML.
//!
//! Every page is a body fragment wrapped in [`layout`]. Values coming from
//! the database or the request always pass through [`escape`].

pub mod customer;
pub mod employee;
pub mod page;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/customers", "Customers"),
    ("/employees", "Employees"),
    ("/about-us", "About Us"),
    ("/contact-us", "Contact Us"),
];

/// Wrap a page body in the shared document shell and navigation bar.
#[must_use]
pub fn layout(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        nav.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>"));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | CRM Desk</title>\n\
         </head>\n\
         <body>\n\
         <nav><ul>{nav}</ul></nav>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// `<option>` list for a select box, marking `selected` when it matches.
pub(crate) fn options<'a, I>(items: I, selected: Option<i32>) -> String
where
    I: IntoIterator<Item = (i32, &'a str)>,
{
    let mut out = String::new();
    for (value, label) in items {
        let marker = if selected == Some(value) {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{value}\"{marker}>{}</option>",
            escape(label)
        ));
    }
    out
}
