//! HTML table rendering.
//!
//! This module turns the ranked summary into a self-contained HTML document:
//! a two-column table with one row per employee and a background highlight
//! on rows below the low-hours threshold.

use crate::config::ReportConfig;
use crate::models::EmployeeSummary;

/// Background marking applied to rows below the low-hours threshold.
const LOW_HOURS_STYLE: &str = " style='background-color: #f99;'";

/// Renders the ranked summary as a complete HTML document.
///
/// Rows appear in summary order. A row whose total is strictly below
/// `config.low_hours_threshold` receives the low-hours background marking;
/// a row at exactly the threshold does not. Employee names are HTML-escaped.
///
/// The output is a pure function of its inputs: the same summary and config
/// produce a byte-identical document. An empty summary renders a table with
/// only the header row.
///
/// # Examples
///
/// ```
/// use time_report::config::ReportConfig;
/// use time_report::models::EmployeeSummary;
/// use time_report::render::render_table;
///
/// let summary = vec![EmployeeSummary { name: "Alice".to_string(), total_time: 160 }];
/// let html = render_table(&summary, &ReportConfig::default());
/// assert!(html.contains("<td>Alice</td><td>160</td>"));
/// ```
pub fn render_table(summary: &[EmployeeSummary], config: &ReportConfig) -> String {
    let mut html = String::from(
        "<html><head><title>Employee Time</title></head><body>\
         <h2>Employee Time Report</h2>\
         <table border='1' cellpadding='5'>\
         <tr><th>Name</th><th>Total Time Worked</th></tr>",
    );

    for employee in summary {
        let marking = if employee.total_time < config.low_hours_threshold {
            LOW_HOURS_STYLE
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr{}><td>{}</td><td>{}</td></tr>",
            marking,
            escape_html(&employee.name),
            employee.total_time
        ));
    }

    html.push_str("</table></body></html>");
    html
}

/// Escapes HTML metacharacters in text content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
