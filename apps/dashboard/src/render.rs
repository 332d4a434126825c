//! # HTML Renderer
//!
//! Turns a [`DashboardView`] into the dashboard page.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product Dashboard                                                      │
//! │  ┌──────────────┐ ┌──────────────────────────┐ ┌────────┐               │
//! │  │ Category ▾   │ │ Search by name/category  │ │ Apply  │   <form get>  │
//! │  └──────────────┘ └──────────────────────────┘ └────────┘               │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐                     │
//! │  │ Products     │ │ Stock value  │ │ Avg. price   │   metric cards      │
//! │  │ 2            │ │ R$ 250,00    │ │ 100.00       │                     │
//! │  └──────────────┘ └──────────────┘ └──────────────┘                     │
//! │                                                                         │
//! │  ID │ Name     │ Category    │ Price      │ Quantity   <table>         │
//! │  ───┼──────────┼─────────────┼────────────┼─────────                    │
//! │  1  │ Mouse    │ Peripherals │ R$ 50,00   │ 2                           │
//! │                                                                         │
//! │  (or "No products found." instead of the table)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every piece of product or user text goes through [`escape_html`].

use std::fmt::{self, Display, Formatter};

use vitrine_core::{DashboardView, MetricCards, ProductRow, ViewBody};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem;color:#222}\
form{display:flex;gap:.5rem;margin-bottom:1.5rem}\
.cards{display:flex;gap:1rem;margin-bottom:1.5rem}\
.card{border:1px solid #ddd;border-radius:6px;padding:.75rem 1.25rem;min-width:10rem}\
.card h2{font-size:.85rem;margin:0 0 .25rem;color:#666}\
.card p{font-size:1.4rem;margin:0}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #eee;padding:.4rem .6rem;text-align:left}\
.empty{color:#888}";

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page.
pub fn render_page(view: &DashboardView) -> String {
    Page(view).to_string()
}

/// The dashboard page, written straight into any formatter.
pub struct Page<'a>(pub &'a DashboardView);

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;

        f.write_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n")?;
        f.write_str("<title>Product Dashboard</title>\n")?;
        writeln!(f, "<style>{STYLE}</style>")?;
        f.write_str("</head>\n<body>\n<h1>Product Dashboard</h1>\n")?;

        write_filters(f, view)?;
        write_cards(f, &view.metrics)?;

        match &view.body {
            ViewBody::Table { rows } => write_table(f, rows)?,
            ViewBody::Empty { message } => {
                writeln!(f, "<p class=\"empty\">{}</p>", escape_html(message))?
            }
        }

        f.write_str("</body>\n</html>\n")
    }
}

fn write_filters(f: &mut Formatter<'_>, view: &DashboardView) -> fmt::Result {
    f.write_str("<form method=\"get\" action=\"/\">\n")?;
    f.write_str("<select name=\"category\" aria-label=\"Category\">\n")?;
    for option in &view.categories {
        let label = escape_html(&option.label);
        let selected = if option.selected { " selected" } else { "" };
        writeln!(f, "<option value=\"{label}\"{selected}>{label}</option>")?;
    }
    f.write_str("</select>\n")?;
    writeln!(
        f,
        "<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search by name or category\">",
        escape_html(&view.search_text)
    )?;
    f.write_str("<button type=\"submit\">Apply</button>\n</form>\n")
}

fn write_cards(f: &mut Formatter<'_>, metrics: &MetricCards) -> fmt::Result {
    f.write_str("<section class=\"cards\">\n")?;
    write_card(f, "Products", &metrics.count.to_string())?;
    write_card(f, "Stock value", &metrics.total_value)?;
    write_card(f, "Average price", &metrics.average_price)?;
    f.write_str("</section>\n")
}

fn write_card(f: &mut Formatter<'_>, title: &str, value: &str) -> fmt::Result {
    writeln!(
        f,
        "<div class=\"card\"><h2>{title}</h2><p>{}</p></div>",
        escape_html(value)
    )
}

fn write_table(f: &mut Formatter<'_>, rows: &[ProductRow]) -> fmt::Result {
    f.write_str("<table>\n<thead><tr><th>ID</th><th>Name</th><th>Category</th><th>Price</th><th>Quantity</th></tr></thead>\n<tbody>\n")?;
    for row in rows {
        writeln!(
            f,
            "<tr data-id=\"{id}\"><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.name),
            escape_html(&row.category),
            escape_html(&row.price),
            row.quantity,
            id = row.id,
        )?;
    }
    f.write_str("</tbody>\n</table>\n")
}
