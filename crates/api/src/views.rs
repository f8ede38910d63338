//! HTML views for the fortune pages.
//!
//! Pure functions from data to document; no template engine, no I/O. All
//! interpolated data passes through [`escape`].

use fortunes_db::models::category::Category;
use fortunes_db::models::fortune_cookie::FortuneCookie;

/// Escape the five HTML-significant characters.
fn escape(input: &str) -> String {
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

/// Wrap page content in the shared document shell.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}</body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Homepage: every category as a link to its detail page.
pub fn render_homepage(categories: &[Category]) -> String {
    let mut items = String::new();
    for category in categories {
        items.push_str(&format!(
            "  <li><span class=\"icon icon-{icon}\"></span> \
             <a href=\"/category/{id}\">{name}</a></li>\n",
            icon = escape(&category.icon_key),
            id = category.id,
            name = escape(&category.name),
        ));
    }

    let body = format!("<h1>Fortune Categories</h1>\n<ul class=\"categories\">\n{items}</ul>\n");
    page("Fortunes", &body)
}

/// Category detail page: the category header plus all its fortunes.
/// Discontinued fortunes are shown with a marker, not hidden.
pub fn render_category(category: &Category, fortunes: &[FortuneCookie]) -> String {
    let mut rows = String::new();
    for fortune in fortunes {
        let discontinued = if fortune.discontinued {
            " <em class=\"discontinued\">(discontinued)</em>"
        } else {
            ""
        };
        rows.push_str(&format!(
            "  <li>{text}{discontinued} \
             <small>printed {printed} times, since {date}</small></li>\n",
            text = escape(&fortune.fortune),
            printed = fortune.number_printed,
            date = fortune.created_at.format("%Y-%m-%d"),
        ));
    }

    let body = format!(
        "<h1><span class=\"icon icon-{icon}\"></span> {name}</h1>\n\
         <ul class=\"fortunes\">\n{rows}</ul>\n\
         <p><a href=\"/\">Back to all categories</a></p>\n",
        icon = escape(&category.icon_key),
        name = escape(&category.name),
    );
    page(&category.name, &body)
}
