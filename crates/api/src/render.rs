//! HTML rendering for the character list pages.

use blip_core::types::flag_label;
use blip_db::models::character::Character;

/// Navigation links shown on every page.
const NAV: &[(&str, &str)] = &[
    ("/all", "All"),
    ("/blipped", "Blipped"),
    ("/safe", "Safe"),
    ("/unknown", "Unknown"),
    ("/sync", "Sync"),
];

/// Render a full page listing `characters` under `title`.
pub fn character_page(title: &str, characters: &[Character]) -> String {
    let title = escape(title);

    let mut nav = String::new();
    for (href, label) in NAV {
        nav.push_str(&format!("<a href=\"{href}\">{label}</a> "));
    }

    let mut cards = String::new();
    for c in characters {
        cards.push_str(&format!(
            "<li class=\"character {class}\" data-marvel-id=\"{id}\">\
<img src=\"{thumb}\" alt=\"{name}\" width=\"150\">\
<h2>{name}</h2>\
<p>#{id} &middot; {label}</p>\
<a href=\"/blip/{id}\">blip</a> <a href=\"/unblip/{id}\">unblip</a>\
</li>",
            class = flag_label(c.blip).to_ascii_lowercase(),
            id = c.marvel_id,
            thumb = escape(&c.thumbnail),
            name = escape(&c.name),
            label = flag_label(c.blip),
        ));
    }
    if cards.is_empty() {
        cards.push_str("<li>No characters.</li>");
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>\
<h1>{title}</h1>\
<nav>{nav}</nav>\
<p>{count} characters</p>\
<ul class=\"characters\">{cards}</ul>\
</body></html>",
        count = characters.len(),
    )
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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
