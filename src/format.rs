//! Text rendering of the search dropdown.

use std::fmt::Write as _;

use crate::search::GroupedResults;
use crate::widget::SearchWidget;

/// Renders what the widget currently shows.
///
/// A blank term renders nothing. A term without results renders a short
/// "no results" hint instead of an empty panel.
pub fn render_panel(widget: &SearchWidget) -> String {
    if widget.is_panel_visible() {
        return render_groups(widget.results());
    }
    if widget.term().trim().is_empty() {
        return String::new();
    }

    let mut msg = format!("No results found for '{}'.\n", widget.term());
    if !widget.is_ready() {
        msg.push_str("The search index is not loaded.\n");
    }
    msg
}

/// Renders each non-empty group under its heading, numbering entries in
/// display order so they can be picked by position.
pub fn render_groups(results: &GroupedResults) -> String {
    let mut output = String::new();
    let mut position = 0;

    for (group, matches) in results.iter() {
        let _ = writeln!(output, "{} ({})", group.label(), group);
        for m in matches {
            position += 1;
            let marker = if m.fuzzy { " ~" } else { "" };
            let _ = writeln!(output, "  {}. {} → {}{}", position, m.doc.title, m.slug, marker);
        }
    }

    output
}
