//! Flattening of Markdown bodies into the plain text the index searches.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

/// Extracts the readable text of a Markdown document.
///
/// Inline markup is removed, code is kept verbatim, raw HTML and JSX are
/// dropped, and whitespace is collapsed to single spaces.
pub(crate) fn plain_text(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let mut text = String::with_capacity(markdown.len());
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::Rule => text.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes MDX `import`/`export` statements so they are not indexed as prose.
pub(crate) fn strip_mdx_statements(body: &str) -> String {
    body.lines()
        .filter(|line| !(line.starts_with("import ") || line.starts_with("export ")))
        .collect::<Vec<_>>()
        .join("\n")
}
