//! Markdown preview rendering for tool descriptions.
//!
//! pulldown-cmark with syntect highlighting for fenced code blocks;
//! images are size-constrained so a pasted screenshot cannot blow up
//! the modal.

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET
        .get_or_init(ThemeSet::load_defaults)
        .themes
        .get("InspiredGitHub")
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render a description to preview HTML.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    InImage { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) => Some(l.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock {
                        lang,
                        content: String::new(),
                    };
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img src="{}" style="max-width: 100%; max-height: 300px; display: block; border-radius: 4px;" />"#,
                        escape_html(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    // Drop the alt-text events up to the matching end tag.
                    state = State::InImage { dropped_depth: 0 };
                }
                other => events.push(other),
            },

            State::InCodeBlock {
                ref mut lang,
                ref mut content,
            } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::InImage {
                ref mut dropped_depth,
            } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return format!("<pre><code>{}</code></pre>", escape_html(code));
    };

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme)
        .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn images_are_constrained() {
        let html = render_markdown("![alt](https://example.com/x.png)");
        assert!(html.contains("max-width: 100%"));
        assert!(!html.contains("alt</"));
    }

    #[test]
    fn escape_html_covers_the_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn fenced_code_becomes_highlighted_html() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
    }
}
