//! SQL syntax highlighting.
//!
//! A small token highlighter for the SQL display panel: keywords, string
//! and numeric literals, and line comments. Anything it does not recognize
//! passes through unstyled, so malformed SQL still renders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP", "BY", "ORDER", "HAVING", "LIMIT", "OFFSET", "JOIN",
    "LEFT", "RIGHT", "INNER", "OUTER", "FULL", "CROSS", "ON", "AS", "AND", "OR", "NOT", "IN",
    "IS", "NULL", "LIKE", "BETWEEN", "CASE", "WHEN", "THEN", "ELSE", "END", "DISTINCT", "UNION",
    "ALL", "WITH", "ASC", "DESC", "COUNT", "SUM", "AVG", "MIN", "MAX", "INSERT", "INTO",
    "VALUES", "UPDATE", "SET", "DELETE", "CREATE", "TABLE", "CAST", "COALESCE",
];

fn keyword_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn string_style() -> Style {
    Style::default().fg(Color::Green)
}

fn number_style() -> Style {
    Style::default().fg(Color::Magenta)
}

fn comment_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Highlights SQL text into styled lines.
pub fn highlight_sql(sql: &str) -> Vec<Line<'static>> {
    sql.lines().map(highlight_line).collect()
}

fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();

    match comment_start(line) {
        Some(i) => {
            let (head, comment) = line.split_at(i);
            highlight_tokens(head, &mut spans);
            spans.push(Span::styled(comment.to_string(), comment_style()));
        }
        None => highlight_tokens(line, &mut spans),
    }

    Line::from(spans)
}

/// Finds the byte offset of a `--` comment marker, ignoring markers inside
/// single-quoted string literals.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;

    for i in 0..bytes.len() {
        match bytes[i] {
            b'\'' => in_string = !in_string,
            b'-' if !in_string && bytes.get(i + 1) == Some(&b'-') => return Some(i),
            _ => {}
        }
    }

    None
}

fn highlight_tokens(text: &str, spans: &mut Vec<Span<'static>>) {
    let mut chars = text.char_indices().peekable();
    let mut plain_start = 0;

    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            // String literal: scan to the closing quote (or end of line).
            let end = text[i + 1..]
                .find('\'')
                .map(|j| i + 1 + j + 1)
                .unwrap_or(text.len());
            push_plain(&text[plain_start..i], spans);
            spans.push(Span::styled(text[i..end].to_string(), string_style()));
            plain_start = end;
            while chars.peek().is_some_and(|&(j, _)| j < end) {
                chars.next();
            }
        }
    }

    push_plain(&text[plain_start..], spans);
}

/// Splits unquoted text into words and styles keywords and numbers.
fn push_plain(text: &str, spans: &mut Vec<Span<'static>>) {
    if text.is_empty() {
        return;
    }

    let mut word_start = None;

    let flush_word = |start: usize, end: usize, spans: &mut Vec<Span<'static>>| {
        let word = &text[start..end];
        if KEYWORDS.contains(&word.to_ascii_uppercase().as_str()) {
            spans.push(Span::styled(word.to_string(), keyword_style()));
        } else if word.chars().next().is_some_and(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.')
        {
            spans.push(Span::styled(word.to_string(), number_style()));
        } else {
            spans.push(Span::raw(word.to_string()));
        }
    };

    for (i, c) in text.char_indices() {
        let is_word = c.is_alphanumeric() || c == '_' || c == '.';
        match (word_start, is_word) {
            (None, true) => word_start = Some(i),
            (Some(start), false) => {
                flush_word(start, i, spans);
                word_start = None;
                spans.push(Span::raw(c.to_string()));
            }
            (None, false) => {
                spans.push(Span::raw(c.to_string()));
            }
            (Some(_), true) => {}
        }
    }

    if let Some(start) = word_start {
        flush_word(start, text.len(), spans);
    }
}
