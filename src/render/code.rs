// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only, line-numbered code blocks with lightweight token highlighting.
//!
//! Highlighting is lexical only: sources are split into coloured spans and never parsed or
//! validated. The text of a highlighted line is always exactly the source line.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::FileName;

use super::text::{decimal_width, strip_leading_newline};

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "var", "void", "volatile", "while",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plain,
    Keyword,
    Type,
    String,
    Char,
    Number,
    Comment,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    /// 1-based line number.
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
    PlainText,
}

impl Language {
    pub fn for_file(name: &FileName) -> Self {
        match name.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("java") => Self::Java,
            _ => Self::PlainText,
        }
    }
}

/// A highlighted source file ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Language,
    pub lines: Vec<HighlightedLine>,
}

impl CodeBlock {
    pub fn new(language: Language, source: &str) -> Self {
        let source = strip_leading_newline(source);
        let lines = match language {
            Language::Java => highlight_java(source),
            Language::PlainText => plain_lines(source),
        };
        Self { language, lines }
    }

    /// Width of the line-number gutter (digits of the last line number).
    pub fn gutter_width(&self) -> usize {
        decimal_width(self.lines.len())
    }

    /// `<number> │ <line>` rows, numbers right-aligned.
    pub fn to_plain(&self) -> String {
        let width = self.gutter_width();
        self.lines
            .iter()
            .map(|line| {
                let text = line.text();
                if text.is_empty() {
                    format!("{:>width$} │", line.number)
                } else {
                    format!("{:>width$} │ {text}", line.number)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn plain_lines(source: &str) -> Vec<HighlightedLine> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| HighlightedLine {
            number: idx + 1,
            tokens: if line.is_empty() {
                Vec::new()
            } else {
                vec![Token { kind: TokenKind::Plain, text: line.to_owned() }]
            },
        })
        .collect()
}

fn java_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r#"(?P<line_comment>//.*)"#,
            r#"|(?P<block_comment>/\*)"#,
            r#"|(?P<string>"(?:[^"\\]|\\.)*"?)"#,
            r#"|(?P<char>'(?:[^'\\]|\\.)*'?)"#,
            r#"|(?P<annotation>@[A-Za-z_][A-Za-z0-9_]*)"#,
            r#"|(?P<number>\b\d[\d_]*(?:\.\d+)?[lLfFdD]?\b)"#,
            r#"|(?P<ident>[A-Za-z_$][A-Za-z0-9_$]*)"#,
        ))
        .expect("java token pattern compiles")
    })
}

/// Splits Java source into highlighted lines. Block comments carry across lines.
pub fn highlight_java(source: &str) -> Vec<HighlightedLine> {
    let mut in_block_comment = false;
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| HighlightedLine {
            number: idx + 1,
            tokens: highlight_java_line(line, &mut in_block_comment),
        })
        .collect()
}

fn highlight_java_line(line: &str, in_block_comment: &mut bool) -> Vec<Token> {
    let re = java_token_regex();
    let mut tokens = Vec::<Token>::new();
    let mut pos = 0usize;

    while pos < line.len() {
        if *in_block_comment {
            let end = match line[pos..].find("*/") {
                Some(offset) => {
                    *in_block_comment = false;
                    pos + offset + 2
                }
                None => line.len(),
            };
            push_token(&mut tokens, TokenKind::Comment, &line[pos..end]);
            pos = end;
            continue;
        }

        let Some(caps) = re.captures_at(line, pos) else {
            push_token(&mut tokens, TokenKind::Plain, &line[pos..]);
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if whole.start() > pos {
            push_token(&mut tokens, TokenKind::Plain, &line[pos..whole.start()]);
        }

        if caps.name("block_comment").is_some() {
            *in_block_comment = true;
            push_token(&mut tokens, TokenKind::Comment, whole.as_str());
            pos = whole.end();
            continue;
        }

        let kind = if caps.name("line_comment").is_some() {
            TokenKind::Comment
        } else if caps.name("string").is_some() {
            TokenKind::String
        } else if caps.name("char").is_some() {
            TokenKind::Char
        } else if caps.name("annotation").is_some() {
            TokenKind::Annotation
        } else if caps.name("number").is_some() {
            TokenKind::Number
        } else {
            classify_identifier(whole.as_str())
        };
        push_token(&mut tokens, kind, whole.as_str());
        pos = whole.end();
    }

    tokens
}

fn classify_identifier(ident: &str) -> TokenKind {
    if JAVA_KEYWORDS.contains(&ident) {
        TokenKind::Keyword
    } else if ident.starts_with(|ch: char| ch.is_ascii_uppercase()) {
        TokenKind::Type
    } else {
        TokenKind::Plain
    }
}

fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = tokens.last_mut() {
        if last.kind == kind {
            last.text.push_str(text);
            return;
        }
    }
    tokens.push(Token { kind, text: text.to_owned() });
}
