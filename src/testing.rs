use crate::prelude::*;
use ansi_parser::{AnsiParser, AnsiSequence, Output};

/// Compares command output against an indented literal; ANSI styling is
/// rendered as pseudo-tags (`<b>`, `<fg=33>`) so that it stays visible.
#[macro_export]
macro_rules! assert_stdout {
    ($expected:literal, $actual:expr) => {
        $crate::testing::assert_out(
            indoc::indoc!($expected).trim(),
            String::from_utf8_lossy(&$actual).trim(),
        );
    };
}

/// Compares the `{:?}` rendering (i.e. including causes) of an error.
#[macro_export]
macro_rules! assert_result {
    ($expected:literal, $actual:expr) => {
        let actual = format!("{:?}", $actual.unwrap_err());

        pa::assert_str_eq!(indoc::indoc!($expected).trim(), actual);
    };
}

#[track_caller]
pub fn assert_out(expected: impl AsRef<str>, actual: impl AsRef<str>) {
    let actual = blank_whitespace_lines(render_styles(actual.as_ref()));
    let expected = blank_whitespace_lines(expected.as_ref());

    pa::assert_str_eq!(expected, actual);
}

#[derive(Default)]
struct StyledText {
    text: String,
    open_tags: Vec<&'static str>,
}

impl StyledText {
    fn apply(&mut self, mode: u8) {
        match mode {
            0 => {
                while let Some(tag) = self.open_tags.pop() {
                    self.text += &format!("</{}>", tag);
                }
            }

            1 => self.open("<b>", "b"),

            color @ 30..=37 => self.open(&format!("<fg={}>", color), "fg"),

            mode => panic!("Unsupported graphics mode in output: {}", mode),
        }
    }

    fn open(&mut self, opening: &str, tag: &'static str) {
        self.text += opening;
        self.open_tags.push(tag);
    }
}

fn render_styles(s: &str) -> String {
    let mut styled = StyledText::default();

    for item in s.ansi_parse() {
        match item {
            Output::TextBlock(text) => styled.text += text,

            Output::Escape(AnsiSequence::SetGraphicsMode(modes)) => {
                modes.iter().for_each(|&mode| styled.apply(mode));
            }

            Output::Escape(other) => {
                panic!("Unsupported escape sequence in output: {:?}", other);
            }
        }
    }

    styled.text
}

fn blank_whitespace_lines(s: impl AsRef<str>) -> String {
    s.as_ref()
        .lines()
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .join("\n")
}
