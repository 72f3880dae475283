use colored::{Color, Colorize};
use similar::{ChangeTag, TextDiff};
use std::fmt::{Display, Write};

struct Line(Option<usize>);

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            None => write!(f, "    "),
            Some(idx) => write!(f, "{:<4}", idx + 1),
        }
    }
}

/// Writes a line diff from `expected` to `actual`, one row per line with the
/// old and new line numbers in front.
pub(crate) fn fmt_diff<W: Write + ?Sized>(
    f: &mut W,
    expected: &str,
    actual: &str,
    color: bool,
) -> std::fmt::Result {
    let diff = TextDiff::from_lines(expected, actual);

    for change in diff.iter_all_changes() {
        let (sign, line_color) = match change.tag() {
            ChangeTag::Delete => ("-", Some(Color::Red)),
            ChangeTag::Insert => ("+", Some(Color::Green)),
            ChangeTag::Equal => (" ", None),
        };
        write!(
            f,
            "{} {} |",
            Line(change.old_index()),
            Line(change.new_index())
        )?;

        let line = format!("{}{}", sign, change);
        match line_color {
            Some(c) if color => write!(f, "{}", line.color(c))?,
            _ => write!(f, "{}", line)?,
        }
    }

    Ok(())
}

/// Renders the diff into a string, colored for terminal output.
pub fn render_diff(expected: &str, actual: &str) -> String {
    let mut rendered = String::new();
    // writing into a String cannot fail
    let _ = fmt_diff(&mut rendered, expected, actual, true);
    rendered
}
