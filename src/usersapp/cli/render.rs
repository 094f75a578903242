//! # Rendering
//!
//! The renderer is the message-formatting capability of the CLI: commands hand back
//! leveled [`CmdMessage`]s and users, and this module decides how they look.
//!
//! Layout math (column widths, padding) is done on plain text with `unicode-width`;
//! color is applied afterwards so it never skews alignment.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;
use usersapp::action::Action;
use usersapp::api::{CmdMessage, MessageLevel};
use usersapp::model::User;

const SUCCESS_MARKER: &str = "✔";
const ERROR_MARKER: &str = "✖";
const INFO_MARKER: &str = "ℹ";
const RULE: &str = "====================================";
const TABLE_HEADERS: [&str; 3] = ["(index)", "name", "age"];

pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn message(&mut self, message: &CmdMessage) -> io::Result<()> {
        let (marker, style): (&str, fn(&str) -> ColoredString) = match message.level {
            MessageLevel::Success => (SUCCESS_MARKER, |s: &str| s.green()),
            MessageLevel::Error => (ERROR_MARKER, |s: &str| s.red()),
            MessageLevel::Info => (INFO_MARKER, |s: &str| s.cyan()),
            MessageLevel::Plain => return writeln!(self.out, "{}", message.content),
        };
        let line = self.paint(&format!("{} {}", marker, message.content), style);
        writeln!(self.out, "{}", line)
    }

    pub fn messages(&mut self, messages: &[CmdMessage]) -> io::Result<()> {
        for message in messages {
            self.message(message)?;
        }
        Ok(())
    }

    pub fn users(&mut self, users: &[User]) -> io::Result<()> {
        let table = format_table(users);
        let mut lines = table.lines();
        // top border, header row
        for line in lines.by_ref().take(2) {
            let line = self.paint(line, |s| s.bold());
            writeln!(self.out, "{}", line)?;
        }
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        let title = self.paint("Welcome to the UsersApp!", |s| s.bold());
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", RULE)?;
        self.message(&CmdMessage::info("Available actions"))?;
        writeln!(self.out)?;
        self.actions()?;
        writeln!(self.out)
    }

    pub fn actions(&mut self) -> io::Result<()> {
        for action in Action::ALL {
            writeln!(self.out, "{} – {}", action.name(), action.description())?;
        }
        Ok(())
    }
}

/// Renders users as a box-drawn table with a zero-based index column.
pub fn format_table(users: &[User]) -> String {
    let rows: Vec<[String; 3]> = users
        .iter()
        .enumerate()
        .map(|(i, u)| [i.to_string(), u.name.clone(), u.age.to_string()])
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let row_line = |cells: &[&str]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.width())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = border("┌", "┬", "┐");
    out.push_str(&row_line(&TABLE_HEADERS[..]));
    out.push_str(&border("├", "┼", "┤"));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&row_line(&cells));
    }
    out.push_str(&border("└", "┴", "┘"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer<Vec<u8>> {
        Renderer::new(Vec::new(), false)
    }

    fn output(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn user(name: &str, age: u32) -> User {
        User {
            name: name.to_string(),
            age: f64::from(age),
        }
    }

    #[test]
    fn messages_carry_level_marker() {
        let mut renderer = plain();
        renderer
            .messages(&[
                CmdMessage::success("added"),
                CmdMessage::error("nope"),
                CmdMessage::info("fyi"),
                CmdMessage::plain("as is"),
            ])
            .unwrap();

        assert_eq!(output(renderer), "✔ added\n✖ nope\nℹ fyi\nas is\n");
    }

    #[test]
    fn table_has_one_row_per_user() {
        let table = format_table(&[user("Anna", 30)]);
        let expected = "\
┌─────────┬──────┬─────┐
│ (index) │ name │ age │
├─────────┼──────┼─────┤
│ 0       │ Anna │ 30  │
└─────────┴──────┴─────┘
";
        assert_eq!(table, expected);
    }

    #[test]
    fn table_widens_for_long_names() {
        let table = format_table(&[user("Bob", 25), user("Maximiliane", 7)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("│ Bob         │"));
        assert!(lines[4].contains("│ 1       │ Maximiliane │ 7   │"));
        let width = lines[0].width();
        assert!(lines.iter().all(|l| l.width() == width));
    }

    #[test]
    fn table_aligns_wide_characters() {
        let table = format_table(&[user("山田", 40), user("Al", 3)]);
        let widths: Vec<usize> = table.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn fractional_ages_render_like_numbers() {
        let table = format_table(&[
            User {
                name: "Anna".into(),
                age: 30.5,
            },
            user("Bob", 30),
        ]);
        assert!(table.contains("│ Anna │ 30.5 │"));
        assert!(table.contains("│ Bob  │ 30   │"));
    }

    #[test]
    fn users_writes_whole_table() {
        let mut renderer = plain();
        renderer.users(&[user("Anna", 30)]).unwrap();
        assert_eq!(output(renderer), format_table(&[user("Anna", 30)]));
    }

    #[test]
    fn banner_lists_every_action() {
        let mut renderer = plain();
        renderer.banner().unwrap();
        let text = output(renderer);

        assert!(text.contains("Welcome to the UsersApp!"));
        assert!(text.contains("ℹ Available actions"));
        for action in Action::ALL {
            assert!(text.contains(&format!("{} – {}", action.name(), action.description())));
        }
    }
}
