use chrono::{DateTime, Utc};
use colored::Colorize;
use pocketapp::commands::counts::Counts;
use pocketapp::commands::{CmdMessage, MessageLevel, ProfileView};
use pocketapp::index::DisplayTodo;
use pocketapp::model::{FormMode, ProfileField};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 12;
const NOT_PROVIDED: &str = "Not provided";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub(super) fn print_error(message: &str) {
    println!("{}", message.red());
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn render_counts(counts: &Counts) -> Option<String> {
    counts.summary().map(|s| s.dimmed().to_string())
}

pub(super) fn render_todo_list(todos: &[DisplayTodo], now: DateTime<Utc>) -> String {
    if todos.is_empty() {
        return format!("{}\n", "No todos yet. Add one with: add <text>".dimmed());
    }

    let mut out = String::new();
    for dt in todos {
        let idx_str = format!("{:>3}. ", dt.index);
        let checkbox = if dt.todo.is_completed() { "[x] " } else { "[ ] " };
        let time_ago = format_time_ago(dt.todo.created_at(), now);

        let fixed = idx_str.width() + checkbox.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let text = truncate_to_width(dt.todo.text(), available);
        let padding = available.saturating_sub(text.width());

        let text_colored = if dt.todo.is_completed() {
            text.strikethrough().dimmed().to_string()
        } else {
            text
        };
        let checkbox_colored = if dt.todo.is_completed() {
            checkbox.green()
        } else {
            checkbox.normal()
        };

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            idx_str.yellow(),
            checkbox_colored,
            text_colored,
            " ".repeat(padding),
            time_ago.dimmed()
        ));
    }
    out
}

pub(super) fn render_profile(view: &ProfileView) -> String {
    let heading = match view.mode {
        FormMode::Editing => "Edit Profile",
        FormMode::Viewing => "My Profile",
    };
    let mut out = format!("{}\n", heading.bold());

    let picture = view
        .profile
        .profile_image
        .as_deref()
        .unwrap_or(NOT_PROVIDED);
    out.push_str(&render_field("Picture", picture));

    for field in ProfileField::ALL {
        out.push_str(&render_field(field.label(), view.profile.field(field)));
    }
    out
}

fn render_field(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let value = if value.trim().is_empty() {
        NOT_PROVIDED.dimmed().to_string()
    } else {
        value.to_string()
    };
    format!("  {}{}{}\n", label.cyan(), " ".repeat(padding), value)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
