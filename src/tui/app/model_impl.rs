//! `Model` trait implementation for the repository view application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `RepositoryApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::RepositoryApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;
use crate::tui::storage::{get_initial_terminal_size, get_view_context};

impl Model for RepositoryApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = get_initial_terminal_size();
        let model = get_view_context()
            .map_or_else(Self::new, Self::with_context)
            .with_dimensions(width, height);

        // Mounting happens through the update loop so the initial load is
        // issued exactly once, like every other effect.
        (model, Some(Self::mount_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg);
            if self.show_help && !matches!(mapped, Some(AppMsg::Quit)) {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.normalise_viewport(&self.render())
    }
}

impl RepositoryApp {
    /// Command emitting the synthetic mount message.
    pub(super) fn mount_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Mount) as Box<dyn Any + Send>) })
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces so shorter rows clear stale cells.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
