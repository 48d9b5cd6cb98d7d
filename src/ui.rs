//! User interface rendering for the maze animation screen.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{animation::Cycle, App};

/// Key bindings shown in the tooltip below the maze.
pub(crate) const TOOLTIP: &str = "(r) regenerate / (p) pause / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// This function clears the frame, draws the current maze frame in a bordered block centered on
/// screen and a tooltip with the key bindings and the solver status at the bottom.
///
/// # Errors
///
/// This function may return errors from layout lookups or size conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    maze(&app.cycle, frame, maze_content_area)?;
    tooltip(&app.cycle, frame, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the text maze centered within the given area.
///
/// The block around the maze is sized to the rendered text plus its border, so the maze keeps its
/// shape no matter how large the terminal is. Terminals smaller than the maze clip it.
///
/// # Errors
///
/// This function may return errors if the rendered maze is too large to be measured in terminal
/// cells or a layout lookup fails.
pub(crate) fn maze(cycle: &Cycle, frame: &mut Frame, area: Rect) -> Result<()> {
    let text = cycle.frame();
    let rows = u16::try_from(text.lines().count())?.saturating_add(2);
    let columns = u16::try_from(
        text.lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default(),
    )?
    .saturating_add(2);

    let row_space = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(rows),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze row from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(columns),
        Constraint::Min(0),
    ])
    .split(row_space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    let block = Block::bordered()
        .title(" DFS Maze ")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let maze = Paragraph::new(Text::raw(text))
        .style(Style::default().fg(Color::Green))
        .block(block);

    frame.render_widget(maze, space);

    Ok(())
}

/// Renders the tooltip block with the key bindings and the current solver status.
pub(crate) fn tooltip(cycle: &Cycle, frame: &mut Frame, area: Rect) {
    let tooltip_block = Block::bordered()
        .title(TOOLTIP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let status = Paragraph::new(Line::raw(status_line(cycle)).centered()).block(tooltip_block);

    frame.render_widget(status, area);
}

/// Builds the status text shown under the key bindings.
pub(crate) fn status_line(cycle: &Cycle) -> String {
    let state = cycle.state();
    let phase = if cycle.is_paused() {
        "paused"
    } else if state.steps() == 0 {
        "generated"
    } else {
        state.status().label()
    };

    format!(
        "maze #{} | step {}/{} | {phase}",
        cycle.number(),
        state.steps(),
        state.budget()
    )
}
