//! Stateless rendering of the board and its animated markers.

use super::app::App;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use tictactech_core::{Player, Position, Transform};

/// Marker scale below which only a dot is drawn.
const DOT_SCALE: f32 = 0.34;
/// Marker scale below which the small glyph is drawn.
const SMALL_SCALE: f32 = 0.67;
/// Blink opacity below which a marker is hidden.
const VISIBLE_OPACITY: f32 = 0.5;

/// Splits the terminal into title, board and status areas.
pub fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(9),    // Board
        Constraint::Length(3), // Status
    ])
    .areas(area)
}

/// Draws a full frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let [title_area, board_area, status_area] = layout(frame.area());

    let title = Paragraph::new(format!("TicTacTech  [{}]", app.theme_name()))
        .style(Style::new().fg(*theme.title()).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::new().style(Style::new().bg(*theme.board_background())));
    frame.render_widget(title, title_area);

    frame.render_widget(
        Block::new().style(Style::new().bg(*theme.board_background())),
        board_area,
    );
    for pos in Position::ALL {
        draw_cell(frame, app, theme, pos);
    }

    let sound = if app.sound_enabled() { "on" } else { "off" };
    let status_color = app
        .winner()
        .map_or(*theme.text(), |winner| theme.marker(winner));
    let status = Paragraph::new(vec![
        Line::from(app.status()),
        Line::from(format!(
            "click / arrows+enter / 1-9   r restart   t theme   m sound ({sound})   q quit"
        )),
    ])
    .style(Style::new().fg(status_color).bg(*theme.board_background()))
    .alignment(Alignment::Center);
    frame.render_widget(status, status_area);
}

fn draw_cell(frame: &mut Frame, app: &App, theme: &Theme, pos: Position) {
    let geometry = app.game().state().geometry();
    let area = to_terminal(geometry.cell_rect(pos)).intersection(app.board_area());
    if area.is_empty() {
        return;
    }

    let mut block = Block::bordered().border_style(Style::new().fg(*theme.grid_line()));
    if pos == app.cursor() {
        block = block.style(Style::new().bg(*theme.cursor()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let marker = app.game().controller().marker(pos);
    let player = app.game().state().board().get(pos).player();
    if let (Some(player), Some(transform)) = (player, marker) {
        let lines = marker_lines(player, transform, inner.height);
        let height = lines.len() as u16;
        let glyph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(Style::new().fg(theme.marker(player)).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(glyph, center_rect(inner, inner.width, height));
    }
}

/// Glyph rows for a marker at its current animated scale and opacity.
fn marker_lines(player: Player, transform: &Transform, room: u16) -> Vec<&'static str> {
    if transform.opacity < VISIBLE_OPACITY {
        return Vec::new();
    }
    let scale = transform.scale.x.min(transform.scale.y);
    match player {
        _ if scale < DOT_SCALE => vec!["·"],
        Player::X if scale < SMALL_SCALE || room < 3 => vec!["x"],
        Player::O if scale < SMALL_SCALE || room < 3 => vec!["o"],
        Player::X => vec![r"\ /", " X ", r"/ \"],
        Player::O => vec!["╭─╮", "│ │", "╰─╯"],
    }
}

/// Terminal rectangle covering a board-space rectangle.
fn to_terminal(rect: tictactech_core::Rect) -> Rect {
    Rect::new(
        rect.x.round() as u16,
        (rect.y / 2.0).round() as u16,
        rect.width.round() as u16,
        (rect.height / 2.0).round() as u16,
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vert);
    rect
}
