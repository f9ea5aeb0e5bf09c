//! History listing rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};
use rewind_engine::GameView;

/// Renders the jump list in the engine's display order.
///
/// The current entry is bold; `selected` (a display row) is shown
/// reversed while the history pane has focus.
pub fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, selected: Option<usize>) {
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let marker = if *item.is_current() { "▶ " } else { "  " };
            let mut style = if *item.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if selected == Some(row) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::styled(format!("{}{}", marker, item), style))
        })
        .collect();

    let title = format!("History ({})", view.sort_order());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}
