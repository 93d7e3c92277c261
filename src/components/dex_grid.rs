//! Two-column card grid for the roster

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_dispatch::EventKind;

use super::{Component, LoadingIndicator, LoadingIndicatorProps};
use crate::action::Action;
use crate::format::{capitalize, format_dex_id};
use crate::lookup::primary_type_color;
use crate::state::EntrySummary;

pub const GRID_COLUMNS: usize = 2;
/// Border, name/id line, type tags line, border.
pub const CARD_HEIGHT: u16 = 4;

pub struct DexGridProps<'a> {
    pub entries: &'a [EntrySummary],
    pub selected: usize,
    pub is_loading: bool,
    pub tick: u64,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct DexGrid {
    /// First visible card row, kept so the selection stays on screen.
    scroll_row: usize,
}

impl DexGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn scroll_to(&mut self, selected_row: usize, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if selected_row < self.scroll_row {
            self.scroll_row = selected_row;
        } else if selected_row >= self.scroll_row + visible_rows {
            self.scroll_row = selected_row + 1 - visible_rows;
        }
    }
}

impl Component<Action> for DexGrid {
    type Props<'a> = DexGridProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.is_loading {
            return None;
        }
        let step = GRID_COLUMNS as i16;
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Some(Action::DexSelectionMove(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::DexSelectionMove(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::DexSelectionMove(-step)),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::DexSelectionMove(step)),
                KeyCode::Home => Some(Action::DexSelect(0)),
                KeyCode::End => Some(Action::DexSelect(props.entries.len().saturating_sub(1))),
                KeyCode::Enter => Some(Action::DexOpen),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                Some(Action::DexSelectionMove((*delta as i16).signum() * step))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DexGridProps<'_>) {
        if props.is_loading {
            let mut loading = LoadingIndicator;
            loading.render(frame, area, LoadingIndicatorProps { tick: props.tick });
            return;
        }

        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        self.scroll_to(props.selected / GRID_COLUMNS, visible_rows);

        let rows = props
            .entries
            .chunks(GRID_COLUMNS)
            .enumerate()
            .skip(self.scroll_row)
            .take(visible_rows);
        for (row_index, row) in rows {
            let y = area.y + (row_index - self.scroll_row) as u16 * CARD_HEIGHT;
            let row_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            let columns =
                Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(row_area);
            for (column, entry) in row.iter().enumerate() {
                let index = row_index * GRID_COLUMNS + column;
                render_card(frame, columns[column], entry, index == props.selected);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, entry: &EntrySummary, selected: bool) {
    let background = primary_type_color(&entry.types);
    let mut block = Block::bordered()
        .style(Style::default().bg(background).fg(Color::Black))
        .border_type(BorderType::Rounded);
    if selected {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_row, tags_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let name = capitalize(&entry.name);
    let dex_id = format_dex_id(entry.id);
    let gap = (name_row.width as usize).saturating_sub(name.chars().count() + dex_id.len());
    let title = Line::from(vec![
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap.max(1))),
        Span::raw(dex_id),
    ]);
    frame.render_widget(Paragraph::new(title), name_row);

    let mut tags = Vec::with_capacity(entry.types.len() * 2);
    for type_name in &entry.types {
        tags.push(Span::styled(
            format!(" {type_name} "),
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        tags.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tags)), tags_row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn entries() -> Vec<EntrySummary> {
        vec![
            EntrySummary {
                id: 1,
                name: "bulbasaur".into(),
                types: vec!["grass".into(), "poison".into()],
                image_url: None,
            },
            EntrySummary {
                id: 4,
                name: "charmander".into(),
                types: vec!["fire".into()],
                image_url: None,
            },
        ]
    }

    fn props(entries: &[EntrySummary]) -> DexGridProps<'_> {
        DexGridProps {
            entries,
            selected: 0,
            is_loading: false,
            tick: 0,
            is_focused: true,
        }
    }

    #[test]
    fn test_arrow_keys_move_by_grid_step() {
        let entries = entries();
        let mut grid = DexGrid::new();

        let actions: Vec<_> = grid
            .handle_event(&press(KeyCode::Down), props(&entries))
            .into_iter()
            .collect();
        actions.assert_first(Action::DexSelectionMove(2));

        let actions: Vec<_> = grid
            .handle_event(&press(KeyCode::Left), props(&entries))
            .into_iter()
            .collect();
        actions.assert_first(Action::DexSelectionMove(-1));
    }

    #[test]
    fn test_enter_opens_selection() {
        let entries = entries();
        let mut grid = DexGrid::new();
        let actions: Vec<_> = grid
            .handle_event(&press(KeyCode::Enter), props(&entries))
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::DexOpen);
    }

    #[test]
    fn test_events_ignored_while_loading() {
        let mut grid = DexGrid::new();
        let loading = DexGridProps {
            is_loading: true,
            ..props(&[])
        };
        let actions: Vec<_> = grid
            .handle_event(&press(KeyCode::Enter), loading)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_cards_in_order() {
        let entries = entries();
        let mut render = RenderHarness::new(60, 12);
        let mut grid = DexGrid::new();
        let output = render.render_to_string_plain(|frame| {
            grid.render(frame, frame.area(), props(&entries));
        });

        let bulbasaur = output.find("Bulbasaur").expect("first card");
        let charmander = output.find("Charmander").expect("second card");
        assert!(bulbasaur < charmander);
        assert!(output.contains("#001"));
        assert!(output.contains("#004"));
        assert!(output.contains(" grass "));
        assert!(output.contains(" poison "));
        assert!(!output.contains("Loading"));
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut grid = DexGrid::new();
        grid.scroll_to(5, 2);
        assert_eq!(grid.scroll_row, 4);
        grid.scroll_to(1, 2);
        assert_eq!(grid.scroll_row, 1);
        grid.scroll_to(2, 2);
        assert_eq!(grid.scroll_row, 1);
    }
}
