use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub const LOADING_TEXT: &str = "Loading...";

pub struct LoadingIndicatorProps {
    pub tick: u64,
}

/// Centered spinner shown while a screen has nothing to render yet.
#[derive(Default)]
pub struct LoadingIndicator;

impl Component<Action> for LoadingIndicator {
    type Props<'a> = LoadingIndicatorProps;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: LoadingIndicatorProps) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let line = Line::from(vec![
            Span::styled(
                spinner_frame(props.tick).to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), row);
    }
}

pub fn spinner_frame(tick: u64) -> char {
    match tick % 4 {
        0 => '|',
        1 => '/',
        2 => '-',
        _ => '\\',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(5), '/');
        assert_eq!(spinner_frame(3), spinner_frame(7));
    }

    #[test]
    fn test_render_loading_text() {
        let mut render = RenderHarness::new(30, 5);
        let mut component = LoadingIndicator;
        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), LoadingIndicatorProps { tick: 2 });
        });
        assert!(output.contains("- Loading..."));
    }
}
