use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, DetailPanel, DetailPanelProps, DexGrid, DexGridProps};
use crate::action::Action;
use crate::state::{AppState, Route};

pub struct NavigatorProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Shows the screen on top of the route stack plus a hint bar.
#[derive(Default)]
pub struct Navigator {
    dex: DexGrid,
    detail: DetailPanel,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Navigator {
    type Props<'a> = NavigatorProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        let actions: Vec<Action> = match &state.detail {
            Some(screen) => self
                .detail
                .handle_event(
                    event,
                    DetailPanelProps {
                        screen,
                        locale: state.locale(),
                        tick: state.tick,
                        is_focused: props.is_focused,
                    },
                )
                .into_iter()
                .collect(),
            None => self
                .dex
                .handle_event(event, dex_props(state, props.is_focused))
                .into_iter()
                .collect(),
        };
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: NavigatorProps<'_>) {
        let state = props.state;
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let hints = match (state.route(), &state.detail) {
            (Route::Detail(_), Some(screen)) => {
                self.detail.render(
                    frame,
                    body,
                    DetailPanelProps {
                        screen,
                        locale: state.locale(),
                        tick: state.tick,
                        is_focused: props.is_focused,
                    },
                );
                vec![
                    StatusBarHint::new("1/2", "tabs"),
                    StatusBarHint::new("esc", "back"),
                    StatusBarHint::new("q", "quit"),
                ]
            }
            _ => {
                self.dex
                    .render(frame, body, dex_props(state, props.is_focused));
                vec![
                    StatusBarHint::new("arrows", "move"),
                    StatusBarHint::new("enter", "open"),
                    StatusBarHint::new("q", "quit"),
                ]
            }
        };

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            footer,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn dex_props(state: &AppState, is_focused: bool) -> DexGridProps<'_> {
    DexGridProps {
        entries: state.dex.entries(),
        selected: state.dex.selected,
        is_loading: state.dex.is_loading(),
        tick: state.tick,
        is_focused,
    }
}
