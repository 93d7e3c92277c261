//! Detail screen: header, artwork, About / Base Stats tabs

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Tabs};
use tui_dispatch::{DataResource, EventKind};

use super::loading::spinner_frame;
use super::{Component, LoadingIndicator, LoadingIndicatorProps};
use crate::action::Action;
use crate::artwork::{Artwork, ArtworkView, ARTWORK_PIXELS};
use crate::format::{
    capitalize, format_dex_id, format_height, format_percent, format_weight, gender_split,
    stat_bar_percent, stat_total, title_case_key, GenderSplit, StatTier,
};
use crate::lookup::{
    primary_type_color, stat_label, translate_ability, translate_egg_group, translate_habitat,
    translate_type, Label, Locale,
};
use crate::state::{DetailScreen, DetailTab, EntryDetail};

const LABEL_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 5;
/// Narrower panels drop the artwork column.
const MIN_WIDTH_FOR_ARTWORK: u16 = 64;

pub struct DetailPanelProps<'a> {
    pub screen: &'a DetailScreen,
    pub locale: Locale,
    pub tick: u64,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct DetailPanel;

impl Component<Action> for DetailPanel {
    type Props<'a> = DetailPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::NavBack),
            _ if props.screen.is_loading() => None,
            KeyCode::Char('1') => Some(Action::DetailTabSelect(DetailTab::About)),
            KeyCode::Char('2') => Some(Action::DetailTabSelect(DetailTab::BaseStats)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::DetailTabPrev),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::DetailTabNext),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DetailPanelProps<'_>) {
        let Some(entry) = props.screen.entry() else {
            let mut loading = LoadingIndicator;
            loading.render(frame, area, LoadingIndicatorProps { tick: props.tick });
            return;
        };

        let accent = primary_type_color(&entry.types);
        let panel = Block::default()
            .style(Style::default().bg(accent).fg(Color::Black))
            .padding(Padding::horizontal(1));
        let inner = panel.inner(area);
        frame.render_widget(panel, area);

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);
        render_header(frame, header_area, entry, props.locale);

        let content_area = if body_area.width >= MIN_WIDTH_FOR_ARTWORK {
            let [content, art] = Layout::horizontal([
                Constraint::Min(1),
                Constraint::Length(ARTWORK_PIXELS as u16 + 2),
            ])
            .areas(body_area);
            render_artwork(frame, art, &props.screen.artwork, props.tick);
            content
        } else {
            body_area
        };

        let [tabs_area, _, tab_body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(content_area);
        render_tabs(frame, tabs_area, props.screen.tab, props.locale);

        let sheet = Block::default()
            .style(Style::default().bg(Color::White).fg(Color::Black))
            .padding(Padding::horizontal(1));
        let sheet_inner = sheet.inner(tab_body);
        frame.render_widget(sheet, tab_body);

        let lines = match props.screen.tab {
            DetailTab::About => about_lines(entry, props.locale),
            DetailTab::BaseStats => base_stat_lines(entry, props.locale, sheet_inner.width),
        };
        frame.render_widget(Paragraph::new(lines), sheet_inner);
    }
}

fn render_header(frame: &mut Frame, area: Rect, entry: &EntryDetail, locale: Locale) {
    let name = capitalize(&entry.name);
    let dex_id = format_dex_id(entry.id);
    let gap = (area.width as usize).saturating_sub(name.chars().count() + dex_id.len());
    let title = Line::from(vec![
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap.max(1))),
        Span::styled(dex_id, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let mut tags = Vec::with_capacity(entry.types.len() * 2);
    for type_name in &entry.types {
        tags.push(Span::styled(
            format!(" {} ", translate_type(locale, type_name)),
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        tags.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(vec![title, Line::default(), Line::from(tags)]),
        area,
    );
}

fn render_artwork(frame: &mut Frame, area: Rect, artwork: &DataResource<Artwork>, tick: u64) {
    match artwork {
        DataResource::Loaded(artwork) => {
            frame.render_widget(ArtworkView::new(artwork), area);
        }
        DataResource::Loading => {
            let line = Line::from(spinner_frame(tick).to_string()).centered();
            frame.render_widget(Paragraph::new(line), area);
        }
        DataResource::Empty | DataResource::Failed(_) => {
            let line = Line::from(Span::styled("?", Style::default().fg(Color::DarkGray)))
                .centered();
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, tab: DetailTab, locale: Locale) {
    let titles = DetailTab::ALL.iter().map(|tab| tab_label(*tab).text(locale));
    let tabs = Tabs::new(titles)
        .select(tab.index())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .divider(" ");
    frame.render_widget(tabs, area);
}

fn tab_label(tab: DetailTab) -> Label {
    match tab {
        DetailTab::About => Label::About,
        DetailTab::BaseStats => Label::BaseStats,
    }
}

fn field(label: Label, locale: Locale, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<LABEL_WIDTH$}", label.text(locale)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn ability_names(entry: &EntryDetail, locale: Locale) -> String {
    entry
        .abilities
        .iter()
        .map(|ability| title_case_key(translate_ability(locale, ability)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn about_lines(entry: &EntryDetail, locale: Locale) -> Vec<Line<'static>> {
    let (male, female) = match gender_split(entry.gender_rate) {
        GenderSplit::Genderless => {
            let label = Label::Genderless.text(locale).to_string();
            (label.clone(), label)
        }
        GenderSplit::Split {
            male_pct,
            female_pct,
        } => (format_percent(male_pct), format_percent(female_pct)),
    };
    let egg_groups = entry
        .egg_groups
        .iter()
        .map(|group| title_case_key(translate_egg_group(locale, group)))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        field(Label::Species, locale, capitalize(&entry.name)),
        field(Label::Height, locale, format_height(entry.height_m)),
        field(Label::Weight, locale, format_weight(entry.weight_kg)),
        field(Label::Abilities, locale, ability_names(entry, locale)),
        Line::default(),
        heading(Label::Breeding.text(locale)),
        field(Label::Gender, locale, format!("♂ {male}  ♀ {female}")),
        field(Label::EggGroups, locale, egg_groups),
        field(
            Label::Habitat,
            locale,
            capitalize(translate_habitat(locale, &entry.habitat)),
        ),
    ]
}

fn base_stat_lines(entry: &EntryDetail, locale: Locale, width: u16) -> Vec<Line<'static>> {
    let bar_width = (width as usize).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1);
    let mut lines: Vec<Line<'static>> = entry
        .stats
        .iter()
        .map(|stat| {
            let label = match stat_label(&stat.name) {
                Some(label) => label.text(locale).to_string(),
                None => stat.name.clone(),
            };
            let filled =
                ((bar_width as f64) * stat_bar_percent(stat.base) / 100.0).round() as usize;
            let filled = filled.min(bar_width);
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:>width$} ", stat.base, width = VALUE_WIDTH - 1)),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(StatTier::for_value(stat.base).color()),
                ),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<LABEL_WIDTH$}", Label::Total.text(locale)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:>width$}", stat_total(&entry.stats), width = VALUE_WIDTH - 1),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());
    lines.push(heading(Label::TypeDefenses.text(locale)));
    lines.push(Line::from(format!(
        "{} {}.",
        Label::TypeDefensesBlurb.text(locale),
        capitalize(&entry.name)
    )));
    lines
}
