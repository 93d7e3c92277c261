//! Full-screen renders through the navigator

use tui_dispatch::testing::*;
use tui_dispatch::DataResource;
use pokedex::{
    action::Action,
    components::{Component, Navigator, NavigatorProps},
    lookup::Locale,
    reducer::reducer,
    state::{
        AppConfig, AppState, EntrySummary, GenderRate, PokemonRecord, SpeciesRecord, StatValue,
    },
};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut navigator = Navigator::new();
    render.render_to_string_plain(|frame| {
        navigator.render(
            frame,
            frame.area(),
            NavigatorProps {
                state,
                is_focused: true,
            },
        );
    })
}

fn detail_state(locale: Locale) -> AppState {
    let mut state = AppState::new(AppConfig {
        locale,
        ..AppConfig::default()
    });
    let actions = [
        Action::DetailOpen(6),
        Action::DetailRecordDidLoad {
            id: 6,
            record: PokemonRecord {
                id: 6,
                name: "charizard".into(),
                types: vec!["fire".into(), "flying".into()],
                height_dm: 17,
                weight_hg: 905,
                abilities: vec!["blaze".into(), "solar-power".into()],
                stats: [
                    ("hp", 78),
                    ("attack", 84),
                    ("defense", 78),
                    ("special-attack", 109),
                    ("special-defense", 85),
                    ("speed", 100),
                ]
                .into_iter()
                .map(|(name, base)| StatValue {
                    name: name.into(),
                    base,
                })
                .collect(),
                image_url: None,
                species_url: "https://example.test/pokemon-species/6/".into(),
            },
        },
        Action::DetailSpeciesDidLoad {
            id: 6,
            species: SpeciesRecord {
                gender_rate: GenderRate::FemaleEighths(1),
                egg_groups: vec!["monster".into(), "dragon".into()],
                habitat: Some("mountain".into()),
            },
        },
    ];
    for action in actions {
        reducer(&mut state, action);
    }
    state
}

#[test]
fn test_roster_renders_two_cards() {
    let mut state = AppState::default();
    state.dex.roster = DataResource::Loaded(vec![
        EntrySummary {
            id: 1,
            name: "bulbasaur".into(),
            types: vec!["grass".into(), "poison".into()],
            image_url: None,
        },
        EntrySummary {
            id: 25,
            name: "pikachu".into(),
            types: vec!["electric".into()],
            image_url: None,
        },
    ]);

    let output = render(&state, 60, 12);

    assert!(output.contains("Bulbasaur"));
    assert!(output.contains("#001"));
    assert!(output.contains("Pikachu"));
    assert!(output.contains("#025"));
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_failed_roster_renders_loading() {
    let mut state = AppState::default();
    state.dex.roster = DataResource::Failed("boom".into());

    let output = render(&state, 60, 12);

    assert!(output.contains("Loading..."));
    assert!(!output.contains('#'));
}

#[test]
fn test_detail_about_english() {
    let output = render(&detail_state(Locale::En), 80, 24);

    assert!(output.contains("Charizard"));
    assert!(output.contains("#006"));
    assert!(output.contains("1.7m (5.6 ft)"));
    assert!(output.contains("90.5kg (199.1 lbs)"));
    assert!(output.contains("Blaze, Solar Power"));
    assert!(output.contains("87.5%"));
    assert!(output.contains("12.5%"));
    assert!(output.contains("Monster, Dragon"));
    assert!(output.contains("Mountain"));
}

#[test]
fn test_detail_about_portuguese() {
    let output = render(&detail_state(Locale::PtBr), 80, 24);

    assert!(output.contains("Altura"));
    assert!(output.contains("Chama, Poder solar"));
    assert!(output.contains(" fogo "));
    assert!(output.contains(" voador "));
    assert!(output.contains("Montanha"));
}

#[test]
fn test_detail_base_stats_total_is_stable() {
    let mut state = detail_state(Locale::En);
    if let Some(detail) = state.detail.as_mut() {
        detail.tab = pokedex::state::DetailTab::BaseStats;
    }

    let first = render(&state, 80, 24);
    let second = render(&state, 80, 24);

    assert!(first.contains("Sp. Def"));
    assert!(first.contains("534"));
    assert_eq!(first, second);
}
