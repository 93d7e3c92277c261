//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{
    AppState, DetailScreen, DetailStage, EntryDetail, FetchStage, StageFailure,
};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.dex.roster = DataResource::Loading;
            state.dex.selected = 0;
            let url = state.config.roster_url();
            tracing::info!(%url, "loading roster");
            DispatchResult::changed_with(Effect::LoadRoster { url })
        }

        // ===== Roster =====
        Action::RosterDidLoad(entries) => {
            tracing::info!(count = entries.len(), "roster loaded");
            state.dex.roster = DataResource::Loaded(entries);
            state.dex.selected = 0;
            DispatchResult::changed()
        }

        Action::RosterDidError(error) => {
            tracing::error!(%error, "roster failed to load");
            state.dex.roster = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== Dex =====
        Action::DexSelectionMove(delta) => {
            let len = state.dex.entries().len();
            if len == 0 || state.detail.is_some() {
                return DispatchResult::unchanged();
            }
            let target = (state.dex.selected as i64 + i64::from(delta)).clamp(0, len as i64 - 1);
            if state.dex.set_selected(target as usize) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::DexSelect(index) => {
            if index < state.dex.entries().len() && state.dex.set_selected(index) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::DexOpen => match state.dex.selected_entry().map(|entry| entry.id) {
            Some(id) => open_detail(state, id),
            None => DispatchResult::unchanged(),
        },

        // ===== Detail pipeline =====
        Action::DetailOpen(id) => open_detail(state, id),

        Action::DetailRecordDidLoad { id, record } => {
            let Some(detail) = state.detail_for(id) else {
                tracing::debug!(id, "dropping stale record");
                return DispatchResult::unchanged();
            };
            if !matches!(detail.stage, DetailStage::FetchingRecord) {
                return DispatchResult::unchanged();
            }
            tracing::debug!(id, "record loaded, fetching species");
            let url = record.species_url.clone();
            detail.stage = DetailStage::FetchingSpecies { record };
            DispatchResult::changed_with(Effect::LoadSpecies { id, url })
        }

        Action::DetailSpeciesDidLoad { id, species } => {
            let Some(detail) = state.detail_for(id) else {
                tracing::debug!(id, "dropping stale species");
                return DispatchResult::unchanged();
            };
            let stage = std::mem::replace(&mut detail.stage, DetailStage::FetchingRecord);
            let DetailStage::FetchingSpecies { record } = stage else {
                detail.stage = stage;
                return DispatchResult::unchanged();
            };
            let entry = EntryDetail::merge(record, species);
            tracing::info!(id, name = %entry.name, "detail ready");
            let artwork_url = entry.image_url.clone();
            detail.stage = DetailStage::Ready(entry);
            match artwork_url {
                Some(url) => {
                    detail.artwork = DataResource::Loading;
                    DispatchResult::changed_with(Effect::LoadArtwork { id, url })
                }
                None => DispatchResult::changed(),
            }
        }

        Action::DetailRecordDidError { id, error } => {
            record_stage_failure(state, id, FetchStage::Record, error)
        }

        Action::DetailSpeciesDidError { id, error } => {
            record_stage_failure(state, id, FetchStage::Species, error)
        }

        Action::DetailTabSelect(tab) => match state.detail.as_mut() {
            Some(detail) if detail.tab != tab => {
                detail.tab = tab;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::DetailTabNext | Action::DetailTabPrev => match state.detail.as_mut() {
            Some(detail) => {
                detail.tab = detail.tab.other();
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        // ===== Artwork =====
        Action::ArtworkDidLoad { id, artwork } => match state.detail_for(id) {
            Some(detail) => {
                detail.artwork = DataResource::Loaded(artwork);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::ArtworkDidError { id, error } => match state.detail_for(id) {
            Some(detail) => {
                tracing::warn!(id, %error, "artwork failed to load");
                detail.artwork = DataResource::Failed(error);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        // ===== Navigation =====
        Action::NavBack => match state.detail.take() {
            Some(detail) => {
                tracing::debug!(id = detail.id, "leaving detail");
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            if state.is_loading() {
                state.tick = state.tick.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn open_detail(state: &mut AppState, id: u32) -> DispatchResult<Effect> {
    tracing::info!(id, "opening detail");
    state.detail = Some(DetailScreen::new(id));
    state.tick = 0;
    let url = state.config.detail_url(id);
    DispatchResult::changed_with(Effect::LoadDetailRecord { id, url })
}

fn record_stage_failure(
    state: &mut AppState,
    id: u32,
    stage: FetchStage,
    error: String,
) -> DispatchResult<Effect> {
    let Some(detail) = state.detail_for(id) else {
        tracing::debug!(id, ?stage, "dropping stale failure");
        return DispatchResult::unchanged();
    };
    tracing::error!(id, ?stage, %error, "detail fetch failed");
    detail.failure = Some(StageFailure { stage, error });
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        DetailTab, EntrySummary, GenderRate, PokemonRecord, Route, SpeciesRecord, StatValue,
    };

    fn summary(id: u32, name: &str) -> EntrySummary {
        EntrySummary {
            id,
            name: name.into(),
            types: vec!["grass".into()],
            image_url: None,
        }
    }

    fn record(id: u32) -> PokemonRecord {
        PokemonRecord {
            id,
            name: "pikachu".into(),
            types: vec!["electric".into()],
            height_dm: 4,
            weight_hg: 60,
            abilities: vec!["static".into()],
            stats: vec![StatValue {
                name: "hp".into(),
                base: 35,
            }],
            image_url: Some("https://example.test/25.png".into()),
            species_url: format!("https://example.test/pokemon-species/{id}/"),
        }
    }

    fn species() -> SpeciesRecord {
        SpeciesRecord {
            gender_rate: GenderRate::FemaleEighths(4),
            egg_groups: vec!["ground".into()],
            habitat: Some("forest".into()),
        }
    }

    #[test]
    fn test_init_loads_roster() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Init);

        assert!(result.changed);
        assert!(state.dex.roster.is_loading());
        assert_eq!(
            result.effects,
            vec![Effect::LoadRoster {
                url: "https://pokeapi.co/api/v2/pokemon?limit=20".into()
            }]
        );
    }

    #[test]
    fn test_roster_error_keeps_loading_indicator() {
        let mut state = AppState::default();
        reducer(&mut state, Action::Init);
        reducer(&mut state, Action::RosterDidError("boom".into()));

        assert!(state.dex.roster.is_failed());
        assert!(state.dex.is_loading());
        assert!(state.dex.entries().is_empty());
    }

    #[test]
    fn test_selection_moves_are_bounded() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::RosterDidLoad(vec![
                summary(1, "bulbasaur"),
                summary(2, "ivysaur"),
                summary(3, "venusaur"),
            ]),
        );

        assert!(reducer(&mut state, Action::DexSelectionMove(2)).changed);
        assert_eq!(state.dex.selected, 2);
        assert!(!reducer(&mut state, Action::DexSelectionMove(2)).changed);
        assert!(reducer(&mut state, Action::DexSelectionMove(-5)).changed);
        assert_eq!(state.dex.selected, 0);
        assert!(!reducer(&mut state, Action::DexSelect(7)).changed);
    }

    #[test]
    fn test_dex_open_mounts_detail_for_selection() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::RosterDidLoad(vec![summary(1, "bulbasaur"), summary(4, "charmander")]),
        );
        reducer(&mut state, Action::DexSelect(1));

        let result = reducer(&mut state, Action::DexOpen);

        assert_eq!(state.route(), Route::Detail(4));
        assert_eq!(
            result.effects,
            vec![Effect::LoadDetailRecord {
                id: 4,
                url: "https://pokeapi.co/api/v2/pokemon/4".into()
            }]
        );
    }

    #[test]
    fn test_pipeline_reaches_ready_then_loads_artwork() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(25));

        let result = reducer(
            &mut state,
            Action::DetailRecordDidLoad {
                id: 25,
                record: record(25),
            },
        );
        assert_eq!(
            result.effects,
            vec![Effect::LoadSpecies {
                id: 25,
                url: "https://example.test/pokemon-species/25/".into()
            }]
        );
        assert!(state.is_loading());

        let result = reducer(
            &mut state,
            Action::DetailSpeciesDidLoad {
                id: 25,
                species: species(),
            },
        );
        assert!(matches!(result.effects[0], Effect::LoadArtwork { id: 25, .. }));
        let detail = state.detail.as_ref().expect("detail mounted");
        let entry = detail.entry().expect("ready");
        assert_eq!(entry.habitat, "forest");
        assert!(detail.artwork.is_loading());
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(1));
        reducer(&mut state, Action::NavBack);
        reducer(&mut state, Action::DetailOpen(4));

        let result = reducer(
            &mut state,
            Action::DetailRecordDidLoad {
                id: 1,
                record: record(1),
            },
        );

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        let detail = state.detail.as_ref().expect("detail mounted");
        assert_eq!(detail.stage, DetailStage::FetchingRecord);
    }

    #[test]
    fn test_species_out_of_order_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(25));
        let result = reducer(
            &mut state,
            Action::DetailSpeciesDidLoad {
                id: 25,
                species: species(),
            },
        );
        assert!(!result.changed);
        assert_eq!(
            state.detail.as_ref().map(|detail| &detail.stage),
            Some(&DetailStage::FetchingRecord)
        );
    }

    #[test]
    fn test_stage_failure_is_recorded_and_stays_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(25));
        reducer(
            &mut state,
            Action::DetailRecordDidLoad {
                id: 25,
                record: record(25),
            },
        );
        reducer(
            &mut state,
            Action::DetailSpeciesDidError {
                id: 25,
                error: "404".into(),
            },
        );

        let detail = state.detail.as_ref().expect("detail mounted");
        assert!(detail.is_loading());
        assert_eq!(
            detail.failure,
            Some(StageFailure {
                stage: FetchStage::Species,
                error: "404".into()
            })
        );
    }

    #[test]
    fn test_tab_changes_only_on_selection() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(25));
        reducer(
            &mut state,
            Action::DetailRecordDidLoad {
                id: 25,
                record: record(25),
            },
        );
        reducer(
            &mut state,
            Action::DetailSpeciesDidLoad {
                id: 25,
                species: species(),
            },
        );
        reducer(&mut state, Action::Tick);
        assert_eq!(state.detail.as_ref().map(|d| d.tab), Some(DetailTab::About));

        assert!(reducer(&mut state, Action::DetailTabSelect(DetailTab::BaseStats)).changed);
        assert!(!reducer(&mut state, Action::DetailTabSelect(DetailTab::BaseStats)).changed);
        reducer(&mut state, Action::DetailTabNext);
        assert_eq!(state.detail.as_ref().map(|d| d.tab), Some(DetailTab::About));
    }

    #[test]
    fn test_nav_back_discards_detail() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DetailOpen(25));
        reducer(&mut state, Action::DetailTabSelect(DetailTab::BaseStats));

        assert!(reducer(&mut state, Action::NavBack).changed);
        assert_eq!(state.route(), Route::Dex);
        assert!(!reducer(&mut state, Action::NavBack).changed);

        reducer(&mut state, Action::DetailOpen(25));
        assert_eq!(state.detail.as_ref().map(|d| d.tab), Some(DetailTab::About));
    }

    #[test]
    fn test_tick_only_rerenders_while_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::Init);
        assert!(reducer(&mut state, Action::Tick).changed);

        reducer(&mut state, Action::RosterDidLoad(vec![summary(1, "bulbasaur")]));
        assert!(!reducer(&mut state, Action::Tick).changed);
    }
}
