//! Actions: user intents plus async results, grouped by inferred category

use serde::{Deserialize, Serialize};

use crate::artwork::Artwork;
use crate::state::{DetailTab, EntrySummary, PokemonRecord, SpeciesRecord};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: begin loading the roster
    Init,

    // ===== Roster category =====
    RosterDidLoad(Vec<EntrySummary>),
    RosterDidError(String),

    // ===== Dex category =====
    /// Move the grid selection by a signed offset
    DexSelectionMove(i16),
    DexSelect(usize),
    /// Open the selected card
    DexOpen,

    // ===== Detail category =====
    /// Mount the detail screen for an id
    DetailOpen(u32),
    DetailRecordDidLoad { id: u32, record: PokemonRecord },
    DetailRecordDidError { id: u32, error: String },
    DetailSpeciesDidLoad { id: u32, species: SpeciesRecord },
    DetailSpeciesDidError { id: u32, error: String },
    DetailTabSelect(DetailTab),
    DetailTabNext,
    DetailTabPrev,

    // ===== Artwork category =====
    ArtworkDidLoad { id: u32, artwork: Artwork },
    ArtworkDidError { id: u32, error: String },

    // ===== Nav category =====
    /// Pop the top route
    NavBack,

    // ===== UI category =====
    UiTerminalResize(u16, u16),

    // ===== Uncategorized (global) =====
    /// Spinner animation tick
    Tick,
    Quit,
}
