//! Application state: navigation stack plus one view model per mounted screen

use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::artwork::Artwork;
use crate::lookup::Locale;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Habitat key used when the species has none upstream.
pub const UNKNOWN_HABITAT: &str = "unknown";

/// Spinner animation cadence.
pub const LOADING_TICK_MS: u64 = 120;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub page_limit: u32,
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            locale: Locale::default(),
        }
    }
}

impl AppConfig {
    pub fn roster_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.api_base.trim_end_matches('/'),
            self.page_limit
        )
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{id}", self.api_base.trim_end_matches('/'))
    }
}

/// List-screen card data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base: u16,
}

/// Species gender encoding: `-1` upstream means genderless, otherwise the
/// female share in eighths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderRate {
    Genderless,
    FemaleEighths(u8),
}

impl GenderRate {
    pub fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            -1 => Some(GenderRate::Genderless),
            0..=8 => Some(GenderRate::FemaleEighths(raw as u8)),
            _ => None,
        }
    }
}

/// First stage of the detail pipeline: the `/pokemon/{id}` record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_dm: u32,
    pub weight_hg: u32,
    pub abilities: Vec<String>,
    pub stats: Vec<StatValue>,
    pub image_url: Option<String>,
    pub species_url: String,
}

/// Second stage of the detail pipeline: the classification (species) record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub gender_rate: GenderRate,
    pub egg_groups: Vec<String>,
    pub habitat: Option<String>,
}

/// Detail-screen view model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
    pub stats: Vec<StatValue>,
    pub image_url: Option<String>,
    pub gender_rate: GenderRate,
    pub egg_groups: Vec<String>,
    pub habitat: String,
}

impl EntryDetail {
    pub fn merge(record: PokemonRecord, species: SpeciesRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            types: record.types,
            height_m: f64::from(record.height_dm) / 10.0,
            weight_kg: f64::from(record.weight_hg) / 10.0,
            abilities: record.abilities,
            stats: record.stats,
            image_url: record.image_url,
            gender_rate: species.gender_rate,
            egg_groups: species.egg_groups,
            habitat: species
                .habitat
                .unwrap_or_else(|| UNKNOWN_HABITAT.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    #[default]
    About,
    BaseStats,
}

impl DetailTab {
    pub const ALL: [DetailTab; 2] = [DetailTab::About, DetailTab::BaseStats];

    pub fn index(self) -> usize {
        match self {
            DetailTab::About => 0,
            DetailTab::BaseStats => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            DetailTab::About => DetailTab::BaseStats,
            DetailTab::BaseStats => DetailTab::About,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStage {
    Record,
    Species,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageFailure {
    pub stage: FetchStage,
    pub error: String,
}

/// Detail pipeline: record -> species -> merged view model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DetailStage {
    FetchingRecord,
    FetchingSpecies { record: PokemonRecord },
    Ready(EntryDetail),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetailScreen {
    pub id: u32,
    pub stage: DetailStage,
    /// Set when a stage fails; the screen keeps showing the loading indicator.
    pub failure: Option<StageFailure>,
    pub tab: DetailTab,
    pub artwork: DataResource<Artwork>,
}

impl DetailScreen {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            stage: DetailStage::FetchingRecord,
            failure: None,
            tab: DetailTab::default(),
            artwork: DataResource::Empty,
        }
    }

    pub fn entry(&self) -> Option<&EntryDetail> {
        match &self.stage {
            DetailStage::Ready(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.entry().is_none()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DexScreen {
    /// A failed roster keeps rendering as loading; no partial lists.
    pub roster: DataResource<Vec<EntrySummary>>,
    pub selected: usize,
}

impl Default for DexScreen {
    fn default() -> Self {
        Self {
            roster: DataResource::Empty,
            selected: 0,
        }
    }
}

impl DexScreen {
    pub fn entries(&self) -> &[EntrySummary] {
        self.roster.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_entry(&self) -> Option<&EntrySummary> {
        self.entries().get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        !self.roster.is_loaded()
    }

    pub fn set_selected(&mut self, index: usize) -> bool {
        let len = self.entries().len();
        if len == 0 {
            return false;
        }
        let bounded = index.min(len - 1);
        if bounded == self.selected {
            return false;
        }
        self.selected = bounded;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Dex,
    Detail(u32),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub config: AppConfig,
    pub terminal_size: (u16, u16),
    pub dex: DexScreen,
    /// Mounted only while `Route::Detail` is on top of the stack.
    pub detail: Option<DetailScreen>,
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            terminal_size: (80, 24),
            dex: DexScreen::default(),
            detail: None,
            tick: 0,
        }
    }

    pub fn route(&self) -> Route {
        match &self.detail {
            Some(detail) => Route::Detail(detail.id),
            None => Route::Dex,
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Dex];
        if let Some(detail) = &self.detail {
            routes.push(Route::Detail(detail.id));
        }
        routes
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Mutable access to the detail screen, only if it is mounted for `id`.
    pub fn detail_for(&mut self, id: u32) -> Option<&mut DetailScreen> {
        self.detail.as_mut().filter(|detail| detail.id == id)
    }

    pub fn is_loading(&self) -> bool {
        match &self.detail {
            Some(detail) => detail.is_loading() || detail.artwork.is_loading(),
            None => self.dex.is_loading(),
        }
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let detail_stage = self.detail.as_ref().map(|detail| match &detail.stage {
            DetailStage::FetchingRecord => "fetching record",
            DetailStage::FetchingSpecies { .. } => "fetching species",
            DetailStage::Ready(_) => "ready",
        });
        vec![
            DebugSection::new("Navigation")
                .entry("routes", ron_string(&self.routes()))
                .entry("locale", ron_string(&self.config.locale))
                .entry("api_base", ron_string(&self.config.api_base)),
            DebugSection::new("Dex")
                .entry("entries", ron_string(&self.dex.entries().len()))
                .entry("selected", ron_string(&self.dex.selected))
                .entry("loading", ron_string(&self.dex.roster.is_loading()))
                .entry("error", ron_string(&self.dex.roster.error())),
            DebugSection::new("Detail")
                .entry("stage", ron_string(&detail_stage))
                .entry(
                    "tab",
                    ron_string(&self.detail.as_ref().map(|detail| detail.tab)),
                )
                .entry(
                    "failure",
                    ron_string(&self.detail.as_ref().and_then(|detail| detail.failure.clone())),
                )
                .entry(
                    "artwork_loading",
                    ron_string(
                        &self
                            .detail
                            .as_ref()
                            .map(|detail| detail.artwork.is_loading()),
                    ),
                ),
        ]
    }
}
