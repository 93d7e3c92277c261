//! Static lookup tables: type colors and per-locale translations

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Card/panel color when a type has no entry in [`TYPE_COLORS`].
pub const FALLBACK_TYPE_COLOR: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

pub const TYPE_COLORS: [(&str, Color); 18] = [
    ("normal", Color::Rgb(0xA8, 0xA7, 0x7A)),
    ("fire", Color::Rgb(0xFF, 0x6B, 0x51)),
    ("water", Color::Rgb(0x56, 0xAE, 0xFF)),
    ("electric", Color::Rgb(0xFF, 0xD8, 0x4A)),
    ("grass", Color::Rgb(0x8B, 0xD3, 0x69)),
    ("ice", Color::Rgb(0x96, 0xD9, 0xD6)),
    ("fighting", Color::Rgb(0xC2, 0x2E, 0x28)),
    ("poison", Color::Rgb(0xA3, 0x3E, 0xA1)),
    ("ground", Color::Rgb(0xE2, 0xBF, 0x65)),
    ("flying", Color::Rgb(0xA9, 0x8F, 0xF3)),
    ("psychic", Color::Rgb(0xF9, 0x55, 0x87)),
    ("bug", Color::Rgb(0xA6, 0xB9, 0x1A)),
    ("rock", Color::Rgb(0xB6, 0xA1, 0x36)),
    ("ghost", Color::Rgb(0x73, 0x57, 0x97)),
    ("dragon", Color::Rgb(0x6F, 0x35, 0xFC)),
    ("dark", Color::Rgb(0x70, 0x57, 0x46)),
    ("steel", Color::Rgb(0xB7, 0xB7, 0xCE)),
    ("fairy", Color::Rgb(0xD6, 0x85, 0xAD)),
];

/// Color for a type key, falling back to white for unmapped types.
pub fn type_color(type_name: &str) -> Color {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_TYPE_COLOR)
}

/// Color for an entry, keyed on its first (primary) type.
pub fn primary_type_color(types: &[String]) -> Color {
    types
        .first()
        .map(|name| type_color(name))
        .unwrap_or(FALLBACK_TYPE_COLOR)
}

/// Display language for labels and upstream keys.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    En,
    #[value(name = "pt-br")]
    PtBr,
}

/// Fixed UI labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    About,
    BaseStats,
    Species,
    Height,
    Weight,
    Abilities,
    Breeding,
    Gender,
    EggGroups,
    Habitat,
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
    Total,
    TypeDefenses,
    TypeDefensesBlurb,
    Genderless,
}

impl Label {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.english(),
            Locale::PtBr => self.portuguese(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Label::About => "About",
            Label::BaseStats => "Base Stats",
            Label::Species => "Species",
            Label::Height => "Height",
            Label::Weight => "Weight",
            Label::Abilities => "Abilities",
            Label::Breeding => "Breeding",
            Label::Gender => "Gender",
            Label::EggGroups => "Egg Groups",
            Label::Habitat => "Habitat",
            Label::Hp => "HP",
            Label::Attack => "Attack",
            Label::Defense => "Defense",
            Label::SpAtk => "Sp. Atk",
            Label::SpDef => "Sp. Def",
            Label::Speed => "Speed",
            Label::Total => "Total",
            Label::TypeDefenses => "Type defenses",
            Label::TypeDefensesBlurb => "The effectiveness of each type on",
            Label::Genderless => "Genderless",
        }
    }

    fn portuguese(self) -> &'static str {
        match self {
            Label::About => "Sobre",
            Label::BaseStats => "Estatísticas",
            Label::Species => "Espécie",
            Label::Height => "Altura",
            Label::Weight => "Peso",
            Label::Abilities => "Habilidades",
            Label::Breeding => "Reprodução",
            Label::Gender => "Gênero",
            Label::EggGroups => "Grupos de Ovo",
            Label::Habitat => "Habitat",
            Label::Hp => "HP",
            Label::Attack => "Ataque",
            Label::Defense => "Defesa",
            Label::SpAtk => "Atq. Esp.",
            Label::SpDef => "Def. Esp.",
            Label::Speed => "Velocidade",
            Label::Total => "Total",
            Label::TypeDefenses => "Defesas de tipo",
            Label::TypeDefensesBlurb => "A efetividade de cada tipo contra",
            Label::Genderless => "Sem gênero",
        }
    }
}

/// Label for an upstream stat key; unknown keys have no label.
pub fn stat_label(stat_key: &str) -> Option<Label> {
    match stat_key {
        "hp" => Some(Label::Hp),
        "attack" => Some(Label::Attack),
        "defense" => Some(Label::Defense),
        "special-attack" => Some(Label::SpAtk),
        "special-defense" => Some(Label::SpDef),
        "speed" => Some(Label::Speed),
        _ => None,
    }
}

const PT_TYPES: [(&str, &str); 18] = [
    ("normal", "normal"),
    ("fire", "fogo"),
    ("water", "água"),
    ("electric", "elétrico"),
    ("grass", "planta"),
    ("ice", "gelo"),
    ("fighting", "lutador"),
    ("poison", "veneno"),
    ("ground", "terra"),
    ("flying", "voador"),
    ("psychic", "psíquico"),
    ("bug", "inseto"),
    ("rock", "pedra"),
    ("ghost", "fantasma"),
    ("dragon", "dragão"),
    ("dark", "sombrio"),
    ("steel", "metálico"),
    ("fairy", "fada"),
];

const PT_ABILITIES: [(&str, &str); 11] = [
    ("overgrow", "supercrescimento"),
    ("chlorophyll", "clorofila"),
    ("blaze", "chama"),
    ("solar-power", "poder solar"),
    ("torrent", "torrente"),
    ("rain-dish", "coleta de chuva"),
    ("shield-dust", "pó escudo"),
    ("static", "estático"),
    ("lightning-rod", "pára-raios"),
    ("intimidate", "intimidação"),
    ("limber", "flexível"),
];

const EN_HABITATS: [(&str, &str); 3] = [
    ("rough-terrain", "rough terrain"),
    ("waters-edge", "water's edge"),
    ("unknown", "unknown"),
];

const PT_HABITATS: [(&str, &str); 10] = [
    ("cave", "caverna"),
    ("forest", "floresta"),
    ("grassland", "campo"),
    ("mountain", "montanha"),
    ("rare", "raro"),
    ("rough-terrain", "terreno acidentado"),
    ("sea", "mar"),
    ("urban", "urbano"),
    ("waters-edge", "beira d'água"),
    ("unknown", "desconhecido"),
];

const EN_EGG_GROUPS: [(&str, &str); 4] = [
    ("water1", "water 1"),
    ("water2", "water 2"),
    ("water3", "water 3"),
    ("no-eggs", "undiscovered"),
];

const PT_EGG_GROUPS: [(&str, &str); 15] = [
    ("monster", "monstro"),
    ("grass", "planta"),
    ("bug", "inseto"),
    ("flying", "voador"),
    ("ground", "terrestre"),
    ("fairy", "fada"),
    ("humanoid", "humanoide"),
    ("mineral", "mineral"),
    ("water1", "água 1"),
    ("water2", "água 2"),
    ("water3", "água 3"),
    ("amorphous", "amorfo"),
    ("ditto", "ditto"),
    ("dragon", "dragão"),
    ("undiscovered", "não descoberto"),
];

fn lookup<'a>(table: &[(&'static str, &'static str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(key)
}

pub fn translate_type(locale: Locale, key: &str) -> &str {
    match locale {
        Locale::En => key,
        Locale::PtBr => lookup(&PT_TYPES, key),
    }
}

pub fn translate_ability(locale: Locale, key: &str) -> &str {
    match locale {
        Locale::En => key,
        Locale::PtBr => lookup(&PT_ABILITIES, key),
    }
}

pub fn translate_habitat(locale: Locale, key: &str) -> &str {
    match locale {
        Locale::En => lookup(&EN_HABITATS, key),
        Locale::PtBr => lookup(&PT_HABITATS, key),
    }
}

pub fn translate_egg_group(locale: Locale, key: &str) -> &str {
    match locale {
        Locale::En => lookup(&EN_EGG_GROUPS, key),
        Locale::PtBr => lookup(&PT_EGG_GROUPS, key),
    }
}
