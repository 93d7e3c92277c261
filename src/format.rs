//! Display formatting shared by the list and detail screens

use ratatui::style::Color;

use crate::state::{GenderRate, StatValue};

/// Upper bound of the stat bar scale.
pub const STAT_BAR_MAX: f64 = 255.0;

const FEET_PER_METER: f64 = 3.28;
const POUNDS_PER_KILOGRAM: f64 = 2.2;

/// `#` followed by the id zero-padded to three digits (wider ids keep all digits).
pub fn format_dex_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `solar-power` -> `Solar Power`
pub fn title_case_key(key: &str) -> String {
    key.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_height(meters: f64) -> String {
    format!(
        "{:.1}m ({:.1} ft)",
        round_one_decimal(meters),
        round_one_decimal(meters * FEET_PER_METER)
    )
}

pub fn format_weight(kilograms: f64) -> String {
    format!(
        "{:.1}kg ({:.1} lbs)",
        round_one_decimal(kilograms),
        round_one_decimal(kilograms * POUNDS_PER_KILOGRAM)
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenderSplit {
    Genderless,
    Split { male_pct: f64, female_pct: f64 },
}

pub fn gender_split(rate: GenderRate) -> GenderSplit {
    match rate {
        GenderRate::Genderless => GenderSplit::Genderless,
        GenderRate::FemaleEighths(eighths) => {
            let female = f64::from(eighths);
            GenderSplit::Split {
                male_pct: (8.0 - female) / 8.0 * 100.0,
                female_pct: female / 8.0 * 100.0,
            }
        }
    }
}

/// Percentages print without a trailing `.0` (`100%`, `87.5%`).
pub fn format_percent(pct: f64) -> String {
    format!("{pct}%")
}

/// Bar fill in percent of the full width, clamped to 100.
pub fn stat_bar_percent(base: u16) -> f64 {
    (f64::from(base) / STAT_BAR_MAX * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTier {
    Warning,
    Caution,
    Success,
}

impl StatTier {
    pub fn for_value(base: u16) -> Self {
        if base < 50 {
            StatTier::Warning
        } else if base < 80 {
            StatTier::Caution
        } else {
            StatTier::Success
        }
    }

    pub fn color(self) -> Color {
        match self {
            StatTier::Warning => Color::Rgb(0xFF, 0x6B, 0x51),
            StatTier::Caution => Color::Rgb(0xFF, 0xD8, 0x4A),
            StatTier::Success => Color::Rgb(0x8B, 0xD3, 0x69),
        }
    }
}

pub fn stat_total(stats: &[StatValue]) -> u32 {
    stats.iter().map(|stat| u32::from(stat.base)).sum()
}
