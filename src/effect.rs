//! Effects - side effects declared by the reducer

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the listing page and every entry on it
    LoadRoster { url: String },
    /// First detail stage
    LoadDetailRecord { id: u32, url: String },
    /// Second detail stage, from the record's species reference
    LoadSpecies { id: u32, url: String },
    LoadArtwork { id: u32, url: String },
}
