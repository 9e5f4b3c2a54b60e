use super::model::{DataSource, Geometry, Particle};

// ---------------------------------------------------------------------------
// Registry of tabulated (data source, particle) pairs
// ---------------------------------------------------------------------------

/// One registered table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub data_source: DataSource,
    pub particle: Particle,
    /// Path relative to the data directory.
    pub path: &'static str,
    /// Geometries whose column ends in NaN placeholders past the
    /// publication's energy coverage.
    pub trailing_nan: &'static [Geometry],
}

const fn entry(data_source: DataSource, particle: Particle, path: &'static str) -> TableEntry {
    TableEntry {
        data_source,
        particle,
        path,
        trailing_nan: &[],
    }
}

use DataSource::{Icrp116, Icrp119};

pub const TABLES: &[TableEntry] = &[
    entry(Icrp116, Particle::Electron, "icrp116/electrons.txt"),
    entry(Icrp116, Particle::Helium, "icrp116/helium_ions.txt"),
    entry(Icrp116, Particle::NegativeMuon, "icrp116/negative_muons.txt"),
    entry(Icrp116, Particle::NegativePion, "icrp116/negative_pions.txt"),
    entry(Icrp116, Particle::Neutron, "icrp116/neutrons.txt"),
    entry(Icrp116, Particle::Photon, "icrp116/photons.txt"),
    entry(Icrp116, Particle::PhotonKerma, "icrp116/photons_kerma.txt"),
    entry(Icrp116, Particle::PositiveMuon, "icrp116/positive_muons.txt"),
    entry(Icrp116, Particle::PositivePion, "icrp116/positive_pions.txt"),
    entry(Icrp116, Particle::Positron, "icrp116/positrons.txt"),
    entry(Icrp116, Particle::Proton, "icrp116/protons.txt"),
    TableEntry {
        trailing_nan: &[Geometry::Iso, Geometry::Rlat],
        ..entry(Icrp119, Particle::Neutron, "icrp119/neutrons.txt")
    },
];

/// Find the registered table for a pair, if any.
pub fn lookup(data_source: DataSource, particle: Particle) -> Option<&'static TableEntry> {
    TABLES
        .iter()
        .find(|e| e.data_source == data_source && e.particle == particle)
}
