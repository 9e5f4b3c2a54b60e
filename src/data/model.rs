use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DoseError;

// ---------------------------------------------------------------------------
// DataSource – which ICRP publication the coefficients come from
// ---------------------------------------------------------------------------

/// Publication edition a table was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum DataSource {
    /// ICRP Publication 116 (with corrigendum values).
    #[default]
    #[serde(rename = "icrp116")]
    Icrp116,
    /// ICRP Publication 119.
    #[serde(rename = "icrp119")]
    Icrp119,
}

impl DataSource {
    pub const ALL: [DataSource; 2] = [DataSource::Icrp116, DataSource::Icrp119];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Icrp116 => "icrp116",
            DataSource::Icrp119 => "icrp119",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataSource::ALL
            .into_iter()
            .find(|src| src.as_str() == s)
            .ok_or_else(|| {
                DoseError::invalid_argument(
                    "data_source",
                    s,
                    DataSource::ALL.iter().map(DataSource::as_str),
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Geometry – irradiation geometry (ICRP 116, section 3.2)
// ---------------------------------------------------------------------------

/// Irradiation geometry of the whole-body exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Geometry {
    /// Antero-posterior.
    #[default]
    Ap,
    /// Postero-anterior.
    Pa,
    /// Left lateral.
    Llat,
    /// Right lateral.
    Rlat,
    /// Rotational.
    Rot,
    /// Isotropic.
    Iso,
}

impl Geometry {
    pub const ALL: [Geometry; 6] = [
        Geometry::Ap,
        Geometry::Pa,
        Geometry::Llat,
        Geometry::Rlat,
        Geometry::Rot,
        Geometry::Iso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geometry::Ap => "AP",
            Geometry::Pa => "PA",
            Geometry::Llat => "LLAT",
            Geometry::Rlat => "RLAT",
            Geometry::Rot => "ROT",
            Geometry::Iso => "ISO",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Geometry {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geometry::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                DoseError::invalid_argument("geometry", s, Geometry::ALL.iter().map(Geometry::as_str))
            })
    }
}

// ---------------------------------------------------------------------------
// GeometrySet – the ordered coefficient columns a table carries
// ---------------------------------------------------------------------------

/// Ordered set of geometries tabulated for a particle. The order is the
/// column order of the table file (after the energy column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometrySet {
    /// AP, PA, LLAT, RLAT, ROT, ISO
    SixGeometry,
    /// AP, PA, ISO
    ThreeGeometry,
}

impl GeometrySet {
    pub fn geometries(&self) -> &'static [Geometry] {
        const THREE: [Geometry; 3] = [Geometry::Ap, Geometry::Pa, Geometry::Iso];
        match self {
            GeometrySet::SixGeometry => &Geometry::ALL,
            GeometrySet::ThreeGeometry => &THREE,
        }
    }

    /// Position of `geometry` among the coefficient columns, if tabulated.
    pub fn index_of(&self, geometry: Geometry) -> Option<usize> {
        self.geometries().iter().position(|g| *g == geometry)
    }

    /// Columns in a table file: energy plus one per geometry.
    pub fn column_count(&self) -> usize {
        1 + self.geometries().len()
    }
}

// ---------------------------------------------------------------------------
// DoseUnit
// ---------------------------------------------------------------------------

/// Unit of the returned coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoseUnit {
    /// Fluence to effective dose, pSv·cm².
    PicoSievertCm2,
    /// Air kerma to effective dose, Sv/Gy.
    SievertPerGray,
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoseUnit::PicoSievertCm2 => write!(f, "pSv cm^2"),
            DoseUnit::SievertPerGray => write!(f, "Sv/Gy"),
        }
    }
}

// ---------------------------------------------------------------------------
// Particle – incident radiation
// ---------------------------------------------------------------------------

/// Incident particle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Particle {
    Neutron,
    Photon,
    /// Photons, coefficients per unit air kerma.
    PhotonKerma,
    Electron,
    Positron,
    Proton,
    NegativeMuon,
    PositiveMuon,
    NegativePion,
    PositivePion,
    Helium,
}

impl Particle {
    pub const ALL: [Particle; 11] = [
        Particle::Neutron,
        Particle::Photon,
        Particle::PhotonKerma,
        Particle::Electron,
        Particle::Positron,
        Particle::Proton,
        Particle::NegativeMuon,
        Particle::PositiveMuon,
        Particle::NegativePion,
        Particle::PositivePion,
        Particle::Helium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Particle::Neutron => "neutron",
            Particle::Photon => "photon",
            Particle::PhotonKerma => "photon kerma",
            Particle::Electron => "electron",
            Particle::Positron => "positron",
            Particle::Proton => "proton",
            Particle::NegativeMuon => "mu-",
            Particle::PositiveMuon => "mu+",
            Particle::NegativePion => "pi-",
            Particle::PositivePion => "pi+",
            Particle::Helium => "helium",
        }
    }

    /// Look a particle up by its table name. Unknown names yield `None`;
    /// callers report them as missing data rather than a bad argument.
    pub fn from_name(name: &str) -> Option<Particle> {
        Particle::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn geometry_set(&self) -> GeometrySet {
        match self {
            Particle::Neutron | Particle::Photon | Particle::Proton | Particle::PhotonKerma => {
                GeometrySet::SixGeometry
            }
            _ => GeometrySet::ThreeGeometry,
        }
    }

    pub fn geometries(&self) -> &'static [Geometry] {
        self.geometry_set().geometries()
    }

    pub fn unit(&self) -> DoseUnit {
        match self {
            Particle::PhotonKerma => DoseUnit::SievertPerGray,
            _ => DoseUnit::PicoSievertCm2,
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DoseTable – one loaded file
// ---------------------------------------------------------------------------

/// A loaded coefficient table, stored row-major.
///
/// Column 0 is energy in eV; the remaining columns follow the particle's
/// [`GeometrySet`] order. Rows keep the order of the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseTable {
    values: Vec<f64>,
    columns: usize,
}

impl DoseTable {
    /// Build a table from parsed rows. Every row must have `columns` entries.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>, columns: usize) -> Self {
        let mut values = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            debug_assert_eq!(row.len(), columns);
            values.extend(row);
        }
        DoseTable { values, columns }
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Copy one column out of the table.
    pub fn column(&self, index: usize) -> Vec<f64> {
        assert!(index < self.columns, "column {index} out of {}", self.columns);
        self.values
            .iter()
            .skip(index)
            .step_by(self.columns)
            .copied()
            .collect()
    }

    /// Energies in eV.
    pub fn energy(&self) -> Vec<f64> {
        self.column(0)
    }

    pub(crate) fn scale_column(&mut self, index: usize, factor: f64) {
        let columns = self.columns;
        for v in self.values.iter_mut().skip(index).step_by(columns) {
            *v *= factor;
        }
    }
}

// ---------------------------------------------------------------------------
// DoseCoefficients – query result
// ---------------------------------------------------------------------------

/// Energies and the matching coefficients for one particle/geometry/source.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseCoefficients {
    /// Energies in eV.
    pub energy: Vec<f64>,
    /// Coefficients at `energy`, same length, in [`DoseCoefficients::unit`].
    pub coefficients: Vec<f64>,
    pub unit: DoseUnit,
}

impl DoseCoefficients {
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Split into the `(energy, coefficients)` pair.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.energy, self.coefficients)
    }
}
