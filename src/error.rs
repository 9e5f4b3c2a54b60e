use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::{DataSource, Geometry, Particle};

pub type Result<T> = std::result::Result<T, DoseError>;

/// Errors returned by dose coefficient lookups.
#[derive(Error, Debug)]
pub enum DoseError {
    /// A geometry or data source string outside its enumeration.
    #[error("invalid {name} '{value}', expected one of: {allowed}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        allowed: String,
    },

    /// The geometry is not tabulated for the particle.
    #[error("geometry {geometry} is not tabulated for {particle}, expected one of: {allowed}")]
    InvalidGeometry {
        particle: Particle,
        geometry: Geometry,
        allowed: String,
    },

    /// No table exists for the pair. Unknown particle names land here too.
    #[error("{particle} has no effective dose data in data source {data_source}.")]
    DataUnavailable {
        particle: String,
        data_source: DataSource,
    },

    /// The table file is missing or malformed.
    #[error("failed to load dose table {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// NaN placeholders appear before valid coefficients, so truncating the
    /// energy grid would pair energies with the wrong values.
    #[error(
        "{particle} {geometry} in {data_source} has NaN at row {first_nan} followed by a value at row {row}"
    )]
    MisalignedData {
        particle: Particle,
        geometry: Geometry,
        data_source: DataSource,
        first_nan: usize,
        row: usize,
    },

    #[error("invalid store configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl DoseError {
    pub(crate) fn invalid_argument<'a>(
        name: &'static str,
        value: &str,
        allowed: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
            allowed: allowed.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    pub(crate) fn invalid_geometry(particle: Particle, geometry: Geometry) -> Self {
        let allowed = particle
            .geometries()
            .iter()
            .map(Geometry::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidGeometry {
            particle,
            geometry,
            allowed,
        }
    }

    pub(crate) fn unavailable(particle: &str, data_source: DataSource) -> Self {
        Self::DataUnavailable {
            particle: particle.to_string(),
            data_source,
        }
    }
}
