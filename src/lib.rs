//! Fluence-to-effective-dose conversion coefficients from ICRP
//! Publications 116 and 119.
//!
//! Tables are read lazily from `<data_dir>/icrp116/*.txt` and
//! `<data_dir>/icrp119/*.txt` and cached for the life of the [`DoseStore`].
//! Coefficients are in pSv·cm², except `"photon kerma"` which is in Sv/Gy;
//! energies are in eV.

pub mod config;
pub mod data;
pub mod error;
pub mod store;

use once_cell::sync::Lazy;

pub use config::{DATA_DIR_ENV, StoreConfig};
pub use data::model::{DataSource, DoseCoefficients, DoseUnit, Geometry, GeometrySet, Particle};
pub use error::{DoseError, Result};
pub use store::DoseStore;

static DEFAULT_STORE: Lazy<DoseStore> = Lazy::new(|| DoseStore::new(StoreConfig::from_env()));

/// The process-wide store, configured from [`DATA_DIR_ENV`] on first use.
pub fn default_store() -> &'static DoseStore {
    &DEFAULT_STORE
}

/// Look up coefficients in the process-wide store.
///
/// `geometry` is one of `AP`, `PA`, `LLAT`, `RLAT`, `ROT`, `ISO` and
/// `data_source` one of `icrp116`, `icrp119`; [`Geometry::default`] and
/// [`DataSource::default`] give the conventional `AP` / `icrp116`.
pub fn dose_coefficients(
    particle: &str,
    geometry: &str,
    data_source: &str,
) -> Result<DoseCoefficients> {
    DEFAULT_STORE.dose_coefficients(particle, geometry, data_source)
}
