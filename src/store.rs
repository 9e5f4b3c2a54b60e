use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::StoreConfig;
use crate::data::loader::load_table;
use crate::data::model::{DataSource, DoseCoefficients, DoseTable, Geometry, Particle};
use crate::data::registry::{self, TableEntry};
use crate::error::{DoseError, Result};

type TableKey = (DataSource, Particle);

// ---------------------------------------------------------------------------
// DoseStore – memoizing access to the coefficient tables
// ---------------------------------------------------------------------------

/// Single point of access to the dose coefficient tables.
///
/// Every registered (data source, particle) pair starts out unloaded and is
/// read from disk on its first query; afterwards it is served from memory
/// and never reloaded. Pairs outside the registry never get a cache slot.
#[derive(Debug)]
pub struct DoseStore {
    data_dir: PathBuf,
    tables: Mutex<HashMap<TableKey, Option<Arc<DoseTable>>>>,
}

impl Default for DoseStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl DoseStore {
    pub fn new(config: StoreConfig) -> Self {
        let tables = registry::TABLES
            .iter()
            .map(|e| ((e.data_source, e.particle), None))
            .collect();
        DoseStore {
            data_dir: config.data_dir,
            tables: Mutex::new(tables),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Registered pairs, in registry order.
    pub fn available(&self) -> impl Iterator<Item = (DataSource, Particle)> + '_ {
        registry::TABLES.iter().map(|e| (e.data_source, e.particle))
    }

    pub fn is_loaded(&self, data_source: DataSource, particle: Particle) -> bool {
        matches!(self.lock().get(&(data_source, particle)), Some(Some(_)))
    }

    /// Load every registered table now instead of on first use.
    pub fn preload(&self) -> Result<()> {
        for entry in registry::TABLES {
            self.table(entry)?;
        }
        Ok(())
    }

    /// Coefficients for `particle` irradiated in `geometry`, from `data_source`.
    ///
    /// `geometry` and `data_source` are checked before any file is touched.
    /// `particle` is not checked on its own: a name without a table in
    /// `data_source`, known or not, gives [`DoseError::DataUnavailable`].
    ///
    /// ```no_run
    /// let store = effective_dose::DoseStore::default();
    /// let neutron = store.dose_coefficients("neutron", "ISO", "icrp116")?;
    /// assert_eq!(neutron.energy.len(), neutron.coefficients.len());
    /// # Ok::<(), effective_dose::DoseError>(())
    /// ```
    pub fn dose_coefficients(
        &self,
        particle: &str,
        geometry: &str,
        data_source: &str,
    ) -> Result<DoseCoefficients> {
        let geometry: Geometry = geometry.parse()?;
        let data_source: DataSource = data_source.parse()?;
        let particle = Particle::from_name(particle)
            .ok_or_else(|| DoseError::unavailable(particle, data_source))?;
        self.coefficients(particle, geometry, data_source)
    }

    /// Typed form of [`DoseStore::dose_coefficients`].
    pub fn coefficients(
        &self,
        particle: Particle,
        geometry: Geometry,
        data_source: DataSource,
    ) -> Result<DoseCoefficients> {
        let entry = registry::lookup(data_source, particle)
            .ok_or_else(|| DoseError::unavailable(particle.as_str(), data_source))?;
        let table = self.table(entry)?;

        let index = particle
            .geometry_set()
            .index_of(geometry)
            .ok_or_else(|| DoseError::invalid_geometry(particle, geometry))?;

        let mut energy = table.energy();
        let mut coefficients = table.column(index + 1);

        if entry.trailing_nan.contains(&geometry) {
            let keep = trailing_nan_start(&coefficients).map_err(|(first_nan, row)| {
                DoseError::MisalignedData {
                    particle,
                    geometry,
                    data_source,
                    first_nan,
                    row,
                }
            })?;
            coefficients.truncate(keep);
            energy.truncate(keep);
        }

        Ok(DoseCoefficients {
            energy,
            coefficients,
            unit: particle.unit(),
        })
    }

    /// Cached table for `entry`, reading it on first use. The lock is held
    /// across the read so concurrent first queries load once.
    fn table(&self, entry: &TableEntry) -> Result<Arc<DoseTable>> {
        let key = (entry.data_source, entry.particle);
        let mut tables = self.lock();

        if let Some(Some(table)) = tables.get(&key) {
            log::debug!("cache hit for {} {}", entry.particle, entry.data_source);
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.load(entry)?);
        tables.insert(key, Some(Arc::clone(&table)));
        Ok(table)
    }

    fn load(&self, entry: &TableEntry) -> Result<DoseTable> {
        log::info!("loading {} {}", entry.particle, entry.data_source);
        let path = self.data_dir.join(entry.path);
        let columns = entry.particle.geometry_set().column_count();
        load_table(&path, columns).map_err(|source| DoseError::Load { path, source })
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TableKey, Option<Arc<DoseTable>>>> {
        // Slots only ever hold complete tables, so a panic elsewhere leaves
        // the map consistent.
        self.tables.lock().unwrap_or_else(|poisoned| {
            log::warn!("recovering poisoned dose table cache");
            poisoned.into_inner()
        })
    }
}

/// Length of `values` once a trailing run of NaN is dropped. A finite value
/// after the first NaN is reported as `(first_nan, row)`.
fn trailing_nan_start(values: &[f64]) -> std::result::Result<usize, (usize, usize)> {
    let Some(first_nan) = values.iter().position(|v| v.is_nan()) else {
        return Ok(values.len());
    };
    match values[first_nan..].iter().position(|v| !v.is_nan()) {
        Some(offset) => Err((first_nan, first_nan + offset)),
        None => Ok(first_nan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_run_is_cut() {
        let nan = f64::NAN;
        assert_eq!(trailing_nan_start(&[1.0, 2.0, nan, nan]), Ok(2));
        assert_eq!(trailing_nan_start(&[1.0, 2.0]), Ok(2));
        assert_eq!(trailing_nan_start(&[nan]), Ok(0));
        assert_eq!(trailing_nan_start(&[]), Ok(0));
    }

    #[test]
    fn interior_nan_is_reported() {
        let nan = f64::NAN;
        assert_eq!(trailing_nan_start(&[1.0, nan, nan, 4.0, nan]), Err((1, 3)));
    }

    #[test]
    fn new_store_has_unloaded_slot_per_registered_pair() {
        let store = DoseStore::with_data_dir("/nonexistent");
        assert_eq!(store.lock().len(), registry::TABLES.len());
        assert!(store.lock().values().all(Option::is_none));
        assert!(!store.is_loaded(DataSource::Icrp116, Particle::Neutron));
        assert!(!store.lock().contains_key(&(DataSource::Icrp119, Particle::Proton)));
    }

    #[test]
    fn argument_errors_come_before_io() {
        let store = DoseStore::with_data_dir("/nonexistent");
        let err = store.dose_coefficients("neutron", "XYZ", "icrp116").unwrap_err();
        assert!(matches!(err, DoseError::InvalidArgument { name: "geometry", .. }));
        let err = store.dose_coefficients("neutron", "AP", "icrp999").unwrap_err();
        assert!(matches!(err, DoseError::InvalidArgument { name: "data_source", .. }));
        let err = store.dose_coefficients("gluon", "AP", "icrp116").unwrap_err();
        assert!(matches!(err, DoseError::DataUnavailable { .. }));
    }

    #[test]
    fn missing_table_file_is_a_load_error() {
        let store = DoseStore::with_data_dir("/nonexistent");
        let err = store.dose_coefficients("photon", "AP", "icrp116").unwrap_err();
        match err {
            DoseError::Load { path, .. } => assert!(path.ends_with("icrp116/photons.txt")),
            other => panic!("expected load error, got {other}"),
        }
        assert!(!store.is_loaded(DataSource::Icrp116, Particle::Photon));
    }
}
