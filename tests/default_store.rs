mod common;

use common::{Fixture, init_logging};
use effective_dose::{DATA_DIR_ENV, DataSource, Particle};

// The default store reads its directory once, so this binary holds a single
// test that owns the environment variable.
#[test]
fn default_store_follows_data_dir_env() {
    init_logging();
    let fixture = Fixture::full();
    std::env::set_var(DATA_DIR_ENV, fixture.path());

    let store = effective_dose::default_store();
    assert_eq!(store.data_dir(), fixture.path());

    let (energy, coeffs) = effective_dose::dose_coefficients("neutron", "ISO", "icrp119")
        .unwrap()
        .into_parts();
    assert_eq!(energy.len(), coeffs.len());
    assert!(store.is_loaded(DataSource::Icrp119, Particle::Neutron));
    assert!(!store.is_loaded(DataSource::Icrp116, Particle::Neutron));
}
