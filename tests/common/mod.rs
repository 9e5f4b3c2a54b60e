#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Energies (MeV) used by every fixture table.
pub const ENERGIES_MEV: [f64; 6] = [1.0e-9, 1.0e-6, 1.0e-3, 1.0, 20.0, 1.0e4];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temporary data directory laid out like the shipped tables.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Every registered table, with magnitudes typical of each particle.
    pub fn full() -> Self {
        let fixture = Fixture {
            dir: tempfile::tempdir().expect("tempdir"),
        };
        for (file, base, columns) in ICRP116 {
            fixture.write_scaled(&format!("icrp116/{file}"), *base, *columns, &[]);
        }
        // ISO (col 6) and RLAT (col 4) are not tabulated above 1 MeV.
        fixture.write_scaled("icrp119/neutrons.txt", 3.0, 7, &[4, 6]);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a raw table body below three header lines.
    pub fn write(&self, relative: &str, body: &str) {
        let path = self.file(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        let text = format!("Fixture {relative}\nEffective dose coefficients\nEnergy (MeV) ...\n{body}");
        fs::write(path, text).expect("write fixture");
    }

    /// Coefficient at row `i`, column `c` is `base * (i + 1) * c`; columns in
    /// `nan_columns` hold NaN for the two highest energies.
    fn write_scaled(&self, relative: &str, base: f64, columns: usize, nan_columns: &[usize]) {
        let mut body = String::new();
        for (i, e) in ENERGIES_MEV.iter().enumerate() {
            write!(body, "{e:.6E}").unwrap();
            for c in 1..columns {
                if nan_columns.contains(&c) && i >= ENERGIES_MEV.len() - 2 {
                    body.push_str("  nan");
                } else {
                    write!(body, "  {:.4}", base * (i + 1) as f64 * c as f64).unwrap();
                }
            }
            body.push('\n');
        }
        self.write(relative, &body);
    }
}

/// (file, base coefficient, column count) for every ICRP 116 table.
const ICRP116: &[(&str, f64, usize)] = &[
    ("electrons.txt", 0.03, 4),
    ("helium_ions.txt", 200.0, 4),
    ("negative_muons.txt", 10.0, 4),
    ("negative_pions.txt", 20.0, 4),
    ("neutrons.txt", 3.0, 7),
    ("photons.txt", 0.07, 7),
    ("photons_kerma.txt", 0.006, 7),
    ("positive_muons.txt", 10.0, 4),
    ("positive_pions.txt", 20.0, 4),
    ("positrons.txt", 0.03, 4),
    ("protons.txt", 5.0, 7),
];
