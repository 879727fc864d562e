use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Point
// ────────────────────────────────────────────────────────────────────────────

/// A named geographic location.
///
/// Points are owned by the dataset supplier and immutable for the lifetime of
/// a session; the map widget only ever references them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Identifier, unique within the dataset.
    pub id: u32,
    pub name: String,
    /// Latitude in degrees, in [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, in [-180, 180].
    pub lng: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Dataset
// ────────────────────────────────────────────────────────────────────────────

/// The full set of points available to the widget, keyed by id.
///
/// Insertion order is preserved (the supplier's order is the display order in
/// location lists), which is why this is an `IndexMap` rather than a plain
/// `HashMap`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    points: IndexMap<u32, Point>,
}

impl Dataset {
    /// Build a dataset from supplier records, validating id uniqueness and
    /// coordinate ranges.
    pub fn from_points(records: Vec<Point>) -> anyhow::Result<Self> {
        let mut points = IndexMap::with_capacity(records.len());
        for p in records {
            if !(-90.0..=90.0).contains(&p.lat) {
                anyhow::bail!("Point {} ({}): latitude {} out of range [-90, 90]", p.id, p.name, p.lat);
            }
            if !(-180.0..=180.0).contains(&p.lng) {
                anyhow::bail!("Point {} ({}): longitude {} out of range [-180, 180]", p.id, p.name, p.lng);
            }
            let id = p.id;
            if points.insert(id, p).is_some() {
                anyhow::bail!("Duplicate point id {}", id);
            }
        }
        Ok(Self { points })
    }

    pub fn get(&self, id: u32) -> Option<&Point> {
        self.points.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.points.contains_key(&id)
    }

    /// Iterate points in supplier order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DatasetDoc – binary serialization wrapper
// ────────────────────────────────────────────────────────────────────────────

/// On-disk snapshot of a dataset (`.wpb` files).
///
/// Only datasets are persisted; path selections are session state and never
/// written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDoc {
    pub dataset: Dataset,
}

impl DatasetDoc {
    /// Save the DatasetDoc to a binary file with magic bytes and versioning.
    pub fn save_to_binary<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        std::io::Write::write_all(&mut writer, b"WAYPATH")?;
        std::io::Write::write_all(&mut writer, &1u32.to_le_bytes())?;
        bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
        Ok(())
    }

    /// Load a DatasetDoc from a binary file, checking magic bytes and version.
    pub fn load_from_binary<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mut magic = [0u8; 7];
        std::io::Read::read_exact(&mut reader, &mut magic)?;
        if &magic != b"WAYPATH" {
            anyhow::bail!("Invalid magic bytes: expected 'WAYPATH'");
        }
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut reader, &mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != 1 {
            anyhow::bail!("Unsupported version: {}", version);
        }
        let doc: DatasetDoc =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        Ok(doc)
    }
}
