//! Reading dictionary for Han characters and fixed words.
//!
//! Keys are Han character sequences; values are ordered reading lists whose
//! first element is the default reading. The built dictionary is an `fst`
//! map from the UTF-8 key to an index into the reading payloads.
//!
//! Public API:
//! - `Dictionary` - immutable store with longest-prefix `lookup`
//! - `DictionaryBuilder` - accumulates table entries and builds the index
//! - `Match` - result of a `lookup`

use ahash::AHashMap;
use fst::{Map, MapBuilder, Streamer};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs::File;
use pinyin::ToPinyinMulti;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use crate::error::DictError;
use crate::loader;
use crate::notation::Reading;
use crate::script::han_chars;
use crate::Config;

/// Default cap on key length, in characters.
pub const DEFAULT_MAX_WORD_LEN: usize = 8;

const SNAPSHOT_FORMAT: u32 = 1;

const EMBEDDED_CHARS: &str = include_str!("../data/chars.txt");
const EMBEDDED_PHRASES: &str = include_str!("../data/phrases.txt");

static EMBEDDED: OnceCell<Result<Arc<Dictionary>, DictError>> = OnceCell::new();

/// Longest key found at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'d> {
    /// Key length in characters.
    pub len: usize,
    /// Readings in preference order; never empty.
    pub readings: &'d [Reading],
}

/// Immutable reading dictionary.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct Dictionary {
    index: Map<Vec<u8>>,
    readings: Vec<Vec<Reading>>,
    max_word_len: usize,
    longest_key: usize,
}

impl Dictionary {
    /// Dictionary built from the reading tables compiled into the crate.
    ///
    /// Built on first call and shared afterwards. A failed build is
    /// memoized too: every call returns the same error.
    pub fn embedded() -> Result<Arc<Dictionary>, DictError> {
        EMBEDDED
            .get_or_init(|| {
                let mut builder = DictionaryBuilder::new();
                builder.load_embedded()?;
                let dict = builder.build()?;
                tracing::info!(entries = dict.len(), "built embedded dictionary");
                Ok(Arc::new(dict))
            })
            .clone()
    }

    /// Build from a reading table held in memory.
    pub fn from_table_str(table: &str) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new();
        builder.load_table_str(table, "<memory>")?;
        builder.build()
    }

    /// Build from a reading table read from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new();
        builder.load_table(BufReader::new(reader), "<reader>")?;
        builder.build()
    }

    /// Build from one or more table files, in order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new();
        for path in paths {
            builder.load_path(path)?;
        }
        builder.build()
    }

    /// Build according to a core `Config`: the embedded tables (unless
    /// disabled) followed by the configured table files.
    pub fn from_config(config: &Config) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new().with_max_word_len(config.max_word_len);
        if config.embedded_tables {
            builder.load_embedded()?;
        }
        for path in &config.tables {
            builder.load_path(path)?;
        }
        builder.build()
    }

    /// Longest key starting at `chars[start]`.
    ///
    /// Walks the fst over the UTF-8 bytes of the following characters and
    /// keeps the last accepting state, so the result is the same as trying
    /// every length from the maximum word length down to one. Returns
    /// `None` when not even `chars[start]` alone is a key.
    pub fn lookup(&self, chars: &[char], start: usize) -> Option<Match<'_>> {
        if start >= chars.len() {
            return None;
        }
        let fst = self.index.as_fst();
        let mut node = fst.root();
        let mut out = fst::raw::Output::zero();
        let mut best: Option<(usize, u64)> = None;
        let mut buf = [0u8; 4];

        let end = chars.len().min(start + self.longest_key);
        'chars: for (offset, ch) in chars[start..end].iter().enumerate() {
            for &byte in ch.encode_utf8(&mut buf).as_bytes() {
                match node.find_input(byte) {
                    Some(i) => {
                        let t = node.transition(i);
                        out = out.cat(t.out);
                        node = fst.node(t.addr);
                    }
                    None => break 'chars,
                }
            }
            if node.is_final() {
                best = Some((offset + 1, out.cat(node.final_output()).value()));
            }
        }

        let (len, idx) = best?;
        self.readings
            .get(idx as usize)
            .map(|readings| Match { len, readings })
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<&[Reading]> {
        let idx = self.index.get(key)?;
        self.readings.get(idx as usize).map(Vec::as_slice)
    }

    /// True if `key` is in the dictionary.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Configured cap on key length, in characters.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Write a snapshot of the built index and readings.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), DictError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| DictError::io(path, e))?;
        let snapshot = SnapshotRef {
            format: SNAPSHOT_FORMAT,
            max_word_len: self.max_word_len,
            index: self.index.as_fst().as_bytes(),
            readings: &self.readings,
        };
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, &snapshot).map_err(|e| DictError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        writer.flush().map_err(|e| DictError::io(path, e))
    }

    /// Load a snapshot written by [`Dictionary::save_bincode`].
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictError::io(path, e))?;
        let snapshot: Snapshot = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| DictError::Corrupt(format!("{}: {}", path.display(), e)))?;
        Self::from_snapshot(snapshot)
    }

    fn from_snapshot(snapshot: Snapshot) -> Result<Self, DictError> {
        if snapshot.format != SNAPSHOT_FORMAT {
            return Err(DictError::Corrupt(format!(
                "snapshot format {} (expected {})",
                snapshot.format, SNAPSHOT_FORMAT
            )));
        }
        let index = Map::new(snapshot.index).map_err(|e| DictError::Corrupt(e.to_string()))?;
        if index.len() != snapshot.readings.len() {
            return Err(DictError::Corrupt(format!(
                "{} keys but {} reading lists",
                index.len(),
                snapshot.readings.len()
            )));
        }

        let mut longest_key = 0;
        let mut stream = index.stream();
        while let Some((key, idx)) = stream.next() {
            let key = std::str::from_utf8(key)
                .map_err(|_| DictError::Corrupt("key is not UTF-8".to_string()))?;
            let width = key.chars().count();
            let readings = snapshot
                .readings
                .get(idx as usize)
                .ok_or_else(|| DictError::Corrupt(format!("key {:?} points past payloads", key)))?;
            if readings.is_empty() || readings.iter().any(|r| r.len() != width) {
                return Err(DictError::Corrupt(format!("readings of {:?} do not fit the key", key)));
            }
            longest_key = longest_key.max(width);
        }

        Ok(Self {
            index,
            readings: snapshot.readings,
            max_word_len: snapshot.max_word_len,
            longest_key: longest_key.min(snapshot.max_word_len),
        })
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    format: u32,
    max_word_len: usize,
    index: &'a [u8],
    readings: &'a [Vec<Reading>],
}

#[derive(Deserialize)]
struct Snapshot {
    format: u32,
    max_word_len: usize,
    index: Vec<u8>,
    readings: Vec<Vec<Reading>>,
}

/// Accumulates entries before the index is built.
///
/// Readings for a key keep their insertion order; re-inserting a reading
/// the key already has is a no-op.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    entries: AHashMap<String, Vec<Reading>>,
    max_word_len: usize,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    /// Set the cap on key length. Keys longer than this fail `build`.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Add one reading for `key`.
    pub fn insert<K: Into<String>>(&mut self, key: K, reading: Reading) -> Result<(), DictError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DictError::invalid(key, "empty key"));
        }
        let width = key.chars().count();
        if reading.len() != width {
            return Err(DictError::invalid(
                key,
                format!("{} syllable(s) for {} character(s)", reading.len(), width),
            ));
        }
        let bucket = self.entries.entry(key).or_default();
        if !bucket.contains(&reading) {
            bucket.push(reading);
        }
        Ok(())
    }

    /// Load every line of a reading table. Returns the number of entry
    /// lines read.
    pub fn load_table<R: BufRead>(&mut self, reader: R, source_name: &str) -> Result<usize, DictError> {
        let mut count = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| DictError::Io {
                path: source_name.to_string(),
                message: e.to_string(),
            })?;
            let parsed = loader::parse_line(&line).map_err(|message| DictError::Parse {
                source_name: source_name.to_string(),
                line: i + 1,
                message,
            })?;
            if let Some(entry) = parsed {
                for reading in entry.readings {
                    self.insert(entry.key.clone(), reading)?;
                }
                count += 1;
            }
        }
        tracing::debug!(source = source_name, lines = count, "loaded reading table");
        Ok(count)
    }

    pub fn load_table_str(&mut self, table: &str, source_name: &str) -> Result<usize, DictError> {
        self.load_table(table.as_bytes(), source_name)
    }

    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictError::io(path, e))?;
        self.load_table(BufReader::new(file), &path.display().to_string())
    }

    /// Load the embedded data: the preferred character readings, then the
    /// full per-character readings of the `pinyin` crate, then the phrase
    /// table. Readings keep that order, so `data/chars.txt` decides the
    /// default reading wherever it has an entry.
    pub fn load_embedded(&mut self) -> Result<usize, DictError> {
        Ok(self.load_table_str(EMBEDDED_CHARS, "data/chars.txt")?
            + self.load_pinyin_data()?
            + self.load_table_str(EMBEDDED_PHRASES, "data/phrases.txt")?)
    }

    /// Add the readings the `pinyin` crate bundles (pinyin-data) for every
    /// Han code point. Returns the number of characters with readings.
    ///
    /// A reading the notation parser rejects is skipped; the character
    /// keeps its other readings.
    pub fn load_pinyin_data(&mut self) -> Result<usize, DictError> {
        let mut chars = 0;
        let mut skipped = 0;
        for ch in han_chars() {
            let Some(readings) = ch.to_pinyin_multi() else {
                continue;
            };
            let key = ch.to_string();
            let mut any = false;
            for py in readings {
                match Reading::parse(py.with_tone()) {
                    Ok(reading) => {
                        self.insert(key.as_str(), reading)?;
                        any = true;
                    }
                    Err(err) => {
                        skipped += 1;
                        tracing::trace!(%ch, error = %err, "skipped pinyin-data reading");
                    }
                }
            }
            if any {
                chars += 1;
            }
        }
        tracing::debug!(chars, skipped, "loaded pinyin-data readings");
        Ok(chars)
    }

    /// Number of keys accumulated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the immutable dictionary.
    pub fn build(self) -> Result<Dictionary, DictError> {
        if self.max_word_len == 0 {
            return Err(DictError::invalid("", "max_word_len must be at least 1"));
        }

        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();

        let mut entries = self.entries;
        let mut builder = MapBuilder::memory();
        let mut readings = Vec::with_capacity(keys.len());
        let mut longest_key = 0;
        for (i, key) in keys.into_iter().enumerate() {
            let width = key.chars().count();
            if width > self.max_word_len {
                return Err(DictError::invalid(
                    key,
                    format!("longer than max_word_len {}", self.max_word_len),
                ));
            }
            longest_key = longest_key.max(width);
            builder.insert(&key, i as u64)?;
            readings.push(entries.remove(&key).unwrap_or_default());
        }
        let index = Map::new(builder.into_inner()?)?;

        Ok(Dictionary {
            index,
            readings,
            max_word_len: self.max_word_len,
            longest_key,
        })
    }
}
