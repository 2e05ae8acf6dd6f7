use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Canvas2dError, Canvas2dResult};

/// Font configuration used when a canvas is created.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Font data to register up front.
    pub custom_fonts: Vec<CustomFont>,
    /// Mappings from generic CSS family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// A font to register, consisting of raw font file data and an optional
/// logical name it can be referred to by.
#[derive(Clone, Debug)]
pub struct CustomFont {
    /// Raw font file data (TTF/OTF). Arc-wrapped for cheap cloning.
    pub data: Arc<Vec<u8>>,
    /// Logical name for the font. If None, only the family name from the
    /// font's name table can be used.
    pub alias: Option<String>,
}

/// Mappings from generic CSS family names to concrete font family names, in priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    pub serif: Vec<String>,
    pub sans_serif: Vec<String>,
    pub monospace: Vec<String>,
}

impl GenericFamilyMap {
    /// Returns the default generic family preference lists.
    pub fn defaults() -> Self {
        Self {
            sans_serif: vec![
                "Arial".into(),
                "Helvetica".into(),
                "Liberation Sans".into(),
                "DejaVu Sans".into(),
            ],
            monospace: vec![
                "Courier New".into(),
                "Liberation Mono".into(),
                "DejaVu Sans Mono".into(),
            ],
            serif: vec![
                "Times New Roman".into(),
                "Liberation Serif".into(),
                "DejaVu Serif".into(),
            ],
        }
    }
}

/// Logical font names registered by the caller, mapped to the family name
/// found in the font file.
#[derive(Clone, Debug, Default)]
pub struct FontAliases {
    names: HashMap<String, String>,
}

impl FontAliases {
    pub fn insert(&mut self, alias: impl Into<String>, family: impl Into<String>) {
        self.names.insert(alias.into(), family.into());
    }

    /// Resolve a logical name to a family name. Unknown names pass through
    /// unchanged so installed families can be used directly.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.names.contains_key(alias)
    }
}

/// Build a font database and the alias table from a [`FontConfig`].
pub(crate) fn font_config_to_fontdb(config: &FontConfig) -> (fontdb::Database, FontAliases) {
    let mut db = fontdb::Database::new();
    let mut aliases = FontAliases::default();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        let source = fontdb::Source::Binary(font.data.clone());
        match (load_source(&mut db, source), &font.alias) {
            (Some(family), Some(alias)) => aliases.insert(alias.clone(), family),
            (None, _) => log::warn!(target: "canvas", "custom font data contained no faces"),
            _ => {}
        }
    }

    apply_generic_families(&mut db, &config.generic_families);

    (db, aliases)
}

/// Read a font file from disk into the database, returning its family name.
pub(crate) fn load_font_file(db: &mut fontdb::Database, path: &Path) -> Canvas2dResult<String> {
    let data = std::fs::read(path).map_err(|err| Canvas2dError::FontLoadError {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    load_source(db, fontdb::Source::Binary(Arc::new(data))).ok_or_else(|| {
        Canvas2dError::FontLoadError {
            path: path.display().to_string(),
            reason: "no font faces found".to_string(),
        }
    })
}

fn load_source(db: &mut fontdb::Database, source: fontdb::Source) -> Option<String> {
    let ids = db.load_font_source(source);
    let id = ids.first()?;
    db.face(*id)
        .and_then(|face| face.families.first())
        .map(|(family, _lang)| family.clone())
}

/// Point each generic family at the first available concrete family.
fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(fam, _lang)| fam.clone()))
        .collect();

    if let Some(family) = families.sans_serif.iter().find(|f| available.contains(*f)) {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = families.serif.iter().find(|f| available.contains(*f)) {
        db.set_serif_family(family);
    }
    if let Some(family) = families.monospace.iter().find(|f| available.contains(*f)) {
        db.set_monospace_family(family);
    }
}
