//! The canonical shape of `config.ini`.
//!
//! [`Schema::canonical`] lists every section and key Spicetify expects,
//! together with the value a fresh install starts with.  The table is a
//! `'static` constant and is never written to; values detected on the host at
//! first run travel separately in [`crate::Overrides`].

/// Defaults for one section, in the order they are written to a new file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSchema {
    pub name: &'static str,
    pub keys: &'static [(&'static str, &'static str)],
}

impl SectionSchema {
    /// Default value of `key`, if this section declares it.
    pub fn default_for(&self, key: &str) -> Option<&'static str> {
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// An immutable table of [`SectionSchema`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    sections: &'static [SectionSchema],
}

pub const SETTING_SECTION: &str = "Setting";
pub const SPOTIFY_PATH_KEY: &str = "spotify_path";
pub const PREFS_PATH_KEY: &str = "prefs_path";

const CANONICAL: &[SectionSchema] = &[
    SectionSchema {
        name: SETTING_SECTION,
        keys: &[
            (SPOTIFY_PATH_KEY, ""),
            (PREFS_PATH_KEY, ""),
            ("current_theme", "SpicetifyDefault"),
            ("inject_css", "1"),
            ("replace_colors", "1"),
        ],
    },
    SectionSchema {
        name: "Preprocesses",
        keys: &[
            ("disable_sentry", "1"),
            ("disable_ui_logging", "1"),
            ("remove_rtl_rule", "1"),
            ("expose_apis", "1"),
        ],
    },
    SectionSchema {
        name: "AdditionalOptions",
        keys: &[
            ("experimental_features", "0"),
            ("fastUser_switching", "0"),
            ("home", "0"),
            ("lyric_always_show", "0"),
            ("lyric_force_no_sync", "0"),
            ("made_for_you_hub", "0"),
            ("radio", "0"),
            ("song_page", "0"),
            ("visualization_high_framerate", "0"),
            ("extensions", ""),
            ("custom_apps", ""),
        ],
    },
];

impl Schema {
    /// The schema Spicetify ships with.
    pub const fn canonical() -> Self {
        Self {
            sections: CANONICAL,
        }
    }

    /// Builds a schema from an arbitrary static table.  Mostly useful in tests.
    pub const fn from_static(sections: &'static [SectionSchema]) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &'static [SectionSchema] {
        self.sections
    }

    pub fn section(&self, name: &str) -> Option<&'static SectionSchema> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Default value of `section.key`, if declared.
    pub fn default_for(&self, section: &str, key: &str) -> Option<&'static str> {
        self.section(section)?.default_for(key)
    }

    /// Total number of declared keys across all sections.
    pub fn key_count(&self) -> usize {
        self.sections.iter().map(|s| s.keys.len()).sum()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::canonical()
    }
}
