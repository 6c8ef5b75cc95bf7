//! Technology name -> logo asset lookup
//! Tolerates case, whitespace and punctuation differences ("three js" == "Three.js")

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical entries, in authoring order
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("Angular", "/assets/img/tools/angular.png"),
    ("TypeScript", "/assets/img/tools/typescript.png"),
    ("Node.js", "/assets/img/tools/nodejs.png"),
    ("Ionic", "/assets/img/tools/ionic.png"),
    ("Android", "/assets/img/tools/android.png"),
    ("iOS", "/assets/img/tools/apple.svg"),
    ("Cordova", "/assets/img/tools/cordova.png"),
    ("MongoDB", "/assets/img/tools/mongodb.png"),
    ("Stripe", "/assets/img/tools/stripe.png"),
    ("WebRTC", "/assets/img/tools/webrtc.png"),
    ("AWS", "/assets/img/tools/aws.png"),
    ("Flutter", "/assets/img/tools/flutter_logo.svg"),
    ("Dart", "/assets/img/tools/flutter_logo.svg"),
    ("Firebase", "/assets/img/tools/firebase.png"),
    ("Go", "/assets/img/tools/golang.png"),
    ("PostgreSQL", "/assets/img/tools/postgres.png"),
    ("Svelte", "/assets/img/tools/svelte.png"),
    ("Three.js", "/assets/img/tools/threejs.png"),
    ("Qt", "/assets/img/tools/qt.png"),
    ("TailwindCSS", "/assets/img/tools/tailwind.png"),
    ("WebSocket", "/assets/img/tools/nodejs.png"),
];

/// Alternate spellings: (alias, canonical key, fallback path if the canonical key is gone)
const BUILTIN_ALIASES: &[(&str, &str, &str)] = &[
    ("Three.js", "Three.js", "/assets/img/tools/threejs.png"),
    ("ThreeJS", "Three.js", "/assets/img/tools/threejs.png"),
    ("threejs", "Three.js", "/assets/img/tools/threejs.png"),
];

static BUILTIN: Lazy<IconTable> = Lazy::new(|| {
    let mut table = IconTable::new(BUILTIN_ICONS.iter().copied());
    table.merge_aliases(BUILTIN_ALIASES);
    table
});

/// Ordered icon table with an exact-match index
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    entries: Vec<(&'static str, &'static str)>,
    index: HashMap<&'static str, usize>,
}

impl IconTable {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        let mut table = Self::default();
        for (key, path) in entries {
            table.insert(key, path);
        }
        table
    }

    /// The process-wide table (canonical entries + aliases)
    pub fn builtin() -> &'static IconTable {
        &BUILTIN
    }

    /// Existing keys keep their position; new keys go to the end
    fn insert(&mut self, key: &'static str, path: &'static str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 = path,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, path));
            }
        }
    }

    /// Merge alias keys in the given order, each pointing at its canonical entry's path
    fn merge_aliases(&mut self, aliases: &[(&'static str, &'static str, &'static str)]) {
        // Resolve every target first so the merge can't observe its own writes
        let resolved: Vec<_> = aliases
            .iter()
            .map(|&(alias, canonical, fallback)| {
                (alias, self.exact(canonical).unwrap_or(fallback))
            })
            .collect();

        for (alias, path) in resolved {
            self.insert(alias, path);
        }
    }

    fn exact(&self, key: &str) -> Option<&'static str> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// Look up the asset path for a technology name.
    ///
    /// Exact key match wins. Otherwise the first key (in table order) whose
    /// normalized form equals the normalized input is used.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        if name.is_empty() || self.is_empty() {
            return None;
        }

        if let Some(path) = self.exact(name) {
            return Some(path);
        }

        let wanted = normalize(name);
        self.entries
            .iter()
            .find(|(key, _)| normalize(key) == wanted)
            .map(|&(_, path)| path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lower-case and drop everything that isn't an ASCII letter or digit
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a tool name against the built-in table. `None` input is a miss.
pub fn tool_icon<'a>(name: impl Into<Option<&'a str>>) -> Option<&'static str> {
    name.into().and_then(|n| IconTable::builtin().get(n))
}
