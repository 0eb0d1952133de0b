/// One external search destination. `url` is the base search template; the
/// percent-encoded query is appended to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub url: &'static str,
    /// Accent color (`#RRGGBB`) shown as the window border while selected.
    pub accent: &'static str,
}

/// Fixed engine registry. The order defines both the wheel-cycle order and
/// the priority of first-letter prefix matching ("g" resolves to Google,
/// not GitHub).
pub const ENGINES: &[EngineDescriptor] = &[
    EngineDescriptor {
        id: "google",
        label: "Google",
        url: "https://www.google.com/search?q=",
        accent: "#4285F4",
    },
    EngineDescriptor {
        id: "bing",
        label: "Bing",
        url: "https://www.bing.com/search?q=",
        accent: "#008272",
    },
    EngineDescriptor {
        id: "duckduckgo",
        label: "DuckDuckGo",
        url: "https://duckduckgo.com/?q=",
        accent: "#DE5833",
    },
    EngineDescriptor {
        id: "github",
        label: "GitHub",
        url: "https://github.com/search?q=",
        accent: "#24292e",
    },
    EngineDescriptor {
        id: "youtube",
        label: "YouTube",
        url: "https://www.youtube.com/results?search_query=",
        accent: "#FF0000",
    },
    EngineDescriptor {
        id: "spotify",
        label: "Spotify",
        url: "https://open.spotify.com/search/",
        accent: "#1DB954",
    },
];

/// Step `delta` engines forward or backward from `index`, wrapping around.
pub fn cycle(index: usize, delta: isize) -> usize {
    let len = ENGINES.len() as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

pub fn position_of(id: &str) -> Option<usize> {
    ENGINES.iter().position(|e| e.id == id)
}

/// First engine whose label starts with `letter`, case-insensitive.
pub fn by_first_letter(letter: char) -> Option<usize> {
    ENGINES
        .iter()
        .position(|e| label_starts_with(e.label, letter))
}

pub fn label_starts_with(label: &str, letter: char) -> bool {
    label
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
}

/// Restore an index loaded from disk, falling back to the first engine when
/// the stored value no longer fits the registry.
pub fn clamp_index(index: usize) -> usize {
    if index < ENGINES.len() {
        index
    } else {
        0
    }
}
