//! Themed word bank with fallback resolution.

use std::collections::HashMap;

/// Theme used when the requested theme is not in the bank.
pub const FALLBACK_THEME: &str = "animals";

/// Difficulty keys tried, in order, when the requested one is missing.
const FALLBACK_DIFFICULTIES: [&str; 2] = ["medium", "easy"];

/// Immutable table of candidate words keyed by theme and difficulty.
///
/// Built once and never written afterwards. Lookups never fail: an unknown
/// theme or difficulty degrades to a substitute list (see [`WordBank::resolve`]).
#[derive(Debug, Clone)]
pub struct WordBank {
    themes: HashMap<String, HashMap<String, Vec<String>>>,
}

impl WordBank {
    /// Build the bundled six-theme bank.
    pub fn builtin() -> Self {
        let table: &[(&str, &[(&str, &[&str])])] = &[
            (
                "animals",
                &[
                    ("easy", &["CAT", "DOG", "BIRD", "FISH", "BEAR"]),
                    (
                        "medium",
                        &[
                            "ELEPHANT", "TIGER", "RABBIT", "MONKEY", "GIRAFFE", "ZEBRA", "LION",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "RHINOCEROS",
                            "HIPPOPOTAMUS",
                            "CHIMPANZEE",
                            "CROCODILE",
                            "KANGAROO",
                            "BUTTERFLY",
                            "PENGUIN",
                            "DOLPHIN",
                        ],
                    ),
                ],
            ),
            (
                "food",
                &[
                    ("easy", &["APPLE", "BREAD", "CAKE", "MILK", "RICE"]),
                    (
                        "medium",
                        &[
                            "PIZZA", "BURGER", "CHEESE", "ORANGE", "BANANA", "PASTA", "CHICKEN",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "STRAWBERRY",
                            "CHOCOLATE",
                            "SPAGHETTI",
                            "HAMBURGER",
                            "SANDWICH",
                            "WATERMELON",
                            "PINEAPPLE",
                        ],
                    ),
                ],
            ),
            (
                "nature",
                &[
                    ("easy", &["TREE", "ROCK", "LEAF", "FLOWER", "GRASS"]),
                    (
                        "medium",
                        &[
                            "MOUNTAIN", "FOREST", "RIVER", "OCEAN", "DESERT", "VALLEY", "GARDEN",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "WATERFALL",
                            "BUTTERFLY",
                            "RAINBOW",
                            "LIGHTNING",
                            "EARTHQUAKE",
                            "HURRICANE",
                            "BLIZZARD",
                        ],
                    ),
                ],
            ),
            (
                "school",
                &[
                    ("easy", &["BOOK", "PEN", "DESK", "MATH", "READ"]),
                    (
                        "medium",
                        &[
                            "TEACHER", "STUDENT", "LESSON", "HOMEWORK", "LIBRARY", "SCIENCE",
                            "HISTORY",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "GEOGRAPHY",
                            "CHEMISTRY",
                            "BIOLOGY",
                            "MATHEMATICS",
                            "LITERATURE",
                            "PHILOSOPHY",
                            "PSYCHOLOGY",
                        ],
                    ),
                ],
            ),
            (
                "sports",
                &[
                    ("easy", &["BALL", "RUN", "JUMP", "SWIM", "BIKE"]),
                    (
                        "medium",
                        &[
                            "SOCCER", "TENNIS", "HOCKEY", "BOXING", "SKIING", "RACING", "DIVING",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "BASKETBALL",
                            "VOLLEYBALL",
                            "BADMINTON",
                            "WRESTLING",
                            "GYMNASTICS",
                            "ATHLETICS",
                            "SWIMMING",
                        ],
                    ),
                ],
            ),
            (
                "colors",
                &[
                    ("easy", &["RED", "BLUE", "GREEN", "YELLOW", "BLACK"]),
                    (
                        "medium",
                        &[
                            "PURPLE", "ORANGE", "PINK", "BROWN", "WHITE", "GRAY", "SILVER",
                        ],
                    ),
                    (
                        "hard",
                        &[
                            "TURQUOISE",
                            "MAGENTA",
                            "CRIMSON",
                            "EMERALD",
                            "SAPPHIRE",
                            "LAVENDER",
                            "MAROON",
                        ],
                    ),
                ],
            ),
        ];

        let themes = table
            .iter()
            .map(|(theme, lists)| {
                let lists = lists
                    .iter()
                    .map(|(difficulty, words)| {
                        (
                            difficulty.to_string(),
                            words.iter().map(|w| w.to_string()).collect(),
                        )
                    })
                    .collect();
                (theme.to_string(), lists)
            })
            .collect();

        Self { themes }
    }

    /// Build a bank from arbitrary (theme, difficulty, words) entries.
    pub fn from_entries<I, T, D, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, D, Vec<W>)>,
        T: Into<String>,
        D: Into<String>,
        W: Into<String>,
    {
        let mut themes: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        for (theme, difficulty, words) in entries {
            themes
                .entry(theme.into())
                .or_default()
                .insert(difficulty.into(), words.into_iter().map(Into::into).collect());
        }
        Self { themes }
    }

    /// All theme keys present in the bank.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Whether the bank contains the given theme.
    pub fn contains_theme(&self, theme: &str) -> bool {
        self.themes.contains_key(theme)
    }

    /// Resolve the word list for a (theme, difficulty) pair.
    ///
    /// Resolution never fails; it degrades through an ordered fallback chain:
    ///
    /// 1. unknown theme: use [`FALLBACK_THEME`] instead (warn),
    /// 2. within the chosen theme, try the requested difficulty, then
    ///    `medium`, then `easy` (warn when the requested one is missing),
    /// 3. nothing matched: empty list.
    pub fn resolve(&self, theme: &str, difficulty: &str) -> Vec<String> {
        let lists = match self.themes.get(theme) {
            Some(lists) => lists,
            None => {
                tracing::warn!(
                    "unknown theme '{}', falling back to '{}'",
                    theme,
                    FALLBACK_THEME
                );
                match self.themes.get(FALLBACK_THEME) {
                    Some(lists) => lists,
                    None => return Vec::new(),
                }
            }
        };

        if let Some(words) = lists.get(difficulty) {
            return words.clone();
        }

        tracing::warn!(
            "difficulty '{}' not available for theme '{}', trying fallbacks",
            difficulty,
            theme
        );

        for key in FALLBACK_DIFFICULTIES {
            if let Some(words) = lists.get(key) {
                return words.clone();
            }
        }

        Vec::new()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
