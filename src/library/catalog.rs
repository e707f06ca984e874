// Catalog - filename-based sample classification
//
// A file's category is the first keyword, in vocabulary order, whose
// lowercase form occurs anywhere in the lowercase file name. List order is
// the only tie-break: `snare_kick.wav` is a kick because "kick" precedes
// "snare" in the default list, regardless of where each word sits in the
// name.

use crate::error::OrganizeError;

/// Built-in sound-effect categories in tie-break order
pub const DEFAULT_CATEGORIES: [&str; 18] = [
    "glitch",
    "impact",
    "stab",
    "sub_drop",
    "sweep",
    "lazer",
    "alarm",
    "white_noise",
    "vocal_chop",
    "dubstep_growl",
    "kick",
    "snare",
    "open_hat",
    "closed_hat",
    "crash",
    "snap",
    "toms",
    "clap",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyword {
    /// As configured; used as the destination folder name
    name: String,
    /// Lowercase form used for matching
    needle: String,
}

/// Ordered, immutable set of category keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    keywords: Vec<Keyword>,
}

impl CategoryVocabulary {
    /// Build a vocabulary from keywords in tie-break order
    ///
    /// # Errors
    /// `OrganizeError::Vocabulary` if the list is empty, a keyword is blank,
    /// or a keyword contains a path separator (it becomes a folder name)
    pub fn new<I, S>(keywords: I) -> Result<Self, OrganizeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Vec::new();
        for keyword in keywords {
            let name: String = keyword.into();
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(OrganizeError::Vocabulary {
                    reason: "category keywords must not be blank".to_string(),
                });
            }
            if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
                return Err(OrganizeError::Vocabulary {
                    reason: format!("category '{}' is not a valid folder name", trimmed),
                });
            }
            parsed.push(Keyword {
                needle: trimmed.to_lowercase(),
                name: trimmed.to_string(),
            });
        }

        if parsed.is_empty() {
            return Err(OrganizeError::Vocabulary {
                reason: "at least one category keyword is required".to_string(),
            });
        }

        Ok(Self { keywords: parsed })
    }

    /// Classify a file name, returning the matching category name
    pub fn classify(&self, file_name: &str) -> Option<&str> {
        let haystack = file_name.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| haystack.contains(&keyword.needle))
            .map(|keyword| keyword.name.as_str())
    }

    /// Category names in tie-break order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|keyword| keyword.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_CATEGORIES
                .iter()
                .map(|name| Keyword {
                    name: name.to_string(),
                    needle: name.to_string(),
                })
                .collect(),
        }
    }
}

/// Which file names count as waveform files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPolicy {
    suffix: String,
    case_sensitive: bool,
}

impl ExtensionPolicy {
    /// `extension` may be given with or without the leading dot
    pub fn new(extension: &str, case_sensitive: bool) -> Self {
        let bare = extension.trim_start_matches('.');
        let suffix = format!(".{}", bare);
        Self {
            suffix: if case_sensitive {
                suffix
            } else {
                suffix.to_lowercase()
            },
            case_sensitive,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        if self.case_sensitive {
            file_name.ends_with(&self.suffix)
        } else {
            file_name.to_lowercase().ends_with(&self.suffix)
        }
    }
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self::new("wav", true)
    }
}
