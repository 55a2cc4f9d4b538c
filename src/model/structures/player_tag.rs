use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, fs, path::Path};
use thiserror::Error;

/// A lowercase, alias-resolved player name as stored in the `player_name` column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerTag(String);

impl PlayerTag {
    /// Wraps a tag that is already in its stored form. Use [`TagAliases::resolve`]
    /// for user input.
    pub fn new(tag: impl Into<String>) -> Self {
        PlayerTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("Failed to read alias file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse alias file: {0}")]
    Parse(#[from] serde_json::Error)
}

/// Informal nicknames mapped to the canonical tag they refer to.
/// Loaded once at startup and passed to whatever resolves user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAliases {
    aliases: HashMap<String, String>
}

impl Default for TagAliases {
    fn default() -> Self {
        Self::from_pairs([
            ("waterloo", "waterloooooo"),
            ("jeef", "jeffispro"),
            ("jeff", "jeffispro"),
            ("victor", "twlevewinshs"),
            ("sleepy", "foreversleep"),
            ("dogdog", "dog"),
            ("pockyplays", "pocky"),
            ("nina", "ninaisnoob"),
            ("liihs", "lii"),
            ("purple_hs", "purple"),
            ("deathitselfhs", "deathitself"),
            ("tylerootd", "tyler"),
            ("mrincrediblehs", "mrincredible"),
            ("sevel07", "sevel"),
            ("jubjoe", "felix")
        ])
    }
}

impl TagAliases {
    pub fn empty() -> Self {
        TagAliases { aliases: HashMap::new() }
    }

    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>
    {
        let aliases = pairs
            .into_iter()
            .map(|(alias, canonical)| (alias.as_ref().to_lowercase(), canonical.as_ref().to_lowercase()))
            .collect();

        TagAliases { aliases }
    }

    /// Reads a JSON object of `{"alias": "canonical"}` pairs.
    pub fn from_file(path: &Path) -> Result<Self, AliasError> {
        let contents = fs::read_to_string(path)?;
        let pairs: HashMap<String, String> = serde_json::from_str(&contents)?;

        Ok(Self::from_pairs(pairs))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Lowercases `raw` and swaps a known alias for its canonical tag.
    pub fn resolve(&self, raw: &str) -> PlayerTag {
        let tag = raw.trim().to_lowercase();

        match self.aliases.get(&tag) {
            Some(canonical) => PlayerTag(canonical.clone()),
            None => PlayerTag(tag)
        }
    }
}
