/// Credential updater
///
/// Rewrites the Supabase URL and anon key embedded in the app's source files.
/// The old URL is replaced literally; the old key is located with a regular
/// expression. Each target file is read, rewritten and written back in place.

use std::path::{Path, PathBuf};

use log::{error, info};
use regex::{NoExpand, Regex};

use crate::config::CredentialSettings;
use crate::core::defaults::{KEY_PLACEHOLDER, OLD_KEY_REGEX, OLD_SUPABASE_KEY_PATTERN};
use crate::error::{Result, SetupError};
use crate::utils::file_utils::{read_text_file, resolve, write_text_file};

/// Result of rewriting one piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Occurrences of the old URL that were replaced
    pub url_replacements: usize,
    /// Matches of the old key pattern that were replaced
    pub key_replacements: usize,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.url_replacements + self.key_replacements > 0
    }
}

/// Outcome for a single target file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Rewrite>,
}

/// Per-file outcomes of a whole run
#[derive(Debug, Default)]
pub struct UpdateSummary {
    pub attempted: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl UpdateSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.attempted
    }
}

/// A validated credential swap, ready to apply to files
#[derive(Debug, Clone)]
pub struct CredentialUpdate {
    old_url: String,
    new_url: String,
    old_key: Regex,
    new_key: String,
}

impl CredentialUpdate {
    /// Build an update from settings
    ///
    /// Refuses to build while the new key is still the placeholder, so no
    /// file can be touched before the operator supplies a real key.
    pub fn new(settings: &CredentialSettings) -> Result<Self> {
        if settings.new_key == KEY_PLACEHOLDER {
            return Err(SetupError::PlaceholderKey {
                sentinel: KEY_PLACEHOLDER.to_string(),
            });
        }

        let old_key = if settings.old_key_pattern == OLD_SUPABASE_KEY_PATTERN {
            OLD_KEY_REGEX.clone()
        } else {
            Regex::new(&settings.old_key_pattern)?
        };

        Ok(Self {
            old_url: settings.old_url.clone(),
            new_url: settings.new_url.clone(),
            old_key,
            new_key: settings.new_key.clone(),
        })
    }

    pub fn new_url(&self) -> &str {
        &self.new_url
    }

    pub fn new_key(&self) -> &str {
        &self.new_key
    }

    /// Apply both replacements to a string
    ///
    /// The URL is swapped first, then every key match. The new key is
    /// inserted literally, `$` included.
    pub fn apply(&self, content: &str) -> Rewrite {
        let url_replacements = content.matches(self.old_url.as_str()).count();
        let content = content.replace(&self.old_url, &self.new_url);

        let key_replacements = self.old_key.find_iter(&content).count();
        let content = self
            .old_key
            .replace_all(&content, NoExpand(self.new_key.as_str()))
            .into_owned();

        Rewrite {
            content,
            url_replacements,
            key_replacements,
        }
    }

    /// Rewrite one file in place
    ///
    /// The file is always written back; content without matches is written
    /// back unchanged.
    pub fn update_file(&self, file_path: &Path) -> Result<Rewrite> {
        let content = read_text_file(file_path)?;
        let rewrite = self.apply(&content);
        write_text_file(file_path, &rewrite.content)?;

        info!(
            "Updated {} ({} URL, {} key replacement(s))",
            file_path.display(),
            rewrite.url_replacements,
            rewrite.key_replacements
        );
        Ok(rewrite)
    }

    /// Rewrite every target file, continuing past failures
    pub fn update_all(&self, root: &Path, files: &[String]) -> UpdateSummary {
        let mut summary = UpdateSummary {
            attempted: files.len(),
            outcomes: Vec::with_capacity(files.len()),
        };

        for name in files {
            let path = resolve(root, name);
            let result = self.update_file(&path);
            if let Err(e) = &result {
                error!("Failed to update {}: {}", path.display(), e);
            }
            summary.outcomes.push(FileOutcome { path, result });
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(new_key: &str) -> CredentialSettings {
        CredentialSettings {
            new_key: new_key.to_string(),
            ..CredentialSettings::default()
        }
    }

    #[test]
    fn placeholder_key_is_rejected() {
        let err = CredentialUpdate::new(&settings(KEY_PLACEHOLDER)).unwrap_err();
        assert!(matches!(err, SetupError::PlaceholderKey { .. }));
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let mut s = settings("real-key");
        s.old_key_pattern = "(unclosed".to_string();
        assert!(matches!(
            CredentialUpdate::new(&s),
            Err(SetupError::InvalidPattern(_))
        ));
    }

    #[test]
    fn new_key_is_inserted_literally() {
        let mut s = settings("key$1with${dollars}");
        s.old_key_pattern = r"old-(\w+)".to_string();
        let update = CredentialUpdate::new(&s).unwrap();

        let rewrite = update.apply("k = 'old-key'");
        assert_eq!(rewrite.content, "k = 'key$1with${dollars}'");
        assert_eq!(rewrite.key_replacements, 1);
    }

    #[test]
    fn default_pattern_matches_old_key_only() {
        let old_key = OLD_SUPABASE_KEY_PATTERN.replace(r"\.", ".");
        assert!(OLD_KEY_REGEX.is_match(&old_key));
        assert!(!OLD_KEY_REGEX.is_match(&old_key.replace('.', "x")));
    }
}
