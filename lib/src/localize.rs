//! Per-language copies of a [`Media`].
//!
//! A localized copy is a deep clone in which every language out of the replacement set is
//! rewritten to the target language. Everything else, including tracks in other languages,
//! stays as it is.

use crate::model::{Language, Media};

/// Which languages a localized copy replaces, and the languages copies are made for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageReplacement {
    replace: Vec<Language>,
    targets: Vec<Language>,
}

impl LanguageReplacement {
    pub fn new(replace: Vec<Language>, targets: Vec<Language>) -> Self {
        let mut targets_dedup: Vec<Language> = Vec::with_capacity(targets.len());
        for target in targets {
            if !targets_dedup.contains(&target) {
                targets_dedup.push(target);
            }
        }

        Self {
            replace,
            targets: targets_dedup,
        }
    }

    /// Whether no copy would be made, or no copy would differ from the original
    pub fn is_empty(&self) -> bool {
        self.replace.is_empty() || self.targets.is_empty()
    }

    pub fn targets(&self) -> &[Language] {
        &self.targets
    }

    pub fn replaces(&self, language: &Language) -> bool {
        self.replace.contains(language)
    }
}

/// Create one localized copy of `media` per target language.
///
/// The original is left untouched.
pub fn localize(media: &Media, replacement: &LanguageReplacement) -> Vec<Media> {
    if replacement.is_empty() {
        return Vec::new();
    }

    replacement
        .targets()
        .iter()
        .map(|target| {
            let mut copy = media.clone();
            apply(&mut copy, replacement, target);
            copy
        })
        .collect()
}

/// Rewrite the language-tagged fields of `media` and its episodes
fn apply(media: &mut Media, replacement: &LanguageReplacement, target: &Language) {
    let rewrite = |language: &mut Language| {
        if replacement.replaces(language) {
            language.clone_from(target);
        }
    };

    media.languages.iter_mut().for_each(rewrite);
    media
        .streams
        .iter_mut()
        .filter_map(|v| v.language_mut())
        .for_each(rewrite);
    media
        .files
        .iter_mut()
        .filter_map(|v| v.language_mut())
        .for_each(rewrite);
    // a replaced language may now appear twice
    dedup_in_order(&mut media.languages);

    media.localized = Some(target.clone());
    for episode in media.episodes_mut() {
        apply(episode, replacement, target);
    }
}

fn dedup_in_order(languages: &mut Vec<Language>) {
    let mut seen: Vec<Language> = Vec::with_capacity(languages.len());
    languages.retain(|v| {
        if seen.contains(v) {
            false
        } else {
            seen.push(v.clone());
            true
        }
    });
}
