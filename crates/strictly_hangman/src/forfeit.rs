//! Forfeit narration shown when a category is eliminated.

use tracing::instrument;

/// Maps a category name to the line shown when it is eliminated.
pub trait ForfeitText {
    /// Returns the forfeit line for `category`.
    fn forfeit_text(&self, category: &str) -> String;
}

impl<F> ForfeitText for F
where
    F: Fn(&str) -> String,
{
    fn forfeit_text(&self, category: &str) -> String {
        self(category)
    }
}

const PLACEHOLDER: &str = "{category}";

const DEFAULT_TEMPLATES: &[&str] = &[
    "Farewell, {category}",
    "Adios, {category}",
    "R.I.P., {category}",
    "We'll miss you, {category}",
    "Oh no, not {category}!",
    "{category} bites the dust",
    "Gone but not forgotten, {category}",
    "The end of {category} as we know it",
    "Off into the sunset, {category}",
    "{category}, it's been real",
    "{category}, your watch has ended",
    "{category} has left the building",
];

/// Template-based forfeit text.
///
/// The template is selected from a hash of the category name, so the same
/// category always reads the same way and repeated renders are stable.
#[derive(Debug, Clone)]
pub struct FarewellPhrases {
    templates: Vec<String>,
}

impl FarewellPhrases {
    /// Creates phrases from templates containing `{category}`.
    ///
    /// An empty template list falls back to the defaults.
    #[instrument(skip(templates))]
    pub fn new(templates: Vec<String>) -> Self {
        if templates.is_empty() {
            return Self::default();
        }
        Self { templates }
    }

    /// Returns the templates.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    fn template_index(&self, category: &str) -> usize {
        let hash = category
            .bytes()
            .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b)));
        (hash % self.templates.len() as u64) as usize
    }
}

impl Default for FarewellPhrases {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ForfeitText for FarewellPhrases {
    fn forfeit_text(&self, category: &str) -> String {
        self.templates[self.template_index(category)].replace(PLACEHOLDER, category)
    }
}
