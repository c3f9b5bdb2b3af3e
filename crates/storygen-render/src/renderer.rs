//! Renderer trait

use storygen_model::Story;

/// Turns a parsed story into one generated artifact
///
/// Rendering trusts its input: it never re-validates the story and never
/// fails, even for hand-built stories with empty fields.
pub trait StoryRenderer {
    /// File extension of the rendered artifact, without the dot
    const EXTENSION: &'static str;

    /// Render the artifact text
    fn render(&self, story: &Story) -> String;
}
