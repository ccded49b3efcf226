use crate::profile::{Profile, ShelfEntry};

/// Printed in place of the display name when the page has none.
pub const NAME_NOT_FOUND: &str = "User name not found";

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Append a third line with the book total across shelves
    pub include_total: bool,
}

/// Plain text formatter for human-readable profile dumps
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, profile: &Profile) -> String {
        convert_to_text(profile, &self.config)
    }
}

/// Render a profile as text.
///
/// ```text
/// Extract Data for User: Jane Doe
/// Shelves: [Read (42), Currently Reading (3)]
/// ```
pub fn convert_to_text(profile: &Profile, config: &TextConfig) -> String {
    let name = profile.name.as_deref().unwrap_or(NAME_NOT_FOUND);

    let mut output = format!("Extract Data for User: {}\nShelves: {}\n", name, format_shelves(&profile.shelves));

    if config.include_total {
        output.push_str(&format!("Total: {} books\n", profile.total_books()));
    }

    output
}

fn format_shelves(shelves: &[ShelfEntry]) -> String {
    let items: Vec<String> = shelves.iter().map(ShelfEntry::to_string).collect();
    format!("[{}]", items.join(", "))
}
