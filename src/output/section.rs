use crate::constants::{SECTION_HEADER_PREFIX, SECTION_HEADER_SUFFIX};
use crate::core_types::Section;

/// Renders the header line for a reference.
pub fn section_header(reference: &str) -> String {
    format!(
        "{}{}{}",
        SECTION_HEADER_PREFIX, reference, SECTION_HEADER_SUFFIX
    )
}

/// Builds the section for one reference: header line, blank line, the
/// right-trimmed content, and one trailing newline.
pub fn build_section(reference: &str, content: &str) -> Section {
    let rendered = format!("{}\n\n{}\n", section_header(reference), content.trim_end());
    Section {
        reference: reference.to_string(),
        rendered,
    }
}
