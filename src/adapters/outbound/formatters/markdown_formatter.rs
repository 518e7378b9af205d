use crate::application::read_models::{LanguageRankingView, ReportModel, ScannedGroupView};
use crate::ports::outbound::ReportFormatter;
use crate::recommendation::domain::RecommendedImage;
use crate::shared::Result;

use super::display::{format_digest, format_pinned_reference, human_size, title_case};

/// Markdown table header for the per-language ranking
const TABLE_HEADER: &str =
    "| Rank | Image | Version | Crit | High | Total | Size | Digest | Pinned Reference |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|------|-------|---------|------|------|-------|------|--------|------------------|\n";

/// MarkdownFormatter adapter for the daily recommendations report
///
/// This adapter implements the ReportFormatter port for Markdown: a header
/// stating the ranking criteria, an inventory of the scanned sources, and
/// one ranking table per language.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the title, generation line, and size caveat
    fn render_header(&self, output: &mut String, report: &ReportModel) {
        output.push_str("# Daily Recommended Images by Language\n\n");
        output.push_str(&format!(
            "_Generated: {}. Criteria: lowest critical → high → total vulnerabilities → size. Top {} per language._\n\n",
            report.generated_at.format("%Y-%m-%dT%H:%M:%SZ"),
            report.top_n
        ));
        output.push_str(
            "**Note:** Image sizes are based on Linux amd64 platform as reported by `docker images` on GitHub runners. Actual sizes may vary significantly on other platforms (macOS, Windows, etc.).\n\n",
        );
    }

    /// Renders the scanned-sources inventory from the repository config
    fn render_scanned_sources(&self, output: &mut String, groups: &[ScannedGroupView]) {
        output.push_str("## Scanned Repositories and Images\n\n");

        let total_images: usize = groups.iter().map(|group| group.images.len()).sum();
        output.push_str(&format!(
            "This report includes analysis from **{} configured sources** across {} groups (see [repositories.json](../config/repositories.json)):\n\n",
            total_images,
            groups.len()
        ));

        for group in groups {
            if !group.description.is_empty() {
                output.push_str(&format!("**{}:**\n\n", group.description));
            }

            for image in &group.images {
                output.push_str(&format!("- `{image}`\n"));
            }

            output.push('\n');
        }
    }

    /// Renders one language heading and its ranking table
    fn render_language_section(&self, output: &mut String, section: &LanguageRankingView) {
        output.push_str(&format!("## {}\n\n", title_case(&section.language)));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for (idx, image) in section.images.iter().enumerate() {
            self.render_ranking_row(output, idx + 1, image);
        }

        output.push('\n');
    }

    /// Renders a single ranking row
    ///
    /// Missing versions and unpinnable references render as "-"; the image
    /// name, digest, and pinned reference are kept copy-friendly in code
    /// spans.
    fn render_ranking_row(&self, output: &mut String, rank: usize, image: &RecommendedImage) {
        let version = if image.version.is_empty() {
            "-"
        } else {
            &image.version
        };

        let mut pinned = format_pinned_reference(&image.name, &image.digest);
        if pinned.is_empty() {
            pinned = "-".to_string();
        }

        output.push_str(&format!(
            "| {} | `{}` | {} | {} | {} | {} | {} | `{}` | `{}` |\n",
            rank,
            image.name,
            version,
            image.critical_count,
            image.high_count,
            image.total_count,
            human_size(image.size_bytes),
            format_digest(&image.digest),
            pinned
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ReportModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);

        if !report.groups.is_empty() {
            self.render_scanned_sources(&mut output, &report.groups);
        }

        for section in &report.languages {
            if section.images.is_empty() {
                continue;
            }

            self.render_language_section(&mut output, section);
        }

        Ok(output)
    }
}
