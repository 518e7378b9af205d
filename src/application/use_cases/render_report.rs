use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::application::dto::ReportRequest;
use crate::application::read_models::{LanguageRankingView, ReportModel, ScannedGroupView};
use crate::ports::outbound::{ProgressReporter, RecordStore, ReportFormatter, ReportWriter};
use crate::recommendation::domain::ImageRecord;
use crate::recommendation::services::ranking;
use crate::shared::Result;

/// RenderReportUseCase - Use case for generating the recommendation reports
///
/// Loads every stored scan record, ranks the images per detected language,
/// and writes the markdown report plus a machine-readable JSON sibling next
/// to it. An empty store produces no files at all.
///
/// # Type Parameters
/// * `ST` - RecordStore implementation
/// * `MF` - ReportFormatter implementation for the markdown report
/// * `JF` - ReportFormatter implementation for the JSON report
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<ST, MF, JF, W, PR> {
    store: ST,
    markdown_formatter: MF,
    json_formatter: JF,
    writer: W,
    progress_reporter: PR,
}

impl<ST, MF, JF, W, PR> RenderReportUseCase<ST, MF, JF, W, PR>
where
    ST: RecordStore,
    MF: ReportFormatter,
    JF: ReportFormatter,
    W: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new RenderReportUseCase with injected dependencies
    pub fn new(
        store: ST,
        markdown_formatter: MF,
        json_formatter: JF,
        writer: W,
        progress_reporter: PR,
    ) -> Self {
        Self {
            store,
            markdown_formatter,
            json_formatter,
            writer,
            progress_reporter,
        }
    }

    /// Executes report generation
    ///
    /// # Arguments
    /// * `request` - Output path, ranking depth, and the repository configuration
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or a report cannot be
    /// rendered or written.
    pub fn execute(&self, request: ReportRequest) -> Result<()> {
        // Step 1: Load everything scanned so far
        let records = self.store.load_all()?;

        let languages = ranking::distinct_languages(&records);
        if languages.is_empty() {
            warn!("no languages in the store, reports not generated");
            self.progress_reporter
                .report_error("⚠️  No scanned images in the store; run a scan first.");
            return Ok(());
        }

        // Step 2: Assemble the read model both formats share
        let model = self.build_model(&records, languages, &request);

        // Step 3: Render and write the markdown report
        let markdown = self.markdown_formatter.format(&model)?;
        self.writer.write(&request.output_path, &markdown)?;
        info!(path = %request.output_path.display(), "wrote markdown report");
        self.progress_reporter.report(&format!(
            "📊 Wrote daily recommendations to {}",
            request.output_path.display()
        ));

        // Step 4: Render and write the JSON report next to it
        let json_path = json_sibling_path(&request.output_path);
        let json = self.json_formatter.format(&model)?;
        self.writer.write(&json_path, &json)?;
        info!(path = %json_path.display(), "wrote json report");
        self.progress_reporter.report(&format!(
            "📊 Wrote machine-readable report to {}",
            json_path.display()
        ));

        Ok(())
    }

    /// Projects stored records into the shared read model: the configured
    /// source groups plus one ranked section per detected language.
    ///
    /// # Arguments
    /// * `languages` - Distinct languages across the records, already sorted
    fn build_model(
        &self,
        records: &[ImageRecord],
        languages: Vec<String>,
        request: &ReportRequest,
    ) -> ReportModel {
        let groups = request
            .config
            .repositories
            .iter()
            .map(|group| ScannedGroupView {
                description: group.description.clone(),
                images: group.images.clone(),
            })
            .collect();

        let sections = languages
            .into_iter()
            .map(|language| {
                let images = ranking::top_n(records, &language, request.top_n);
                LanguageRankingView { language, images }
            })
            .collect();

        ReportModel {
            generated_at: Utc::now(),
            top_n: request.top_n,
            groups,
            languages: sections,
        }
    }
}

/// Derives the JSON output path from the markdown one: `.md` is swapped for
/// `.json`, any other name just gets `.json` appended.
fn json_sibling_path(markdown_path: &Path) -> PathBuf {
    let display = markdown_path.to_string_lossy();
    let base = display.strip_suffix(".md").unwrap_or(&display);
    PathBuf::from(format!("{base}.json"))
}
