use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::application::dto::{ScanRequest, ScanSummary};
use crate::ports::outbound::{
    ArtifactSource, ImageRuntime, InspectMetadata, ProgressReporter, RecordStore, TagProvider,
    VulnerabilityReport, VulnerabilitySource,
};
use crate::recommendation::domain::{ImageRecord, LanguageRecord};
use crate::recommendation::services::reconciler::reconcile;
use crate::recommendation::services::reference::{
    build_reference, partition_image_entries, split_reference,
};
use crate::recommendation::services::tag_selector::{limit_tags, select_tags};
use crate::recommendation::services::{probe, CompositionClassifier};
use crate::shared::error::ScanError;
use crate::shared::Result;

/// What happened to one scheduled image.
enum ScanOutcome {
    Scanned,
    Skipped,
}

/// ScanImagesUseCase - Core use case for the scan pipeline
///
/// This use case walks every configured repository and single image, analyzes
/// each image with the injected runtime and scanner adapters, and upserts one
/// record per tag-qualified image name into the store. Individual image
/// failures are tallied, not fatal, so one broken tag never aborts a run.
///
/// # Type Parameters
/// * `TP` - TagProvider implementation
/// * `RT` - ImageRuntime implementation
/// * `SRC` - ArtifactSource implementation
/// * `VS` - VulnerabilitySource implementation
/// * `ST` - RecordStore implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanImagesUseCase<TP, RT, SRC, VS, ST, PR> {
    tag_provider: TP,
    runtime: RT,
    artifact_source: SRC,
    vulnerability_source: VS,
    store: ST,
    progress_reporter: PR,
    classifier: CompositionClassifier,
}

impl<TP, RT, SRC, VS, ST, PR> ScanImagesUseCase<TP, RT, SRC, VS, ST, PR>
where
    TP: TagProvider,
    RT: ImageRuntime,
    SRC: ArtifactSource,
    VS: VulnerabilitySource,
    ST: RecordStore,
    PR: ProgressReporter,
{
    /// Creates a new ScanImagesUseCase with injected dependencies
    pub fn new(
        tag_provider: TP,
        runtime: RT,
        artifact_source: SRC,
        vulnerability_source: VS,
        store: ST,
        progress_reporter: PR,
    ) -> Self {
        Self {
            tag_provider,
            runtime,
            artifact_source,
            vulnerability_source,
            store,
            progress_reporter,
            classifier: CompositionClassifier::new(),
        }
    }

    /// Executes the scan pipeline
    ///
    /// # Arguments
    /// * `request` - Scan request carrying the repository configuration and options
    ///
    /// # Returns
    /// A tally of scanned, skipped, and failed images
    pub fn execute(&self, request: ScanRequest) -> Result<ScanSummary> {
        // Step 1: Partition configured entries into repositories and single images
        let (repositories, single_images) = partition_image_entries(&request.config.all_images());
        let max_tags = request.config.resolve_max_tags(request.max_tags);

        info!(
            repositories = repositories.len(),
            single_images = single_images.len(),
            "discovered scan targets"
        );
        self.progress_reporter.report(&format!(
            "📦 Found {} repositories and {} single images to scan",
            repositories.len(),
            single_images.len()
        ));

        let mut summary = ScanSummary::default();

        // Step 2: Expand each repository into its scannable tags and scan them
        for repository in &repositories {
            if let Err(e) = self.scan_repository(repository, &request, max_tags, &mut summary) {
                summary.failed += 1;
                error!(repository = %repository, error = %e, "repository scan failed");
                self.progress_reporter
                    .report_error(&format!("⚠️  Failed to scan repository {repository}: {e:#}"));
            }
        }

        // Step 3: Scan fully tagged single images as given
        let total = single_images.len();
        for (index, image_name) in single_images.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(image_name));
            self.scan_one(image_name, &request, &mut summary);
        }

        // Step 4: Summarize the run
        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} scanned, {} skipped, {} failed",
            summary.scanned, summary.skipped, summary.failed
        ));

        Ok(summary)
    }

    /// Lists, filters, and scans the tags of one repository
    ///
    /// # Arguments
    /// * `repository` - Repository path, e.g. `azurelinux/base/python`
    /// * `max_tags` - Resolved per-repository tag limit (zero means all)
    ///
    /// # Errors
    /// Returns an error if the tag listing fails. Failures of individual tag
    /// scans are tallied into `summary` instead.
    fn scan_repository(
        &self,
        repository: &str,
        request: &ScanRequest,
        max_tags: i32,
        summary: &mut ScanSummary,
    ) -> Result<()> {
        info!(repository = %repository, "scanning repository");
        self.progress_reporter
            .report(&format!("🔍 Scanning repository: {repository}"));

        let raw_tags = self
            .tag_provider
            .list_tags(&request.config.defaults.registry, repository)?;
        let found = raw_tags.len();
        let selected = select_tags(&raw_tags, &request.config.tag_filter);
        let after_filter = selected.len();
        let tags = limit_tags(selected, max_tags);

        info!(
            repository = %repository,
            found,
            after_filter,
            to_scan = tags.len(),
            "expanded repository tags"
        );
        self.progress_reporter.report(&format!(
            "   - {found} tags found, {after_filter} after filtering, {} to scan",
            tags.len()
        ));

        let total = tags.len();
        for (index, tag) in tags.iter().enumerate() {
            let image_name = build_reference(&request.config.defaults.registry, repository, tag);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&image_name));
            self.scan_one(&image_name, request, summary);
        }

        Ok(())
    }

    /// Scans one image and folds the outcome into the running summary.
    fn scan_one(&self, image_name: &str, request: &ScanRequest, summary: &mut ScanSummary) {
        match self.scan_single_image(image_name, request) {
            Ok(ScanOutcome::Scanned) => summary.scanned += 1,
            Ok(ScanOutcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                summary.failed += 1;
                error!(image = %image_name, error = %e, "image scan failed");
                self.progress_reporter
                    .report_error(&format!("⚠️  Failed to scan {image_name}: {e:#}"));
            }
        }
    }

    /// Scans one tag-qualified image and stores the resulting record
    ///
    /// # Arguments
    /// * `image_name` - Full pullable reference, e.g. `mcr.microsoft.com/azurelinux/base/python:3.12`
    ///
    /// # Returns
    /// Whether the image was analyzed or skipped as already stored
    ///
    /// # Errors
    /// Returns an error if the pull, the store lookup, or the final upsert
    /// fails. Analysis-stage tool failures degrade to a partial record instead.
    fn scan_single_image(&self, image_name: &str, request: &ScanRequest) -> Result<ScanOutcome> {
        if !request.update_existing && self.store.contains(image_name)? {
            info!(image = %image_name, "skipping existing image");
            return Ok(ScanOutcome::Skipped);
        }

        let record = self.analyze(image_name, request.cleanup)?;
        self.store.upsert(&record)?;
        info!(image = %image_name, "successfully scanned and stored");

        Ok(ScanOutcome::Scanned)
    }

    /// Analyzes one image end to end: pull, inspect, inventory, scan,
    /// classify, probe, and assemble the stored record.
    ///
    /// # Errors
    /// Returns an error if the pull fails or a tool emits undecodable
    /// output; execution failures of individual tools degrade instead.
    fn analyze(&self, image_name: &str, cleanup: bool) -> Result<ImageRecord> {
        info!(image = %image_name, "analyzing image");
        let started = Instant::now();

        self.runtime.pull(image_name)?;

        let outcome = self.analyze_pulled(image_name);

        // The image is on disk either way; cleanup runs on the failure path too.
        if cleanup {
            if let Err(e) = self.runtime.remove(image_name) {
                warn!(image = %image_name, error = %e, "failed to remove image after analysis");
            }
        }

        let record = outcome?;
        info!(image = %image_name, elapsed = ?started.elapsed(), "analysis complete");
        Ok(record)
    }

    /// Collects everything knowable about an already pulled image.
    ///
    /// A tool that cannot be executed degrades to an empty result with a
    /// warning, so one broken tool does not lose the rest of the analysis.
    /// A tool that runs but emits undecodable output fails the image.
    fn analyze_pulled(&self, image_name: &str) -> Result<ImageRecord> {
        let inspect = match self.runtime.inspect(image_name) {
            Ok(metadata) => metadata,
            Err(e) if is_malformed_tool_output(&e) => return Err(e),
            Err(e) => {
                warn!(image = %image_name, error = %e, "inspect failed, continuing without metadata");
                InspectMetadata::default()
            }
        };

        let artifacts = match self.artifact_source.collect_artifacts(image_name) {
            Ok(artifacts) => artifacts,
            Err(e) if is_malformed_tool_output(&e) => return Err(e),
            Err(e) => {
                warn!(image = %image_name, error = %e, "artifact inventory failed, continuing with none");
                Vec::new()
            }
        };

        let report = match self.vulnerability_source.scan_image(image_name) {
            Ok(report) => report,
            Err(e) if is_malformed_tool_output(&e) => return Err(e),
            Err(e) => {
                warn!(image = %image_name, error = %e, "vulnerability scan failed, continuing without findings");
                VulnerabilityReport::default()
            }
        };

        let mut composition = self.classifier.classify(&artifacts);

        // The name-based dotnet fallback must run before probing so that a
        // synthesized record gets its runtime version verified too.
        let languages = reconcile(
            std::mem::take(&mut composition.languages),
            &HashMap::new(),
            image_name,
        );
        let probed = self.probe_runtime_versions(image_name, &languages);
        composition.languages = reconcile(languages, &probed, image_name);

        // The inspect size covers all platforms of a manifest list; the
        // local on-disk size is the honest number when available.
        let size_bytes = match self.runtime.image_size(image_name) {
            Ok(size) if size > 0 => size,
            _ => inspect.size_bytes,
        };

        let reference = split_reference(image_name);

        Ok(ImageRecord {
            name: image_name.to_string(),
            registry: reference.registry,
            repository: reference.repository,
            tag: reference.tag,
            digest: inspect.digest,
            size_bytes,
            layers: inspect.layers,
            created: inspect.created,
            scanned_at: Utc::now(),
            composition,
            vulnerabilities: report.counts,
            findings: report.findings,
            secrets_found: report.secrets_found,
            config_issues: report.config_issues,
            license_issues: report.license_issues,
        })
    }

    /// Probes the runtime version for every detected language, one container
    /// run per distinct language.
    ///
    /// # Arguments
    /// * `languages` - Detected plus synthesized language records
    ///
    /// # Returns
    /// Map of lowercased language name to the probed version string. Languages
    /// without a probe mapping, failed probes, and unparseable output are
    /// simply absent.
    fn probe_runtime_versions(
        &self,
        image_name: &str,
        languages: &[LanguageRecord],
    ) -> HashMap<String, String> {
        let mut attempted = HashSet::new();
        let mut versions = HashMap::new();

        for record in languages {
            let language = record.language.to_lowercase();
            if !attempted.insert(language.clone()) {
                continue;
            }

            let Some(command) = probe::command_for(&language) else {
                debug!(image = %image_name, language = %language, "no probe command for language");
                continue;
            };

            let output = match self.runtime.exec_in_image(image_name, command) {
                Ok(output) => output,
                Err(e) => {
                    debug!(image = %image_name, language = %language, error = %e, "runtime probe failed");
                    continue;
                }
            };

            match probe::extract_version(&language, &output) {
                Some(version) => {
                    debug!(image = %image_name, language = %language, version = %version, "verified runtime version");
                    versions.insert(language, version);
                }
                None => {
                    debug!(image = %image_name, language = %language, "probe output carried no version");
                }
            }
        }

        versions
    }
}

/// True when the error chain bottoms out in undecodable tool output, which
/// fails the image instead of degrading to an empty result.
fn is_malformed_tool_output(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ScanError>(),
        Some(ScanError::MalformedToolOutput { .. })
    )
}

#[cfg(test)]
mod tests;
