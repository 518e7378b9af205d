use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::{ConfigDefaults, RepositoryConfig, RepositoryGroup};
use crate::recommendation::domain::{Artifact, Composition, VulnerabilityCounts};
use crate::recommendation::services::TagFilter;

// Mock implementations for testing

#[derive(Clone, Default)]
struct MockTagProvider {
    tags: Vec<String>,
    fail: bool,
}

impl TagProvider for MockTagProvider {
    fn list_tags(&self, _registry: &str, _repository: &str) -> Result<Vec<String>> {
        if self.fail {
            anyhow::bail!("registry unreachable");
        }
        Ok(self.tags.clone())
    }
}

#[derive(Clone, Default)]
struct MockRuntime {
    metadata: Option<InspectMetadata>,
    disk_size: Option<i64>,
    exec_output: std::collections::HashMap<String, String>,
    fail_pull_for: Option<String>,
    removed: Rc<RefCell<Vec<String>>>,
}

impl ImageRuntime for MockRuntime {
    fn pull(&self, image: &str) -> Result<()> {
        if self.fail_pull_for.as_deref() == Some(image) {
            anyhow::bail!("pull failed for {image}");
        }
        Ok(())
    }

    fn inspect(&self, _image: &str) -> Result<InspectMetadata> {
        self.metadata
            .clone()
            .ok_or_else(|| anyhow::anyhow!("inspect failed"))
    }

    fn image_size(&self, _image: &str) -> Result<i64> {
        self.disk_size
            .ok_or_else(|| anyhow::anyhow!("size unavailable"))
    }

    fn exec_in_image(&self, _image: &str, command: &[&str]) -> Result<String> {
        self.exec_output
            .get(command[0])
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("exec failed"))
    }

    fn remove(&self, image: &str) -> Result<()> {
        self.removed.borrow_mut().push(image.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct MockArtifactSource {
    artifacts: Vec<Artifact>,
    fail: bool,
    malformed: bool,
}

impl ArtifactSource for MockArtifactSource {
    fn collect_artifacts(&self, image: &str) -> Result<Vec<Artifact>> {
        if self.malformed {
            return Err(ScanError::MalformedToolOutput {
                tool: "syft".to_string(),
                image: image.to_string(),
                details: "expected value at line 1 column 1".to_string(),
            }
            .into());
        }
        if self.fail {
            anyhow::bail!("sbom tool crashed");
        }
        Ok(self.artifacts.clone())
    }
}

#[derive(Clone, Default)]
struct MockVulnerabilitySource {
    report: VulnerabilityReport,
    fail: bool,
    malformed: bool,
}

impl VulnerabilitySource for MockVulnerabilitySource {
    fn scan_image(&self, image: &str) -> Result<VulnerabilityReport> {
        if self.malformed {
            return Err(ScanError::MalformedToolOutput {
                tool: "trivy".to_string(),
                image: image.to_string(),
                details: "expected value at line 1 column 1".to_string(),
            }
            .into());
        }
        if self.fail {
            anyhow::bail!("scanner crashed");
        }
        Ok(self.report.clone())
    }
}

#[derive(Clone, Default)]
struct MockStore {
    records: Rc<RefCell<Vec<ImageRecord>>>,
}

impl RecordStore for MockStore {
    fn load_all(&self) -> Result<Vec<ImageRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.records.borrow().iter().any(|r| r.name == name))
    }

    fn upsert(&self, record: &ImageRecord) -> Result<()> {
        let mut records = self.records.borrow_mut();
        if let Some(existing) = records.iter_mut().find(|r| r.name == record.name) {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.records.borrow_mut().clear();
        Ok(())
    }
}

struct MockProgressReporter;

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

// ===== Fixtures =====

fn config_with_images(images: &[&str]) -> RepositoryConfig {
    RepositoryConfig {
        defaults: ConfigDefaults {
            registry: "mcr.microsoft.com".to_string(),
            max_tags: 0,
        },
        tag_filter: TagFilter::default(),
        repositories: vec![RepositoryGroup {
            description: "Test images".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }],
    }
}

fn inspect_metadata() -> InspectMetadata {
    InspectMetadata {
        size_bytes: 52_428_800,
        created: "2026-08-01T12:00:00Z".to_string(),
        layers: 3,
        digest: "sha256:abc123".to_string(),
    }
}

fn python_runtime() -> MockRuntime {
    let mut exec_output = std::collections::HashMap::new();
    exec_output.insert("python3".to_string(), "Python 3.12.11\n".to_string());
    MockRuntime {
        metadata: Some(inspect_metadata()),
        disk_size: Some(52_428_800),
        exec_output,
        ..Default::default()
    }
}

fn python_artifacts() -> MockArtifactSource {
    MockArtifactSource {
        artifacts: vec![
            Artifact::new("python3", "3.12.9-8.azl3", "rpm", ""),
            Artifact::new("openssl", "3.1.4", "rpm", ""),
        ],
        ..Default::default()
    }
}

#[allow(clippy::type_complexity)]
fn use_case(
    tag_provider: MockTagProvider,
    runtime: MockRuntime,
    artifact_source: MockArtifactSource,
    vulnerability_source: MockVulnerabilitySource,
    store: MockStore,
) -> ScanImagesUseCase<
    MockTagProvider,
    MockRuntime,
    MockArtifactSource,
    MockVulnerabilitySource,
    MockStore,
    MockProgressReporter,
> {
    ScanImagesUseCase::new(
        tag_provider,
        runtime,
        artifact_source,
        vulnerability_source,
        store,
        MockProgressReporter,
    )
}

// ===== Repository expansion =====

#[test]
fn test_execute_expands_repository_into_filtered_tags() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider {
            tags: ["3.12", "latest", "3.11-beta1", "3.13"]
                .map(String::from)
                .to_vec(),
            fail: false,
        },
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(config_with_images(&["azurelinux/base/python"]), 5, false, false);
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.scanned, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    let records = store.records.borrow();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "mcr.microsoft.com/azurelinux/base/python:3.13",
            "mcr.microsoft.com/azurelinux/base/python:3.12",
        ]
    );
    assert_eq!(records[0].registry, "mcr.microsoft.com");
    assert_eq!(records[0].repository, "azurelinux/base/python");
    assert_eq!(records[0].tag, "3.13");
}

#[test]
fn test_execute_honors_max_tags_limit() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider {
            tags: ["3.11", "3.12", "3.13"].map(String::from).to_vec(),
            fail: false,
        },
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(config_with_images(&["azurelinux/base/python"]), 1, false, false);
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.scanned, 1);
    assert_eq!(
        store.records.borrow()[0].name,
        "mcr.microsoft.com/azurelinux/base/python:3.13"
    );
}

#[test]
fn test_execute_counts_tag_listing_failure_without_aborting() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider {
            tags: vec![],
            fail: true,
        },
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(config_with_images(&["azurelinux/base/python"]), 5, false, false);
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.scanned, 0);
    assert!(store.records.borrow().is_empty());
}

// ===== Single images and skip logic =====

#[test]
fn test_execute_scans_tagged_single_image_as_given() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["docker.io/library/python:3.12-slim"]),
        5,
        false,
        false,
    );
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.scanned, 1);
    let records = store.records.borrow();
    assert_eq!(records[0].name, "docker.io/library/python:3.12-slim");
    assert_eq!(records[0].registry, "docker.io");
    assert_eq!(records[0].repository, "library/python");
    assert_eq!(records[0].tag, "3.12-slim");
}

#[test]
fn test_execute_skips_already_stored_image() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let image = "docker.io/library/python:3.12-slim";
    let request = ScanRequest::new(config_with_images(&[image]), 5, false, false);
    use_case.execute(request.clone()).unwrap();

    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.scanned, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(store.records.borrow().len(), 1);
}

#[test]
fn test_execute_rescans_stored_image_with_update_flag() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let image = "docker.io/library/python:3.12-slim";
    use_case
        .execute(ScanRequest::new(config_with_images(&[image]), 5, false, false))
        .unwrap();

    let summary = use_case
        .execute(ScanRequest::new(config_with_images(&[image]), 5, false, true))
        .unwrap();

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(store.records.borrow().len(), 1);
}

#[test]
fn test_execute_tallies_pull_failure_and_continues() {
    let store = MockStore::default();
    let mut runtime = python_runtime();
    runtime.fail_pull_for = Some("docker.io/library/python:3.11-slim".to_string());

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&[
            "docker.io/library/python:3.11-slim",
            "docker.io/library/python:3.12-slim",
        ]),
        5,
        false,
        false,
    );
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.scanned, 1);
    assert_eq!(
        store.records.borrow()[0].name,
        "docker.io/library/python:3.12-slim"
    );
}

// ===== Analysis content =====

#[test]
fn test_analysis_classifies_probes_and_stores_languages() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        python_runtime(),
        python_artifacts(),
        MockVulnerabilitySource {
            report: VulnerabilityReport {
                counts: VulnerabilityCounts {
                    total: 4,
                    critical: 1,
                    high: 2,
                    ..Default::default()
                },
                findings: vec![],
                secrets_found: 1,
                config_issues: 2,
                license_issues: 0,
            },
            ..Default::default()
        },
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    let records = store.records.borrow();
    let record = &records[0];

    assert_eq!(record.composition.languages.len(), 1);
    let python = &record.composition.languages[0];
    assert_eq!(python.language, "python");
    assert_eq!(python.version, "3.12.11");
    assert_eq!(python.major_minor, "3.12");
    assert!(python.verified);

    assert_eq!(record.vulnerabilities.critical, 1);
    assert_eq!(record.vulnerabilities.high, 2);
    assert_eq!(record.secrets_found, 1);
    assert_eq!(record.config_issues, 2);
    assert_eq!(record.digest, "sha256:abc123");
    assert_eq!(record.layers, 3);
}

#[test]
fn test_analysis_survives_every_tool_failing() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        MockRuntime::default(),
        MockArtifactSource {
            fail: true,
            ..Default::default()
        },
        MockVulnerabilitySource {
            fail: true,
            ..Default::default()
        },
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/distroless/base:3.0"]),
        5,
        false,
        false,
    );
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.scanned, 1);
    let records = store.records.borrow();
    let record = &records[0];
    assert_eq!(record.name, "mcr.microsoft.com/azurelinux/distroless/base:3.0");
    assert_eq!(record.composition, Composition::default());
    assert_eq!(record.vulnerabilities.total, 0);
    assert_eq!(record.size_bytes, 0);
    assert_eq!(record.digest, "");
}

#[test]
fn test_malformed_sbom_output_fails_the_image() {
    let store = MockStore::default();
    let use_case = use_case(
        MockTagProvider::default(),
        python_runtime(),
        MockArtifactSource {
            malformed: true,
            ..Default::default()
        },
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.scanned, 0);
    assert!(store.records.borrow().is_empty());
}

#[test]
fn test_malformed_scanner_output_fails_the_image_after_cleanup() {
    let store = MockStore::default();
    let runtime = python_runtime();
    let removed = runtime.removed.clone();

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource {
            malformed: true,
            ..Default::default()
        },
        store.clone(),
    );

    let image = "mcr.microsoft.com/azurelinux/base/python:3.12";
    let request = ScanRequest::new(config_with_images(&[image]), 5, true, false);
    let summary = use_case.execute(request).unwrap();

    assert_eq!(summary.failed, 1);
    assert!(store.records.borrow().is_empty());
    assert_eq!(*removed.borrow(), vec![image.to_string()]);
}

#[test]
fn test_dotnet_fallback_record_gets_probed_and_verified() {
    let store = MockStore::default();
    let mut exec_output = std::collections::HashMap::new();
    exec_output.insert(
        "dotnet".to_string(),
        "Host:\n  Version:      8.0.24\n  Architecture: x64\n".to_string(),
    );
    let runtime = MockRuntime {
        metadata: Some(inspect_metadata()),
        disk_size: Some(120_000_000),
        exec_output,
        ..Default::default()
    };

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        MockArtifactSource::default(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/dotnet/aspnet:8.0"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    let records = store.records.borrow();
    let languages = &records[0].composition.languages;
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].language, "dotnet");
    assert_eq!(languages[0].version, "8.0.24");
    assert_eq!(languages[0].major_minor, "8.0");
    assert_eq!(languages[0].package_name, "Microsoft .NET Runtime");
    assert!(languages[0].verified);
}

#[test]
fn test_failed_probe_leaves_language_unverified() {
    let store = MockStore::default();
    let runtime = MockRuntime {
        metadata: Some(inspect_metadata()),
        disk_size: Some(50_000_000),
        exec_output: std::collections::HashMap::new(),
        ..Default::default()
    };

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    let records = store.records.borrow();
    let python = &records[0].composition.languages[0];
    assert_eq!(python.version, "3.12.9");
    assert!(!python.verified);
}

#[test]
fn test_disk_size_overrides_inspect_size_when_available() {
    let store = MockStore::default();
    let mut runtime = python_runtime();
    runtime.disk_size = Some(99_000_000);

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    assert_eq!(store.records.borrow()[0].size_bytes, 99_000_000);
}

#[test]
fn test_inspect_size_is_kept_when_disk_size_unavailable() {
    let store = MockStore::default();
    let mut runtime = python_runtime();
    runtime.disk_size = None;

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store.clone(),
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    assert_eq!(store.records.borrow()[0].size_bytes, 52_428_800);
}

// ===== Cleanup =====

#[test]
fn test_cleanup_removes_image_after_analysis() {
    let store = MockStore::default();
    let runtime = python_runtime();
    let removed = runtime.removed.clone();

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store,
    );

    let image = "mcr.microsoft.com/azurelinux/base/python:3.12";
    let request = ScanRequest::new(config_with_images(&[image]), 5, true, false);
    use_case.execute(request).unwrap();

    assert_eq!(*removed.borrow(), vec![image.to_string()]);
}

#[test]
fn test_no_cleanup_keeps_image() {
    let store = MockStore::default();
    let runtime = python_runtime();
    let removed = runtime.removed.clone();

    let use_case = use_case(
        MockTagProvider::default(),
        runtime,
        python_artifacts(),
        MockVulnerabilitySource::default(),
        store,
    );

    let request = ScanRequest::new(
        config_with_images(&["mcr.microsoft.com/azurelinux/base/python:3.12"]),
        5,
        false,
        false,
    );
    use_case.execute(request).unwrap();

    assert!(removed.borrow().is_empty());
}
