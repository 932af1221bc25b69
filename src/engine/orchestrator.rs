// ==========================================
// Pantry Labels - run orchestrator
// ==========================================
// Flow: validate paths -> assign roles, parsing recognized inputs -> inventory index
//   -> delivery category -> each pickup window -> summary report
// Per-category failures become statuses; only preconditions abort the run.
// ==========================================

use crate::config::{LabelConfig, PickupWindowConfig};
use crate::domain::{CategoryStatus, FileRole, GuestRecord, ImportWarning, ListKind};
use crate::engine::error::{PipelineError, PipelineResult};
use crate::engine::guest_sorter::GuestSorter;
use crate::importer::{
    classifier_for, ClassifiedGuestList, FileParser, FileProbe, GuestListClassifier,
    InventoryIndex, InventoryIndexBuilder, RawTable, RoleClassifier, UniversalFileParser,
};
use crate::render::{DryRunWriter, LabelSheetRenderer, PdfSheetWriter, SheetWriter};
use crate::report::{GuestReportWriter, SummaryReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

// ==========================================
// RunSummary - what one run produced
// ==========================================
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: String,
    pub statuses: Vec<CategoryStatus>,
    /// Recoverable problems, in the order they were found.
    pub warnings: Vec<String>,
    /// `None` in a dry run.
    pub summary_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn rendered_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_rendered()).count()
    }
}

// Parsed input with its display name.
struct InputFile {
    name: String,
    table: RawTable,
}

#[derive(Default)]
struct RoleAssignment {
    inventory: Option<InputFile>,
    delivery: Option<InputFile>,
    pickup: Option<InputFile>,
}

impl RoleAssignment {
    fn slot(&mut self, role: FileRole) -> &mut Option<InputFile> {
        match role {
            FileRole::Inventory => &mut self.inventory,
            FileRole::Delivery => &mut self.delivery,
            FileRole::Pickup => &mut self.pickup,
        }
    }
}

// ==========================================
// LabelRun
// ==========================================
pub struct LabelRun {
    config: LabelConfig,
    parser: Box<dyn FileParser>,
    role_classifier: Box<dyn RoleClassifier>,
    writer: Box<dyn SheetWriter>,
    renderer: LabelSheetRenderer,
    sorter: GuestSorter,
    report_writer: GuestReportWriter,
    dry_run: bool,
}

impl LabelRun {
    /// Run with the production parser, the configured role detection and
    /// the PDF writer.
    pub fn new(config: LabelConfig) -> Self {
        let role_classifier = classifier_for(config.role_detection, &config.filename_markers);
        Self {
            config,
            parser: Box::new(UniversalFileParser),
            role_classifier,
            writer: Box::new(PdfSheetWriter::default()),
            renderer: LabelSheetRenderer::default(),
            sorter: GuestSorter::new(),
            report_writer: GuestReportWriter::new(),
            dry_run: false,
        }
    }

    pub fn with_writer(mut self, writer: Box<dyn SheetWriter>) -> Self {
        self.writer = writer;
        self
    }

    /// Dry run: full pipeline, nothing written.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        if enabled {
            self.writer = Box::new(DryRunWriter);
        }
        self
    }

    /// Runs the whole pipeline over `inputs`, writing into `output_dir`.
    ///
    /// # Returns
    /// One status per category, in run order, plus collected warnings
    ///
    /// # Errors
    /// - OutputDirMissing / InputNotFound for bad paths
    /// - InputUnreadable when a recognized file cannot be parsed
    /// - NoGuestLists / NoInventory / EmptyInventory
    /// - Import when a required column is missing
    /// - SummaryWrite when the summary file cannot be written
    pub fn process_files(&self, inputs: &[PathBuf], output_dir: &Path) -> PipelineResult<RunSummary> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("label_run", run_id = %run_id, dry_run = self.dry_run);
        let _enter = span.enter();

        info!(
            inputs = inputs.len(),
            output_dir = %output_dir.display(),
            role_detection = self.role_classifier.name(),
            "label run started"
        );

        // ==========================================
        // Step 1: paths
        // ==========================================
        if !output_dir.is_dir() {
            return Err(PipelineError::OutputDirMissing(output_dir.to_path_buf()));
        }
        if inputs.is_empty() {
            return Err(PipelineError::NoInputs);
        }
        for input in inputs {
            if !input.is_file() {
                return Err(PipelineError::InputNotFound(input.clone()));
            }
        }

        let mut warnings = Vec::new();

        // ==========================================
        // Step 2: parse + roles
        // ==========================================
        let roles = self.assign_roles(inputs, &mut warnings)?;

        if roles.delivery.is_none() && roles.pickup.is_none() {
            return Err(PipelineError::NoGuestLists);
        }
        let inventory = roles.inventory.as_ref().ok_or_else(|| {
            PipelineError::NoInventory(self.config.filename_markers.inventory.clone())
        })?;

        // ==========================================
        // Step 3: inventory index
        // ==========================================
        let import = InventoryIndexBuilder::new().build(&inventory.table, &inventory.name)?;
        collect_warnings(&mut warnings, &inventory.name, &import.warnings);
        if import.index.is_empty() {
            return Err(PipelineError::EmptyInventory(inventory.name.clone()));
        }
        let index = import.index;

        // ==========================================
        // Step 4: categories
        // ==========================================
        let classifier = GuestListClassifier::new(self.config.classification_sample_rows);
        let mut statuses = Vec::new();

        if let Some(delivery) = &roles.delivery {
            let list = self.classify(&classifier, delivery, &index, &mut warnings)?;
            let guests = self
                .sorter
                .sort(list.within(None), self.config.delivery_sort);
            let pdf_name = self.config.delivery_pdf_name();
            statuses.push(self.process_category(&guests, list.kind, &pdf_name, output_dir, &mut warnings));
        }

        if let Some(pickup) = &roles.pickup {
            let list = self.classify(&classifier, pickup, &index, &mut warnings)?;
            if list.kind == ListKind::Delivery {
                let message = format!(
                    "Warning: {} has no pickup times; every guest is placed in every window",
                    pickup.name
                );
                warn!(file = %pickup.name, "{}", message);
                warnings.push(message);
            }

            for window_config in &self.config.pickup_windows {
                let status = self.process_window(&list, window_config, output_dir, &mut warnings);
                statuses.push(status);
            }
        }

        // ==========================================
        // Step 5: summary
        // ==========================================
        let summary = SummaryReport::from_statuses(&statuses);
        let summary_path = if self.dry_run {
            None
        } else {
            let path = output_dir.join(&self.config.summary_file_name);
            summary
                .write_to(&path)
                .map_err(|source| PipelineError::SummaryWrite {
                    path: path.clone(),
                    source,
                })?;
            Some(path)
        };

        info!(
            categories = statuses.len(),
            rendered = statuses.iter().filter(|s| s.is_rendered()).count(),
            warnings = warnings.len(),
            "label run finished"
        );

        Ok(RunSummary {
            run_id,
            statuses,
            warnings,
            summary_path,
        })
    }

    fn assign_roles(
        &self,
        inputs: &[PathBuf],
        warnings: &mut Vec<String>,
    ) -> PipelineResult<RoleAssignment> {
        let mut roles = RoleAssignment::default();

        for path in inputs {
            let name = display_name(path);

            let Some((role, table)) = self.identify(path, &name)? else {
                let message = format!("Warning: '{}' does not match any expected file name.", name);
                warn!(file = %name, classifier = self.role_classifier.name(), "unrecognized input file");
                warnings.push(message);
                continue;
            };

            debug!(file = %name, role = %role, rows = table.len(), "input assigned");
            let slot = roles.slot(role);
            if let Some(previous) = slot.replace(InputFile { name: name.clone(), table }) {
                let message = format!(
                    "Warning: both {} and {} look like the {} file; using {}",
                    previous.name, name, role, name
                );
                warn!(file = %name, replaced = %previous.name, role = %role, "duplicate input role");
                warnings.push(message);
            }
        }

        Ok(roles)
    }

    // Role and contents of one input, or None when it is not recognized.
    // Only a recognized file that fails to parse is fatal.
    fn identify(&self, path: &Path, name: &str) -> PipelineResult<Option<(FileRole, RawTable)>> {
        if !self.role_classifier.reads_contents() {
            let Some(role) = self.role_classifier.classify(&FileProbe::path_only(path)) else {
                return Ok(None);
            };
            let table = self
                .parser
                .parse_to_table(path)
                .map_err(|source| PipelineError::unreadable(name, source))?;
            return Ok(Some((role, table)));
        }

        let table = match self.parser.parse_to_table(path) {
            Ok(table) => table,
            Err(err) => {
                debug!(file = name, error = %err, "input not readable as a table");
                return Ok(None);
            }
        };
        Ok(self
            .role_classifier
            .classify(&FileProbe::new(path, &table))
            .map(|role| (role, table)))
    }

    fn classify(
        &self,
        classifier: &GuestListClassifier,
        input: &InputFile,
        index: &InventoryIndex,
        warnings: &mut Vec<String>,
    ) -> PipelineResult<ClassifiedGuestList> {
        let list = classifier.classify(&input.table, index, &input.name)?;
        collect_warnings(warnings, &input.name, &list.warnings);
        Ok(list)
    }

    fn process_window(
        &self,
        list: &ClassifiedGuestList,
        window_config: &PickupWindowConfig,
        output_dir: &Path,
        warnings: &mut Vec<String>,
    ) -> CategoryStatus {
        let pdf_name = self.config.pickup_pdf_name(window_config);
        let Some(window) = window_config.window() else {
            return CategoryStatus::Failed {
                file: pdf_name,
                reason: format!(
                    "invalid pickup window {}-{}",
                    window_config.start_hour, window_config.end_hour
                ),
            };
        };

        let guests = self
            .sorter
            .sort(list.within(Some(window)), self.config.pickup_sort);
        debug!(window = %window, guests = guests.len(), file = %pdf_name, "pickup window selected");
        self.process_category(&guests, list.kind, &pdf_name, output_dir, warnings)
    }

    // One category: document + guest report, or a NoGuests/Failed status.
    fn process_category(
        &self,
        guests: &[GuestRecord],
        kind: ListKind,
        pdf_name: &str,
        output_dir: &Path,
        warnings: &mut Vec<String>,
    ) -> CategoryStatus {
        if guests.is_empty() {
            let status = CategoryStatus::NoGuests {
                file: pdf_name.to_string(),
            };
            warn!(file = pdf_name, "no guests in category");
            return status;
        }

        let path = output_dir.join(pdf_name);
        let status = self
            .renderer
            .render(guests, kind, self.writer.as_ref(), &path, pdf_name);

        if status.is_rendered() && !self.dry_run {
            if let Some(message) = self.report_writer.write_or_warn(guests, pdf_name, output_dir) {
                warnings.push(message);
            }
        }
        status
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn collect_warnings(out: &mut Vec<String>, source: &str, warnings: &[ImportWarning]) {
    out.extend(warnings.iter().map(|w| format!("{} ({})", w, source)));
}

// ==========================================
// Input discovery
// ==========================================

/// Files in `dir` whose extension is one of `extensions` (case-insensitive),
/// sorted by name.
pub fn discover_inputs(dir: &Path, extensions: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
            .unwrap_or(false);
        if matches {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
