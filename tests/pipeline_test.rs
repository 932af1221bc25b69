// ==========================================
// Label run integration tests
// ==========================================
// Full pipeline over CSV exports in a temp directory.
// ==========================================


use pantry_labels::config::{LabelConfig, PickupWindowConfig, RoleDetection};
use pantry_labels::domain::{CategoryStatus, SortOrder};
use pantry_labels::engine::{LabelRun, PipelineError};
use pantry_labels::importer::ImportError;
use std::fs;
use test_helpers::*;

fn recording_run(config: LabelConfig) -> (LabelRun, RecordingWriter) {
    let writer = RecordingWriter::new();
    let run = LabelRun::new(config).with_writer(Box::new(writer.clone()));
    (run, writer)
}

fn status_lines(statuses: &[CategoryStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// End to end
// ==========================================

#[test]
fn test_single_delivery_guest_gets_four_labels() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        write_delivery(dir.path(), &[("Jane", "Smith", "North - Loop 2")]),
    ];

    let (run, writer) = recording_run(LabelConfig::default());
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert_eq!(
        status_lines(&summary.statuses),
        vec!["tags-for-Delivery.pdf has 1 guests and 4 labels."]
    );

    let sheet = writer.sheet("tags-for-Delivery.pdf").unwrap();
    assert_eq!(sheet.pages.len(), 4);
    for (i, page) in sheet.pages.iter().enumerate() {
        let caption = format!("{} of 4", i + 1);
        assert_eq!(page.texts(), vec!["North: Loop 2", "Jane", "Smith", caption.as_str()]);
        assert_eq!(page.rules.len(), 1);
    }

    let report = fs::read_to_string(dir.path().join("tags-for-Delivery.txt")).unwrap();
    assert_eq!(
        report,
        "\ntags-for-Delivery.txt\n  Jane         Smith            Time=North - Loop 2     bags=30\n"
    );

    let summary_text = fs::read_to_string(dir.path().join("make_tags_report.txt")).unwrap();
    assert_eq!(summary_text, "tags-for-Delivery.pdf has 1 guests and 4 labels.\n");
    assert!(summary.warnings.is_empty());
}

#[test]
fn test_pdf_files_written_with_default_writer() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30"), ("Doe, John", "45")]),
        write_delivery(dir.path(), &[("Jane", "Smith", "North - Loop 2")]),
        write_pickup(dir.path(), &[("John", "Doe", "1:15 PM")]),
    ];

    let summary = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap();

    for name in ["tags-for-Delivery.pdf", "tags-for-Pickup-Friday-before-3.pdf"] {
        let bytes = fs::read(dir.path().join(name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "{} is not a PDF", name);
    }
    assert!(!dir.path().join("tags-for-Pickup-Saturday.pdf").exists());
    assert_eq!(
        summary.statuses[2].to_string(),
        "tags-for-Pickup-Friday-before-3.pdf has 1 guests and 6 labels."
    );
}

#[test]
fn test_pickup_windows_sorted_and_title_cased() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(
            dir.path(),
            &[("Young, Zed", "5"), ("Adams, Amy", "20"), ("Brown, Bo", "201")],
        ),
        write_pickup(
            dir.path(),
            &[
                ("ZED", "YOUNG", "9:30 AM"),
                ("amy", "adams", "07:00 AM"),
                ("Bo", "Brown", "12:50 PM"),
                ("Late", "Guest", "11:00 PM"),
            ],
        ),
    ];

    let (run, writer) = recording_run(LabelConfig::default());
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert_eq!(
        status_lines(&summary.statuses),
        vec![
            "tags-for-Pickup-Saturday.pdf has 2 guests and 4 labels.",
            "tags-for-Pickup-Friday-before-3.pdf has 1 guests and 16 labels.",
            "Warning: no guests in tags-for-Pickup-Friday-after-3.pdf.",
        ]
    );

    // Adams before Young; names title-cased; no route line on pickup labels
    let saturday = writer.sheet("tags-for-Pickup-Saturday.pdf").unwrap();
    assert_eq!(saturday.pages[0].texts(), vec!["Amy", "Adams", "1 of 3"]);
    assert_eq!(saturday.pages[3].texts(), vec!["Zed", "Young", "1 of 1"]);
    assert!(saturday.pages.iter().all(|p| p.rules.is_empty()));

    let report = fs::read_to_string(dir.path().join("tags-for-Pickup-Saturday.txt")).unwrap();
    let adams = report.find("Adams").unwrap();
    let young = report.find("Young").unwrap();
    assert!(adams < young);

    // 11 PM is outside every default window, and "Guest" is not in the inventory
    assert!(summary.warnings.iter().any(|w| w.contains("late_guest")));
}

#[test]
fn test_unmatched_guest_gets_one_label_and_warning() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        write_delivery(
            dir.path(),
            &[("Jane", "Smith", "North - Loop 2"), ("Bob", "Nobody", "East - 4")],
        ),
    ];

    let (run, writer) = recording_run(LabelConfig::default());
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert_eq!(
        status_lines(&summary.statuses),
        vec!["tags-for-Delivery.pdf has 2 guests and 5 labels."]
    );
    let sheet = writer.sheet("tags-for-Delivery.pdf").unwrap();
    assert_eq!(sheet.pages[4].texts(), vec!["East: 4", "Bob", "Nobody", "1 of 1"]);

    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.warnings[0].contains("bob_nobody not found in inventory"));
    assert!(summary.warnings[0].contains(DELIVERY_FILE));
}

#[test]
fn test_marked_last_name_matches_inventory() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Doe,   John", "45")]),
        write_delivery(dir.path(), &[("john", "DOE*", "South - 1")]),
    ];

    let (run, writer) = recording_run(LabelConfig::default());
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert!(summary.warnings.is_empty());
    let sheet = writer.sheet("tags-for-Delivery.pdf").unwrap();
    assert_eq!(sheet.pages.len(), 6);
    assert_eq!(sheet.pages[5].texts().last().copied(), Some("6 of 6"));
}

// ==========================================
// Unrecognized inputs
// ==========================================

const NOT_UTF8: &[u8] = b"Item,Note\nx,caf\xe9\n";

fn run_with_unreadable_extra(role_detection: RoleDetection) -> pantry_labels::engine::RunSummary {
    let dir = create_test_dir();
    let notes = dir.path().join("notes.csv");
    fs::write(&notes, NOT_UTF8).unwrap();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        notes,
        write_delivery(dir.path(), &[("Jane", "Smith", "North - Loop 2")]),
    ];

    let config = LabelConfig {
        role_detection,
        ..LabelConfig::default()
    };
    let (run, _writer) = recording_run(config);
    run.process_files(&inputs, dir.path()).unwrap()
}

#[test]
fn test_unreadable_extra_file_ignored_by_filename_roles() {
    let summary = run_with_unreadable_extra(RoleDetection::Filename);

    assert_eq!(
        status_lines(&summary.statuses),
        vec!["tags-for-Delivery.pdf has 1 guests and 4 labels."]
    );
    assert_eq!(
        summary.warnings,
        vec!["Warning: 'notes.csv' does not match any expected file name.".to_string()]
    );
}

#[test]
fn test_unreadable_extra_file_ignored_by_header_roles() {
    let summary = run_with_unreadable_extra(RoleDetection::Header);

    assert_eq!(
        status_lines(&summary.statuses),
        vec!["tags-for-Delivery.pdf has 1 guests and 4 labels."]
    );
    assert_eq!(
        summary.warnings,
        vec!["Warning: 'notes.csv' does not match any expected file name.".to_string()]
    );
}

#[test]
fn test_unreadable_recognized_file_is_fatal() {
    let dir = create_test_dir();
    let delivery = dir.path().join(DELIVERY_FILE);
    fs::write(&delivery, NOT_UTF8).unwrap();
    let inputs = vec![write_inventory(dir.path(), &[("Smith, Jane", "30")]), delivery];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap_err();
    match err {
        PipelineError::InputUnreadable { file, .. } => assert_eq!(file, DELIVERY_FILE),
        other => panic!("unexpected error: {other}"),
    }
}

// ==========================================
// Fatal preconditions
// ==========================================

#[test]
fn test_missing_output_dir_is_fatal() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        write_delivery(dir.path(), &[("Jane", "Smith", "North - 1")]),
    ];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, &dir.path().join("missing"))
        .unwrap_err();
    assert!(matches!(err, PipelineError::OutputDirMissing(_)));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        dir.path().join("Delivery_missing.csv"),
    ];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap_err();
    assert!(matches!(err, PipelineError::InputNotFound(_)));
}

#[test]
fn test_no_guest_lists_is_fatal() {
    let dir = create_test_dir();
    let inputs = vec![write_inventory(dir.path(), &[("Smith, Jane", "30")])];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap_err();
    assert!(matches!(err, PipelineError::NoGuestLists));
}

#[test]
fn test_inventory_without_usable_rows_is_fatal() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("NoCommaHere", "3"), (", Empty", "2")]),
        write_delivery(dir.path(), &[("Jane", "Smith", "North - 1")]),
    ];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap_err();
    assert!(matches!(err, PipelineError::EmptyInventory(_)));
    assert!(!dir.path().join("make_tags_report.txt").exists());
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "30")]),
        write_file(dir.path(), DELIVERY_FILE, "First,Route or Pickup Time\nJane,North\n"),
    ];

    let err = LabelRun::new(LabelConfig::default())
        .process_files(&inputs, dir.path())
        .unwrap_err();
    match err {
        PipelineError::Import(ImportError::MissingColumn { file, column }) => {
            assert_eq!(file, DELIVERY_FILE);
            assert_eq!(column, "Last");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ==========================================
// Configuration
// ==========================================

#[test]
fn test_header_role_detection_ignores_file_names() {
    let dir = create_test_dir();
    let inputs = vec![
        write_file(dir.path(), "export-1.csv", &inventory_csv(&[("Smith, Jane", "30")])),
        write_file(
            dir.path(),
            "export-2.csv",
            &guest_csv(&[("Jane", "Smith", "North - Loop 2")]),
        ),
        write_file(
            dir.path(),
            "export-3.csv",
            &guest_csv(&[("Jane", "Smith", "8:00 AM")]),
        ),
    ];

    let config = LabelConfig {
        role_detection: RoleDetection::Header,
        ..LabelConfig::default()
    };
    let (run, writer) = recording_run(config);
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert_eq!(summary.rendered_count(), 2);
    assert_eq!(
        writer.file_names(),
        vec!["tags-for-Delivery.pdf", "tags-for-Pickup-Saturday.pdf"]
    );
}

#[test]
fn test_custom_windows_and_sort_orders() {
    let dir = create_test_dir();
    let inputs = vec![
        write_inventory(dir.path(), &[("Young, Zed", "1"), ("Adams, Amy", "1")]),
        write_delivery(
            dir.path(),
            &[("Zed", "Young", "West - 1"), ("Amy", "Adams", "West - 2")],
        ),
        write_pickup(
            dir.path(),
            &[("Zed", "Young", "6:00 PM"), ("Amy", "Adams", "6:30 PM")],
        ),
    ];

    let config = LabelConfig {
        pickup_windows: vec![PickupWindowConfig::new("Evening", 17, 21)],
        delivery_sort: SortOrder::LastFirst,
        pickup_sort: SortOrder::Input,
        output_prefix: "labels-".to_string(),
        ..LabelConfig::default()
    };
    let (run, writer) = recording_run(config);
    let summary = run.process_files(&inputs, dir.path()).unwrap();

    assert_eq!(
        status_lines(&summary.statuses),
        vec![
            "labels-Delivery.pdf has 2 guests and 2 labels.",
            "labels-Pickup-Evening.pdf has 2 guests and 2 labels.",
        ]
    );

    let delivery = writer.sheet("labels-Delivery.pdf").unwrap();
    assert_eq!(delivery.pages[0].texts()[1], "Amy");
    let evening = writer.sheet("labels-Pickup-Evening.pdf").unwrap();
    assert_eq!(evening.pages[0].texts()[0], "Zed");
}
