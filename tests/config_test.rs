// ==========================================
// ConfigManager integration tests
// ==========================================


use pantry_labels::config::{ConfigError, ConfigManager, RoleDetection};
use pantry_labels::domain::SortOrder;
use pantry_labels::engine::LabelRun;
use test_helpers::*;

#[test]
fn test_partial_config_file_keeps_defaults() {
    let dir = create_test_dir();
    let path = write_file(
        dir.path(),
        "config.json",
        r#"{
            "role_detection": "header",
            "pickup_sort": "input",
            "pickup_windows": [
                { "label": "Morning", "start_hour": 8, "end_hour": 12 }
            ]
        }"#,
    );

    let config = ConfigManager::load(Some(path.as_path())).unwrap();

    assert_eq!(config.role_detection, RoleDetection::Header);
    assert_eq!(config.pickup_sort, SortOrder::Input);
    assert_eq!(config.pickup_windows.len(), 1);
    assert_eq!(config.pickup_pdf_name(&config.pickup_windows[0]), "tags-for-Pickup-Morning.pdf");
    // untouched keys
    assert_eq!(config.delivery_pdf_name(), "tags-for-Delivery.pdf");
    assert_eq!(config.summary_file_name, "make_tags_report.txt");
    assert_eq!(config.classification_sample_rows, 5);
}

#[test]
fn test_invalid_window_rejected_on_load() {
    let dir = create_test_dir();
    let path = write_file(
        dir.path(),
        "config.json",
        r#"{ "pickup_windows": [ { "label": "Bad", "start_hour": 15, "end_hour": 12 } ] }"#,
    );

    let err = ConfigManager::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_loaded_config_drives_run() {
    let dir = create_test_dir();
    let config_path = write_file(
        dir.path(),
        "config.json",
        r#"{ "output_prefix": "run-", "summary_file_name": "status.txt" }"#,
    );
    let inputs = vec![
        write_inventory(dir.path(), &[("Smith, Jane", "9")]),
        write_delivery(dir.path(), &[("Jane", "Smith", "North - 1")]),
    ];

    let config = ConfigManager::load(Some(config_path.as_path())).unwrap();
    let summary = LabelRun::new(config)
        .with_writer(Box::new(RecordingWriter::new()))
        .process_files(&inputs, dir.path())
        .unwrap();

    assert_eq!(
        summary.statuses[0].to_string(),
        "run-Delivery.pdf has 1 guests and 1 labels."
    );
    assert_eq!(summary.summary_path, Some(dir.path().join("status.txt")));
    assert!(dir.path().join("run-Delivery.txt").exists());
}
