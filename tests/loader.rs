use camino::Utf8PathBuf;
use waypath::loader::{discover_dataset_files, load_dataset, parse_dataset_json};
use waypath::model::{Dataset, DatasetDoc, Point};

fn utf8(path: &std::path::Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
}

#[test]
fn test_parse_dataset_json() {
    let json = r#"[
        { "id": 1, "name": "Location A", "lat": 34.0522, "lng": -118.2437 },
        { "id": 2, "name": "Location B", "lat": 37.7749, "lng": -122.4194 }
    ]"#;
    let ds = parse_dataset_json(json).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.get(1).unwrap().name, "Location A");
    // Supplier order is preserved
    let ids: Vec<u32> = ds.points().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_parse_rejects_out_of_range_latitude() {
    let json = r#"[ { "id": 1, "name": "Broken", "lat": 91.0, "lng": 0.0 } ]"#;
    let err = parse_dataset_json(json).unwrap_err();
    assert!(err.to_string().contains("latitude"), "got: {err}");
}

#[test]
fn test_parse_rejects_out_of_range_longitude() {
    let json = r#"[ { "id": 1, "name": "Broken", "lat": 0.0, "lng": -180.5 } ]"#;
    let err = parse_dataset_json(json).unwrap_err();
    assert!(err.to_string().contains("longitude"), "got: {err}");
}

#[test]
fn test_parse_rejects_duplicate_ids() {
    let json = r#"[
        { "id": 7, "name": "One", "lat": 1.0, "lng": 2.0 },
        { "id": 7, "name": "Two", "lat": 3.0, "lng": 4.0 }
    ]"#;
    let err = parse_dataset_json(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate point id 7"), "got: {err}");
}

#[test]
fn test_parse_accepts_empty_array() {
    let ds = parse_dataset_json("[]").unwrap();
    assert!(ds.is_empty());
}

#[test]
fn test_load_dataset_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.json");
    std::fs::write(
        &path,
        r#"[ { "id": 3, "name": "Location C", "lat": 40.7128, "lng": -74.0060 } ]"#,
    )
    .unwrap();

    let ds = load_dataset(&utf8(&path)).unwrap();
    assert_eq!(ds.len(), 1);
    assert!(ds.contains(3));
}

#[test]
fn test_load_dataset_from_binary_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.wpb");

    let dataset = Dataset::from_points(vec![Point {
        id: 9,
        name: "Snapshot".into(),
        lat: 12.0,
        lng: 34.0,
    }])
    .unwrap();
    DatasetDoc { dataset }.save_to_binary(&path).unwrap();

    let loaded = load_dataset(&utf8(&path)).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(9).unwrap().lng, 34.0);
}

#[test]
fn test_load_rejects_bad_magic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.wpb");
    std::fs::write(&path, b"NOTWAYP\x01\x00\x00\x00").unwrap();
    assert!(load_dataset(&utf8(&path)).is_err());
}

#[test]
fn test_load_bundled_sample() {
    let path = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/waypoints.json");
    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.get(1).unwrap().name, "Location A");
}

#[test]
fn test_discover_dataset_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.json"), "[]").unwrap();
    std::fs::write(dir.path().join("a.json"), "[]").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
    let sub = dir.path().join("more");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("c.wpb"), "").unwrap();

    let found = discover_dataset_files(&utf8(dir.path()));
    let names: Vec<&str> = found.iter().map(|p| p.file_name().unwrap()).collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.wpb"]);
}
