//! Filesystem pipeline tests: discovery, placement, collisions, and
//! skip-on-error behavior, with a stub labeler in place of the network.

use snapsort::engine::sorter::place_file;
use snapsort::engine::tools::unique_dest_path;
use snapsort::pipeline::create_pipeline_context;
use snapsort::sort::sort_dir_with_opts;
use snapsort::{Label, Labeler, Opts, SortOpts, sort_dir};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh per-test directory under the system temp dir.
fn fixture_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("snapsort_{}_{}", tag, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"img").unwrap();
}

/// Labels by file name; errors for files it has no label for.
struct MapLabeler {
    labels: HashMap<String, String>,
}

impl MapLabeler {
    fn new(pairs: &[(&str, &str)]) -> Self {
        MapLabeler {
            labels: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Labeler for MapLabeler {
    fn label(&self, image: &Path) -> snapsort::Result<Label> {
        let name = image.file_name().unwrap().to_string_lossy().to_string();
        match self.labels.get(&name) {
            Some(l) => Label::new(l.clone()),
            None => anyhow::bail!("no label for {}", name),
        }
    }
}

#[test]
fn test_sort_moves_files_into_label_folders() {
    let root = fixture_dir("move");
    touch(&root.join("cat1.jpg"));
    touch(&root.join("holiday/dog1.png"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat"), ("dog1.png", "dog")]);

    let report = sort_dir(&root, &SortOpts::default(), &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 2);
    assert!(report.skipped.is_empty());
    assert!(root.join("sorted/cat/cat1.jpg").is_file());
    assert!(root.join("sorted/dog/dog1.png").is_file());
    assert!(!root.join("cat1.jpg").exists());
    assert!(!root.join("holiday/dog1.png").exists());
}

#[test]
fn test_keep_originals_copies_instead_of_moving() {
    let root = fixture_dir("keep");
    touch(&root.join("cat1.jpg"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat")]);
    let opts = SortOpts {
        keep_originals: true,
        ..SortOpts::default()
    };

    let report = sort_dir(&root, &opts, &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 1);
    assert!(root.join("cat1.jpg").is_file());
    assert!(root.join("sorted/cat/cat1.jpg").is_file());
}

#[test]
fn test_name_collision_gets_numeric_suffix() {
    let root = fixture_dir("collision");
    touch(&root.join("a/photo.jpg"));
    touch(&root.join("b/photo.jpg"));
    let labeler = MapLabeler::new(&[("photo.jpg", "beach")]);

    let report = sort_dir(&root, &SortOpts::default(), &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 2);
    assert!(root.join("sorted/beach/photo.jpg").is_file());
    assert!(root.join("sorted/beach/photo_1.jpg").is_file());
}

#[test]
fn test_label_error_skips_file_and_continues() {
    let root = fixture_dir("skip");
    touch(&root.join("cat1.jpg"));
    touch(&root.join("mystery.png"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat")]);

    let report = sort_dir(&root, &SortOpts::default(), &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(root.join("mystery.png").is_file());
    assert!(root.join("sorted/cat/cat1.jpg").is_file());
}

#[test]
fn test_sorted_subtree_is_not_rescanned() {
    let root = fixture_dir("rescan");
    touch(&root.join("sorted/cat/old.jpg"));
    touch(&root.join("new.jpg"));
    let labeler = MapLabeler::new(&[("new.jpg", "cat")]);

    let report = sort_dir(&root, &SortOpts::default(), &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 1);
    assert!(report.skipped.is_empty());
    assert!(root.join("sorted/cat/old.jpg").is_file());
    assert!(root.join("sorted/cat/new.jpg").is_file());
}

#[test]
fn test_multi_segment_label_uses_primary_folder() {
    let root = fixture_dir("primary");
    touch(&root.join("shot.png"));
    let labeler = MapLabeler::new(&[("shot.png", "Screenshot_Visual Studio Code_editing Rust")]);

    let report = sort_dir(&root, &SortOpts::default(), &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 1);
    assert!(root.join("sorted/Screenshot/shot.png").is_file());
}

#[test]
fn test_on_file_callback_fires_per_placed_file() {
    let root = fixture_dir("callback");
    touch(&root.join("cat1.jpg"));
    touch(&root.join("dog1.png"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat"), ("dog1.png", "dog")]);

    let mut seen = Vec::new();
    let mut on_file = |sf: &snapsort::SortedFile| seen.push(sf.dest.clone());
    let report = sort_dir(&root, &SortOpts::default(), &labeler, Some(&mut on_file)).unwrap();

    assert_eq!(seen.len(), report.sorted.len());
}

#[test]
fn test_declined_gate_is_a_no_op() {
    let root = fixture_dir("gate");
    touch(&root.join("cat1.jpg"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat")]);
    let opts = Opts {
        list_files: false,
        ..Opts::default()
    };

    let report = sort_dir_with_opts(&root, &opts, &labeler, |_| Ok(false), None).unwrap();

    assert!(report.sorted.is_empty());
    assert!(report.skipped.is_empty());
    assert!(root.join("cat1.jpg").is_file());
    assert!(!root.join("sorted").exists());
}

#[test]
fn test_gate_sees_plan_with_cost() {
    let root = fixture_dir("plan");
    touch(&root.join("cat1.jpg"));
    touch(&root.join("dog1.png"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat"), ("dog1.png", "dog")]);
    let opts = Opts {
        list_files: false,
        ..Opts::default()
    };

    let mut plan_images = 0;
    let mut plan_cost = 0.0;
    sort_dir_with_opts(
        &root,
        &opts,
        &labeler,
        |plan| {
            plan_images = plan.images.len();
            plan_cost = plan.estimated_cost_usd;
            Ok(true)
        },
        None,
    )
    .unwrap();

    assert_eq!(plan_images, 2);
    assert!(plan_cost > 0.0);
}

#[test]
fn test_missing_root_is_fatal() {
    let root = fixture_dir("missing");
    let labeler = MapLabeler::new(&[]);
    let result = sort_dir(&root.join("no_such_dir"), &SortOpts::default(), &labeler, None);
    assert!(result.is_err());
}

#[test]
fn test_place_file_never_overwrites() {
    let root = fixture_dir("place");
    let src_a = root.join("in/photo.jpg");
    let src_b = root.join("other/photo.jpg");
    fs::create_dir_all(src_a.parent().unwrap()).unwrap();
    fs::create_dir_all(src_b.parent().unwrap()).unwrap();
    fs::write(&src_a, b"first").unwrap();
    fs::write(&src_b, b"second").unwrap();

    let mut ctx = create_pipeline_context(&root, &Opts::default());
    let label = Label::new("beach").unwrap();
    let dest_a = place_file(&mut ctx, &src_a, &label).unwrap();
    let dest_b = place_file(&mut ctx, &src_b, &label).unwrap();

    assert_ne!(dest_a, dest_b);
    assert_eq!(fs::read(&dest_a).unwrap(), b"first");
    assert_eq!(fs::read(&dest_b).unwrap(), b"second");
}

#[test]
fn test_unique_dest_path_increments() {
    let dir = fixture_dir("unique");
    assert_eq!(unique_dest_path(&dir, "photo.jpg"), dir.join("photo.jpg"));
    fs::write(dir.join("photo.jpg"), b"x").unwrap();
    assert_eq!(unique_dest_path(&dir, "photo.jpg"), dir.join("photo_1.jpg"));
    fs::write(dir.join("photo_1.jpg"), b"x").unwrap();
    assert_eq!(unique_dest_path(&dir, "photo.jpg"), dir.join("photo_2.jpg"));
}

#[test]
fn test_custom_sorted_dir_name() {
    let root = fixture_dir("custom_out");
    touch(&root.join("cat1.jpg"));
    let labeler = MapLabeler::new(&[("cat1.jpg", "cat")]);
    let opts = SortOpts {
        sorted_dir: Some("by-label".to_string()),
        ..SortOpts::default()
    };

    let report = sort_dir(&root, &opts, &labeler, None).unwrap();

    assert_eq!(report.sorted.len(), 1);
    assert!(root.join("by-label/cat/cat1.jpg").is_file());
}
