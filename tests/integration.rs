// SPDX-License-Identifier: MPL-2.0
use iced_scrapbook::config::{self, Config};
use iced_scrapbook::countdown;
use iced_scrapbook::gallery_scanner::GalleryList;
use iced_scrapbook::lightbox::Lightbox;
use iced_scrapbook::story;
use std::path::Path;
use tempfile::tempdir;

fn create_image(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"fake image data").expect("failed to write test file");
}

#[test]
fn scanned_gallery_drives_the_lightbox_end_to_end() {
    let dir = tempdir().expect("failed to create temp dir");
    for name in ["a.jpg", "b.png", "c.webp", "d.gif"] {
        create_image(dir.path(), name);
    }
    create_image(dir.path(), "notes.txt");

    let list = GalleryList::scan_directory(dir.path()).expect("scan failed");
    assert_eq!(list.len(), 4);

    let rows = list.rows(2);
    assert_eq!(rows.len(), 2);

    // Open the lightbox over the first strip and walk a full cycle.
    let mut lightbox = Lightbox::new();
    lightbox.open(rows[0].clone(), 0);
    assert!(lightbox.is_open());

    let n = rows[0].len();
    for _ in 0..n {
        lightbox.next();
    }
    assert_eq!(lightbox.position(), Some((0, n)));

    lightbox.previous();
    assert_eq!(lightbox.position(), Some((n - 1, n)));

    lightbox.close();
    assert!(!lightbox.is_open());
}

#[test]
fn config_round_trips_and_feeds_the_countdown() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        countdown: config::CountdownConfig {
            target: Some("2034-02-10T00:00:00-07:00".to_string()),
            caption: Some("Salt Lake City".to_string()),
        },
        ..Default::default()
    };
    config::save_to_path(&config, &path).expect("save failed");

    let loaded = config::load_from_path(&path).expect("load failed");
    let target = loaded.parsed_target();

    // One hour before the target in its own zone.
    let now = countdown::parse_target("2034-02-09T23:00:00-07:00")
        .expect("valid instant")
        .with_timezone(&chrono::Utc);
    let breakdown = countdown::remaining(now, target);

    assert_eq!(breakdown.years, 0);
    assert_eq!(breakdown.days, 0);
    assert_eq!(breakdown.hours, 1);
    assert_eq!(breakdown.minutes, 0);
    assert_eq!(breakdown.seconds, 0);
    assert!(!breakdown.is_past);
    assert_eq!(loaded.countdown_caption(), "Salt Lake City");
}

#[test]
fn story_file_resolves_milestone_photos_next_to_it() {
    let dir = tempdir().expect("failed to create temp dir");
    let story_path = dir.path().join("story.toml");
    std::fs::write(
        &story_path,
        r#"
            [hero]
            title = "A Season Remembered"

            [[milestones]]
            year = "2025"
            title = "First Podium"
            images = ["photos/podium.jpg"]
        "#,
    )
    .expect("failed to write story");

    let story = story::load_from_path(&story_path).expect("story should load");

    assert_eq!(story.hero.title, "A Season Remembered");
    assert_eq!(
        story.milestones[0].images[0],
        dir.path().join("photos/podium.jpg")
    );
}

#[test]
fn empty_gallery_directory_refuses_to_open_a_lightbox() {
    let dir = tempdir().expect("failed to create temp dir");

    let list = GalleryList::scan_directory(dir.path()).expect("scan failed");
    assert!(list.is_empty());

    let mut lightbox = Lightbox::new();
    lightbox.open(list.items().to_vec(), 0);
    assert!(!lightbox.is_open());
}
