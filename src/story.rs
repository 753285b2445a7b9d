// SPDX-License-Identifier: MPL-2.0
//! Narrative content for the page: hero, chapters, milestones, and footer.
//!
//! Everything the page says is data loaded from a `story.toml` file, so the
//! same binary can present any journey. A built-in sample story keeps the app
//! renderable when no file is supplied.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Full narrative content of the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    pub hero: Hero,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub gratitude: Vec<String>,
    #[serde(default)]
    pub footer: Footer,
}

/// Opening section: the page title and its supporting lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub tagline: String,
}

/// A prose section with an optional small eyebrow label above the title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub body: String,
}

/// A dated achievement with optional media attached.
///
/// Video paths are carried through for display as captioned placeholders;
/// playback is out of scope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub copy: String,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub videos: Vec<PathBuf>,
}

/// Footer content: attribution line and external links.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A labeled external link shown in the footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Story {
    /// Rewrites relative milestone image paths against `base`, so a story
    /// file can reference its photos by name regardless of the working
    /// directory the app was launched from.
    pub fn resolve_asset_paths(&mut self, base: &Path) {
        for milestone in &mut self.milestones {
            for image in &mut milestone.images {
                if image.is_relative() {
                    *image = base.join(&*image);
                }
            }
        }
    }
}

impl Default for Story {
    fn default() -> Self {
        Self {
            hero: Hero {
                title: "A Journey on the Ice".to_string(),
                subtitle: "Seasons of practice, one glide at a time".to_string(),
                tagline: "Scroll to follow the story from first steps to big goals."
                    .to_string(),
            },
            chapters: vec![Chapter {
                eyebrow: "Chapter 1".to_string(),
                title: "First Edges".to_string(),
                subtitle: "Where curiosity met cold air".to_string(),
                body: "The first glide is a small miracle: trusting the edge, \
                       breathing through the wobble, and chasing that floating \
                       feeling only ice can give."
                    .to_string(),
            }],
            milestones: vec![
                Milestone {
                    year: "2024".to_string(),
                    title: "First Competition".to_string(),
                    copy: "A first time performing in front of a crowd.".to_string(),
                    images: Vec::new(),
                    videos: Vec::new(),
                },
                Milestone {
                    year: "2022".to_string(),
                    title: "First Lesson".to_string(),
                    copy: "Where the whole journey began.".to_string(),
                    images: Vec::new(),
                    videos: Vec::new(),
                },
            ],
            gratitude: vec![
                "Thank you to every coach who turned falls into progress.".to_string(),
            ],
            footer: Footer {
                attribution: "Built with love and a lot of rink time.".to_string(),
                links: Vec::new(),
            },
        }
    }
}

/// Loads a story from a TOML file.
///
/// I/O failures and parse failures are reported separately so the caller can
/// distinguish a missing file from a malformed one.
pub fn load_from_path(path: &Path) -> Result<Story> {
    let content = std::fs::read_to_string(path)?;
    let mut story: Story =
        toml::from_str(&content).map_err(|err| Error::Story(err.to_string()))?;

    if let Some(base) = path.parent() {
        story.resolve_asset_paths(base);
    }

    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        gratitude = ["Thank you, coaches."]

        [hero]
        title = "An Immersive Journey"
        subtitle = "From first edges to confident performance"

        [[chapters]]
        eyebrow = "Chapter 1"
        title = "Origins"
        body = "Where it all started."

        [[milestones]]
        year = "2025"
        title = "First Axel"
        copy = "After lots of attempts and falls."
        images = ["photos/axel.jpg"]

        [[milestones]]
        year = "2022"
        title = "First Steps"

        [footer]
        attribution = "Family project"

        [[footer.links]]
        label = "@on.ice"
        url = "https://example.org/on.ice"
    "#;

    #[test]
    fn parses_a_full_story() {
        let story: Story = toml::from_str(SAMPLE).expect("sample should parse");

        assert_eq!(story.hero.title, "An Immersive Journey");
        assert_eq!(story.chapters.len(), 1);
        assert_eq!(story.milestones.len(), 2);
        assert_eq!(story.milestones[0].images.len(), 1);
        assert!(story.milestones[1].images.is_empty());
        assert_eq!(story.gratitude.len(), 1);
        assert_eq!(story.footer.links[0].label, "@on.ice");
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let story: Story = toml::from_str("[hero]\ntitle = \"Just a title\"\n")
            .expect("minimal story should parse");

        assert!(story.chapters.is_empty());
        assert!(story.milestones.is_empty());
        assert!(story.gratitude.is_empty());
        assert!(story.footer.attribution.is_empty());
    }

    #[test]
    fn load_from_path_resolves_relative_image_paths() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let story_path = temp_dir.path().join("story.toml");
        let mut file = std::fs::File::create(&story_path).expect("create story file");
        file.write_all(SAMPLE.as_bytes()).expect("write story file");

        let story = load_from_path(&story_path).expect("load should succeed");

        assert_eq!(
            story.milestones[0].images[0],
            temp_dir.path().join("photos/axel.jpg")
        );
    }

    #[test]
    fn resolve_asset_paths_leaves_absolute_paths_alone() {
        let mut story = Story::default();
        let absolute = if cfg!(windows) {
            PathBuf::from("C:\\photos\\axel.jpg")
        } else {
            PathBuf::from("/photos/axel.jpg")
        };
        story.milestones[0].images.push(absolute.clone());

        story.resolve_asset_paths(Path::new("/elsewhere"));
        assert_eq!(story.milestones[0].images[0], absolute);
    }

    #[test]
    fn load_from_path_reports_missing_file_as_io() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent.toml");

        match load_from_path(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_path_reports_bad_toml_as_story_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let story_path = temp_dir.path().join("story.toml");
        std::fs::write(&story_path, "not = valid = toml").expect("write bad file");

        match load_from_path(&story_path) {
            Err(Error::Story(_)) => {}
            other => panic!("expected Story error, got {:?}", other),
        }
    }

    #[test]
    fn default_story_renders_something() {
        let story = Story::default();
        assert!(!story.hero.title.is_empty());
        assert!(!story.milestones.is_empty());
    }
}
