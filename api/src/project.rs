use std::sync::LazyLock;

use regex::Regex;

// structs and types

pub type ProjectId = u32;

// at most this many technology chips are shown on a card, the rest collapse into "+N"
pub const MAX_VISIBLE_TECHNOLOGIES: usize = 4;

// substituted for any project image that fails to load
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

static YOUTUBE_EMBED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/embed/([^/?]+)").expect("valid youtube regex"));

// a single entry on the project timeline
//
// these are compiled into the binary and never change at runtime, so everything
// borrows from static data
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    // "Month Year", as displayed
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl Project {
    // the first word of the date, shown in the timeline bubble
    pub fn month(&self) -> &'static str {
        self.date.split_whitespace().next().unwrap_or(self.date)
    }

    // the second word of the date, shown opposite the card
    pub fn year(&self) -> Option<&'static str> {
        self.date.split_whitespace().nth(1)
    }

    pub fn youtube_video_id(&self) -> Option<&'static str> {
        let url = self.image_url?;

        YOUTUBE_EMBED
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_youtube_embed(&self) -> bool {
        self.image_url
            .is_some_and(|url| url.contains("youtube.com/embed/"))
    }

    pub fn youtube_watch_url(&self) -> Option<String> {
        self.youtube_video_id()
            .map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }

    pub fn visible_technologies(&self) -> &'static [&'static str] {
        let end = self.technologies.len().min(MAX_VISIBLE_TECHNOLOGIES);
        &self.technologies[..end]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies
            .len()
            .saturating_sub(MAX_VISIBLE_TECHNOLOGIES)
    }
}

// which side of the timeline spine a card sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Placement::Left
        } else {
            Placement::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

// pairs every project with its placement, in array order
pub fn timeline(projects: &'static [Project]) -> impl Iterator<Item = (Placement, &'static Project)> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| (Placement::for_index(index), project))
}

// data

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        date: "August 2021",
        title: "AI Facial Recognition",
        description: "A functional AI-based facial recognition program, contributing to a practical application of computer vision technology.",
        technologies: &["Python", "OpenCV", "Mediapipe"],
        image_url: Some("/images/profile.jpg"),
        link: Some("https://github.com/AdamLinYuan/FaceMeshModule-and-Full-body-detection"),
    },
    Project {
        id: 2,
        date: "January 2022",
        title: "Game",
        description: "A 2D 1v1 brawling game made using the Unity game engine.",
        technologies: &["C#", "Unity", "Procreate"],
        image_url: Some("/images/task-app.jpg"),
        link: None,
    },
    Project {
        id: 3,
        date: "March 2024",
        title: "Bookle",
        description: "A daily book search web game, inspired by Wordle.",
        technologies: &["Google Books API", "Python", "Django", "HTML", "CSS"],
        image_url: Some("/images/bookle.jpg"),
        link: None,
    },
    Project {
        id: 4,
        date: "April 2024",
        title: "Astraeus-01 Satellite",
        description: "Satellite data processing for wildfire risk mapping.",
        technologies: &["Python", "NumPy", "Satellite Imagery"],
        image_url: None,
        link: None,
    },
    Project {
        id: 5,
        date: "April 2025",
        title: "JPMorgan Code For Good Hackathon Winner",
        description: "An application for the MCR Pathways programme that pairs mentors with mentees efficiently.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Django", "Postgres"],
        image_url: Some("/images/bookle.jpg"),
        link: Some("https://github.com/adamlinyuan/my-portfolio"),
    },
    Project {
        id: 6,
        date: "April 2025",
        title: "Portfolio Website",
        description: "This site: a single-page portfolio written in Rust and compiled to WebAssembly.",
        technologies: &["Rust", "Dioxus", "WebAssembly"],
        image_url: Some("/images/profile.jpg"),
        link: Some("https://github.com/adamlinyuan/my-portfolio"),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn project(date: &'static str, image_url: Option<&'static str>) -> Project {
        Project {
            id: 99,
            date,
            title: "Test",
            description: "",
            technologies: &["A", "B", "C", "D", "E", "F"],
            image_url,
            link: None,
        }
    }

    #[test]
    fn placement_alternates_by_index_parity() {
        for (index, (placement, _)) in timeline(PROJECTS).enumerate() {
            let expected = if index % 2 == 0 {
                Placement::Left
            } else {
                Placement::Right
            };
            assert_eq!(placement, expected, "project at index {index}");
        }

        assert_eq!(Placement::for_index(0).class(), "left");
        assert_eq!(Placement::for_index(7).class(), "right");
    }

    #[test]
    fn timeline_preserves_array_order() {
        let ids: Vec<ProjectId> = timeline(PROJECTS).map(|(_, p)| p.id).collect();
        let expected: Vec<ProjectId> = PROJECTS.iter().map(|p| p.id).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<ProjectId> = PROJECTS.iter().map(|p| p.id).collect();

        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn date_splits_into_month_and_year() {
        let p = project("August 2021", None);
        assert_eq!(p.month(), "August");
        assert_eq!(p.year(), Some("2021"));

        let p = project("Ongoing", None);
        assert_eq!(p.month(), "Ongoing");
        assert_eq!(p.year(), None);
    }

    #[test]
    fn technologies_collapse_past_the_limit() {
        let p = project("May 2020", None);

        assert_eq!(p.visible_technologies(), &["A", "B", "C", "D"]);
        assert_eq!(p.hidden_technology_count(), 2);

        let few = Project {
            technologies: &["Rust"],
            ..project("May 2020", None)
        };
        assert_eq!(few.visible_technologies(), &["Rust"]);
        assert_eq!(few.hidden_technology_count(), 0);
    }

    #[test]
    fn youtube_embeds_are_detected() {
        let p = project(
            "May 2020",
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?start=10"),
        );

        assert!(p.is_youtube_embed());
        assert_eq!(p.youtube_video_id(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            p.youtube_watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );

        let image = project("May 2020", Some("/images/bookle.jpg"));
        assert!(!image.is_youtube_embed());
        assert_eq!(image.youtube_video_id(), None);

        let none = project("May 2020", None);
        assert!(!none.is_youtube_embed());
        assert_eq!(none.youtube_watch_url(), None);
    }
}
