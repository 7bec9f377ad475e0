// static biography content for the hero and about sections

pub const NAME: &str = "Adam";
pub const LOGO_TEXT: &str = "袁霖";
pub const HEADLINE: &str = "Full-Stack Developer & UI/UX Enthusiast";
pub const ROLE: &str = "Full-stack Developer";
pub const BIO: &str = "Computing Science student at the University of Glasgow passionate about building \
applications that solve real-world problems. My experience spans web development, AI, and data \
processing with a focus on clean, efficient solutions.";

pub const UNIVERSITY: &str = "University of Glasgow";
pub const LOCATION: &str = "Glasgow, UK";
pub const EMAIL: &str = "adamyuanprofessional@gmail.com";

pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
pub const RESUME_PATH: &str = "/files/resume.pdf";

#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Software Engineer",
        company: "GUOrbit",
        period: "Jan 2024 - Present",
        description: "Working on satellite data processing systems for the Astraeus-01 project, implementing algorithms for wildfire risk mapping.",
    },
    Experience {
        role: "Software Engineer Intern",
        company: "JPMorgan Chase & Co",
        period: "Jun 2023 - Aug 2023",
        description: "Developed and maintained financial software applications, focusing on backend services with Spring Boot and PostgreSQL.",
    },
    Experience {
        role: "Software Engineer Intern",
        company: "Expedia Group",
        period: "Jun 2022 - Aug 2022",
        description: "Worked on frontend development using React and TypeScript, implementing new features for the hotel booking platform.",
    },
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &["Python", "Java", "Kotlin", "JavaScript", "TypeScript", "Rust"],
    },
    SkillCategory {
        title: "Frontend Development",
        skills: &["React", "Next.js", "Tailwind CSS", "HTML/CSS"],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &["Django", "Spring Boot", "Node.js", "Express"],
    },
    SkillCategory {
        title: "Databases & Tools",
        skills: &["MySQL", "PostgreSQL", "Git", "CI/CD", "AWS", "Docker"],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/adamlinyuan",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/adamlinyuan",
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}
