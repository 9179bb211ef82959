//! Built-in content used whenever a caller leaves a field out.
//!
//! Every section must render from these alone, so none of them may be empty
//! where the section needs content (footer links in particular are always
//! shown).

use crate::types::{Project, Strength};

pub const HERO_NAME: &str = "Your Name";
pub const HERO_TITLE: &str = "Creative Technologist";
pub const HERO_BIO: &str = "Building at the intersection of design, code, and innovation. \
Passionate about creating elegant solutions to complex problems.";
pub const HERO_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80";

pub const CODEFORCES_URL: &str = "https://codeforces.com/profile/username";
pub const GITHUB_URL: &str = "https://github.com/username";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/username";
pub const EMAIL: &str = "hello@example.com";

pub const GALLERY_TITLE: &str = "FEATURED PROJECTS";

pub const ABOUT_TITLE: &str = "ABOUT";
pub const ABOUT_BIO: &str = "I'm a creative technologist who thrives at the intersection of design \
and engineering. With a background in competitive programming and a passion for building \
beautiful, functional products, I bring both technical rigor and creative vision to every \
project. My approach combines analytical problem-solving with user-centered design thinking.";

pub const RESUME_URL: &str = "#";
pub const FOOTER_TAGLINE: &str = "Crafted with passion & precision";

pub const PAGE_LANG: &str = "en";

pub fn tech_tools() -> Vec<String> {
    ["React", "TypeScript", "Node.js", "Python", "Figma", "Tailwind CSS"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn soft_skills() -> Vec<String> {
    ["Problem Solving", "Creative Thinking", "Team Leadership", "Fast Learner"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Sample gallery shown until the caller supplies its own projects.
pub fn projects() -> Vec<Project> {
    vec![
        sample_project(
            "E-Commerce Platform",
            "Full-stack marketplace with real-time inventory management",
            "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&q=80",
            &["React", "Node.js", "PostgreSQL"],
            "Web Development",
        ),
        sample_project(
            "AI Image Generator",
            "Machine learning model for creative image synthesis",
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
            &["Python", "TensorFlow", "FastAPI"],
            "Machine Learning",
        ),
        sample_project(
            "Mobile Fitness App",
            "Cross-platform fitness tracking with social features",
            "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=800&q=80",
            &["React Native", "Firebase", "Redux"],
            "Mobile",
        ),
        sample_project(
            "Data Visualization Dashboard",
            "Interactive analytics platform for business intelligence",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
            &["D3.js", "React", "Express"],
            "Data Science",
        ),
    ]
}

fn sample_project(
    title: &str,
    description: &str,
    image_url: &str,
    tools: &[&str],
    category: &str,
) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        image_url: image_url.into(),
        tools: tools.iter().map(|t| t.to_string()).collect(),
        github_url: Some("https://github.com".into()),
        live_url: None,
        category: Some(category.into()),
    }
}

pub fn strengths() -> Vec<Strength> {
    vec![
        Strength::new(
            "Competitive Programming",
            "Expert-level problem solver with strong algorithmic thinking and optimization skills. \
             Active on Codeforces and LeetCode.",
        ),
        Strength::new(
            "Creative Technology",
            "Bridging the gap between design and development. Proficient in modern frameworks, \
             design tools, and creative coding.",
        ),
        Strength::new(
            "Entrepreneurial Mindset",
            "Product-focused approach with experience in building MVPs, user research, and \
             iterative development cycles.",
        ),
        Strength::new(
            "Learning Consistency",
            "Committed to continuous growth. Daily practice in coding, design, and exploring \
             emerging technologies.",
        ),
    ]
}
