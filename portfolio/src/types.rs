//! Portfolio data types.
//!
//! These records are the whole input of a render pass. They're designed to be:
//!
//! - **Serializable** - loaded from TOML or JSON via serde
//! - **Clone-friendly** - components take owned copies, no borrowing across views
//! - **Default-able** - override a few fields with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use portfolio::types::{Contacts, Profile};
//!
//! let profile = Profile {
//!     name: "Ada Lovelace".into(),
//!     contacts: Contacts {
//!         github: Some("https://github.com/ada".into()),
//!         ..Contacts::none()
//!     },
//!     ..Default::default()
//! };
//!
//! assert_eq!(profile.contacts.links().len(), 1);
//! assert_eq!(profile.title, "Creative Technologist");
//! ```

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Returns the value, unmodified, only when it is present and not empty.
///
/// Absent and empty links are treated the same: neither may produce an anchor.
/// Anything else, whitespace included, is passed through as given.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Hero input: who the page is about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name, also used as the photo's alt text
    pub name: String,
    /// Short role line under the name
    pub title: String,
    /// Intro paragraph
    pub bio: String,
    /// Portrait image URL
    pub photo_url: String,
    /// Technology badges, in display order
    pub tech_tools: Vec<String>,
    /// Soft-skill badges, in display order
    pub soft_skills: Vec<String>,
    /// Contact channels; absent ones render nothing
    pub contacts: Contacts,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: defaults::HERO_NAME.into(),
            title: defaults::HERO_TITLE.into(),
            bio: defaults::HERO_BIO.into(),
            photo_url: defaults::HERO_PHOTO_URL.into(),
            contacts: Contacts::default(),
            tech_tools: defaults::tech_tools(),
            soft_skills: defaults::soft_skills(),
        }
    }
}

/// Hero contact channels.
///
/// `Contacts::default()` carries placeholder values for all four channels.
/// A caller-supplied record replaces the defaults as a whole: a field it
/// leaves out is absent, not defaulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeforces: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Bare address; rendered as a `mailto:` link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for Contacts {
    fn default() -> Self {
        Self {
            codeforces: Some(defaults::CODEFORCES_URL.into()),
            github: Some(defaults::GITHUB_URL.into()),
            linkedin: Some(defaults::LINKEDIN_URL.into()),
            email: Some(defaults::EMAIL.into()),
        }
    }
}

impl Contacts {
    /// A record with every channel absent.
    pub fn none() -> Self {
        Self {
            codeforces: None,
            github: None,
            linkedin: None,
            email: None,
        }
    }

    /// Renderable links in fixed channel order, skipping absent or blank fields.
    pub fn links(&self) -> Vec<ContactLink> {
        [
            (ContactChannel::Codeforces, &self.codeforces),
            (ContactChannel::Github, &self.github),
            (ContactChannel::Linkedin, &self.linkedin),
            (ContactChannel::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(channel, value)| {
            non_empty(value).map(|v| ContactLink {
                channel,
                href: channel.href(v),
            })
        })
        .collect()
    }
}

/// A contact channel shown in the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    Codeforces,
    Github,
    Linkedin,
    Email,
}

impl ContactChannel {
    /// Accessible label for the icon-only link.
    pub fn label(&self) -> &'static str {
        match self {
            ContactChannel::Codeforces => "Codeforces",
            ContactChannel::Github => "GitHub",
            ContactChannel::Linkedin => "LinkedIn",
            ContactChannel::Email => "Email",
        }
    }

    /// Lowercase key used in markup (`data-channel`).
    pub fn as_label(&self) -> &'static str {
        match self {
            ContactChannel::Codeforces => "codeforces",
            ContactChannel::Github => "github",
            ContactChannel::Linkedin => "linkedin",
            ContactChannel::Email => "email",
        }
    }

    /// Email gets a `mailto:` prefix; everything else passes through unchanged.
    pub fn href(&self, value: &str) -> String {
        match self {
            ContactChannel::Email => format!("mailto:{}", value),
            _ => value.to_string(),
        }
    }

    /// Whether the link opens in a new tab.
    pub fn is_external(&self) -> bool {
        !matches!(self, ContactChannel::Email)
    }
}

/// A filtered, ready-to-render hero contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub channel: ContactChannel,
    pub href: String,
}

/// One gallery entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Background image URL
    pub image_url: String,
    /// Tool tags, in display order
    pub tools: Vec<String>,
    /// Source code link; the "Code" action is omitted without it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Live demo link; the "Live" action is omitted without it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Tag in the top-left corner of the cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Project {
    pub fn category_label(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn code_link(&self) -> Option<&str> {
        non_empty(&self.github_url)
    }

    pub fn live_link(&self) -> Option<&str> {
        non_empty(&self.live_url)
    }
}

/// One row of the about section's strengths column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    pub title: String,
    pub description: String,
}

impl Strength {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Project gallery input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub title: String,
    pub projects: Vec<Project>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: defaults::GALLERY_TITLE.into(),
            projects: defaults::projects(),
        }
    }
}

/// About section input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub title: String,
    pub bio: String,
    pub strengths: Vec<Strength>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            title: defaults::ABOUT_TITLE.into(),
            bio: defaults::ABOUT_BIO.into(),
            strengths: defaults::strengths(),
        }
    }
}

/// Footer input. Every link is always rendered, defaulted or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub resume_url: String,
    pub github_url: String,
    pub codeforces_url: String,
    pub linkedin_url: String,
    pub tagline: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            resume_url: defaults::RESUME_URL.into(),
            github_url: defaults::GITHUB_URL.into(),
            codeforces_url: defaults::CODEFORCES_URL.into(),
            linkedin_url: defaults::LINKEDIN_URL.into(),
            tagline: defaults::FOOTER_TAGLINE.into(),
        }
    }
}

/// A footer contact button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterButton {
    Resume,
    Github,
    Codeforces,
    Linkedin,
}

impl FooterButton {
    pub fn label(&self) -> &'static str {
        match self {
            FooterButton::Resume => "Resume",
            FooterButton::Github => "GitHub",
            FooterButton::Codeforces => "Codeforces",
            FooterButton::Linkedin => "LinkedIn",
        }
    }
}

impl FooterConfig {
    /// The four contact buttons in display order, unfiltered.
    pub fn buttons(&self) -> [(FooterButton, String); 4] {
        [
            (FooterButton::Resume, self.resume_url.clone()),
            (FooterButton::Github, self.github_url.clone()),
            (FooterButton::Codeforces, self.codeforces_url.clone()),
            (FooterButton::Linkedin, self.linkedin_url.clone()),
        ]
    }
}

/// Document-level metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// `<title>`; falls back to "<name> | Portfolio"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<html lang>`
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: None,
            lang: defaults::PAGE_LANG.into(),
        }
    }
}

/// Everything the composition root hands down to the four sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page: PageMeta,
    pub hero: Profile,
    pub gallery: GalleryConfig,
    pub about: AboutConfig,
    pub footer: FooterConfig,
}

impl SiteConfig {
    /// Document title: the explicit override, or one derived from the hero name.
    pub fn document_title(&self) -> String {
        match non_empty(&self.page.title) {
            Some(title) => title.to_string(),
            None => format!("{} | Portfolio", self.hero.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_contacts_render_all_four_channels() {
        let links = Contacts::default().links();
        let channels: Vec<_> = links.iter().map(|l| l.channel).collect();
        assert_eq!(
            channels,
            vec![
                ContactChannel::Codeforces,
                ContactChannel::Github,
                ContactChannel::Linkedin,
                ContactChannel::Email,
            ]
        );
    }

    #[test]
    fn empty_and_absent_contacts_are_skipped() {
        let contacts = Contacts {
            codeforces: None,
            github: Some("https://github.com/x".into()),
            linkedin: Some(String::new()),
            email: None,
        };
        let links = contacts.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].channel, ContactChannel::Github);
        assert_eq!(links[0].href, "https://github.com/x");
    }

    #[test]
    fn contact_values_pass_through_unmodified() {
        let contacts = Contacts {
            github: Some(" https://github.com/x ".into()),
            linkedin: Some("   ".into()),
            ..Contacts::none()
        };
        let links = contacts.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, " https://github.com/x ");
        assert_eq!(links[1].channel, ContactChannel::Linkedin);
        assert_eq!(links[1].href, "   ");
    }

    #[test]
    fn project_links_pass_through_unmodified() {
        let project = Project {
            github_url: Some(" https://github.com/a/b".into()),
            live_url: Some("https://b.dev ".into()),
            ..Default::default()
        };
        assert_eq!(project.code_link(), Some(" https://github.com/a/b"));
        assert_eq!(project.live_link(), Some("https://b.dev "));
    }

    #[test]
    fn email_becomes_mailto() {
        let contacts = Contacts {
            email: Some("me@example.com".into()),
            ..Contacts::none()
        };
        assert_eq!(contacts.links()[0].href, "mailto:me@example.com");
        assert!(!ContactChannel::Email.is_external());
        assert!(ContactChannel::Github.is_external());
    }

    #[test]
    fn project_optional_fields_follow_non_empty_rule() {
        let project = Project {
            title: "x".into(),
            github_url: Some(String::new()),
            live_url: Some("https://x.dev".into()),
            category: None,
            ..Default::default()
        };
        assert_eq!(project.code_link(), None);
        assert_eq!(project.live_link(), Some("https://x.dev"));
        assert_eq!(project.category_label(), None);
    }

    #[test]
    fn footer_buttons_keep_empty_values() {
        let footer = FooterConfig {
            github_url: String::new(),
            ..Default::default()
        };
        let buttons = footer.buttons();
        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[1], (FooterButton::Github, String::new()));
        assert_eq!(buttons[0].0.label(), "Resume");
    }

    #[test]
    fn document_title_falls_back_to_name() {
        let mut config = SiteConfig::default();
        assert_eq!(config.document_title(), "Your Name | Portfolio");

        config.page.title = Some("Hello".into());
        assert_eq!(config.document_title(), "Hello");
    }

    #[test]
    fn sample_gallery_has_four_projects_in_order() {
        let gallery = GalleryConfig::default();
        let titles: Vec<_> = gallery.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "E-Commerce Platform",
                "AI Image Generator",
                "Mobile Fitness App",
                "Data Visualization Dashboard",
            ]
        );
    }
}
