use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Top-level views selectable from the navigation bar. `About` and `Contact`
/// are navigable placeholders without a registered view of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section key: {0}")]
pub struct UnknownSection(String);

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "extra-home",
            Section::About => "extra-user",
            Section::Projects => "extra-briefcase",
            Section::Skills => "extra-code",
            Section::Contact => "extra-send",
        }
    }

    /// The section whose view actually renders. Placeholders fall back to
    /// `Home`, so dispatch never hits a "not found" state.
    pub fn canonical(self) -> Section {
        match self {
            Section::Home | Section::Projects | Section::Skills => self,
            Section::About | Section::Contact => Section::Home,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Section::Home),
            "about" => Ok(Section::About),
            "projects" => Ok(Section::Projects),
            "skills" => Ok(Section::Skills),
            "contact" => Ok(Section::Contact),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Total resolution from an arbitrary key to a section: unknown keys map to
/// `Home` rather than erroring.
pub fn resolve(key: &str) -> Section {
    key.parse().unwrap_or(Section::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>(), Ok(section));
            assert_eq!(resolve(section.key()), section);
        }
    }

    #[test]
    fn unknown_keys_resolve_to_home() {
        assert_eq!(resolve(""), Section::Home);
        assert_eq!(resolve("blog"), Section::Home);
        assert_eq!(resolve("PROJECTS"), Section::Home);
        assert_eq!(resolve("projects/"), Section::Home);
    }

    #[test]
    fn unknown_keys_parse_to_typed_error() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section key: blog");
    }

    #[test]
    fn placeholders_canonicalize_to_home() {
        assert_eq!(Section::About.canonical(), Section::Home);
        assert_eq!(Section::Contact.canonical(), Section::Home);
        assert_eq!(resolve("about").canonical(), resolve("home").canonical());
    }

    #[test]
    fn registered_sections_are_their_own_view() {
        assert_eq!(Section::Home.canonical(), Section::Home);
        assert_eq!(Section::Projects.canonical(), Section::Projects);
        assert_eq!(Section::Skills.canonical(), Section::Skills);
    }
}
