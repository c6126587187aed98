use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Content file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Skill {skill} has level {level}, expected 0-100")]
    InvalidSkillLevel { skill: String, level: u8 },
    #[error("Portfolio content is missing {0}")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub summary: String,
    pub portrait: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub biography: Vec<Fact>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub languages: Vec<String>,
    pub qualifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub items: Vec<Project>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub hero: Hero,
    pub about: About,
    pub experience: Experience,
    pub achievements: Vec<String>,
    pub projects: Projects,
    pub contact: Contact,
}

impl Portfolio {
    fn validate(self) -> Result<Self, ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Empty("name"));
        }
        if self.experience.roles.is_empty() {
            return Err(ContentError::Empty("experience.roles"));
        }
        if let Some(skill) = self.about.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::InvalidSkillLevel {
                skill: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(self)
    }
}

pub fn parse(content: &str) -> Result<Portfolio, ContentError> {
    serde_json::from_str::<Portfolio>(content)
        .map_err(|e| ContentError::Parse(e.to_string()))?
        .validate()
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let content =
        std::str::from_utf8(&file.data).map_err(|_| ContentError::Encoding(name.to_string()))?;
    let portfolio = parse(content)?;
    log::debug!("loaded portfolio content for {}", portfolio.name);
    Ok(portfolio)
}

/// The embedded portfolio, parsed once.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "name": "Jane Doe",
            "hero": {
                "greeting": "Hi my name is",
                "summary": "Engineer.",
                "portrait": { "src": "/personal.jpg" }
            },
            "about": {
                "title": "About Me",
                "subtitle": "Details",
                "biography": [{ "label": "Height", "value": "180 cm" }],
                "skills": [{ "name": "AutoCAD", "level": 85 }],
                "education": [],
                "languages": ["English (Fluent)"],
                "qualifications": []
            },
            "experience": {
                "title": "Professional Experience",
                "roles": [{
                    "title": "Site Engineer",
                    "company": "Acme",
                    "period": "2020 to 2023",
                    "location": "Myanmar",
                    "highlights": ["Poured concrete"]
                }]
            },
            "achievements": [],
            "projects": { "items": [] },
            "contact": {
                "title": "Contact Me",
                "phone": "+100",
                "email": "jane@example.com",
                "location": "Somewhere"
            }
        })
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded content should be valid");
        assert!(!portfolio.name.is_empty());
        assert!(!portfolio.experience.roles.is_empty());
        assert!(portfolio.about.skills.iter().all(|s| s.level <= 100));
        assert!(portfolio.contact.mailto().starts_with("mailto:"));
    }

    #[test]
    fn test_parse_minimal() {
        let portfolio = parse(&minimal().to_string()).unwrap();
        assert_eq!(portfolio.hero.portrait.alt, "");
        assert!(portfolio.experience.images.is_empty());
        assert_eq!(
            portfolio.about.skills,
            vec![Skill {
                name: "AutoCAD".to_string(),
                level: 85
            }]
        );
        assert_eq!(portfolio.contact.mailto(), "mailto:jane@example.com");
    }

    #[test]
    fn test_skill_level_over_100_rejected() {
        let mut value = minimal();
        value["about"]["skills"][0]["level"] = 120.into();
        assert_eq!(
            parse(&value.to_string()),
            Err(ContentError::InvalidSkillLevel {
                skill: "AutoCAD".to_string(),
                level: 120
            })
        );
    }

    #[test]
    fn test_required_content() {
        let mut value = minimal();
        value["experience"]["roles"] = serde_json::json!([]);
        assert_eq!(
            parse(&value.to_string()),
            Err(ContentError::Empty("experience.roles"))
        );

        let mut value = minimal();
        value["name"] = " ".into();
        assert_eq!(parse(&value.to_string()), Err(ContentError::Empty("name")));
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(parse("{"), Err(ContentError::Parse(_))));
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("contact");
        assert!(matches!(parse(&value.to_string()), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }
}
