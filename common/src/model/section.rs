//! Parsed resume sections.
//!
//! `parsed_resume` arrives as a JSON object whose key order is meaningful: the
//! results accordion lists sections in the order the service emitted them.
//! [`ParsedResume`] therefore deserializes into an ordered list rather than a
//! map. Keys outside the nine known sections are skipped.

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Interests,
}

/// Static description of a resume section: wire key, icon class and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub section: SectionKey,
    pub key: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub title: &'static str,
}

pub static SECTIONS: [SectionInfo; 9] = [
    SectionInfo {
        section: SectionKey::ContactInfo,
        key: "contact_info",
        icon: "fa-address-card",
        title: "Contact Information",
    },
    SectionInfo {
        section: SectionKey::Summary,
        key: "summary",
        icon: "fa-file-alt",
        title: "Professional Summary",
    },
    SectionInfo {
        section: SectionKey::Experience,
        key: "experience",
        icon: "fa-briefcase",
        title: "Work Experience",
    },
    SectionInfo {
        section: SectionKey::Education,
        key: "education",
        icon: "fa-graduation-cap",
        title: "Education",
    },
    SectionInfo {
        section: SectionKey::Skills,
        key: "skills",
        icon: "fa-tools",
        title: "Skills",
    },
    SectionInfo {
        section: SectionKey::Projects,
        key: "projects",
        icon: "fa-project-diagram",
        title: "Projects",
    },
    SectionInfo {
        section: SectionKey::Certifications,
        key: "certifications",
        icon: "fa-certificate",
        title: "Certifications",
    },
    SectionInfo {
        section: SectionKey::Languages,
        key: "languages",
        icon: "fa-language",
        title: "Languages",
    },
    SectionInfo {
        section: SectionKey::Interests,
        key: "interests",
        icon: "fa-heart",
        title: "Interests",
    },
];

impl SectionKey {
    pub fn info(self) -> &'static SectionInfo {
        &SECTIONS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SECTIONS.iter().find(|s| s.key == key).map(|s| s.section)
    }
}

/// `parsed_resume.contact_info`. The service sends `""` for fields it could
/// not find; those count as absent, same as `null` or a missing key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl ContactInfo {
    /// Present fields as `(label, value)` pairs in Email, Phone, LinkedIn order.
    pub fn present_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("LinkedIn", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Contact(ContactInfo),
    Text(String),
}

impl SectionContent {
    /// Blank sections are not rendered.
    pub fn is_blank(&self) -> bool {
        match self {
            SectionContent::Contact(contact) => contact.is_empty(),
            SectionContent::Text(text) => text.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedResume {
    sections: Vec<(SectionKey, SectionContent)>,
}

impl ParsedResume {
    pub fn new(sections: Vec<(SectionKey, SectionContent)>) -> Self {
        Self { sections }
    }

    /// All sections in server order, blank ones included.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &SectionContent)> {
        self.sections.iter().map(|(key, content)| (*key, content))
    }

    /// Sections worth rendering, in server order.
    pub fn non_blank(&self) -> impl Iterator<Item = (SectionKey, &SectionContent)> {
        self.iter().filter(|(_, content)| !content.is_blank())
    }

    pub fn get(&self, key: SectionKey) -> Option<&SectionContent> {
        self.iter().find(|(k, _)| *k == key).map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ParsedResume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (key, content) in &self.sections {
            map.serialize_entry(key.key(), content)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParsedResume {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ParsedResumeVisitor)
    }
}

struct ParsedResumeVisitor;

impl<'de> Visitor<'de> for ParsedResumeVisitor {
    type Value = ParsedResume;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of resume section names to their content")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut sections = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            match SectionKey::from_key(&name) {
                Some(SectionKey::ContactInfo) => {
                    let contact = map.next_value::<Option<ContactInfo>>()?.unwrap_or_default();
                    sections.push((SectionKey::ContactInfo, SectionContent::Contact(contact)));
                }
                Some(section) => {
                    let text = map.next_value::<Option<String>>()?.unwrap_or_default();
                    sections.push((section, SectionContent::Text(text)));
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(ParsedResume { sections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_variants() {
        assert_eq!(SECTIONS.len(), 9);
        for info in SECTIONS.iter() {
            assert_eq!(info.section.info(), info);
            assert_eq!(SectionKey::from_key(info.key), Some(info.section));
        }
    }

    #[test]
    fn keeps_server_key_order() {
        let parsed: ParsedResume = serde_json::from_str(
            r#"{"skills": "Rust", "summary": "Engineer", "contact_info": {"email": "a@b.com"}}"#,
        )
        .unwrap();
        let keys: Vec<SectionKey> = parsed.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![SectionKey::Skills, SectionKey::Summary, SectionKey::ContactInfo]
        );
    }

    #[test]
    fn unknown_sections_are_skipped() {
        let parsed: ParsedResume =
            serde_json::from_str(r#"{"hobbies": ["chess"], "education": "BSc"}"#).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed.get(SectionKey::Education),
            Some(&SectionContent::Text("BSc".to_string()))
        );
    }

    #[test]
    fn null_contact_fields_are_absent() {
        let parsed: ParsedResume = serde_json::from_str(
            r#"{"contact_info": {"email": null, "phone": null, "linkedin": null}}"#,
        )
        .unwrap();
        assert!(parsed.get(SectionKey::ContactInfo).unwrap().is_blank());
        assert_eq!(parsed.non_blank().count(), 0);
    }

    #[test]
    fn empty_string_contact_fields_are_absent() {
        let contact = ContactInfo {
            email: Some(String::new()),
            phone: Some("555-123-4567".to_string()),
            linkedin: None,
        };
        assert_eq!(contact.present_fields(), vec![("Phone", "555-123-4567")]);
    }

    #[test]
    fn whitespace_and_null_text_is_blank() {
        let parsed: ParsedResume =
            serde_json::from_str(r#"{"summary": "  \n ", "projects": null, "skills": "Go"}"#)
                .unwrap();
        let rendered: Vec<SectionKey> = parsed.non_blank().map(|(k, _)| k).collect();
        assert_eq!(rendered, vec![SectionKey::Skills]);
    }

    #[test]
    fn serializes_back_in_order() {
        let parsed = ParsedResume::new(vec![
            (SectionKey::Summary, SectionContent::Text("Engineer".to_string())),
            (
                SectionKey::ContactInfo,
                SectionContent::Contact(ContactInfo {
                    email: Some("a@b.com".to_string()),
                    ..ContactInfo::default()
                }),
            ),
        ]);
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.starts_with(r#"{"summary":"Engineer","contact_info":{"email":"a@b.com""#));
    }
}
