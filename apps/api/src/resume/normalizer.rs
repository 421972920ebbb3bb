//! Normalizer: turns a loosely shaped resume record into a [`SanitizedViewModel`].
//!
//! Stored resumes come from three places: the editor, older schema versions, and
//! AI-parsed uploads. Field names drift (`role` vs `position`, `startDate` vs
//! `start_date`), descriptions are either strings or arrays, and nested objects
//! may be missing or `null`. Every one of those shapes is canonicalized here, once,
//! so renderers never re-derive anything from raw input.
//!
//! # Rules
//! - `normalize` is total: malformed fields degrade to `""`, `[]` or `{}`.
//! - `normalize` is idempotent: feeding its serialized output back in yields the
//!   same view model.

use serde_json::{Map, Value};

use crate::resume::view_model::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SanitizedViewModel,
};

/// Historical data-entry bug: some LinkedIn handles were saved as `linked:<handle>`.
const LEGACY_LINKEDIN_PREFIX: &str = "linked:";

/// Literal end date for a current role without an explicit end.
pub const PRESENT: &str = "Present";

const TOP_LEVEL_KEYS: &[&str] = &[
    "personal_info",
    "professional_summary",
    "experience",
    "project",
    "education",
    "skills",
];

const PERSONAL_INFO_KEYS: &[&str] = &[
    "full_name",
    "email",
    "phone",
    "location",
    "linkedin",
    "website",
    "profession",
    "image",
];

const EXPERIENCE_KEYS: &[&str] = &[
    "position",
    "role",
    "title",
    "company",
    "start_date",
    "startDate",
    "end_date",
    "endDate",
    "is_current",
    "description",
];

const PROJECT_KEYS: &[&str] = &["name", "description"];

const EDUCATION_KEYS: &[&str] = &[
    "institution",
    "degree",
    "field",
    "graduation_date",
    "graduationDate",
    "gpa",
];

/// Normalizes a raw resume record. Never fails.
pub fn normalize(record: &Value) -> SanitizedViewModel {
    let root = as_object(Some(record));

    SanitizedViewModel {
        personal_info: normalize_personal_info(root.get("personal_info")),
        professional_summary: text(root.get("professional_summary")),
        experience: objects(root.get("experience"))
            .map(normalize_experience)
            .collect(),
        project: objects(root.get("project")).map(normalize_project).collect(),
        education: objects(root.get("education"))
            .map(normalize_education)
            .collect(),
        skills: strings(root.get("skills")),
        extra: remaining(root, TOP_LEVEL_KEYS),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section canonicalization
// ────────────────────────────────────────────────────────────────────────────

fn normalize_personal_info(value: Option<&Value>) -> PersonalInfo {
    let info = as_object(value);

    PersonalInfo {
        full_name: text(info.get("full_name")),
        email: text(info.get("email")),
        phone: text(info.get("phone")),
        location: text(info.get("location")),
        linkedin: strip_legacy_linkedin(&text(info.get("linkedin"))).to_string(),
        website: text(info.get("website")),
        profession: text(info.get("profession")),
        image: info
            .get("image")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from),
        extra: remaining(info, PERSONAL_INFO_KEYS),
    }
}

fn normalize_experience(entry: &Map<String, Value>) -> ExperienceEntry {
    let is_current = entry
        .get("is_current")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut end_date = first_text(entry, &["end_date", "endDate"]);
    if is_current && end_date.is_empty() {
        end_date = PRESENT.to_string();
    }

    ExperienceEntry {
        position: first_text(entry, &["position", "role", "title"]),
        company: text(entry.get("company")),
        start_date: first_text(entry, &["start_date", "startDate"]),
        end_date,
        is_current,
        description: description(entry.get("description")),
        extra: remaining(entry, EXPERIENCE_KEYS),
    }
}

fn normalize_project(entry: &Map<String, Value>) -> ProjectEntry {
    ProjectEntry {
        name: text(entry.get("name")),
        description: description(entry.get("description")),
        extra: remaining(entry, PROJECT_KEYS),
    }
}

fn normalize_education(entry: &Map<String, Value>) -> EducationEntry {
    EducationEntry {
        institution: text(entry.get("institution")),
        degree: text(entry.get("degree")),
        field: text(entry.get("field")),
        graduation_date: first_text(entry, &["graduation_date", "graduationDate"]),
        gpa: scalar_text(entry.get("gpa")),
        extra: remaining(entry, EDUCATION_KEYS),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field canonicalization helpers
// ────────────────────────────────────────────────────────────────────────────

/// Strips every leading `linked:` so that re-normalizing is a no-op.
pub fn strip_legacy_linkedin(raw: &str) -> &str {
    let mut handle = raw;
    while let Some(rest) = handle.strip_prefix(LEGACY_LINKEDIN_PREFIX) {
        handle = rest;
    }
    handle
}

/// A description is either one string with embedded line breaks or a list of lines.
fn description(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn text(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Like [`text`], but numbers are rendered too (GPA is stored both ways).
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// First non-empty string among `keys`, in order.
fn first_text(map: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn as_object(value: Option<&Value>) -> &Map<String, Value> {
    static EMPTY: once_cell::sync::Lazy<Map<String, Value>> = once_cell::sync::Lazy::new(Map::new);
    value.and_then(Value::as_object).unwrap_or(&EMPTY)
}

/// Entries of a list field. Non-list values yield nothing; non-object items are
/// kept as empty entries so list positions stay stable.
fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .map(|item| as_object(Some(item)))
}

fn remaining(map: &Map<String, Value>, owned: &[&str]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !owned.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renormalize(view: &SanitizedViewModel) -> SanitizedViewModel {
        normalize(&serde_json::to_value(view).unwrap())
    }

    #[test]
    fn test_empty_record() {
        let view = normalize(&json!({}));
        assert_eq!(view, SanitizedViewModel::default());
    }

    #[test]
    fn test_malformed_shapes_degrade() {
        let inputs = [
            json!(null),
            json!([]),
            json!("resume"),
            json!({"personal_info": null}),
            json!({"experience": "not an array"}),
            json!({"experience": [null, 3, "x"]}),
            json!({"education": {"institution": "MIT"}}),
            json!({"skills": "Go, Rust"}),
            json!({"project": [{"description": 42}]}),
        ];
        for input in &inputs {
            let view = normalize(input);
            assert!(view.skills.is_empty(), "input: {input}");
        }

        assert!(normalize(&json!({"experience": "not an array"}))
            .experience
            .is_empty());
        assert!(normalize(&json!({"education": {"institution": "MIT"}}))
            .education
            .is_empty());
        assert_eq!(
            normalize(&json!({"project": [{"description": 42}]})).project[0].description,
            ""
        );
    }

    #[test]
    fn test_non_object_entries_kept_as_empty() {
        let view = normalize(&json!({"experience": [null, {"company": "Acme"}]}));
        assert_eq!(view.experience.len(), 2);
        assert_eq!(view.experience[0], ExperienceEntry::default());
        assert_eq!(view.experience[1].company, "Acme");
    }

    #[test]
    fn test_linkedin_prefix_stripped() {
        let view = normalize(&json!({"personal_info": {"linkedin": "linked:jdoe"}}));
        assert_eq!(view.personal_info.linkedin, "jdoe");
    }

    #[test]
    fn test_linkedin_clean_value_untouched() {
        let view = normalize(&json!({"personal_info": {"linkedin": "jdoe"}}));
        assert_eq!(view.personal_info.linkedin, "jdoe");

        let view = normalize(&json!({"personal_info": {"linkedin": "jdoe-linked:x"}}));
        assert_eq!(view.personal_info.linkedin, "jdoe-linked:x");
    }

    #[test]
    fn test_linkedin_repeated_prefix_is_fixed_point() {
        let view = normalize(&json!({"personal_info": {"linkedin": "linked:linked:jdoe"}}));
        assert_eq!(view.personal_info.linkedin, "jdoe");
        assert_eq!(renormalize(&view), view);
    }

    #[test]
    fn test_personal_info_extras_pass_through() {
        let view = normalize(&json!({
            "personal_info": {"full_name": "Jane", "github": "jane-gh", "image": {"blob": true}}
        }));
        assert_eq!(view.personal_info.full_name, "Jane");
        assert_eq!(view.personal_info.extra["github"], "jane-gh");
        assert_eq!(view.personal_info.image, None);
        assert!(!view.personal_info.extra.contains_key("image"));
    }

    #[test]
    fn test_position_from_role() {
        let view = normalize(&json!({"experience": [{"role": "Eng"}]}));
        assert_eq!(view.experience[0].position, "Eng");
    }

    #[test]
    fn test_position_first_present_wins() {
        let view = normalize(&json!({"experience": [{"position": "Lead", "role": "Eng"}]}));
        assert_eq!(view.experience[0].position, "Lead");

        let view = normalize(&json!({"experience": [{"position": "", "title": "Staff"}]}));
        assert_eq!(view.experience[0].position, "Staff");

        let view = normalize(&json!({"experience": [{"position": null, "role": 7}]}));
        assert_eq!(view.experience[0].position, "");
    }

    #[test]
    fn test_date_field_spellings() {
        let view = normalize(&json!({
            "experience": [{"startDate": "2020-01", "end_date": "2021-06"}],
            "education": [{"graduationDate": "2019-05"}]
        }));
        assert_eq!(view.experience[0].start_date, "2020-01");
        assert_eq!(view.experience[0].end_date, "2021-06");
        assert_eq!(view.education[0].graduation_date, "2019-05");
        assert!(!view.experience[0].extra.contains_key("startDate"));
    }

    #[test]
    fn test_current_role_ends_present() {
        let view = normalize(&json!({"experience": [{"start_date": "2022-01", "is_current": true}]}));
        assert_eq!(view.experience[0].end_date, PRESENT);
        assert!(view.experience[0].is_current);
    }

    #[test]
    fn test_current_role_keeps_explicit_end() {
        let view = normalize(&json!({
            "experience": [{"endDate": "2024-03", "is_current": true}]
        }));
        assert_eq!(view.experience[0].end_date, "2024-03");
    }

    #[test]
    fn test_description_array_and_string_converge() {
        let from_array = normalize(&json!({"experience": [{"description": ["a", "b"]}]}));
        let from_string = normalize(&json!({"experience": [{"description": "a\nb"}]}));
        assert_eq!(from_array.experience[0].description, "a\nb");
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn test_project_description_joined_and_extras_kept() {
        let view = normalize(&json!({
            "project": [{"name": "Site", "description": ["x", "y"], "type": "web", "link": "https://x.dev"}]
        }));
        let project = &view.project[0];
        assert_eq!(project.description, "x\ny");
        assert_eq!(project.extra["type"], "web");
        assert_eq!(project.link(), Some("https://x.dev"));
    }

    #[test]
    fn test_education_entries_never_dropped() {
        let view = normalize(&json!({"education": [{"institution": ""}, {"institution": "MIT", "gpa": 3.9}]}));
        assert_eq!(view.education.len(), 2);
        assert_eq!(view.education[1].gpa, "3.9");
    }

    #[test]
    fn test_skills_keep_strings_only() {
        let view = normalize(&json!({"skills": ["Go", 1, null, "Rust"]}));
        assert_eq!(view.skills, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_top_level_extras_pass_through() {
        let view = normalize(&json!({"title": "Backend CV", "template": "modern"}));
        assert_eq!(view.extra["title"], "Backend CV");
        assert_eq!(view.extra["template"], "modern");
    }

    #[test]
    fn test_idempotent_on_legacy_record() {
        let raw = json!({
            "title": "CV",
            "personal_info": {"full_name": "Jane Doe", "linkedin": "linked:janedoe", "image": "https://img"},
            "professional_summary": "Builder.",
            "experience": [
                {"role": "Engineer", "company": "Acme", "start_date": "2022-01", "is_current": true,
                 "description": ["Built X", "Shipped Y"], "location": "Berlin"},
                {"title": "Intern", "startDate": "2020-06", "endDate": "2020-09", "description": "one\n\ntwo"}
            ],
            "project": [{"name": "P", "description": ["a"], "link": "l"}],
            "education": [{"institution": "MIT", "graduationDate": "2019", "gpa": 4}],
            "skills": ["Go", "Rust"]
        });
        let once = normalize(&raw);
        assert_eq!(renormalize(&once), once);
        assert_eq!(once.experience[0].extra_text("location"), Some("Berlin"));
    }

    #[test]
    fn test_idempotent_on_malformed_record() {
        for raw in [
            json!({}),
            json!({"personal_info": null, "experience": "nope", "skills": null}),
            json!({"experience": [1, {"description": [1, "a"]}]}),
        ] {
            let once = normalize(&raw);
            assert_eq!(renormalize(&once), once);
        }
    }
}
