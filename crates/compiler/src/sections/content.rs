//! Per-section content compilation.
//!
//! Each section id dispatches to a compiler that turns the matching slice of
//! the résumé record into a renderer-shaped payload, with item-level
//! overrides applied field by field. When no record is supplied (preview
//! mode) or the id is unrecognized, a deterministic placeholder payload is
//! returned instead, so preview rendering never fails for missing data.

use serde_json::{json, Value};

use crate::dsl::document::ItemOverride;
use crate::models::resume::ResumeRecord;

/// Section ids with a dedicated compiler. "references" also answers to the
/// legacy "recommendations" id.
pub const KNOWN_SECTION_IDS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "languages",
    "projects",
    "certifications",
    "awards",
    "interests",
    "references",
];

/// Compiles the data payload for one placed section. Never fails and never
/// mutates its inputs.
pub fn compile_section_data(
    section_id: &str,
    resume: Option<&ResumeRecord>,
    overrides: &[ItemOverride],
) -> Value {
    let mut payload = match resume {
        Some(record) => compile_from_record(section_id, record),
        None => placeholder_data(section_id),
    };
    if let Some(items) = payload.get_mut("items").and_then(Value::as_array_mut) {
        apply_overrides(items, overrides);
    }
    payload
}

fn compile_from_record(section_id: &str, record: &ResumeRecord) -> Value {
    match section_id {
        "summary" => json!({
            "text": record.summary.clone().unwrap_or_default(),
        }),
        "experience" => json!({
            "items": record
                .experiences
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id,
                        "role": e.role,
                        "company": e.company,
                        "location": e.location,
                        "startDate": e.start_date,
                        "endDate": e.end_date,
                        "current": e.current,
                        "bullets": e.bullets,
                    })
                })
                .collect::<Vec<_>>(),
        }),
        "education" => json!({
            "items": record
                .education
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id,
                        "institution": e.institution,
                        "degree": e.degree,
                        "field": e.field,
                        "startDate": e.start_date,
                        "endDate": e.end_date,
                        "gpa": e.gpa,
                    })
                })
                .collect::<Vec<_>>(),
        }),
        "skills" => json!({
            "items": record
                .skill_groups
                .iter()
                .map(|g| json!({"id": g.id, "name": g.name, "skills": g.skills}))
                .collect::<Vec<_>>(),
        }),
        "languages" => json!({
            "items": record
                .languages
                .iter()
                .map(|l| json!({"id": l.id, "name": l.name, "level": l.level}))
                .collect::<Vec<_>>(),
        }),
        "projects" => json!({
            "items": record
                .projects
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "name": p.name,
                        "description": p.description,
                        "technologies": p.technologies,
                        "url": p.url,
                    })
                })
                .collect::<Vec<_>>(),
        }),
        "certifications" => json!({
            "items": record
                .certifications
                .iter()
                .map(|c| json!({"id": c.id, "name": c.name, "issuer": c.issuer, "date": c.date}))
                .collect::<Vec<_>>(),
        }),
        "awards" => json!({
            "items": record
                .awards
                .iter()
                .map(|a| {
                    json!({
                        "id": a.id,
                        "title": a.title,
                        "issuer": a.issuer,
                        "date": a.date,
                        "description": a.description,
                    })
                })
                .collect::<Vec<_>>(),
        }),
        "interests" => json!({
            "items": record
                .interests
                .iter()
                .map(|i| json!({"id": i.id, "name": i.name}))
                .collect::<Vec<_>>(),
        }),
        "references" | "recommendations" => json!({
            "items": record
                .recommendations
                .iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "author": r.author,
                        "role": r.role,
                        "company": r.company,
                        "text": r.text,
                    })
                })
                .collect::<Vec<_>>(),
        }),
        // Unrecognized id: the record has no slice for it.
        other => placeholder_data(other),
    }
}

/// Applies overrides to the compiled item list, in declaration order.
///
/// An override with an `item_id` matches the item whose `id` field equals
/// it; an override with only an `index` matches positionally. Unmatched
/// overrides are ignored. `set` fields replace matching item fields
/// outright; non-overridden fields pass through unchanged.
fn apply_overrides(items: &mut [Value], overrides: &[ItemOverride]) {
    for o in overrides {
        let target = if let Some(item_id) = o.item_id.as_deref() {
            items
                .iter_mut()
                .find(|item| item.get("id").and_then(Value::as_str) == Some(item_id))
        } else if let Some(index) = o.index {
            items.get_mut(index)
        } else {
            None
        };
        if let Some(Value::Object(fields)) = target {
            for (key, value) in &o.set {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Deterministic preview content for a section id. Unrecognized ids get an
/// empty item list so a renderer can still paint the section shell.
pub fn placeholder_data(section_id: &str) -> Value {
    match section_id {
        "summary" => json!({
            "text": "Seasoned professional with a track record of shipping \
                     measurable results across products and teams.",
        }),
        "experience" => json!({
            "items": [
                {
                    "id": "placeholder-experience-1",
                    "role": "Senior Software Engineer",
                    "company": "Acme Corp",
                    "location": "Berlin, DE",
                    "startDate": "2021-04",
                    "endDate": null,
                    "current": true,
                    "bullets": [
                        "Reduced API latency by 40% by introducing a caching layer",
                        "Led a team of 4 engineers through a zero-downtime migration",
                    ],
                },
                {
                    "id": "placeholder-experience-2",
                    "role": "Software Engineer",
                    "company": "Globex",
                    "location": "Remote",
                    "startDate": "2018-06",
                    "endDate": "2021-03",
                    "current": false,
                    "bullets": [
                        "Built 3 customer-facing services handling 10k requests/s",
                    ],
                },
            ],
        }),
        "education" => json!({
            "items": [{
                "id": "placeholder-education-1",
                "institution": "State University",
                "degree": "B.Sc.",
                "field": "Computer Science",
                "startDate": "2014-09",
                "endDate": "2018-05",
                "gpa": null,
            }],
        }),
        "skills" => json!({
            "items": [
                {"id": "placeholder-skills-1", "name": "Languages",
                 "skills": ["Rust", "TypeScript", "SQL"]},
                {"id": "placeholder-skills-2", "name": "Infrastructure",
                 "skills": ["PostgreSQL", "Kubernetes", "AWS"]},
            ],
        }),
        "languages" => json!({
            "items": [
                {"id": "placeholder-languages-1", "name": "English", "level": "Native"},
                {"id": "placeholder-languages-2", "name": "German", "level": "Professional"},
            ],
        }),
        "projects" => json!({
            "items": [{
                "id": "placeholder-projects-1",
                "name": "Open Source Scheduler",
                "description": "A distributed job scheduler with at-least-once delivery.",
                "technologies": ["Rust", "Redis"],
                "url": null,
            }],
        }),
        "certifications" => json!({
            "items": [{
                "id": "placeholder-certifications-1",
                "name": "AWS Solutions Architect",
                "issuer": "Amazon Web Services",
                "date": "2022-11",
            }],
        }),
        "awards" => json!({
            "items": [{
                "id": "placeholder-awards-1",
                "title": "Engineering Excellence Award",
                "issuer": "Acme Corp",
                "date": "2023",
                "description": null,
            }],
        }),
        "interests" => json!({
            "items": [
                {"id": "placeholder-interests-1", "name": "Photography"},
                {"id": "placeholder-interests-2", "name": "Trail running"},
                {"id": "placeholder-interests-3", "name": "Chess"},
            ],
        }),
        "references" | "recommendations" => json!({
            "items": [{
                "id": "placeholder-references-1",
                "author": "Jordan Meyer",
                "role": "Engineering Manager",
                "company": "Acme Corp",
                "text": "One of the most reliable engineers I have worked with.",
            }],
        }),
        _ => json!({"items": []}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn sample_record() -> ResumeRecord {
        let now = Utc::now();
        ResumeRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            slug: Some("jane-doe".to_string()),
            title: "Jane Doe — Backend Engineer".to_string(),
            summary: Some("Backend engineer focused on data-heavy systems.".to_string()),
            experiences: serde_json::from_value(json!([
                {"id": "exp-1", "role": "Backend Engineer", "company": "Initech",
                 "startDate": "2020-01", "current": true,
                 "bullets": ["Cut batch runtime from 4h to 20min"]},
                {"id": "exp-2", "role": "Junior Developer", "company": "Hooli",
                 "startDate": "2017-05", "endDate": "2019-12",
                 "bullets": []}
            ]))
            .unwrap(),
            education: vec![],
            skill_groups: serde_json::from_value(json!([
                {"id": "sk-1", "name": "Languages", "skills": ["Rust", "Python"]}
            ]))
            .unwrap(),
            languages: vec![],
            projects: vec![],
            certifications: vec![],
            awards: vec![],
            interests: vec![],
            recommendations: vec![],
            active_theme_id: Uuid::new_v4(),
            custom_theme: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_experience_compiles_from_record() {
        let data = compile_section_data("experience", Some(&sample_record()), &[]);
        let items = data["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["role"], "Backend Engineer");
        assert_eq!(items[0]["current"], true);
        assert_eq!(items[1]["endDate"], "2019-12");
    }

    #[test]
    fn test_summary_uses_record_text() {
        let data = compile_section_data("summary", Some(&sample_record()), &[]);
        assert_eq!(data["text"], "Backend engineer focused on data-heavy systems.");
    }

    #[test]
    fn test_override_matches_by_item_id() {
        let overrides: Vec<ItemOverride> = serde_json::from_value(json!([
            {"itemId": "exp-2", "set": {"role": "Software Engineer", "highlight": true}}
        ]))
        .unwrap();
        let data = compile_section_data("experience", Some(&sample_record()), &overrides);
        let items = data["items"].as_array().unwrap();
        assert_eq!(items[1]["role"], "Software Engineer");
        assert_eq!(items[1]["highlight"], true);
        // non-overridden fields pass through
        assert_eq!(items[1]["company"], "Hooli");
        // other items untouched
        assert_eq!(items[0]["role"], "Backend Engineer");
    }

    #[test]
    fn test_override_matches_by_index_when_no_id() {
        let overrides: Vec<ItemOverride> = serde_json::from_value(json!([
            {"index": 0, "set": {"company": "Initech GmbH"}}
        ]))
        .unwrap();
        let data = compile_section_data("experience", Some(&sample_record()), &overrides);
        assert_eq!(data["items"][0]["company"], "Initech GmbH");
    }

    #[test]
    fn test_unmatched_override_is_ignored() {
        let overrides: Vec<ItemOverride> = serde_json::from_value(json!([
            {"itemId": "no-such-item", "set": {"role": "CTO"}},
            {"index": 99, "set": {"role": "CTO"}},
            {"set": {"role": "CTO"}}
        ]))
        .unwrap();
        let data = compile_section_data("experience", Some(&sample_record()), &overrides);
        let items = data["items"].as_array().unwrap();
        assert!(items.iter().all(|i| i["role"] != "CTO"));
    }

    #[test]
    fn test_later_override_wins() {
        let overrides: Vec<ItemOverride> = serde_json::from_value(json!([
            {"itemId": "exp-1", "set": {"role": "First"}},
            {"itemId": "exp-1", "set": {"role": "Second"}}
        ]))
        .unwrap();
        let data = compile_section_data("experience", Some(&sample_record()), &overrides);
        assert_eq!(data["items"][0]["role"], "Second");
    }

    #[test]
    fn test_placeholder_mode_is_deterministic() {
        for id in KNOWN_SECTION_IDS {
            let a = compile_section_data(id, None, &[]);
            let b = compile_section_data(id, None, &[]);
            assert_eq!(a, b, "{id}");
        }
    }

    #[test]
    fn test_placeholder_never_empty_for_known_sections() {
        for id in KNOWN_SECTION_IDS {
            let data = placeholder_data(id);
            if *id == "summary" {
                assert!(!data["text"].as_str().unwrap().is_empty());
            } else {
                assert!(!data["items"].as_array().unwrap().is_empty(), "{id}");
            }
        }
    }

    #[test]
    fn test_unrecognized_section_id_gets_empty_items() {
        let data = compile_section_data("volunteering", Some(&sample_record()), &[]);
        assert_eq!(data, json!({"items": []}));
        let data = compile_section_data("volunteering", None, &[]);
        assert_eq!(data, json!({"items": []}));
    }

    #[test]
    fn test_recommendations_alias() {
        let a = compile_section_data("references", None, &[]);
        let b = compile_section_data("recommendations", None, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overrides_apply_to_placeholder_items() {
        let overrides: Vec<ItemOverride> = serde_json::from_value(json!([
            {"itemId": "placeholder-experience-1", "set": {"company": "Preview Inc"}}
        ]))
        .unwrap();
        let data = compile_section_data("experience", None, &overrides);
        assert_eq!(data["items"][0]["company"], "Preview Inc");
    }
}
