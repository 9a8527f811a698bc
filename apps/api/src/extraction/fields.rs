//! Rule-based field extraction over the plain text of a résumé.
//!
//! Every field is best-effort: a miss yields `None`, never an error.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};

use crate::extraction::vocabulary::{
    COMPANY_SUFFIXES, DEGREES, DESIGNATIONS, EXPERIENCE_HEADINGS, OTHER_HEADINGS, SKILLS,
};
use crate::models::resume::ExtractedFields;

/// The name is only looked for near the top of the document.
const NAME_SCAN_LINES: usize = 5;

/// Longer experience lines are treated as prose, not as a role/employer header.
const MAX_HEADER_WORDS: usize = 12;

const BULLETS: &[char] = &['•', '-', '*', '–', '▪', '●', '○', '◦', '·', '>'];

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[ .-]?)?(?:\(\d{2,4}\)[ .-]?)?\d[\d \t.-]{5,}\d").unwrap()
});

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i){}\s*(?:-|–|—|to)\s*(?:{}|(?P<open>present|current|now|today|till date))",
        date_pattern('s'),
        date_pattern('e'),
    ))
    .unwrap()
});

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| SKILLS.iter().map(|s| (*s, term_regex(s))).collect());

static DEGREE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| DEGREES.iter().map(|d| term_regex(d)).collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Experience,
    Other,
}

/// Pulls the nine résumé fields out of `text`. `today` closes open-ended
/// date ranges such as "2019 - Present".
pub fn parse_fields(text: &str, today: NaiveDate) -> ExtractedFields {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let experience = experience_lines(&lines);
    let headers: Vec<&str> = experience
        .iter()
        .copied()
        .filter(|l| is_entry_header(l))
        .collect();

    ExtractedFields {
        name: find_name(&lines),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: find_phone(text),
        skills: non_empty(find_skills(text)),
        education: non_empty(find_education(&lines)),
        experience: non_empty(experience.iter().map(|l| l.to_string()).collect()),
        companies: non_empty(lines_with_word(&headers, COMPANY_SUFFIXES)),
        designation: non_empty(lines_with_word(&headers, DESIGNATIONS)),
        total_experience: Some(total_experience_years(&experience, today)),
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Whole-word matcher. Short terms ("R", "Go", "MBA") are case-sensitive so
/// they do not fire on ordinary words.
fn term_regex(term: &str) -> Regex {
    let escaped = regex::escape(term);
    let body = if term.chars().count() <= 3 {
        escaped
    } else {
        format!("(?i:{escaped})")
    };
    Regex::new(&format!(r"(?:^|[^\p{{L}}\p{{N}}]){body}(?:[^\p{{L}}\p{{N}}]|$)")).unwrap()
}

fn date_pattern(side: char) -> String {
    let months = MONTHS.join("|");
    format!(
        r"(?:\b(?P<{side}mon>{months})[a-z]*\.?\s+(?P<{side}my>\d{{4}})|(?P<{side}num>\d{{1,2}})/(?P<{side}ny>\d{{4}})|\b(?P<{side}yr>\d{{4}})\b)"
    )
}

fn section_of(line: &str) -> Option<Section> {
    let normalized = line.trim().trim_end_matches(':').trim().to_lowercase();
    if EXPERIENCE_HEADINGS.contains(&normalized.as_str()) {
        Some(Section::Experience)
    } else if OTHER_HEADINGS.contains(&normalized.as_str()) {
        Some(Section::Other)
    } else {
        None
    }
}

/// Lines under any experience-style heading, up to the next heading.
fn experience_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut in_section = false;
    let mut out = Vec::new();
    for line in lines {
        match section_of(line) {
            Some(Section::Experience) => in_section = true,
            Some(Section::Other) => in_section = false,
            None if in_section => out.push(*line),
            None => {}
        }
    }
    out
}

fn find_name(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find(|l| section_of(l).is_none() && looks_like_name(l))
        .map(|l| l.to_string())
}

fn looks_like_name(line: &str) -> bool {
    let lower = line.to_lowercase();
    if matches!(lower.as_str(), "resume" | "résumé" | "curriculum vitae") {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) || has_word(line, DESIGNATIONS) {
        return false;
    }
    words.iter().all(|w| {
        w.chars().next().is_some_and(char::is_uppercase)
            && w
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
    })
}

fn find_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            (10..=15).contains(&digits)
        })
        .map(str::to_string)
}

/// Skills in order of first appearance in the text.
fn find_skills(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = SKILL_PATTERNS
        .iter()
        .filter_map(|(skill, re)| re.find(text).map(|m| (m.start(), *skill)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, s)| s.to_string()).collect()
}

fn find_education(lines: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in lines {
        let names_degree = DEGREE_PATTERNS.iter().any(|re| re.is_match(line));
        if names_degree && !out.iter().any(|l| l.as_str() == *line) {
            out.push(line.to_string());
        }
    }
    out
}

fn is_entry_header(line: &str) -> bool {
    !line.starts_with(BULLETS) && line.split_whitespace().count() <= MAX_HEADER_WORDS
}

fn has_word(line: &str, vocabulary: &[&str]) -> bool {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| vocabulary.contains(&w.to_lowercase().as_str()))
}

fn lines_with_word(lines: &[&str], vocabulary: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| has_word(l, vocabulary))
        .map(|l| l.to_string())
        .collect()
}

/// Sums every date range in the experience lines. Overlapping ranges are
/// counted twice; a year without a month counts from January.
fn total_experience_years(lines: &[&str], today: NaiveDate) -> f64 {
    let months: i64 = lines
        .iter()
        .flat_map(|l| DATE_RANGE.captures_iter(l))
        .filter_map(|caps| range_months(&caps, today))
        .map(i64::from)
        .fold(0, i64::saturating_add);
    (months as f64 / 12.0 * 100.0).round() / 100.0
}

fn range_months(caps: &Captures<'_>, today: NaiveDate) -> Option<i32> {
    let (start_year, start_month) = date_point(caps, 's')?;
    let (end_year, end_month) = if caps.name("open").is_some() {
        (today.year(), today.month() as i32)
    } else {
        date_point(caps, 'e')?
    };
    Some(((end_year - start_year) * 12 + (end_month - start_month)).max(0))
}

fn date_point(caps: &Captures<'_>, side: char) -> Option<(i32, i32)> {
    let group = |suffix: &str| caps.name(&format!("{side}{suffix}")).map(|m| m.as_str());

    if let (Some(month), Some(year)) = (group("mon"), group("my")) {
        return Some((year.parse().ok()?, month_index(month)?));
    }
    if let (Some(month), Some(year)) = (group("num"), group("ny")) {
        let month: i32 = month.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        return Some((year.parse().ok()?, month));
    }
    let year: i32 = group("yr")?.parse().ok()?;
    Some((year, 1))
}

fn month_index(name: &str) -> Option<i32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Grace Hopper
Arlington, Virginia
grace.hopper@navy.example | +1 555 010 2030

Summary
Computer scientist fluent in COBOL, Python and Rust with a taste for Distributed Systems.

Work Experience
Senior Software Engineer, Acme Technologies Inc (Jan 2019 - Mar 2021)
• Led a team of 5 building Kubernetes tooling in Go
Intern, Globex Corp 06/2018 – 12/2018
- Wrote SQL reports

Education
PhD Mathematics, Yale University
B.Sc Mathematics, Vassar College

Skills
Leadership, Docker, PostgreSQL
";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_contact_fields() {
        let fields = parse_fields(RESUME, today());
        assert_eq!(fields.name.as_deref(), Some("Grace Hopper"));
        assert_eq!(fields.email.as_deref(), Some("grace.hopper@navy.example"));
        assert_eq!(fields.phone.as_deref(), Some("+1 555 010 2030"));
    }

    #[test]
    fn test_skills_in_order_of_appearance() {
        let fields = parse_fields(RESUME, today());
        assert_eq!(
            fields.skills.unwrap(),
            vec![
                "COBOL",
                "Python",
                "Rust",
                "Distributed Systems",
                "Kubernetes",
                "Go",
                "SQL",
                "Leadership",
                "Docker",
                "PostgreSQL",
            ]
        );
    }

    #[test]
    fn test_short_skills_need_exact_case_and_word_boundaries() {
        let skills = find_skills("Good at javascript, also R and Java.");
        assert_eq!(skills, vec!["JavaScript", "R", "Java"]);
    }

    #[test]
    fn test_experience_section_stops_at_next_heading() {
        let fields = parse_fields(RESUME, today());
        let experience = fields.experience.unwrap();
        assert_eq!(experience.len(), 4);
        assert!(experience[0].starts_with("Senior Software Engineer"));
        assert!(!experience.iter().any(|l| l.contains("Yale")));
    }

    #[test]
    fn test_companies_and_designations_skip_bullets() {
        let fields = parse_fields(RESUME, today());
        assert_eq!(
            fields.companies.unwrap(),
            vec![
                "Senior Software Engineer, Acme Technologies Inc (Jan 2019 - Mar 2021)",
                "Intern, Globex Corp 06/2018 – 12/2018",
            ]
        );
        assert_eq!(fields.designation.unwrap().len(), 2);
    }

    #[test]
    fn test_education_lines() {
        let fields = parse_fields(RESUME, today());
        assert_eq!(
            fields.education.unwrap(),
            vec![
                "PhD Mathematics, Yale University",
                "B.Sc Mathematics, Vassar College"
            ]
        );
    }

    #[test]
    fn test_total_experience_sums_ranges() {
        // 26 months + 6 months
        let fields = parse_fields(RESUME, today());
        assert_eq!(fields.total_experience, Some(2.67));
    }

    #[test]
    fn test_open_ended_and_year_only_ranges() {
        let lines = ["Engineer, Initech 2015 - Present", "Analyst 2012 to 2014"];
        let today = NaiveDate::from_ymd_opt(2020, 7, 15).unwrap();
        // 66 months + 24 months
        assert_eq!(total_experience_years(&lines, today), 7.5);
    }

    #[test]
    fn test_plain_text_without_sections() {
        let fields = parse_fields("just some words about nothing", today());
        assert_eq!(fields.name, None);
        assert_eq!(fields.email, None);
        assert_eq!(fields.phone, None);
        assert_eq!(fields.skills, None);
        assert_eq!(fields.experience, None);
        assert_eq!(fields.companies, None);
        assert_eq!(fields.total_experience, Some(0.0));
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        assert_eq!(find_phone("Class of 2019 - 2021"), None);
        assert_eq!(
            find_phone("Call (555) 123-4567 today").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_name_skips_titles_and_headings() {
        let lines = ["Curriculum Vitae", "Software Engineer", "Alan Turing"];
        assert_eq!(find_name(&lines).as_deref(), Some("Alan Turing"));
    }

    #[test]
    fn test_total_experience_beyond_i32_months() {
        let line = "1000 - 9999 ".repeat(20_000);
        let total = total_experience_years(&[line.as_str()], today());
        assert_eq!(total, 179_980_000.0);
    }
}
