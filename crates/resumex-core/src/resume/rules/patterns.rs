//! Common regex patterns for candidate field extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::candidate::Degree;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Labeled phone: "Phone: ...", "tel 555...", "Mobile number ..."
    pub static ref PHONE_LABELED: Regex = Regex::new(
        r"(?i)\b(?:phone|telephone|tel|mobile|cell)(?:\s+(?:number|no\.?))?\s*[:.]?\s*([+(]?\d[\d\s()+.-]{5,23}\d)"
    ).unwrap();

    // Unlabeled phone shapes, tried in order
    pub static ref PHONE_SHAPES: Vec<Regex> = vec![
        // North American: (555) 123-4567 or 555-123-4567
        Regex::new(r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}\b|\b\d{3}[-.]\d{3}[-.]\d{4}\b").unwrap(),
        // Bare 10-digit run
        Regex::new(r"\b\d{10}\b").unwrap(),
        // International, compact: +48123456789
        Regex::new(r"\+\d{1,3}\d{6,14}\b").unwrap(),
        // International with parenthesized area code: +44 (20) 7946 0958
        Regex::new(r"\+\d{1,3}\s*\(\d{1,4}\)[\d\s.-]{5,14}\d").unwrap(),
        // Generic international: +48 12 345 67 89 or 0048 ...
        Regex::new(r"(?:\+|\b00)\d{1,3}[\s.-]\d{1,4}(?:[\s.-]\d{2,6}){1,4}\b").unwrap(),
        // Spaced digit groups: 555 123 4567
        Regex::new(r"\b\d{2,4}(?:\s\d{2,4}){2,5}\b").unwrap(),
    ];

    // Personal information section headers
    pub static ref PERSONAL_SECTION: Regex = Regex::new(
        r"(?i)\b(?:personal\s+(?:information|details|data)|contact\s+information|contact)\b"
    ).unwrap();

    // "Name:" / "Full Name:" labels
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)\b(?:full\s+)?name\s*:\s*([^\n]{2,60})"
    ).unwrap();

    // "Candidate:" labels
    pub static ref CANDIDATE_LABEL: Regex = Regex::new(
        r"(?i)\bcandidate\s*:\s*([^\n]{2,60})"
    ).unwrap();

    // "Resume of Jane Doe" / "Curriculum Vitae of Jane Doe" / "CV of ..."
    pub static ref RESUME_OF: Regex = Regex::new(
        r"(?:(?i:r[ée]sum[ée]|curriculum\s+vitae)|CV)\s+(?i:of)\s+([A-Z][a-zA-Z.'-]+(?:\s+[A-Z][a-zA-Z.'-]+)+)"
    ).unwrap();

    // A lone capitalized multi-word line
    pub static ref NAME_LINE: Regex = Regex::new(
        r"(?m)^[ \t]*([A-Z][a-zA-Z.'-]+(?:[ \t]+[A-Z][a-zA-Z.'-]+){1,3})[ \t]*$"
    ).unwrap();

    // Capitalized phrase closely followed by contact vocabulary
    pub static ref NAME_BEFORE_CONTACT: Regex = Regex::new(
        r"([A-Z][a-zA-Z.'-]+(?:[ \t]+[A-Z][a-zA-Z.'-]+){1,3})[\s,|-]{1,10}(?i:e-?mail|phone|address|contact)\b"
    ).unwrap();

    // Generic 1-2 capitalized words + capitalized word
    pub static ref NAME_SHAPE: Regex = Regex::new(
        r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})\b"
    ).unwrap();

    // Any run of two or more capitalized tokens
    pub static ref CAPITALIZED_RUN: Regex = Regex::new(
        r"([A-Z][a-zA-Z'-]+(?:[ \t]+[A-Z][a-zA-Z.'-]+)+)"
    ).unwrap();

    // Auto-generated resume file names: Resume202504170332
    pub static ref GENERATED_FILENAME: Regex = Regex::new(
        r"(?i)^resume[\s_-]?\d{6,}$"
    ).unwrap();

    pub static ref RESUME_PREFIX: Regex = Regex::new(
        r"(?i)^resume[\s_-]?"
    ).unwrap();

    // Education section headers
    pub static ref EDUCATION_SECTION: Regex = Regex::new(
        r"(?i)\b(?:education|academic(?:\s+background)?|qualifications?|degrees?)\s*[:\n]"
    ).unwrap();

    // Degree tiers, checked in this order; first match wins
    pub static ref DEGREE_TIERS: Vec<(Degree, Regex)> = vec![
        (
            Degree::Bachelor,
            Regex::new(r"(?:(?i:bachelor(?:['’]s)?)|\bB\.?A\.?\b|\bB\.?Sc?\.?\b|\bB\.?Ed\.?\b)").unwrap(),
        ),
        (
            Degree::Master,
            Regex::new(r"(?:(?i:master(?:['’]s)?)|\bM\.?A\.?\b|\bM\.?Sc?\.?\b|\bM\.?Ed\.?\b|\bMBA\b)").unwrap(),
        ),
        (
            Degree::Phd,
            Regex::new(r"(?:(?i:\bph\.?\s?d\.?|doctorate|doctoral)|\bEd\.?D\.?\b|\bD\.?Phil\.?\b)").unwrap(),
        ),
        (
            Degree::Associate,
            Regex::new(r"(?:(?i:associate(?:['’]s)?\s+(?:degree|of))|\bA\.?A\.?\b)").unwrap(),
        ),
        (
            Degree::HighSchool,
            Regex::new(r"(?i)(?:high\s+school(?:\s+diploma)?|secondary\s+school|\bGED\b)").unwrap(),
        ),
    ];

    // Labeled degree field: "major in X", "degree: X"
    pub static ref FIELD_LABELED: Regex = Regex::new(
        r"(?i)\b(?:degree|major|concentration|specialization)(?:\s+(?:in|of)|\s*:)\s*(.{2,60}?)(?:\s+from\b|[.,\n]|$)"
    ).unwrap();

    // Degree-tier word followed by a field: "Bachelor of Arts in X"
    pub static ref TIER_FIELD: Regex = Regex::new(
        r"(?i)\b(?:bachelor(?:['’]s)?|master(?:['’]s)?|ph\.?\s?d\.?|doctorate|diploma|b\.?a\.?|m\.?a\.?|b\.?sc?\.?|m\.?sc?\.?)\s+(?:in|of)\s+(.{2,60}?)(?:\s+from\b|[.,\n]|$)"
    ).unwrap();

    // Field canonicalization keywords, checked in this order
    pub static ref FIELD_KEYWORDS: Vec<(&'static str, Regex)> = vec![
        (
            "English",
            Regex::new(r"(?i)\b(?:english|tesl|tesol|linguistics|language\s+teaching)\b").unwrap(),
        ),
        (
            "Literature",
            Regex::new(r"(?i)\b(?:literature|literary\s+studies)\b").unwrap(),
        ),
        (
            "Education",
            Regex::new(r"(?i)\b(?:education|teaching|instructional\s+design)\b").unwrap(),
        ),
        (
            "Linguistics",
            Regex::new(r"(?i)\b(?:applied\s+linguistics|language\s+acquisition)\b").unwrap(),
        ),
    ];

    // Years of experience, tried in order
    pub static ref YEARS_PATTERNS: Vec<Regex> = vec![
        // "5 years of teaching experience", "10+ years experience"
        Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?(?:\s+of)?(?:\s+\w+){0,3}\s+experience\b").unwrap(),
        // "experience: 5 years", "experience spanning 12 years"
        Regex::new(r"(?i)\bexperience\b.{0,40}?(\d{1,2})\s*\+?\s*years?\b").unwrap(),
        // "professional experience of 8 years"
        Regex::new(r"(?i)\b(?:professional|work|industry)\s+experience\b.{0,40}?(\d{1,2})\s*\+?\s*years?\b").unwrap(),
    ];

    // Certification keywords
    pub static ref CERT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bTEFL\b").unwrap(),
        Regex::new(r"(?i)\bTESOL\b").unwrap(),
        Regex::new(r"(?i)\bCELTA\b").unwrap(),
        Regex::new(r"(?i)\bDELTA\b").unwrap(),
        Regex::new(r"(?i)\bteaching\s+certifi(?:cate|cation)\b").unwrap(),
        Regex::new(r"(?i)\bcertified\b(?:\s+\w+){0,3}").unwrap(),
        Regex::new(r"(?i)\bcertificate\s+in\b(?:\s+\w+){0,3}").unwrap(),
    ];

    // Native-speaker declarations
    pub static ref NATIVE_SPEAKER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bnative\s+(?:english|language)\s+speaker\b").unwrap(),
        Regex::new(r"(?i)\benglish\s+(?:native|mother)\s+(?:speaker|tongue)\b").unwrap(),
        Regex::new(r"(?i)\bfirst\s+language\s*:?\s*english\b").unwrap(),
        Regex::new(r"(?i)\bL1\s*:?\s*english\b").unwrap(),
    ];

    // Military service indicators
    pub static ref MILITARY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:army|navy|air\s+force|marine(?:s|\s+corps)?|coast\s+guard|national\s+guard)\b").unwrap(),
        Regex::new(r"(?i)\bveteran\b").unwrap(),
        Regex::new(r"(?i)\bserved\s+(?:in|with)\b.{0,30}?\b(?:military|armed\s+forces|forces)\b").unwrap(),
    ];
}
