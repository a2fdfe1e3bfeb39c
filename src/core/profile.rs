use serde::{Deserialize, Serialize};

/// Grade band the teacher works with. Wire values match the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradeBand {
    #[serde(rename = "K-2")]
    K2,
    #[default]
    #[serde(rename = "3-5")]
    Elementary,
    #[serde(rename = "6-8")]
    MiddleSchool,
    #[serde(rename = "9-12")]
    HighSchool,
    #[serde(rename = "higher-ed")]
    HigherEd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    #[default]
    Math,
    Science,
    LanguageArts,
    SocialStudies,
    ForeignLanguage,
    Art,
    Music,
    PhysicalEducation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderDistribution {
    #[default]
    #[serde(rename = "Even")]
    Even,
    #[serde(rename = "More Boys")]
    MoreBoys,
    #[serde(rename = "More Girls")]
    MoreGirls,
    #[serde(rename = "All Boys")]
    AllBoys,
    #[serde(rename = "All Girls")]
    AllGirls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompetenceLevel {
    #[serde(rename = "Below Grade Level")]
    BelowGradeLevel,
    #[default]
    #[serde(rename = "At Grade Level")]
    AtGradeLevel,
    #[serde(rename = "Mixed")]
    Mixed,
    #[serde(rename = "Above Grade Level")]
    AboveGradeLevel,
}

/// Classroom profile collected by the intake step. Read-only afterward;
/// there is no identity beyond the active session.
///
/// Every field is defaulted so a partial blob from an older intake page
/// still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherProfile {
    pub name: String,
    pub grade: GradeBand,
    pub subject: Subject,
    /// Free text, comma-separated topics.
    pub topics: String,
    pub language: String,
    pub years_teaching: u32,
    pub student_count: u32,
    pub gender_distribution: GenderDistribution,
    /// Expected attendance, percent.
    pub attendance: u8,
    pub competence_level: CompetenceLevel,
    pub challenges: Vec<String>,
    pub other_challenge: String,
}

impl Default for TeacherProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            grade: GradeBand::default(),
            subject: Subject::default(),
            topics: String::new(),
            language: "English".to_string(),
            years_teaching: 5,
            student_count: 25,
            gender_distribution: GenderDistribution::default(),
            attendance: 90,
            competence_level: CompetenceLevel::default(),
            challenges: Vec::new(),
            other_challenge: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_intake_form_values() {
        let profile: TeacherProfile = serde_json::from_str(
            r#"{
                "name": "Ms. Rivera",
                "grade": "6-8",
                "subject": "language-arts",
                "topics": "evidence-based writing",
                "language": "English",
                "yearsTeaching": 12,
                "studentCount": 31,
                "genderDistribution": "More Girls",
                "attendance": 85,
                "competenceLevel": "Mixed",
                "challenges": ["Student engagement"],
                "otherChallenge": ""
            }"#,
        )
        .expect("full profile");

        assert_eq!(profile.grade, GradeBand::MiddleSchool);
        assert_eq!(profile.subject, Subject::LanguageArts);
        assert_eq!(profile.gender_distribution, GenderDistribution::MoreGirls);
        assert_eq!(profile.competence_level, CompetenceLevel::Mixed);
        assert_eq!(profile.years_teaching, 12);
    }

    #[test]
    fn fills_missing_fields_from_defaults() {
        let profile: TeacherProfile =
            serde_json::from_str(r#"{"subject": "math", "grade": "3-5", "topics": "fractions"}"#)
                .expect("partial profile");

        assert_eq!(profile.subject, Subject::Math);
        assert_eq!(profile.grade, GradeBand::Elementary);
        assert_eq!(profile.topics, "fractions");
        assert_eq!(profile.language, "English");
        assert_eq!(profile.attendance, 90);
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(TeacherProfile::default()).expect("serialize");
        assert!(value.get("yearsTeaching").is_some());
        assert!(value.get("genderDistribution").is_some());
        assert_eq!(value["competenceLevel"], "At Grade Level");
    }
}
