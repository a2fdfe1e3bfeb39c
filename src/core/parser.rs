//! Best-effort parser for the free-text feedback completion.
//!
//! The model is asked for a fixed template (section headers, dash bullets,
//! glyph-tagged domain lines) but is not a deterministic producer, so every
//! extraction here is independently optional: a missing or mangled section
//! yields an empty string or list, never an error. Implemented as a
//! tagged-line classifier feeding a single-pass state machine so the failure
//! modes stay enumerable.

use serde::{Deserialize, Serialize};

/// Structured feedback assembled from one completion.
///
/// Every list is insertion-ordered and may legitimately be empty when the
/// upstream text did not match the expected shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub overall_feedback: String,
    pub summary: FeedbackSummary,
    pub domains: DomainFeedback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub avoid_rethink: Vec<String>,
}

/// The three fixed pedagogical observation categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainFeedback {
    pub planning: Vec<String>,
    pub environment: Vec<String>,
    pub instruction: Vec<String>,
}

/// Inline status glyph carried by a domain feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    /// Something done well, tagged ✅.
    Strength,
    /// An area for improvement, tagged ⏳.
    Improvement,
    /// A practice to avoid or rethink, tagged ⛔.
    Concern,
}

impl StatusMarker {
    /// First status glyph appearing in `text`, if any.
    pub fn detect(text: &str) -> Option<StatusMarker> {
        text.chars().find_map(StatusMarker::from_char)
    }

    fn from_char(c: char) -> Option<StatusMarker> {
        match c {
            '✅' => Some(StatusMarker::Strength),
            '⏳' => Some(StatusMarker::Improvement),
            '⛔' => Some(StatusMarker::Concern),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overall,
    Strengths,
    Improvements,
    AvoidRethink,
    /// Wrapper header before the domain blocks; its own lines carry nothing.
    Detailed,
    Planning,
    Environment,
    Instruction,
}

// Template order matters: every section is terminated by the next recognized
// header, so a later header must never be read as list content.
const HEADERS: &[(&str, Section)] = &[
    ("OVERALL FEEDBACK:", Section::Overall),
    ("STRENGTHS:", Section::Strengths),
    ("AREAS FOR IMPROVEMENT:", Section::Improvements),
    ("AVOID/RETHINK:", Section::AvoidRethink),
    ("DETAILED FEEDBACK:", Section::Detailed),
    ("DOMAIN 1:", Section::Planning),
    ("DOMAIN 2:", Section::Environment),
    ("DOMAIN 3:", Section::Instruction),
];

#[derive(Clone, Copy)]
enum LineTag<'a> {
    /// Recognized section header; carries any text after the label.
    Header(Section, &'a str),
    /// Dash/asterisk bullet; marker stripped, inline glyph (if any) kept.
    Bullet(&'a str),
    /// Line led by a status glyph with no bullet; glyph kept.
    Glyph(&'a str),
    Blank,
    Text(&'a str),
}

fn classify(line: &str) -> LineTag<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineTag::Blank;
    }

    // Models occasionally promote headers to markdown headings.
    let candidate = trimmed.trim_start_matches('#').trim_start();
    for (label, section) in HEADERS {
        if let Some(rest) = strip_label(candidate, label) {
            return LineTag::Header(*section, rest);
        }
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix('-').filter(|r| r.is_empty()))
    {
        return LineTag::Bullet(rest.trim());
    }

    if trimmed.chars().next().and_then(StatusMarker::from_char).is_some() {
        return LineTag::Glyph(trimmed);
    }

    LineTag::Text(trimmed)
}

/// Case-insensitive ASCII prefix match returning the remainder of the line.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let head = line.get(..label.len())?;
    head.eq_ignore_ascii_case(label)
        .then(|| line[label.len()..].trim())
}

/// Parse one completion into a [`FeedbackReport`].
///
/// Pure and total: malformed or empty input produces a report with empty
/// fields rather than an error.
pub fn parse_feedback(text: &str) -> FeedbackReport {
    let mut report = FeedbackReport::default();
    let mut overall: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();
    let mut state: Option<Section> = None;

    for line in text.lines() {
        let tag = classify(line);

        if let LineTag::Header(section, rest) = tag {
            flush(&mut report, state, &mut overall, &mut items);
            state = Some(section);
            // Content on the header line itself counts for the overall
            // paragraph; for domain headers it is the domain's name.
            if section == Section::Overall && !rest.is_empty() {
                overall.push(rest);
            }
            continue;
        }

        match state {
            None | Some(Section::Detailed) => {}
            Some(Section::Overall) => match tag {
                LineTag::Bullet(t) | LineTag::Glyph(t) | LineTag::Text(t) => overall.push(t),
                _ => {}
            },
            Some(_) => match tag {
                LineTag::Bullet(t) | LineTag::Glyph(t) => items.push(t.to_string()),
                LineTag::Text(t) => match items.last_mut() {
                    // A plain line inside a list continues the open item.
                    Some(last) => {
                        last.push(' ');
                        last.push_str(t);
                    }
                    None => items.push(t.to_string()),
                },
                _ => {}
            },
        }
    }

    flush(&mut report, state, &mut overall, &mut items);
    report
}

fn flush(
    report: &mut FeedbackReport,
    state: Option<Section>,
    overall: &mut Vec<&str>,
    items: &mut Vec<String>,
) {
    let collected: Vec<String> = items
        .drain(..)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    match state {
        Some(Section::Overall) => {
            report.overall_feedback = overall.join("\n").trim().to_string();
            overall.clear();
        }
        Some(Section::Strengths) => report.summary.strengths.extend(collected),
        Some(Section::Improvements) => report.summary.areas_for_improvement.extend(collected),
        Some(Section::AvoidRethink) => report.summary.avoid_rethink.extend(collected),
        Some(Section::Planning) => report.domains.planning.extend(collected),
        Some(Section::Environment) => report.domains.environment.extend(collected),
        Some(Section::Instruction) => report.domains.instruction.extend(collected),
        Some(Section::Detailed) | None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
OVERALL FEEDBACK:
A clear lesson with strong modeling. Consider tightening transitions.

STRENGTHS:
- Clear identification of a learning gap
- Thoughtful resource use
- Caring tone

AREAS FOR IMPROVEMENT:
- Differentiate frames by skill level
- Plan for pacing

AVOID/RETHINK:
- Overreliance on one-size-fits-all scaffolds

DETAILED FEEDBACK:

DOMAIN 1: PLANNING AND PREPARATION
- ✅ Clear learning gap: \"We have a gap in our learning.\" → Purposeful design.
- ⏳ Differentiate frames: one universal version was given. → Create leveled versions.
- ⛔ One-size-fits-all scaffolds: same task for all. → Offer challenge frames.

DOMAIN 2: CLASSROOM ENVIRONMENT
- ✅ Caring tone throughout.
- ⏳ Reduce use of \"you kids\".

DOMAIN 3: INSTRUCTION
- ✅ Strong modeling with reading.
- ⛔ Don't stop at surface-level feedback.
";

    #[test]
    fn parses_the_full_template() {
        let report = parse_feedback(SAMPLE);

        assert!(report.overall_feedback.starts_with("A clear lesson"));
        assert_eq!(report.summary.strengths.len(), 3);
        assert_eq!(report.summary.strengths[0], "Clear identification of a learning gap");
        assert_eq!(report.summary.areas_for_improvement.len(), 2);
        assert_eq!(report.summary.avoid_rethink.len(), 1);
        assert_eq!(report.domains.planning.len(), 3);
        assert_eq!(report.domains.environment.len(), 2);
        assert_eq!(report.domains.instruction.len(), 2);
    }

    #[test]
    fn headerless_input_yields_an_empty_report() {
        for input in ["", "   \n\n", "just some prose\nwith lines", "- a stray bullet"] {
            let report = parse_feedback(input);
            assert_eq!(report, FeedbackReport::default(), "input: {input:?}");
        }
    }

    #[test]
    fn a_later_header_never_becomes_list_content() {
        let report = parse_feedback(SAMPLE);
        for item in report
            .summary
            .strengths
            .iter()
            .chain(&report.summary.areas_for_improvement)
        {
            assert!(!item.to_uppercase().contains("AREAS FOR IMPROVEMENT"));
            assert!(!item.to_uppercase().contains("AVOID/RETHINK"));
        }
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let report = parse_feedback(
            "overall feedback:\nGood pacing.\n\nStrengths:\n- Kept students engaged\n",
        );
        assert_eq!(report.overall_feedback, "Good pacing.");
        assert_eq!(report.summary.strengths, vec!["Kept students engaged"]);
    }

    #[test]
    fn header_line_content_counts_for_the_overall_section() {
        let report = parse_feedback("OVERALL FEEDBACK: Great questioning technique.");
        assert_eq!(report.overall_feedback, "Great questioning technique.");
    }

    #[test]
    fn missing_sections_stay_empty_without_error() {
        let report = parse_feedback("STRENGTHS:\n- Only strengths here\n");
        assert!(report.overall_feedback.is_empty());
        assert_eq!(report.summary.strengths.len(), 1);
        assert!(report.summary.areas_for_improvement.is_empty());
        assert!(report.domains.planning.is_empty());
    }

    #[test]
    fn plain_lines_continue_the_open_item() {
        let report = parse_feedback(
            "STRENGTHS:\n- Clear directions\n  given at every step\n- Warm tone\n",
        );
        assert_eq!(
            report.summary.strengths,
            vec!["Clear directions given at every step", "Warm tone"]
        );
    }

    #[test]
    fn glyph_lines_without_bullets_start_items() {
        let report = parse_feedback(
            "DOMAIN 1: PLANNING AND PREPARATION\n✅ Good anchor chart\n⏳ Pacing drifted late in class\n",
        );
        assert_eq!(report.domains.planning.len(), 2);
        assert!(report.domains.planning[0].starts_with('✅'));
    }

    #[test]
    fn domain_items_partition_by_glyph_in_order() {
        let report = parse_feedback(SAMPLE);
        let markers: Vec<Option<StatusMarker>> = report
            .domains
            .planning
            .iter()
            .map(|item| StatusMarker::detect(item))
            .collect();

        assert_eq!(
            markers,
            vec![
                Some(StatusMarker::Strength),
                Some(StatusMarker::Improvement),
                Some(StatusMarker::Concern),
            ]
        );

        // One item per non-empty glyph line in the block.
        let glyph_lines = SAMPLE
            .lines()
            .skip_while(|l| !l.starts_with("DOMAIN 1:"))
            .take_while(|l| !l.starts_with("DOMAIN 2:"))
            .filter(|l| StatusMarker::detect(l).is_some())
            .count();
        assert_eq!(report.domains.planning.len(), glyph_lines);
    }

    #[test]
    fn empty_bullets_are_discarded() {
        let report = parse_feedback("STRENGTHS:\n- \n-\n- Real item\n");
        assert_eq!(report.summary.strengths, vec!["Real item"]);
    }

    #[test]
    fn markdown_heading_headers_are_recognized() {
        let report = parse_feedback("## STRENGTHS:\n- Good opener\n");
        assert_eq!(report.summary.strengths, vec!["Good opener"]);
    }

    #[test]
    fn detect_finds_the_first_glyph_only() {
        assert_eq!(
            StatusMarker::detect("Knowledge of content: ✅ Clear gap identified"),
            Some(StatusMarker::Strength)
        );
        assert_eq!(StatusMarker::detect("no glyph here"), None);
    }
}
