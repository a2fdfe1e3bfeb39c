//! Static sample data substituted whenever a real provider path is
//! unavailable or fails.

use crate::core::parser::{DomainFeedback, FeedbackReport, FeedbackSummary};

/// Fixed transcript used when caption retrieval fails, so the feedback step
/// always has something to analyze.
pub const FALLBACK_TRANSCRIPT: &str = "\
Good morning class! Today we're going to be learning about fractions.
Fractions are a way to represent parts of a whole.
For example, if I have a pizza and cut it into 8 slices, each slice is 1/8 of the whole pizza.
Now, who can tell me what the top number in a fraction is called?
[Student responds]
That's right, it's called the numerator. And the bottom number?
[Student responds]
Correct! It's called the denominator.
Let's practice with some examples. If I have 3 out of 4 pieces of a chocolate bar, what fraction would that be?
[Students respond]
Yes, that would be 3/4. The numerator is 3, and the denominator is 4.
Now let's talk about equivalent fractions...";

/// The documented sample feedback object. Callers receive exactly this
/// report whenever analysis is skipped or fails.
pub fn mock_feedback_report() -> FeedbackReport {
    FeedbackReport {
        overall_feedback: "Your lesson on evidence-based writing demonstrates strong content knowledge with clear identification of learning gaps and thoughtful resource use. You maintain a caring tone and provide strong instructional modeling. Consider differentiating materials for varied learners, improving transitions, and clarifying success criteria to further enhance student engagement and learning outcomes.".to_string(),
        summary: FeedbackSummary {
            strengths: to_strings(&[
                "Clear identification of a learning gap",
                "Thoughtful resource use: Sentence frames and reading examples",
                "Caring tone and inclusivity",
                "Student validation and encouragement",
                "Strong instructional modeling with reading",
                "Academic vocabulary support embedded or defined",
            ]),
            areas_for_improvement: to_strings(&[
                "Differentiate frames by skill level",
                "Plan for pacing and student transition time",
                "Integrate formative checkpoints",
                "Reduce use of \"you kids\"",
                "Increase student role ownership in group structures",
                "Reinforce routines for collaboration transitions",
                "Clarify learning objective and success criteria",
                "Expand questioning techniques with student reasoning",
                "Use more structured reflection on learning",
            ]),
            avoid_rethink: to_strings(&[
                "Overreliance on one-size-fits-all scaffolds",
                "Lack of tangible outcome descriptors",
                "Avoid repeated informal phrasing that dilutes high expectations",
                "Don't stop at surface-level feedback",
                "Avoid relying solely on post-writing reflections",
            ]),
        },
        domains: DomainFeedback {
            planning: to_strings(&[
                "Knowledge of content and pedagogy: ✅ Clear identification of a learning gap - Transcript: \"We have a gap in our learning and how we can explain our thinking using evidence.\" → This shows strong content knowledge and purposeful lesson design.",
                "Use of resources and materials: ✅ Thoughtful resource use: Sentence frames and reading examples - Transcript: \"These are called sentence starters or sentence frames... glue this into your journals…\" → Providing reusable reference tools supports writing stamina and academic development.",
                "Knowledge of students and differentiation: ⏳ Differentiate frames by skill level - Transcript: One universal version of the sentence frames was given. Suggestion: Create \"basic, proficient, advanced\" versions. Add visual cues or prompts for EL or struggling learners. Impact: Increased accessibility and rigor for varied learners.",
                "Lesson design and coherence: ⏳ Plan for pacing and student transition time - Transcript: Transitions like \"Now glue this in\" lack time guidance or clarity. Suggestion: Build in visible timers, music cues, or countdowns (\"You have 90 seconds to glue and open your journals\"). Impact: Supports focus and reduces off-task behavior.",
                "Assessment integration: ⏳ Integrate formative checkpoints - Transcript: There's no mid-lesson check for understanding before students begin writing. Suggestion: Ask questions like: \"Show a thumbs-up if you know which sentence frame you'll use,\" or do whole-class planning of a response together. Impact: Allows real-time adjustment and supports mastery.",
                "Knowledge of students and differentiation: ⛔ Overreliance on one-size-fits-all scaffolds - Transcript: Same content and task presented to all students. Rethink: Offer optional challenge frames or open-ended prompts for your advanced learners.",
                "Assessment integration: ⛔ Lack of tangible outcome descriptors - Prompt: \"Write four sentences…\" without a model or rubric. Rethink: Provide a success checklist (e.g., 1 strong quote, 1 sentence frame, 1 explanation of thinking).",
            ]),
            environment: to_strings(&[
                "Classroom culture and relationships: ✅ Caring tone and inclusivity - Transcript: \"I appreciate the way you're all focused on your journals.\" → This positive reinforcement builds a supportive learning environment.",
                "Student engagement and motivation: ✅ Student validation and encouragement - Transcript: \"Thank you for sharing... that's a great observation.\" → Acknowledging student contributions promotes participation and confidence.",
                "Classroom management: ⏳ Reduce use of \"you kids\" - Transcript: Multiple instances of \"you kids\" throughout the lesson. Suggestion: Use more respectful language like \"scholars,\" \"writers,\" or \"class.\" Impact: Elevates academic identity and sets a tone of high expectations.",
                "Student ownership and agency: ⏳ Increase student role ownership in group structures - Transcript: Teacher-directed grouping without clear roles. Suggestion: Assign or have students select roles (e.g., facilitator, recorder, timekeeper) with clear responsibilities. Impact: Increases accountability and participation.",
                "Classroom procedures: ⏳ Reinforce routines for collaboration transitions - Transcript: \"Get with your groups\" without specific guidance. Suggestion: Create and practice a routine with visual cues for quick, quiet transitions (e.g., \"When I say 'group up,' you have 30 seconds to...\"). Impact: Maximizes instructional time and reduces management issues.",
                "Communication style: ⛔ Avoid repeated informal phrasing that dilutes high expectations - Transcript: \"Alright, you guys,\" \"Okay, kiddos,\" etc. Rethink: Use academic language consistently to model the register you expect from students.",
            ]),
            instruction: to_strings(&[
                "Clarity of communication: ✅ Strong instructional modeling with reading - Transcript: \"Let me read this aloud... notice how I...\" → Demonstrating the thinking process makes abstract concepts concrete for students.",
                "Academic language development: ✅ Academic vocabulary support embedded or defined - Transcript: \"This is what we call evidence... it proves our thinking.\" → Explicitly teaching academic terminology builds language proficiency.",
                "Learning objectives: ⏳ Clarify learning objective and success criteria - Transcript: Objective not explicitly stated or referenced during lesson. Suggestion: Post and verbally highlight the learning target at beginning, middle, and end of lesson (e.g., \"Today we will... so that we can...\"). Impact: Focuses student effort and helps them monitor their own progress.",
                "Questioning techniques: ⏳ Expand questioning techniques with student reasoning - Transcript: Questions primarily focus on recall or basic comprehension. Suggestion: Add follow-up questions like \"What makes you think that?\" or \"How does this evidence support your claim?\" Impact: Deepens critical thinking and metacognitive awareness.",
                "Assessment and feedback: ⏳ Use more structured reflection on learning - Transcript: \"What did we learn today?\" without specific prompts. Suggestion: Provide sentence frames for exit tickets (e.g., \"Today I learned ___ which will help me ___ in my writing.\"). Impact: Reinforces key learning and helps you gauge understanding.",
                "Depth of student thinking: ⛔ Don't stop at surface-level feedback - Transcript: \"Good job\" without specificity about what was good. Rethink: Name the specific strength (\"I like how you connected your evidence directly to your claim by explaining...\").",
                "Assessment design: ⛔ Avoid relying solely on post-writing reflections - Transcript: No checks for understanding until after writing is complete. Rethink: Build in multiple quick formative assessment points throughout the lesson.",
            ]),
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
