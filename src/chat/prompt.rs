/// Response-style preset chosen by the user. The set is closed; selection
/// happens through a constrained slash-command choice, so nothing outside it
/// can reach the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Persona {
    Kid,
    Adult,
    Senior,
}

impl Persona {
    /// The fixed tone instruction folded into every prompt for this persona.
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Kid => {
                "You are talking to a child. Use simple language and explanations \
                 suitable for children. Keep responses brief and engaging."
            }
            Persona::Adult => {
                "You are conversing with an adult. Provide detailed and comprehensive \
                 responses."
            }
            Persona::Senior => {
                "You are speaking with a senior citizen. Be respectful, patient, and \
                 use clear language. Consider potential health or technology-related \
                 concerns in your responses."
            }
        }
    }
}

/// Fixed framing sentence naming the assistant's affiliation.
const FRAMING: &str =
    "You are an AI assistant for CTEC. Always be helpful, friendly, and informative.";

/// Fixed policy for questions the knowledge context cannot answer.
const FALLBACK_POLICY: &str =
    "If asked about information not provided in the context, politely state that you \
     don't have that specific information and offer to help with general inquiries or \
     direct them to contact the center's staff for the most up-to-date information.";

const TURN_MARKER: &str = "Human:";
const RESPONSE_MARKER: &str = "AI Assistant:";

/// Deterministic builder for the single prompt string sent upstream.
///
/// Everything is folded into one text blob — there is no separate
/// system/user channel on this API path.
#[derive(Debug)]
pub struct PromptTemplate<'a> {
    context: &'a str,
    persona: Option<Persona>,
    question: &'a str,
}

impl<'a> PromptTemplate<'a> {
    pub fn new(context: &'a str, persona: Option<Persona>, question: &'a str) -> Self {
        Self {
            context,
            persona,
            question,
        }
    }

    /// Render in fixed order: knowledge context, framing sentence, persona
    /// instruction, fallback policy, then the verbatim question between the
    /// turn markers. An unset persona renders an empty instruction segment.
    /// The rendered prompt ends with the response marker.
    pub fn render(&self) -> String {
        let instruction = self.persona.map(Persona::instruction).unwrap_or("");
        format!(
            "{context}\n\n{framing}\n{instruction}\n\n{fallback}\n\n{turn} {question}\n{response}",
            context = self.context,
            framing = FRAMING,
            instruction = instruction,
            fallback = FALLBACK_POLICY,
            turn = TURN_MARKER,
            question = self.question,
            response = RESPONSE_MARKER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Byte offset of `needle` in `haystack`, asserting it occurs exactly once.
    fn offset_of(haystack: &str, needle: &str) -> usize {
        let first = haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing segment: {}", needle));
        assert_eq!(
            haystack.rfind(needle),
            Some(first),
            "segment appears more than once: {}",
            needle
        );
        first
    }

    #[test]
    fn test_render_segment_order() {
        for persona in [Persona::Kid, Persona::Adult, Persona::Senior] {
            let prompt = PromptTemplate::new(
                "IDIA is a nonprofit dedicated to digital inclusion.",
                Some(persona),
                "What are your hours?",
            )
            .render();

            let ctx = offset_of(&prompt, "IDIA is a nonprofit");
            let framing = offset_of(&prompt, FRAMING);
            let instruction = offset_of(&prompt, persona.instruction());
            let fallback = offset_of(&prompt, FALLBACK_POLICY);
            let question = offset_of(&prompt, "Human: What are your hours?");

            assert!(ctx < framing);
            assert!(framing < instruction);
            assert!(instruction < fallback);
            assert!(fallback < question);
        }
    }

    #[test]
    fn test_render_ends_with_response_marker() {
        let prompt =
            PromptTemplate::new("ctx", Some(Persona::Adult), "Where is the Hive?").render();
        assert!(prompt.ends_with("AI Assistant:"));
    }

    #[test]
    fn test_kid_instruction_is_child_friendly() {
        let prompt =
            PromptTemplate::new("IDIA is a nonprofit...", Some(Persona::Kid), "hi").render();
        assert!(prompt.contains("simple language"));
    }

    #[test]
    fn test_unset_persona_renders_empty_instruction() {
        let prompt = PromptTemplate::new("ctx", None, "What are your hours?").render();
        for persona in [Persona::Kid, Persona::Adult, Persona::Senior] {
            assert!(!prompt.contains(persona.instruction()));
        }
        // Composition still produces the full frame around the empty segment
        assert!(prompt.contains(FRAMING));
        assert!(prompt.contains(FALLBACK_POLICY));
        assert!(prompt.ends_with("AI Assistant:"));
    }

    #[test]
    fn test_question_is_verbatim() {
        let question = "Does the Hive at CTEC open on Saturdays? (I mean the 7th Avenue one)";
        let prompt = PromptTemplate::new("ctx", Some(Persona::Senior), question).render();
        assert!(prompt.contains(question));
    }
}
