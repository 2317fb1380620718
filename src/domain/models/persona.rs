use serde::{Deserialize, Serialize};

/// Maximum reply length the persona asks the model for, in words. Keeps
/// answers terse to match the minimalist voice of the portfolio.
pub const REPLY_WORD_LIMIT: usize = 50;

/// The voice the assistant speaks with: whose digital twin it is, what it
/// knows, and how it should answer.
///
/// Rendered into the fixed system instruction attached to every upstream
/// request. [`Persona::default`] reproduces the portfolio owner's profile;
/// builder methods allow swapping in a different one without touching the
/// chat pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    name: String,
    title: String,
    email: String,
    tone: String,
    key_facts: Vec<String>,
    pricing_policy: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, title: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            tone: "professional, concise, sophisticated, and slightly artistic".to_string(),
            key_facts: Vec::new(),
            pricing_policy: String::new(),
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_key_fact(mut self, fact: impl Into<String>) -> Self {
        self.key_facts.push(fact.into());
        self
    }

    pub fn with_pricing_policy(mut self, policy: impl Into<String>) -> Self {
        self.pricing_policy = policy.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Render the system instruction sent with every request.
    ///
    /// The closing style rule (answers under [`REPLY_WORD_LIMIT`] words) is a
    /// hard constraint of the persona, not a caller option.
    pub fn system_instruction(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "You are the AI Digital Twin of {}, a {}.\n",
            self.name, self.title
        ));
        out.push_str(&format!("Your tone is {}.\n", self.tone));
        out.push_str(&format!(
            "You are here to answer questions about {}'s design philosophy, \
             availability for freelance work, and technical skills.\n",
            self.name
        ));

        if !self.key_facts.is_empty() {
            out.push_str(&format!("\nKey Details about {}:\n", self.name));
            for fact in &self.key_facts {
                out.push_str(&format!("- {fact}\n"));
            }
        }

        out.push_str(&format!("- Contact: {}\n", self.email));

        if !self.pricing_policy.is_empty() {
            out.push_str(&format!("\nIf asked about pricing, {}\n", self.pricing_policy));
        }

        out.push_str(&format!(
            "\nKeep answers short (under {REPLY_WORD_LIMIT} words) to match the \
             minimalist aesthetic of the site.\n"
        ));

        out
    }
}

impl Default for Persona {
    /// The portfolio owner's profile, as shipped on the site.
    fn default() -> Self {
        Persona::new(
            "Tolutope Adebayo",
            "high-end minimalist product designer",
            "tolutopeadebayo@gmail.com",
        )
        .with_key_fact(
            "Role: Senior Product Designer, currently shaping the future of logistics \
             at Movam (AI-powered logistics).",
        )
        .with_key_fact(
            "Background: Endlessly curious tinkerer. Created a \"school\" to teach \
             computer skills growing up.",
        )
        .with_key_fact("Hobbies: Bass guitar, tennis, running, whiteboard animations.")
        .with_key_fact("Specialization: Fintech, Design Systems, Minimalist UI.")
        .with_key_fact(
            "Workflow: Leverages AI for generative ideation, rapid prototyping, and \
             research synthesis to enhance efficiency without compromising human creativity.",
        )
        .with_key_fact(
            "Philosophy: \"Less is more, but less is hard.\" Believes in products that \
             live at the intersection of utility and art.",
        )
        .with_key_fact("Availability: Open for select advisory roles and high-impact projects.")
        .with_pricing_policy("say you prefer to discuss value rather than hourly rates.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_contains_contact_email() {
        let persona = Persona::default();
        let instruction = persona.system_instruction();

        assert!(instruction.contains("tolutopeadebayo@gmail.com"));
    }

    #[test]
    fn test_instruction_contains_word_limit() {
        let instruction = Persona::default().system_instruction();

        assert!(instruction.contains("under 50 words"));
    }

    #[test]
    fn test_custom_persona_rendering() {
        let persona = Persona::new("Ada", "systems designer", "ada@example.com")
            .with_tone("dry and precise")
            .with_key_fact("Specialization: distributed systems.");

        let instruction = persona.system_instruction();
        assert!(instruction.contains("AI Digital Twin of Ada"));
        assert!(instruction.contains("dry and precise"));
        assert!(instruction.contains("distributed systems"));
        assert!(instruction.contains("ada@example.com"));
    }

    #[test]
    fn test_pricing_policy_is_optional() {
        let persona = Persona::new("Ada", "systems designer", "ada@example.com");

        assert!(!persona.system_instruction().contains("If asked about pricing"));
    }
}
