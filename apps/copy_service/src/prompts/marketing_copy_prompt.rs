use crate::content::generation_service::{Platform, Tone};

/// Marker the model is told to place between variations, and the token the
/// parser splits on.
pub const VARIATION_SEPARATOR: &str = "---VARIATION---";

const SYSTEM_INSTRUCTION: &str = "You are an expert marketing copywriter skilled at creating compelling, platform-optimized content that drives engagement and conversions.";

#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub system_instruction: &'static str,
    pub user_prompt: String,
}

pub struct MarketingCopyPrompt;

impl MarketingCopyPrompt {
    pub fn build(
        description: &str,
        platform: Platform,
        tone: Tone,
        variation_count: u32,
    ) -> PromptSpec {
        let plural = if variation_count > 1 { "s" } else { "" };
        let user_prompt = format!(
            r#"{} {}

Product Description:
{}

Generate {} different variation{} of this content. Each variation should be unique and creative while maintaining the same core message.

IMPORTANT: Do NOT use any bold markdown formatting (** **) in your response. Write everything in plain text with emojis where appropriate. Keep the content clean and readable without any markdown formatting.

Format: Return each variation separated by "{}" on its own line."#,
            Self::platform_instruction(platform),
            Self::tone_instruction(tone),
            description,
            variation_count,
            plural,
            VARIATION_SEPARATOR
        );

        PromptSpec {
            system_instruction: SYSTEM_INSTRUCTION,
            user_prompt,
        }
    }

    fn platform_instruction(platform: Platform) -> &'static str {
        match platform {
            Platform::Twitter => "Create a compelling Twitter/X post (max 280 characters) for the following product. Make it engaging, use relevant hashtags, and include a call-to-action.",
            Platform::Linkedin => "Create a professional LinkedIn post for the following product. Use a professional tone, include relevant insights, and structure it for maximum engagement with line breaks.",
            Platform::Email => "Create an email marketing copy for the following product. Include a subject line (on the first line starting with \"Subject:\"), compelling body copy, and a clear call-to-action.",
            Platform::Instagram => "Create an engaging Instagram caption for the following product. Make it visually descriptive, use relevant emojis, and include hashtags at the end.",
            Platform::Facebook => "Create a Facebook post for the following product. Make it conversational, engaging, and include a call-to-action.",
        }
    }

    fn tone_instruction(tone: Tone) -> &'static str {
        match tone {
            Tone::Professional => "Use a professional, business-appropriate tone.",
            Tone::Casual => "Use a casual, friendly, and conversational tone.",
            Tone::Enthusiastic => "Use an enthusiastic, energetic, and exciting tone.",
            Tone::Informative => "Use an informative, educational tone focused on value and benefits.",
            Tone::Humorous => "Use a light, humorous tone while staying on-brand.",
        }
    }
}
