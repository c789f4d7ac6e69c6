use crate::application::ports::ChatPrompt;

pub const EXTRACTION_SYSTEM_INSTRUCTION: &str = "You are a product analyst who turns spoken feedback into structured feature requests. Always respond with valid JSON only, without any text before or after the JSON object.";

const TRANSCRIPTION_PLACEHOLDER: &str = "{transcription}";

const EXTRACTION_TEMPLATE: &str = r#"Analyze the following transcription of a voice recording and extract every feature request, bug report or product improvement it mentions.

Transcription:
"""
{transcription}
"""

Respond with a JSON object of exactly this shape:
{
  "requests": [
    {
      "id": "a short unique identifier such as req-1",
      "title": "a concise title for the request",
      "description": "what the speaker asked for, in one or two sentences",
      "priority": "high | medium | low",
      "category": "enhancement | bug-fix | new-feature | improvement",
      "confidence": 0.0,
      "potentialRecommendation": "a concrete suggestion for implementing the request"
    }
  ],
  "summary": "a one or two sentence summary of the whole recording"
}

confidence is a number between 0 and 1 expressing how sure you are that the item is a genuine request.
If no feature requests are found, return an empty "requests" array but still write a summary."#;

pub fn build_extraction_prompt(transcription: &str) -> ChatPrompt {
    ChatPrompt {
        system: EXTRACTION_SYSTEM_INSTRUCTION.to_string(),
        user: EXTRACTION_TEMPLATE.replace(TRANSCRIPTION_PLACEHOLDER, transcription),
    }
}
