//! Prompt construction for the generation backend.
//!
//! This module turns normalized source text plus a user-supplied style
//! description into the instruction payload sent to the backend. The prompt
//! layout is fixed: task statement, hard constraints, the verbatim source
//! text, closing directive.

use std::str::FromStr;

use crate::{RestyleError, Result};

/// Role framing sent as the system message of every request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a professional SEO content writer and copywriting specialist.";

/// The generation models the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    /// `gpt-3.5-turbo`
    #[default]
    Gpt35Turbo,
    /// `gpt-4`
    Gpt4,
    /// `gpt-4-turbo-preview`
    Gpt4Turbo,
}

impl Model {
    /// The backend identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt4 => "gpt-4",
            Model::Gpt4Turbo => "gpt-4-turbo-preview",
        }
    }
}

impl FromStr for Model {
    type Err = RestyleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gpt-3.5-turbo" => Ok(Model::Gpt35Turbo),
            "gpt-4" => Ok(Model::Gpt4),
            "gpt-4-turbo-preview" => Ok(Model::Gpt4Turbo),
            other => Err(RestyleError::Validation(format!(
                "unknown model {} (expected gpt-3.5-turbo, gpt-4, or gpt-4-turbo-preview)",
                other
            ))),
        }
    }
}

/// Generation settings passed by value into the client.
///
/// There is no ambient configuration: callers build one of these per
/// invocation and hand it to [`GenerationClient::generate`].
///
/// [`GenerationClient::generate`]: crate::GenerationClient::generate
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Which backend model to use.
    pub model: Model,
    /// Upper bound on generated tokens. Valid range: 100 to 4000.
    pub max_output_tokens: u32,
    /// Sampling temperature. Valid range: 0.0 to 1.0.
    pub temperature: f32,
    /// Advisory request to keep the rewrite close to the source length.
    /// Accepted and carried through, but not enforced by any component.
    pub preserve_length: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_output_tokens: 2000,
            temperature: 0.7,
            preserve_length: false,
        }
    }
}

impl GenerationConfig {
    /// Checks that the numeric settings are within the accepted ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_output_tokens < 100 || self.max_output_tokens > 4000 {
            return Err(RestyleError::Validation(format!(
                "max_output_tokens must be between 100 and 4000, got {}",
                self.max_output_tokens
            )));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(RestyleError::Validation(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

/// What the user asked for: a target style plus generation settings.
#[derive(Debug, Clone)]
pub struct StyleRequest {
    /// Free-form description of the desired writing style. Must be non-empty.
    pub style_description: String,
    /// Settings forwarded to the generation backend.
    pub config: GenerationConfig,
}

impl StyleRequest {
    /// Creates a request for the given style with default settings.
    pub fn new(style_description: impl Into<String>) -> Self {
        Self { style_description: style_description.into(), config: GenerationConfig::default() }
    }
}

/// The instruction payload for one backend call.
///
/// Built fresh per invocation; never cached or reused.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Role-framing system message.
    pub system_instruction: String,
    /// Task statement, constraints, verbatim source text, closing directive.
    pub user_prompt: String,
}

/// Builds the generation request for a rewrite.
///
/// Fails with [`RestyleError::Validation`] when the style description is
/// empty or whitespace-only, or when the source text is empty.
///
/// # Example
///
/// ```rust
/// use restyle_core::{StyleRequest, build_request};
///
/// let style = StyleRequest::new("formal tone");
/// let request = build_request("The cat sat.", &style).unwrap();
/// assert!(request.user_prompt.contains("The cat sat."));
/// assert!(request.user_prompt.contains("formal tone"));
/// ```
pub fn build_request(source_text: &str, style: &StyleRequest) -> Result<GenerationRequest> {
    if style.style_description.trim().is_empty() {
        return Err(RestyleError::Validation(
            "writing style description must not be empty".to_string(),
        ));
    }
    if source_text.is_empty() {
        return Err(RestyleError::Validation("source text must not be empty".to_string()));
    }

    let user_prompt = format!(
        "Task: rewrite the following article in this style: {style}\n\
         \n\
         Requirements:\n\
         - Keep the core information and meaning of the original article\n\
         - Rewrite it completely in the requested style\n\
         - Keep the prose natural, coherent, and engaging\n\
         - Optimize for SEO when the style calls for it\n\
         \n\
         Original article:\n\
         {source}\n\
         \n\
         Rewrite the article in the requested style:",
        style = style.style_description,
        source = source_text,
    );

    Ok(GenerationRequest { system_instruction: SYSTEM_INSTRUCTION.to_string(), user_prompt })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gpt35Turbo, Model::Gpt4, Model::Gpt4Turbo] {
            assert_eq!(model.as_str().parse::<Model>().unwrap(), model);
        }
        assert!("gpt-5".parse::<Model>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, Model::Gpt35Turbo);
        assert_eq!(config.max_output_tokens, 2000);
        assert_eq!(config.temperature, 0.7);
        assert!(!config.preserve_length);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(99, 0.7)]
    #[case(4001, 0.7)]
    #[case(2000, -0.1)]
    #[case(2000, 1.1)]
    fn test_config_rejects_out_of_range(#[case] max_tokens: u32, #[case] temperature: f32) {
        let config = GenerationConfig {
            max_output_tokens: max_tokens,
            temperature,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RestyleError::Validation(_))));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn test_build_request_rejects_blank_style(#[case] style: &str) {
        let err = build_request("Some text", &StyleRequest::new(style)).unwrap_err();
        assert!(matches!(err, RestyleError::Validation(_)));
    }

    #[test]
    fn test_build_request_rejects_empty_source() {
        let err = build_request("", &StyleRequest::new("formal tone")).unwrap_err();
        assert!(matches!(err, RestyleError::Validation(_)));
    }

    #[test]
    fn test_user_prompt_embeds_source_verbatim() {
        let source = "The  quick brown fox; punctuation & all.";
        let request = build_request(source, &StyleRequest::new("casual blog tone")).unwrap();
        assert!(request.user_prompt.contains(source));
        assert!(request.user_prompt.contains("casual blog tone"));
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_prompt_section_order() {
        let request = build_request("BODY", &StyleRequest::new("STYLE")).unwrap();
        let task = request.user_prompt.find("Task:").unwrap();
        let constraints = request.user_prompt.find("Requirements:").unwrap();
        let source = request.user_prompt.find("Original article:").unwrap();
        let closing = request.user_prompt.find("Rewrite the article").unwrap();
        assert!(task < constraints && constraints < source && source < closing);
    }
}
