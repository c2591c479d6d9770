use crate::error::{ConceptMapError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat-completions endpoint (DeepSeek, OpenAI-compatible).
pub const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";

// Input truncation limits for the prompt sections
const MAX_OBJECTIVES_CHARS: usize = 1000;
const MAX_REFERENCES_CHARS: usize = 1000;
const MAX_CONTENT_CHARS: usize = 5000;

/// Request structure for the chat completions API
#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Response structure from the chat completions API
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// AI completion client for proposition generation
///
/// Sends study content to an OpenAI-compatible chat-completions endpoint
/// and returns the raw reply text. The reply may or may not contain
/// proposition lines; the parser downstream tolerates either.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should not happen in
    /// normal operation)
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        timeout_secs: u64,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint,
            api_key,
            model,
            temperature,
            max_tokens,
        }
    }

    /// Generate a proposition block from study material.
    ///
    /// Retries with exponential backoff on rate-limit (429) and server
    /// (5xx) errors; any other failure returns immediately with a
    /// descriptive error.
    pub async fn generate_propositions(
        &self,
        objectives: &str,
        references: &str,
        content: &str,
        max_retries: usize,
    ) -> Result<String> {
        if content.trim().is_empty() {
            return Err(ConceptMapError::InvalidInput(
                "no content to analyze".to_string(),
            ));
        }

        let prompt = build_prompt(objectives, references, content);

        let mut attempt = 0;
        let mut delay = Duration::from_secs(1);

        loop {
            match self.request_completion(&prompt).await {
                Ok(reply) => {
                    log::debug!("Completion reply: {} chars", reply.len());
                    return Ok(reply);
                }
                Err(e) if attempt < max_retries => {
                    let should_retry = e.to_string().contains("429")
                        || e.to_string().contains("500")
                        || e.to_string().contains("502")
                        || e.to_string().contains("503")
                        || e.to_string().contains("504");

                    if should_retry {
                        log::warn!("Retry {}/{} after error: {}", attempt + 1, max_retries, e);
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                        attempt += 1;
                    } else {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn request_completion(&self, prompt: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ConceptMapError::Completion(format!("Network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            return Err(ConceptMapError::Completion(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let result: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ConceptMapError::Completion(format!("Failed to parse response: {}", e)))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ConceptMapError::Completion("Empty response from API".to_string()))
    }
}

/// Build the concept-mapping prompt with truncated study material.
fn build_prompt(objectives: &str, references: &str, content: &str) -> String {
    format!(
        r#"🩺 VOCÊ É UM ASSISTENTE DE MAPEAMENTO CONCEITUAL MÉDICO. Siga EXATAMENTE estas regras:

1. ANALISE o conteúdo e IDENTIFIQUE conceitos médicos como:
   - Lesões celulares, hipóxia, apoptose, inflamação, necrose, hipertrofia
   - Termos técnicos: ROS, estresse do RE, metaplasia, quimiotaxina

2. GERE RELAÇÕES no formato: `origem -> tipo_relacao -> destino` (uma por linha)
   Exemplos obrigatórios:
   lesão celular -> pode_ser -> reversível
   hipóxia -> causa -> estresse oxidativo
   inflamação -> caracteriza_se_por -> vasodilatação

3. HIERARQUIA: Organize do GERAL para ESPECÍFICO
   Ex: sistema -> contém -> órgão

4. USE APENAS estes tipos de relações:
   - causa, leva_a, pode_ser, depende_de, caracteriza_se_por, contém

--- OBJETIVOS ---
{}

--- REFERÊNCIAS ---
{}

--- CONTEÚDO ---
{}
"#,
        truncate_chars(objectives, MAX_OBJECTIVES_CHARS),
        truncate_chars(references, MAX_REFERENCES_CHARS),
        truncate_chars(content, MAX_CONTENT_CHARS)
    )
}

/// Truncate to at most `max_chars` characters, at a char boundary so
/// multi-byte accented text is never split.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
