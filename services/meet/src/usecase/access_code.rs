use chrono::{DateTime, Utc};

use huddle_access_code::{CodeGenerator, CodeResolver, GeneratedCode, Resolution, parse_meeting_time};

use crate::error::MeetServiceError;

// ── GenerateCode ─────────────────────────────────────────────────────────────

pub struct GenerateCodeInput {
    pub client_name: String,
    pub meeting_date_time: String,
}

pub struct GenerateCodeUseCase {
    pub generator: CodeGenerator,
}

impl GenerateCodeUseCase {
    pub fn execute(&self, input: GenerateCodeInput) -> Result<GeneratedCode, MeetServiceError> {
        let meeting_time = parse_meeting_time(&input.meeting_date_time)?;
        let generated = self.generator.generate(&input.client_name, meeting_time)?;
        tracing::info!(
            meeting_start = %generated.meeting_start,
            window_end = %generated.window.end,
            "access code generated"
        );
        Ok(generated)
    }
}

// ── ValidateCode ─────────────────────────────────────────────────────────────

pub struct ValidateCodeInput {
    pub code: String,
    pub client_name: Option<String>,
}

pub struct ValidateCodeUseCase {
    pub resolver: CodeResolver,
}

impl ValidateCodeUseCase {
    /// Resolve a code against `now`. Never fails: rejection is a [`Resolution::Invalid`].
    pub fn execute(&self, input: ValidateCodeInput, now: DateTime<Utc>) -> Resolution {
        let label = input.client_name.as_deref().unwrap_or_default();
        let resolution = self.resolver.validate(&input.code, label, now);
        match &resolution {
            Resolution::Valid { meeting_start, .. } => {
                tracing::info!(%meeting_start, "access code accepted");
            }
            Resolution::Invalid(reason) => {
                tracing::info!(?reason, "access code rejected");
            }
        }
        resolution
    }
}
