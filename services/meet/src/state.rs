use std::sync::Arc;

use huddle_access_code::{CodeGenerator, CodeResolver, CodeSecret};

use crate::config::MeetConfig;
use crate::infra::jwt::JwtSigner;
use crate::usecase::access_code::{GenerateCodeUseCase, ValidateCodeUseCase};
use crate::usecase::admin::CheckAdminUseCase;
use crate::usecase::token::IssueTokenUseCase;

/// Shared application state passed to every handler via axum `State`.
///
/// Immutable after start-up; handlers share it freely across tasks.
#[derive(Clone)]
pub struct AppState {
    pub generator: CodeGenerator,
    pub resolver: CodeResolver,
    pub signer: JwtSigner,
    pub app_id: Arc<str>,
    pub moderator_marker: Arc<str>,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn from_config(config: &MeetConfig) -> anyhow::Result<Self> {
        let generator = CodeGenerator::new(CodeSecret::new(config.access_code_secret.as_str()));
        Ok(Self {
            resolver: CodeResolver::new(generator.clone()),
            generator,
            signer: JwtSigner::from_config(&config.signing_key, &config.app_id)?,
            app_id: config.app_id.as_str().into(),
            moderator_marker: config.moderator_marker.as_str().into(),
            admin_password: config.admin_password.as_str().into(),
        })
    }

    pub fn generate_code_usecase(&self) -> GenerateCodeUseCase {
        GenerateCodeUseCase {
            generator: self.generator.clone(),
        }
    }

    pub fn validate_code_usecase(&self) -> ValidateCodeUseCase {
        ValidateCodeUseCase {
            resolver: self.resolver.clone(),
        }
    }

    pub fn issue_token_usecase(&self) -> IssueTokenUseCase<JwtSigner> {
        IssueTokenUseCase {
            signer: self.signer.clone(),
            app_id: self.app_id.to_string(),
            moderator_marker: self.moderator_marker.to_string(),
        }
    }

    pub fn check_admin_usecase(&self) -> CheckAdminUseCase {
        CheckAdminUseCase {
            admin_password: self.admin_password.to_string(),
        }
    }
}
