use crate::api::OAuthCredentials;
use crate::cli::TwitterSettings;

/// Provider credentials as configured; any of the four may be missing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

impl ProviderCredentials {
    /// True iff all four values are present.
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// The signing credentials, when every value is present.
    pub fn complete(&self) -> Option<OAuthCredentials> {
        Some(OAuthCredentials {
            consumer_key: self.consumer_key.clone()?,
            consumer_secret: self.consumer_secret.clone()?,
            access_token: self.access_token.clone()?,
            access_token_secret: self.access_token_secret.clone()?,
        })
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("complete", &self.is_complete())
            .finish()
    }
}

/// Reads the four credential values from the startup configuration. Never fails.
pub fn resolve(settings: &TwitterSettings) -> ProviderCredentials {
    ProviderCredentials {
        consumer_key: settings.consumer_key.clone(),
        consumer_secret: settings.consumer_secret.clone(),
        access_token: settings.access_token.clone(),
        access_token_secret: settings.access_token_secret.clone(),
    }
}
