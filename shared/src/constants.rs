//! Identifiers shared by the API server and its client application.

/// The one application identifier the API issues tokens to.
pub const FRONT_END_APPLICATION_ID: &str = "f45dbc57-7d34-4f14-8c7b-d9c21ea2f523";

/// Claim carrying the calling application's identity
pub const APPLICATION_ID_CLAIM: &str = "ApplicationId";

/// Policy every student endpoint is guarded by
pub const FRONT_END_APPLICATION_POLICY: &str = "FrontEndApplicationPolicy";

/// Client-side storage key of the persisted token
pub const TOKEN_STORAGE_KEY: &str = "AzureStudentsApiToken";
