use std::sync::Arc;
use std::time::Duration;

use crate::auth::{FixedCodeVerifier, JwtService};
use crate::core::{Config, Result};
use crate::db::seed::initial_products;
use crate::db::{RedbKv, Storage};
use crate::orders::CartSessions;
use crate::services::{
    CatalogService, DisabledGenerator, Enrichment, GeminiClient, IdentityService,
    InquiryService, OrderService, TextGenerator,
};

/// Server state, shared handles to every service
///
/// Cloning is shallow: every field is an `Arc` or a cheap handle.
///
/// | Field | Description |
/// |------|------|
/// | config | configuration (immutable) |
/// | storage | persistence adapter |
/// | catalog | product catalog |
/// | orders | orders |
/// | inquiries | contact inquiries |
/// | identity | simulated login |
/// | jwt | JWT service |
/// | carts | per-session carts (memory only) |
/// | enrichment | text generation |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub storage: Storage,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub inquiries: InquiryService,
    pub identity: IdentityService,
    pub jwt: Arc<JwtService>,
    pub carts: Arc<CartSessions>,
    pub enrichment: Enrichment,
}

impl ServerState {
    /// Open the database under the work dir and build every service
    pub fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(dir) = db_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let storage = Storage::new(RedbKv::open(&db_path)?);
        tracing::info!(path = %db_path.display(), "Database opened");

        let generator: Arc<dyn TextGenerator> = match &config.gemini_api_key {
            Some(key) => {
                let mut client = GeminiClient::new(key.clone(), config.gemini_model.clone());
                if let Some(url) = &config.gemini_base_url {
                    client = client.with_base_url(url.clone());
                }
                tracing::info!(model = %config.gemini_model, "Text generation enabled");
                Arc::new(client)
            }
            None => {
                tracing::info!("No text generation key configured, using fallback copy");
                Arc::new(DisabledGenerator)
            }
        };

        Self::with_storage(config.clone(), storage, generator)
    }

    /// Build from an injected store and text generator (tests pass in-memory storage)
    ///
    /// Seeds and reconciles the catalog.
    pub fn with_storage(
        config: Config,
        storage: Storage,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self> {
        storage.initialize(&initial_products())?;

        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        let identity = IdentityService::new(
            storage.clone(),
            Arc::new(FixedCodeVerifier::new(config.otp_code.clone())),
            jwt.clone(),
            config.admin_phone.clone(),
        );
        let enrichment = Enrichment::new(
            generator,
            Duration::from_millis(config.text_gen_timeout_ms),
        );

        Ok(Self {
            catalog: CatalogService::new(storage.clone()),
            orders: OrderService::new(storage.clone()),
            inquiries: InquiryService::new(storage.clone()),
            identity,
            jwt,
            carts: Arc::new(CartSessions::new()),
            enrichment,
            storage,
            config,
        })
    }
}
