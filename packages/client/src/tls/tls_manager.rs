//! Client TLS configuration
//!
//! Two rustls configurations are built up front, one verifying the peer and one
//! accepting any certificate. Per-call options pick one and may replace the
//! ALPN list.

use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};

use super::errors::TlsError;
use super::verifier::AcceptAnyServerCert;
use crate::config::TlsConfig;
use crate::connect::options::TlsOptions;

#[derive(Debug, Clone)]
pub struct TlsManager {
    verified: Arc<ClientConfig>,
    unverified: Arc<ClientConfig>,
}

impl TlsManager {
    /// Build both client configurations.
    ///
    /// # Errors
    ///
    /// Returns `TlsError` if the crypto provider rejects the protocol versions
    /// or no root certificate could be loaded.
    pub fn new(config: &TlsConfig) -> Result<Self, TlsError> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let roots = load_root_store(config.use_native_certs)?;
        let alpn = encode_alpn(&config.alpn_protocols);

        let mut verified = ClientConfig::builder_with_provider(Arc::clone(&provider))
            .with_safe_default_protocol_versions()?
            .with_root_certificates(roots)
            .with_no_client_auth();
        verified.alpn_protocols.clone_from(&alpn);

        let mut unverified = ClientConfig::builder_with_provider(Arc::clone(&provider))
            .with_safe_default_protocol_versions()?
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert::new(provider)))
            .with_no_client_auth();
        unverified.alpn_protocols = alpn;

        Ok(Self {
            verified: Arc::new(verified),
            unverified: Arc::new(unverified),
        })
    }

    /// The configuration for one upgrade.
    ///
    /// Shared unless the options carry their own ALPN list.
    #[must_use]
    pub fn client_config(&self, options: &TlsOptions) -> Arc<ClientConfig> {
        let base = if options.rejects_unauthorized() {
            &self.verified
        } else {
            &self.unverified
        };

        match &options.alpn_protocols {
            Some(protocols) => {
                let alpn = encode_alpn(protocols);
                if alpn == base.alpn_protocols {
                    return Arc::clone(base);
                }
                let mut config = ClientConfig::clone(base);
                config.alpn_protocols = alpn;
                Arc::new(config)
            }
            None => Arc::clone(base),
        }
    }
}

fn encode_alpn(protocols: &[String]) -> Vec<Vec<u8>> {
    protocols.iter().map(|p| p.as_bytes().to_vec()).collect()
}

fn load_root_store(use_native_certs: bool) -> Result<RootCertStore, TlsError> {
    let mut root_store = RootCertStore::empty();

    if use_native_certs {
        let cert_result = rustls_native_certs::load_native_certs();
        for cert in cert_result.certs {
            if let Err(e) = root_store.add(cert) {
                tracing::warn!("Failed to add system certificate: {}", e);
            }
        }
        for err in &cert_result.errors {
            tracing::warn!("Certificate load error: {}", err);
        }
        tracing::debug!("Loaded {} system certificates", root_store.len());
    }

    if root_store.is_empty() {
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    }

    if root_store.is_empty() {
        return Err(TlsError::EmptyRootStore);
    }
    Ok(root_store)
}
