//! Resend email gateway
//!
//! Owns the Resend credential and performs the two supported send operations:
//! a raw email (`html` and/or `text`) and a templated email. Public option types
//! are provider-agnostic; [`ResendClient`] translates them into Resend's wire shape,
//! fills in the configured sender defaults and funnels every failure into a single
//! [`GatewayError`].
//!
//! ```ignore
//! use resend_client::{ResendClient, ResendConfig, SendEmailOptions};
//!
//! let client = ResendClient::new(ResendConfig::from_env()?)?;
//! let result = client
//!     .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_html("<p>hi</p>"))
//!     .await?;
//! println!("sent {}", result.id);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod transport;
pub mod types;

pub use client::ResendClient;
pub use config::ResendConfig;
pub use error::{GatewayError, GatewayResult};
pub use payload::{EmailPayload, OutboundPayload, TemplatePayload, WireAttachment};
pub use transport::{
    HttpTransport, MailTransport, ProviderResponse, RecordingTransport, TransportError,
};
pub use types::{Attachment, SendEmailOptions, SendResult, SendTemplateEmailOptions, Tag};
