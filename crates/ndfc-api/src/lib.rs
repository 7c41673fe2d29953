// ndfc-api: Async Rust client for a fabric controller's management API
//
// Business objects (credentials, fabric details, switch inventory) build a
// request from a fixed endpoint descriptor, validate their input, and send a
// single call through an injected `Sender` wrapped in `RestSend`.

pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod fabric;
pub mod rest_send;
pub mod sender;
pub mod switches;
pub mod transport;
pub mod validators;

pub use error::{Error, LookupKind};
pub use rest_send::{CommitResult, ResponseHandler, RestSend, SendOutcome};
pub use sender::{ControllerResponse, HttpSender, RestRequest, ScriptedSender, Sender, Verb};
pub use transport::{ApiKeyAuth, TlsMode, TransportConfig};
