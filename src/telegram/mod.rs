pub mod api;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod file;
pub mod options;
pub mod request;
pub mod transport;
pub mod types;

pub use api::Bot;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use file::InputFile;
pub use options::{OptionBag, Params, SendMediaOptions, SendMessageOptions};
pub use transport::{HttpTransport, RawResponse, Transport};
