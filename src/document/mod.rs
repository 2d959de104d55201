/// did:cndid documents
///
/// Typed resolution records decoded from the backend, and the reshaping
/// that produces the document returned by the driver.

pub mod reshape;
pub mod types;

pub use reshape::reshape_document;
pub use types::DidResolution;
