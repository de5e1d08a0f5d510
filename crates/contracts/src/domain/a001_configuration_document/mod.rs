//! Configuration documents (yapılandırma evrakları) and their cards

pub mod aggregate;
pub mod dto;
pub mod registry;

pub use aggregate::{
    build_document_list, detail_href, ConfigurationDocument, DocumentCard, RawDocument, DETAIL_PATH,
};
pub use dto::{ConfigurationDetail, ConfigurationListResponse, DetailQuery, UNKNOWN_DOCUMENT_NAME};
pub use registry::builtin_documents;
