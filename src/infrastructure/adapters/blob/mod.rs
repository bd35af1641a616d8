//! 对象存储适配器

mod file_blob_store;
mod vercel_blob;

pub use file_blob_store::FileBlobStore;
pub use vercel_blob::{VercelBlobConfig, VercelBlobStore};
