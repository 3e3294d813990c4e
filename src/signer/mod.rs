mod backend;
mod s3;

pub use backend::UrlSigner;
pub use s3::S3Signer;
