mod client;
mod common;
mod options;

pub use client::{AviSession, AviSessionBuilder, RefreshTokenCallback};
pub use common::{CollectionResult, PatchOp};
pub use options::ApiOptions;
