//! ポート定義

pub mod driven;
