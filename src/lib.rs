//! translation-patcher
//!
//! JSON 翻訳ストアに更新セットをマージし、古くなったロケール別の文字列を修正するツール

pub mod audit;
pub mod config;
pub mod patcher;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use patcher::{
    PatchError,
    PatchReport,
    run,
    run_workspace,
};
