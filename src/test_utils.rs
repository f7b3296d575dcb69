//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::expect_used)]

use serde_json::Value;

use crate::store::{
    TranslationStore,
    UpdateSet,
};

/// `json!` リテラルから翻訳ストアを作成する
pub(crate) fn store_from(json: Value) -> TranslationStore {
    serde_json::from_value(json).expect("test store must be locale -> key -> string")
}

/// `json!` リテラルから更新セットを作成する
pub(crate) fn updates_from(json: Value) -> UpdateSet {
    serde_json::from_value(json).expect("test update set must be locale -> key -> string")
}
