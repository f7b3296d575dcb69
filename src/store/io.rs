//! 翻訳ファイルの読み書き

use std::fs;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tempfile::NamedTempFile;

use super::{
    LocaleTable,
    StoreError,
    TranslationStore,
    UpdateSet,
};

/// 翻訳ストアを読み込む
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー（文字列以外の値を含む場合も含む）
pub fn load_store(path: &Path) -> Result<TranslationStore, StoreError> {
    let store: TranslationStore = read_json(path)?;
    tracing::debug!(path = %path.display(), locales = store.len(), "Loaded translation store");
    Ok(store)
}

/// 更新セットを読み込む
///
/// `merge_locales` に含まれるロケールだけを `key -> text` として解釈する。
/// それ以外のロケールは中身を検査せずに読み飛ばす。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー（マージ対象ロケールに文字列以外の値がある場合を含む）
pub fn load_updates(path: &Path, merge_locales: &[String]) -> Result<UpdateSet, StoreError> {
    let raw: IndexMap<String, Value> = read_json(path)?;

    let mut locales = IndexMap::new();
    for (locale, entries) in raw {
        if !merge_locales.contains(&locale) {
            tracing::debug!(locale = %locale, "Update set locale is not in the merge list, skipped");
            continue;
        }
        let table: LocaleTable = serde_json::from_value(entries)
            .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })?;
        locales.insert(locale, table);
    }

    tracing::debug!(path = %path.display(), locales = locales.len(), "Loaded update set");
    Ok(locales.into_iter().collect())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|source| StoreError::Read { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
        .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })
}

/// ストアを JSON 文字列に変換する
///
/// インデントは 2 スペース、非 ASCII 文字はエスケープしない。末尾の改行は付けない。
///
/// # Errors
/// - シリアライズエラー
pub fn to_json(store: &TranslationStore) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// ストアをファイルに書き戻す
///
/// 同じディレクトリの一時ファイルに全内容を書き込んでから置き換えるため、
/// 途中で失敗しても元のファイルは壊れない。既存ファイルのパーミッションは引き継ぐ。
/// `path` がシンボリックリンクの場合はリンク先のファイルを置き換え、リンク自体は残す。
///
/// # Errors
/// - シリアライズエラー
/// - 一時ファイルの作成・書き込み・置き換えの失敗
pub fn save_store(store: &TranslationStore, path: &Path) -> Result<(), StoreError> {
    let json = to_json(store)?;
    let write_error = |source| StoreError::Write { path: path.to_path_buf(), source };

    // リンク先に書き込む。まだ存在しないファイルはそのまま
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;

    if let Ok(metadata) = fs::metadata(&target) {
        file.as_file().set_permissions(metadata.permissions()).map_err(write_error)?;
    }

    file.persist(&target).map_err(|e| write_error(e.error))?;
    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        bytes = json.len(),
        "Saved translation store"
    );

    Ok(())
}
