//! Settings Loader
//!
//! `.fws` 폴더 기반 계층형 설정 로더
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.fws/settings.json`
//! 2. Project-level: `<dir>/.fws/settings.json`
//! 3. Local (gitignored): `<dir>/.fws/settings.local.json`
//!
//! 각 레벨의 설정이 이전 레벨을 오버라이드합니다. `.toml` 확장자는 TOML로,
//! 그 외는 JSON으로 파싱합니다.

use super::settings::{FilterSettings, LOCAL_SETTINGS_FILE, SETTINGS_FILE};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".fws";

/// 설정 파일 경로 정보
#[derive(Debug, Clone)]
struct SettingsPath {
    path: PathBuf,
    /// 높을수록 우선
    priority: u8,
    description: &'static str,
}

/// Layered settings loader
pub struct SettingsLoader {
    search_paths: Vec<SettingsPath>,
}

impl SettingsLoader {
    /// 기본 검색 경로로 생성
    pub fn new(working_dir: &Path) -> Self {
        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(SettingsPath {
                path: home.join(CONFIG_DIR_NAME).join(SETTINGS_FILE),
                priority: 10,
                description: "User settings",
            });
        }

        paths.push(SettingsPath {
            path: working_dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE),
            priority: 20,
            description: "Project settings",
        });

        paths.push(SettingsPath {
            path: working_dir.join(CONFIG_DIR_NAME).join(LOCAL_SETTINGS_FILE),
            priority: 30,
            description: "Local settings",
        });

        paths.sort_by_key(|p| p.priority);

        Self { search_paths: paths }
    }

    /// 커스텀 검색 경로로 생성 (앞쪽이 낮은 우선순위)
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let search_paths = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| SettingsPath {
                path,
                priority: i.min(u8::MAX as usize) as u8,
                description: "Custom",
            })
            .collect();

        Self { search_paths }
    }

    /// 모든 경로에서 로드하여 병합
    ///
    /// Missing files are skipped; broken files are logged and skipped.
    pub fn load_all(&self) -> FilterSettings {
        let mut merged = FilterSettings::new();

        for entry in &self.search_paths {
            if !entry.path.exists() {
                continue;
            }
            match load_file(&entry.path) {
                Ok(settings) => {
                    info!(
                        "Loaded {} from: {}",
                        entry.description,
                        entry.path.display()
                    );
                    merged.merge(settings);
                }
                Err(e) => {
                    warn!(
                        "Failed to load settings from {}: {}",
                        entry.path.display(),
                        e
                    );
                }
            }
        }

        merged
    }

    /// 존재하는 설정 파일 목록
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter(|p| p.path.exists())
            .map(|p| p.path.clone())
            .collect()
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 파일에서 설정 로드 (확장자로 포맷 결정)
pub fn load_file(path: &Path) -> Result<FilterSettings> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings(&content, is_toml(path)).map_err(|e| {
        Error::Config(format!("Invalid settings at {}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded settings from {}: token endpoint {:?}, max input {:?}",
        path.display(),
        settings.classifier.token_file_endpoint,
        settings.max_input_bytes
    );

    Ok(settings)
}

/// 문자열에서 설정 파싱
pub fn parse_settings(content: &str, toml_format: bool) -> Result<FilterSettings> {
    if toml_format {
        Ok(toml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loader_new() {
        let loader = SettingsLoader::new(Path::new("."));
        assert!(loader.search_paths.len() >= 2);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(
            &file,
            r#"{ "classifier": { "tokenParam": "wstoken" }, "maxInputBytes": 2048 }"#,
        )
        .unwrap();

        let settings = load_file(&file).unwrap();
        assert_eq!(settings.classifier.token_param, "wstoken");
        assert_eq!(settings.max_input_bytes, Some(2048));
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.toml");
        fs::write(
            &file,
            "uaPatternSizeLimit = 4096\n\n[classifier]\nappAgentMarker = \"CompanionApp\"\n",
        )
        .unwrap();

        let settings = load_file(&file).unwrap();
        assert_eq!(settings.ua_pattern_size_limit, 4096);
        assert_eq!(settings.classifier.app_agent_marker, "CompanionApp");
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_file(&missing), Err(Error::NotFound(_))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_file(&broken), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_all_layers() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("project.json");
        let local = dir.path().join("local.json");
        let broken = dir.path().join("broken.json");

        fs::write(&project, r#"{ "classifier": { "tokenParam": "wstoken" } }"#).unwrap();
        fs::write(&broken, "][").unwrap();
        fs::write(&local, r#"{ "maxInputBytes": 10 }"#).unwrap();

        let loader = SettingsLoader::with_paths(vec![
            project.clone(),
            broken,
            dir.path().join("absent.json"),
            local,
        ]);
        let settings = loader.load_all();

        assert_eq!(settings.classifier.token_param, "wstoken");
        assert_eq!(settings.max_input_bytes, Some(10));
        assert_eq!(loader.existing_files().len(), 3);
        assert_eq!(loader.existing_files()[0], project);
    }
}
