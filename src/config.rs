use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 결과를 지수 표기로 보여줄지 여부
    pub scientific_notation: bool,
    /// 기록 화면에 보여줄 최근 항목 수
    pub history_display_limit: usize,
    /// 내장 단위 표 대신 사용할 TOML 레지스트리 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<String>,
    /// 번역 덮어쓰기 파일(`<lang>.toml`)이 있는 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            scientific_notation: false,
            history_display_limit: 5,
            registry_path: None,
            locale_dir: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일과 그 경로. 저장 시 같은 경로에 쓴다.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: Config,
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile, ConfigError> {
    let path = path.as_ref().to_path_buf();
    if path.exists() {
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 파일을 불러왔습니다");
        Ok(ConfigFile { path, config })
    } else {
        let file = ConfigFile {
            path,
            config: Config::default(),
        };
        file.save()?;
        tracing::info!(path = %file.path.display(), "기본 설정 파일을 생성했습니다");
        Ok(file)
    }
}

impl ConfigFile {
    /// 설정을 원래 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self.config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
