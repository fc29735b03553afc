use thiserror::Error;

use crate::config::{self, ConfigError, ConfigFile};
use crate::conversion::{self, ComparisonSet, ConversionError};
use crate::history::{History, HistoryEntry};
use crate::i18n::{self, Translator};
use crate::preset::PresetParseError;
use crate::registry::{PresetEntry, Registry, RegistryError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 표 조회/로드 오류
    #[error("레지스트리 오류: {0}")]
    Registry(#[from] RegistryError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 프리셋 문자열 오류
    #[error("{0}")]
    Preset(#[from] PresetParseError),
    /// 카테고리에 없는 표시 이름
    #[error("카테고리 {category}에 없는 단위: {name}")]
    UnknownUnitName { category: String, name: String },
    /// 어떤 카테고리에도 속하지 않는 단위
    #[error("단위 {0}이(가) 속한 카테고리가 없습니다")]
    NoCategoryForUnit(String),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 변환 한 번의 결과와 같은 값의 카테고리 비교.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub result: f64,
    pub comparison: ComparisonSet,
}

/// 프리셋 단위가 속한 카테고리와 그 안의 표시 이름.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetUnit {
    pub category: String,
    pub name: String,
    pub symbol: String,
}

/// 한 사용자 세션의 상태. 기록은 세션이 소유하며 변환 엔진은 상태를 갖지 않는다.
#[derive(Debug)]
pub struct Session {
    pub config: ConfigFile,
    pub translator: Translator,
    pub registry: Registry,
    pub history: History,
}

impl Session {
    pub fn new(config: ConfigFile, translator: Translator, registry: Registry) -> Self {
        Self {
            config,
            translator,
            registry,
            history: History::new(),
        }
    }

    /// 표시 이름으로 지정된 두 단위 사이를 변환하고 기록과 비교 결과를 남긴다.
    pub fn convert_and_record(
        &mut self,
        category: &str,
        value: f64,
        from_name: &str,
        to_name: &str,
    ) -> Result<ConversionOutcome, AppError> {
        let from = self.symbol_of(category, from_name)?;
        let to = self.symbol_of(category, to_name)?;
        tracing::debug!(category, value, from = %from, to = %to, "변환 요청");

        let result = conversion::convert(value, &from, &to).map_err(|err| {
            tracing::warn!(%err, "변환 실패");
            err
        })?;
        self.history
            .push(HistoryEntry::now(value, from_name, result, to_name));

        let comparison = conversion::compare(&self.registry, value, &from, category)?;
        tracing::debug!(entries = comparison.len(), "비교 결과 생성");
        Ok(ConversionOutcome { result, comparison })
    }

    /// 프리셋을 해석해 값과 그 단위가 속한 카테고리/표시 이름을 찾는다.
    pub fn select_preset(&self, preset: &PresetEntry) -> Result<(f64, PresetUnit), AppError> {
        let (value, token) = preset.parse()?;
        let unit = conversion::resolve_unit(&token)?;
        let category = self
            .registry
            .category_for_symbol(&token)
            .ok_or_else(|| AppError::NoCategoryForUnit(token.clone()))?;
        let entry = category
            .units
            .iter()
            .find(|u| conversion::resolve_unit(&u.symbol).ok() == Some(unit))
            .ok_or_else(|| AppError::NoCategoryForUnit(token.clone()))?;
        Ok((
            value,
            PresetUnit {
                category: category.id.clone(),
                name: entry.name.clone(),
                symbol: entry.symbol.clone(),
            },
        ))
    }

    /// 언어 설정을 바꾸고 번역기를 다시 만든다.
    pub fn set_language(&mut self, code: &str) {
        self.config.config.language = code.to_string();
        let resolved = i18n::resolve_language(None, Some(code));
        self.translator =
            Translator::new_with_pack(&resolved, self.config.config.locale_dir.as_deref());
    }

    fn symbol_of(&self, category: &str, name: &str) -> Result<String, AppError> {
        self.registry
            .category(category)?
            .symbol_of(name)
            .map(String::from)
            .ok_or_else(|| AppError::UnknownUnitName {
                category: category.to_string(),
                name: name.to_string(),
            })
    }
}

/// 시작 단계의 실패. 오류를 표시할 번역기를 함께 담는다.
#[derive(Debug)]
pub struct StartupError {
    pub translator: Translator,
    pub error: AppError,
}

/// 설정과 레지스트리를 불러와 세션을 만든다.
///
/// 언어는 CLI 플래그 → 설정 → 시스템 순으로 정한다. 설정을 읽지 못하면 CLI 플래그와
/// 시스템 로케일만으로 정한 번역기로 오류를 돌려준다.
pub fn start_session(cli_lang: Option<&str>, config_path: &str) -> Result<Session, StartupError> {
    let cfg = config::load_or_default(config_path).map_err(|err| StartupError {
        translator: Translator::new(&i18n::resolve_language(cli_lang, None)),
        error: err.into(),
    })?;
    let lang = i18n::resolve_language(cli_lang, Some(cfg.config.language.as_str()));
    let translator = Translator::new_with_pack(&lang, cfg.config.locale_dir.as_deref());
    let registry = match load_registry(&cfg) {
        Ok(registry) => registry,
        Err(error) => return Err(StartupError { translator, error }),
    };
    tracing::debug!(lang = translator.language_code(), "세션 시작");
    Ok(Session::new(cfg, translator, registry))
}

/// 설정에 지정된 레지스트리를 불러온다. 없으면 내장 표를 사용한다.
pub fn load_registry(config: &ConfigFile) -> Result<Registry, AppError> {
    match config.config.registry_path.as_deref() {
        Some(path) => {
            let registry = Registry::load(path)?;
            tracing::info!(
                path,
                categories = registry.categories().len(),
                "사용자 단위 표를 불러왔습니다"
            );
            Ok(registry)
        }
        None => {
            let registry = Registry::builtin().clone();
            registry.validate()?;
            Ok(registry)
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&session.translator)? {
            MenuChoice::Convert => ui_cli::handle_convert(session)?,
            MenuChoice::Presets => ui_cli::handle_presets(session)?,
            MenuChoice::History => ui_cli::handle_history(session),
            MenuChoice::ClearHistory => ui_cli::handle_clear_history(session),
            MenuChoice::Settings => {
                ui_cli::handle_settings(session)?;
                session.config.save()?;
            }
            MenuChoice::Exit => {
                session.config.save()?;
                println!("{}", session.translator.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 단발성 변환 명령. 단위 기호를 직접 받는다.
pub fn print_convert(value: f64, from: &str, to: &str, scientific: bool) -> Result<(), AppError> {
    let result = conversion::convert(value, from, to)?;
    println!("{value} {from} = {} {to}", ui_cli::format_value(result, scientific));
    tracing::debug!(value, from, to, result, "변환 완료");
    Ok(())
}

/// 단발성 비교 명령. 카테고리를 생략하면 단위 기호로 추정한다.
pub fn print_compare(
    session: &Session,
    value: f64,
    from: &str,
    category: Option<&str>,
    scientific: bool,
) -> Result<(), AppError> {
    // 원본 단위를 해석할 수 없으면 비교 결과가 항상 비어 있다
    conversion::resolve_unit(from)?;
    let category = match category {
        Some(c) => c.to_string(),
        None => session
            .registry
            .category_for_symbol(from)
            .map(|c| c.id.clone())
            .ok_or_else(|| AppError::NoCategoryForUnit(from.to_string()))?,
    };
    let set = conversion::compare(&session.registry, value, from, &category)?;
    let tr = &session.translator;
    println!(
        "{}",
        tr.tf(
            i18n::keys::COMPARISON_TITLE,
            &[("value", value.to_string()), ("unit", from.to_string())],
        )
    );
    if set.is_empty() {
        println!("{}", tr.t(i18n::keys::COMPARISON_EMPTY));
    } else {
        print!("{}", ui_cli::render_comparison_chart(&set, scientific));
    }
    Ok(())
}

pub fn print_categories(session: &Session) {
    println!("{}", session.translator.t(i18n::keys::LIST_CATEGORIES));
    for id in session.registry.categories() {
        println!("  {id}");
    }
}

pub fn print_units(session: &Session, category: &str) -> Result<(), AppError> {
    for unit in session.registry.units(category)? {
        println!("  {:<22} {}", unit.name, unit.symbol);
    }
    Ok(())
}

/// 프리셋 목록. 카테고리를 생략하면 전부 출력한다.
pub fn print_presets(session: &Session, preset_category: Option<&str>) -> Result<(), AppError> {
    let ids: Vec<&str> = match preset_category {
        Some(id) => vec![id],
        None => session.registry.preset_categories(),
    };
    for id in ids {
        println!("{id}");
        for preset in session.registry.presets(id)? {
            println!("  {:<26} {}", preset.label, preset.literal);
        }
    }
    Ok(())
}
