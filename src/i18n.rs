use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ON: &str = "general.on";
    pub const OFF: &str = "general.off";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_CLEAR_HISTORY: &str = "main_menu.clear_history";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_CATEGORY_LIST: &str = "convert.category_list";
    pub const CONVERT_UNIT_LIST: &str = "convert.unit_list";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_PROMPT_FROM_UNIT: &str = "convert.prompt_from_unit";
    pub const CONVERT_PROMPT_TO_UNIT: &str = "convert.prompt_to_unit";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_SAME_UNIT: &str = "convert.same_unit";
    pub const CONVERT_FAILED: &str = "convert.failed";

    pub const COMPARISON_TITLE: &str = "comparison.title";
    pub const COMPARISON_EMPTY: &str = "comparison.empty";

    pub const PRESETS_HEADING: &str = "presets.heading";
    pub const PRESETS_SELECTED: &str = "presets.selected";
    pub const PRESETS_NO_CATEGORY: &str = "presets.no_category";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_CLEARED: &str = "history.cleared";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const LIST_CATEGORIES: &str = "list.categories";
    pub const LIST_PRESET_CATEGORIES: &str = "list.preset_categories";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if let (Some(dir), None) = (pack_dir, overrides.as_ref()) {
            tracing::debug!(dir, lang = lang_code, "언어팩을 찾지 못해 내장 문자열을 사용합니다");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or("[missing translation]")
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어 코드를 결정한다. 모두 실패하면 `en`.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    [cli_arg, config_lang]
        .into_iter()
        .flatten()
        .find_map(supported_language)
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

/// `ko`, `en-US`, `ko_KR.UTF-8` 같은 코드에서 지원 언어만 골라낸다. `auto`는 None.
fn supported_language(code: &str) -> Option<String> {
    let base = code.trim().split(['.', '_', '-']).next()?.to_lowercase();
    matches!(base.as_str(), "ko" | "en").then_some(base)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .into_iter()
        .chain(["LC_ALL", "LANG"].iter().filter_map(|var| std::env::var(var).ok()))
        .find_map(|loc| supported_language(&loc))
}

/// `<dir>/<lang>.toml`을 읽고, 없으면 `<dir>/<기본 언어>.toml`을 읽는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let read = |code: &str| fs::read_to_string(Path::new(dir).join(format!("{code}.toml"))).ok();
    let content = read(lang).or_else(|| {
        let (base, _) = lang.split_once(['-', '_'])?;
        read(base)
    })?;
    let table: toml::Table = toml::from_str(&content).ok()?;
    let mut map = HashMap::new();
    flatten_strings("", &table, &mut map);
    (!map.is_empty()).then_some(map)
}

/// 중첩 테이블의 문자열 값을 `section.key` 형태의 평평한 맵으로 모은다.
fn flatten_strings(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (name, value) in table {
        let key = match prefix {
            "" => name.clone(),
            _ => format!("{prefix}.{name}"),
        };
        match value {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Table(inner) => flatten_strings(&key, inner, out),
            _ => {}
        }
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ON => "켜짐",
        OFF => "꺼짐",
        MAIN_MENU_TITLE => "\n=== 만능 단위 변환기 ===",
        MAIN_MENU_CONVERT => "1) 단위 변환",
        MAIN_MENU_PRESETS => "2) 프리셋",
        MAIN_MENU_HISTORY => "3) 변환 기록",
        MAIN_MENU_CLEAR_HISTORY => "4) 기록 지우기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CONVERT_HEADING => "\n-- 단위 변환 --",
        CONVERT_CATEGORY_LIST => "카테고리:",
        CONVERT_UNIT_LIST => "단위 ({category}):",
        CONVERT_PROMPT_VALUE => "값 입력: ",
        CONVERT_PROMPT_FROM_UNIT => "입력 단위 번호: ",
        CONVERT_PROMPT_TO_UNIT => "변환 단위 번호: ",
        CONVERT_RESULT => "{value} {from} = {result} {to}",
        CONVERT_SAME_UNIT => "서로 다른 단위를 선택하세요.",
        CONVERT_FAILED => "변환에 실패했습니다. 단위를 확인한 뒤 다시 시도하세요.",
        COMPARISON_TITLE => "{value} {unit} 을(를) 다른 단위로 나타낸 비교",
        COMPARISON_EMPTY => "비교할 다른 단위가 없습니다.",
        PRESETS_HEADING => "\n-- 자주 쓰는 변환 프리셋 --",
        PRESETS_SELECTED => "{label}: {value} {unit}",
        PRESETS_NO_CATEGORY => "프리셋 단위 {unit} 이(가) 속한 카테고리가 없습니다.",
        HISTORY_HEADING => "\n-- 최근 변환 기록 --",
        HISTORY_EMPTY => "기록이 없습니다.",
        HISTORY_CLEARED => "기록을 지웠습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "지수 표기: {scientific}, 언어: {language}",
        SETTINGS_OPTIONS => "1) 지수 표기 전환  2) 언어 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        LIST_CATEGORIES => "단위 카테고리:",
        LIST_PRESET_CATEGORIES => "프리셋 카테고리:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        ON => "on",
        OFF => "off",
        MAIN_MENU_TITLE => "\n=== Universal Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Convert",
        MAIN_MENU_PRESETS => "2) Presets",
        MAIN_MENU_HISTORY => "3) History",
        MAIN_MENU_CLEAR_HISTORY => "4) Clear history",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CONVERT_HEADING => "\n-- Unit Conversion --",
        CONVERT_CATEGORY_LIST => "Categories:",
        CONVERT_UNIT_LIST => "Units ({category}):",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_PROMPT_FROM_UNIT => "From unit number: ",
        CONVERT_PROMPT_TO_UNIT => "To unit number: ",
        CONVERT_RESULT => "{value} {from} = {result} {to}",
        CONVERT_SAME_UNIT => "Please select different units for conversion.",
        CONVERT_FAILED => "Conversion failed. Please check the units and try again.",
        COMPARISON_TITLE => "Comparison of {value} {unit} in different units",
        COMPARISON_EMPTY => "No other units to compare.",
        PRESETS_HEADING => "\n-- Common Conversion Presets --",
        PRESETS_SELECTED => "{label}: {value} {unit}",
        PRESETS_NO_CATEGORY => "No category contains the preset unit {unit}.",
        HISTORY_HEADING => "\n-- Recent Conversions --",
        HISTORY_EMPTY => "No conversions yet.",
        HISTORY_CLEARED => "History cleared.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Scientific notation: {scientific}, language: {language}",
        SETTINGS_OPTIONS => "1) Toggle scientific notation  2) Change language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        LIST_CATEGORIES => "Unit categories:",
        LIST_PRESET_CATEGORIES => "Preset categories:",
        _ => return None,
    })
}
