use std::io::{self, BufRead, Write};

use crate::app::{AppError, Session};
use crate::conversion::ComparisonSet;
use crate::history::HistoryEntry;
use crate::i18n::{self, keys, Translator};

/// 비교 차트 막대의 최대 길이(문자 수).
const CHART_WIDTH: usize = 40;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Presets,
    History,
    ClearHistory,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 표준 입력에서 선택값을 읽는다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    select_menu(tr, &mut io::stdin().lock())
}

/// 메인 메뉴를 표시하고 `input`에서 선택값을 읽는다. 입력이 끝나면 `Exit`.
pub fn select_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_PRESETS,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_CLEAR_HISTORY,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::InputClosed) => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Presets),
            "3" => return Ok(MenuChoice::History),
            "4" => return Ok(MenuChoice::ClearHistory),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert(session: &mut Session) -> Result<(), AppError> {
    let tr = session.translator.clone();
    println!("{}", tr.t(keys::CONVERT_HEADING));

    let categories: Vec<String> = session
        .registry
        .categories()
        .into_iter()
        .map(String::from)
        .collect();
    if categories.is_empty() {
        return Ok(());
    }
    println!("{}", tr.t(keys::CONVERT_CATEGORY_LIST));
    print_numbered(&categories);
    let category = &categories[select_index(&tr, tr.t(keys::PROMPT_SELECT), categories.len())?];

    let value = read_f64(&tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let names = unit_names(session, category)?;
    if names.is_empty() {
        return Ok(());
    }
    println!("{}", tr.tf(keys::CONVERT_UNIT_LIST, &[("category", category.clone())]));
    print_numbered(&names);
    let from = &names[select_index(&tr, tr.t(keys::CONVERT_PROMPT_FROM_UNIT), names.len())?];
    let to = &names[select_index(&tr, tr.t(keys::CONVERT_PROMPT_TO_UNIT), names.len())?];

    convert_and_print(session, category, value, from, to)
}

/// 프리셋 메뉴를 처리한다. 선택한 프리셋의 값/단위로 변환을 이어간다.
pub fn handle_presets(session: &mut Session) -> Result<(), AppError> {
    let tr = session.translator.clone();
    println!("{}", tr.t(keys::PRESETS_HEADING));

    let preset_categories: Vec<String> = session
        .registry
        .preset_categories()
        .into_iter()
        .map(String::from)
        .collect();
    if preset_categories.is_empty() {
        return Ok(());
    }
    println!("{}", tr.t(keys::LIST_PRESET_CATEGORIES));
    print_numbered(&preset_categories);
    let preset_category = &preset_categories[select_index(
        &tr,
        tr.t(keys::PROMPT_SELECT),
        preset_categories.len(),
    )?];

    let presets = session.registry.presets(preset_category)?.to_vec();
    if presets.is_empty() {
        return Ok(());
    }
    let labels: Vec<String> = presets.iter().map(|p| p.label.clone()).collect();
    print_numbered(&labels);
    let preset = &presets[select_index(&tr, tr.t(keys::PROMPT_SELECT), presets.len())?];

    let (value, unit) = match session.select_preset(preset) {
        Ok(selected) => selected,
        Err(AppError::NoCategoryForUnit(unit)) => {
            println!("{}", tr.tf(keys::PRESETS_NO_CATEGORY, &[("unit", unit)]));
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    println!(
        "{}",
        tr.tf(
            keys::PRESETS_SELECTED,
            &[
                ("label", preset.label.clone()),
                ("value", value.to_string()),
                ("unit", unit.symbol.clone()),
            ],
        )
    );

    let names = unit_names(session, &unit.category)?;
    println!("{}", tr.tf(keys::CONVERT_UNIT_LIST, &[("category", unit.category.clone())]));
    print_numbered(&names);
    let to = &names[select_index(&tr, tr.t(keys::CONVERT_PROMPT_TO_UNIT), names.len())?];

    convert_and_print(session, &unit.category, value, &unit.name, to)
}

/// 최근 변환 기록을 보여준다.
pub fn handle_history(session: &Session) {
    let tr = &session.translator;
    println!("{}", tr.t(keys::HISTORY_HEADING));
    let recent = session
        .history
        .recent(session.config.config.history_display_limit);
    if recent.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for entry in recent {
        println!("{}", format_history_entry(entry));
        println!("{}", entry.timestamp_label());
        println!("---");
    }
}

pub fn handle_clear_history(session: &mut Session) {
    session.history.clear();
    println!("{}", session.translator.t(keys::HISTORY_CLEARED));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(session: &mut Session) -> Result<(), AppError> {
    let tr = session.translator.clone();
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    print_settings(session);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let cfg = &mut session.config.config;
            cfg.scientific_notation = !cfg.scientific_notation;
        }
        "2" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let code = code.trim().to_lowercase();
            if !matches!(code.as_str(), "auto" | "ko" | "en") {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            session.set_language(&code);
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", session.translator.t(keys::SETTINGS_SAVED));
    print_settings(session);
    Ok(())
}

fn print_settings(session: &Session) {
    let tr = &session.translator;
    let cfg = &session.config.config;
    let state = if cfg.scientific_notation {
        tr.t(keys::ON)
    } else {
        tr.t(keys::OFF)
    };
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("scientific", state.to_string()),
                ("language", cfg.language.clone()),
            ],
        )
    );
}

fn convert_and_print(
    session: &mut Session,
    category: &str,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let tr = session.translator.clone();
    if from == to {
        println!("{}", tr.t(keys::CONVERT_SAME_UNIT));
        return Ok(());
    }
    let scientific = session.config.config.scientific_notation;
    match session.convert_and_record(category, value, from, to) {
        Ok(outcome) => {
            println!(
                "{}",
                tr.tf(
                    keys::CONVERT_RESULT,
                    &[
                        ("value", value.to_string()),
                        ("from", from.to_string()),
                        ("result", format_value(outcome.result, scientific)),
                        ("to", to.to_string()),
                    ],
                )
            );
            println!();
            println!(
                "{}",
                tr.tf(
                    keys::COMPARISON_TITLE,
                    &[("value", value.to_string()), ("unit", from.to_string())],
                )
            );
            if outcome.comparison.is_empty() {
                println!("{}", tr.t(keys::COMPARISON_EMPTY));
            } else {
                print!("{}", render_comparison_chart(&outcome.comparison, scientific));
            }
        }
        Err(AppError::Conversion(err)) => {
            println!("{}", tr.t(keys::CONVERT_FAILED));
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

/// 결과값 표기. 지수 표기면 유효숫자 11자리, 아니면 소수점 4자리.
pub fn format_value(value: f64, scientific: bool) -> String {
    if scientific {
        format!("{value:.10e}")
    } else {
        format!("{value:.4}")
    }
}

/// 비교 차트의 막대 라벨용 표기 (소수점 2자리).
fn format_chart_value(value: f64, scientific: bool) -> String {
    if scientific {
        format!("{value:.4e}")
    } else {
        format!("{value:.2}")
    }
}

/// 비교 결과를 텍스트 막대 차트로 그린다. 막대 길이는 |값| / 최대|값| 에 비례한다.
pub fn render_comparison_chart(set: &ComparisonSet, scientific: bool) -> String {
    let name_width = set.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let labels: Vec<String> = set
        .iter()
        .map(|e| format_chart_value(e.value, scientific))
        .collect();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let max = set
        .iter()
        .map(|e| e.value.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (entry, label) in set.iter().zip(&labels) {
        let ratio = if max > 0.0 && entry.value.is_finite() {
            entry.value.abs() / max
        } else {
            0.0
        };
        let bar = "█".repeat((ratio * CHART_WIDTH as f64).round() as usize);
        out.push_str(&format!(
            "{:<name_width$} | {:>label_width$} | {bar}\n",
            entry.name, label
        ));
    }
    out
}

/// 기록 한 줄. 예: `1 meters → 3.2808 feet`
pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "{} {} → {:.4} {}",
        entry.from_value, entry.from_unit, entry.to_value, entry.to_unit
    )
}

fn unit_names(session: &Session, category: &str) -> Result<Vec<String>, AppError> {
    Ok(session
        .registry
        .units(category)?
        .iter()
        .map(|u| u.name.clone())
        .collect())
}

fn print_numbered(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("{:>2}) {item}", i + 1);
    }
}

/// 1부터 시작하는 번호를 입력받아 0 기반 인덱스로 반환한다.
fn select_index(tr: &Translator, prompt: &str, count: usize) -> Result<usize, AppError> {
    loop {
        let sel = read_line(prompt)?;
        match sel.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_line_from(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_finite(&s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 명령줄 값 인자 파서. 대화형 입력과 같이 유한한 수만 받는다.
pub fn parse_finite(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("유한한 수가 아닙니다: {s}")),
        Err(err) => Err(err.to_string()),
    }
}

/// 오류 메시지를 현재 언어의 접두어와 함께 표기한다.
pub fn format_error(tr: &Translator, err: &dyn std::error::Error) -> String {
    i18n::fill_template(
        "{prefix}: {message}",
        &[
            ("prefix", tr.t(keys::ERROR_PREFIX).to_string()),
            ("message", err.to_string()),
        ],
    )
}
