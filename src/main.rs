use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use universal_unit_converter::app::{self, AppError, Session, StartupError};
use universal_unit_converter::{config, i18n, ui_cli};

/// 길이/질량/온도/체적/면적/속도/에너지/동력 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "universal_unit_converter", version, about)]
struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값을 한 단위에서 다른 단위로 변환한다
    Convert {
        #[arg(allow_negative_numbers = true, value_parser = ui_cli::parse_finite)]
        value: f64,
        from: String,
        to: String,
        /// 지수 표기로 출력
        #[arg(long)]
        scientific: bool,
    },
    /// 값을 카테고리의 다른 모든 단위로 나타낸다
    Compare {
        #[arg(allow_negative_numbers = true, value_parser = ui_cli::parse_finite)]
        value: f64,
        from: String,
        /// 생략하면 단위 기호로 추정한다
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        scientific: bool,
    },
    /// 단위 카테고리 목록
    Categories,
    /// 카테고리의 단위 목록
    Units { category: String },
    /// 프리셋 목록
    Presets { category: Option<String> },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = match app::start_session(cli.lang.as_deref(), &cli.config) {
        Ok(session) => session,
        Err(StartupError { translator, error }) => exit_with_error(&translator, &error),
    };
    if let Err(err) = run_command(&mut session, cli.command) {
        exit_with_error(&session.translator, &err);
    }
}

fn exit_with_error(tr: &i18n::Translator, err: &AppError) -> ! {
    eprintln!("{}", ui_cli::format_error(tr, err));
    std::process::exit(1);
}

fn run_command(session: &mut Session, command: Option<Command>) -> Result<(), AppError> {
    let scientific_default = session.config.config.scientific_notation;
    match command {
        None => app::run(session)?,
        Some(Command::Convert {
            value,
            from,
            to,
            scientific,
        }) => app::print_convert(value, &from, &to, scientific || scientific_default)?,
        Some(Command::Compare {
            value,
            from,
            category,
            scientific,
        }) => app::print_compare(
            session,
            value,
            &from,
            category.as_deref(),
            scientific || scientific_default,
        )?,
        Some(Command::Categories) => app::print_categories(session),
        Some(Command::Units { category }) => app::print_units(session, &category)?,
        Some(Command::Presets { category }) => app::print_presets(session, category.as_deref())?,
    }
    Ok(())
}
