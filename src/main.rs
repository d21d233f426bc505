use clap::Parser;
use hydrogen_platform_toolbox::cli::{self, Cli};
use hydrogen_platform_toolbox::{app, config, i18n::keys};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    let args = Cli::parse();
    if let Err(err) = try_run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&args.config)?;
    match args.command {
        Some(command) => {
            let tr = app::translator_for(&cfg, &args.lang);
            if let Err(err) = cli::run_command(command, &cfg, &tr) {
                eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
                std::process::exit(1);
            }
            Ok(())
        }
        None => app::run(&mut cfg, &args.config, &args.lang),
    }
}
