use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::error::CalcError;
use crate::i18n::{self, keys, Translator};
use crate::scenario::ScenarioError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 계산 입력 오류
    Calc(CalcError),
    /// 시나리오 로드/평가 오류
    Scenario(ScenarioError),
    /// 표준 입력이 닫힘(EOF)
    InputClosed,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Calc(e) => write!(f, "{e}"),
            AppError::Scenario(e) => write!(f, "{e}"),
            AppError::InputClosed => write!(f, "input closed"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CalcError> for AppError {
    fn from(value: CalcError) -> Self {
        AppError::Calc(value)
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

/// 설정의 언어 값으로 번역기를 만든다. CLI 플래그가 있으면 우선한다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 설정 메뉴 이후 세션에 적용할 언어 인자.
/// 메뉴에서 언어를 바꿨다면 설정값이 CLI 플래그보다 우선한다.
pub fn session_language(cli_lang: &str, language_changed: bool) -> &str {
    if language_changed {
        "auto"
    } else {
        cli_lang
    }
}

/// 대화형 CLI의 메인 루프를 실행한다.
/// 계산 입력 오류는 메시지만 출력하고 메뉴로 돌아가며, 입력이 끝나면 종료한다.
pub fn run(config: &mut Config, config_path: &Path, cli_lang: &str) -> Result<(), AppError> {
    let mut lang = cli_lang.to_string();
    let mut tr = translator_for(config, &lang);
    loop {
        let choice = match ui_cli::main_menu(&tr) {
            Err(AppError::InputClosed) => MenuChoice::Exit,
            other => other?,
        };
        let outcome = match choice {
            MenuChoice::Production => ui_cli::handle_production(&tr, config),
            MenuChoice::WaterCarbon => ui_cli::handle_water_carbon(&tr, config),
            MenuChoice::Performance => ui_cli::handle_performance(&tr),
            MenuChoice::Storage => ui_cli::handle_storage(&tr),
            MenuChoice::Transport => ui_cli::handle_transport(&tr, config),
            MenuChoice::Economics => ui_cli::handle_economics(&tr, config),
            MenuChoice::Settings => match ui_cli::handle_settings(&tr, config) {
                Ok(changed) => {
                    config.save(config_path)?;
                    if changed {
                        lang = session_language(&lang, changed).to_string();
                        tr = translator_for(config, &lang);
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            },
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(AppError::Calc(e)) => eprintln!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            Err(AppError::InputClosed) => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
            other => other?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn cli_language_survives_untouched_settings() {
        let cfg = Config {
            language: "ko".into(),
            ..Config::default()
        };
        let lang = session_language("en", false);
        assert_eq!(translator_for(&cfg, lang).language(), Language::En);
    }

    #[test]
    fn language_chosen_in_settings_overrides_flag() {
        let cfg = Config {
            language: "ko".into(),
            ..Config::default()
        };
        let lang = session_language("en", true);
        assert_eq!(translator_for(&cfg, lang).language(), Language::Ko);
    }
}
