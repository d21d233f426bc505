use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRODUCTION: &str = "main_menu.production";
    pub const MAIN_MENU_WATER_CARBON: &str = "main_menu.water_carbon";
    pub const MAIN_MENU_PERFORMANCE: &str = "main_menu.performance";
    pub const MAIN_MENU_STORAGE: &str = "main_menu.storage";
    pub const MAIN_MENU_TRANSPORT: &str = "main_menu.transport";
    pub const MAIN_MENU_ECONOMICS: &str = "main_menu.economics";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PRODUCTION_HEADING: &str = "production.heading";
    pub const PROMPT_ENERGY_INPUT: &str = "prompt.energy_input";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_ELECTROLYZER_TYPE: &str = "prompt.electrolyzer_type";
    pub const PROMPT_TEMPERATURE_OPTIONAL: &str = "prompt.temperature_optional";
    pub const RESULT_HYDROGEN: &str = "result.hydrogen";
    pub const RESULT_WATER: &str = "result.water";
    pub const RESULT_CARBON: &str = "result.carbon";

    pub const WATER_CARBON_HEADING: &str = "water_carbon.heading";
    pub const PROMPT_HYDROGEN_MASS: &str = "prompt.hydrogen_mass";
    pub const PROMPT_PRODUCTION_TYPE: &str = "prompt.production_type";
    pub const RESULT_WATER_PRACTICAL: &str = "result.water_practical";
    pub const RESULT_OFFSET_PER_KG: &str = "result.offset_per_kg";

    pub const PERFORMANCE_HEADING: &str = "performance.heading";
    pub const PERFORMANCE_OPTIONS: &str = "performance.options";
    pub const PROMPT_BASE_EFFICIENCY: &str = "prompt.base_efficiency";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const PROMPT_CURRENT_DENSITY: &str = "prompt.current_density";
    pub const RESULT_ADJUSTED_EFFICIENCY: &str = "result.adjusted_efficiency";

    pub const STORAGE_HEADING: &str = "storage.heading";
    pub const STORAGE_OPTIONS: &str = "storage.options";
    pub const PROMPT_FROM_PRESSURE: &str = "prompt.from_pressure";
    pub const PROMPT_TO_PRESSURE: &str = "prompt.to_pressure";
    pub const PROMPT_CURRENT_LEVEL: &str = "prompt.current_level";
    pub const PROMPT_TOTAL_CAPACITY: &str = "prompt.total_capacity";
    pub const RESULT_COMPRESSION: &str = "result.compression";
    pub const RESULT_LIQUEFACTION: &str = "result.liquefaction";
    pub const RESULT_UTILIZATION: &str = "result.utilization";

    pub const TRANSPORT_HEADING: &str = "transport.heading";
    pub const PROMPT_DISTANCE: &str = "prompt.distance";
    pub const PROMPT_TRANSPORT_TYPE: &str = "prompt.transport_type";
    pub const RESULT_TRANSPORT_COST: &str = "result.transport_cost";

    pub const ECONOMICS_HEADING: &str = "economics.heading";
    pub const ECONOMICS_OPTIONS: &str = "economics.options";
    pub const PROMPT_CAPEX: &str = "prompt.capex";
    pub const PROMPT_OPEX: &str = "prompt.opex";
    pub const PROMPT_ANNUAL_PRODUCTION: &str = "prompt.annual_production";
    pub const PROMPT_LIFETIME: &str = "prompt.lifetime";
    pub const PROMPT_DISCOUNT_RATE: &str = "prompt.discount_rate";
    pub const PROMPT_ENERGY_OUTPUT: &str = "prompt.energy_output";
    pub const RESULT_LCOH: &str = "result.lcoh";
    pub const RESULT_TOTAL_COST: &str = "result.total_cost";
    pub const RESULT_EROI: &str = "result.eroi";
    pub const RESULT_ROUND_TRIP: &str = "result.round_trip";
    pub const RESULT_AVERAGE_POWER: &str = "result.average_power";
    pub const RESULT_RENEWABLE_CAPACITY: &str = "result.renewable_capacity";
    pub const RESULT_DAILY_ESTIMATE: &str = "result.daily_estimate";
    pub const RESULT_PRODUCTION_EFFICIENCY: &str = "result.production_efficiency";
    pub const RESULT_CAPACITY_FACTOR: &str = "result.capacity_factor";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const TECH_ELECTROLYZERS: &str = "tech.electrolyzers";
    pub const TECH_TRANSPORT: &str = "tech.transport";
    pub const SCENARIO_HEADING: &str = "scenario.heading";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
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
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 값이 우선이며, 영어 번역이 없으면 한국어 문자열로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키 구조를 점으로 이은 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Platform Toolbox ===",
        MAIN_MENU_PRODUCTION => "1) 수소 생산량",
        MAIN_MENU_WATER_CARBON => "2) 물 사용량 / 탄소 감축",
        MAIN_MENU_PERFORMANCE => "3) 수전해 효율 보정",
        MAIN_MENU_STORAGE => "4) 저장(압축/액화/충전율)",
        MAIN_MENU_TRANSPORT => "5) 운송비",
        MAIN_MENU_ECONOMICS => "6) 경제성(LCOH/EROI)",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PRODUCTION_HEADING => "\n-- 수소 생산량 --",
        PROMPT_ENERGY_INPUT => "투입 전력량 [kWh]: ",
        PROMPT_EFFICIENCY => "효율 [%]: ",
        PROMPT_ELECTROLYZER_TYPE => "수전해 방식 (PEM/Alkaline/SOEC, 엔터=기본값): ",
        PROMPT_TEMPERATURE_OPTIONAL => "스택 온도 [°C] (엔터=생략): ",
        RESULT_HYDROGEN => "수소 생산량:",
        RESULT_WATER => "필요 물량:",
        RESULT_CARBON => "CO2 감축량:",
        WATER_CARBON_HEADING => "\n-- 물 사용량 / 탄소 감축 --",
        PROMPT_HYDROGEN_MASS => "수소 질량 [kg]: ",
        PROMPT_PRODUCTION_TYPE => "생산 방식 (green/blue, 엔터=기본값): ",
        RESULT_WATER_PRACTICAL => "물 사용량(이론/실사용):",
        RESULT_OFFSET_PER_KG => "kg당 감축량:",
        PERFORMANCE_HEADING => "\n-- 수전해 효율 보정 --",
        PERFORMANCE_OPTIONS => "1) PEM  2) Alkaline  3) SOEC",
        PROMPT_BASE_EFFICIENCY => "기준 효율 [%]: ",
        PROMPT_TEMPERATURE => "운전 온도 [°C]: ",
        PROMPT_PRESSURE => "운전 압력 [bar]: ",
        PROMPT_CURRENT_DENSITY => "전류 밀도: ",
        RESULT_ADJUSTED_EFFICIENCY => "보정 효율:",
        STORAGE_HEADING => "\n-- 저장 --",
        STORAGE_OPTIONS => "1) 압축 에너지  2) 액화 에너지  3) 충전율",
        PROMPT_FROM_PRESSURE => "흡입 압력 [bar]: ",
        PROMPT_TO_PRESSURE => "토출(저장) 압력 [bar]: ",
        PROMPT_CURRENT_LEVEL => "현재 저장량 [kg]: ",
        PROMPT_TOTAL_CAPACITY => "총 저장 용량 [kg]: ",
        RESULT_COMPRESSION => "압축 에너지:",
        RESULT_LIQUEFACTION => "액화 에너지:",
        RESULT_UTILIZATION => "충전율:",
        TRANSPORT_HEADING => "\n-- 운송비 --",
        PROMPT_DISTANCE => "운송 거리 [km]: ",
        PROMPT_TRANSPORT_TYPE => "운송 수단 (tube_trailer/tanker/pipeline, 엔터=기본값): ",
        RESULT_TRANSPORT_COST => "운송비:",
        ECONOMICS_HEADING => "\n-- 경제성 --",
        ECONOMICS_OPTIONS => "1) LCOH  2) EROI",
        PROMPT_CAPEX => "초기 투자비 [USD]: ",
        PROMPT_OPEX => "연간 운전비 [USD/년]: ",
        PROMPT_ANNUAL_PRODUCTION => "연간 생산량 [kg/년]: ",
        PROMPT_LIFETIME => "설비 수명 [년] (엔터=기본값): ",
        PROMPT_DISCOUNT_RATE => "할인율 [소수, 예 0.08] (엔터=기본값): ",
        PROMPT_ENERGY_OUTPUT => "산출 에너지 [kWh]: ",
        RESULT_LCOH => "LCOH:",
        RESULT_TOTAL_COST => "수명 기간 총 비용:",
        RESULT_EROI => "EROI:",
        RESULT_ROUND_TRIP => "왕복 효율:",
        RESULT_AVERAGE_POWER => "평균 소요 전력:",
        RESULT_RENEWABLE_CAPACITY => "재생에너지 설비 용량:",
        RESULT_DAILY_ESTIMATE => "해당 전력의 PEM 일일 생산량:",
        RESULT_PRODUCTION_EFFICIENCY => "생산 효율(HHV):",
        RESULT_CAPACITY_FACTOR => "이용률:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본값:",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 수전해 방식  3) 기본 운송 수단  4) 기본 생산 방식  5) 할인율  6) 설비 수명",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        TECH_ELECTROLYZERS => "수전해 기술 참고값",
        TECH_TRANSPORT => "운송 수단 참고값",
        SCENARIO_HEADING => "시나리오 평가",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting program.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Platform Toolbox ===",
        MAIN_MENU_PRODUCTION => "1) Hydrogen production",
        MAIN_MENU_WATER_CARBON => "2) Water use / carbon offset",
        MAIN_MENU_PERFORMANCE => "3) Electrolyzer performance",
        MAIN_MENU_STORAGE => "4) Storage (compression/liquefaction/utilization)",
        MAIN_MENU_TRANSPORT => "5) Transportation cost",
        MAIN_MENU_ECONOMICS => "6) Economics (LCOH/EROI)",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_SELECTION => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PRODUCTION_HEADING => "\n-- Hydrogen Production --",
        PROMPT_ENERGY_INPUT => "Energy input [kWh]: ",
        PROMPT_EFFICIENCY => "Efficiency [%]: ",
        PROMPT_ELECTROLYZER_TYPE => "Electrolyzer (PEM/Alkaline/SOEC, enter=default): ",
        PROMPT_TEMPERATURE_OPTIONAL => "Stack temperature [°C] (enter to skip): ",
        RESULT_HYDROGEN => "Hydrogen produced:",
        RESULT_WATER => "Water required:",
        RESULT_CARBON => "CO2 offset:",
        WATER_CARBON_HEADING => "\n-- Water Use / Carbon Offset --",
        PROMPT_HYDROGEN_MASS => "Hydrogen mass [kg]: ",
        PROMPT_PRODUCTION_TYPE => "Production type (green/blue, enter=default): ",
        RESULT_WATER_PRACTICAL => "Water (theoretical/practical):",
        RESULT_OFFSET_PER_KG => "Offset per kg:",
        PERFORMANCE_HEADING => "\n-- Electrolyzer Performance --",
        PERFORMANCE_OPTIONS => "1) PEM  2) Alkaline  3) SOEC",
        PROMPT_BASE_EFFICIENCY => "Base efficiency [%]: ",
        PROMPT_TEMPERATURE => "Operating temperature [°C]: ",
        PROMPT_PRESSURE => "Operating pressure [bar]: ",
        PROMPT_CURRENT_DENSITY => "Current density: ",
        RESULT_ADJUSTED_EFFICIENCY => "Adjusted efficiency:",
        STORAGE_HEADING => "\n-- Storage --",
        STORAGE_OPTIONS => "1) Compression energy  2) Liquefaction energy  3) Utilization",
        PROMPT_FROM_PRESSURE => "Inlet pressure [bar]: ",
        PROMPT_TO_PRESSURE => "Target pressure [bar]: ",
        PROMPT_CURRENT_LEVEL => "Current level [kg]: ",
        PROMPT_TOTAL_CAPACITY => "Total capacity [kg]: ",
        RESULT_COMPRESSION => "Compression energy:",
        RESULT_LIQUEFACTION => "Liquefaction energy:",
        RESULT_UTILIZATION => "Utilization:",
        TRANSPORT_HEADING => "\n-- Transportation Cost --",
        PROMPT_DISTANCE => "Distance [km]: ",
        PROMPT_TRANSPORT_TYPE => "Transport (tube_trailer/tanker/pipeline, enter=default): ",
        RESULT_TRANSPORT_COST => "Transport cost:",
        ECONOMICS_HEADING => "\n-- Economics --",
        ECONOMICS_OPTIONS => "1) LCOH  2) EROI",
        PROMPT_CAPEX => "CAPEX [USD]: ",
        PROMPT_OPEX => "Annual OPEX [USD/yr]: ",
        PROMPT_ANNUAL_PRODUCTION => "Annual production [kg/yr]: ",
        PROMPT_LIFETIME => "Lifetime [years] (enter=default): ",
        PROMPT_DISCOUNT_RATE => "Discount rate [fraction, e.g. 0.08] (enter=default): ",
        PROMPT_ENERGY_OUTPUT => "Energy output [kWh]: ",
        RESULT_LCOH => "LCOH:",
        RESULT_TOTAL_COST => "Lifetime total cost:",
        RESULT_EROI => "EROI:",
        RESULT_ROUND_TRIP => "Round-trip efficiency:",
        RESULT_AVERAGE_POWER => "Average power:",
        RESULT_RENEWABLE_CAPACITY => "Renewable capacity:",
        RESULT_DAILY_ESTIMATE => "PEM daily estimate at that power:",
        RESULT_PRODUCTION_EFFICIENCY => "Production efficiency (HHV):",
        RESULT_CAPACITY_FACTOR => "Capacity factor:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current defaults:",
        SETTINGS_OPTIONS => "1) Language  2) Default electrolyzer  3) Default transport  4) Default production type  5) Discount rate  6) Lifetime",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en): ",
        SETTINGS_SAVED => "Settings saved.",
        TECH_ELECTROLYZERS => "Electrolyzer technology reference",
        TECH_TRANSPORT => "Transport mode reference",
        SCENARIO_HEADING => "Scenario evaluation",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_korean_for_unknown_keys() {
        let tr = Translator::new("en-US");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(tr.t("no.such.key"), "");
    }

    #[test]
    fn aggregate_result_labels_are_translated() {
        let ko = Translator::new("ko");
        let en = Translator::new("en");
        for key in [
            keys::RESULT_ROUND_TRIP,
            keys::RESULT_AVERAGE_POWER,
            keys::RESULT_RENEWABLE_CAPACITY,
            keys::RESULT_DAILY_ESTIMATE,
            keys::RESULT_PRODUCTION_EFFICIENCY,
            keys::RESULT_CAPACITY_FACTOR,
        ] {
            assert!(!ko.t(key).is_empty(), "{key}");
            assert!(!en.t(key).is_empty(), "{key}");
            assert_ne!(ko.t(key), en.t(key), "{key}");
        }
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-GB")), "en");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"Fehler\"\n").expect("map");
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("Fehler"));
    }
}
