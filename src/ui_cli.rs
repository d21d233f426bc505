use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::economics::{self, LcohInput};
use crate::i18n::{keys, Translator};
use crate::production::{self, ElectrolyzerType, HydrogenProductionInput, ProductionType};
use crate::storage;
use crate::transport::{self, TransportType, TransportationCostInput};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Production,
    WaterCarbon,
    Performance,
    Storage,
    Transport,
    Economics,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_PRODUCTION,
        keys::MAIN_MENU_WATER_CARBON,
        keys::MAIN_MENU_PERFORMANCE,
        keys::MAIN_MENU_STORAGE,
        keys::MAIN_MENU_TRANSPORT,
        keys::MAIN_MENU_ECONOMICS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 번호를 선택지로 변환한다.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Production),
        "2" => Some(MenuChoice::WaterCarbon),
        "3" => Some(MenuChoice::Performance),
        "4" => Some(MenuChoice::Storage),
        "5" => Some(MenuChoice::Transport),
        "6" => Some(MenuChoice::Economics),
        "7" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 수소 생산량 메뉴를 처리한다.
pub fn handle_production(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRODUCTION_HEADING));
    let energy = read_f64(tr, keys::PROMPT_ENERGY_INPUT)?;
    let efficiency = read_f64(tr, keys::PROMPT_EFFICIENCY)?;
    let kind = read_choice::<ElectrolyzerType>(tr, keys::PROMPT_ELECTROLYZER_TYPE)?
        .unwrap_or(cfg.defaults.electrolyzer_type);
    let temperature = read_optional_f64(tr, keys::PROMPT_TEMPERATURE_OPTIONAL)?;
    let result = production::calculate_hydrogen_production(HydrogenProductionInput {
        energy_input_kwh: energy,
        efficiency_percent: efficiency,
        electrolyzer_type: Some(kind),
        temperature_c: temperature,
        pressure_bar: None,
    })?;
    println!("{} {:.3} kg ({kind})", tr.t(keys::RESULT_HYDROGEN), result.hydrogen_produced_kg);
    println!("{} {:.1} L", tr.t(keys::RESULT_WATER), result.water_required_l);
    println!("{} {:.1} kg CO2", tr.t(keys::RESULT_CARBON), result.carbon_offset_kg_co2);
    Ok(())
}

/// 물 사용량 / 탄소 감축 메뉴를 처리한다.
pub fn handle_water_carbon(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WATER_CARBON_HEADING));
    let kg = read_f64(tr, keys::PROMPT_HYDROGEN_MASS)?;
    let kind = read_choice::<ProductionType>(tr, keys::PROMPT_PRODUCTION_TYPE)?
        .unwrap_or(cfg.defaults.production_type);
    let water = production::calculate_water_consumption(kg);
    let carbon = production::calculate_carbon_offset(kg, kind);
    println!(
        "{} {:.1} L / {:.1} L",
        tr.t(keys::RESULT_WATER_PRACTICAL),
        water.theoretical_l,
        water.practical_l
    );
    println!("{} {:.1} kg CO2 ({kind})", tr.t(keys::RESULT_CARBON), carbon.total_offset_kg_co2);
    println!("{} {:.2} kg CO2/kg H2", tr.t(keys::RESULT_OFFSET_PER_KG), carbon.offset_per_kg);
    Ok(())
}

/// 수전해 효율 보정 메뉴를 처리한다.
pub fn handle_performance(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PERFORMANCE_HEADING));
    println!("{}", tr.t(keys::PERFORMANCE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let adjusted = match sel.trim() {
        "1" => {
            let base = read_f64(tr, keys::PROMPT_BASE_EFFICIENCY)?;
            let t = read_f64(tr, keys::PROMPT_TEMPERATURE)?;
            let p = read_f64(tr, keys::PROMPT_PRESSURE)?;
            production::calculate_pem_performance(base, t, p)
        }
        "2" => {
            let base = read_f64(tr, keys::PROMPT_BASE_EFFICIENCY)?;
            let j = read_f64(tr, keys::PROMPT_CURRENT_DENSITY)?;
            let t = read_f64(tr, keys::PROMPT_TEMPERATURE)?;
            production::calculate_alkaline_performance(base, j, t)
        }
        "3" => {
            let base = read_f64(tr, keys::PROMPT_BASE_EFFICIENCY)?;
            let t = read_f64(tr, keys::PROMPT_TEMPERATURE)?;
            production::calculate_soec_performance(base, t)
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    };
    println!("{} {:.2} %", tr.t(keys::RESULT_ADJUSTED_EFFICIENCY), adjusted);
    Ok(())
}

/// 저장 메뉴를 처리한다.
pub fn handle_storage(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::STORAGE_HEADING));
    println!("{}", tr.t(keys::STORAGE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let kg = read_f64(tr, keys::PROMPT_HYDROGEN_MASS)?;
            let from = read_f64(tr, keys::PROMPT_FROM_PRESSURE)?;
            let to = read_f64(tr, keys::PROMPT_TO_PRESSURE)?;
            let r = storage::calculate_compression_energy(kg, from, to)?;
            println!(
                "{} {:.2} kWh ({:.2} kWh/kg, ratio {:.1})",
                tr.t(keys::RESULT_COMPRESSION),
                r.energy_required_kwh,
                r.energy_per_kg_kwh,
                r.compression_ratio
            );
        }
        "2" => {
            let kg = read_f64(tr, keys::PROMPT_HYDROGEN_MASS)?;
            let kwh = storage::calculate_liquefaction_energy(kg);
            println!("{} {:.2} kWh", tr.t(keys::RESULT_LIQUEFACTION), kwh);
        }
        "3" => {
            let level = read_f64(tr, keys::PROMPT_CURRENT_LEVEL)?;
            let capacity = read_f64(tr, keys::PROMPT_TOTAL_CAPACITY)?;
            let pct = storage::calculate_storage_utilization(level, capacity);
            println!("{} {:.1} %", tr.t(keys::RESULT_UTILIZATION), pct);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 운송비 메뉴를 처리한다.
pub fn handle_transport(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TRANSPORT_HEADING));
    let kg = read_f64(tr, keys::PROMPT_HYDROGEN_MASS)?;
    let km = read_f64(tr, keys::PROMPT_DISTANCE)?;
    let name = read_line(tr.t(keys::PROMPT_TRANSPORT_TYPE))?;
    // 빈 입력은 설정 기본값, 모르는 이름은 기본 단가로 계산한다.
    let kind = if name.trim().is_empty() {
        Some(cfg.defaults.transport_type)
    } else {
        TransportType::from_name(&name)
    };
    let r = transport::calculate_transportation_cost(TransportationCostInput {
        hydrogen_kg: kg,
        distance_km: km,
        transport_type: kind,
    })?;
    println!(
        "{} {:.2} USD ({:.3} USD/kg, {:.2} USD/km)",
        tr.t(keys::RESULT_TRANSPORT_COST),
        r.total_cost_usd,
        r.cost_per_kg_usd,
        r.cost_per_km_usd
    );
    Ok(())
}

/// 경제성 메뉴를 처리한다.
pub fn handle_economics(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ECONOMICS_HEADING));
    println!("{}", tr.t(keys::ECONOMICS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let capex = read_f64(tr, keys::PROMPT_CAPEX)?;
            let opex = read_f64(tr, keys::PROMPT_OPEX)?;
            let annual_kg = read_f64(tr, keys::PROMPT_ANNUAL_PRODUCTION)?;
            let lifetime = read_optional_f64(tr, keys::PROMPT_LIFETIME)?
                .unwrap_or(cfg.defaults.lifetime_years);
            let rate = read_optional_f64(tr, keys::PROMPT_DISCOUNT_RATE)?
                .unwrap_or(cfg.defaults.discount_rate);
            let r = economics::calculate_lcoh(LcohInput {
                capex_usd: capex,
                annual_opex_usd: opex,
                annual_production_kg: annual_kg,
                lifetime_years: lifetime,
                discount_rate: rate,
            })?;
            println!("{} {:.3} USD/kg", tr.t(keys::RESULT_LCOH), r.lcoh_usd_per_kg);
            println!("{} {:.0} USD", tr.t(keys::RESULT_TOTAL_COST), r.total_npv_usd);
        }
        "2" => {
            let output = read_f64(tr, keys::PROMPT_ENERGY_OUTPUT)?;
            let input = read_f64(tr, keys::PROMPT_ENERGY_INPUT)?;
            println!("{} {:.3}", tr.t(keys::RESULT_EROI), economics::calculate_eroi(output, input));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어 설정이 바뀌었으면 `true`를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={} electrolyzer={} production={} transport={} discount={} lifetime={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.defaults.electrolyzer_type,
        cfg.defaults.production_type,
        cfg.defaults.transport_type,
        cfg.defaults.discount_rate,
        cfg.defaults.lifetime_years
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let prompt = match sel.trim() {
        "" => return Ok(false),
        "1" => keys::SETTINGS_PROMPT_LANGUAGE,
        "2" => keys::PROMPT_ELECTROLYZER_TYPE,
        "3" => keys::PROMPT_TRANSPORT_TYPE,
        "4" => keys::PROMPT_PRODUCTION_TYPE,
        "5" => keys::PROMPT_DISCOUNT_RATE,
        "6" => keys::PROMPT_LIFETIME,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(false);
        }
    };
    let value = read_line(tr.t(prompt))?;
    match apply_setting(cfg, &sel, &value) {
        Some(language_changed) => {
            println!("{}", tr.t(keys::SETTINGS_SAVED));
            Ok(language_changed)
        }
        None => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            Ok(false)
        }
    }
}

/// 설정 항목 하나를 반영한다. 빈 값은 변경 없음.
/// 잘못된 항목/값이면 `None`, 그 외에는 언어가 바뀌었는지를 돌려준다.
pub fn apply_setting(cfg: &mut Config, option: &str, value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return Some(false);
    }
    match option.trim() {
        "1" => {
            let changed = cfg.language != value;
            cfg.language = value.to_string();
            return Some(changed);
        }
        "2" => cfg.defaults.electrolyzer_type = value.parse().ok()?,
        "3" => cfg.defaults.transport_type = value.parse().ok()?,
        "4" => cfg.defaults.production_type = value.parse().ok()?,
        "5" => cfg.defaults.discount_rate = positive_number(value)?,
        "6" => cfg.defaults.lifetime_years = positive_number(value)?,
        _ => return None,
    }
    Some(false)
}

fn positive_number(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) `AppError::InputClosed`.
fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 `None`을 돌려주는 숫자 입력.
fn read_optional_f64(tr: &Translator, prompt_key: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 이름으로 선택하는 항목 입력. 빈 입력이면 `None`.
fn read_choice<T: std::str::FromStr>(tr: &Translator, prompt_key: &str) -> Result<Option<T>, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match s.trim().parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
