//! 한 번 실행하고 끝나는 계산 서브커맨드. 서브커맨드가 없으면 대화형 메뉴를 띄운다.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::constants::{ELECTROLYZER_TECHNOLOGIES, TRANSPORT_MODES};
use crate::economics::{self, LcohInput};
use crate::i18n::{keys, Translator};
use crate::production::{self, ElectrolyzerType, HydrogenProductionInput, ProductionType};
use crate::scenario;
use crate::storage;
use crate::transport::{self, TransportType, TransportationCostInput};

#[derive(Debug, Parser)]
#[command(name = "hydrogen_platform_toolbox", version, about = "Hydrogen production, storage and transport calculators")]
pub struct Cli {
    /// 언어(auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    pub lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 수전해 수소 생산량
    Production {
        #[arg(long, allow_negative_numbers = true)]
        energy_kwh: f64,
        #[arg(long, allow_negative_numbers = true)]
        efficiency: f64,
        #[arg(long)]
        electrolyzer: Option<ElectrolyzerType>,
        #[arg(long, allow_negative_numbers = true)]
        temperature_c: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        pressure_bar: Option<f64>,
    },
    /// 물 사용량
    Water {
        #[arg(long, allow_negative_numbers = true)]
        hydrogen_kg: f64,
    },
    /// 탄소 감축량
    Carbon {
        #[arg(long, allow_negative_numbers = true)]
        hydrogen_kg: f64,
        #[arg(long)]
        production_type: Option<ProductionType>,
    },
    /// 수전해 방식별 효율 보정
    Performance {
        #[command(subcommand)]
        kind: PerformanceCommand,
    },
    /// 압축 에너지
    Compression {
        #[arg(long, allow_negative_numbers = true)]
        hydrogen_kg: f64,
        #[arg(long, allow_negative_numbers = true)]
        from_bar: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_bar: f64,
    },
    /// 액화 에너지
    Liquefaction {
        #[arg(long, allow_negative_numbers = true)]
        hydrogen_kg: f64,
    },
    /// 저장 충전율
    Utilization {
        #[arg(long, allow_negative_numbers = true)]
        level_kg: f64,
        #[arg(long, allow_negative_numbers = true)]
        capacity_kg: f64,
    },
    /// 운송비. 모르는 운송 수단 이름은 기본 단가로 계산한다.
    Transport {
        #[arg(long, allow_negative_numbers = true)]
        hydrogen_kg: f64,
        #[arg(long, allow_negative_numbers = true)]
        distance_km: f64,
        #[arg(long)]
        transport_type: Option<String>,
    },
    /// 수소 균등화 비용
    Lcoh {
        #[arg(long, allow_negative_numbers = true)]
        capex_usd: f64,
        #[arg(long, allow_negative_numbers = true)]
        opex_usd: f64,
        #[arg(long, allow_negative_numbers = true)]
        annual_production_kg: f64,
        #[arg(long, allow_negative_numbers = true)]
        lifetime_years: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        discount_rate: Option<f64>,
    },
    /// 에너지 투자 수익비
    Eroi {
        #[arg(long, allow_negative_numbers = true)]
        output_kwh: f64,
        #[arg(long, allow_negative_numbers = true)]
        input_kwh: f64,
    },
    /// 전력-수소-전력 왕복 효율
    RoundTrip {
        #[arg(long, allow_negative_numbers = true)]
        electrolysis: f64,
        #[arg(long, allow_negative_numbers = true)]
        storage: f64,
        #[arg(long, allow_negative_numbers = true)]
        conversion: f64,
    },
    /// 일일 목표 생산량에 필요한 전력과 재생에너지 설비 용량
    Sizing {
        #[arg(long, allow_negative_numbers = true)]
        target_kg_per_day: f64,
        #[arg(long, allow_negative_numbers = true)]
        efficiency: f64,
        #[arg(long, allow_negative_numbers = true)]
        capacity_factor: f64,
    },
    /// 설비 실적 지표(생산 효율, 이용률)
    PlantMetrics {
        #[arg(long, allow_negative_numbers = true)]
        actual_kg: f64,
        #[arg(long, allow_negative_numbers = true)]
        energy_kwh: f64,
        #[arg(long, allow_negative_numbers = true)]
        rated_kw: f64,
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,
    },
    /// TOML 시나리오 평가
    Scenario {
        path: PathBuf,
        /// 결과를 TOML로 출력
        #[arg(long)]
        toml: bool,
    },
    /// 기술 참고 테이블 출력
    Tech,
}

#[derive(Debug, Subcommand)]
pub enum PerformanceCommand {
    Pem {
        #[arg(long, allow_negative_numbers = true)]
        base: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature_c: f64,
        #[arg(long, allow_negative_numbers = true)]
        pressure_bar: f64,
    },
    Alkaline {
        #[arg(long, allow_negative_numbers = true)]
        base: f64,
        #[arg(long, allow_negative_numbers = true)]
        current_density: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature_c: f64,
    },
    Soec {
        #[arg(long, allow_negative_numbers = true)]
        base: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature_c: f64,
    },
}

/// 서브커맨드를 실행하고 결과를 표준 출력에 쓴다.
pub fn run_command(command: Command, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        Command::Production {
            energy_kwh,
            efficiency,
            electrolyzer,
            temperature_c,
            pressure_bar,
        } => {
            let kind = electrolyzer.unwrap_or(cfg.defaults.electrolyzer_type);
            let r = production::calculate_hydrogen_production(HydrogenProductionInput {
                energy_input_kwh: energy_kwh,
                efficiency_percent: efficiency,
                electrolyzer_type: Some(kind),
                temperature_c,
                pressure_bar,
            })?;
            println!("{} {:.3} kg ({kind})", tr.t(keys::RESULT_HYDROGEN), r.hydrogen_produced_kg);
            println!("{} {:.1} L", tr.t(keys::RESULT_WATER), r.water_required_l);
            println!("{} {:.1} kg CO2", tr.t(keys::RESULT_CARBON), r.carbon_offset_kg_co2);
        }
        Command::Water { hydrogen_kg } => {
            let w = production::calculate_water_consumption(hydrogen_kg);
            println!(
                "{} {:.1} L / {:.1} L",
                tr.t(keys::RESULT_WATER_PRACTICAL),
                w.theoretical_l,
                w.practical_l
            );
        }
        Command::Carbon {
            hydrogen_kg,
            production_type,
        } => {
            let kind = production_type.unwrap_or(cfg.defaults.production_type);
            let c = production::calculate_carbon_offset(hydrogen_kg, kind);
            println!("{} {:.1} kg CO2 ({kind})", tr.t(keys::RESULT_CARBON), c.total_offset_kg_co2);
            println!("{} {:.2} kg CO2/kg H2", tr.t(keys::RESULT_OFFSET_PER_KG), c.offset_per_kg);
        }
        Command::Performance { kind } => {
            let adjusted = match kind {
                PerformanceCommand::Pem {
                    base,
                    temperature_c,
                    pressure_bar,
                } => production::calculate_pem_performance(base, temperature_c, pressure_bar),
                PerformanceCommand::Alkaline {
                    base,
                    current_density,
                    temperature_c,
                } => production::calculate_alkaline_performance(base, current_density, temperature_c),
                PerformanceCommand::Soec { base, temperature_c } => {
                    production::calculate_soec_performance(base, temperature_c)
                }
            };
            println!("{} {:.2} %", tr.t(keys::RESULT_ADJUSTED_EFFICIENCY), adjusted);
        }
        Command::Compression {
            hydrogen_kg,
            from_bar,
            to_bar,
        } => {
            let r = storage::calculate_compression_energy(hydrogen_kg, from_bar, to_bar)?;
            println!(
                "{} {:.2} kWh ({:.2} kWh/kg, ratio {:.1})",
                tr.t(keys::RESULT_COMPRESSION),
                r.energy_required_kwh,
                r.energy_per_kg_kwh,
                r.compression_ratio
            );
        }
        Command::Liquefaction { hydrogen_kg } => {
            let kwh = storage::calculate_liquefaction_energy(hydrogen_kg);
            println!("{} {:.2} kWh", tr.t(keys::RESULT_LIQUEFACTION), kwh);
        }
        Command::Utilization {
            level_kg,
            capacity_kg,
        } => {
            let pct = storage::calculate_storage_utilization(level_kg, capacity_kg);
            println!("{} {:.1} %", tr.t(keys::RESULT_UTILIZATION), pct);
        }
        Command::Transport {
            hydrogen_kg,
            distance_km,
            transport_type,
        } => {
            let kind = match transport_type.as_deref() {
                Some(name) => TransportType::from_name(name),
                None => Some(cfg.defaults.transport_type),
            };
            let r = transport::calculate_transportation_cost(TransportationCostInput {
                hydrogen_kg,
                distance_km,
                transport_type: kind,
            })?;
            println!(
                "{} {:.2} USD ({:.3} USD/kg, {:.2} USD/km)",
                tr.t(keys::RESULT_TRANSPORT_COST),
                r.total_cost_usd,
                r.cost_per_kg_usd,
                r.cost_per_km_usd
            );
        }
        Command::Lcoh {
            capex_usd,
            opex_usd,
            annual_production_kg,
            lifetime_years,
            discount_rate,
        } => {
            let r = economics::calculate_lcoh(LcohInput {
                capex_usd,
                annual_opex_usd: opex_usd,
                annual_production_kg,
                lifetime_years: lifetime_years.unwrap_or(cfg.defaults.lifetime_years),
                discount_rate: discount_rate.unwrap_or(cfg.defaults.discount_rate),
            })?;
            println!("{} {:.3} USD/kg", tr.t(keys::RESULT_LCOH), r.lcoh_usd_per_kg);
            println!("{} {:.0} USD", tr.t(keys::RESULT_TOTAL_COST), r.total_npv_usd);
        }
        Command::Eroi {
            output_kwh,
            input_kwh,
        } => {
            println!(
                "{} {:.3}",
                tr.t(keys::RESULT_EROI),
                economics::calculate_eroi(output_kwh, input_kwh)
            );
        }
        Command::RoundTrip {
            electrolysis,
            storage: storage_eff,
            conversion,
        } => {
            let pct = storage::calculate_round_trip_efficiency(electrolysis, storage_eff, conversion);
            println!("{} {pct:.2} %", tr.t(keys::RESULT_ROUND_TRIP));
        }
        Command::Sizing {
            target_kg_per_day,
            efficiency,
            capacity_factor,
        } => {
            let power_kw = production::calculate_power_requirement(target_kg_per_day, efficiency);
            let installed_kw =
                production::calculate_renewable_energy_capacity(power_kw, capacity_factor);
            let check_kg = production::estimate_daily_production(power_kw, efficiency, 24.0);
            println!("{} {power_kw:.1} kW", tr.t(keys::RESULT_AVERAGE_POWER));
            println!("{} {installed_kw:.1} kW", tr.t(keys::RESULT_RENEWABLE_CAPACITY));
            println!("{} {check_kg:.1} kg", tr.t(keys::RESULT_DAILY_ESTIMATE));
        }
        Command::PlantMetrics {
            actual_kg,
            energy_kwh,
            rated_kw,
            hours,
        } => {
            let eff = production::calculate_production_efficiency(actual_kg, energy_kwh);
            let cf = production::calculate_capacity_factor(energy_kwh, rated_kw, hours);
            println!("{} {eff:.2} %", tr.t(keys::RESULT_PRODUCTION_EFFICIENCY));
            println!("{} {cf:.2} %", tr.t(keys::RESULT_CAPACITY_FACTOR));
        }
        Command::Scenario { path, toml } => {
            let plant = scenario::load_scenario(&path)?;
            let report = scenario::evaluate_scenario(&plant)?;
            if toml {
                print!("{}", scenario::report_to_toml(&report)?);
            } else {
                print_report(tr, &report);
            }
        }
        Command::Tech => print_tech_tables(tr),
    }
    Ok(())
}

fn print_report(tr: &Translator, report: &scenario::ScenarioReport) {
    println!("{}: {}", tr.t(keys::SCENARIO_HEADING), report.name);
    println!(
        "{} {:.3} kg/day ({})",
        tr.t(keys::RESULT_HYDROGEN),
        report.daily_production.hydrogen_produced_kg,
        report.electrolyzer_type
    );
    println!(
        "{} {:.1} L / {:.1} L",
        tr.t(keys::RESULT_WATER_PRACTICAL),
        report.daily_production.water_required_l,
        report.practical_water_l
    );
    println!("{} {:.1} kg CO2/day", tr.t(keys::RESULT_CARBON), report.carbon.total_offset_kg_co2);
    if let Some(s) = &report.storage {
        println!(
            "{} {:.1} % (overflow {:.1} kg)",
            tr.t(keys::RESULT_UTILIZATION),
            s.utilization_percent,
            s.overflow_kg
        );
        println!("{}: {:.1} kWh", s.method, s.conditioning_energy_kwh);
    }
    if let Some(t) = &report.transport {
        println!(
            "{} {:.2} USD ({:.3} USD/kg)",
            tr.t(keys::RESULT_TRANSPORT_COST),
            t.total_cost_usd,
            t.cost_per_kg_usd
        );
    }
    println!("{} {:.3} USD/kg", tr.t(keys::RESULT_LCOH), report.lcoh.lcoh_usd_per_kg);
}

fn print_tech_tables(tr: &Translator) {
    println!("{}", tr.t(keys::TECH_ELECTROLYZERS));
    for t in ELECTROLYZER_TECHNOLOGIES {
        println!(
            "  {:<9} {:>5.1} kWh/kg  eff {:.0}-{:.0} %  capex {:.0}-{:.0} USD/kW  {:.0}-{:.0} °C",
            t.name,
            t.energy_per_kg_kwh,
            t.efficiency_percent.min,
            t.efficiency_percent.max,
            t.capex_usd_per_kw.min,
            t.capex_usd_per_kw.max,
            t.operating_temp_c.min,
            t.operating_temp_c.max
        );
    }
    println!("{}", tr.t(keys::TECH_TRANSPORT));
    for m in TRANSPORT_MODES {
        println!(
            "  {:<13} {:.2} USD/(kg·km)  {:.0}-{:.0} km",
            m.name, m.rate_usd_per_kg_km, m.typical_distance_km.min, m.typical_distance_km.max
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_production_subcommand() {
        let cli = Cli::try_parse_from([
            "hydrogen_platform_toolbox",
            "production",
            "--energy-kwh",
            "1000",
            "--efficiency",
            "70",
            "--electrolyzer",
            "soec",
        ])
        .expect("parse");
        match cli.command {
            Some(Command::Production {
                energy_kwh,
                electrolyzer,
                ..
            }) => {
                assert_eq!(energy_kwh, 1000.0);
                assert_eq!(electrolyzer, Some(ElectrolyzerType::Soec));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn negative_inputs_reach_validation() {
        let cli = Cli::try_parse_from([
            "hydrogen_platform_toolbox",
            "production",
            "--energy-kwh",
            "1000",
            "--efficiency",
            "-0.001",
        ])
        .expect("parse");
        let command = cli.command.expect("command");
        let err = run_command(command, &Config::default(), &Translator::new("en"))
            .expect_err("negative efficiency");
        match err {
            AppError::Calc(CalcError::InvalidInput(msg)) => {
                assert_eq!(msg, "Efficiency must be between 0 and 100")
            }
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "hydrogen_platform_toolbox",
            "transport",
            "--hydrogen-kg",
            "-5",
            "--distance-km",
            "-10",
        ])
        .expect("parse");
        assert!(matches!(
            cli.command,
            Some(Command::Transport { hydrogen_kg, distance_km, .. })
                if hydrogen_kg == -5.0 && distance_km == -10.0
        ));
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["hydrogen_platform_toolbox", "--lang", "ko"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.lang, "ko");
    }
}
