use clap::{Parser, Subcommand};

use aircon_sizing_toolbox::{
    app,
    capacity::{self, CapacityInput},
    config, conversion,
    geometry::RoomDimensions,
    quantity::QuantityKind,
    ui_cli,
};

/// 방 냉방 용량 추정 도구. 서브커맨드 없이 실행하면 대화형 메뉴를 연다.
#[derive(Debug, Parser)]
#[command(name = "aircon_sizing_toolbox", version, about = "방 냉방 용량 추정 도구")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 냉방 용량을 한 번에 계산한다
    Calc {
        /// 면적 [평]. --length/--width와 동시에 줄 수 없다
        #[arg(long, conflicts_with_all = ["length", "width"])]
        area: Option<f64>,
        /// 방 가로 [m]
        #[arg(long, requires = "width")]
        length: Option<f64>,
        /// 방 세로 [m]
        #[arg(long, requires = "length")]
        width: Option<f64>,
        /// 천장 높이 [m]
        #[arg(long)]
        height: f64,
        /// 서향 일사 심함
        #[arg(long)]
        west_sun: bool,
        /// 함석 지붕
        #[arg(long)]
        tin_roof: bool,
        /// 최상층
        #[arg(long)]
        top_floor: bool,
        /// 통유리/대형 창
        #[arg(long)]
        large_windows: bool,
        /// 상시 인원
        #[arg(long, default_value_t = 0)]
        people: u32,
    },
    /// 단위를 변환한다 (quantity: area / length / power)
    Convert {
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 커맨드를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command {
        None => app::run(&mut cfg)?,
        Some(Command::Calc {
            area,
            length,
            width,
            height,
            west_sun,
            tin_roof,
            top_floor,
            large_windows,
            people,
        }) => {
            let area_ping = match (area, length, width) {
                (Some(a), _, _) => a,
                (None, Some(l), Some(w)) => RoomDimensions {
                    length_m: l,
                    width_m: w,
                }
                .area_ping(),
                _ => return Err("면적(--area) 또는 가로/세로(--length/--width)를 지정하세요.".into()),
            };
            let input = CapacityInput {
                area_ping,
                height_m: height,
                west_sun,
                tin_roof,
                top_floor,
                large_windows,
                people_count: people,
            };
            let result = capacity::compute_capacity_checked(input, &cfg.rates)?;
            ui_cli::print_result(&result);
        }
        Some(Command::Convert {
            quantity,
            value,
            from,
            to,
        }) => {
            let kind = match quantity.to_ascii_lowercase().as_str() {
                "area" => QuantityKind::Area,
                "length" => QuantityKind::Length,
                "power" => QuantityKind::Power,
                other => return Err(format!("지원하지 않는 물리량: {other}").into()),
            };
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
        }
    }
    Ok(())
}
