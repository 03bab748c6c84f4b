//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use mercator_grid::RegionPlan;
use std::env;
use std::io::Write;
use std::process;
use tile_mosaic_core::core::config::{ApplicationCfg, OutputCfg, RegionCfg, DEFAULT_CONFIG};
use tile_mosaic_core::core::{read_config, Config};
use tile_mosaic_core::service::Manifest;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(env_level)) => env_level.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn parse_latlon(value: &str, name: &str) -> Result<(f64, f64), String> {
    let arr = value
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| format!("Error parsing '{}' as pair of float values", name))?;
    match arr.as_slice() {
        [lat, lon] => Ok((*lat, *lon)),
        _ => Err(format!("Expected '{}' as lat,lon", name)),
    }
}

fn parse_arg<T: std::str::FromStr>(args: &ArgMatches<'_>, name: &str) -> Result<Option<T>, String> {
    args.value_of(name)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("Error parsing '{}' as integer value", name))
        })
        .transpose()
}

/// Configuration file merged with command line arguments
fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = if let Some(path) = args.value_of("config") {
        read_config(path)?
    } else {
        let ul = args.value_of("ul").ok_or("Missing '--ul' or '--config'")?;
        let lr = args.value_of("lr").ok_or("Missing '--lr' or '--config'")?;
        let zoom = parse_arg(args, "zoom")?.ok_or("Missing '--zoom' or '--config'")?;
        ApplicationCfg {
            region: RegionCfg {
                upper_left: parse_latlon(ul, "ul")?,
                lower_right: parse_latlon(lr, "lr")?,
                zoom,
                tile_size: 512,
            },
            output: OutputCfg::default(),
            request: None,
        }
    };
    if let Some(ul) = args.value_of("ul") {
        config.region.upper_left = parse_latlon(ul, "ul")?;
    }
    if let Some(lr) = args.value_of("lr") {
        config.region.lower_right = parse_latlon(lr, "lr")?;
    }
    if let Some(zoom) = parse_arg(args, "zoom")? {
        config.region.zoom = zoom;
    }
    if let Some(tile_size) = parse_arg(args, "tilesize")? {
        config.region.tile_size = tile_size;
    }
    if let Some(name) = args.value_of("name") {
        config.output.name = name.to_string();
    }
    debug!("{:?}", config);
    Ok(config)
}

fn plan(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = config_from_args(args)?;
    let plan = RegionPlan::from_config(&config.region)?;
    info!(
        "Planning {} tiles for a {}x{} mosaic",
        plan.tile_count(),
        plan.mosaic_width(),
        plan.mosaic_height()
    );
    println!("{}", plan);
    for tile in plan.tiles().inspect(|tile| debug!("{}", tile)) {
        let (x, y) = tile.grid_position().pixel_offset(plan.output_tile_size());
        println!("{} offset: ({}, {}) center: {}", tile, x, y, tile.center());
    }
    Ok(())
}

fn manifest(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = config_from_args(args)?;
    let plan = RegionPlan::from_config(&config.region)?;
    let manifest = Manifest::new(&plan, &config.output, config.request.as_ref());
    match args.value_of("format").unwrap_or("json") {
        "json" => println!("{}", manifest.to_json()?),
        "csv" => print!("{}", manifest.as_csv()),
        format => return Err(format!("Unknown output format '{}'", format)),
    }
    Ok(())
}

fn genconfig(args: &ArgMatches<'_>) -> Result<(), String> {
    if args.value_of("ul").is_some() || args.value_of("config").is_some() {
        let config = config_from_args(args)?;
        let plan = RegionPlan::from_config(&config.region)?;
        println!("{}", plan.gen_runtime_config());
    } else {
        println!("{}", DEFAULT_CONFIG);
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    let region_args = "-c, --config=[FILE] 'Load from custom config file'
                       --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                       --ul=[lat,lon] 'Upper left corner'
                       --lr=[lat,lon] 'Lower right corner'
                       --zoom=[LEVEL] 'Zoom level (0-20)'
                       --tilesize=[PIXELS] 'Size of requested tiles, multiple of 256 (Default: 512)'
                       --name=[NAME] 'Base name of tile files (Default: map)'";
    let mut app = App::new("tile_mosaic")
        .version(crate_version!())
        .about("plans the map tiles covering a region and their place in the mosaic image")
        .subcommand(
            SubCommand::with_name("plan")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(region_args)
                .about("Show mosaic size and tiles"),
        )
        .subcommand(
            SubCommand::with_name("manifest")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(region_args)
                .args_from_usage("--format=[json|csv] 'Output format (Default: json)'")
                .about("Generate tile manifest with file names, offsets and request URLs"),
        )
        .subcommand(
            SubCommand::with_name("genconfig")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(region_args)
                .about("Generate configuration template"),
        );

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            let result = match matches.subcommand() {
                ("plan", Some(sub_m)) => {
                    init_logger(sub_m);
                    plan(sub_m)
                }
                ("manifest", Some(sub_m)) => {
                    init_logger(sub_m);
                    manifest(sub_m)
                }
                ("genconfig", Some(sub_m)) => {
                    init_logger(sub_m);
                    genconfig(sub_m)
                }
                _ => {
                    let _ = app.print_help();
                    println!("");
                    Ok(())
                }
            };
            if let Err(e) = result {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
