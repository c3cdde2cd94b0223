use std::path::PathBuf;
use std::process;

use order_viewer::api::HttpOrderApi;
use order_viewer::config;
use order_viewer::controller::driver::drive;
use order_viewer::controller::{RegionId, SearchController, SearchState};
use order_viewer::render::text::to_text;
use order_viewer::render::RenderOptions;

const USAGE: &str = "usage: order-lookup [--config <path>] (--recent | <order-uid>)";

enum Target {
    Order(String),
    Recent,
}

fn main() {
    order_viewer::init_tracing("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, target) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("order-lookup: {msg}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let config = match config_path {
        Some(path) => config::load_from(&path),
        None => config::load(),
    };
    let api = match HttpOrderApi::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("order-lookup: {e}");
            process::exit(2);
        }
    };
    let mut controller = SearchController::new(RenderOptions::from(&config.display));

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("order-lookup: failed to create tokio runtime: {e}");
            process::exit(2);
        }
    };

    match target {
        Target::Recent => {
            let effects = controller.load_recent();
            rt.block_on(drive(&mut controller, &api, effects));
            let list = controller.region(RegionId::RecentList);
            if list.is_visible() {
                print!("{}", to_text(list.tree()));
                process::exit(0);
            }
            eprintln!("order-lookup: no recent orders");
            process::exit(1);
        }
        Target::Order(uid) => {
            controller.input_changed(uid);
            let effects = controller.submit();
            if effects.is_empty() {
                eprintln!("order-lookup: order UID is empty");
                process::exit(2);
            }
            rt.block_on(drive(&mut controller, &api, effects));
            match controller.state() {
                SearchState::Success(_) => {
                    print!("{}", to_text(controller.region(RegionId::ResultArea).tree()));
                    process::exit(0);
                }
                SearchState::Error(message) => {
                    eprintln!("order-lookup: {message}");
                    process::exit(1);
                }
                SearchState::Idle | SearchState::Loading => {
                    eprintln!("order-lookup: lookup did not complete");
                    process::exit(2);
                }
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Option<PathBuf>, Target), String> {
    let mut config_path = None;
    let mut target = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => return Err("--config requires a value".to_string()),
            },
            "--recent" => target = Some(Target::Recent),
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown flag '{other}'"));
            }
            uid => {
                if target.is_some() {
                    return Err("expected a single order UID".to_string());
                }
                target = Some(Target::Order(uid.to_string()));
            }
        }
    }

    target
        .map(|t| (config_path, t))
        .ok_or_else(|| "missing order UID".to_string())
}
