use icarus_import::{ExtractorConfig, OutputMode, PageImporter};
use log::{debug, error};
use std::env;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: icarus-import [PATH|-] [all|food|recipe]
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("-");
    let mode = match args.get(2) {
        Some(mode) => mode.parse()?,
        None => OutputMode::Recipe,
    };

    let config = ExtractorConfig::load()?;
    let pretty = config.pretty;
    debug!("{:#?}", config);

    let builder = PageImporter::builder().config(config).mode(mode);
    let builder = if path == "-" {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html)?;
        builder.html(html)
    } else {
        builder.file(path)
    };

    match builder.build() {
        Ok(result) => {
            println!("{}", result.to_json(pretty)?);
            Ok(())
        }
        Err(e) => {
            error!("Unable to extract tables from {path}: {e}");
            Err(e.into())
        }
    }
}
