use anyhow::Result;
use clap::Parser;
use image::Rgb;
use placeholder_icons::{
    config::{self, OutputTemplate},
    generate_all, manifest, IconConfig, Progress,
};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SizeList(Vec<u32>);

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate placeholder PNG icons for a browser extension"
)]
struct Args {
    /// Icon sizes in pixels, comma separated, each at most 8192. An empty list
    /// generates nothing; a repeated size rewrites the same file.
    #[clap(short, long, value_name = "SIZES", default_value = "16,48,128", value_parser = parse_sizes)]
    sizes: SizeList,

    /// Output directory, created if missing.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Background color (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#3b82f6", value_parser = config::parse_color)]
    background_color: Rgb<u8>,

    /// Circle color (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#ffffff", value_parser = config::parse_color)]
    foreground_color: Rgb<u8>,

    /// File name template; `{size}` is replaced by the icon size.
    #[clap(long, value_name = "TEMPLATE", default_value = "icon-{size}.png", value_parser = parse_template)]
    template: OutputTemplate,

    /// Also write an `icons.json` manifest fragment into the output directory
    #[clap(long)]
    manifest: bool,

    /// Prefix for the paths listed in `icons.json` (e.g. "icons/")
    #[clap(long, value_name = "PREFIX", default_value = "")]
    manifest_prefix: String,
}

fn parse_sizes(value: &str) -> Result<SizeList, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let size = s
                .parse::<u32>()
                .map_err(|_| format!("'{s}' is not a valid icon size"))?;
            if size > config::MAX_ICON_SIZE {
                return Err(format!(
                    "{size} exceeds the {} pixel limit",
                    config::MAX_ICON_SIZE
                ));
            }
            Ok(size)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(SizeList)
}

fn parse_template(value: &str) -> Result<OutputTemplate, String> {
    OutputTemplate::new(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = IconConfig {
        sizes: args.sizes.0,
        background: args.background_color,
        foreground: args.foreground_color,
        output_dir: args.output_dir,
        template: args.template,
    };

    let report = generate_all(&config, |progress| {
        if let Progress::Created { file_name, .. } = progress {
            println!("Created {file_name}");
        }
    })?;

    // The success line comes last so a failed manifest write never follows it.
    if args.manifest {
        let icons = manifest::IconManifest::from_report(&report, &args.manifest_prefix);
        manifest::write_manifest(&config.output_dir, &icons)?;
    }
    println!("Icons created successfully!");

    Ok(())
}
