use anyhow::{Context, Result};
use tracing::info_span;

use endo_cli::events::log_attributes;
use endo_cli::render::ConversionReport;
use endo_core::{ConversionOptions, EndoscopicConversion};
use endo_ingest::XmlManifestSource;

use crate::cli::{ConvertArgs, OutputFormatArg};
use crate::summary::{print_conversion, print_fields};

pub fn run_fields() -> Result<()> {
    print_fields();
    Ok(())
}

pub fn run_convert(args: &ConvertArgs, log_data: bool) -> Result<()> {
    let manifest = &args.manifest;
    let span = info_span!("convert", manifest = %manifest.display());
    let _guard = span.enter();

    let mut options = ConversionOptions::default();
    if let Some(dir) = &args.base_dir {
        options = options.with_base_dir(dir);
    }
    let conversion = EndoscopicConversion::convert(&XmlManifestSource::new(), manifest, &options)
        .with_context(|| format!("convert {}", manifest.display()))?;

    log_attributes(conversion.attributes(), log_data);

    match args.format {
        OutputFormatArg::Table => print_conversion(manifest, &conversion),
        OutputFormatArg::Json => {
            let json = ConversionReport::new(manifest, &conversion)
                .to_json()
                .context("serialize conversion")?;
            println!("{json}");
        }
    }
    Ok(())
}
