use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hue_sort::cli::{Action, Args};
use hue_sort::palette_source::source_for;
use hue_sort::pipeline::collect::{check_path, collect_images};
use hue_sort::pipeline::sort::sort_images;
use hue_sort::pipeline::synthesize::generate_images;

fn main() -> Result<()> {
    let args = Args::parse();
    let common = args.action.common();

    let default_filter = if common.debug {
        "hue_sort=debug"
    } else {
        "hue_sort=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let path = check_path(common.path.as_deref());

    let images = match &args.action {
        Action::Generate {
            count,
            filename,
            saturation,
            seed,
            ..
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            generate_images(&path, filename.as_deref(), *count, *saturation, &mut rng)?
        }
        Action::UseExisting { .. } => collect_images(&path)?,
    };

    let source = source_for(common.palette);
    let palette = source.fetch()?;
    info!(source = source.name(), colors = palette.len(), "reference palette ready");

    let report = sort_images(&images, &palette, &common.dest)?;
    for (color, files) in &report.groups {
        info!(color = %color, count = files.len(), "sorted");
    }
    Ok(())
}
