use appicon_gen::{Config, icon_specs, logger, run_batch_with};

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    logger::init();

    let config = Config::default();
    run_batch_with(&config, &icon_specs(), &config.output_dir)?;

    println!("You can now archive and upload your app to TestFlight.");
    Ok(())
}
