use crate::cli::{args::ConfigArgs, config::Settings, global::GlobalArgs};

pub fn handle(
    args: ConfigArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.path {
        let path = Settings::user_config_path().ok_or("Cannot determine config directory")?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.json {
        println!("{}", settings.to_json()?);
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}
