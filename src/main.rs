use chaos_game::{
    CliRenderController, HitColourMapKinds, PpmFilePresenter, PresetKinds, RenderConfig,
};

const DEFAULT_OUTPUT: &str = "output/chaos_game.ppm";

fn usage() -> String {
    let presets: Vec<&str> = PresetKinds::ALL.iter().map(|p| p.cli_name()).collect();
    let colour_maps: Vec<&str> = HitColourMapKinds::ALL
        .iter()
        .map(|c| c.cli_name())
        .collect();

    format!(
        "usage: chaos_game [{}] [output.ppm] [steps] [{}]",
        presets.join("|"),
        colour_maps.join("|")
    )
}

fn parse_config(args: &[String]) -> Result<(RenderConfig, String), Box<dyn std::error::Error>> {
    let mut config = RenderConfig::default();

    if let Some(name) = args.first() {
        config.preset = PresetKinds::from_name(name)
            .ok_or_else(|| format!("unknown preset '{}'\n{}", name, usage()))?;
    }

    let output = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    if let Some(steps) = args.get(2) {
        config.steps = steps
            .parse()
            .map_err(|err| format!("invalid step count '{}': {}\n{}", steps, err, usage()))?;
    }

    if let Some(name) = args.get(3) {
        config.colour_map = HitColourMapKinds::from_name(name)
            .ok_or_else(|| format!("unknown colour map '{}'\n{}", name, usage()))?;
    }

    Ok((config, output))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, output) = parse_config(&args)?;

    if let Some(parent) = std::path::Path::new(&output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), config);

    controller.generate()?;
    controller.write(&output)?;
    println!("Saved to {}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let (config, output) = parse_config(&[]).unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(output, DEFAULT_OUTPUT);
    }

    #[test]
    fn test_parses_preset_output_and_steps() {
        let (config, output) = parse_config(&args(&["julia", "out/j.ppm", "1000"])).unwrap();

        assert_eq!(config.preset, PresetKinds::Julia);
        assert_eq!(config.steps, 1000);
        assert_eq!(config.colour_map, HitColourMapKinds::DensityGradient);
        assert_eq!(output, "out/j.ppm");
    }

    #[test]
    fn test_parses_colour_map() {
        let (config, _) = parse_config(&args(&["fern", "out.ppm", "10", "binary"])).unwrap();

        assert_eq!(config.colour_map, HitColourMapKinds::Binary);
    }

    #[test]
    fn test_rejects_unknown_colour_map() {
        let err = parse_config(&args(&["fern", "out.ppm", "10", "fire"])).unwrap_err();

        assert!(err.to_string().starts_with("unknown colour map 'fire'"));
        assert!(err.to_string().contains("[density|binary]"));
    }

    #[test]
    fn test_rejects_unknown_preset() {
        assert!(parse_config(&args(&["mandelbrot"])).is_err());
    }

    #[test]
    fn test_rejects_invalid_steps() {
        assert!(parse_config(&args(&["fern", "out.ppm", "many"])).is_err());
    }
}
