use plane_filter_common::config::{Config, ConfigError};
use plane_filter_common::plane::{ImagePlaneDetails, PlaneError};
use plane_filter_predicates::{FilterPredicate, PredicateRegistry, RegistryError};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Plane(#[from] PlaneError),
}

/// Planes that pass `predicate`, in input order.
pub fn matching_planes<'a>(
    predicate: &dyn FilterPredicate<ImagePlaneDetails>,
    planes: &'a [ImagePlaneDetails],
) -> Vec<&'a ImagePlaneDetails> {
    planes.iter().filter(|p| predicate.eval(p)).collect()
}

/// Evaluate the configured predicate over the configured input and return
/// the URLs of the matching planes.
pub fn run(config: &Config, registry: &PredicateRegistry) -> Result<Vec<String>, RunError> {
    let predicate = registry.get(&config.filter.predicate)?;
    let planes = ImagePlaneDetails::read_json_lines(&config.input.path)?;

    let matched = matching_planes(predicate, &planes);
    for plane in &matched {
        debug!(url = plane.url, series = plane.series, index = plane.index, "plane matched");
    }
    info!(
        predicate = predicate.symbol(),
        total = planes.len(),
        matched = matched.len(),
        "filter complete"
    );

    Ok(matched.into_iter().map(|p| p.url.clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plane_filter_common::config::{FilterConfig, InputConfig, LoggingConfig};
    use std::path::PathBuf;

    fn config(predicate: &str, path: PathBuf) -> Config {
        Config {
            filter: FilterConfig {
                predicate: predicate.into(),
            },
            input: InputConfig { path },
            logging: LoggingConfig::default(),
        }
    }

    fn planes() -> Vec<ImagePlaneDetails> {
        vec![
            ImagePlaneDetails::new("file:/a.tif", 0, 0).with_metadata("ColorFormat", "monochrome"),
            ImagePlaneDetails::new("file:/b.tif", 0, 0).with_metadata("ColorFormat", "RGB"),
            ImagePlaneDetails::new("file:/c.tif", 0, 0),
            ImagePlaneDetails::new("file:/d.tif", 1, 2).with_metadata("ColorFormat", "monochrome"),
        ]
    }

    #[test]
    fn matching_keeps_input_order() {
        let registry = PredicateRegistry::with_defaults();
        let planes = planes();
        let matched = matching_planes(registry.get("ismonochrome").unwrap(), &planes);
        let urls: Vec<_> = matched.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["file:/a.tif", "file:/d.tif"]);
    }

    #[test]
    fn run_over_file() {
        let path = std::env::temp_dir()
            .join(format!("plane-filter-run-{}.jsonl", std::process::id()));
        std::fs::write(
            &path,
            concat!(
                "{\"url\":\"file:/a.tif\",\"metadata\":{\"ColorFormat\":\"monochrome\"}}\n",
                "{\"url\":\"file:/b.tif\",\"metadata\":{\"ColorFormat\":\"Monochrome\"}}\n",
                "{\"url\":\"file:/c.tif\",\"metadata\":{\"ColorFormat\":\"RGB\"}}\n",
            ),
        )
        .unwrap();

        let registry = PredicateRegistry::with_defaults();
        let mono = run(&config("ismonochrome", path.clone()), &registry);
        let color = run(&config("iscolor", path.clone()), &registry);
        std::fs::remove_file(&path).ok();

        assert_eq!(mono.unwrap(), vec!["file:/a.tif".to_string()]);
        assert_eq!(color.unwrap(), vec!["file:/c.tif".to_string()]);
    }

    #[test]
    fn unknown_predicate_fails_before_reading_input() {
        let registry = PredicateRegistry::with_defaults();
        let result = run(
            &config("isblue", PathBuf::from("/nonexistent/planes.jsonl")),
            &registry,
        );
        assert!(matches!(result, Err(RunError::Registry(_))));
    }

    #[test]
    fn missing_input_file() {
        let registry = PredicateRegistry::with_defaults();
        let result = run(
            &config("ismonochrome", PathBuf::from("/nonexistent/planes.jsonl")),
            &registry,
        );
        assert!(matches!(result, Err(RunError::Plane(PlaneError::ReadFile(..)))));
    }
}
