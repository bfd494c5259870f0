use alpha_key::{
    DEFAULT_ASSETS, DEFAULT_THRESHOLD, Error, PathPair, TRANSPARENT_WHITE, WhiteKeyConfig,
};
use anyhow::{Context, Result};
use derivative::Derivative;
use image::Rgba;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    pub threshold: u8,

    #[derivative(Default(value = "TRANSPARENT_WHITE.0"))]
    pub replacement: [u8; 4],

    #[derivative(Default(value = "assets_default()"))]
    pub assets: Vec<Asset>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    pub input: PathBuf,

    /// Defaults to `input`
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn assets_default() -> Vec<Asset> {
    DEFAULT_ASSETS
        .iter()
        .map(|path| Asset {
            input: PathBuf::from(path),
            output: None,
        })
        .collect()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str::<Config>(&text)
            .with_context(|| format!("parse config {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Command-line values win over the config file
    pub fn apply_overrides(&mut self, threshold: Option<u8>, paths: &[PathBuf]) {
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }

        if !paths.is_empty() {
            self.assets = paths
                .iter()
                .map(|path| Asset {
                    input: path.clone(),
                    output: None,
                })
                .collect();
        }
    }

    pub fn to_white_key(&self) -> alpha_key::Result<WhiteKeyConfig> {
        if self.threshold == u8::MAX {
            return Err(Error::InvalidParameter(
                "threshold 255 can never be exceeded, no pixel would be keyed".to_string(),
            ));
        }

        Ok(WhiteKeyConfig::new()
            .with_threshold(self.threshold)
            .with_replacement(Rgba(self.replacement)))
    }

    pub fn path_pairs(&self) -> Vec<PathPair> {
        if self.assets.is_empty() {
            log::warn!("No assets configured, nothing to do");
        }

        self.assets
            .iter()
            .map(|asset| match &asset.output {
                Some(output) => PathPair::new(&asset.input, output),
                None => PathPair::in_place(&asset.input),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.threshold, 240);
        assert_eq!(config.replacement, [255, 255, 255, 0]);
        assert_eq!(
            config.path_pairs(),
            vec![
                PathPair::in_place("assets/hero_chibi.png"),
                PathPair::in_place("assets/monster_slime.png"),
            ]
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.threshold, 240);
        assert_eq!(config.assets.len(), 2);
    }

    #[test]
    fn test_parse_config() {
        let text = r#"
            threshold = 230
            replacement = [0, 0, 0, 0]

            [[assets]]
            input = "sprites/a.png"

            [[assets]]
            input = "sprites/b.jpg"
            output = "sprites/b.png"
        "#;

        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.threshold, 230);
        assert_eq!(
            config.path_pairs(),
            vec![
                PathPair::in_place("sprites/a.png"),
                PathPair::new("sprites/b.jpg", "sprites/b.png"),
            ]
        );

        let white_key = config.to_white_key().unwrap();
        assert_eq!(white_key.threshold(), 230);
        assert_eq!(white_key.replacement(), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        assert!(toml::from_str::<Config>("threshold = 300").is_err());
        assert!(toml::from_str::<Config>("thresold = 200").is_err());
    }

    #[test]
    fn test_threshold_255_rejected() {
        let config = Config {
            threshold: 255,
            ..Config::default()
        };
        assert!(config.to_white_key().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(Some(200), &[PathBuf::from("x.png")]);

        assert_eq!(config.threshold, 200);
        assert_eq!(config.path_pairs(), vec![PathPair::in_place("x.png")]);

        config.apply_overrides(None, &[]);
        assert_eq!(config.threshold, 200);
        assert_eq!(config.assets.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asset-alpha.toml");
        fs::write(&path, "threshold = 250\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.threshold, 250);

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(missing.is_err());
    }
}
