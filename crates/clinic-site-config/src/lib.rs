use chrono::NaiveDate;
use clinic_site_engine::{
    ArticleImages, ChangeFrequency, LocaleError, LocaleSet, PageDescriptor, PublicationDates,
    SiteCatalog,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `base_url`.
pub const SITE_URL_ENV: &str = "SITE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid locale configuration: {0}")]
    Locale(#[from] LocaleError),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid messages directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// A static page as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<NaiveDate>,
}

/// An article as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleConfig {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Site configuration. Every field defaults to the shipped site, so an
/// empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub site_name: String,
    pub locales: Vec<String>,
    pub default_locale: String,
    pub fallback_date: NaiveDate,
    pub fallback_image: String,
    pub messages_dir: PathBuf,
    pub pages: Vec<PageConfig>,
    pub articles: Vec<ArticleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let locales = LocaleSet::default_site();
        let dates = SiteCatalog::publication_dates();
        let images = ArticleImages::default_site();

        let pages = SiteCatalog::main_pages()
            .into_iter()
            .filter_map(|page| match page {
                PageDescriptor::Static(page) => Some(PageConfig {
                    path: page.path,
                    change_frequency: page.change_frequency,
                    priority: page.priority.value(),
                    last_modified: page.last_modified,
                }),
                PageDescriptor::Article(_) => None,
            })
            .collect();

        let articles = SiteCatalog::ARTICLES
            .iter()
            .map(|(slug, _)| ArticleConfig {
                slug: slug.to_string(),
                date: Some(dates.date_for(slug)),
                image: images.get(slug).map(str::to_string),
            })
            .collect();

        Self {
            base_url: "https://global.rakanclinic-tokyo.jp".to_string(),
            site_name: "Rakan Clinic Tokyo".to_string(),
            locales: locales.iter().map(ToString::to_string).collect(),
            default_locale: locales.default_locale().to_string(),
            fallback_date: SiteCatalog::fallback_date(),
            fallback_image: ArticleImages::DEFAULT_FALLBACK.to_string(),
            messages_dir: PathBuf::from("messages"),
            pages,
            articles,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the messages directory
        config.messages_dir =
            Self::expand_path(&config.messages_dir).unwrap_or(config.messages_dir);

        config.normalize_paths();
        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/clinic-site");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Applies `SITE_URL` from the environment when it is set.
    pub fn apply_env(&mut self) {
        self.apply_site_url(std::env::var(SITE_URL_ENV).ok());
    }

    /// Replaces `base_url` with a non-empty override.
    pub fn apply_site_url(&mut self, site_url: Option<String>) {
        if let Some(url) = site_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("base_url overridden from {SITE_URL_ENV}: {url}");
            self.base_url = url.trim().to_string();
        }
    }

    /// Drops trailing slashes from page paths, so `/` becomes the home
    /// page's empty path.
    pub fn normalize_paths(&mut self) {
        for page in &mut self.pages {
            page.path = page.path.trim().trim_end_matches('/').to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url is empty".to_string()));
        }
        self.locale_set()?;

        for page in &self.pages {
            if !(0.0..=1.0).contains(&page.priority) {
                return Err(ConfigError::Invalid(format!(
                    "priority {} of page {:?} is outside 0.0..=1.0",
                    page.priority, page.path
                )));
            }
            if !is_valid_path(&page.path) {
                return Err(ConfigError::Invalid(format!(
                    "page path {:?} must be empty or start with '/', without a trailing '/' or whitespace",
                    page.path
                )));
            }
        }

        if let Some(article) = self.articles.iter().find(|a| !is_valid_slug(&a.slug)) {
            return Err(ConfigError::Invalid(format!(
                "article slug {:?} must be non-empty without '/' or whitespace",
                article.slug
            )));
        }

        let mut routes = BTreeSet::new();
        for page in self.pages() {
            let route = page.route();
            if !routes.insert(route.clone()) {
                return Err(ConfigError::Invalid(format!(
                    "route {route:?} is listed more than once"
                )));
            }
        }
        Ok(())
    }

    pub fn locale_set(&self) -> Result<LocaleSet, ConfigError> {
        Ok(LocaleSet::parse(&self.locales, &self.default_locale)?)
    }

    /// Static pages first, then articles, in file order.
    pub fn pages(&self) -> Vec<PageDescriptor> {
        let pages = self.pages.iter().map(|p| {
            PageDescriptor::page(
                p.path.clone(),
                p.change_frequency,
                p.priority,
                p.last_modified,
            )
        });
        let articles = self
            .articles
            .iter()
            .map(|a| PageDescriptor::article(a.slug.clone()));
        pages.chain(articles).collect()
    }

    pub fn publication_dates(&self) -> PublicationDates {
        let mut dates = PublicationDates::new(self.fallback_date);
        for article in &self.articles {
            match article.date {
                Some(date) => dates.insert(article.slug.clone(), date),
                None => log::warn!(
                    "article {} has no date, using fallback {}",
                    article.slug,
                    self.fallback_date
                ),
            }
        }
        dates
    }

    pub fn article_images(&self) -> ArticleImages {
        let mut images = ArticleImages::new(self.fallback_image.clone());
        for article in &self.articles {
            if let Some(image) = &article.image {
                images.insert(article.slug.clone(), image.clone());
            }
        }
        images
    }

    /// Path of the messages file for `locale`.
    pub fn message_file(&self, locale: &str) -> PathBuf {
        self.messages_dir.join(format!("{locale}.json"))
    }

    /// All `*.json` message files in `messages_dir`, sorted.
    pub fn message_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let pattern = self.messages_dir.join("*.json");
        let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("skipping unreadable message file: {e}");
                    None
                }
            })
            .collect();
        files.sort();
        Ok(files)
    }

    /// Configured locales that have no messages file.
    pub fn missing_catalogs(&self) -> Result<Vec<String>, ConfigError> {
        let present: Vec<String> = self
            .message_files()?
            .iter()
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        Ok(self
            .locales
            .iter()
            .filter(|l| !present.contains(l))
            .cloned()
            .collect())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Empty (home) or `/`-rooted with non-empty segments.
fn is_valid_path(path: &str) -> bool {
    path.is_empty()
        || (path.starts_with('/')
            && path[1..].split('/').all(|segment| !segment.is_empty())
            && !path.contains(char::is_whitespace))
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(|c: char| c == '/' || c.is_whitespace())
}
