//! Command-line interface for pretalx-md.
//!
//! Running without a subcommand generates pages for every category.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::adapters::PretalxClient;
use crate::config::{load_config, ResolvedConfig};
use crate::core::{ContentGenerator, ContentWriter};
use crate::domain::ContentCategory;
use crate::render::slugify;

/// pretalx-md - Markdown pages for confirmed pretalx submissions
#[derive(Parser, Debug)]
#[command(name = "pretalx-md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `.env` and receiving `content/`
    #[arg(long, global = true, env = "PRETALX_MD_HOME", default_value = ".")]
    pub base_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch confirmed submissions and write one page each
    Generate {
        /// Only generate these categories (default: all)
        #[arg(short, long, value_enum)]
        category: Vec<CategoryArg>,
    },

    /// Print the slug for a title
    Slug {
        /// Talk title
        title: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Category for CLI (maps to ContentCategory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Talks
    Palestras,

    /// Short tutorials
    Tutoriais,
}

impl From<CategoryArg> for ContentCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Palestras => ContentCategory::Palestras,
            CategoryArg::Tutoriais => ContentCategory::Tutoriais,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            None => generate(&self.base_dir, &[]).await,
            Some(Commands::Generate { category }) => generate(&self.base_dir, &category).await,
            Some(Commands::Slug { title }) => {
                println!("{}", slugify(&title));
                Ok(())
            }
            Some(Commands::Config) => show_config(&self.base_dir),
        }
    }
}

/// Categories to process, keeping the canonical order and dropping repeats
fn selected_categories(requested: &[CategoryArg]) -> Vec<ContentCategory> {
    if requested.is_empty() {
        return ContentCategory::ALL.to_vec();
    }

    let requested: Vec<ContentCategory> = requested.iter().copied().map(Into::into).collect();
    ContentCategory::ALL
        .into_iter()
        .filter(|c| requested.contains(c))
        .collect()
}

/// Run the full fetch-and-write pipeline
async fn generate(base_dir: &Path, requested: &[CategoryArg]) -> Result<()> {
    let config = load_config(base_dir)?;

    let client = PretalxClient::new(config.credentials.clone());
    let writer = ContentWriter::new(&config.content_dir, &config.front_matter_date);
    let generator = ContentGenerator::new(client, writer);

    let summary = generator.run(&selected_categories(requested)).await?;
    for report in &summary.categories {
        info!(category = %report.category, files = report.files.len(), "Category done");
    }

    Ok(())
}

/// Show resolved configuration
fn show_config(base_dir: &Path) -> Result<()> {
    let config = load_config(base_dir)?;
    print!("{}", describe_config(&config));
    Ok(())
}

fn describe_config(config: &ResolvedConfig) -> String {
    let token = if config.credentials.token.is_empty() {
        "(not set)"
    } else {
        "(set)"
    };
    let api_url = if config.credentials.api_url.is_empty() {
        "(not set)"
    } else {
        config.credentials.api_url.as_str()
    };
    let config_file = config
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let mut out = String::new();
    out.push_str(&format!("Base directory: {}\n", config.base_dir.display()));
    out.push_str(&format!("Config file:    {}\n", config_file));
    out.push_str(&format!("API URL:        {}\n", api_url));
    out.push_str(&format!("Token:          {}\n", token));
    out.push_str(&format!("Front matter date: {}\n", config.front_matter_date));
    out.push_str("Output directories:\n");
    for category in ContentCategory::ALL {
        out.push_str(&format!(
            "  {:<10} {} (submission type {})\n",
            category.to_string(),
            config.content_dir_for(category).display(),
            category.submission_type()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Credentials;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["pretalx-md"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_with_categories() {
        let cli =
            Cli::try_parse_from(["pretalx-md", "generate", "-c", "tutoriais", "-c", "palestras"])
                .unwrap();
        match cli.command {
            Some(Commands::Generate { category }) => {
                assert_eq!(category, vec![CategoryArg::Tutoriais, CategoryArg::Palestras]);
                assert_eq!(selected_categories(&category), ContentCategory::ALL.to_vec());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_selected_categories_default_and_filter() {
        assert_eq!(selected_categories(&[]), ContentCategory::ALL.to_vec());
        assert_eq!(
            selected_categories(&[CategoryArg::Tutoriais, CategoryArg::Tutoriais]),
            vec![ContentCategory::Tutoriais]
        );
    }

    #[test]
    fn test_describe_config_redacts_token() {
        let config = ResolvedConfig {
            base_dir: PathBuf::from("/site"),
            content_dir: PathBuf::from("/site/content"),
            credentials: Credentials {
                token: "Token s3cr3t".to_string(),
                api_url: String::new(),
            },
            front_matter_date: "2023-12-03 10:20".to_string(),
            config_file: None,
        };

        let out = describe_config(&config);
        assert!(!out.contains("s3cr3t"));
        assert!(out.contains("Token:          (set)"));
        assert!(out.contains("API URL:        (not set)"));
        assert!(out.contains("/site/content/tutoriais"));
    }
}
