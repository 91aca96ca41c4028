//! CLI command definitions and handlers

use clap::{Args, Subcommand};
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::config::ClientConfig;

/// Credentials and endpoint flags shared by every command
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Subscription key (defaults to MSTRANSLATOR_KEY)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Subscription region (defaults to MSTRANSLATOR_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Service base URL (defaults to MSTRANSLATOR_URL, then the public endpoint)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

impl ConnectionArgs {
    /// Build the client configuration, falling back to the environment
    pub fn into_config(self, verbose: bool) -> anyhow::Result<ClientConfig> {
        let mut config = match (self.key, self.region) {
            (Some(key), Some(region)) => ClientConfig::new(key, region),
            (key, region) => {
                let mut env = ClientConfig::from_env()?;
                if let Some(key) = key {
                    env.subscription_key = key;
                }
                if let Some(region) = region {
                    env.region = region;
                }
                env
            }
        };

        if let Some(url) = self.url {
            config.base_url = url;
        } else if config.base_url.is_empty() {
            config.base_url = std::env::var("MSTRANSLATOR_URL").unwrap_or_default();
        }

        if verbose {
            config = config.with_debug(std::io::stderr());
        }

        Ok(config)
    }
}

/// Commands for the translator CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Text to translate
        text: String,

        /// Target language (required)
        #[arg(short, long)]
        to: String,

        /// Source language (auto-detect if not specified)
        #[arg(short, long, default_value = "")]
        from: String,
    },

    /// Detect the language of text
    Detect {
        /// Text to inspect
        text: String,
    },
}

/// Handle translate command
pub async fn handle_translate(
    client: &TranslationClient,
    text: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    info!("Translating {} chars to {}", text.chars().count(), to);

    let result = client.translate_detailed(&text, &from, &to).await?;
    if let Some(detected) = &result.detected_language {
        info!("Detected source language: {} ({})", detected.language, detected.score);
    }

    println!("{}", result.translated_text);
    Ok(())
}

/// Handle detect command
pub async fn handle_detect(client: &TranslationClient, text: String) -> anyhow::Result<()> {
    let result = client.detect(&text).await?;
    println!("{}", result);
    Ok(())
}
