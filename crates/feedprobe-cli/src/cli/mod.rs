//! CLI for feedprobe.

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use feedprobe_core::config::{self, FeedprobeConfig};
use feedprobe_core::transport::CurlTransport;
use feedprobe_core::Locator;
use std::path::PathBuf;

/// Find a site's RSS/Atom feed by probing well-known paths and print it as UTF-8.
#[derive(Debug, Parser)]
#[command(name = "feedprobe")]
#[command(about = "Find and fetch a site's RSS/Atom feed", long_about = None)]
pub struct Cli {
    /// Bare host name of the site, e.g. www.example.tumblr.com.
    pub site: String,

    /// Log every probe attempt (debug level).
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the feed to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read configuration from PATH instead of the XDG config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Probe all candidate paths at once (same result, lower latency).
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    fn load_config(&self) -> Result<FeedprobeConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => config::load_or_init().context("load config")?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(&self) -> Result<()> {
        let cfg = self.load_config()?;
        let locator = Locator::new(CurlTransport::new(cfg.transport.clone()));

        let feed = if self.parallel || cfg.parallel_probes {
            locator.locate_concurrent(&self.site)?
        } else {
            locator.locate(&self.site)?
        };

        let body = feed
            .to_utf8()
            .with_context(|| format!("decode feed from {}{}", self.site, feed.path))?;
        output::write_feed(self.output.as_deref(), &body)
    }

    /// Run and map the outcome to a process exit code (0 or 1).
    pub fn execute(&self) -> i32 {
        match self.run() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("feedprobe error: {:#}", err);
                1
            }
        }
    }
}

#[cfg(test)]
mod tests;
