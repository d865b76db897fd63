//! `formwork countries` command
//!
//! Loads the country list (network or local file), applies the autocomplete
//! filter, and prints the matches.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::cli::CountriesArgs;
use formwork::countries::{filter_countries, CountrySource, FileSource, RestSource};
use formwork::util::diagnostic::{suggestions, CountryFetchError, Diagnostic};
use formwork::util::AppContext;

pub fn execute(args: CountriesArgs, verbose: bool, color: bool) -> Result<()> {
    let mut ctx = AppContext::from_env(verbose, color);

    let source: Box<dyn CountrySource> = match &args.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            if ctx.config.net.offline {
                bail!("offline mode is enabled; pass --file to use a local country list");
            }
            let endpoint = match &args.endpoint {
                Some(raw) => {
                    Url::parse(raw).with_context(|| format!("invalid endpoint: {raw}"))?
                }
                None => ctx.config.country_endpoint()?,
            };
            let timeout = Duration::from_secs(ctx.config.country_timeout());
            Box::new(RestSource::new(endpoint).with_timeout(timeout))
        }
    };

    ctx.directory.load(source.as_ref());

    if let Some(error) = ctx.directory.error() {
        Diagnostic::error("country list unavailable")
            .with_context(error)
            .with_suggestion(suggestions::CHECK_NETWORK)
            .emit(color);
        return Err(CountryFetchError {
            source_name: source.name().to_string(),
            message: error.to_string(),
        }
        .into());
    }

    let term = args.term.as_deref().unwrap_or("");
    let matches = filter_countries(ctx.directory.records(), term);

    if matches.is_empty() {
        println!("no countries match `{term}`");
        return Ok(());
    }

    for country in matches {
        if verbose {
            println!(
                "{} ({}) - {} [flag: {}]",
                country.name,
                country.alpha2_code,
                country.region,
                country.flag().unwrap_or("none")
            );
        } else {
            println!("{} ({})", country.name, country.alpha2_code);
        }
    }

    Ok(())
}
