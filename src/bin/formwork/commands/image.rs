//! `formwork image` command

use anyhow::Result;

use crate::cli::ImageArgs;
use formwork::image::{data_uri_subtype, read_to_data_uri};

pub fn execute(args: ImageArgs) -> Result<()> {
    let uri = read_to_data_uri(&args.path)?;

    if args.summary {
        let subtype = data_uri_subtype(&uri).unwrap_or("unknown");
        println!("media type: image/{subtype}");
        println!("data-uri length: {} bytes", uri.len());
    } else {
        println!("{uri}");
    }

    Ok(())
}
