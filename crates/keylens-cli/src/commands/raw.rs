//! `keylens raw` command: dump the catalog as loaded.

use anyhow::Result;
use keylens_application::ViewerUseCase;

use crate::output;

pub async fn run(viewer: &ViewerUseCase) -> Result<()> {
    let records = viewer.raw_records().await?;
    output::print_raw(&records);
    Ok(())
}
