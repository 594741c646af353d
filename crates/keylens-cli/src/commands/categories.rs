//! `keylens categories` command.

use anyhow::Result;
use keylens_application::ViewerUseCase;

use crate::output;

pub async fn run(viewer: &ViewerUseCase) -> Result<()> {
    let categories = viewer.categories().await?;
    if categories.is_empty() {
        anyhow::bail!("The catalog has no category values");
    }
    output::print_categories(&categories);
    Ok(())
}
