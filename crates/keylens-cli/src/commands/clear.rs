//! `keylens clear` command.

use anyhow::Result;
use keylens_application::ViewerUseCase;

use crate::output;

pub async fn run(viewer: &ViewerUseCase, category: &str) -> Result<()> {
    match viewer.clear(category).await {
        Ok(render) => {
            output::print_render(&render);
            Ok(())
        }
        Err(e) if e.is_empty_category() => {
            output::print_empty_category(category);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
