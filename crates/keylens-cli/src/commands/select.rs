//! `keylens select` / `keylens deselect` commands: one invocation with a
//! single checkbox toggled.

use anyhow::Result;
use keylens_application::ViewerUseCase;

use crate::output;

pub async fn run(
    viewer: &ViewerUseCase,
    category: &str,
    keyword: &str,
    selected: bool,
) -> Result<()> {
    let result = if selected {
        viewer.select(category, keyword).await
    } else {
        viewer.deselect(category, keyword).await
    };

    match result {
        Ok(render) => {
            if selected && render.selection.keyword() != Some(keyword) {
                anyhow::bail!("Keyword '{keyword}' is not in category '{category}'");
            }
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
