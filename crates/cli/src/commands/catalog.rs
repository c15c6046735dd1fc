use facecut_core::config::LoadOptions;
use facecut_core::{PageRequest, StyleCatalog, StyleFilter, StyleId};

use crate::commands::{application_failure, load_config, CommandResult, EXIT_INPUT};

pub fn run(filter: StyleFilter, page: PageRequest) -> CommandResult {
    let catalog = match load_catalog("catalog") {
        Ok(catalog) => catalog,
        Err(failure) => return failure,
    };

    let page = catalog.browse(&filter, page);
    CommandResult::success_with_data(
        "catalog",
        format!(
            "showing {} of {} matching styles ({} in catalog)",
            page.styles.len(),
            page.total,
            catalog.len()
        ),
        &page,
    )
}

pub fn show(id: &str) -> CommandResult {
    let catalog = match load_catalog("catalog") {
        Ok(catalog) => catalog,
        Err(failure) => return failure,
    };

    match catalog.get(&StyleId(id.to_owned())) {
        Some(style) => CommandResult::success_with_data("catalog", style.name.clone(), style),
        None => CommandResult::failure(
            "catalog",
            "not_found",
            format!("no style with id `{id}` in the catalog"),
            EXIT_INPUT,
        ),
    }
}

fn load_catalog(command: &str) -> Result<StyleCatalog, CommandResult> {
    let config = load_config(command, LoadOptions::default())?;
    StyleCatalog::load_or_builtin(config.catalog.path.as_deref())
        .map_err(|error| application_failure(command, error.into()))
}
