use crate::services::cache::{QueryCache, QueryKey};
use crate::services::dialog::DialogHandle;
use crate::services::submit::{SubmitError, TagForm};
use crate::services::tag_list::TagList;
use crate::HttpTagApi;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub async fn run(config_path: &Path, api_url: Option<&str>, title: &str, list: bool) -> Result<()> {
    let config = super::load_config(config_path, api_url)?;
    let api = Arc::new(HttpTagApi::new(&config.api)?);
    let cache = QueryCache::new();

    let _stale = cache.subscribe(QueryKey::tags(), |key| {
        tracing::info!("Query '{}' is stale, tag list will refetch", key);
    });

    let mut form = TagForm::new(api.clone(), cache.clone(), DialogHandle::new());
    form.set_title(title);

    match form.submit().await {
        Ok(outcome) => {
            println!(
                "Created tag '{}' (slug: {})",
                outcome.tag.title(),
                outcome.tag.slug()
            );
        }
        Err(SubmitError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            anyhow::bail!("Tag was not created");
        }
        Err(e) => return Err(e.into()),
    }

    if list {
        let tags = TagList::new(api, cache).tags().await?;
        super::list::print_tags(&tags);
    }

    Ok(())
}
