use crate::models::Tag;
use crate::services::cache::QueryCache;
use crate::services::tag_list::TagList;
use crate::HttpTagApi;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub async fn run(config_path: &Path, api_url: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path, api_url)?;
    let api = Arc::new(HttpTagApi::new(&config.api)?);

    let tags = TagList::new(api, QueryCache::new()).tags().await?;
    print_tags(&tags);
    Ok(())
}

pub fn print_tags(tags: &[Tag]) {
    if tags.is_empty() {
        println!("No tags");
        return;
    }

    let max_slug_len = tags.iter().map(|t| t.slug.len()).max().unwrap_or(0);
    for tag in tags {
        println!(
            "{:width$}  {}  ({} video(s))",
            tag.slug,
            tag.title,
            tag.amount_of_videos,
            width = max_slug_len
        );
    }
}
