//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::Musoclef;

/// List site content by type
pub fn run(site: &Musoclef, content_type: &str) -> Result<()> {
    for line in lines(site, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed by [`run`]
pub fn lines(site: &Musoclef, content_type: &str) -> Result<Vec<String>> {
    let store = &site.store;
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" => {
            out.push(format!("Posts ({}):", store.len()));
            for post in store.list_summaries() {
                let marker = if store.get_detail(post.id).is_some() {
                    "*"
                } else {
                    " "
                };
                out.push(format!(
                    " {}{:>3}  {} - {} [{}]",
                    marker, post.id, post.date, post.title, post.category
                ));
            }
        }
        "related" => {
            out.push(format!("Related ({}):", store.list_related().len()));
            for post in store.list_related() {
                out.push(format!(
                    "  {:>3}  {} [{}] {} views, {} shares",
                    post.id, post.title, post.category, post.views, post.shares
                ));
            }
        }
        "tag" | "tags" => {
            let mut tags: HashMap<&str, usize> = HashMap::new();
            for post in store.details() {
                for tag in &post.tags {
                    *tags.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            out.push(format!("Tags ({}):", tags.len()));
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (tag, count) in tags {
                out.push(format!("  {} ({})", tag, count));
            }
        }
        "category" | "categories" => {
            let mut categories: HashMap<&str, usize> = HashMap::new();
            for post in store.list_summaries() {
                *categories.entry(post.category.as_str()).or_insert(0) += 1;
            }
            out.push(format!("Categories ({}):", categories.len()));
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (category, count) in categories {
                out.push(format!("  {} ({})", category, count));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, related, tag, category",
                content_type
            );
        }
    }

    Ok(out)
}
