use crate::app::{AppContext, QuickfeedError, Result};
use crate::domain::{Article, CategoryFeed};
use crate::session::normalize_word;

pub async fn list_categories(ctx: &AppContext) -> Result<()> {
    let categories = ctx.client.list_categories().await?;

    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }

    for category in categories {
        println!("{}", category);
    }
    Ok(())
}

pub async fn list_news(ctx: &AppContext, category: Option<&str>) -> Result<()> {
    let feed = ctx.aggregator.refresh().await?;

    match category {
        Some(name) => {
            let articles = feed
                .get(name)
                .ok_or_else(|| QuickfeedError::Other(format!("Unknown category: {}", name)))?;
            print_category(name, articles, feed.failed_categories().contains(&name));
        }
        None => print_feed(&feed),
    }
    Ok(())
}

pub async fn show_summary(ctx: &AppContext, link: &str) -> Result<()> {
    let summary = ctx.client.fetch_summary(link).await?;
    println!("{}", summary);
    Ok(())
}

pub async fn define_word(ctx: &AppContext, token: &str) -> Result<()> {
    let word = normalize_word(token);
    if word.is_empty() {
        return Err(QuickfeedError::Other(format!("Nothing to look up in {:?}", token)));
    }

    let meaning = ctx.client.fetch_definition(word).await?;
    println!("{}: {}", word, meaning);
    Ok(())
}

fn print_feed(feed: &CategoryFeed) {
    if feed.is_empty() {
        println!("No categories");
        return;
    }

    for entry in feed.entries() {
        print_category(&entry.name, &entry.articles, entry.failed);
    }

    let failed = feed.failed_categories();
    println!(
        "{} articles in {} categories{}",
        feed.article_count(),
        feed.len(),
        if failed.is_empty() {
            String::new()
        } else {
            format!(" ({} failed: {})", failed.len(), failed.join(", "))
        }
    );
}

fn print_category(name: &str, articles: &[Article], failed: bool) {
    if failed {
        println!("{} (failed to load)", name);
    } else {
        println!("{} ({})", name, articles.len());
    }

    for article in articles {
        println!("  {}  {}", article.published, article.display_title());
        println!("    {}", article.link);
    }
    println!();
}
