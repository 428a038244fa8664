use std::time::Duration;

use newsapi_rs::NewsClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A customized client with a 10-second timeout.
    let key = std::env::var("NEWSAPI_KEY")?;
    let client = NewsClient::builder()
        .api_key(key)
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Business headlines for the US, 5 per page.
    let page = client
        .headlines()
        .country("us")
        .category("business")
        .page_size(5)
        .fetch()?;
    println!("--- {} matching headlines, showing {} ---", page.total_results, page.articles.len());
    for a in &page.articles {
        let when = a
            .published_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  [{when}] {} ({})", a.title.as_deref().unwrap_or("-"), a.source.name);
    }
    println!();

    // 3. Keyword search across every source.
    let search = client.top_headlines(newsapi_rs::ALL, newsapi_rs::ALL, newsapi_rs::ALL, Some("rust"), 10, 1)?;
    println!("--- {} headlines mention 'rust' ---", search.total_results);

    Ok(())
}
