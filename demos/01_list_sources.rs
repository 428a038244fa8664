use newsapi_rs::{ALL, NewsClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client from the NEWSAPI_KEY environment variable.
    let client = NewsClient::from_env()?;

    // 2. All English-language business publishers, any country.
    let sources = client.sources("business", "en", ALL)?;
    println!("--- {} business sources in English ---", sources.len());
    for s in &sources {
        println!(
            "  {:<28} {:<4} {}",
            s.id,
            s.country.as_deref().unwrap_or("-"),
            s.name
        );
    }
    println!();

    // 3. The same request through the builder, narrowed to one country.
    let us_general = client
        .sources_builder()
        .category("general")
        .country("us")
        .fetch()?;
    println!("--- {} general sources in the US ---", us_general.len());
    for s in us_general.iter().take(5) {
        println!("  {}", s.name);
    }

    Ok(())
}
